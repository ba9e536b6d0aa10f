//! Property-based tests for table rendering using proptest.

use boxgrid::width::display_width;
use boxgrid::{Align, Border, Line, RowData, Table, TableConfig};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,8}",
        "[a-z]{1,4}\n[a-z]{0,4}",
        "[0-9]{1,4}",
        "[日本語]{1,3}",
    ]
}

fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(cell_strategy(), 0..5)
}

fn entry_strategy() -> impl Strategy<Value = RowData> {
    prop_oneof![
        4 => row_strategy().prop_map(RowData::from),
        1 => Just(RowData::Rule),
    ]
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Right), Just(Align::Center)]
}

fn border_strategy() -> impl Strategy<Value = Border> {
    prop_oneof![Just(Border::Ascii), Just(Border::Char('*')), Just(Border::None)]
}

fn build(
    headers: &[String],
    data: Vec<RowData>,
    align: Align,
    border: Border,
    padding: usize,
) -> Table {
    let config = TableConfig::new().align(align).border(border).padding(padding);
    let mut table = Table::with_config(config);
    if !headers.is_empty() {
        table.set_headers(headers.iter().cloned());
    }
    table.add_data(data, 0, 0);
    table
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every output line occupies the same number of display cells.
    #[test]
    fn all_lines_have_equal_width(
        headers in row_strategy(),
        data in prop::collection::vec(entry_strategy(), 0..8),
        align in align_strategy(),
        border in border_strategy(),
        padding in 0usize..3,
    ) {
        let output = build(&headers, data, align, border, padding).render();
        let widths: Vec<usize> = output.lines().map(display_width).collect();
        if let Some(first) = widths.first() {
            prop_assert!(widths.iter().all(|w| w == first), "widths differ: {:?}", widths);
        }
    }

    /// Rendering twice without mutation gives identical output.
    #[test]
    fn render_is_idempotent(
        data in prop::collection::vec(entry_strategy(), 0..8),
        total_cols in prop::collection::btree_set(0usize..5, 0..3),
    ) {
        let mut table = build(&[], data, Align::Left, Border::Ascii, 1);
        table.calculate_totals_for(total_cols);
        table.add_filter(0, |v| v.trim().to_string());
        prop_assert_eq!(table.render(), table.render());
    }

    /// Empty output exactly when there are no headers and no rows.
    #[test]
    fn empty_output_iff_empty_grid(
        headers in row_strategy(),
        data in prop::collection::vec(entry_strategy(), 0..3),
        border in border_strategy(),
    ) {
        let table = build(&headers, data, Align::Left, border, 1);
        let output = table.render();
        prop_assert_eq!(output.is_empty(), table.grid().is_empty());
        if !output.is_empty() {
            prop_assert!(output.ends_with('\n'));
        }
    }

    /// The totals row holds the sum of each totalled column.
    #[test]
    fn totals_are_column_sums(
        values in prop::collection::vec((0i64..1000, 0i64..1000), 1..10),
    ) {
        let mut table = Table::new();
        for (a, b) in &values {
            table.add_row([a.to_string(), b.to_string()]);
        }
        table.calculate_totals_for([0, 1]);

        let layout = table.layout();
        let expected_a: i64 = values.iter().map(|(a, _)| a).sum();
        let expected_b: i64 = values.iter().map(|(_, b)| b).sum();
        prop_assert_eq!(layout.lines[values.len()].clone(), Line::Rule);
        prop_assert_eq!(
            layout.lines.last().and_then(Line::cells).map(<[String]>::to_vec),
            Some(vec![expected_a.to_string(), expected_b.to_string()])
        );
    }

    /// A cell with k segments makes its row exactly k lines tall.
    #[test]
    fn multiline_cells_span_segment_count(
        segments in prop::collection::vec("[a-z]{0,5}", 1..6),
        other in "[A-Z]{1,5}",
    ) {
        let mut table = Table::new();
        table.add_row([segments.join("\n"), other.clone()]);
        let layout = table.layout();
        prop_assert_eq!(layout.lines.len(), segments.len());
        for (k, line) in layout.lines.iter().enumerate() {
            let cells = line.cells().unwrap_or_default();
            prop_assert_eq!(&cells[0], &segments[k]);
            let expected_other = if k == 0 { other.as_str() } else { "" };
            prop_assert_eq!(cells[1].as_str(), expected_other);
        }
    }

    /// Column widths cover every cell after splitting.
    #[test]
    fn widths_cover_every_cell(
        data in prop::collection::vec(row_strategy(), 1..6),
    ) {
        let mut table = Table::new();
        for row in data {
            table.add_row(row);
        }
        let layout = table.layout();
        for cells in layout.lines.iter().filter_map(Line::cells) {
            prop_assert_eq!(cells.len(), layout.num_columns());
            for (cell, width) in cells.iter().zip(&layout.widths) {
                prop_assert!(display_width(cell) <= *width);
            }
        }
    }
}
