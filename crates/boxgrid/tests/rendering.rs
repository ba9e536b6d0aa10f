//! End-to-end rendering through the public API.

use boxgrid::{
    render_rows, Align, Border, BorderVisibility, Encoding, RowData, Table, TableConfig,
};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

// ============================================================================
// Layout and borders
// ============================================================================

#[test]
fn scores_table() {
    let output = render_rows(["Name", "Score"], [["Alice", "10"], ["Bob", "7"]]);
    assert_eq!(
        lines(&output),
        vec![
            "+-------+-------+",
            "| Name  | Score |",
            "+-------+-------+",
            "| Alice | 10    |",
            "| Bob   | 7     |",
            "+-------+-------+",
        ]
    );
    assert!(output.ends_with('\n'));
}

#[test]
fn custom_border_and_padding() {
    let config = TableConfig::new().border(Border::Char('=')).padding(2);
    let mut table = Table::with_config(config);
    table.set_headers(["a", "bb"]);
    table.add_row(["ccc", "d"]);
    assert_eq!(
        lines(&table.render()),
        vec![
            "================",
            "=  a    =  bb  =",
            "================",
            "=  ccc  =  d   =",
            "================",
        ]
    );
}

#[test]
fn no_border_table() {
    let config = TableConfig::new().border(Border::None);
    let mut table = Table::with_config(config);
    table.set_headers(["k", "v"]);
    table.add_row(["key", "value"]);
    table.add_separator();
    table.add_row(["x", "y"]);
    assert_eq!(table.render(), " k    v     \n key  value \n x    y     \n");
}

#[test]
fn headers_only() {
    let mut table = Table::new();
    table.set_headers(["Only"]);
    assert_eq!(
        lines(&table.render()),
        vec!["+------+", "| Only |", "+------+", "+------+"]
    );
}

#[test]
fn hidden_top_and_bottom() {
    let mut table = Table::from_rows(["h"], [["v"]]);
    table.set_border_visibility(BorderVisibility {
        top: false,
        bottom: false,
        ..BorderVisibility::default()
    });
    assert_eq!(table.render(), "| h |\n+---+\n| v |\n");
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn per_column_alignment() {
    let mut table = Table::new();
    table.set_headers(["left", "right", "center"]);
    table.add_row(["a", "5", "ab"]);
    table.set_align(1, Align::Right);
    table.set_align(2, Align::Center);
    assert_eq!(
        lines(&table.render())[3],
        "| a    |     5 |   ab   |"
    );
}

#[test]
fn default_alignment_from_config() {
    let mut table = Table::with_config(TableConfig::new().align(Align::Right));
    table.add_row(["long value"]);
    table.add_row(["x"]);
    assert_eq!(lines(&table.render())[2], "|          x |");
}

#[test]
fn alignment_applies_to_columns_added_later() {
    let mut table = Table::with_config(TableConfig::new().align(Align::Center));
    table.add_row(["abc"]);
    table.add_col(["1", "22222"], 1, 0);
    assert_eq!(lines(&table.render())[1], "| abc |   1   |");
}

// ============================================================================
// Sparse mutation
// ============================================================================

#[test]
fn add_col_on_two_by_two() {
    let mut table = Table::new();
    table.add_row(["a", "b"]);
    table.add_row(["c", "d"]);
    table.add_col(["x", "y"], 2, 0);
    assert_eq!(table.max_cols(), 3);
    assert_eq!(table.max_rows(), 2);
    assert_eq!(
        lines(&table.render()),
        vec!["+---+---+---+", "| a | b | x |", "| c | d | y |", "+---+---+---+"]
    );
}

#[test]
fn ragged_rows_are_widened() {
    let mut table = Table::new();
    table.add_row(["1"]);
    table.add_row(["1", "2", "3"]);
    table.add_row(["1", "2"]);
    assert_eq!(
        lines(&table.render()),
        vec![
            "+---+---+---+",
            "| 1 |   |   |",
            "| 1 | 2 | 3 |",
            "| 1 | 2 |   |",
            "+---+---+---+",
        ]
    );
}

#[test]
fn prepend_and_insert() {
    let mut table = Table::new();
    table.add_row(["b"]);
    table.add_row(["d"]);
    table.prepend_row(["a"]);
    table.insert_row(["c"], 2);
    assert_eq!(
        lines(&table.render()),
        vec!["+---+", "| a |", "| b |", "| c |", "| d |", "+---+"]
    );
}

#[test]
fn add_data_with_offsets_and_rules() {
    let mut table = Table::new();
    table.add_data(
        vec![RowData::from(["a", "b"]), RowData::Rule, RowData::from(["c"])],
        1,
        1,
    );
    assert_eq!(
        lines(&table.render()),
        vec![
            "+--+---+---+",
            "|  |   |   |",
            "|  | a | b |",
            "+--+---+---+",
            "|  | c |   |",
            "+--+---+---+",
        ]
    );
}

#[test]
fn separator_then_rows() {
    let mut table = Table::new();
    table.add_separator();
    table.add_row(["r1"]);
    table.add_row(["r2"]);
    let output = table.render();
    assert_eq!(
        lines(&output),
        vec!["+----+", "+----+", "| r1 |", "| r2 |", "+----+"]
    );
    assert_eq!(table.max_rows(), 3);
}

// ============================================================================
// Multiline cells
// ============================================================================

#[test]
fn multiline_row_spans_lines() {
    let mut table = Table::new();
    table.set_headers(["id", "notes"]);
    table.add_row(["1", "one\ntwo\nthree"]);
    table.add_row(["2", "single"]);
    assert_eq!(
        lines(&table.render()),
        vec![
            "+----+--------+",
            "| id | notes  |",
            "+----+--------+",
            "| 1  | one    |",
            "|    | two    |",
            "|    | three  |",
            "| 2  | single |",
            "+----+--------+",
        ]
    );
}

#[test]
fn multiline_header() {
    let mut table = Table::new();
    table.set_headers(["unit\nprice", "qty"]);
    table.add_row(["3", "4"]);
    assert_eq!(
        lines(&table.render()),
        vec![
            "+-------+-----+",
            "| unit  | qty |",
            "| price |     |",
            "+-------+-----+",
            "| 3     | 4   |",
            "+-------+-----+",
        ]
    );
}

// ============================================================================
// Filters and totals
// ============================================================================

#[test]
fn filters_and_totals() {
    let mut table = Table::new();
    table.set_headers(["item", "cost"]);
    table.add_row(["tea", "2"]);
    table.add_row(["cake", "3.5"]);
    table.add_filter(1, |v| format!("{v}0"));
    table.calculate_totals_for([1]);
    table.set_align(1, Align::Right);
    assert_eq!(
        lines(&table.render()),
        vec![
            "+------+------+",
            "| item | cost |",
            "+------+------+",
            "| tea  |   20 |",
            "| cake | 3.50 |",
            "+------+------+",
            "|      | 23.5 |",
            "+------+------+",
        ]
    );
}

#[test]
fn totals_skip_rules_and_coerce_text() {
    let mut table = Table::new();
    table.add_row(["5"]);
    table.add_separator();
    table.add_row(["n/a"]);
    table.add_row(["7kg"]);
    table.calculate_totals_for([0]);
    let output = table.render();
    assert_eq!(lines(&output).iter().rev().nth(1), Some(&"| 12  |"));
}

#[test]
fn render_twice_without_mutation() {
    let mut table = Table::from_rows(["a", "b"], [["1", "x\ny"], ["2", "z"]]);
    table.calculate_totals_for([0]);
    table.add_filter(1, |v| v.to_uppercase());
    let first = table.render();
    assert_eq!(first, table.render());
    assert_eq!(first, table.to_string());
}

#[test]
fn render_after_mutation_recomputes_totals() {
    let mut table = Table::new();
    table.add_row(["1"]);
    table.calculate_totals_for([0]);
    let before = table.render();
    table.add_row(["2"]);
    let after = table.render();
    assert!(before.contains("| 1 |\n+---+\n| 1 |"));
    assert!(after.contains("| 2 |\n+---+\n| 3 |"));
    assert_eq!(after.matches("| 3 |").count(), 1);
}

// ============================================================================
// Width measurement
// ============================================================================

#[test]
fn wide_characters_align() {
    let output = render_rows(["名前", "x"], [["Ａ", "y"]]);
    assert_eq!(
        lines(&output),
        vec![
            "+------+---+",
            "| 名前 | x |",
            "+------+---+",
            "| Ａ   | y |",
            "+------+---+",
        ]
    );
}

#[test]
fn ansi_sequences_do_not_count() {
    let styled = "\x1b[1mbold\x1b[0m";
    let output = render_rows(["word"], [[styled]]);
    assert_eq!(lines(&output)[3], format!("| {} |", styled));
}

#[test]
fn byte_width_for_other_encodings() {
    let config = TableConfig::new().encoding(Encoding::from_label("iso-8859-1"));
    let mut table = Table::with_config(config);
    table.add_row(["ab"]);
    table.add_row(["é"]);
    assert_eq!(
        lines(&table.render()),
        vec!["+----+", "| ab |", "| é |", "+----+"]
    );
}
