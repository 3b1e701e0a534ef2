//! Unit tests for printer module
//!
//! Tests table layout, output styles and colored rendering.

#![allow(clippy::panic)]

use serde_json::json;

use crate::printer::{Colors, Output, OutputStyle, Printer, Table};

fn sample_table() -> Table {
    let mut table = Table::new(["id", "action"]);
    table.push_row(["1", "list columns"]);
    table.push_row(["10", "View ▶"]);
    table
}

#[test]
fn table_pads_columns_to_widest_cell() {
    let rendered = sample_table().render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "id  action");
    assert_eq!(lines[1], "--  ------------");
    assert_eq!(lines[2], "1   list columns");
    assert_eq!(lines[3], "10  View ▶");
}

#[test]
fn table_pads_short_rows() {
    let mut table = Table::new(["a", "b", "c"]);
    table.push_row(["1"]);

    assert_eq!(table.rows()[0], vec!["1", "", ""]);
    assert_eq!(table.len(), 1);
}

#[test]
fn empty_table_renders_header_only() {
    let table = Table::new(["column"]);

    assert!(table.is_empty());
    assert_eq!(table.render(), "column\n------");
}

#[test]
fn table_to_records() {
    let records = sample_table().to_records();

    assert_eq!(
        records,
        json!([
            {"id": "1", "action": "list columns"},
            {"id": "10", "action": "View ▶"},
        ])
    );
}

#[test]
fn records_follow_output_style() {
    let table = sample_table();

    assert!(matches!(
        Output::records(table.clone(), OutputStyle::Table),
        Output::Table(_)
    ));
    assert!(matches!(
        Output::records(table.clone(), OutputStyle::Json),
        Output::Json(_)
    ));

    let Output::Plain(text) = Output::records(table, OutputStyle::Plain) else {
        panic!("plain style should produce plain output");
    };
    assert_eq!(text, "id=1, action=list columns\nid=10, action=View ▶");
}

#[test]
fn uncolored_printer_prefixes_levels() {
    let printer = Printer::new(false);

    assert_eq!(printer.render(&Output::error("boom")), "[ERROR] boom");
    assert_eq!(printer.render(&Output::warning("careful")), "[WARNING] careful");
    assert_eq!(printer.render(&Output::info("Menu")), "Menu");
    assert_eq!(printer.render(&Output::plain("text")), "text");
}

#[test]
fn colored_printer_wraps_errors() {
    let printer = Printer::new(true);
    let rendered = printer.render(&Output::error("boom"));

    assert!(rendered.starts_with(Colors::BRIGHT_RED));
    assert!(rendered.contains("[ERROR] boom"));
    assert!(rendered.ends_with(Colors::RESET));
}

#[test]
fn json_is_pretty_printed() {
    let printer = Printer::new(false);
    let rendered = printer.render(&Output::Json(json!({"total_rows": 3})));

    assert_eq!(rendered, "{\n  \"total_rows\": 3\n}");
}

#[test]
fn output_style_parses_from_toml() {
    #[derive(serde::Deserialize)]
    struct Holder {
        style: OutputStyle,
    }

    let holder: Holder = toml::from_str("style = \"json\"").unwrap();
    assert_eq!(holder.style, OutputStyle::Json);
    assert_eq!(OutputStyle::Plain.to_string(), "plain");
}
