#![allow(clippy::panic)]

use std::{collections::VecDeque, io};

use serde_json::{Value, json};

use super::{ANALYZE_SECTION, DataAnalysis, VIEW_SECTION, Viewer};
use crate::{
    console::Console,
    data::{ColumnKind, parse_csv},
    menu::{MenuRegistry, NavigationResult, Navigator, View},
    printer::{Output, OutputStyle, Table},
};

const SALES: &str = "\
region,units,price,date
north,10,2.5,2024-01-01
south,20,3.5,2024-01-02
north,30,4.5,2024-02-03
east,,5.5,2025-03-04
";

struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    outputs: Vec<Output>,
}

impl ScriptedConsole {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
            outputs: Vec::new(),
        }
    }

    fn infos(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Info(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    fn last_json(&self) -> &Value {
        self.outputs
            .iter()
            .rev()
            .find_map(|output| match output {
                Output::Json(value) => Some(value),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no JSON output"))
    }

    fn last_table(&self) -> &Table {
        self.outputs
            .iter()
            .rev()
            .find_map(|output| match output {
                Output::Table(table) => Some(table),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no table output"))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn emit(&mut self, output: &Output) {
        self.outputs.push(output.clone());
    }
}

fn workbench() -> DataAnalysis {
    DataAnalysis::new(parse_csv(SALES).unwrap(), Viewer::new(2, OutputStyle::Table))
}

fn empty_workbench() -> DataAnalysis {
    DataAnalysis::new(
        parse_csv("region,units\n").unwrap(),
        Viewer::new(2, OutputStyle::Table),
    )
}

mod registration {
    use super::*;

    fn registry() -> MenuRegistry<DataAnalysis> {
        let mut registry = MenuRegistry::new();
        registry.discover(&workbench());
        registry
    }

    fn labels(entries: Vec<&crate::menu::MenuEntry<DataAnalysis>>) -> Vec<&str> {
        entries.into_iter().map(|entry| entry.label()).collect()
    }

    #[test]
    fn every_action_lives_in_a_section() {
        let registry = registry();

        assert_eq!(registry.len(), 10);
        assert!(registry.actions_in_root().is_empty());
        assert_eq!(registry.sections(), vec![ANALYZE_SECTION, VIEW_SECTION]);
    }

    #[test]
    fn section_listings_are_alphabetical() {
        let registry = registry();

        assert_eq!(
            labels(registry.actions_in_section(VIEW_SECTION)),
            vec![
                "list columns",
                "preview column",
                "preview multiple columns",
                "preview rows"
            ]
        );
        assert_eq!(
            labels(registry.actions_in_section(ANALYZE_SECTION)),
            vec![
                "analyze",
                "analyze distribution",
                "check data quality",
                "correlation analysis",
                "group analysis",
                "time series analysis"
            ]
        );
    }

    #[test]
    fn root_view_offers_both_sections() {
        let registry = registry();
        let navigator = Navigator::new(&registry);

        let rows: Vec<String> = navigator
            .render(&View::Root)
            .into_iter()
            .map(|row| format!("{} {}", row.id, row.label))
            .collect();

        assert_eq!(rows, vec!["1 Analyze ▶", "2 View ▶"]);
        assert!(matches!(
            navigator.resolve("2", &View::Root),
            NavigationResult::EnterSection(section) if section == VIEW_SECTION
        ));
    }
}

mod viewer {
    use super::*;

    #[test]
    fn lists_columns_with_their_kinds() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[]);

        host.list_columns(&mut console).unwrap();

        let table = console.last_table();
        assert_eq!(table.headers(), ["column", "type"]);
        assert_eq!(table.rows()[1], vec!["units", "integer"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn previews_configured_number_of_rows() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[]);

        host.preview_rows(&mut console).unwrap();

        assert_eq!(console.infos(), vec!["Displaying 2 rows of the dataset:"]);
        let table = console.last_table();
        assert_eq!(table.rows()[1], vec!["south", "20", "3.5", "2024-01-02"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn previews_a_single_column() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["price"]);

        host.preview_column(&mut console).unwrap();

        assert_eq!(console.prompts, vec!["Enter the column name to preview: "]);
        let table = console.last_table();
        assert_eq!(table.headers(), ["value"]);
        assert_eq!(table.rows(), [vec!["2.5"], vec!["3.5"]]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["revenue"]);

        let err = host.preview_column(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "column 'revenue' not found");
        assert!(console.outputs.is_empty());
    }

    #[test]
    fn previews_several_columns_in_the_given_order() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[" units , region "]);

        host.preview_multiple_columns(&mut console).unwrap();

        let table = console.last_table();
        assert_eq!(table.headers(), ["units", "region"]);
        assert_eq!(table.rows()[0], vec!["10", "north"]);
    }

    #[test]
    fn reports_every_missing_column_at_once() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["units,foo,bar"]);

        let err = host.preview_multiple_columns(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "columns 'foo, bar' not found");
    }

    #[test]
    fn blank_column_list_is_rejected() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[" , "]);

        let err = host.preview_multiple_columns(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "no column names given");
    }

    #[test]
    fn json_style_emits_records() {
        let mut host = DataAnalysis::new(
            parse_csv(SALES).unwrap(),
            Viewer::new(1, OutputStyle::Json),
        );
        let mut console = ScriptedConsole::new(&[]);

        host.preview_rows(&mut console).unwrap();

        assert_eq!(
            console.last_json(),
            &json!([{"region": "north", "units": "10", "price": "2.5", "date": "2024-01-01"}])
        );
    }

    #[test]
    fn empty_frame_has_no_data_to_preview() {
        let mut host = empty_workbench();
        let mut console = ScriptedConsole::new(&["region"]);

        let err = host.preview_column(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "no data loaded");
        assert!(console.prompts.is_empty());
    }
}

mod analyzer {
    use super::*;

    #[test]
    fn describes_numeric_columns() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[]);

        host.analyze(&mut console).unwrap();

        assert_eq!(console.infos(), vec!["Basic Statistics:"]);
        let summary = console.last_json();
        assert_eq!(summary["units"]["count"], json!(3));
        assert_eq!(summary["units"]["max"], json!(30.0));
        assert!(summary.get("region").is_none());
    }

    #[test]
    fn reports_data_quality() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[]);

        host.check_data_quality(&mut console).unwrap();

        let report = console.last_json();
        assert_eq!(report["total_rows"], json!(4));
        assert_eq!(report["missing_values"]["units"], json!(1));
        assert_eq!(report["duplicate_rows"], json!(0));
    }

    #[test]
    fn groups_by_column_and_aggregates_one_column() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["region", "units"]);

        host.group_analysis(&mut console).unwrap();

        assert_eq!(
            console.prompts,
            vec![
                "Enter column name to group by: ",
                "Enter column to aggregate (press Enter for all numeric columns): "
            ]
        );
        assert!(console.infos().contains(&"Group analysis by 'region':"));
        let summary = console.last_json();
        assert_eq!(summary["north"]["units"]["count"], json!(2));
        assert_eq!(summary["north"]["units"]["mean"], json!(20.0));
        assert!(summary["north"].get("price").is_none());
    }

    #[test]
    fn empty_aggregate_uses_every_numeric_column() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["region", ""]);

        host.group_analysis(&mut console).unwrap();

        let summary = console.last_json();
        assert!(summary["south"].get("units").is_some());
        assert!(summary["south"].get("price").is_some());
    }

    #[test]
    fn unknown_group_column_stops_before_second_prompt() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["city", "units"]);

        let err = host.group_analysis(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "column 'city' not found");
        assert_eq!(console.prompts.len(), 1);
    }

    #[test]
    fn correlates_numeric_columns() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[]);

        host.correlation_analysis(&mut console).unwrap();

        let matrix = console.last_json();
        assert_eq!(matrix["units"]["units"], json!(1.0));
        assert!(matrix["units"].get("price").is_some());
    }

    #[test]
    fn analyzes_distribution_of_a_column() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["region"]);

        host.analyze_distribution(&mut console).unwrap();

        assert!(console.infos().contains(&"Distribution analysis for 'region':"));
        let distribution = console.last_json();
        assert_eq!(distribution["value_counts"]["north"], json!(2));
        assert_eq!(distribution["basic_stats"]["unique_values"], json!(3));
    }

    #[test]
    fn time_series_converts_a_text_column_on_request() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["date"]);

        host.time_series_analysis(&mut console).unwrap();

        assert_eq!(
            host.frame().require("date").unwrap().kind(),
            ColumnKind::DateTime
        );
        assert!(console.infos().contains(&"Time series analysis for 'date':"));
        let series = console.last_json();
        assert_eq!(series["time_range"]["start"], json!("2024-01-01"));
        assert_eq!(series["time_range"]["end"], json!("2025-03-04"));
        assert_eq!(series["temporal_distribution"]["by_year"]["2024"], json!(3));
    }

    #[test]
    fn time_series_cancel_leaves_frame_untouched() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&[""]);

        host.time_series_analysis(&mut console).unwrap();

        assert_eq!(host.frame().require("date").unwrap().kind(), ColumnKind::Text);
        assert_eq!(
            console.infos(),
            vec!["No datetime columns found. Would you like to convert a column to datetime?"]
        );
    }

    #[test]
    fn failed_conversion_is_reported() {
        let mut host = workbench();
        let mut console = ScriptedConsole::new(&["region"]);

        let err = host.time_series_analysis(&mut console).unwrap_err();

        assert_eq!(
            err.to_string(),
            "cannot convert 'north' in column 'region' to datetime"
        );
        assert_eq!(host.frame().require("region").unwrap().kind(), ColumnKind::Text);
    }

    #[test]
    fn several_datetime_columns_ask_which_one() {
        let frame = parse_csv("start,end\n2024-01-01,2024-02-01\n2024-01-05,2024-03-01\n").unwrap();
        let mut host = DataAnalysis::new(frame, Viewer::default());
        let mut setup = ScriptedConsole::new(&["start"]);
        host.time_series_analysis(&mut setup).unwrap();
        crate::data::stats::convert_to_datetime(&mut host.frame, "end").unwrap();

        let mut console = ScriptedConsole::new(&["end"]);
        host.time_series_analysis(&mut console).unwrap();

        assert_eq!(console.prompts, vec!["Enter datetime column name: "]);
        assert_eq!(console.last_json()["time_range"]["end"], json!("2024-03-01"));
    }

    #[test]
    fn statistics_need_data() {
        let mut host = empty_workbench();
        let mut console = ScriptedConsole::new(&[]);

        let err = host.correlation_analysis(&mut console).unwrap_err();

        assert_eq!(err.to_string(), "no data loaded");
    }
}
