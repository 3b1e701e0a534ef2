//! Unit tests for data module
//!
//! Tests CSV parsing, type inference and the statistics helpers.
//! No filesystem dependencies - all in-memory.

use serde_json::json;

use crate::data::{
    Cell, ColumnKind, DataError, DataFrame, parse_csv,
    stats::{self, round2},
};

const SALES: &str = "\
region,units,price,date
north,10,2.5,2024-01-01
south,20,3.5,2024-01-02
north,30,4.5,2024-02-03
east,,5.5,2025-03-04
";

fn sales() -> DataFrame {
    parse_csv(SALES).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn infers_column_kinds() {
        let frame = sales();

        assert_eq!(frame.row_count(), 4);
        assert_eq!(frame.column_names(), vec!["region", "units", "price", "date"]);
        assert_eq!(frame.require("region").unwrap().kind(), ColumnKind::Text);
        assert_eq!(frame.require("units").unwrap().kind(), ColumnKind::Integer);
        assert_eq!(frame.require("price").unwrap().kind(), ColumnKind::Float);
        assert_eq!(frame.require("date").unwrap().kind(), ColumnKind::Text);
        assert_eq!(frame.require("units").unwrap().cells()[3], Cell::Null);
    }

    #[test]
    fn handles_quotes_and_embedded_separators() {
        let frame =
            parse_csv("name,quote\r\n\"Smith, J\",\"said \"\"hi\"\"\nthen left\"\r\n").unwrap();

        assert_eq!(frame.row_count(), 1);
        assert_eq!(
            frame.require("name").unwrap().cells()[0],
            Cell::Text("Smith, J".to_string())
        );
        assert_eq!(
            frame.require("quote").unwrap().cells()[0],
            Cell::Text("said \"hi\"\nthen left".to_string())
        );
    }

    #[test]
    fn pads_short_rows_and_skips_blank_lines() {
        let frame = parse_csv("a,b,c\n1,2\n\n4,5,6").unwrap();

        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.require("c").unwrap().cells()[0], Cell::Null);
        assert_eq!(frame.require("c").unwrap().cells()[1], Cell::Integer(6));
    }

    #[test]
    fn rejects_long_rows() {
        let error = parse_csv("a,b\n1,2\n3,4,5\n").unwrap_err();

        assert!(matches!(
            error,
            DataError::Malformed {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn rejects_unterminated_quotes() {
        let error = parse_csv("a\n\"open\n").unwrap_err();

        assert!(matches!(error, DataError::UnterminatedQuote { line: 2 }));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_csv(""), Err(DataError::Empty)));
        assert!(matches!(parse_csv("\n\n"), Err(DataError::Empty)));
    }

    #[test]
    fn header_only_frame_is_empty() {
        let frame = parse_csv("a,b\n").unwrap();

        assert!(frame.is_empty());
        assert_eq!(frame.column_count(), 2);
    }

    #[test]
    fn names_blank_and_repeated_headers() {
        let frame = parse_csv("x,,x,x\n1,2,3,4\n").unwrap();

        assert_eq!(frame.column_names(), vec!["x", "Unnamed: 1", "x.1", "x.2"]);
    }

    #[test]
    fn missing_markers_become_null() {
        let frame = parse_csv("v\n1.5\nNA\nnan\n\n2\n").unwrap();
        let column = frame.require("v").unwrap();

        assert_eq!(column.kind(), ColumnKind::Float);
        assert_eq!(column.null_count(), 2);
        assert_eq!(column.numeric_values(), vec![1.5, 2.0]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let frame = parse_csv("\u{feff}id\n1\n").unwrap();

        assert_eq!(frame.column_names(), vec!["id"]);
    }

    #[test]
    fn head_reports_unknown_columns() {
        let frame = sales();

        let error = frame.head(2, &["region", "nope", "other"]).unwrap_err();
        assert_eq!(error.to_string(), "columns 'nope, other' not found");

        let table = frame.head(2, &["units", "region"]).unwrap();
        assert_eq!(table.headers(), ["units", "region"]);
        assert_eq!(table.rows()[1], vec!["20", "south"]);
    }
}

mod statistics {
    use super::*;

    #[test]
    fn describe_matches_sample_statistics() {
        let frame = sales();
        let summary = stats::describe(&frame).unwrap();

        assert_eq!(summary.keys(), vec!["units", "price"]);

        let units = summary.get("units").unwrap();
        assert_eq!(units.count, 3);
        assert_eq!(units.mean, Some(20.0));
        assert_eq!(units.std, Some(10.0));
        assert_eq!(units.min, Some(10.0));
        assert_eq!(units.q1, Some(15.0));
        assert_eq!(units.median, Some(20.0));
        assert_eq!(units.q3, Some(25.0));
        assert_eq!(units.max, Some(30.0));
    }

    #[test]
    fn describe_serializes_percentile_keys_in_order() {
        let summary = stats::describe(&sales()).unwrap();
        let value = serde_json::to_value(&summary).unwrap();

        let keys: Vec<&String> = value["price"].as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
    }

    #[test]
    fn describe_without_numbers_fails() {
        let frame = parse_csv("a\nx\ny\n").unwrap();

        assert!(matches!(
            stats::describe(&frame),
            Err(DataError::NoNumericColumns)
        ));
    }

    #[test]
    fn quality_report_counts_missing_duplicates_and_uniques() {
        let frame = parse_csv("a,b\n1,x\n1,x\n2,\n1,x\n").unwrap();
        let report = stats::quality_report(&frame);

        assert_eq!(report.total_rows, 4);
        assert_eq!(report.total_columns, 2);
        assert_eq!(report.duplicate_rows, 2);
        assert_eq!(report.missing_values.get("b"), Some(&1));
        assert_eq!(report.missing_percentages.get("b"), Some(&25.0));
        assert_eq!(report.unique_values.get("a"), Some(&2));
        assert_eq!(report.unique_values.get("b"), Some(&1));
    }

    #[test]
    fn group_summary_per_group() {
        let summary = stats::group_summary(&sales(), "region", Some("units")).unwrap();

        assert_eq!(summary.keys(), vec!["east", "north", "south"]);

        let north = summary.get("north").unwrap().get("units").unwrap();
        assert_eq!(north.mean, Some(20.0));
        assert_eq!(north.median, Some(20.0));
        assert_eq!(north.std, Some(14.14));
        assert_eq!(north.count, 2);

        let east = summary.get("east").unwrap().get("units").unwrap();
        assert_eq!(east.count, 0);
        assert_eq!(east.mean, None);
    }

    #[test]
    fn group_summary_defaults_to_all_numeric_columns() {
        let summary = stats::group_summary(&sales(), "region", None).unwrap();

        assert_eq!(summary.get("south").unwrap().keys(), vec!["units", "price"]);
    }

    #[test]
    fn group_summary_sorts_numeric_groups_numerically() {
        let frame = parse_csv("k,v\n10,1\n9,2\n100,3\n").unwrap();
        let summary = stats::group_summary(&frame, "k", None).unwrap();

        assert_eq!(summary.keys(), vec!["9", "10", "100"]);
    }

    #[test]
    fn group_summary_validates_columns() {
        let frame = sales();

        assert!(matches!(
            stats::group_summary(&frame, "missing", None),
            Err(DataError::ColumnNotFound(name)) if name == "missing"
        ));
        assert!(matches!(
            stats::group_summary(&frame, "units", Some("region")),
            Err(DataError::NotNumeric(name)) if name == "region"
        ));
    }

    #[test]
    fn correlation_of_linear_columns() {
        let frame = parse_csv("x,y,z,flat\n1,2,3,7\n2,4,1,7\n3,6,2,7\n").unwrap();
        let matrix = stats::correlation_matrix(&frame).unwrap();

        let x = matrix.get("x").unwrap();
        assert_eq!(x.get("x"), Some(&Some(1.0)));
        assert_eq!(x.get("y"), Some(&Some(1.0)));
        assert_eq!(x.get("z"), Some(&Some(-0.5)));
        assert_eq!(x.get("flat"), Some(&None));
    }

    #[test]
    fn correlation_serializes_undefined_as_null() {
        let frame = parse_csv("x,flat\n1,7\n2,7\n").unwrap();
        let matrix = stats::correlation_matrix(&frame).unwrap();

        assert_eq!(
            serde_json::to_value(&matrix).unwrap(),
            json!({
                "x": {"x": 1.0, "flat": null},
                "flat": {"x": null, "flat": null},
            })
        );
    }

    #[test]
    fn distribution_of_text_column() {
        let frame = parse_csv("c\nb\na\nb\na\nc\n\n").unwrap();
        let distribution = stats::distribution(&frame, "c").unwrap();

        assert_eq!(distribution.value_counts.keys(), vec!["b", "a", "c"]);
        assert_eq!(distribution.basic_stats.mode, vec!["a", "b"]);
        assert_eq!(distribution.basic_stats.mean, None);
        assert_eq!(distribution.basic_stats.unique_values, 3);
        assert_eq!(distribution.basic_stats.null_count, 0);
    }

    #[test]
    fn distribution_of_numeric_column() {
        let distribution = stats::distribution(&sales(), "units").unwrap();

        assert_eq!(distribution.basic_stats.mean, Some(20.0));
        assert_eq!(distribution.basic_stats.median, Some(20.0));
        assert_eq!(distribution.basic_stats.null_count, 1);
        assert_eq!(distribution.basic_stats.mode, vec!["10", "20", "30"]);
    }

    #[test]
    fn distribution_keeps_top_ten() {
        let content: String = std::iter::once("n".to_string())
            .chain((0..15).map(|i| i.to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        let frame = parse_csv(&content).unwrap();

        let distribution = stats::distribution(&frame, "n").unwrap();
        assert_eq!(distribution.value_counts.len(), stats::TOP_VALUES);
    }

    #[test]
    fn datetime_conversion_and_time_series() {
        let mut frame = sales();
        stats::convert_to_datetime(&mut frame, "date").unwrap();

        assert_eq!(frame.require("date").unwrap().kind(), ColumnKind::DateTime);
        assert_eq!(frame.datetime_columns().len(), 1);

        let series = stats::time_series(&frame, "date").unwrap();
        assert_eq!(series.time_range.start, "2024-01-01");
        assert_eq!(series.time_range.end, "2025-03-04");
        assert_eq!(series.time_range.total_days, 428);
        assert_eq!(series.temporal_distribution.by_year.get("2024"), Some(&3));
        assert_eq!(series.temporal_distribution.by_month.get("1"), Some(&2));
        assert_eq!(
            series.temporal_distribution.by_day_of_week.get("Monday"),
            Some(&1)
        );
    }

    #[test]
    fn datetime_conversion_accepts_several_formats() {
        let mut frame =
            parse_csv("when\n2024/05/06\n07.05.2024\n2024-05-08 10:30:00\n2024-05-09T08:00:00Z\n")
                .unwrap();

        stats::convert_to_datetime(&mut frame, "when").unwrap();
        assert_eq!(
            frame.require("when").unwrap().cells()[2].to_string(),
            "2024-05-08 10:30:00"
        );
        assert_eq!(frame.require("when").unwrap().cells()[1].to_string(), "2024-05-07");
    }

    #[test]
    fn failed_datetime_conversion_leaves_column_unchanged() {
        let mut frame = parse_csv("when\n2024-01-01\nsoon\n").unwrap();
        let before = frame.clone();

        let error = stats::convert_to_datetime(&mut frame, "when").unwrap_err();
        assert!(matches!(
            error,
            DataError::DateTimeConversion { ref value, .. } if value == "soon"
        ));
        assert_eq!(frame, before);
    }

    #[test]
    fn time_series_requires_datetime_column() {
        assert!(matches!(
            stats::time_series(&sales(), "date"),
            Err(DataError::NotDateTime(_))
        ));
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(14.142135), 14.14);
        assert_eq!(round2(-0.456), -0.46);
        assert_eq!(round2(3.0), 3.0);
    }
}
