use crate::{
    Result,
    console::{Console, ask},
    data::{DataError, DataFrame, stats},
    printer::{Output, Table},
};

use super::ensure_data;

/// Runs the statistics actions and prints their reports as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    /// Descriptive statistics of the numeric columns.
    pub fn analyze(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;
        let summary = stats::describe(frame)?;

        console.emit(&Output::info("Basic Statistics:"));
        console.emit(&Output::Json(serde_json::to_value(&summary)?));
        Ok(())
    }

    /// Missing values, duplicate rows and distinct values.
    pub fn check_data_quality(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;
        let report = stats::quality_report(frame);

        console.emit(&Output::info("Data Quality Report:"));
        console.emit(&Output::Json(serde_json::to_value(&report)?));
        Ok(())
    }

    /// Asks for a grouping column and an optional numeric column, then aggregates per group.
    pub fn group_analysis(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;

        console.emit(&Output::info("Available numeric columns:"));
        console.emit(&Output::Table(column_table(
            frame.numeric_columns().iter().map(|column| column.name()),
        )));

        let group_column = ask(console, "Enter column name to group by: ")?;
        frame.require(&group_column)?;

        let aggregate = ask(
            console,
            "Enter column to aggregate (press Enter for all numeric columns): ",
        )?;
        let aggregate = (!aggregate.is_empty()).then_some(aggregate.as_str());

        let summary = stats::group_summary(frame, &group_column, aggregate)?;
        console.emit(&Output::info(format!(
            "Group analysis by '{group_column}':"
        )));
        console.emit(&Output::Json(serde_json::to_value(&summary)?));
        Ok(())
    }

    /// Pairwise correlation of the numeric columns.
    pub fn correlation_analysis(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;
        let matrix = stats::correlation_matrix(frame)?;

        console.emit(&Output::info("Correlation Matrix:"));
        console.emit(&Output::Json(serde_json::to_value(&matrix)?));
        Ok(())
    }

    /// Asks for a column and reports its value distribution.
    pub fn analyze_distribution(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;

        console.emit(&Output::info("Available columns:"));
        console.emit(&Output::Table(column_table(frame.column_names())));

        let column = ask(console, "Enter column name to analyze: ")?;
        let distribution = stats::distribution(frame, &column)?;

        console.emit(&Output::info(format!(
            "Distribution analysis for '{column}':"
        )));
        console.emit(&Output::Json(serde_json::to_value(&distribution)?));
        Ok(())
    }

    /// Reports temporal patterns of a datetime column.
    ///
    /// Without any datetime column the user may name a column to convert,
    /// or press Enter to cancel. With several, the user picks one.
    pub fn time_series_analysis(
        &self,
        frame: &mut DataFrame,
        console: &mut dyn Console,
    ) -> Result<()> {
        ensure_data(frame)?;

        let mut datetime_columns: Vec<String> = frame
            .datetime_columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        if datetime_columns.is_empty() {
            console.emit(&Output::info(
                "No datetime columns found. Would you like to convert a column to datetime?",
            ));
            let column = ask(
                console,
                "Enter column name to convert (or press Enter to cancel): ",
            )?;
            if column.is_empty() {
                return Ok(());
            }

            stats::convert_to_datetime(frame, &column)?;
            datetime_columns.push(column);
        }

        let column = if let [only] = datetime_columns.as_slice() {
            only.clone()
        } else {
            console.emit(&Output::info("Available datetime columns:"));
            console.emit(&Output::Table(column_table(
                datetime_columns.iter().map(String::as_str),
            )));

            let column = ask(console, "Enter datetime column name: ")?;
            if !datetime_columns.contains(&column) {
                return Err(DataError::NotDateTime(column).into());
            }
            column
        };

        let series = stats::time_series(frame, &column)?;
        console.emit(&Output::info(format!(
            "Time series analysis for '{column}':"
        )));
        console.emit(&Output::Json(serde_json::to_value(&series)?));
        Ok(())
    }
}

fn column_table<'a>(names: impl IntoIterator<Item = &'a str>) -> Table {
    let mut table = Table::new(["column"]);
    for name in names {
        table.push_row([name]);
    }
    table
}
