use crate::{
    Result,
    console::{Console, ask},
    data::{DataError, DataFrame},
    printer::{Output, OutputStyle, Table},
};

use super::ensure_data;

/// Previews rows and columns of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    rows: usize,
    style: OutputStyle,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(5, OutputStyle::Table)
    }
}

impl Viewer {
    /// Creates a viewer showing `rows` rows in the given style.
    pub fn new(rows: usize, style: OutputStyle) -> Self {
        Self { rows, style }
    }

    /// Lists every column with its inferred kind.
    pub fn list_columns(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;

        let mut table = Table::new(["column", "type"]);
        for column in frame.columns() {
            table.push_row([column.name().to_string(), column.kind().to_string()]);
        }

        console.emit(&Output::info("Columns in the dataset:"));
        console.emit(&Output::records(table, self.style));
        Ok(())
    }

    /// Shows the first rows of every column.
    pub fn preview_rows(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;

        let table = frame.head(self.rows, &frame.column_names())?;
        console.emit(&Output::info(format!(
            "Displaying {} rows of the dataset:",
            table.len()
        )));
        console.emit(&Output::records(table, self.style));
        Ok(())
    }

    /// Asks for a column and shows its first values.
    pub fn preview_column(&self, frame: &DataFrame, console: &mut dyn Console) -> Result<()> {
        ensure_data(frame)?;
        let name = ask(console, "Enter the column name to preview: ")?;
        let column = frame.require(&name)?;

        let mut table = Table::new(["value"]);
        for cell in column.cells().iter().take(self.rows) {
            table.push_row([cell.to_string()]);
        }

        console.emit(&Output::info(format!(
            "Displaying {} entries of column '{name}':",
            table.len()
        )));
        console.emit(&Output::records(table, self.style));
        Ok(())
    }

    /// Asks for comma-separated column names and shows their first rows side by side.
    pub fn preview_multiple_columns(
        &self,
        frame: &DataFrame,
        console: &mut dyn Console,
    ) -> Result<()> {
        ensure_data(frame)?;
        let answer = ask(
            console,
            "Enter the column names to preview (comma-separated): ",
        )?;

        let names: Vec<&str> = answer
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(DataError::NoColumnsSelected.into());
        }

        let table = frame.head(self.rows, &names)?;
        console.emit(&Output::info(format!(
            "Displaying {} entries of columns '{}':",
            table.len(),
            names.join(", ")
        )));
        console.emit(&Output::records(table, self.style));
        Ok(())
    }
}
