use std::{cmp::Ordering, collections::HashSet, fmt};

use chrono::{NaiveDateTime, Timelike};

use super::DataError;
use crate::printer::Table;

/// A single value of a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value.
    Null,
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Anything that is not a number.
    Text(String),
    /// Date or date and time.
    DateTime(NaiveDateTime),
}

impl Cell {
    /// True for missing values.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Numeric value of integer and float cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Key identifying equal values, used for counting and deduplication.
    pub(crate) fn key(&self) -> String {
        format!("{self:?}")
    }

    /// Orders values of the same kind; mixed kinds compare by their text.
    pub(crate) fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Null, Cell::Null) => Ordering::Equal,
            (Cell::Null, _) => Ordering::Greater,
            (_, Cell::Null) => Ordering::Less,
            (Cell::DateTime(a), Cell::DateTime(b)) => a.cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.to_string().cmp(&b.to_string()),
            },
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Text(value) => write!(f, "{value}"),
            Cell::DateTime(value) if value.num_seconds_from_midnight() == 0 => {
                write!(f, "{}", value.format("%Y-%m-%d"))
            }
            Cell::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Type shared by the non-null cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every value is a whole number.
    Integer,
    /// Every value is a number, at least one with a fraction.
    Float,
    /// Free-form text.
    Text,
    /// Dates or datetimes.
    DateTime,
}

impl ColumnKind {
    /// True for integer and float columns.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::DateTime => write!(f, "datetime"),
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    cells: Vec<Cell>,
}

impl Column {
    /// Builds a column from raw text, inferring its kind.
    ///
    /// The column is `Integer` if every present value parses as `i64`,
    /// `Float` if every present value parses as `f64`, and `Text` otherwise.
    /// A column without any present value is `Text`.
    pub fn from_raw(name: impl Into<String>, raw: Vec<Option<String>>) -> Self {
        let present = || raw.iter().flatten().map(|value| value.trim());
        let any_present = present().next().is_some();

        let (kind, cells) = if any_present && present().all(|v| v.parse::<i64>().is_ok()) {
            let cells = raw
                .iter()
                .map(|value| match value {
                    Some(v) => v.trim().parse().map(Cell::Integer).unwrap_or(Cell::Null),
                    None => Cell::Null,
                })
                .collect();
            (ColumnKind::Integer, cells)
        } else if any_present && present().all(|v| v.parse::<f64>().is_ok()) {
            let cells = raw
                .iter()
                .map(|value| match value {
                    Some(v) => v.trim().parse().map(Cell::Float).unwrap_or(Cell::Null),
                    None => Cell::Null,
                })
                .collect();
            (ColumnKind::Float, cells)
        } else {
            let cells = raw
                .into_iter()
                .map(|value| value.map(Cell::Text).unwrap_or(Cell::Null))
                .collect();
            (ColumnKind::Text, cells)
        };

        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Builds a column from cells of a known kind.
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inferred kind.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// All cells, nulls included.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Present numeric values in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(Cell::as_f64).collect()
    }

    /// Number of missing values.
    pub fn null_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_null()).count()
    }

    /// Number of distinct present values.
    pub fn unique_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.is_null())
            .map(Cell::key)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// In-memory table of equally long named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Creates a frame from columns of equal length.
    ///
    /// # Errors
    /// Returns `DataError::LengthMismatch` if the columns differ in length.
    pub fn new(columns: Vec<Column>) -> Result<Self, DataError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(column) = columns.iter().find(|column| column.len() != expected) {
                return Err(DataError::LengthMismatch {
                    column: column.name().to_string(),
                    expected,
                    found: column.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// True when the frame has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Looks a column up by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Looks a column up by exact name, failing if it is absent.
    ///
    /// # Errors
    /// Returns `DataError::ColumnNotFound` if no column has that name.
    pub fn require(&self, name: &str) -> Result<&Column, DataError> {
        self.column(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Integer and float columns in file order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|column| column.kind().is_numeric())
            .collect()
    }

    /// Columns holding datetimes.
    pub fn datetime_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|column| column.kind() == ColumnKind::DateTime)
            .collect()
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> Vec<&Cell> {
        self.columns
            .iter()
            .filter_map(|column| column.cells().get(index))
            .collect()
    }

    /// Swaps in a column with the same name as an existing one.
    ///
    /// # Errors
    /// Returns `DataError::ColumnNotFound` for an unknown name and
    /// `DataError::LengthMismatch` if the replacement has a different length.
    pub fn replace_column(&mut self, column: Column) -> Result<(), DataError> {
        let expected = self.row_count();
        let slot = self
            .columns
            .iter_mut()
            .find(|existing| existing.name() == column.name())
            .ok_or_else(|| DataError::ColumnNotFound(column.name().to_string()))?;

        if column.len() != expected {
            return Err(DataError::LengthMismatch {
                column: column.name().to_string(),
                expected,
                found: column.len(),
            });
        }

        *slot = column;
        Ok(())
    }

    /// First `rows` rows of the named columns as a display table.
    ///
    /// # Errors
    /// Returns `DataError::ColumnsNotFound` listing every unknown name.
    pub fn head(&self, rows: usize, names: &[&str]) -> Result<Table, DataError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| self.column(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::ColumnsNotFound(missing));
        }

        let columns: Vec<&Column> = names.iter().filter_map(|name| self.column(name)).collect();
        let mut table = Table::new(names.iter().copied());
        for index in 0..rows.min(self.row_count()) {
            table.push_row(columns.iter().map(|column| column.cells()[index].to_string()));
        }

        Ok(table)
    }
}
