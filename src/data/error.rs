use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or analysing tabular data.
#[derive(Error, Debug)]
pub enum DataError {
    /// The data file does not exist.
    #[error("the file at {} was not found", .0.display())]
    NotFound(PathBuf),

    /// The data file has no content at all.
    #[error("the file is empty")]
    Empty,

    /// Reading the data file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A row has more fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Malformed {
        /// Line the record starts on, 1-based
        line: usize,
        /// Number of header fields
        expected: usize,
        /// Number of fields in the row
        found: usize,
    },

    /// A quoted field is never closed.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// Line the quoted field starts on, 1-based
        line: usize,
    },

    /// Columns of a frame differ in length.
    #[error("column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        /// Offending column
        column: String,
        /// Length of the first column
        expected: usize,
        /// Length of the offending column
        found: usize,
    },

    /// The frame has no rows or no columns.
    #[error("no data loaded")]
    NoData,

    /// A requested column does not exist.
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    /// Several requested columns do not exist.
    #[error("columns '{}' not found", .0.join(", "))]
    ColumnsNotFound(Vec<String>),

    /// No column name was given where at least one is needed.
    #[error("no column names given")]
    NoColumnsSelected,

    /// A column used for arithmetic is not numeric.
    #[error("column '{0}' is not numeric")]
    NotNumeric(String),

    /// The frame has no numeric column to work with.
    #[error("no numeric columns found")]
    NoNumericColumns,

    /// A column used for time analysis does not hold datetimes.
    #[error("column '{0}' is not a datetime column")]
    NotDateTime(String),

    /// A cell could not be read as a date or datetime.
    #[error("cannot convert '{value}' in column '{column}' to datetime")]
    DateTimeConversion {
        /// Column being converted
        column: String,
        /// First value that failed to parse
        value: String,
    },

    /// A column has no non-null values to analyse.
    #[error("column '{0}' has no values")]
    NoValues(String),
}
