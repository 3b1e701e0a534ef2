//! Tabular data: CSV loading and descriptive statistics.

mod error;
mod frame;
mod loader;
pub mod stats;

#[cfg(test)]
mod tests;

pub use error::DataError;
pub use frame::{Cell, Column, ColumnKind, DataFrame};
pub use loader::{DataLoader, NA_VALUES, list_csv_files, parse_csv};
