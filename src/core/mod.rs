use thiserror::Error;

use crate::{config::ConfigError, data::DataError};

/// Error types for the datamenu application.
///
/// Every fallible operation in the crate eventually surfaces as one of
/// these variants. Menu actions return them to the session loop, which
/// reports them without leaving the current view.
#[derive(Error, Debug)]
pub enum DatamenuError {
    /// Loading or analysing tabular data failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Reading or parsing the configuration file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Converting a result to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Console I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for datamenu operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `DatamenuError` for all datamenu operations.
pub type Result<T> = std::result::Result<T, DatamenuError>;
