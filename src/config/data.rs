use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::printer::OutputStyle;

/// Where data files live and how previews look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataConfig {
    /// Directory searched for CSV files when no file is given.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Number of rows shown by previews.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Presentation of previews and column listings.
    #[serde(default)]
    pub output_style: OutputStyle,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            preview_rows: default_preview_rows(),
            output_style: OutputStyle::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_preview_rows() -> usize {
    5
}
