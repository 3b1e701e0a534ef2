//! The CSV workbench offered through the menu.
//!
//! [`DataAnalysis`] owns the loaded frame and registers its preview actions
//! under the `View` section and its statistics under `Analyze`.

mod analyzer;
mod viewer;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::instrument;

use crate::{
    Result,
    config::DataConfig,
    console::Console,
    data::{DataError, DataFrame, DataLoader},
    menu::{MenuHost, MenuItem},
};

pub use analyzer::Analyzer;
pub use viewer::Viewer;

/// Section holding the preview actions.
pub const VIEW_SECTION: &str = "View";

/// Section holding the statistics actions.
pub const ANALYZE_SECTION: &str = "Analyze";

/// Menu host exposing previews and statistics over one data frame.
#[derive(Debug, Clone)]
pub struct DataAnalysis {
    frame: DataFrame,
    viewer: Viewer,
    analyzer: Analyzer,
}

impl DataAnalysis {
    /// Creates a workbench over an already loaded frame.
    pub fn new(frame: DataFrame, viewer: Viewer) -> Self {
        Self {
            frame,
            viewer,
            analyzer: Analyzer,
        }
    }

    /// Loads the CSV file at `path` and creates a workbench for it.
    ///
    /// # Errors
    /// Returns the loader's error if the file cannot be read or parsed.
    #[instrument(skip(config))]
    pub fn load(path: &Path, config: &DataConfig) -> std::result::Result<Self, DataError> {
        let frame = DataLoader::new(path).load()?;
        Ok(Self::new(
            frame,
            Viewer::new(config.preview_rows, config.output_style),
        ))
    }

    /// The data actions operate on.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    fn list_columns(&mut self, console: &mut dyn Console) -> Result<()> {
        self.viewer.list_columns(&self.frame, console)
    }

    fn preview_rows(&mut self, console: &mut dyn Console) -> Result<()> {
        self.viewer.preview_rows(&self.frame, console)
    }

    fn preview_column(&mut self, console: &mut dyn Console) -> Result<()> {
        self.viewer.preview_column(&self.frame, console)
    }

    fn preview_multiple_columns(&mut self, console: &mut dyn Console) -> Result<()> {
        self.viewer.preview_multiple_columns(&self.frame, console)
    }

    fn analyze(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.analyze(&self.frame, console)
    }

    fn check_data_quality(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.check_data_quality(&self.frame, console)
    }

    fn group_analysis(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.group_analysis(&self.frame, console)
    }

    fn correlation_analysis(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.correlation_analysis(&self.frame, console)
    }

    fn analyze_distribution(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.analyze_distribution(&self.frame, console)
    }

    fn time_series_analysis(&mut self, console: &mut dyn Console) -> Result<()> {
        self.analyzer.time_series_analysis(&mut self.frame, console)
    }
}

impl MenuHost for DataAnalysis {
    fn menu_items(&self) -> Vec<MenuItem<Self>> {
        vec![
            MenuItem::new("list_columns", Self::list_columns)
                .order(1)
                .section(VIEW_SECTION),
            MenuItem::new("preview_rows", Self::preview_rows)
                .order(2)
                .section(VIEW_SECTION),
            MenuItem::new("preview_column", Self::preview_column)
                .order(3)
                .section(VIEW_SECTION),
            MenuItem::new("preview_multiple_columns", Self::preview_multiple_columns)
                .order(4)
                .section(VIEW_SECTION),
            MenuItem::new("analyze", Self::analyze)
                .order(1)
                .section(ANALYZE_SECTION),
            MenuItem::new("check_data_quality", Self::check_data_quality)
                .order(2)
                .section(ANALYZE_SECTION),
            MenuItem::new("group_analysis", Self::group_analysis)
                .order(3)
                .section(ANALYZE_SECTION),
            MenuItem::new("correlation_analysis", Self::correlation_analysis)
                .order(4)
                .section(ANALYZE_SECTION),
            MenuItem::new("analyze_distribution", Self::analyze_distribution)
                .order(5)
                .section(ANALYZE_SECTION),
            MenuItem::new("time_series_analysis", Self::time_series_analysis)
                .order(6)
                .section(ANALYZE_SECTION),
        ]
    }
}

/// Fails with `DataError::NoData` when there is nothing to work on.
fn ensure_data(frame: &DataFrame) -> std::result::Result<(), DataError> {
    if frame.is_empty() {
        return Err(DataError::NoData);
    }
    Ok(())
}
