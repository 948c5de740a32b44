use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::DEFAULT_PALETTE_HEX;

/// File name written by snapshot export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "myChart.png";

/// Public session bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSessionConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl Default for ChartSessionConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            padding_px: default_padding_px(),
            palette: default_palette(),
            export_dir: default_export_dir(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl ChartSessionConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding_px(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_palette<S: Into<String>>(mut self, palette: impl IntoIterator<Item = S>) -> Self {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Directory that receives exported snapshots.
    #[must_use]
    pub fn with_export_dir(mut self, export_dir: impl Into<PathBuf>) -> Self {
        self.export_dir = export_dir.into();
        self
    }

    #[must_use]
    pub fn with_export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.export_file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_padding_px() -> f64 {
    16.0
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE_HEX.iter().map(|hex| (*hex).to_owned()).collect()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_owned()
}
