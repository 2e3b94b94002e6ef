//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Render-capture harness settings.
///
/// Controls where snapshots land and how unnamed snapshots are named.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaptureConfig {
    /// Directory snapshots are written to. A leading `~/` expands to the home directory.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// chrono format string used to name snapshots written without an explicit name
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            filename_template: default_filename_template(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("paintkit")
        .join("snapshots")
}

pub(crate) fn default_filename_template() -> String {
    "snapshot_%Y%m%d_%H%M%S".to_string()
}
