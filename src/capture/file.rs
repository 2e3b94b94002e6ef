//! Snapshot file naming and directory handling.

use super::types::CaptureError;
use crate::config::CaptureConfig;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::ffi::OsStr;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of every snapshot written by the harness.
pub const SNAPSHOT_EXTENSION: &str = "png";

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with the `.png` extension, or
/// [`CaptureError::InvalidTemplate`] if the template has an unknown specifier
pub fn generate_filename(template: &str) -> Result<String, CaptureError> {
    let now = Local::now();
    let mut filename = String::new();
    write!(filename, "{}.{}", now.format(template), SNAPSHOT_EXTENSION)
        .map_err(|_| CaptureError::InvalidTemplate(template.to_string()))?;
    Ok(filename)
}

/// Returns `true` if every specifier in `template` is understood by chrono.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Ensure the snapshot directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CaptureError> {
    if !directory.exists() {
        log::info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Builds the full path for a snapshot, preparing the output directory.
///
/// `name` becomes `<name>.png`; without a name the configured template is used.
/// Names that are not a plain file name (`../x`, `/abs`, `a/b`) are rejected.
pub fn snapshot_path(config: &CaptureConfig, name: Option<&str>) -> Result<PathBuf, CaptureError> {
    let filename = match name {
        Some(name) => format!("{}.{}", name, SNAPSHOT_EXTENSION),
        None => generate_filename(&config.filename_template)?,
    };
    // Snapshots never leave the output directory.
    if Path::new(&filename).file_name() != Some(OsStr::new(&filename)) {
        return Err(CaptureError::InvalidName(filename));
    }

    let directory = ensure_directory_exists(&config.output_directory)?;
    Ok(directory.join(filename))
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
