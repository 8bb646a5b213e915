//! Path management for the expense tracker
//!
//! Everything lives next to the data file. By default that is
//! `expenses.json` in the working directory; `--file` points it elsewhere.
//!
//! - data file:     `<dir>/<name>.json`
//! - settings file: `<dir>/tracker-settings.json`
//! - audit log:     `<dir>/<name>.audit.log`

use std::path::{Path, PathBuf};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Settings file name, placed beside the data file
pub const SETTINGS_FILE_NAME: &str = "tracker-settings.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPaths {
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an optional data file override
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Create paths rooted in a directory (useful for testing)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_file: dir.as_ref().join(DEFAULT_DATA_FILE),
        }
    }

    /// The JSON document holding all records
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory containing the data file
    pub fn base_dir(&self) -> &Path {
        self.data_file.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn audit_log(&self) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "expenses".to_string());
        self.base_dir().join(format!("{}.audit.log", stem))
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths_are_relative() {
        let paths = TrackerPaths::default();
        assert_eq!(paths.data_file(), Path::new("expenses.json"));
        assert_eq!(paths.settings_file(), PathBuf::from("tracker-settings.json"));
        assert_eq!(paths.audit_log(), PathBuf::from("expenses.audit.log"));
    }

    #[test]
    fn test_override_moves_everything() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("home.json");
        let paths = TrackerPaths::new(Some(data.clone()));

        assert_eq!(paths.data_file(), data.as_path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("tracker-settings.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("home.audit.log"));
    }

    #[test]
    fn test_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::in_dir(temp_dir.path());
        assert_eq!(paths.data_file(), temp_dir.path().join("expenses.json"));
    }
}
