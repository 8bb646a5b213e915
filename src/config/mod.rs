//! Configuration module for the expense tracker
//!
//! - Path resolution around the data file
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
