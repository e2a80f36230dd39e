//! Settings file loading.
//!
//! Settings are optional. The file is looked up in this order:
//!
//! 1. An explicit `--config <path>` (must exist)
//! 2. `.buildprep.yml` in the working directory (used if present)
//! 3. Built-in defaults
//!
//! # Example
//!
//! ```
//! use buildprep::config::Settings;
//!
//! let settings = Settings::from_yaml("required_tools: [git, ninja]\n").unwrap();
//! assert_eq!(settings.required_tools, vec!["git", "ninja"]);
//! assert!(!settings.verbose);
//! ```

pub mod settings;

pub use settings::{load_settings, LocatorKind, Settings, SETTINGS_FILE_NAME};
