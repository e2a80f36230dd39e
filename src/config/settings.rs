//! Settings schema and loader.

use crate::environment::REQUIRED_TOOLS;
use crate::error::{BuildprepError, Result};
use crate::shell::{PathLocator, ToolLocator, WhichLocator};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = ".buildprep.yml";

/// How required tools are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    /// Ask the OS lookup command.
    #[default]
    Which,
    /// Scan `PATH` directories directly.
    Path,
}

impl LocatorKind {
    /// Build the locator this kind names.
    pub fn locator(self) -> Box<dyn ToolLocator> {
        match self {
            Self::Which => Box::new(WhichLocator::new()),
            Self::Path => Box::new(PathLocator::from_env()),
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tools `verify` requires, in check order.
    pub required_tools: Vec<String>,

    /// Verbose output unless overridden on the command line.
    pub verbose: bool,

    /// Tool lookup strategy.
    pub locator: LocatorKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            required_tools: REQUIRED_TOOLS.iter().map(|t| t.to_string()).collect(),
            verbose: false,
            locator: LocatorKind::default(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| BuildprepError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Load settings for a run.
///
/// An explicit path must exist. Without one, [`SETTINGS_FILE_NAME`] in
/// `working_dir` is used when present, otherwise the defaults.
pub fn load_settings(explicit: Option<&Path>, working_dir: &Path) -> Result<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(BuildprepError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), "loading settings");
        return Settings::load(path);
    }

    let discovered: PathBuf = working_dir.join(SETTINGS_FILE_NAME);
    if discovered.is_file() {
        tracing::debug!(path = %discovered.display(), "loading discovered settings");
        return Settings::load(&discovered);
    }

    tracing::debug!("no settings file, using defaults");
    Ok(Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_require_gclient_and_python3() {
        let settings = Settings::default();
        assert_eq!(settings.required_tools, vec!["gclient", "python3"]);
        assert!(!settings.verbose);
        assert_eq!(settings.locator, LocatorKind::Which);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let settings = Settings::from_yaml("verbose: true\nlocator: path\n").unwrap();
        assert!(settings.verbose);
        assert_eq!(settings.locator, LocatorKind::Path);
        assert_eq!(settings.required_tools, vec!["gclient", "python3"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::from_yaml("required: [git]\n").is_err());
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_settings(Some(&missing), temp.path()).unwrap_err();

        assert!(matches!(err, BuildprepError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lanes.yml");
        fs::write(&path, "required_tools: [git]\n").unwrap();

        let settings = load_settings(Some(&path), temp.path()).unwrap();

        assert_eq!(settings.required_tools, vec!["git"]);
    }

    #[test]
    fn discovers_file_in_working_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE_NAME), "verbose: true\n").unwrap();

        let settings = load_settings(None, temp.path()).unwrap();

        assert!(settings.verbose);
    }

    #[test]
    fn falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_settings(None, temp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "required_tools: [unclosed\n").unwrap();

        let err = load_settings(None, temp.path()).unwrap_err();

        match err {
            BuildprepError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }
}
