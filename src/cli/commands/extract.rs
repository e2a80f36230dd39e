//! Extract command implementation.
//!
//! The `buildprep extract` command builds an option bag from a file and
//! `key=value` pairs, then prints the options under one prefix with the
//! prefix stripped.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cli::args::ExtractArgs;
use crate::error::{BuildprepError, Result};
use crate::options::{extract_prefixed_options, OptionBag};
use crate::ui::Logger;

use super::dispatcher::{Command, CommandResult};

/// The extract command implementation.
pub struct ExtractCommand {
    working_dir: PathBuf,
    args: ExtractArgs,
}

impl ExtractCommand {
    /// Create a new extract command.
    pub fn new(working_dir: &Path, args: ExtractArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Build the option bag: file entries first, then pairs in order.
    pub fn option_bag(&self) -> Result<OptionBag> {
        let mut bag = match &self.args.file {
            Some(file) => load_option_file(&self.working_dir.join(file))?,
            None => OptionBag::new(),
        };
        bag.extend(self.args.pairs.iter().map(|pair| parse_pair(pair)));
        Ok(bag)
    }
}

impl Command for ExtractCommand {
    fn execute(&self, ui: &mut dyn Logger) -> Result<CommandResult> {
        let bag = self.option_bag()?;
        let extracted = extract_prefixed_options(Some(&bag), &self.args.prefix);

        let output = if self.args.yaml {
            serde_yaml::to_string(&extracted).map_err(|e| BuildprepError::Other(e.into()))?
        } else {
            serde_json::to_string_pretty(&extracted)
                .map_err(|e| BuildprepError::Other(e.into()))?
        };
        ui.info(output.trim_end());

        Ok(CommandResult::success())
    }
}

/// Split `key=value` into an entry. `key=` and a bare `key` are absent values.
pub fn parse_pair(pair: &str) -> (String, Option<Value>) {
    match pair.split_once('=') {
        Some((key, "")) => (key.to_string(), None),
        Some((key, value)) => (key.to_string(), Some(Value::String(value.to_string()))),
        None => (pair.to_string(), None),
    }
}

/// Load an option bag from JSON (`.json`) or YAML (anything else).
pub fn load_option_file(path: &Path) -> Result<OptionBag> {
    let content = fs::read_to_string(path).map_err(|e| BuildprepError::InvalidOption {
        message: format!("cannot read {}: {}", path.display(), e),
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed: std::result::Result<OptionBag, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| BuildprepError::ConfigParseError {
        path: path.to_path_buf(),
        message,
    })
}
