//! Tool lookup on the search path.
//!
//! Absence of a tool is a normal answer, not a failure: every locator
//! returns a plain `bool`.
//!
//! - [`WhichLocator`] asks the host OS (`which`, or `where` on Windows)
//! - [`PathLocator`] scans `PATH` directories directly, for hosts without `which`
//! - [`StaticLocator`] answers from a fixed set and records lookups, for tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Resolves whether a tool is available on the search path.
pub trait ToolLocator {
    /// Whether `tool` resolves to an executable.
    fn is_available(&self, tool: &str) -> bool;
}

impl<T: ToolLocator + ?Sized> ToolLocator for &T {
    fn is_available(&self, tool: &str) -> bool {
        (**self).is_available(tool)
    }
}

impl<T: ToolLocator + ?Sized> ToolLocator for Box<T> {
    fn is_available(&self, tool: &str) -> bool {
        (**self).is_available(tool)
    }
}

/// Looks tools up through the OS lookup command.
///
/// The lookup command's own output is discarded; only its exit status
/// matters. A lookup command that cannot be spawned counts as "not found".
#[derive(Debug, Clone, Copy, Default)]
pub struct WhichLocator;

impl WhichLocator {
    pub fn new() -> Self {
        Self
    }

    fn lookup_program() -> &'static str {
        if cfg!(target_os = "windows") {
            "where"
        } else {
            "which"
        }
    }
}

impl ToolLocator for WhichLocator {
    fn is_available(&self, tool: &str) -> bool {
        let found = Command::new(Self::lookup_program())
            .arg(tool)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        tracing::debug!(tool, found, "which lookup");
        found
    }
}

/// Looks tools up by scanning a list of directories.
#[derive(Debug, Clone)]
pub struct PathLocator {
    entries: Vec<PathBuf>,
}

impl Default for PathLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PathLocator {
    /// Scan the directories of the current `PATH`.
    pub fn from_env() -> Self {
        Self {
            entries: parse_system_path(),
        }
    }

    /// Scan the given directories, in order.
    pub fn with_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// First matching executable, if any.
    pub fn resolve(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.entries)
    }
}

impl ToolLocator for PathLocator {
    fn is_available(&self, tool: &str) -> bool {
        let resolved = self.resolve(tool);
        tracing::debug!(tool, path = ?resolved, "path scan lookup");
        resolved.is_some()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a file and executable. On Windows a
/// `<tool>.exe` candidate is tried after the bare name.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() {
        return None;
    }

    for dir in path_entries {
        let mut candidates = vec![dir.join(tool)];
        if cfg!(windows) {
            candidates.push(dir.join(format!("{}.exe", tool)));
        }

        for candidate in candidates {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Fixed-answer locator that records every lookup in order.
#[derive(Debug, Default)]
pub struct StaticLocator {
    available: HashSet<String>,
    lookups: RefCell<Vec<String>>,
}

impl StaticLocator {
    /// Locator that reports exactly `tools` as available.
    pub fn with_tools<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: tools.into_iter().map(Into::into).collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Tools looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl ToolLocator for StaticLocator {
    fn is_available(&self, tool: &str) -> bool {
        self.lookups.borrow_mut().push(tool.to_string());
        self.available.contains(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_tool(dir: &Path, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn which_finds_shell() {
        if PathLocator::from_env().resolve("which").is_none() {
            return;
        }
        assert!(WhichLocator::new().is_available("sh"));
    }

    #[test]
    fn which_reports_missing_tool_as_false() {
        assert!(!WhichLocator::new().is_available("buildprep-no-such-tool-7f3a"));
    }

    #[test]
    #[cfg(unix)]
    fn resolve_finds_executable_in_first_matching_dir() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_tool(second.path(), "gclient", 0o755);
        let expected = write_tool(first.path(), "gclient", 0o755);

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve_tool_path("gclient", &entries), Some(expected));
    }

    #[test]
    #[cfg(unix)]
    fn resolve_skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        write_tool(dir.path(), "python3", 0o644);

        let locator = PathLocator::with_entries(vec![dir.path().to_path_buf()]);
        assert!(!locator.is_available("python3"));
    }

    #[test]
    fn resolve_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("gclient")).unwrap();

        let locator = PathLocator::with_entries(vec![dir.path().to_path_buf()]);
        assert!(!locator.is_available("gclient"));
    }

    #[test]
    fn resolve_rejects_empty_tool_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_tool_path("", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn path_locator_with_no_entries_finds_nothing() {
        let locator = PathLocator::with_entries(vec![]);
        assert!(!locator.is_available("sh"));
    }

    #[test]
    fn static_locator_records_lookups() {
        let locator = StaticLocator::with_tools(["python3"]);

        assert!(!locator.is_available("gclient"));
        assert!(locator.is_available("python3"));
        assert_eq!(locator.lookups(), vec!["gclient", "python3"]);
    }

    #[test]
    fn locator_works_through_references_and_boxes() {
        let locator = StaticLocator::with_tools(["git"]);
        let by_ref: &dyn ToolLocator = &locator;
        assert!(by_ref.is_available("git"));

        let boxed: Box<dyn ToolLocator> = Box::new(StaticLocator::with_tools(["git"]));
        assert!(boxed.is_available("git"));
    }
}
