//! Visual theme and styling.

use console::Style;

/// Styles applied to each message channel.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for debug messages (dim).
    pub debug: Style,
    /// Style for echoed commands (dim italic).
    pub command: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            debug: Style::new().dim(),
            command: Style::new().dim().italic(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            debug: Style::new(),
            command: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a debug message.
    pub fn format_debug(&self, msg: &str) -> String {
        format!("{}", self.debug.apply_to(msg))
    }

    /// Format a command echo line.
    pub fn format_command(&self, command: &str) -> String {
        format!(
            "{} {}",
            self.highlight.apply_to("$"),
            self.command.apply_to(command)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
