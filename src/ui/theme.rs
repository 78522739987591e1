//! Visual theme and styling.

use console::Style;

/// modreport's visual theme.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Whether styles emit colour codes.
    pub colored: bool,
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for rows of packages with nothing enabled (the warning orange).
    pub highlight_row: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            colored: true,
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            border: Style::new().dim(),
            highlight_row: Style::new().color256(208),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            colored: false,
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
            highlight_row: Style::new(),
        }
    }

    /// Pick the coloured or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
