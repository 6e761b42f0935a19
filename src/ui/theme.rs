//! Visual theme and styling.

use console::Style;

/// Trellis's visual theme.
///
/// Only the slots the CLI surface actually renders: section headers in help
/// screens, dimmed prompt symbols, and the error marker.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for prompt symbols in example invocations (dim).
    pub prompt: Style,
    /// Style for the error marker (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default Trellis theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold(),
            prompt: Style::new().dim(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Pick the colored or plain theme based on the output target.
    pub fn auto() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            prompt: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a shell prompt symbol for example invocations.
    pub fn format_prompt(&self) -> String {
        format!("{}", self.prompt.apply_to("$"))
    }

    /// Format the marker that prefixes error lines.
    pub fn format_error_marker(&self) -> String {
        format!("{}", self.error.apply_to("!"))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
