//! Visual theme and styling.

use console::Style;

/// Medkit's visual theme.
#[derive(Debug, Clone)]
pub struct MedkitTheme {
    /// Style for passing check names (green).
    pub pass: Style,
    /// Style for warning check names (yellow).
    pub warning: Style,
    /// Style for failing check names (red).
    pub fail: Style,
    /// Style for errored check names (red, like fail: both are run-fatal).
    pub error: Style,
    /// Style for `<cmd>` spans in suggestion text (underlined).
    pub command: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for MedkitTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MedkitTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
            error: Style::new().red(),
            command: Style::new().underlined(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            warning: Style::new(),
            fail: Style::new(),
            error: Style::new(),
            command: Style::new(),
            dim: Style::new(),
        }
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
