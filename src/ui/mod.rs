//! Terminal output: theme, result rendering, quiet-mode progress.

pub mod printer;
pub mod progress;
pub mod theme;

pub use printer::{status_glyph, CheckPrinter};
pub use progress::{progress_bar, progress_line, BAR_WIDTH};
pub use theme::{should_use_colors, MedkitTheme};
