//! Quiet-mode progress indicator.
//!
//! A deterministic, fixed-width arrow bar that is overwritten in place
//! after every processed check. Kept as pure string builders so the
//! layout is directly testable.

/// Width of the arrow field inside the brackets, in characters.
pub const BAR_WIDTH: usize = 25;

/// Render the arrow field: `filled - 1` dashes, one `>`, space padding.
///
/// `progress_bar(5, 25)` → `"---->                    "`.
pub fn progress_bar(current: usize, total: usize) -> String {
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        (current * BAR_WIDTH) / total
    };
    let dashes = filled.saturating_sub(1);

    let mut bar = String::with_capacity(BAR_WIDTH);
    bar.push_str(&"-".repeat(dashes));
    bar.push('>');
    bar.push_str(&" ".repeat(BAR_WIDTH - dashes - 1));
    bar
}

/// Render the full progress line, without trailing newline.
pub fn progress_line(current: usize, total: usize) -> String {
    let percent = if total == 0 {
        100
    } else {
        current * 100 / total
    };
    format!(
        "Progress: [{}] {}% ({}/{})",
        progress_bar(current, total),
        percent,
        current,
        total
    )
}
