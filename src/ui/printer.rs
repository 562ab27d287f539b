//! Terminal rendering of check results.
//!
//! Rendering is split into pure string builders (testable, deterministic
//! layout) and a thin printing shell that knows about quiet mode and the
//! in-place progress line.

use std::io::Write;

use console::Term;

use crate::check::{CheckResult, CheckStatus};
use crate::os::{detect_os, CurrentOs};
use crate::text;
use crate::ui::progress::progress_line;
use crate::ui::theme::{should_use_colors, MedkitTheme};

/// Title embedded in the suggestion box top border.
const BOX_TITLE: &str = "💡 Suggestion ";

/// Status glyph. Fixed total mapping.
pub fn status_glyph(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✅",
        CheckStatus::PassWithWarning => "⚠️ ",
        CheckStatus::Fail => "❌",
        CheckStatus::Error => "💥",
    }
}

/// Renders check results to the terminal.
pub struct CheckPrinter {
    theme: MedkitTheme,
    os: CurrentOs,
    quiet: bool,
}

impl CheckPrinter {
    /// Create a printer for the detected OS and ambient color support.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            MedkitTheme::new()
        } else {
            MedkitTheme::plain()
        };
        Self::with(theme, detect_os(), quiet)
    }

    /// Create a printer with explicit theme and OS (the test seam).
    pub fn with(theme: MedkitTheme, os: CurrentOs, quiet: bool) -> Self {
        Self { theme, os, quiet }
    }

    /// Render the one-line result row: glyph, colored name, summary.
    pub fn render_result_line(&self, result: &CheckResult) -> String {
        let style = match result.status {
            CheckStatus::Pass => &self.theme.pass,
            CheckStatus::PassWithWarning => &self.theme.warning,
            CheckStatus::Fail => &self.theme.fail,
            CheckStatus::Error => &self.theme.error,
        };
        format!(
            "{} [{}] {}",
            status_glyph(result.status),
            style.apply_to(&result.name),
            result.summary
        )
    }

    /// The suggestion to show for a result, if any.
    ///
    /// Pass results never render a suggestion; everything else selects
    /// the most specific entry for this printer's OS.
    pub fn suggestion_for<'a>(&self, result: &'a CheckResult) -> Option<&'a str> {
        if result.status == CheckStatus::Pass {
            return None;
        }
        result.suggestions.most_specific(self.os)
    }

    /// Render a suggestion as a bordered box, without trailing newline.
    ///
    /// Single-line suggestions get a closed box; multi-line suggestions
    /// keep the top and bottom borders but render inner lines as a
    /// two-space indented loose block with no right border. The asymmetry
    /// is deliberate: long remediation text reads better unboxed.
    ///
    /// Widths are measured in visible characters, after stripping the
    /// `<cmd>` markers; the markers never count.
    pub fn render_suggestion_box(&self, raw: &str) -> String {
        let cleaned = text::dedent(raw);
        if cleaned.is_empty() {
            return String::new();
        }

        let raw_lines: Vec<String> = cleaned.lines().map(text::strip_cmd_markers).collect();
        let styled_lines: Vec<String> = cleaned
            .lines()
            .map(|line| text::stylize_cmds(line, &self.theme.command))
            .collect();

        let max_width = raw_lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let title_width = BOX_TITLE.chars().count();

        let mut out = String::new();
        out.push_str("┌─");
        out.push_str(BOX_TITLE);
        out.push_str(&"─".repeat(max_width.saturating_sub(title_width)));
        out.push('┐');
        out.push('\n');

        if styled_lines.len() == 1 {
            let padding = " ".repeat(max_width - raw_lines[0].chars().count());
            out.push_str(&format!("│ {}{} │\n", styled_lines[0], padding));
        } else {
            for line in &styled_lines {
                out.push_str(&format!("  {}\n", line));
            }
        }

        out.push('└');
        out.push_str(&"─".repeat(max_width + 2));
        out.push('┘');
        out
    }

    /// Print one result as it arrives from the scheduler.
    ///
    /// Quiet mode suppresses Pass rows, follows every rendered block with
    /// a blank line, and overwrites the progress line after each result.
    pub fn print_result(&self, result: &CheckResult, current: usize, total: usize) {
        if self.quiet {
            if result.status != CheckStatus::Pass {
                let _ = Term::stdout().clear_line();
                print!("\r");
                self.print_block(result);
                println!();
            }
            print!("\r{}", progress_line(current, total));
            let _ = std::io::stdout().flush();
        } else {
            self.print_block(result);
        }
    }

    /// Finish the run: terminates the quiet-mode progress line.
    pub fn finish(&self) {
        if self.quiet {
            println!();
        }
    }

    /// Render the end-of-run count summary, without trailing newline.
    pub fn render_summary(&self, results: &[CheckResult]) -> String {
        let count = |status: CheckStatus| results.iter().filter(|r| r.status == status).count();
        let line = format!(
            "{} checks: {} passed, {} warnings, {} failed, {} errors",
            results.len(),
            count(CheckStatus::Pass),
            count(CheckStatus::PassWithWarning),
            count(CheckStatus::Fail),
            count(CheckStatus::Error),
        );
        self.theme.dim.apply_to(line).to_string()
    }

    fn print_block(&self, result: &CheckResult) {
        println!("{}", self.render_result_line(result));
        if let Some(suggestion) = self.suggestion_for(result) {
            println!("{}", self.render_suggestion_box(suggestion));
        }
    }
}
