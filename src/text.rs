//! Inline markup scanning for summaries and suggestion text.
//!
//! Two tiny, intentionally non-extensible markers are supported:
//!
//! - `<not/>` in a summary template expands to `"not"` on failure and
//!   `""` on success, so one template produces grammatical phrasing for
//!   both outcomes.
//! - `<cmd>...</cmd>` in suggestion text delimits a shell command span.
//!   Spans never nest and never cross line boundaries. The presenter
//!   stylizes the span and strips the markers; the markers never count
//!   toward layout width.
//!
//! These are handled with a dedicated scanning pass, not a templating
//! engine.

use std::sync::LazyLock;

use console::Style;
use regex::Regex;

static CMD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new("<cmd>(.+?)</cmd>").unwrap());
static CMD_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new("</?cmd>").unwrap());

/// Expand the `<not/>` placeholder in a summary template.
///
/// When `passed` is false the placeholder becomes `"not"`, otherwise it
/// is removed. Surrounding whitespace in the template is left untouched,
/// so `"is <not/> ok"` renders as `"is not ok"` / `"is  ok"`.
pub fn expand_not(template: &str, passed: bool) -> String {
    template.replace("<not/>", if passed { "" } else { "not" })
}

/// Remove `<cmd>`/`</cmd>` markers, leaving the span contents in place.
///
/// Used to compute the visible width of a suggestion line.
pub fn strip_cmd_markers(text: &str) -> String {
    CMD_MARKER.replace_all(text, "").into_owned()
}

/// Replace each `<cmd>...</cmd>` span with its contents styled by `style`.
pub fn stylize_cmds(text: &str, style: &Style) -> String {
    CMD_SPAN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            style.apply_to(&caps[1]).to_string()
        })
        .into_owned()
}

/// Remove common leading whitespace and surrounding blank lines.
///
/// Suggestion text is typically written as an indented multi-line string
/// literal; this normalizes it before box layout. The common prefix is
/// computed over non-blank lines only.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(f), Some(l)) => (f, l),
        _ => return String::new(),
    };
    let lines = &lines[first..=last];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        // get() guards against an offset landing inside a multibyte
        // whitespace character on lines indented differently
        .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}
