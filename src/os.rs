//! Operating system detection for suggestion selection.
//!
//! Suggestions are keyed by [`CurrentOs`], with [`CurrentOs::Generic`] as
//! the wildcard fallback. Detection is a fresh function call every time,
//! never a cached process-wide singleton, so the presenter stays testable
//! with injected OS values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// OS identifiers used as keys in a check's suggestion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentOs {
    /// macOS.
    MacOs,
    /// Ubuntu (and derivatives that identify as ubuntu).
    Ubuntu,
    /// Debian.
    Debian,
    /// Fedora.
    Fedora,
    /// Arch Linux.
    Arch,
    /// Windows.
    Windows,
    /// Wildcard fallback for any OS without a more specific entry.
    Generic,
}

impl fmt::Display for CurrentOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurrentOs::MacOs => "macos",
            CurrentOs::Ubuntu => "ubuntu",
            CurrentOs::Debian => "debian",
            CurrentOs::Fedora => "fedora",
            CurrentOs::Arch => "arch",
            CurrentOs::Windows => "windows",
            CurrentOs::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}

/// Detect the host operating system.
///
/// On Linux the distro is read from the `ID=` field of `/etc/os-release`;
/// unrecognized distros map to [`CurrentOs::Generic`].
pub fn detect_os() -> CurrentOs {
    if cfg!(target_os = "macos") {
        CurrentOs::MacOs
    } else if cfg!(target_os = "windows") {
        CurrentOs::Windows
    } else if cfg!(target_os = "linux") {
        detect_linux_distro(&std::fs::read_to_string("/etc/os-release").unwrap_or_default())
    } else {
        CurrentOs::Generic
    }
}

/// Map the contents of an os-release file to a distro identifier.
fn detect_linux_distro(os_release: &str) -> CurrentOs {
    let id = os_release
        .lines()
        .find_map(|line| line.strip_prefix("ID="))
        .map(|v| v.trim_matches('"').trim().to_lowercase())
        .unwrap_or_default();

    match id.as_str() {
        "ubuntu" => CurrentOs::Ubuntu,
        "debian" => CurrentOs::Debian,
        "fedora" => CurrentOs::Fedora,
        "arch" => CurrentOs::Arch,
        _ => CurrentOs::Generic,
    }
}
