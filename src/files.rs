//! File and JSON inspection helpers for checks.

use std::path::Path;

use crate::error::{MedkitError, Result};

/// Whether a path exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| MedkitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check a 1Password-style account config for a configured shorthand.
///
/// The file shape is `{"accounts": [{"shorthand": "..."}, ...]}`.
pub fn json_account_exists(path: &Path, shorthand: &str) -> Result<bool> {
    let config = read_json(path)?;
    let found = config
        .get("accounts")
        .and_then(|a| a.as_array())
        .map(|accounts| {
            accounts
                .iter()
                .any(|account| account.get("shorthand").and_then(|s| s.as_str()) == Some(shorthand))
        })
        .unwrap_or(false);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_for_regular_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("present.txt");
        fs::write(&path, "x").unwrap();
        assert!(file_exists(&path));
        assert!(!file_exists(&temp.path().join("absent.txt")));
    }

    #[test]
    fn file_exists_false_for_directory() {
        let temp = TempDir::new().unwrap();
        assert!(!file_exists(temp.path()));
    }

    #[test]
    fn read_json_parses_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"key": 1}"#).unwrap();
        let value = read_json(&path).unwrap();
        assert_eq!(value["key"], 1);
    }

    #[test]
    fn read_json_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{nope").unwrap();
        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, MedkitError::ConfigParseError { .. }));
    }

    #[test]
    fn json_account_exists_finds_shorthand() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("op.json");
        fs::write(
            &path,
            r#"{"accounts": [{"shorthand": "acme"}, {"shorthand": "other"}]}"#,
        )
        .unwrap();

        assert!(json_account_exists(&path, "acme").unwrap());
        assert!(!json_account_exists(&path, "missing").unwrap());
    }

    #[test]
    fn json_account_exists_handles_missing_accounts_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("op.json");
        fs::write(&path, r#"{}"#).unwrap();
        assert!(!json_account_exists(&path, "acme").unwrap());
    }
}
