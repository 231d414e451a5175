use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct IgnoreFile {
    keys: Vec<String>,
}

/// Errors returned when loading an ignore-key file.
#[derive(Debug, Error)]
pub enum IgnoreLoadError {
    #[error("failed to read ignore file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse ignore file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load ignore-key substrings from a TOML file (`keys = ["...", ...]`).
pub fn load_ignore_keys(path: &Path) -> Result<Vec<String>, IgnoreLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| IgnoreLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let parsed: IgnoreFile = toml::from_str(&raw).map_err(|source| IgnoreLoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parsed.keys)
}

/// Built-in ignore-key substrings: device identity, secrets, and per-device
/// counters that differ between any two healthy units.
pub fn default_ignore_keys() -> Vec<String> {
    [
        "hostname",
        "set-date",
        "password",
        "passphrase",
        "psksecret",
        "secret",
        "secondary-secret",
        "snmp-index",
        "uuid",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{default_ignore_keys, load_ignore_keys, IgnoreLoadError};

    #[test]
    fn loads_valid_ignore_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ignore.toml");
        fs::write(&path, "keys = [\"hostname\", \"uuid\"]\n").expect("write ignore file");

        let keys = load_ignore_keys(&path).expect("ignore file should parse");
        assert_eq!(keys, vec!["hostname".to_string(), "uuid".to_string()]);
    }

    #[test]
    fn returns_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "keys = [unclosed").expect("write broken file");

        let err = load_ignore_keys(&path).expect_err("should fail parse");
        match err {
            IgnoreLoadError::Parse { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn returns_io_error_for_missing_file() {
        let err = load_ignore_keys(std::path::Path::new("/nonexistent/ignore.toml"))
            .expect_err("should fail read");
        match err {
            IgnoreLoadError::Io { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn defaults_cover_secrets_and_identity() {
        let defaults = default_ignore_keys();
        assert!(defaults.iter().any(|k| k == "password"));
        assert!(defaults.iter().any(|k| k == "hostname"));
    }
}
