//! Accessor configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use webstore_cookie::CookieEncoding;

use crate::Result;

/// Which backend the accessor should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Native store when the capability check passes, cookies otherwise
    #[default]
    Auto,
    /// Native store or fail
    Native,
    /// Always cookies
    Cookie,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend selection policy
    pub backend: BackendPreference,
    /// Encoding of keys and values in the cookie fallback
    pub cookie_encoding: CookieEncoding,
    /// Origin the native store is scoped to (desktop hosts)
    pub origin: Option<String>,
    /// SQLite file backing the native store (desktop hosts)
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Desktop configuration with the native store under `data_dir`.
    pub fn for_origin(origin: impl Into<String>, data_dir: impl AsRef<Path>) -> Self {
        Self {
            origin: Some(origin.into()),
            database_path: Some(data_dir.as_ref().join("webstore.db")),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend, BackendPreference::Auto);
        assert_eq!(config.cookie_encoding, CookieEncoding::Raw);
        assert!(config.origin.is_none());
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json_str(r#"{ "backend": "cookie" }"#).unwrap();
        assert_eq!(config.backend, BackendPreference::Cookie);
        assert_eq!(config.cookie_encoding, CookieEncoding::Raw);

        let config = Config::from_json_str(
            r#"{ "cookie_encoding": "percent", "origin": "https://example.com" }"#,
        )
        .unwrap();
        assert_eq!(config.backend, BackendPreference::Auto);
        assert_eq!(config.cookie_encoding, CookieEncoding::Percent);
        assert_eq!(config.origin.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_from_json_rejects_unknown_backend() {
        assert!(Config::from_json_str(r#"{ "backend": "indexeddb" }"#).is_err());
    }

    #[test]
    fn test_for_origin() {
        let config = Config::for_origin("https://example.com", "/tmp/webstore");
        assert_eq!(
            config.database_path,
            Some(PathBuf::from("/tmp/webstore/webstore.db"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("webstore-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "backend": "native", "origin": "https://example.com" }"#)
            .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.backend, BackendPreference::Native);

        std::fs::remove_file(&path).unwrap();
        assert!(Config::load(&path).is_err());
    }
}
