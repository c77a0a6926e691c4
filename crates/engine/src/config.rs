//! Runtime configuration from the environment.
//!
//! `.env.local` and `.env` at the repo root are loaded first (see `main`), so
//! every value here can live in a dotenv file. CLI flags override afterwards.

use std::path::PathBuf;

use dragonbane_domain::CharacterGenerator;

use crate::infrastructure::openai::{DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_SERVER};

pub const DEFAULT_DATABASE: &str = "dragonbane.sqlite";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding the character library
    pub database_path: String,
    /// Directory with the weakness, memento and appearance wordlists
    pub data_dir: PathBuf,
    pub openai_server: String,
    /// Sent as a bearer token only when non-empty
    pub openai_api_key: String,
    pub openai_model: String,
    /// Upper bound on regenerate-until-match attempts
    pub max_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            openai_server: DEFAULT_OPENAI_SERVER.to_string(),
            openai_api_key: String::new(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            max_attempts: CharacterGenerator::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AppConfig {
    /// Read `DRAGONBANE_DATABASE`, `DRAGONBANE_DATA_DIR`, `OPENAI_SERVER`,
    /// `OPENAI_API_KEY`, `OPENAI_MODEL` and `DRAGONBANE_MAX_ATTEMPTS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary lookup, so tests
    /// don't have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_attempts = match value("DRAGONBANE_MAX_ATTEMPTS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = defaults.max_attempts,
                        "Invalid DRAGONBANE_MAX_ATTEMPTS, using default"
                    );
                    defaults.max_attempts
                }
            },
            None => defaults.max_attempts,
        };

        Self {
            database_path: value("DRAGONBANE_DATABASE").unwrap_or(defaults.database_path),
            data_dir: value("DRAGONBANE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            openai_server: value("OPENAI_SERVER").unwrap_or(defaults.openai_server),
            openai_api_key: value("OPENAI_API_KEY").unwrap_or(defaults.openai_api_key),
            openai_model: value("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_attempts, 1000);
        assert!(config.openai_api_key.is_empty());
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DRAGONBANE_DATABASE", "/tmp/lib.sqlite"),
            ("DRAGONBANE_DATA_DIR", "/srv/data"),
            ("OPENAI_SERVER", "http://localhost:1234"),
            ("OPENAI_API_KEY", " sk-test "),
            ("OPENAI_MODEL", "qwen"),
            ("DRAGONBANE_MAX_ATTEMPTS", "50"),
        ]));
        assert_eq!(config.database_path, "/tmp/lib.sqlite");
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.openai_server, "http://localhost:1234");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_model, "qwen");
        assert_eq!(config.max_attempts, 50);
    }

    #[test]
    fn bad_attempt_counts_fall_back() {
        for raw in ["zero", "0", "-4"] {
            let config = AppConfig::from_lookup(lookup(&[("DRAGONBANE_MAX_ATTEMPTS", raw)]));
            assert_eq!(config.max_attempts, 1000);
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("OPENAI_MODEL", "   ")]));
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
    }
}
