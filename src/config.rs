// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Nothing here is secret; every value has a local-development default.

use std::env;
use std::path::PathBuf;

/// Default Ungfritid activity search endpoint.
pub const DEFAULT_UNGFRITID_BASE_URL: &str = "https://ungfritid.no/api/findactivities";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Full URL of the Ungfritid `findactivities` endpoint
    pub ungfritid_base_url: String,
    /// Path to the static city-keyed activity catalog
    pub city_data_path: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:3000".to_string(),
            ungfritid_base_url: DEFAULT_UNGFRITID_BASE_URL.to_string(),
            city_data_path: PathBuf::from("data/activities.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => defaults.port,
        };

        let ungfritid_base_url = lookup("UNGFRITID_BASE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.ungfritid_base_url);
        reqwest::Url::parse(&ungfritid_base_url)
            .map_err(|_| ConfigError::Invalid("UNGFRITID_BASE_URL", ungfritid_base_url.clone()))?;

        Ok(Self {
            port,
            frontend_url: lookup("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            ungfritid_base_url,
            city_data_path: lookup("CITY_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.city_data_path),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("Config should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.ungfritid_base_url, DEFAULT_UNGFRITID_BASE_URL);
        assert_eq!(config.city_data_path, PathBuf::from("data/activities.json"));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3001"),
            ("FRONTEND_URL", "https://togedoo.no"),
            ("UNGFRITID_BASE_URL", "http://127.0.0.1:9999/api/findactivities"),
            ("CITY_DATA_PATH", "/srv/togedoo/cities.json"),
        ]))
        .expect("Config should load");

        assert_eq!(config.port, 3001);
        assert_eq!(config.frontend_url, "https://togedoo.no");
        assert_eq!(
            config.ungfritid_base_url,
            "http://127.0.0.1:9999/api/findactivities"
        );
        assert_eq!(
            config.city_data_path,
            PathBuf::from("/srv/togedoo/cities.json")
        );
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        let err = Config::from_lookup(lookup_from(&[("UNGFRITID_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("UNGFRITID_BASE_URL", _)));
    }
}
