//! Server configuration from environment variables.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::DEFAULT_HISTORY_LIMIT;
use crate::maps::MapsConfig;

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse
    #[error("invalid {key}={value:?}: {message}")]
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },

    /// Neither an API key nor a fixtures directory was given
    #[error("set GOOGLE_MAPS_API_KEY or COMMUTE_FIXTURES_DIR")]
    NoMappingService,
}

/// Where route candidates come from.
#[derive(Debug, Clone)]
pub enum MapsSource {
    /// The Google Directions API
    Google(MapsConfig),
    /// Recorded responses in a directory
    Fixtures(PathBuf),
}

/// Configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    pub maps: MapsSource,

    /// Messages kept per chat room.
    pub history_limit: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// `COMMUTE_FIXTURES_DIR` takes precedence over `GOOGLE_MAPS_API_KEY`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse_or(&lookup, "COMMUTE_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;
        let history_limit = parse_or(&lookup, "CHAT_HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?;

        let maps = if let Some(dir) = lookup("COMMUTE_FIXTURES_DIR") {
            MapsSource::Fixtures(PathBuf::from(dir))
        } else if let Some(key) = lookup("GOOGLE_MAPS_API_KEY").filter(|k| !k.is_empty()) {
            let mut config = MapsConfig::new(key)
                .with_timeout(parse_or(&lookup, "MAPS_TIMEOUT_SECS", 30)?)
                .with_max_concurrent(parse_or(&lookup, "MAPS_MAX_CONCURRENT", 5)?);
            if let Some(url) = lookup("MAPS_BASE_URL") {
                config = config.with_base_url(url);
            }
            MapsSource::Google(config)
        } else {
            return Err(ConfigError::NoMappingService);
        };

        Ok(Self {
            addr,
            maps,
            history_limit,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            tracing::debug!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_api_key() {
        let config = load(&[("GOOGLE_MAPS_API_KEY", "abc")]).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.history_limit, 5);
        match config.maps {
            MapsSource::Google(maps) => {
                assert_eq!(maps.api_key, "abc");
                assert_eq!(maps.timeout_secs, 30);
                assert_eq!(maps.max_concurrent, 5);
                assert_eq!(maps.base_url, "https://maps.googleapis.com");
            }
            other => panic!("expected Google source, got {other:?}"),
        }
    }

    #[test]
    fn custom_values() {
        let config = load(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("COMMUTE_ADDR", "0.0.0.0:8080"),
            ("CHAT_HISTORY_LIMIT", "20"),
            ("MAPS_TIMEOUT_SECS", "5"),
            ("MAPS_MAX_CONCURRENT", "2"),
            ("MAPS_BASE_URL", "http://localhost:9999"),
        ])
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.history_limit, 20);
        let MapsSource::Google(maps) = config.maps else {
            panic!("expected Google source");
        };
        assert_eq!(maps.timeout_secs, 5);
        assert_eq!(maps.max_concurrent, 2);
        assert_eq!(maps.base_url, "http://localhost:9999");
    }

    #[test]
    fn fixtures_take_precedence() {
        let config = load(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("COMMUTE_FIXTURES_DIR", "data/fixtures"),
        ])
        .unwrap();

        assert!(matches!(config.maps, MapsSource::Fixtures(ref p) if p == &PathBuf::from("data/fixtures")));
    }

    #[test]
    fn missing_mapping_service() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::NoMappingService);
        assert_eq!(
            load(&[("GOOGLE_MAPS_API_KEY", "")]).unwrap_err(),
            ConfigError::NoMappingService
        );
    }

    #[test]
    fn invalid_value() {
        let err = load(&[("GOOGLE_MAPS_API_KEY", "abc"), ("CHAT_HISTORY_LIMIT", "five")])
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "CHAT_HISTORY_LIMIT",
                ..
            }
        ));
    }
}
