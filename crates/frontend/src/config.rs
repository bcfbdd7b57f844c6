//! Start-up configuration read from the page URL.
//!
//! Supported query parameters:
//! - `log` - console log level (`error`, `warn`, `info`, `debug`, `trace`)
//! - `topic` - example topic selected on first render (`components`, `view`, ...)

use contracts::content::TopicKey;
use serde::Deserialize;
use std::str::FromStr;
use web_sys::window;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: log::Level,
    pub topic: Option<TopicKey>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            topic: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    log: Option<String>,
    topic: Option<String>,
}

impl AppConfig {
    /// Parses a query string with or without the leading `?`.
    /// Unknown or malformed values fall back to the defaults.
    pub fn from_query(search: &str) -> Self {
        let params: QueryParams =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        Self {
            log_level: params
                .log
                .as_deref()
                .and_then(|level| log::Level::from_str(level.trim()).ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
            topic: params.topic.as_deref().and_then(TopicKey::parse),
        }
    }

    /// Reads the configuration from `window.location.search`.
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?"), AppConfig::default());
    }

    #[test]
    fn test_log_and_topic() {
        let config = AppConfig::from_query("?log=debug&topic=props");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.topic, Some(TopicKey::Props));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_query("log=loud&topic=jsx");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unrelated_params_ignored() {
        let config = AppConfig::from_query("utm_source=mail&topic=signals");
        assert_eq!(config.topic, Some(TopicKey::Signals));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
