use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_HIDE_AFTER_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
    /// Sent as `Host` when the backend sits behind a shared local ingress.
    pub api_host_header: Option<String>,
    pub message_hide_after: Duration,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(
            lookup("ACTIVITIES_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_API_URL),
        )?;

        let api_host_header = lookup("ACTIVITIES_API_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        let hide_after_ms = match lookup("MESSAGE_HIDE_AFTER_MS") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::NotANumber {
                name: "MESSAGE_HIDE_AFTER_MS",
                value: v,
            })?,
            None => DEFAULT_HIDE_AFTER_MS,
        };

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::NotANumber {
                name: "PORT",
                value: v,
            })?,
            None => 3000,
        };

        Ok(Self {
            api_base_url,
            api_host_header,
            message_hide_after: Duration::from_millis(hide_after_ms),
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.api_base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(cfg.api_host_header, None);
        assert_eq!(cfg.message_hide_after, Duration::from_secs(5));
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("ACTIVITIES_API_URL", "http://api.local:9000/school"),
            ("ACTIVITIES_API_HOST", "activities.localhost"),
            ("MESSAGE_HIDE_AFTER_MS", "1500"),
            ("PORT", "8088"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base_url.host_str(), Some("api.local"));
        assert_eq!(cfg.api_host_header.as_deref(), Some("activities.localhost"));
        assert_eq!(cfg.message_hide_after, Duration::from_millis(1500));
        assert_eq!(cfg.port, 8088);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("ACTIVITIES_API_URL", "not a url")])),
            Err(ConfigError::ApiUrl(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])),
            Err(ConfigError::NotANumber { name: "PORT", .. })
        ));
    }
}
