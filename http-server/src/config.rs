use std::net::SocketAddr;
use storefront::Latency;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Prefix for absolute URLs, empty for relative ones
    pub api_base_url: String,
    pub latency_scale: f64,
    /// Redirect unauthenticated page requests to the login page
    pub enforce_auth: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 6957)),
            api_base_url: String::new(),
            latency_scale: 1.0,
            enforce_auth: false,
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("API_BASE_URL") {
            config.api_base_url = value.trim().trim_end_matches('/').to_string();
        }

        if let Some(value) = lookup("LATENCY_SCALE") {
            let scale: f64 = value.parse().map_err(|_| ConfigError::Invalid {
                key: "LATENCY_SCALE",
                value: value.clone(),
            })?;
            if !scale.is_finite() || scale < 0.0 || Latency::default().scaled(scale).is_none() {
                return Err(ConfigError::Invalid {
                    key: "LATENCY_SCALE",
                    value,
                });
            }
            config.latency_scale = scale;
        }

        if let Some(value) = lookup("ENFORCE_AUTH") {
            config.enforce_auth = parse_flag("ENFORCE_AUTH", &value)?;
        }

        Ok(config)
    }

    /// Delay table for the configured scale. A scale too large to represent
    /// (only possible when `Config` is built by hand) keeps the default delays.
    pub fn latency(&self) -> Latency {
        Latency::default()
            .scaled(self.latency_scale)
            .unwrap_or_else(|| {
                tracing::warn!(scale = self.latency_scale, "Latency scale out of range");
                Latency::default()
            })
    }

    /// Joins a path onto the configured base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.port(), 6957);
        assert_eq!(config.latency(), Latency::default());
    }

    #[test]
    fn test_reads_every_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("API_BASE_URL", "https://shop.example.com/"),
            ("LATENCY_SCALE", "0"),
            ("ENFORCE_AUTH", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.latency(), Latency::none());
        assert!(config.enforce_auth);
        assert_eq!(
            config.url("/auth?mode=login"),
            "https://shop.example.com/auth?mode=login"
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[("LATENCY_SCALE", "-1")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "LATENCY_SCALE",
                value: "-1".to_string()
            }
        );
        assert!(Config::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("ENFORCE_AUTH", "maybe")])).is_err());
    }

    #[test]
    fn test_rejects_latency_scale_that_overflows() {
        let err = Config::from_lookup(lookup_from(&[("LATENCY_SCALE", "1e300")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "LATENCY_SCALE",
                value: "1e300".to_string()
            }
        );

        let config = Config {
            latency_scale: 1e300,
            ..Config::default()
        };
        assert_eq!(config.latency(), Latency::default());
    }

    #[test]
    fn test_relative_urls_without_base() {
        let config = Config::default();
        assert_eq!(config.url("/api/orders"), "/api/orders");
    }
}
