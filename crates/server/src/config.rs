use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use tracing::info;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Invalid {key} value {value:?}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    /// `0` binds an ephemeral port.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

impl Config {
    /// Read `TRIPMAP_HOST` and `TRIPMAP_PORT`, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "TRIPMAP_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "TRIPMAP_PORT", "8080")?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        message: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_lookup(lookup(&[("TRIPMAP_HOST", "0.0.0.0"), ("TRIPMAP_PORT", "0")]))
                .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:0");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("TRIPMAP_PORT", "http")])).unwrap_err();
        assert_eq!(err.key, "TRIPMAP_PORT");
        assert_eq!(err.value, "http");
    }
}
