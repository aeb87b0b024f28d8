use std::{env, fmt::Display, str::FromStr};

use log::info;
use thiserror::Error;

/// Default management service location used for reference checks
pub const DEFAULT_MANAGEMENT_URL: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// The three deployable services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Management,
    Reservations,
    Activities,
}

impl Service {
    pub fn default_database_url(&self) -> &'static str {
        match self {
            Self::Management => "sqlite://management.db?mode=rwc",
            Self::Reservations => "sqlite://reservas.db?mode=rwc",
            Self::Activities => "sqlite://atividades.db?mode=rwc",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Management => 5000,
            Self::Reservations => 5001,
            Self::Activities => 5002,
        }
    }

    /// Whether writes of this service reference management records
    pub fn depends_on_management(&self) -> bool {
        !matches!(self, Self::Management)
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Management => write!(f, "management"),
            Self::Reservations => write!(f, "reservas"),
            Self::Activities => write!(f, "atividades"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Target of reference checks; the management service never reads it
    pub management_url: String,
}

impl Config {
    /// Loads the configuration of `service` from the process environment
    pub fn load(service: Service) -> Result<Self, ConfigError> {
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    /// Loads the configuration of `service`, reading variables through `var`
    pub fn from_lookup<F>(service: Service, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let management_url = if service.depends_on_management() {
            or_default(&var, "MANAGEMENT_URL", DEFAULT_MANAGEMENT_URL)
        } else {
            DEFAULT_MANAGEMENT_URL.to_string()
        };

        Ok(Self {
            database_url: or_default(&var, "DATABASE_URL", service.default_database_url()),
            port: parse_or_default(&var, "PORT", service.default_port())?,
            management_url,
        })
    }
}

fn or_default<F>(var: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or_default<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(Service::Reservations, vars(&[])).unwrap();

        assert_eq!(config.port, 5001);
        assert_eq!(config.database_url, "sqlite://reservas.db?mode=rwc");
        assert_eq!(config.management_url, DEFAULT_MANAGEMENT_URL);
    }

    #[test]
    fn test_management_has_no_dependency() {
        let config = Config::from_lookup(
            Service::Management,
            vars(&[("MANAGEMENT_URL", "http://elsewhere:9000")]),
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.management_url, DEFAULT_MANAGEMENT_URL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(
            Service::Activities,
            vars(&[
                ("PORT", "8080"),
                ("DATABASE_URL", "sqlite::memory:"),
                ("MANAGEMENT_URL", "http://management:5000"),
            ]),
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                database_url: "sqlite::memory:".to_string(),
                port: 8080,
                management_url: "http://management:5000".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(Service::Management, vars(&[("PORT", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }
}
