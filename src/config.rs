//! # Configuration Module
//!
//! Runtime settings read from the environment (and a `.env` file when present).
//! Bad values never abort a run: they are replaced by the default and handed
//! back to the caller, which logs them after the subscriber is installed.

use crate::measurement_types::MeasurementSystem;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Constants for configuration
pub const DEFAULT_DATA_PATH: &str = "data/cocktails.json";
pub const DEFAULT_RELATED_LIMIT: usize = 6;

pub const DATA_PATH_VAR: &str = "COCKTAILS_DATA_PATH";
pub const LOG_FORMAT_VAR: &str = "COCKTAILS_LOG_FORMAT";
pub const UNITS_VAR: &str = "COCKTAILS_UNITS";
pub const RELATED_LIMIT_VAR: &str = "COCKTAILS_RELATED_LIMIT";

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: {other}")),
        }
    }
}

/// Settings shared by every subcommand
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the JSON dataset file
    pub data_path: PathBuf,
    /// Log output style
    pub log_format: LogFormat,
    /// Unit system used when a command does not ask for one
    pub default_units: MeasurementSystem,
    /// How many related recipes to show
    pub related_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_format: LogFormat::default(),
            default_units: MeasurementSystem::default(),
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

/// A setting that was present but could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl AppConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::load().0
    }

    /// Read settings from the process environment, keeping the rejected
    /// values so they can be reported once logging is up
    pub fn load() -> (Self, Vec<RejectedSetting>) {
        Self::from_lookup_checked(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_checked(lookup).0
    }

    /// Like [`AppConfig::from_lookup`], also returning every value that fell back to its default
    pub fn from_lookup_checked<F>(lookup: F) -> (Self, Vec<RejectedSetting>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut rejected = Vec::new();

        let data_path = match lookup(DATA_PATH_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                rejected.push(RejectedSetting {
                    key: DATA_PATH_VAR,
                    value: raw,
                    reason: "empty path".to_string(),
                });
                defaults.data_path
            }
            Some(raw) => PathBuf::from(raw),
            None => defaults.data_path,
        };

        let config = Self {
            data_path,
            log_format: parse_or_default(&lookup, LOG_FORMAT_VAR, defaults.log_format, &mut rejected),
            default_units: parse_or_default(&lookup, UNITS_VAR, defaults.default_units, &mut rejected),
            related_limit: parse_or_default(
                &lookup,
                RELATED_LIMIT_VAR,
                defaults.related_limit,
                &mut rejected,
            ),
        };

        (config, rejected)
    }
}

fn parse_or_default<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    rejected: &mut Vec<RejectedSetting>,
) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                debug!("Falling back to default for {}", key);
                rejected.push(RejectedSetting {
                    key,
                    value: raw,
                    reason: e.to_string(),
                });
                default
            }
        },
        None => default,
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
        assert_eq!(AppConfig::from_lookup(lookup_from(&[])), AppConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATA_PATH_VAR, "/tmp/drinks.json"),
            (LOG_FORMAT_VAR, "JSON"),
            (UNITS_VAR, "metric"),
            (RELATED_LIMIT_VAR, "3"),
        ]));

        assert_eq!(config.data_path, PathBuf::from("/tmp/drinks.json"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_units, MeasurementSystem::Metric);
        assert_eq!(config.related_limit, 3);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATA_PATH_VAR, "  "),
            (UNITS_VAR, "cubits"),
            (RELATED_LIMIT_VAR, "-1"),
        ]));

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejected_settings_are_reported() {
        let (config, rejected) = AppConfig::from_lookup_checked(lookup_from(&[
            (UNITS_VAR, "cubits"),
            (RELATED_LIMIT_VAR, "-1"),
            (LOG_FORMAT_VAR, "json"),
        ]));

        assert_eq!(config.log_format, LogFormat::Json);
        let keys: Vec<&str> = rejected.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![UNITS_VAR, RELATED_LIMIT_VAR]);
        assert_eq!(rejected[0].value, "cubits");
        assert!(!rejected[1].reason.is_empty());

        let (_, rejected) = AppConfig::from_lookup_checked(lookup_from(&[(DATA_PATH_VAR, " ")]));
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].key, DATA_PATH_VAR);

        let (_, rejected) = AppConfig::from_lookup_checked(lookup_from(&[(UNITS_VAR, "metric")]));
        assert!(rejected.is_empty());
    }
}
