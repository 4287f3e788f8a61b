use std::path::Path;
use std::time::Duration;

use dialectkit_core::{DataSource, Error as CoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

/// CLI settings: TOML file first, then command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub driver: String,
    pub data_source: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            driver: "postgres".to_string(),
            data_source: None,
            max_connections: 5,
            acquire_timeout_secs: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub driver: Option<String>,
    pub data_source: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(driver) = overrides.driver {
            self.driver = driver;
        }
        if let Some(data_source) = overrides.data_source {
            self.data_source = Some(data_source);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
        self
    }

    pub fn data_source(&self) -> Result<DataSource, CoreError> {
        let uri = self
            .data_source
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| {
                CoreError::InvalidConfig(
                    "data source is required (--conn, DATABASE_URL or config file)".to_string(),
                )
            })?;
        if self.max_connections == 0 {
            return Err(CoreError::InvalidConfig(
                "max_connections must be at least 1".to_string(),
            ));
        }

        let mut source = DataSource::new(self.driver.clone(), uri);
        source.max_connections = self.max_connections;
        source.acquire_timeout = Duration::from_secs(self.acquire_timeout_secs);
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            data_source = "postgres://localhost/app"
            log_format = "json"
            "#,
        )
        .expect("parse settings");

        assert_eq!(settings.driver, "postgres");
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(
            settings.data_source.as_deref(),
            Some("postgres://localhost/app")
        );
    }

    #[test]
    fn overrides_win_over_file() {
        let settings = Settings::default().apply(Overrides {
            driver: Some("postgresql".to_string()),
            data_source: Some("postgres://db/app".to_string()),
            log_level: Some("debug".to_string()),
            log_format: None,
        });

        assert_eq!(settings.driver, "postgresql");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_format, LogFormat::Text);

        let source = settings.data_source().expect("data source");
        assert_eq!(source.driver_name, "postgresql");
        assert_eq!(source.uri, "postgres://db/app");
        assert_eq!(source.acquire_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_data_source_is_invalid() {
        let err = Settings::default().data_source().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn mistyped_values_are_rejected() {
        assert!(Settings::from_toml("max_connections = \"many\"").is_err());
    }
}
