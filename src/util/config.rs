use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::domain::{CargoType, ReferenceData, ReferenceError, ServiceLevel};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Meridian";
const APP_NAME: &str = "MeridianQuote";

pub const DEFAULT_SUPPORT_PHONE: &str = "800-MERIDIAN";
pub const DEFAULT_LOG_FILTER: &str = "meridian_quote=info";

static ACTIVE: OnceLock<QuoteConfig> = OnceLock::new();

/// Optional settings read from `config.json` in the platform config directory.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub default_service: ServiceLevel,
    pub default_cargo_type: CargoType,
    pub support_phone: Option<String>,
    pub log_filter: Option<String>,
    /// Replaces the built-in country/city and route-code tables when present.
    pub reference: Option<ReferenceData>,
}

impl QuoteConfig {
    pub fn support_phone(&self) -> &str {
        self.support_phone.as_deref().unwrap_or(DEFAULT_SUPPORT_PHONE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn reference_data(&self) -> ReferenceData {
        self.reference.clone().unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("reference tables rejected: {0}")]
    Reference(#[from] ReferenceError),
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Reads the config file. A missing file (or no config directory) is not an error.
pub fn load_config() -> Result<QuoteConfig, ConfigError> {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(QuoteConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<QuoteConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => parse_config(&data),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(QuoteConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn parse_config(data: &str) -> Result<QuoteConfig, ConfigError> {
    let config: QuoteConfig = serde_json::from_str(data)?;
    if let Some(reference) = &config.reference {
        reference.check()?;
    }
    Ok(config)
}

/// Makes `config` the one the UI reads. Only the first call wins.
pub fn install(config: QuoteConfig) {
    if ACTIVE.set(config).is_err() {
        tracing::warn!("configuration already installed; keeping the first one");
    }
}

pub fn active() -> &'static QuoteConfig {
    ACTIVE.get_or_init(QuoteConfig::default)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.support_phone(), DEFAULT_SUPPORT_PHONE);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.reference_data(), ReferenceData::default());
    }

    #[test]
    fn preferences_are_read() {
        let config = parse_config(
            r#"{
                "default_service": "RoadFreightGCC",
                "default_cargo_type": "Dangerous",
                "support_phone": "+971 4 000 0000",
                "log_filter": "meridian_quote=debug"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_service, ServiceLevel::RoadFreightGcc);
        assert_eq!(config.default_cargo_type, CargoType::Dangerous);
        assert_eq!(config.support_phone(), "+971 4 000 0000");
        assert_eq!(config.log_filter(), "meridian_quote=debug");
    }

    #[test]
    fn reference_override_replaces_tables() {
        let config = parse_config(
            r#"{
                "reference": {
                    "countries": [{ "country": "FR-France", "cities": ["Paris", "Lyon"] }],
                    "route_codes": { "Paris": "CDG", "Lyon": "LYS" },
                    "origin_countries": ["FR-France"],
                    "destination_countries": ["FR-France"]
                }
            }"#,
        )
        .unwrap();
        let reference = config.reference_data();
        assert_eq!(reference.cities("FR-France"), ["Paris", "Lyon"]);
        assert_eq!(reference.route_code("Lyon"), Some("LYS"));
        assert!(reference.cities("AE-United Arab Emirates").is_empty());
    }

    #[test]
    fn inconsistent_reference_is_rejected() {
        let result = parse_config(
            r#"{
                "reference": {
                    "countries": [{ "country": "FR-France", "cities": ["Paris"] }],
                    "route_codes": {},
                    "origin_countries": ["FR-France"],
                    "destination_countries": ["FR-France"]
                }
            }"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::Reference(ReferenceError::MissingRouteCode { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_config("{ \"support_phone\": "),
            Err(ConfigError::Serde(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("meridian-quote-missing").join("config.json");
        assert_eq!(load_config_from(&path).unwrap(), QuoteConfig::default());
    }
}
