//! Explicit configuration for chart scoring and searches.
//!
//! Every choice that would otherwise be process-wide state (term and face
//! table variants, the house offset convention, the primary-direction
//! ceiling and search caps) lives in a [`FalakConfig`] value that callers
//! thread into the scorers. All sections are optional in TOML; missing
//! fields take their defaults.
//!
//! ```toml
//! [dignity]
//! terms = "lilly"
//! faces = "chaldean"
//!
//! [houses]
//! offset = "modern"
//!
//! [directions]
//! max_arc = 90.0
//! ```

pub mod error;

use std::fs;
use std::path::Path;

use falak_core::{HouseOffset, SearchConfig};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Named variants of the term (bounds) table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermVariant {
    #[default]
    Egyptian,
    Tetrabiblos,
    Lilly,
}

/// Named variants of the face (decan) table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceVariant {
    #[default]
    Chaldean,
    Triplicity,
}

/// Dignity table selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DignityConfig {
    pub terms: TermVariant,
    pub faces: FaceVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HousesConfig {
    pub offset: HouseOffset,
}

/// Primary-direction table settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsConfig {
    /// Exclusive upper bound for retained arcs in degrees (default 100).
    pub max_arc: f64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self { max_arc: 100.0 }
    }
}

impl DirectionsConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.max_arc.is_finite() || self.max_arc <= 0.0 || self.max_arc > 360.0 {
            return Err("max_arc must be in (0, 360]");
        }
        Ok(())
    }
}

/// Root configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FalakConfig {
    pub dignity: DignityConfig,
    pub houses: HousesConfig,
    pub directions: DirectionsConfig,
    pub search: SearchConfig,
}

impl FalakConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.directions.validate().map_err(ConfigError::Invalid)?;
        self.search.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = FalakConfig::from_toml_str("").unwrap();
        assert_eq!(config, FalakConfig::default());
        assert_eq!(config.dignity.terms, TermVariant::Egyptian);
        assert_eq!(config.dignity.faces, FaceVariant::Chaldean);
        assert_eq!(config.houses.offset, HouseOffset::Traditional);
        assert_eq!(config.directions.max_arc, 100.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            [dignity]
            terms = "lilly"

            [houses]
            offset = "evolutive"

            [search]
            station_max_steps = 500
        "#;
        let config = FalakConfig::from_toml_str(text).unwrap();
        assert_eq!(config.dignity.terms, TermVariant::Lilly);
        assert_eq!(config.dignity.faces, FaceVariant::Chaldean);
        assert_eq!(config.houses.offset, HouseOffset::Evolutive);
        assert_eq!(config.search.station_max_steps, 500);
        assert_eq!(config.search.max_iterations, SearchConfig::default().max_iterations);
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let err = FalakConfig::from_toml_str("[dignity]\nterms = \"persian\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_arc_is_rejected() {
        let err = FalakConfig::from_toml_str("[directions]\nmax_arc = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FalakConfig::load("/nonexistent/falak.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("falak.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn round_trips_through_toml() {
        let config = FalakConfig {
            dignity: DignityConfig {
                terms: TermVariant::Tetrabiblos,
                faces: FaceVariant::Triplicity,
            },
            ..FalakConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(FalakConfig::from_toml_str(&text).unwrap(), config);
    }
}
