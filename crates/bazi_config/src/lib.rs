//! Configuration for the `bazi` tools.
//!
//! ```toml
//! [location]
//! longitude = 101.6869
//! utc_offset = "+8"        # or 5.5
//!
//! [output]
//! format = "json"
//!
//! [places.kuala-lumpur]
//! longitude = 101.6869
//! utc_offset = 8
//! ```
//!
//! The file is found via an explicit path, then `$BAZI_CONFIG`, then
//! `<config dir>/bazi/config.toml`. A missing file is not an error.

pub mod error;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bazi_time::UtcOffset;
use serde::Deserialize;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "BAZI_CONFIG";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaziConfig {
    pub location: LocationConfig,
    pub output: OutputConfig,
    /// Named places for `--place` lookups.
    pub places: BTreeMap<String, PlaceConfig>,
}

/// Default birth location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    /// Degrees east positive.
    pub longitude: Option<f64>,
    pub utc_offset: Option<OffsetValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A named place with a fixed longitude and offset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceConfig {
    pub longitude: f64,
    pub utc_offset: OffsetValue,
}

/// UTC offset written either as hours (`8`, `5.5`) or as text (`"+05:30"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OffsetValue {
    Hours(f64),
    Text(String),
}

impl OffsetValue {
    pub fn to_offset(&self) -> Result<UtcOffset, bazi_time::TimeError> {
        match self {
            Self::Hours(h) => UtcOffset::from_hours(*h),
            Self::Text(s) => s.parse(),
        }
    }
}

impl BaziConfig {
    /// Load from the first configured location; `Ok(None)` if there is no file.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        match config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load a specific file; `Ok(None)` if it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), places = config.places.len(), "loaded config");
        Ok(Some(config))
    }

    /// Check longitudes and offsets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lon) = self.location.longitude {
            check_longitude("location.longitude", lon)?;
        }
        if let Some(off) = &self.location.utc_offset {
            off.to_offset()
                .map_err(|e| ConfigError::invalid("location.utc_offset", e))?;
        }
        for (name, place) in &self.places {
            check_longitude(&format!("places.{name}.longitude"), place.longitude)?;
            place
                .utc_offset
                .to_offset()
                .map_err(|e| ConfigError::invalid(format!("places.{name}.utc_offset"), e))?;
        }
        Ok(())
    }

    /// Configured default longitude.
    pub fn longitude(&self) -> Option<f64> {
        self.location.longitude
    }

    /// Configured default UTC offset.
    pub fn utc_offset(&self) -> Result<Option<UtcOffset>, ConfigError> {
        self.location
            .utc_offset
            .as_ref()
            .map(|o| o.to_offset().map_err(|e| ConfigError::invalid("location.utc_offset", e)))
            .transpose()
    }

    /// Look up a named place, ignoring ASCII case.
    pub fn place(&self, name: &str) -> Option<&PlaceConfig> {
        self.places
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name.trim()))
            .map(|(_, v)| v)
    }
}

fn check_longitude(key: &str, lon: f64) -> Result<(), ConfigError> {
    if lon.is_finite() && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, format!("{lon} is not within -180..=180")))
    }
}

/// Path the configuration would be read from.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_path(explicit, std::env::var_os(CONFIG_ENV), dirs::config_dir())
}

fn resolve_path(
    explicit: Option<&Path>,
    env: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    config_dir.map(|d| d.join("bazi").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config: BaziConfig = toml::from_str("").unwrap();
        assert_eq!(config, BaziConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn parses_full_file() {
        let toml_str = r#"
            [location]
            longitude = 101.6869
            utc_offset = "+8"

            [output]
            format = "json"

            [places.Delhi]
            longitude = 77.209
            utc_offset = 5.5

            [places.ny]
            longitude = -74.006
            utc_offset = -5
        "#;
        let config: BaziConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.longitude(), Some(101.6869));
        assert_eq!(config.utc_offset().unwrap().unwrap().minutes(), 480);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.place("delhi").unwrap().utc_offset.to_offset().unwrap().minutes(), 330);
        assert_eq!(config.place("NY").unwrap().utc_offset, OffsetValue::Hours(-5.0));
        assert!(config.place("paris").is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(toml::from_str::<BaziConfig>("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config: BaziConfig = toml::from_str("[location]\nlongitude = 200.0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let config: BaziConfig = toml::from_str("[location]\nutc_offset = \"+25\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("location.utc_offset"));
    }

    #[test]
    fn path_resolution_order() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        let env = Some(OsString::from("/tmp/env.toml"));
        let dir = Some(PathBuf::from("/home/u/.config"));

        assert_eq!(resolve_path(Some(&explicit), env.clone(), dir.clone()), Some(explicit));
        assert_eq!(
            resolve_path(None, env, dir.clone()),
            Some(PathBuf::from("/tmp/env.toml"))
        );
        assert_eq!(
            resolve_path(None, Some(OsString::new()), dir),
            Some(PathBuf::from("/home/u/.config/bazi/config.toml"))
        );
        assert_eq!(resolve_path(None, None, None), None);
    }

    #[test]
    fn missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = BaziConfig::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[location]\nlongitude = -74.006\nutc_offset = \"-05:00\"\n").unwrap();

        let config = BaziConfig::load(Some(&path)).unwrap().unwrap();
        assert_eq!(config.longitude(), Some(-74.006));
        assert_eq!(config.utc_offset().unwrap().unwrap().minutes(), -300);
    }

    #[test]
    fn malformed_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[location\nlongitude = 1").unwrap();

        let err = BaziConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
