//! Layered settings: built-in defaults, TOML file, environment, CLI flags.
//!
//! Settings cover the global view state only. Rows are never persisted.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::curves::{CurveConfig, CurveType};
use crate::generate::DEFAULT_STEP_COUNT;
use crate::interpolation::ColorSpace;
use crate::session::{MAX_STEP_COUNT, MIN_STEP_COUNT};

/// Prefix for environment overrides, e.g. `PAVLETTE_STEP_COUNT=4`.
/// Nested keys use a double underscore: `PAVLETTE_CURVE__TYPE=sigmoid`.
pub const ENV_PREFIX: &str = "PAVLETTE_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error writing a file
    Io(std::io::Error),
    /// `--config` pointed at a file that does not exist
    NotFound(PathBuf),
    /// A layer could not be read or did not match the settings shape
    Extract(Box<figment::Error>),
    /// TOML serialization error
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            Self::Extract(e) => write!(f, "invalid configuration: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Global view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mixes on each side of the base color (1-10)
    pub step_count: usize,
    /// Preview swatches in grey scale
    pub grey_scale: bool,
    /// Space used for mixing
    pub color_space: ColorSpace,
    /// Easing applied to mix fractions
    pub curve: CurveConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            grey_scale: false,
            color_space: ColorSpace::default(),
            curve: CurveConfig::default(),
        }
    }
}

/// Explicit overrides, typically from CLI flags. Unset fields are left out
/// of serialization so they never mask a lower layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grey_scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<ColorSpace>,
    #[serde(skip_serializing_if = "CurveOverrides::is_empty")]
    pub curve: CurveOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CurveOverrides {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub curve_type: Option<CurveType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f32>,
}

impl CurveOverrides {
    pub fn is_empty(&self) -> bool {
        self.curve_type.is_none() && self.strength.is_none()
    }
}

impl Settings {
    /// Build settings from every layer, lowest priority first.
    pub fn load(path: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        let settings: Self = Self::figment(path, overrides)?.extract()?;
        Ok(settings.normalized())
    }

    /// The layered provider stack behind [`Settings::load`].
    pub fn figment(
        path: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides)))
    }

    /// Parse settings from a TOML string on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::string(content))
            .extract()?;
        Ok(settings.normalized())
    }

    /// Save settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pull out-of-range values back into range.
    pub fn normalized(mut self) -> Self {
        self.step_count = self.step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
        self.curve.strength = self.curve.strength.clamp(0.1, 5.0);
        self
    }
}
