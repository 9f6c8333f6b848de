use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "PIGMENT_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Decimal places for floating channels when printing (None = shortest form)
    pub precision: Option<usize>,

    /// Settings for the random fuzz loop
    pub fuzz: FuzzConfig,

    /// Settings for the demo walkthrough
    pub demo: DemoConfig,
}

/// Configuration for the random fuzz loop
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FuzzConfig {
    /// Number of random inputs to exercise
    pub iterations: usize,

    /// Fixed RNG seed (random if unset)
    pub seed: Option<u64>,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

/// Configuration for the demo walkthrough
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Include the alpha channel section
    pub show_alpha: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { show_alpha: true }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from an explicit path or `PIGMENT_CONFIG`.
    ///
    /// Falls back to defaults when nothing is configured or the file
    /// cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    precision = ?config.precision,
                    iterations = config.fuzz.iterations,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
