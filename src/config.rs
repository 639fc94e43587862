// Configuration for building distributions from exchange-format data
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::linearisation::LinearisationTolerance;

/// Options that readers pass along when they turn parsed data into
/// distributions.
///
/// The configuration is a plain value: it is passed explicitly to the
/// functions that need it and nothing in the library keeps a global copy.
/// It can be read from JSON, where every field is optional:
///
/// ```
/// let config = ndtab::Config::from_json_str(r#"{ "normalise": false }"#).unwrap();
/// assert!(!config.normalise);
/// assert_eq!(config.linearisation.max_depth, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Normalise tabulated densities when they are built from raw data
    pub normalise: bool,
    /// Relative deviation of a source integral from unity that gets logged
    /// as a warning during normalisation
    pub normalisation_warning: f64,
    /// Convergence criterion for linearisation
    pub linearisation: LinearisationTolerance,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            normalise: true,
            normalisation_warning: 1e-3,
            linearisation: LinearisationTolerance::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialise the configuration to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
