//! Generation run configuration.
//!
//! # Responsibility
//! - Carry validated per-run options from callers (CLI, tests) into the
//!   generation service.
//!
//! # Invariants
//! - A `GenerationConfig` always holds a headcount inside the accepted range.
//! - `seed = None` means an entropy-seeded, non-reproducible run.

use crate::export::ExportFormat;
use crate::model::headcount::{Headcount, HeadcountError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Options for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub headcount: Headcount,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub format: ExportFormat,
}

impl GenerationConfig {
    /// Validates a raw headcount into a config with default options.
    pub fn new(headcount: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            headcount: Headcount::new(headcount)?,
            seed: None,
            format: ExportFormat::default(),
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            headcount: Headcount::DEFAULT,
            seed: None,
            format: ExportFormat::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHeadcount(HeadcountError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeadcount(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHeadcount(err) => Some(err),
        }
    }
}

impl From<HeadcountError> for ConfigError {
    fn from(value: HeadcountError) -> Self {
        Self::InvalidHeadcount(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GenerationConfig};
    use crate::export::ExportFormat;
    use crate::model::headcount::{Headcount, HeadcountError};

    #[test]
    fn default_is_unseeded_csv_thousand() {
        let config = GenerationConfig::default();
        assert_eq!(config.headcount, Headcount::DEFAULT);
        assert_eq!(config.seed, None);
        assert_eq!(config.format, ExportFormat::Csv);
    }

    #[test]
    fn new_rejects_out_of_range_headcount() {
        let err = GenerationConfig::new(0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidHeadcount(HeadcountError::OutOfRange(0))
        );
    }

    #[test]
    fn deserializes_with_defaults_and_validates_headcount() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"headcount": 25, "format": "json"}"#).unwrap();
        assert_eq!(config.headcount.get(), 25);
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.seed, None);

        let err = serde_json::from_str::<GenerationConfig>(r#"{"headcount": 20001}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("between 1 and 20000"), "unexpected error: {err}");
    }

    #[test]
    fn builder_sets_seed_and_format() {
        let config = GenerationConfig::new(10)
            .unwrap()
            .with_seed(Some(7))
            .with_format(ExportFormat::Json);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format, ExportFormat::Json);
    }
}
