//! Run configuration
//!
//! Defaults reproduce the stock roster: 500 employees, 40% female, born between
//! 1938 and 2008, stored in `employees.csv` and exported to `employees.xlsx`.
//! A JSON file named by `CENSUS_CONFIG` may override any subset of the fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::bracket::BracketScheme;
use crate::error::{CensusError, Result};

pub const CONFIG_ENV: &str = "CENSUS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub record_count: usize,
    /// Share of female records; the female count is rounded down.
    pub female_ratio: f64,
    /// First possible birth date, inclusive.
    pub birth_start: NaiveDate,
    /// Last possible birth date, inclusive.
    pub birth_end: NaiveDate,
    /// Fixed seed for reproducible rosters.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 500,
            female_ratio: 0.4,
            birth_start: NaiveDate::from_ymd_opt(1938, 1, 1).unwrap_or_default(),
            birth_end: NaiveDate::from_ymd_opt(2008, 12, 31).unwrap_or_default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.female_ratio) {
            return Err(CensusError::InvalidConfig(format!(
                "female_ratio must be within 0..=1, got {}",
                self.female_ratio
            )));
        }
        if self.birth_start > self.birth_end {
            return Err(CensusError::InvalidConfig(format!(
                "birth_start {} is after birth_end {}",
                self.birth_start, self.birth_end
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    pub generator: GeneratorConfig,
    pub store_path: PathBuf,
    pub workbook_path: PathBuf,
    pub brackets: BracketScheme,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            store_path: PathBuf::from("employees.csv"),
            workbook_path: PathBuf::from("employees.xlsx"),
            brackets: BracketScheme::canonical(),
        }
    }
}

impl CensusConfig {
    /// Defaults, or the file named by `CENSUS_CONFIG` when it is set.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(path.as_deref())
    }

    /// Defaults when `path` is `None`, otherwise the named file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CensusError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| CensusError::InvalidConfig(e.to_string()))?;
        config.generator.validate()?;
        Ok(config)
    }
}
