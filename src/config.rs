//! Experiment configuration
//!
//! Parameters for [`generate_experiment`](crate::experiment::generate_experiment),
//! optionally loaded from a TOML file. Every key is optional; missing keys
//! fall back to [`ExperimentConfig::default`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a simulated experiment
///
/// # Example
/// ```
/// use abtest::config::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.n, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Seed for the random number generator
    pub seed: u64,

    /// Number of trials per group
    pub n: u64,

    /// Probability of success in the control group
    pub control_cr: f64,

    /// Probability of success in the variant group
    pub variant_cr: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n: 10_000,
            control_cr: 0.30,
            variant_cr: 0.31,
        }
    }
}

impl ExperimentConfig {
    /// Load a configuration from a TOML file
    ///
    /// # Example TOML
    /// ```toml
    /// seed = 7
    /// n = 2000
    /// control_cr = 0.297
    /// variant_cr = 0.306
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read experiment config: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid experiment config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded experiment config");
        Ok(config)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML experiment config")
    }

    /// Override fields with any values given explicitly
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        n: Option<u64>,
        control_cr: Option<f64>,
        variant_cr: Option<f64>,
    ) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(n) = n {
            self.n = n;
        }
        if let Some(p) = control_cr {
            self.control_cr = p;
        }
        if let Some(p) = variant_cr {
            self.variant_cr = p;
        }
        self
    }
}
