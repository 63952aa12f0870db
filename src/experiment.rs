//! Synthetic A/B experiment generation
//!
//! Draws `n` Bernoulli trials per group from a single seeded generator and
//! summarizes them into a two-row table (Control, Variant). The generator is
//! owned by the call, so the same seed always reproduces the same table.

use crate::config::ExperimentConfig;
use crate::uplift::{compute_uplift, Rounding, UpliftResult};
use rand::distributions::{Bernoulli, BernoulliError, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while generating an experiment
#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error("Invalid conversion rate for {group} group: {value}")]
    InvalidProbability {
        group: Group,
        value: f64,
        #[source]
        source: BernoulliError,
    },
}

pub type Result<T> = std::result::Result<T, ExperimentError>;

/// Experiment arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Control,
    Variant,
}

impl Group {
    /// Row label used in every output format
    pub fn label(self) -> &'static str {
        match self {
            Group::Control => "Control",
            Group::Variant => "Variant",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the experiment table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group: Group,
    /// Number of successful trials
    #[serde(rename = "Converted")]
    pub converted: u64,
    /// Number of trials drawn
    #[serde(rename = "Visited")]
    pub visited: u64,
    /// Empirical conversion rate in percent (`NaN` when nothing was visited)
    #[serde(rename = "CR_pct")]
    pub cr_pct: f64,
}

impl GroupSummary {
    fn new(group: Group, converted: u64, visited: u64) -> Self {
        Self {
            group,
            converted,
            visited,
            cr_pct: 100.0 * converted as f64 / visited as f64,
        }
    }
}

/// Summary of a simulated experiment, Control row first
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    pub control: GroupSummary,
    pub variant: GroupSummary,
}

impl ExperimentResult {
    /// Rows in table order
    pub fn rows(&self) -> [&GroupSummary; 2] {
        [&self.control, &self.variant]
    }

    pub fn converted(&self) -> [u64; 2] {
        [self.control.converted, self.variant.converted]
    }

    pub fn visited(&self) -> [u64; 2] {
        [self.control.visited, self.variant.visited]
    }

    /// Uplift of the variant's empirical rate over the control's
    ///
    /// Inputs are the `CR_pct` columns, so `diff` is in percentage points.
    pub fn uplift(&self, rounding: Rounding) -> UpliftResult {
        compute_uplift(self.control.cr_pct, self.variant.cr_pct, rounding)
    }
}

/// Generate a single experiment
///
/// Control trials are drawn first, then variant trials, from the same
/// `StdRng` seeded with `seed`. Probabilities outside `[0, 1]` are rejected
/// by the Bernoulli sampler and returned as
/// [`ExperimentError::InvalidProbability`].
///
/// # Example
/// ```
/// use abtest::experiment::generate_experiment;
///
/// let res = generate_experiment(42, 2000, 0.3, 0.31)?;
/// assert_eq!(res.visited(), [2000, 2000]);
/// # Ok::<(), abtest::experiment::ExperimentError>(())
/// ```
pub fn generate_experiment(
    seed: u64,
    n: u64,
    control_cr: f64,
    variant_cr: f64,
) -> Result<ExperimentResult> {
    tracing::debug!(seed, n, control_cr, variant_cr, "generating experiment");

    let mut rng = StdRng::seed_from_u64(seed);
    let control = draw_group(&mut rng, Group::Control, n, control_cr)?;
    let variant = draw_group(&mut rng, Group::Variant, n, variant_cr)?;

    tracing::debug!(
        control = control.converted,
        variant = variant.converted,
        "experiment generated"
    );

    Ok(ExperimentResult { control, variant })
}

/// Generate an experiment from a loaded configuration
pub fn generate_from_config(config: &ExperimentConfig) -> Result<ExperimentResult> {
    generate_experiment(config.seed, config.n, config.control_cr, config.variant_cr)
}

fn draw_group<R: Rng>(rng: &mut R, group: Group, n: u64, p: f64) -> Result<GroupSummary> {
    let dist = Bernoulli::new(p).map_err(|source| ExperimentError::InvalidProbability {
        group,
        value: p,
        source,
    })?;

    let converted = (0..n).filter(|_| dist.sample(rng)).count() as u64;
    Ok(GroupSummary::new(group, converted, n))
}
