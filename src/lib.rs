//! abtest - A/B test statistics
//!
//! This library computes the conversion-rate uplift between a control and a
//! variant group, and simulates seeded experiments with Bernoulli trials per
//! group. Results can be rendered as text, JSON, or CSV.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod experiment;
pub mod json_output;
pub mod text_output;
pub mod uplift;

pub use experiment::{generate_experiment, ExperimentResult};
pub use uplift::{compute_uplift, Rounding, UpliftResult};
