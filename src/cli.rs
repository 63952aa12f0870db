//! CLI argument parsing for abtest

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "abtest")]
#[command(version)]
#[command(about = "Assess A/B test results: conversion uplift and simulated experiments", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the uplift of a variant proportion over a control proportion
    Uplift(UpliftArgs),
    /// Simulate an experiment with Bernoulli trials per group
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct UpliftArgs {
    /// Proportion in the control group
    #[arg(long, value_name = "P", allow_negative_numbers = true)]
    pub control: f64,

    /// Proportion in the variant group
    #[arg(long, value_name = "P", allow_negative_numbers = true)]
    pub variant: f64,

    /// Round results to this many decimals
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub round: Option<i32>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Load experiment parameters from a TOML file (flags override it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the random number generator [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of trials per group [default: 10000]
    #[arg(short = 'n', long = "trials", value_name = "N")]
    pub n: Option<u64>,

    /// Probability of success in the control group [default: 0.30]
    #[arg(long = "control-cr", value_name = "P", allow_negative_numbers = true)]
    pub control_cr: Option<f64>,

    /// Probability of success in the variant group [default: 0.31]
    #[arg(long = "variant-cr", value_name = "P", allow_negative_numbers = true)]
    pub variant_cr: Option<f64>,

    /// Also report the uplift between the groups' conversion rates
    #[arg(long)]
    pub uplift: bool,

    /// Round the uplift to this many decimals (with --uplift)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub round: Option<i32>,
}
