//! Experiment generator behavior through the public API

use abtest::experiment::{generate_experiment, ExperimentError, Group};
use abtest::uplift::Rounding;

fn within_sigmas(count: u64, n: u64, p: f64, sigmas: f64) -> bool {
    let mean = n as f64 * p;
    let sd = (n as f64 * p * (1.0 - p)).sqrt();
    (count as f64 - mean).abs() <= sigmas * sd
}

#[test]
fn test_reference_scenario_is_plausible() {
    let res = generate_experiment(42, 10_000, 0.30, 0.31).unwrap();
    let [control, variant] = res.converted();

    assert!(within_sigmas(control, 10_000, 0.30, 5.0), "control = {}", control);
    assert!(within_sigmas(variant, 10_000, 0.31, 5.0), "variant = {}", variant);
    assert_eq!(res.visited(), [10_000, 10_000]);
}

#[test]
fn test_reference_scenario_is_reproducible() {
    let first = generate_experiment(42, 10_000, 0.30, 0.31).unwrap();
    for _ in 0..3 {
        assert_eq!(generate_experiment(42, 10_000, 0.30, 0.31).unwrap(), first);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = generate_experiment(1, 10_000, 0.5, 0.5).unwrap();
    let b = generate_experiment(2, 10_000, 0.5, 0.5).unwrap();
    assert_ne!(a.converted(), b.converted());
}

#[test]
fn test_control_draw_comes_first() {
    // The control draw does not depend on the variant probability
    let a = generate_experiment(9, 5_000, 0.4, 0.1).unwrap();
    let b = generate_experiment(9, 5_000, 0.4, 0.9).unwrap();
    assert_eq!(a.control, b.control);
}

#[test]
fn test_zero_trials_boundary() {
    let res = generate_experiment(1, 0, 0.5, 0.5).unwrap();
    assert_eq!(res.converted(), [0, 0]);
    assert_eq!(res.visited(), [0, 0]);
}

#[test]
fn test_out_of_range_probability_is_sampler_error() {
    let err = generate_experiment(42, 100, 0.3, f64::NAN).unwrap_err();
    let ExperimentError::InvalidProbability { group, source, .. } = &err;
    assert_eq!(*group, Group::Variant);
    assert!(!source.to_string().is_empty());
}

#[test]
fn test_uplift_of_generated_rates() {
    let res = generate_experiment(42, 2_000, 0.0, 1.0).unwrap();
    let uplift = res.uplift(Rounding::NoRounding);
    assert_eq!(uplift.diff, 100.0);
    assert_eq!(uplift.upli, f64::INFINITY);

    let res = generate_experiment(42, 2_000, 1.0, 1.0).unwrap();
    let uplift = res.uplift(Rounding::RoundTo(1));
    assert_eq!(uplift.diff, 0.0);
    assert_eq!(uplift.upli, 0.0);
}
