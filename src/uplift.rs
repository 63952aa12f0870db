//! Conversion-rate uplift between a control and a variant group
//!
//! `diff` is the signed difference `variant - control` and `upli` is that
//! difference relative to control, in percent. Zero-valued controls are not
//! guarded: the division yields `inf`/`NaN` and the caller decides what to
//! do with it.

use serde::{Deserialize, Serialize};

/// Whether (and how far) to round an [`UpliftResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep full `f64` precision
    #[default]
    NoRounding,
    /// Round to this many decimals (negative rounds to tens, hundreds, ...)
    RoundTo(i32),
}

impl From<Option<i32>> for Rounding {
    fn from(decimals: Option<i32>) -> Self {
        match decimals {
            Some(d) => Rounding::RoundTo(d),
            None => Rounding::NoRounding,
        }
    }
}

impl Rounding {
    /// Apply this rounding mode to a single value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::NoRounding => value,
            Rounding::RoundTo(decimals) => round_half_even(value, decimals),
        }
    }
}

/// Signed difference and percentage uplift between two proportions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpliftResult {
    /// `variant - control`
    pub diff: f64,
    /// `100 * diff / control`
    pub upli: f64,
}

impl UpliftResult {
    /// True if both fields are finite (i.e. control was non-zero)
    pub fn is_finite(&self) -> bool {
        self.diff.is_finite() && self.upli.is_finite()
    }
}

/// Compute the uplift of `variant` over `control`
///
/// No range validation is done on either proportion. A `control` of zero
/// makes `upli` infinite (or `NaN` when `variant` is zero as well).
///
/// # Example
/// ```
/// use abtest::uplift::{compute_uplift, Rounding};
///
/// let res = compute_uplift(1.23456, 2.34567, Rounding::RoundTo(2));
/// assert_eq!(res.diff, 1.11);
/// ```
pub fn compute_uplift(control: f64, variant: f64, rounding: Rounding) -> UpliftResult {
    let diff = variant - control;
    let upli = 100.0 * diff / control;

    tracing::trace!(control, variant, ?rounding, diff, upli, "computed uplift");

    let result = UpliftResult {
        diff: rounding.apply(diff),
        upli: rounding.apply(upli),
    };
    if !result.is_finite() {
        tracing::debug!(control, ?rounding, "uplift is not finite (zero control?)");
    }
    result
}

/// Round to `decimals` places with ties going to the even neighbour
///
/// Scales by a power of ten, rounds, and scales back, the same way numpy's
/// `round` does. Non-finite values pass through untouched.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    if decimals >= 0 {
        let scale = 10f64.powi(decimals);
        let scaled = value * scale;
        // Scaling overflowed; nothing left to round at this precision.
        if !scaled.is_finite() {
            return value;
        }
        scaled.round_ties_even() / scale
    } else {
        // i32::MIN has no positive counterpart; it rounds like any huge scale.
        let scale = decimals.checked_neg().map_or(f64::INFINITY, |d| 10f64.powi(d));
        (value / scale).round_ties_even() * scale
    }
}
