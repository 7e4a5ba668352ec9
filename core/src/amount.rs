//! Donation amounts.
//!
//! An [`Amount`] is always finite and strictly positive. Free text from the
//! custom amount input goes through [`parse_amount`], which reports "no valid
//! amount" as `None` instead of producing an unusable number.

use serde::Serialize;
use std::fmt;

use crate::models::PresetAmount;

/// A donation amount greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a value, `None` unless it is finite and `> 0`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Amount(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<PresetAmount> for Amount {
    fn from(preset: PresetAmount) -> Self {
        Amount(f64::from(preset.value()))
    }
}

impl fmt::Display for Amount {
    /// Shortest decimal form: `25`, `12.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse custom amount text.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text,
/// non-numeric text, zero, negatives, NaN and infinities.
pub fn parse_amount(text: &str) -> Option<Amount> {
    text.trim().parse::<f64>().ok().and_then(Amount::new)
}
