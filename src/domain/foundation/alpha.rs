//! Optimism coefficient value object for the Hurwicz criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RangeError;

/// The Hurwicz optimism weight, with documented domain [0, 1].
///
/// `new` stores the raw value without clamping: an out-of-range coefficient
/// is a caller error that is carried through the arithmetic unchanged.
/// Use `try_new` when the documented domain should be enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alpha(f64);

impl Alpha {
    /// Fully pessimistic weight (only row minima count).
    pub const PESSIMISTIC: Self = Self(0.0);

    /// Fully optimistic weight (only row maxima count).
    pub const OPTIMISTIC: Self = Self(1.0);

    /// Creates an Alpha from a raw value, without range checking.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Creates an Alpha, returning an error if outside [0, 1].
    pub fn try_new(value: f64) -> Result<Self, RangeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RangeError::AlphaOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Returns the optimism weight.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the pessimism weight `1 - alpha`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
