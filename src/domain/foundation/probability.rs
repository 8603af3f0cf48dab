//! Probability distribution over states of nature.

use serde::{Deserialize, Serialize};

use super::RangeError;

/// Tolerance for the probability-mass check in [`ProbabilityVector::try_new`].
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// A probability distribution over the states of nature (matrix columns).
///
/// Every entry lies in [0, 1] and the entries sum to 1 within
/// [`PROBABILITY_SUM_TOLERANCE`], enforced at construction. Whether the
/// vector's length matches a particular matrix is checked at each
/// risk-criterion call, since only the call sees both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Creates a probability vector, validating entries and total mass.
    pub fn try_new(values: Vec<f64>) -> Result<Self, RangeError> {
        for (index, &value) in values.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(RangeError::ProbabilityOutOfRange { index, value });
            }
        }

        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(RangeError::ProbabilityMassMismatch { sum });
        }

        Ok(Self(values))
    }

    /// Creates a uniform distribution over `states` equally likely states.
    ///
    /// `states` is expected to be at least 1.
    pub fn uniform(states: usize) -> Self {
        Self(vec![1.0 / states as f64; states])
    }

    /// Returns the number of states covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector covers no states.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the probabilities in state order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for ProbabilityVector {
    type Error = RangeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(values)
    }
}

impl From<ProbabilityVector> for Vec<f64> {
    fn from(vector: ProbabilityVector) -> Self {
        vector.0
    }
}
