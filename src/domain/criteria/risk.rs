//! Risk Criteria - Decision rules weighted by state probabilities.
//!
//! Each criterion consumes the payoff matrix plus a probability distribution
//! over its states of nature. The distribution's length must match the
//! matrix's state count; a mismatch fails before anything is computed.

use serde::{Deserialize, Serialize};

use super::selection::{first_max, first_min};
use super::PayoffMatrix;
use crate::domain::foundation::{ProbabilityVector, ShapeError};

/// Result of the Bayesian expected-value criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesianResult {
    /// Probability-weighted expected payoff of each alternative, in row order.
    pub expected_values: Vec<f64>,
    /// Largest expected value.
    pub best_value: f64,
    /// First row attaining `best_value`.
    pub decision_index: usize,
}

/// Result of the minimum-variance criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinVarianceResult {
    /// Probability-weighted variance of each alternative, in row order.
    pub variances: Vec<f64>,
    /// Smallest variance.
    pub min_variance: f64,
    /// First row attaining `min_variance`.
    pub decision_index: usize,
}

/// Result of the maximize-probability-above-threshold criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProbabilityResult {
    /// Per-alternative probability mass of outcomes strictly above the
    /// threshold, in row order. A score of 0 is a legitimate result, not
    /// an error.
    pub scores: Vec<f64>,
    /// Largest score.
    pub max_probability: f64,
    /// First row attaining `max_probability`.
    pub decision_index: usize,
}

/// Result of the modal criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalResult {
    /// Largest single weighted outcome of each alternative, in row order.
    pub modal_values: Vec<f64>,
    /// Largest modal value.
    pub max_modal_value: f64,
    /// First row attaining `max_modal_value`.
    pub decision_index: usize,
}

/// Decision-under-risk criteria over a payoff matrix and a probability
/// distribution.
pub struct RiskAnalyzer;

impl RiskAnalyzer {
    /// Computes the Bayesian criterion: maximize the expected payoff.
    ///
    /// # Algorithm
    /// For each alternative: E_i = sum over states of a_ij * p_j.
    /// Decision = first row with the largest E_i.
    pub fn bayesian(
        matrix: &PayoffMatrix,
        probabilities: &ProbabilityVector,
    ) -> Result<BayesianResult, ShapeError> {
        check_alignment(matrix, probabilities)?;

        let expected_values: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| expected_value(row, probabilities.values()))
            .collect();

        let (decision_index, best_value) = first_max(&expected_values);

        Ok(BayesianResult {
            expected_values,
            best_value,
            decision_index,
        })
    }

    /// Computes the minimum-variance criterion: prefer the steadiest payoff.
    ///
    /// # Algorithm
    /// For each alternative: mean_i = sum of a_ij * p_j, then
    /// var_i = sum of p_j * (a_ij - mean_i)^2.
    /// Decision = first row with the smallest var_i.
    pub fn min_variance(
        matrix: &PayoffMatrix,
        probabilities: &ProbabilityVector,
    ) -> Result<MinVarianceResult, ShapeError> {
        check_alignment(matrix, probabilities)?;

        let variances: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                let mean = expected_value(row, probabilities.values());
                row.iter()
                    .zip(probabilities.values())
                    .map(|(&outcome, &probability)| probability * (outcome - mean).powi(2))
                    .sum()
            })
            .collect();

        let (decision_index, min_variance) = first_min(&variances);

        Ok(MinVarianceResult {
            variances,
            min_variance,
            decision_index,
        })
    }

    /// Computes the maximize-probability-above-threshold criterion.
    ///
    /// # Algorithm
    /// For each alternative, sum the probabilities of states whose payoff is
    /// strictly greater than `threshold`. Decision = first row with the
    /// largest mass. The threshold itself is unrestricted.
    pub fn max_probability_above_threshold(
        matrix: &PayoffMatrix,
        probabilities: &ProbabilityVector,
        threshold: f64,
    ) -> Result<ThresholdProbabilityResult, ShapeError> {
        check_alignment(matrix, probabilities)?;

        let scores: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(probabilities.values())
                    .filter(|(&outcome, _)| outcome > threshold)
                    .map(|(_, &probability)| probability)
                    .sum()
            })
            .collect();

        let (decision_index, max_probability) = first_max(&scores);

        Ok(ThresholdProbabilityResult {
            scores,
            max_probability,
            decision_index,
        })
    }

    /// Computes the modal criterion: the largest single weighted outcome.
    ///
    /// # Algorithm
    /// For each alternative: modal_i = max over states of p_j * a_ij, with
    /// the running maximum seeded at 0. A row whose weighted outcomes are
    /// all negative therefore reports 0, not its true maximum; callers that
    /// need the unclamped value must compute it themselves.
    pub fn modal(
        matrix: &PayoffMatrix,
        probabilities: &ProbabilityVector,
    ) -> Result<ModalResult, ShapeError> {
        check_alignment(matrix, probabilities)?;

        let modal_values: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(probabilities.values())
                    .fold(0.0_f64, |current, (&outcome, &probability)| {
                        let weighted = probability * outcome;
                        if weighted > current {
                            weighted
                        } else {
                            current
                        }
                    })
            })
            .collect();

        let (decision_index, max_modal_value) = first_max(&modal_values);

        Ok(ModalResult {
            modal_values,
            max_modal_value,
            decision_index,
        })
    }
}

/// Probability-weighted expected value of one row.
fn expected_value(row: &[f64], probabilities: &[f64]) -> f64 {
    row.iter()
        .zip(probabilities)
        .map(|(&outcome, &probability)| outcome * probability)
        .sum()
}

/// Fails when the distribution does not cover the matrix's states.
fn check_alignment(
    matrix: &PayoffMatrix,
    probabilities: &ProbabilityVector,
) -> Result<(), ShapeError> {
    if probabilities.len() != matrix.state_count() {
        return Err(ShapeError::ProbabilityCountMismatch {
            states: matrix.state_count(),
            probabilities: probabilities.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> PayoffMatrix {
        PayoffMatrix::from_rows(rows).unwrap()
    }

    fn probabilities(values: Vec<f64>) -> ProbabilityVector {
        ProbabilityVector::try_new(values).unwrap()
    }

    // Bayesian Tests

    #[test]
    fn bayesian_worked_example() {
        let result = RiskAnalyzer::bayesian(
            &matrix(vec![vec![10.0, 0.0], vec![4.0, 4.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        assert_eq!(result.expected_values, vec![5.0, 4.0]);
        assert_eq!(result.best_value, 5.0);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn bayesian_weights_states_unevenly() {
        let result = RiskAnalyzer::bayesian(
            &matrix(vec![vec![10.0, 0.0], vec![4.0, 4.0]]),
            &probabilities(vec![0.1, 0.9]),
        )
        .unwrap();

        assert_eq!(result.expected_values, vec![1.0, 4.0]);
        assert_eq!(result.decision_index, 1);
    }

    #[test]
    fn bayesian_tie_reports_lowest_row() {
        let result = RiskAnalyzer::bayesian(
            &matrix(vec![vec![2.0, 6.0], vec![6.0, 2.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        assert_eq!(result.expected_values, vec![4.0, 4.0]);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn bayesian_rejects_mismatched_distribution() {
        let result = RiskAnalyzer::bayesian(
            &matrix(vec![vec![1.0, 2.0, 3.0]]),
            &ProbabilityVector::uniform(2),
        );

        assert_eq!(
            result,
            Err(ShapeError::ProbabilityCountMismatch {
                states: 3,
                probabilities: 2,
            })
        );
    }

    // Minimum Variance Tests

    #[test]
    fn min_variance_worked_example() {
        let result = RiskAnalyzer::min_variance(
            &matrix(vec![vec![4.0, 4.0], vec![8.0, 0.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        assert_eq!(result.variances, vec![0.0, 16.0]);
        assert_eq!(result.min_variance, 0.0);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn min_variance_constant_row_has_zero_variance() {
        let result = RiskAnalyzer::min_variance(
            &matrix(vec![vec![3.0, 3.0, 3.0]]),
            &probabilities(vec![0.2, 0.5, 0.3]),
        )
        .unwrap();

        assert_eq!(result.variances, vec![0.0]);
    }

    #[test]
    fn min_variance_tie_reports_lowest_row() {
        let result = RiskAnalyzer::min_variance(
            &matrix(vec![vec![1.0, 3.0], vec![5.0, 7.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        // Both rows have variance 1; shifting payoffs does not change spread.
        assert_eq!(result.variances, vec![1.0, 1.0]);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn min_variance_rejects_mismatched_distribution() {
        let result = RiskAnalyzer::min_variance(
            &matrix(vec![vec![1.0]]),
            &ProbabilityVector::uniform(2),
        );

        assert!(matches!(
            result,
            Err(ShapeError::ProbabilityCountMismatch { .. })
        ));
    }

    // Threshold Probability Tests

    #[test]
    fn threshold_sums_mass_of_strictly_greater_outcomes() {
        let result = RiskAnalyzer::max_probability_above_threshold(
            &matrix(vec![vec![10.0, 2.0, 8.0], vec![3.0, 3.0, 3.0]]),
            &probabilities(vec![0.5, 0.2, 0.3]),
            5.0,
        )
        .unwrap();

        assert_eq!(result.scores, vec![0.8, 0.0]);
        assert_eq!(result.max_probability, 0.8);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let result = RiskAnalyzer::max_probability_above_threshold(
            &matrix(vec![vec![5.0, 6.0]]),
            &ProbabilityVector::uniform(2),
            5.0,
        )
        .unwrap();

        // The outcome equal to the threshold contributes nothing.
        assert_eq!(result.scores, vec![0.5]);
    }

    #[test]
    fn threshold_all_rows_below_threshold_is_legitimate() {
        let result = RiskAnalyzer::max_probability_above_threshold(
            &matrix(vec![vec![1.0, 2.0], vec![0.0, 3.0]]),
            &ProbabilityVector::uniform(2),
            10.0,
        )
        .unwrap();

        assert_eq!(result.scores, vec![0.0, 0.0]);
        assert_eq!(result.max_probability, 0.0);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn threshold_rejects_mismatched_distribution() {
        let result = RiskAnalyzer::max_probability_above_threshold(
            &matrix(vec![vec![1.0, 2.0]]),
            &probabilities(vec![1.0]),
            0.0,
        );

        assert!(matches!(
            result,
            Err(ShapeError::ProbabilityCountMismatch { .. })
        ));
    }

    // Modal Tests

    #[test]
    fn modal_picks_largest_weighted_outcome() {
        let result = RiskAnalyzer::modal(
            &matrix(vec![vec![10.0, 2.0], vec![4.0, 8.0]]),
            &probabilities(vec![0.3, 0.7]),
        )
        .unwrap();

        // Row 0: max(3.0, 1.4) = 3.0. Row 1: max(1.2, 5.6) = 5.6.
        assert_eq!(result.modal_values, vec![3.0, 5.6]);
        assert_eq!(result.max_modal_value, 5.6);
        assert_eq!(result.decision_index, 1);
    }

    #[test]
    fn modal_all_negative_row_reports_zero() {
        let result = RiskAnalyzer::modal(
            &matrix(vec![vec![-5.0, -2.0], vec![1.0, -4.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        // The zero seed floors the all-negative row at 0.
        assert_eq!(result.modal_values, vec![0.0, 0.5]);
        assert_eq!(result.decision_index, 1);
    }

    #[test]
    fn modal_tie_reports_lowest_row() {
        let result = RiskAnalyzer::modal(
            &matrix(vec![vec![6.0, 0.0], vec![0.0, 6.0]]),
            &ProbabilityVector::uniform(2),
        )
        .unwrap();

        assert_eq!(result.modal_values, vec![3.0, 3.0]);
        assert_eq!(result.decision_index, 0);
    }

    #[test]
    fn modal_rejects_mismatched_distribution() {
        let result = RiskAnalyzer::modal(
            &matrix(vec![vec![1.0, 2.0, 3.0]]),
            &ProbabilityVector::uniform(2),
        );

        assert!(matches!(
            result,
            Err(ShapeError::ProbabilityCountMismatch { .. })
        ));
    }
}
