//! Uncertainty Criteria - Decision rules that need no probabilities.
//!
//! Each criterion reduces every row (alternative) to one statistic, then
//! aggregates across rows to a recommended decision. Maximax and Maximin
//! both start from per-row maxima but are computed independently, since
//! callers report both side by side.

use serde::{Deserialize, Serialize};

use super::selection::{first_max, first_min, max_of, min_of};
use super::PayoffMatrix;
use crate::domain::foundation::Alpha;

/// Result of the Maximax criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaximaxResult {
    /// Best outcome of each alternative, in row order.
    pub row_maxima: Vec<f64>,
    /// Largest of the row maxima.
    pub overall_max: f64,
    /// First row attaining `overall_max`.
    pub decision_index: usize,
}

/// Result of the Minimax criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimaxResult {
    /// Worst outcome of each alternative, in row order.
    pub row_minima: Vec<f64>,
    /// Largest of the row minima.
    pub overall_max: f64,
    /// First row attaining `overall_max`.
    pub decision_index: usize,
}

/// Result of the Maximin criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaximinResult {
    /// Best outcome of each alternative, in row order.
    pub row_maxima: Vec<f64>,
    /// Smallest of the row maxima.
    pub overall_min: f64,
    /// First row attaining `overall_min`.
    pub decision_index: usize,
}

/// One alternative's Hurwicz computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurwiczRow {
    /// Best outcome of the row.
    pub row_max: f64,
    /// Worst outcome of the row.
    pub row_min: f64,
    /// `alpha * row_max + (1 - alpha) * row_min`.
    pub weighted_value: f64,
}

/// Result of the Hurwicz criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurwiczResult {
    /// The optimism coefficient the values were computed with.
    pub alpha: Alpha,
    /// Per-alternative max, min, and weighted value, in row order.
    pub rows: Vec<HurwiczRow>,
    /// Largest weighted value across alternatives.
    pub overall_value: f64,
    /// First row attaining `overall_value`.
    pub decision_index: usize,
}

/// Result of the Savage (minimax regret) criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavageResult {
    /// Regret of each cell: the column maximum minus the cell's payoff.
    pub regret_matrix: Vec<Vec<f64>>,
    /// Largest regret of each alternative, in row order.
    pub row_max_regrets: Vec<f64>,
    /// 1-based index of the first row with the smallest max regret.
    ///
    /// The 1-based convention is a display legacy; callers normalize
    /// through [`CriterionResult::decision_index`] when they need the
    /// 0-based row.
    ///
    /// [`CriterionResult::decision_index`]: super::CriterionResult::decision_index
    pub decision: usize,
}

/// Decision-under-uncertainty criteria over a payoff matrix.
pub struct UncertaintyAnalyzer;

impl UncertaintyAnalyzer {
    /// Computes the Maximax criterion: bet on the best possible outcome.
    ///
    /// # Algorithm
    /// For each alternative: z_i = max(row). Overall z = max(z_i).
    ///
    /// # Edge Cases
    /// - Single row or column: reductions operate on one element
    /// - Ties: the lowest row index among ties is reported
    pub fn maximax(matrix: &PayoffMatrix) -> MaximaxResult {
        let row_maxima: Vec<f64> = matrix.rows().iter().map(|row| max_of(row)).collect();
        let (decision_index, overall_max) = first_max(&row_maxima);

        MaximaxResult {
            row_maxima,
            overall_max,
            decision_index,
        }
    }

    /// Computes the Minimax criterion: the best of the worst outcomes.
    ///
    /// Named here for the minimum taken within each row before the maximum
    /// across rows. This is not the textbook "minimax regret" rule - that
    /// one is [`UncertaintyAnalyzer::savage`] - and the naming must stay as
    /// the surrounding system uses it.
    ///
    /// # Algorithm
    /// For each alternative: z_i = min(row). Overall z = max(z_i).
    pub fn minimax(matrix: &PayoffMatrix) -> MinimaxResult {
        let row_minima: Vec<f64> = matrix.rows().iter().map(|row| min_of(row)).collect();
        let (decision_index, overall_max) = first_max(&row_minima);

        MinimaxResult {
            row_minima,
            overall_max,
            decision_index,
        }
    }

    /// Computes the Maximin criterion: the most cautious of the best outcomes.
    ///
    /// Shares the per-row maximum with [`UncertaintyAnalyzer::maximax`] but
    /// aggregates with the opposite operator; computed independently because
    /// callers report both every time.
    ///
    /// # Algorithm
    /// For each alternative: z_i = max(row). Overall z = min(z_i).
    pub fn maximin(matrix: &PayoffMatrix) -> MaximinResult {
        let row_maxima: Vec<f64> = matrix.rows().iter().map(|row| max_of(row)).collect();
        let (decision_index, overall_min) = first_min(&row_maxima);

        MaximinResult {
            row_maxima,
            overall_min,
            decision_index,
        }
    }

    /// Computes the Hurwicz criterion: optimism-weighted blend of extremes.
    ///
    /// # Algorithm
    /// For each alternative: z_i = alpha * max(row) + (1 - alpha) * min(row).
    /// Overall z = max(z_i).
    ///
    /// `alpha` outside [0, 1] is accepted and computed through without
    /// clamping; staying in range is the caller's contract (see
    /// [`Alpha::try_new`]).
    pub fn hurwicz(matrix: &PayoffMatrix, alpha: Alpha) -> HurwiczResult {
        let rows: Vec<HurwiczRow> = matrix
            .rows()
            .iter()
            .map(|row| {
                let row_max = max_of(row);
                let row_min = min_of(row);
                HurwiczRow {
                    row_max,
                    row_min,
                    weighted_value: alpha.value() * row_max + alpha.complement() * row_min,
                }
            })
            .collect();

        let weighted: Vec<f64> = rows.iter().map(|row| row.weighted_value).collect();
        let (decision_index, overall_value) = first_max(&weighted);

        HurwiczResult {
            alpha,
            rows,
            overall_value,
            decision_index,
        }
    }

    /// Computes the Savage criterion: minimize the worst-case regret.
    ///
    /// # Algorithm
    /// For each state j: colMax_j = max over rows of a_ij. Regret of a cell
    /// is colMax_j - a_ij (never negative for finite input). Each row is
    /// reduced to its largest regret, and the decision is the first row with
    /// the smallest such value.
    ///
    /// The reported decision is 1-based (see [`SavageResult::decision`]).
    pub fn savage(matrix: &PayoffMatrix) -> SavageResult {
        let column_maxima: Vec<f64> = (0..matrix.state_count())
            .map(|state| {
                let column: Vec<f64> = matrix.rows().iter().map(|row| row[state]).collect();
                max_of(&column)
            })
            .collect();

        let regret_matrix: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(state, &value)| column_maxima[state] - value)
                    .collect()
            })
            .collect();

        let row_max_regrets: Vec<f64> = regret_matrix.iter().map(|row| max_of(row)).collect();
        let (min_regret_index, _) = first_min(&row_max_regrets);

        SavageResult {
            regret_matrix,
            row_max_regrets,
            decision: min_regret_index + 1,
        }
    }
}
