//! Criterion results as a closed set of typed variants.
//!
//! Every criterion produces its own result shape; wrapping them in one
//! tagged enum lets renderers and tests match exhaustively on which
//! criterion produced a value.

use serde::{Deserialize, Serialize};

use super::risk::{BayesianResult, MinVarianceResult, ModalResult, ThresholdProbabilityResult};
use super::uncertainty::{
    HurwiczResult, MaximaxResult, MaximinResult, MinimaxResult, SavageResult,
};

/// The result of one criterion evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "criterion", content = "result", rename_all = "snake_case")]
pub enum CriterionResult {
    Maximax(MaximaxResult),
    Minimax(MinimaxResult),
    Maximin(MaximinResult),
    Hurwicz(HurwiczResult),
    Savage(SavageResult),
    Bayesian(BayesianResult),
    MinVariance(MinVarianceResult),
    ThresholdProbability(ThresholdProbabilityResult),
    Modal(ModalResult),
}

impl CriterionResult {
    /// Display label of the criterion that produced this result.
    pub fn criterion_name(&self) -> &'static str {
        match self {
            CriterionResult::Maximax(_) => "Maximax",
            CriterionResult::Minimax(_) => "Minimax",
            CriterionResult::Maximin(_) => "Maximin",
            CriterionResult::Hurwicz(_) => "Hurwicz",
            CriterionResult::Savage(_) => "Savage",
            CriterionResult::Bayesian(_) => "Bayesian",
            CriterionResult::MinVariance(_) => "Minimum Variance",
            CriterionResult::ThresholdProbability(_) => "Probability Above Threshold",
            CriterionResult::Modal(_) => "Modal",
        }
    }

    /// Recommended alternative as a 0-based row index.
    ///
    /// Savage stores a 1-based row for display; this accessor is the one
    /// place that normalizes it, so every variant reports the same
    /// convention.
    pub fn decision_index(&self) -> usize {
        match self {
            CriterionResult::Maximax(result) => result.decision_index,
            CriterionResult::Minimax(result) => result.decision_index,
            CriterionResult::Maximin(result) => result.decision_index,
            CriterionResult::Hurwicz(result) => result.decision_index,
            CriterionResult::Savage(result) => result.decision - 1,
            CriterionResult::Bayesian(result) => result.decision_index,
            CriterionResult::MinVariance(result) => result.decision_index,
            CriterionResult::ThresholdProbability(result) => result.decision_index,
            CriterionResult::Modal(result) => result.decision_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{PayoffMatrix, RiskAnalyzer, UncertaintyAnalyzer};
    use crate::domain::foundation::ProbabilityVector;

    fn sample_matrix() -> PayoffMatrix {
        PayoffMatrix::from_rows(vec![vec![4.0, -2.0], vec![0.0, 3.0]]).unwrap()
    }

    #[test]
    fn decision_index_normalizes_savage_to_zero_based() {
        let savage = UncertaintyAnalyzer::savage(&sample_matrix());
        assert_eq!(savage.decision, 2);

        let result = CriterionResult::Savage(savage);
        assert_eq!(result.decision_index(), 1);
    }

    #[test]
    fn decision_index_passes_through_zero_based_variants() {
        let bayesian =
            RiskAnalyzer::bayesian(&sample_matrix(), &ProbabilityVector::uniform(2)).unwrap();
        let expected = bayesian.decision_index;

        let result = CriterionResult::Bayesian(bayesian);
        assert_eq!(result.decision_index(), expected);
    }

    #[test]
    fn criterion_name_labels_each_variant() {
        let maximax = UncertaintyAnalyzer::maximax(&sample_matrix());
        assert_eq!(CriterionResult::Maximax(maximax).criterion_name(), "Maximax");
    }

    #[test]
    fn serializes_with_criterion_tag() {
        let result = CriterionResult::Maximax(UncertaintyAnalyzer::maximax(&sample_matrix()));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["criterion"], "maximax");
        assert_eq!(json["result"]["overall_max"], 4.0);
    }

    #[test]
    fn round_trips_through_json() {
        let original =
            CriterionResult::Savage(UncertaintyAnalyzer::savage(&sample_matrix()));
        let json = serde_json::to_string(&original).unwrap();
        let decoded: CriterionResult = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, original);
    }
}
