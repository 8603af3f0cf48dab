//! CriteriaEvaluator - Runs whole panels of criteria in one pass.
//!
//! The presentation layer owns criterion selection, coefficients, and
//! distributions, and re-invokes these entry points whenever any of them
//! changes; each call recomputes every criterion in its panel from the
//! inputs alone. Criteria within a panel are independent, so a host that
//! wants parallelism can equally call the analyzers directly from its own
//! tasks - nothing here holds state.

use tracing::debug;

use crate::domain::criteria::{
    CriterionResult, PayoffMatrix, RiskAnalyzer, UncertaintyAnalyzer,
};
use crate::domain::foundation::{Alpha, ProbabilityVector, ShapeError};

/// Stateless orchestrator for the two criterion panels.
pub struct CriteriaEvaluator;

impl CriteriaEvaluator {
    /// Evaluates the five criteria that need no probabilities, in panel
    /// order: Maximax, Minimax, Maximin, Hurwicz, Savage.
    pub fn evaluate_uncertainty(matrix: &PayoffMatrix, alpha: Alpha) -> Vec<CriterionResult> {
        debug!(
            alternatives = matrix.alternative_count(),
            states = matrix.state_count(),
            %alpha,
            "evaluating uncertainty criteria"
        );

        vec![
            CriterionResult::Maximax(UncertaintyAnalyzer::maximax(matrix)),
            CriterionResult::Minimax(UncertaintyAnalyzer::minimax(matrix)),
            CriterionResult::Maximin(UncertaintyAnalyzer::maximin(matrix)),
            CriterionResult::Hurwicz(UncertaintyAnalyzer::hurwicz(matrix, alpha)),
            CriterionResult::Savage(UncertaintyAnalyzer::savage(matrix)),
        ]
    }

    /// Evaluates the four probability-weighted criteria, in panel order:
    /// Bayesian, MinVariance, ThresholdProbability, Modal.
    ///
    /// # Errors
    /// `ShapeError::ProbabilityCountMismatch` when the distribution does not
    /// cover the matrix's states; no partial panel is returned.
    pub fn evaluate_risk(
        matrix: &PayoffMatrix,
        probabilities: &ProbabilityVector,
        threshold: f64,
    ) -> Result<Vec<CriterionResult>, ShapeError> {
        debug!(
            alternatives = matrix.alternative_count(),
            states = matrix.state_count(),
            threshold,
            "evaluating risk criteria"
        );

        Ok(vec![
            CriterionResult::Bayesian(RiskAnalyzer::bayesian(matrix, probabilities)?),
            CriterionResult::MinVariance(RiskAnalyzer::min_variance(matrix, probabilities)?),
            CriterionResult::ThresholdProbability(RiskAnalyzer::max_probability_above_threshold(
                matrix,
                probabilities,
                threshold,
            )?),
            CriterionResult::Modal(RiskAnalyzer::modal(matrix, probabilities)?),
        ])
    }
}
