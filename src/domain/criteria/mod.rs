//! Criteria Module - Pure domain services for decision criteria.
//!
//! This module contains stateless functions that score the alternatives of a
//! payoff matrix under the classical decision-theory criteria.
//!
//! # Components
//!
//! - `PayoffMatrix` - Core data structure: alternatives x states of nature
//! - `UncertaintyAnalyzer` - Maximax, Minimax, Maximin, Hurwicz, Savage
//! - `RiskAnalyzer` - Bayesian, minimum variance, probability threshold, modal
//! - `CriterionResult` - Closed set of per-criterion result shapes
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return freshly computed results; callers own all
//! state between calls. When two rows tie for the optimal score, the lowest
//! row index wins under every criterion - the scans in `selection` are the
//! single implementation of that policy.

mod payoff_matrix;
mod result;
mod risk;
mod selection;
mod uncertainty;

// Re-export all public types
pub use payoff_matrix::{PayoffMatrix, PayoffMatrixBuilder};
pub use result::CriterionResult;
pub use risk::{
    BayesianResult, MinVarianceResult, ModalResult, RiskAnalyzer, ThresholdProbabilityResult,
};
pub use uncertainty::{
    HurwiczResult, HurwiczRow, MaximaxResult, MaximinResult, MinimaxResult, SavageResult,
    UncertaintyAnalyzer,
};
