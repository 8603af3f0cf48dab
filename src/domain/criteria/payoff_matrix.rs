//! Payoff Matrix - Core data structure for decision criteria analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ShapeError;

/// The payoff matrix mapping alternatives x states of nature to outcomes.
///
/// Row `i` holds the outcomes of alternative `i`; column `j` holds the
/// outcomes under state of nature `j`. A constructed matrix always has at
/// least one row and rectangular rows of at least one column, so the
/// criteria never re-check shape. Non-finite cell values are not rejected;
/// they flow through the computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PayoffMatrix {
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    /// Creates a payoff matrix, validating its shape.
    ///
    /// # Errors
    /// - `ShapeError::EmptyMatrix` when there are no rows
    /// - `ShapeError::EmptyRow` when the first row has no columns
    /// - `ShapeError::JaggedRow` when a later row differs in length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::EmptyMatrix);
        }

        let expected = rows[0].len();
        if expected == 0 {
            return Err(ShapeError::EmptyRow { row: 0 });
        }

        for (row, values) in rows.iter().enumerate().skip(1) {
            if values.is_empty() {
                return Err(ShapeError::EmptyRow { row });
            }
            if values.len() != expected {
                return Err(ShapeError::JaggedRow {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// Creates a builder for constructing a payoff matrix row by row.
    pub fn builder() -> PayoffMatrixBuilder {
        PayoffMatrixBuilder::new()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of states of nature (columns).
    pub fn state_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the rows in alternative order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the outcomes of alternative `row`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    /// Returns the outcome of alternative `row` under state `state`.
    pub fn cell(&self, row: usize, state: usize) -> f64 {
        self.rows[row][state]
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.rows
    }
}

/// Builder for constructing PayoffMatrix instances.
#[derive(Debug, Default)]
pub struct PayoffMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one alternative's outcomes as the next row.
    pub fn row(mut self, outcomes: impl Into<Vec<f64>>) -> Self {
        self.rows.push(outcomes.into());
        self
    }

    /// Builds the payoff matrix, validating its shape.
    pub fn build(self) -> Result<PayoffMatrix, ShapeError> {
        PayoffMatrix::from_rows(self.rows)
    }
}
