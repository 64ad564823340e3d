//! Column-normalization priority engine.

use super::config::PriorityConfig;
use super::types::PriorityResult;
use crate::error::{AhpError, Result};
use crate::matrix::ComparisonMatrix;
use tracing::{debug, warn};

/// Derives priority vectors and consistency diagnostics from comparison
/// matrices.
///
/// The principal eigenvector is approximated by the row means of the
/// column-normalized matrix, and the principal eigenvalue by the mean of
/// `(A·w)[i] / w[i]`.
///
/// # Examples
///
/// ```
/// use u_ahp::matrix::ComparisonMatrix;
/// use u_ahp::priority::{PriorityConfig, PriorityEngine};
///
/// let matrix = ComparisonMatrix::from_upper_triangle(3, &[2.0, 4.0, 2.0]).unwrap();
/// let result = PriorityEngine::compute(&matrix, &PriorityConfig::default()).unwrap();
///
/// assert!((result.priority.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// assert!(result.consistency_index.abs() < 1e-9);
/// ```
pub struct PriorityEngine;

impl PriorityEngine {
    /// Computes the priority vector and consistency diagnostics of `matrix`.
    ///
    /// Fails with [`AhpError::InvalidConfig`] for an invalid configuration,
    /// [`AhpError::NotReciprocal`] when reciprocity checking is enabled and
    /// violated, [`AhpError::DivisionByZero`] if a column sums to zero, and
    /// [`AhpError::InvalidMatrix`] if a column sum overflows.
    pub fn compute(matrix: &ComparisonMatrix, config: &PriorityConfig) -> Result<PriorityResult> {
        config.validate().map_err(AhpError::InvalidConfig)?;

        if let Some(tolerance) = config.reciprocity_tolerance {
            matrix.check_reciprocal(tolerance)?;
        }

        let n = matrix.size();
        let Approximation {
            column_sums,
            normalized_matrix,
            priority,
            weighted_sum_vector,
            lambda_max,
        } = approximate(matrix)?;

        // A single item is trivially consistent.
        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };

        let random_index = config.random_index.lookup(n);
        let consistency_ratio = match random_index {
            Some(ri) if ri != 0.0 => Some(consistency_index / ri),
            _ => None,
        };

        debug!(
            n,
            lambda_max,
            consistency_index,
            ?random_index,
            ?consistency_ratio,
            "computed priority vector"
        );
        if let Some(cr) = consistency_ratio {
            if cr >= config.consistency_threshold {
                warn!(
                    n,
                    consistency_ratio = cr,
                    threshold = config.consistency_threshold,
                    "comparison matrix is inconsistent"
                );
            }
        }

        Ok(PriorityResult {
            priority,
            normalized_matrix,
            column_sums,
            weighted_sum_vector,
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
        })
    }

    /// Validates raw rows into a [`ComparisonMatrix`], then computes.
    ///
    /// Fails with [`AhpError::InvalidMatrix`] when the rows are empty, not
    /// square, or hold a non-finite or non-positive entry.
    pub fn compute_rows<R: AsRef<[f64]>>(
        rows: &[R],
        config: &PriorityConfig,
    ) -> Result<PriorityResult> {
        let matrix = ComparisonMatrix::from_rows(rows)?;
        Self::compute(&matrix, config)
    }
}

/// Intermediate quantities of the column-normalization method.
pub(crate) struct Approximation {
    pub column_sums: Vec<f64>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub priority: Vec<f64>,
    pub weighted_sum_vector: Vec<f64>,
    pub lambda_max: f64,
}

/// Runs the column-normalization approximation on `matrix`.
pub(crate) fn approximate(matrix: &ComparisonMatrix) -> Result<Approximation> {
    let n = matrix.size();
    let order = n as f64;

    let mut column_sums = vec![0.0; n];
    for row in matrix.rows() {
        for (sum, value) in column_sums.iter_mut().zip(row) {
            *sum += value;
        }
    }
    if let Some(column) = column_sums.iter().position(|&s| s == 0.0) {
        return Err(AhpError::DivisionByZero { column });
    }
    if let Some(column) = column_sums.iter().position(|s| !s.is_finite()) {
        return Err(AhpError::InvalidMatrix(format!(
            "column {column} sum overflows"
        )));
    }

    let normalized_matrix: Vec<Vec<f64>> = matrix
        .rows()
        .map(|row| row.iter().zip(&column_sums).map(|(a, s)| a / s).collect())
        .collect();

    let priority: Vec<f64> = normalized_matrix
        .iter()
        .map(|row| row.iter().sum::<f64>() / order)
        .collect();

    let weighted_sum_vector: Vec<f64> = matrix
        .rows()
        .map(|row| row.iter().zip(&priority).map(|(a, w)| a * w).sum())
        .collect();

    let lambda_max = weighted_sum_vector
        .iter()
        .zip(&priority)
        .map(|(aw, w)| aw / w)
        .sum::<f64>()
        / order;

    Ok(Approximation {
        column_sums,
        normalized_matrix,
        priority,
        weighted_sum_vector,
        lambda_max,
    })
}
