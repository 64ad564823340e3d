//! Hierarchy input and output types.

use crate::error::{AhpError, Result};
use crate::matrix::ComparisonMatrix;
use crate::priority::PriorityResult;

/// A two-level decision hierarchy: criteria over alternatives.
///
/// Holds one criteria matrix (k×k) and, for each criterion in order, one
/// alternatives matrix (m×m). Each alternatives matrix is independent input.
///
/// # Examples
///
/// ```
/// use u_ahp::hierarchy::Hierarchy;
/// use u_ahp::matrix::ComparisonMatrix;
///
/// let hierarchy = Hierarchy::new(
///     ["Cost", "Quality"],
///     ["A", "B", "C"],
///     ComparisonMatrix::from_upper_triangle(2, &[3.0]).unwrap(),
/// )
/// .with_alternative_matrix(ComparisonMatrix::from_upper_triangle(3, &[2.0, 4.0, 2.0]).unwrap())
/// .with_alternative_matrix(ComparisonMatrix::from_upper_triangle(3, &[0.5, 1.0, 2.0]).unwrap());
///
/// assert!(hierarchy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hierarchy {
    criteria: Vec<String>,
    alternatives: Vec<String>,
    criteria_matrix: ComparisonMatrix,
    alternative_matrices: Vec<ComparisonMatrix>,
}

impl Hierarchy {
    /// Creates a hierarchy without alternatives matrices.
    ///
    /// Add one matrix per criterion, in criterion order, with
    /// [`with_alternative_matrix`](Self::with_alternative_matrix).
    pub fn new<C, A>(
        criteria: impl IntoIterator<Item = C>,
        alternatives: impl IntoIterator<Item = A>,
        criteria_matrix: ComparisonMatrix,
    ) -> Self
    where
        C: Into<String>,
        A: Into<String>,
    {
        Self {
            criteria: criteria.into_iter().map(Into::into).collect(),
            alternatives: alternatives.into_iter().map(Into::into).collect(),
            criteria_matrix,
            alternative_matrices: Vec::new(),
        }
    }

    /// Appends the alternatives matrix for the next criterion.
    pub fn with_alternative_matrix(mut self, matrix: ComparisonMatrix) -> Self {
        self.alternative_matrices.push(matrix);
        self
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria_matrix(&self) -> &ComparisonMatrix {
        &self.criteria_matrix
    }

    pub fn alternative_matrices(&self) -> &[ComparisonMatrix] {
        &self.alternative_matrices
    }

    /// Checks that names, matrix counts, and matrix orders line up.
    pub fn validate(&self) -> Result<()> {
        let k = self.criteria.len();
        let m = self.alternatives.len();

        if k != self.criteria_matrix.size() {
            return Err(AhpError::DimensionMismatch(format!(
                "{k} criteria but criteria matrix is {n}x{n}",
                n = self.criteria_matrix.size()
            )));
        }
        if m == 0 {
            return Err(AhpError::DimensionMismatch(
                "hierarchy has no alternatives".into(),
            ));
        }
        if self.alternative_matrices.len() != k {
            return Err(AhpError::DimensionMismatch(format!(
                "{k} criteria but {} alternatives matrices",
                self.alternative_matrices.len()
            )));
        }
        for (c, matrix) in self.alternative_matrices.iter().enumerate() {
            if matrix.size() != m {
                return Err(AhpError::DimensionMismatch(format!(
                    "alternatives matrix for criterion '{}' is {n}x{n}, expected {m}x{m}",
                    self.criteria[c],
                    n = matrix.size()
                )));
            }
        }
        Ok(())
    }
}

/// One alternative's place in the final ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedAlternative {
    /// Alternative name.
    pub name: String,

    /// Position in the hierarchy's alternative list.
    pub index: usize,

    /// Local priority under each criterion, in criterion order.
    pub criterion_priorities: Vec<f64>,

    /// `Σ_c criterion_priorities[c] * criteria_weight[c]`.
    pub score: f64,

    /// Competition rank, starting at 1.
    pub rank: usize,
}

/// Result of evaluating a [`Hierarchy`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchyResult {
    /// Criterion names, in input order.
    pub criteria_names: Vec<String>,

    /// Engine output for the criteria matrix.
    pub criteria: PriorityResult,

    /// Engine output for each alternatives matrix, in criterion order.
    pub alternatives: Vec<PriorityResult>,

    /// Alternatives sorted by descending score; ties keep input order.
    ///
    /// With a positive [`HierarchyConfig::tie_epsilon`](super::HierarchyConfig)
    /// a tie group may hold marginally different scores, listed in input order.
    pub ranking: Vec<RankedAlternative>,

    /// Saaty's hierarchy consistency ratio,
    /// `(CI_crit + Σ w_c CI_c) / (RI_crit + Σ w_c RI_c)`.
    ///
    /// `None` if any matrix has no random index or the denominator is zero.
    pub hierarchy_consistency_ratio: Option<f64>,
}

impl HierarchyResult {
    /// Criteria weight vector.
    pub fn criteria_weights(&self) -> &[f64] {
        &self.criteria.priority
    }

    /// The top-ranked alternative (first in input order among ties).
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }

    /// Final scores in the hierarchy's alternative order.
    pub fn scores(&self) -> Vec<f64> {
        let mut scores = vec![0.0; self.ranking.len()];
        for entry in &self.ranking {
            scores[entry.index] = entry.score;
        }
        scores
    }

    /// Names of criteria whose alternatives matrix fails the threshold.
    ///
    /// Matrices with an undefined ratio are not reported.
    pub fn inconsistent_criteria(&self, threshold: f64) -> Vec<&str> {
        self.criteria_names
            .iter()
            .zip(&self.alternatives)
            .filter(|(_, result)| result.is_consistent(threshold) == Some(false))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
