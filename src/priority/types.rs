//! Priority engine output types.

use std::fmt;

/// Verdict derived from a consistency ratio and an acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consistency {
    /// CR is below the threshold; the judgments can be trusted.
    Consistent { ratio: f64 },

    /// CR reached the threshold; the comparisons should be revised.
    Inconsistent { ratio: f64 },

    /// No random index is available for this order (or it is zero),
    /// so the check does not apply.
    Undefined,
}

impl Consistency {
    /// Classifies an optional consistency ratio.
    pub fn from_ratio(ratio: Option<f64>, threshold: f64) -> Self {
        match ratio {
            Some(ratio) if ratio < threshold => Consistency::Consistent { ratio },
            Some(ratio) => Consistency::Inconsistent { ratio },
            None => Consistency::Undefined,
        }
    }

    /// `Some(true)` when consistent, `None` when the check does not apply.
    pub fn is_acceptable(&self) -> Option<bool> {
        match self {
            Consistency::Consistent { .. } => Some(true),
            Consistency::Inconsistent { .. } => Some(false),
            Consistency::Undefined => None,
        }
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consistency::Consistent { ratio } => write!(f, "consistent (CR = {ratio:.4})"),
            Consistency::Inconsistent { ratio } => write!(f, "inconsistent (CR = {ratio:.4})"),
            Consistency::Undefined => f.write_str("CR undefined for this matrix size"),
        }
    }
}

/// Result of one priority engine invocation.
///
/// All vectors follow the row order of the input matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityResult {
    /// Priority (weight) vector. Non-negative, sums to 1.
    pub priority: Vec<f64>,

    /// Input matrix with every column divided by its sum.
    pub normalized_matrix: Vec<Vec<f64>>,

    /// Column sums of the input matrix.
    pub column_sums: Vec<f64>,

    /// `A · priority`.
    pub weighted_sum_vector: Vec<f64>,

    /// Estimated principal eigenvalue: mean of `weighted_sum[i] / priority[i]`.
    pub lambda_max: f64,

    /// `(lambda_max - n) / (n - 1)`, or 0 for a single-item matrix.
    pub consistency_index: f64,

    /// RI(n), `None` when `n` is outside the random index table.
    pub random_index: Option<f64>,

    /// `CI / RI`, `None` when RI is missing or zero.
    pub consistency_ratio: Option<f64>,
}

impl PriorityResult {
    /// Matrix order.
    pub fn size(&self) -> usize {
        self.priority.len()
    }

    /// Consistency verdict against `threshold`.
    pub fn consistency(&self, threshold: f64) -> Consistency {
        Consistency::from_ratio(self.consistency_ratio, threshold)
    }

    /// Shorthand for `self.consistency(threshold).is_acceptable()`.
    pub fn is_consistent(&self, threshold: f64) -> Option<bool> {
        self.consistency(threshold).is_acceptable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio() {
        assert_eq!(
            Consistency::from_ratio(Some(0.05), 0.1),
            Consistency::Consistent { ratio: 0.05 }
        );
        assert_eq!(
            Consistency::from_ratio(Some(0.1), 0.1),
            Consistency::Inconsistent { ratio: 0.1 }
        );
        assert_eq!(Consistency::from_ratio(None, 0.1), Consistency::Undefined);
    }

    #[test]
    fn test_is_acceptable() {
        assert_eq!(Consistency::Consistent { ratio: 0.0 }.is_acceptable(), Some(true));
        assert_eq!(Consistency::Inconsistent { ratio: 0.3 }.is_acceptable(), Some(false));
        assert_eq!(Consistency::Undefined.is_acceptable(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Consistency::Consistent { ratio: 0.03302 }.to_string(),
            "consistent (CR = 0.0330)"
        );
        assert_eq!(
            Consistency::Inconsistent { ratio: 0.25 }.to_string(),
            "inconsistent (CR = 0.2500)"
        );
        assert_eq!(
            Consistency::Undefined.to_string(),
            "CR undefined for this matrix size"
        );
    }
}
