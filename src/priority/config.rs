//! Priority engine configuration.

use super::random_index::RandomIndexTable;

/// Conventional acceptance threshold for the consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Configuration for [`PriorityEngine`](super::PriorityEngine).
///
/// # Examples
///
/// ```
/// use u_ahp::priority::{PriorityConfig, RandomIndexTable};
///
/// let config = PriorityConfig::default()
///     .with_random_index(RandomIndexTable::saaty())
///     .with_consistency_threshold(0.08)
///     .with_reciprocity_check(1e-6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityConfig {
    /// Random index lookup used for the consistency ratio.
    pub random_index: RandomIndexTable,

    /// A consistency ratio strictly below this value is acceptable.
    ///
    /// The engine only reports the verdict; it never rejects a matrix.
    pub consistency_threshold: f64,

    /// When set, matrices must be reciprocal within this tolerance
    /// (`|a[i][j] * a[j][i] - 1| <= tol`, diagonal within `tol` of 1).
    ///
    /// `None` (the default) skips the check.
    pub reciprocity_tolerance: Option<f64>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            random_index: RandomIndexTable::saaty(),
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            reciprocity_tolerance: None,
        }
    }
}

impl PriorityConfig {
    pub fn with_random_index(mut self, table: RandomIndexTable) -> Self {
        self.random_index = table;
        self
    }

    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    /// Enables reciprocity checking with the given tolerance.
    pub fn with_reciprocity_check(mut self, tolerance: f64) -> Self {
        self.reciprocity_tolerance = Some(tolerance);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(format!(
                "consistency_threshold must be positive and finite, got {}",
                self.consistency_threshold
            ));
        }
        if let Some(tol) = self.reciprocity_tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(format!(
                    "reciprocity_tolerance must be non-negative and finite, got {tol}"
                ));
            }
        }
        Ok(())
    }
}
