//! Hierarchy evaluation configuration.

use crate::priority::PriorityConfig;

/// Configuration for [`HierarchyRunner`](super::HierarchyRunner).
///
/// # Examples
///
/// ```
/// use u_ahp::hierarchy::HierarchyConfig;
/// use u_ahp::priority::PriorityConfig;
///
/// let config = HierarchyConfig::default()
///     .with_priority(PriorityConfig::default().with_reciprocity_check(1e-6))
///     .with_tie_epsilon(1e-9)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyConfig {
    /// Applied to the criteria matrix and every alternatives matrix.
    pub priority: PriorityConfig,

    /// Final scores within this distance of their tie group's highest score
    /// share a rank and are listed in input order.
    ///
    /// The default, 0.0, ties only exactly equal scores. A positive value
    /// absorbs rounding noise, at the cost of listing a marginally higher
    /// score after a lower one when the lower one comes first in input order.
    pub tie_epsilon: f64,

    /// Whether to evaluate the per-criterion matrices in parallel.
    ///
    /// Only takes effect with the `parallel` feature; results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            priority: PriorityConfig::default(),
            tie_epsilon: 0.0,
            parallel: false,
        }
    }
}

impl HierarchyConfig {
    pub fn with_priority(mut self, priority: PriorityConfig) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tie_epsilon(mut self, eps: f64) -> Self {
        self.tie_epsilon = eps;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.priority.validate()?;
        if !self.tie_epsilon.is_finite() || self.tie_epsilon < 0.0 {
            return Err(format!(
                "tie_epsilon must be non-negative and finite, got {}",
                self.tie_epsilon
            ));
        }
        Ok(())
    }
}
