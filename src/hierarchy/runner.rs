//! Hierarchy evaluation: weights, synthesis, ranking.

use super::config::HierarchyConfig;
use super::ranking::competition_ranking;
use super::types::{Hierarchy, HierarchyResult, RankedAlternative};
use crate::error::{AhpError, Result};
use crate::matrix::ComparisonMatrix;
use crate::priority::{PriorityConfig, PriorityEngine, PriorityResult};
use tracing::debug;

/// Evaluates a [`Hierarchy`] into a ranked list of alternatives.
pub struct HierarchyRunner;

impl HierarchyRunner {
    /// Runs the priority engine on the criteria matrix and every
    /// alternatives matrix, then synthesizes final scores by weighted sum
    /// and ranks them.
    ///
    /// No renormalization is applied after synthesis: the scores are a
    /// convex combination of unit-sum vectors and already sum to 1.
    pub fn run(hierarchy: &Hierarchy, config: &HierarchyConfig) -> Result<HierarchyResult> {
        config.validate().map_err(AhpError::InvalidConfig)?;
        hierarchy.validate()?;

        let criteria = PriorityEngine::compute(hierarchy.criteria_matrix(), &config.priority)?;
        let alternatives = evaluate_alternatives(
            hierarchy.alternative_matrices(),
            &config.priority,
            config.parallel,
        )?;

        let names = hierarchy.alternatives();
        let scores: Vec<f64> = (0..names.len())
            .map(|i| {
                alternatives
                    .iter()
                    .zip(&criteria.priority)
                    .map(|(local, weight)| local.priority[i] * weight)
                    .sum()
            })
            .collect();

        let ranking: Vec<RankedAlternative> = competition_ranking(&scores, config.tie_epsilon)
            .into_iter()
            .map(|(index, rank)| RankedAlternative {
                name: names[index].clone(),
                index,
                criterion_priorities: alternatives.iter().map(|r| r.priority[index]).collect(),
                score: scores[index],
                rank,
            })
            .collect();

        let hierarchy_consistency_ratio = hierarchy_consistency_ratio(&criteria, &alternatives);

        debug!(
            criteria = hierarchy.criteria().len(),
            alternatives = names.len(),
            best = ranking.first().map(|r| r.name.as_str()),
            ?hierarchy_consistency_ratio,
            "evaluated hierarchy"
        );

        Ok(HierarchyResult {
            criteria_names: hierarchy.criteria().to_vec(),
            criteria,
            alternatives,
            ranking,
            hierarchy_consistency_ratio,
        })
    }
}

#[cfg(feature = "parallel")]
fn evaluate_alternatives(
    matrices: &[ComparisonMatrix],
    config: &PriorityConfig,
    parallel: bool,
) -> Result<Vec<PriorityResult>> {
    use rayon::prelude::*;

    if parallel {
        matrices
            .par_iter()
            .map(|matrix| PriorityEngine::compute(matrix, config))
            .collect()
    } else {
        matrices
            .iter()
            .map(|matrix| PriorityEngine::compute(matrix, config))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_alternatives(
    matrices: &[ComparisonMatrix],
    config: &PriorityConfig,
    _parallel: bool,
) -> Result<Vec<PriorityResult>> {
    matrices
        .iter()
        .map(|matrix| PriorityEngine::compute(matrix, config))
        .collect()
}

fn hierarchy_consistency_ratio(
    criteria: &PriorityResult,
    alternatives: &[PriorityResult],
) -> Option<f64> {
    let mut ci = criteria.consistency_index;
    let mut ri = criteria.random_index?;
    for (local, weight) in alternatives.iter().zip(&criteria.priority) {
        ci += weight * local.consistency_index;
        ri += weight * local.random_index?;
    }
    (ri != 0.0).then(|| ci / ri)
}
