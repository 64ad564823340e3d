//! Competition ranking of final scores.

/// Orders `scores` descending and assigns competition ("1224") ranks.
///
/// Scores within `epsilon` of the first score of their group are tied:
/// they share the lowest rank of the group, appear in input order, and the
/// next group continues at `group_start + group_len + 1`.
///
/// Returns `(input_index, rank)` pairs in presentation order.
pub(crate) fn competition_ranking(scores: &[f64], epsilon: f64) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranked = Vec::with_capacity(order.len());
    let mut start = 0;
    while start < order.len() {
        let head = scores[order[start]];
        let mut end = start + 1;
        while end < order.len() && head - scores[order[end]] <= epsilon {
            end += 1;
        }

        let group = &mut order[start..end];
        group.sort_unstable();
        ranked.extend(group.iter().map(|&index| (index, start + 1)));
        start = end;
    }
    ranked
}

/// Competition ranks of `scores` (highest score = rank 1), in input order.
///
/// Equal scores (within `epsilon`) share the lowest rank and the next
/// distinct score skips the tied positions.
///
/// # Examples
///
/// ```
/// use u_ahp::hierarchy::rank_scores;
///
/// assert_eq!(rank_scores(&[0.40, 0.40, 0.20], 0.0), vec![1, 1, 3]);
/// assert_eq!(rank_scores(&[0.1, 0.5, 0.5, 0.3], 0.0), vec![4, 1, 1, 3]);
/// ```
pub fn rank_scores(scores: &[f64], epsilon: f64) -> Vec<usize> {
    let mut ranks = vec![0; scores.len()];
    for (index, rank) in competition_ranking(scores, epsilon) {
        ranks[index] = rank;
    }
    ranks
}
