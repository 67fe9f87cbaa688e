//! Greedy group merging toward a target group count

use std::collections::HashMap;
use itertools::Itertools;

/// Count edges running between each pair of groups
///
/// Keys are `(i, j)` with `i < j`. Repeated edges count once per occurrence;
/// edges inside a single group are not counted.
pub fn inter_group_edges(groups: &[Vec<usize>], edges: &[(usize, usize)]) -> HashMap<(usize, usize), usize> {
    let owner: HashMap<usize, usize> = groups
        .iter()
        .enumerate()
        .flat_map(|(g, members)| members.iter().map(move |&node| (node, g)))
        .collect();

    let mut counts = HashMap::new();

    for (src, dst) in edges {
        if let (Some(&a), Some(&b)) = (owner.get(src), owner.get(dst)) {
            if a != b {
                *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Pick the eligible pair with the most edges between them
///
/// Pairs are scanned as `(i, j)`, `i < j`, row-major; only a strictly higher
/// score replaces the current best, so ties go to the first pair found.
/// Returns `(i, j, score)` or `None` if every pair would exceed `max_size`.
pub fn best_merge_pair(
    groups: &[Vec<usize>],
    edges: &[(usize, usize)],
    max_size: usize,
) -> Option<(usize, usize, usize)> {
    let scores = inter_group_edges(groups, edges);
    let mut best: Option<(usize, usize, usize)> = None;

    for (i, j) in (0..groups.len()).tuple_combinations() {
        if groups[i].len() + groups[j].len() > max_size {
            continue;
        }

        let score = scores.get(&(i, j)).copied().unwrap_or(0);
        if best.map_or(true, |(_, _, top)| score > top) {
            best = Some((i, j, score));
        }
    }

    best
}

/// Merge groups pairwise until at most `target_count` remain
///
/// Each step removes the chosen pair and appends their concatenation
/// (first group's members, then the second's) at the end of the list.
/// Stops early once no pair fits within `max_size`.
pub fn merge_groups(
    mut groups: Vec<Vec<usize>>,
    edges: &[(usize, usize)],
    max_size: usize,
    target_count: usize,
) -> Vec<Vec<usize>> {
    while groups.len() > target_count {
        let Some((i, j, score)) = best_merge_pair(&groups, edges, max_size) else {
            log::info!(
                "No mergeable pair left; stopping at {} groups (target {})",
                groups.len(),
                target_count
            );
            break;
        };

        log::debug!(
            "Merging groups {} ({} members) and {} ({} members), {} shared links",
            i,
            groups[i].len(),
            j,
            groups[j].len(),
            score
        );

        let mut next = Vec::with_capacity(groups.len() - 1);
        let mut first = Vec::new();
        let mut second = Vec::new();

        for (k, group) in groups.into_iter().enumerate() {
            if k == i {
                first = group;
            } else if k == j {
                second = group;
            } else {
                next.push(group);
            }
        }

        first.extend(second);
        next.push(first);
        groups = next;
    }

    groups
}
