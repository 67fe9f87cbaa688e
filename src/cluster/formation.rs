//! Initial group formation
//!
//! Grows one group at a time from the first unassigned entity, pulling in
//! connected entities until the group is full or its component is used up,
//! then pads undersized groups with whatever is left.

use std::collections::{BTreeSet, HashMap};
use crate::graph::connectivity_closure;

/// Unassigned nodes connected to any member of `group`
///
/// Each member's closure is taken over the full edge list, not just edges
/// inside the group. Closures are memoised in `cache` since edges never change
/// during a run.
pub fn connected_candidates(
    group: &[usize],
    edges: &[(usize, usize)],
    unassigned: &BTreeSet<usize>,
    cache: &mut HashMap<usize, BTreeSet<usize>>,
) -> BTreeSet<usize> {
    let mut connected = BTreeSet::new();

    for &member in group {
        let closure = cache
            .entry(member)
            .or_insert_with(|| connectivity_closure(member, edges));
        connected.extend(closure.iter().copied());
    }

    connected.intersection(unassigned).copied().collect()
}

/// Top up `group` to `min_size` from the front of the unassigned pool
///
/// Connectivity is ignored here; stops early if the pool runs dry.
fn pad_to_minimum(group: &mut Vec<usize>, unassigned: &mut BTreeSet<usize>, min_size: usize) {
    while group.len() < min_size {
        match unassigned.pop_first() {
            Some(node) => group.push(node),
            None => break,
        }
    }
}

/// Partition nodes `0..node_count` into size-bounded groups
///
/// Node order is insertion order, so every "first" pick takes the smallest
/// unassigned index. Groups never exceed `max_size`; `min_size` is only met
/// when enough unassigned nodes remain.
pub fn form_groups(
    node_count: usize,
    edges: &[(usize, usize)],
    min_size: usize,
    max_size: usize,
) -> Vec<Vec<usize>> {
    let mut unassigned: BTreeSet<usize> = (0..node_count).collect();
    let mut cache = HashMap::new();
    let mut groups = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    while !unassigned.is_empty() {
        if current.is_empty() {
            if let Some(seed) = unassigned.pop_first() {
                current.push(seed);
            }
        }

        let candidates = connected_candidates(&current, edges, &unassigned, &mut cache);

        match candidates.first() {
            Some(&node) if current.len() < max_size => {
                unassigned.remove(&node);
                current.push(node);
            }
            _ => {
                pad_to_minimum(&mut current, &mut unassigned, min_size);
                log::debug!("Closed group {} with {} members", groups.len(), current.len());
                groups.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        pad_to_minimum(&mut current, &mut unassigned, min_size);
        groups.push(current);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_component_stays_together() {
        let edges = vec![(0, 2), (2, 3)];
        let groups = form_groups(4, &edges, 1, 4);
        assert_eq!(groups, vec![vec![0, 2, 3], vec![1]]);
    }

    #[test]
    fn test_growth_stops_at_max_size() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 4)];
        let groups = form_groups(5, &edges, 1, 2);
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_candidates_taken_in_insertion_order() {
        // 0 links to 3 before 1, but 1 was inserted first
        let edges = vec![(0, 3), (0, 1)];
        let groups = form_groups(4, &edges, 1, 2);
        assert_eq!(groups, vec![vec![0, 1], vec![2], vec![3]]);
    }

    #[test]
    fn test_padding_ignores_connectivity() {
        // 0 is isolated; padding pulls 1 even though 1 belongs with 2
        let edges = vec![(1, 2)];
        let groups = form_groups(3, &edges, 2, 3);
        assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_padding_cannot_exceed_pool() {
        let groups = form_groups(2, &[], 3, 3);
        assert_eq!(groups, vec![vec![0, 1]]);
    }

    #[test]
    fn test_no_nodes_no_groups() {
        assert!(form_groups(0, &[], 1, 1).is_empty());
    }

    #[test]
    fn test_candidates_exclude_assigned() {
        let edges = vec![(0, 1), (1, 2)];
        let unassigned: BTreeSet<usize> = [2].into_iter().collect();
        let mut cache = HashMap::new();
        let candidates = connected_candidates(&[0], &edges, &unassigned, &mut cache);
        assert_eq!(candidates.into_iter().collect::<Vec<_>>(), vec![2]);
    }
}
