//! Graph algorithms for analysis

use std::collections::BTreeSet;

/// Every node reachable from `seed` when `edges` is read as an undirected graph
///
/// Fixed-point scan: each pass walks the whole edge list and pulls in the far
/// endpoint of any edge touching the reached set, until a pass adds nothing.
/// A seed that appears in no edge yields just `{seed}`.
pub fn connectivity_closure<T: Ord + Copy>(seed: T, edges: &[(T, T)]) -> BTreeSet<T> {
    let mut reached = BTreeSet::new();
    reached.insert(seed);

    loop {
        let mut grew = false;

        for &(a, b) in edges {
            if reached.contains(&a) {
                grew |= reached.insert(b);
            } else if reached.contains(&b) {
                grew |= reached.insert(a);
            }
        }

        if !grew {
            break;
        }
    }

    reached
}
