//! Group statistics and metrics

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::cluster::Partition;
use crate::graph::{Gender, Link};

/// Count of members per gender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderTally {
    pub male: usize,
    pub female: usize,
}

impl GenderTally {
    fn record(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }
}

/// Intra-group degree of one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDegree {
    pub id: String,
    pub degree: usize,
}

/// Connectivity statistics for one final group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAnalytics {
    pub group_index: usize,

    pub size: usize,

    /// Links with both endpoints in this group
    pub edge_count: usize,

    /// Degree of every member, in member order
    pub degrees: Vec<MemberDegree>,

    pub gender_tally: GenderTally,

    /// Members with no link to anyone else in the group
    pub isolated: Vec<String>,

    /// Edges over possible undirected pairs
    pub density: f32,
}

/// Calculate density (edges / possible undirected pairs)
///
/// Repeated links and self-links count, so this can exceed 1.0.
pub fn calculate_density(size: usize, edge_count: usize) -> f32 {
    if size <= 1 {
        return 1.0; // By convention, singleton groups have density 1
    }

    let potential_edges = size * (size - 1) / 2;
    edge_count as f32 / potential_edges as f32
}

/// Map each member name to the position of the group holding it
fn group_owners(partition: &Partition) -> HashMap<&str, usize> {
    partition
        .groups
        .iter()
        .enumerate()
        .flat_map(|(position, group)| group.members.iter().map(move |id| (id.as_str(), position)))
        .collect()
}

/// Compute per-group analytics over a frozen partition
///
/// Membership comes from `partition.groups` alone, so a caller may pass any
/// subset of a run's groups. Links naming entities outside those groups are
/// ignored. A self-link adds two to its endpoint's degree. Genders are looked
/// up by name in `partition.nodes`; members without a node go untallied.
pub fn compute_analytics(partition: &Partition, links: &[Link]) -> Vec<GroupAnalytics> {
    let owner = group_owners(partition);
    let genders = partition.genders();

    let mut edge_counts = vec![0usize; partition.groups.len()];
    let mut degrees: HashMap<&str, usize> = HashMap::new();

    for link in links {
        let (src, dst) = link.endpoints();
        if let (Some(&a), Some(&b)) = (owner.get(src), owner.get(dst)) {
            if a == b {
                edge_counts[a] += 1;
                *degrees.entry(src).or_insert(0) += 1;
                *degrees.entry(dst).or_insert(0) += 1;
            }
        }
    }

    partition
        .groups
        .iter()
        .zip(edge_counts)
        .map(|(group, edge_count)| {
            let mut gender_tally = GenderTally::default();
            for id in &group.members {
                if let Some(&gender) = genders.get(id.as_str()) {
                    gender_tally.record(gender);
                }
            }

            let member_degrees: Vec<MemberDegree> = group
                .members
                .iter()
                .map(|id| MemberDegree {
                    id: id.clone(),
                    degree: degrees.get(id.as_str()).copied().unwrap_or(0),
                })
                .collect();

            let isolated = member_degrees
                .iter()
                .filter(|m| m.degree == 0)
                .map(|m| m.id.clone())
                .collect();

            GroupAnalytics {
                group_index: group.index,
                size: group.size(),
                edge_count,
                degrees: member_degrees,
                gender_tally,
                isolated,
                density: calculate_density(group.size(), edge_count),
            }
        })
        .collect()
}

/// Links whose endpoints ended up in different groups
pub fn cross_group_edges(partition: &Partition, links: &[Link]) -> usize {
    let owner = group_owners(partition);

    links
        .iter()
        .filter(|link| {
            let (src, dst) = link.endpoints();
            matches!((owner.get(src), owner.get(dst)), (Some(a), Some(b)) if a != b)
        })
        .count()
}

/// Partition-wide figures for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub entity_count: usize,
    pub link_count: usize,
    pub group_count: usize,
    pub target_group_count: usize,
    pub target_reached: bool,
    pub undersized_groups: Vec<usize>,
    pub intra_group_edges: usize,
    pub cross_group_edges: usize,
    pub isolated_entities: usize,
    pub avg_group_size: f64,
}

/// Summarise a partition and its analytics
pub fn summarize(
    partition: &Partition,
    analytics: &[GroupAnalytics],
    links: &[Link],
) -> PartitionSummary {
    let group_count = partition.groups.len();

    PartitionSummary {
        entity_count: partition.nodes.len(),
        link_count: links.len(),
        group_count,
        target_group_count: partition.config.target_group_count,
        target_reached: partition.target_reached,
        undersized_groups: partition.undersized_groups(),
        intra_group_edges: analytics.iter().map(|a| a.edge_count).sum(),
        cross_group_edges: cross_group_edges(partition, links),
        isolated_entities: analytics.iter().map(|a| a.isolated.len()).sum(),
        avg_group_size: partition.nodes.len() as f64
            / if group_count == 0 { 1.0 } else { group_count as f64 },
    }
}
