//! Group formation, merging and analysis module

pub mod formation;
pub mod merge;
pub mod metrics;

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::config::GroupingConfig;
use crate::error::Result;
use crate::graph::{Entity, Gender, Link, Roster};

/// A final group of entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Position of this group in the final ordered list
    pub index: usize,

    /// Member names in formation order
    pub members: Vec<String>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// One entity placed in its final group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub gender: Gender,
    pub group_index: usize,
}

/// Frozen result of a grouping run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// Final groups in order
    pub groups: Vec<Group>,

    /// Every entity, flattened in group order
    pub nodes: Vec<Node>,

    /// Settings the run used
    pub config: GroupingConfig,

    /// Whether merging got down to the target group count
    pub target_reached: bool,
}

impl Partition {
    /// Resolve index groups into a named partition
    fn from_indices(roster: &Roster, groups: Vec<Vec<usize>>, config: GroupingConfig) -> Self {
        let target_reached = groups.len() <= config.target_group_count;

        let nodes = groups
            .iter()
            .enumerate()
            .flat_map(|(g, members)| {
                members.iter().map(move |&node| Node {
                    id: roster.id(node).to_string(),
                    gender: roster.gender(node),
                    group_index: g,
                })
            })
            .collect();

        let groups = groups
            .iter()
            .enumerate()
            .map(|(index, members)| Group {
                index,
                members: roster.names(members),
            })
            .collect();

        Self {
            groups,
            nodes,
            config,
            target_reached,
        }
    }

    /// Member lists only, in group order
    pub fn member_lists(&self) -> Vec<Vec<String>> {
        self.groups.iter().map(|g| g.members.clone()).collect()
    }

    /// Positions of groups below the configured minimum size
    pub fn undersized_groups(&self) -> Vec<usize> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.size() < self.config.min_size)
            .map(|(position, _)| position)
            .collect()
    }

    /// Gender of every node, keyed by name
    pub fn genders(&self) -> HashMap<&str, Gender> {
        self.nodes.iter().map(|n| (n.id.as_str(), n.gender)).collect()
    }
}

/// Partition entities into size-bounded groups
///
/// Validates the configuration, the entity records and every link endpoint
/// before any grouping happens. Once validation passes the run always
/// produces a partition, even if some groups fall short of `min_size` or the
/// target count could not be reached.
pub fn build_groups(
    entities: &[Entity],
    links: &[Link],
    config: &GroupingConfig,
) -> Result<Partition> {
    config.validate()?;

    let roster = Roster::from_entities(entities)?;
    let edges = roster.resolve_links(links)?;

    log::info!(
        "Grouping {} entities with {} links (size {}..={}, target {})",
        roster.node_count(),
        edges.len(),
        config.min_size,
        config.max_size,
        config.target_group_count
    );

    let initial = formation::form_groups(
        roster.node_count(),
        &edges,
        config.min_size,
        config.max_size,
    );

    log::info!("Formed {} initial groups", initial.len());

    let merged = merge::merge_groups(
        initial,
        &edges,
        config.max_size,
        config.target_group_count,
    );

    let partition = Partition::from_indices(&roster, merged, *config);

    if partition.target_reached {
        log::info!("Settled on {} groups", partition.groups.len());
    } else {
        log::warn!(
            "Settled on {} groups, above target of {}",
            partition.groups.len(),
            config.target_group_count
        );
    }

    Ok(partition)
}
