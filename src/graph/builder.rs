//! Roster construction: interning entity names to dense indices

use std::collections::HashMap;
use crate::error::{GroupingError, Result};
use crate::graph::entity::{Entity, Gender, Link};

/// Entities interned in first-seen order
///
/// Index order equals insertion order, so "first by insertion order" is
/// always "smallest index" for the grouping algorithms.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Mapping from names to node indices
    id_to_index: HashMap<String, usize>,

    /// Node names, indexed by node
    node_ids: Vec<String>,

    /// Gender of each node
    genders: Vec<Gender>,
}

impl Roster {
    /// Create an empty roster with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            genders: Vec::with_capacity(capacity),
        }
    }

    /// Intern a list of entity records
    ///
    /// Duplicate names keep their first position; the gender stored is the
    /// one from the last duplicate.
    pub fn from_entities(entities: &[Entity]) -> Result<Self> {
        let mut roster = Self::with_capacity(entities.len());

        for (i, entity) in entities.iter().enumerate() {
            if entity.name.trim().is_empty() {
                return Err(GroupingError::invalid_entity(
                    i + 1,
                    format!("{},{}", entity.name, entity.gender),
                    "missing identifier",
                ));
            }
            roster.get_or_create_node(&entity.name, entity.gender);
        }

        Ok(roster)
    }

    /// Get or create a node for the given name, overwriting its gender
    pub fn get_or_create_node(&mut self, id: &str, gender: Gender) -> usize {
        if let Some(&idx) = self.id_to_index.get(id) {
            self.genders[idx] = gender;
            return idx;
        }

        let idx = self.node_ids.len();
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.genders.push(gender);

        idx
    }

    /// Number of unique entities
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Look up the index of a name
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Name of a node
    pub fn id(&self, node: usize) -> &str {
        &self.node_ids[node]
    }

    /// Gender of a node
    pub fn gender(&self, node: usize) -> Gender {
        self.genders[node]
    }

    /// Translate links into index pairs, rejecting unknown endpoints
    pub fn resolve_links(&self, links: &[Link]) -> Result<Vec<(usize, usize)>> {
        let mut edges = Vec::with_capacity(links.len());

        for (i, link) in links.iter().enumerate() {
            let src = self
                .index_of(&link.source)
                .ok_or_else(|| GroupingError::unknown_entity(i + 1, link.source.as_str()))?;
            let dst = self
                .index_of(&link.target)
                .ok_or_else(|| GroupingError::unknown_entity(i + 1, link.target.as_str()))?;
            edges.push((src, dst));
        }

        Ok(edges)
    }

    /// Resolve node indices back to names
    pub fn names(&self, members: &[usize]) -> Vec<String> {
        members.iter().map(|&node| self.id(node).to_string()).collect()
    }
}
