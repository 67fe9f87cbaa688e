//! Configuration management for the group partitioner

use serde::{Serialize, Deserialize};
use crate::error::{GroupingError, Result};

/// Size bounds and target count for a grouping run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Minimum number of members per group (best-effort)
    pub min_size: usize,

    /// Maximum number of members per group
    pub max_size: usize,

    /// Number of groups the merger tries to reach
    pub target_group_count: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            min_size: 2,
            max_size: 4,
            target_group_count: 1,
        }
    }
}

impl GroupingConfig {
    /// Create a new configuration with custom values
    pub fn new(
        min_size: usize,
        max_size: usize,
        target_group_count: usize,
    ) -> Self {
        Self {
            min_size,
            max_size,
            target_group_count,
        }
    }

    /// Reject bounds the builder and merger cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.min_size < 1 {
            return Err(GroupingError::invalid_configuration(
                "min_size must be at least 1",
            ));
        }

        if self.max_size < self.min_size {
            return Err(GroupingError::invalid_configuration(format!(
                "max_size ({}) must not be smaller than min_size ({})",
                self.max_size, self.min_size
            )));
        }

        if self.target_group_count < 1 {
            return Err(GroupingError::invalid_configuration(
                "target_group_count must be at least 1",
            ));
        }

        Ok(())
    }
}
