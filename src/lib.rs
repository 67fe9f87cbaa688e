//! Core library functions for the group partitioner

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;
pub mod viz;

pub use cluster::{build_groups, Group, Node, Partition};
pub use cluster::metrics::{compute_analytics, GenderTally, GroupAnalytics, MemberDegree};
pub use config::GroupingConfig;
pub use error::{GroupingError, Result};
pub use graph::{Entity, Gender, Link};
