//! Error types for the grouping engine
//!
//! Every error is raised during validation, before any group is formed.

use thiserror::Error;

/// Result type alias for the grouping engine
pub type Result<T> = std::result::Result<T, GroupingError>;

/// Failures that abort a grouping run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    /// Size bounds or target group count are unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A link endpoint names an entity that was never declared
    #[error("Unknown entity reference '{id}' in link #{link}")]
    UnknownEntityReference { link: usize, id: String },

    /// An entity record is missing its identifier or has an unusable gender
    #[error("Invalid entity record #{record} ('{raw}'): {reason}")]
    InvalidEntityRecord {
        record: usize,
        raw: String,
        reason: String,
    },

    /// A link record does not name exactly two endpoints
    #[error("Invalid link record #{record} ('{raw}'): {reason}")]
    InvalidLinkRecord {
        record: usize,
        raw: String,
        reason: String,
    },
}

impl GroupingError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an unknown entity reference error
    pub fn unknown_entity(link: usize, id: impl Into<String>) -> Self {
        Self::UnknownEntityReference {
            link,
            id: id.into(),
        }
    }

    /// Create an invalid entity record error
    pub fn invalid_entity(record: usize, raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntityRecord {
            record,
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid link record error
    pub fn invalid_link(record: usize, raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLinkRecord {
            record,
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
