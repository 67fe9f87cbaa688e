//! Entity and link records supplied by the caller

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Binary gender attribute carried by every entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code used in input records and reports
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Accepts `M` or `F` in either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Gender::Male),
            "F" | "f" => Ok(Gender::Female),
            other => Err(format!("gender must be M or F, got '{}'", other)),
        }
    }
}

/// A named, gender-tagged item to be grouped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub gender: Gender,
}

impl Entity {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

/// Undirected connection between two entities
///
/// Self-links and repeated links are kept as-is; each occurrence counts
/// on its own in every edge statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Borrow both endpoints as a pair
    pub fn endpoints(&self) -> (&str, &str) {
        (self.source.as_str(), self.target.as_str())
    }
}
