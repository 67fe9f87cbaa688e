//! Comma-separated text input
//!
//! Entities are one `name,gender` per line, links one `source,target` per
//! line. Blank lines are skipped and fields are trimmed. Line numbers in
//! errors are 1-based.

use std::path::Path;
use anyhow::{Context, Result};
use crate::error::GroupingError;
use crate::graph::{Entity, Gender, Link};

/// Split a line into exactly two non-empty trimmed fields
fn two_fields(line: &str) -> std::result::Result<(&str, &str), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    match fields.as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => Ok((*first, *second)),
        [first, _] if first.is_empty() => Err("missing identifier".to_string()),
        [_, _] => Err("missing second field".to_string()),
        _ => Err(format!("expected 2 comma-separated fields, found {}", fields.len())),
    }
}

/// Parse entity records
pub fn parse_entities(text: &str) -> std::result::Result<Vec<Entity>, GroupingError> {
    let mut entities = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (name, gender) = two_fields(line)
            .map_err(|reason| GroupingError::invalid_entity(i + 1, line, reason))?;
        let gender: Gender = gender
            .parse()
            .map_err(|reason: String| GroupingError::invalid_entity(i + 1, line, reason))?;

        entities.push(Entity::new(name, gender));
    }

    Ok(entities)
}

/// Parse link records
///
/// Endpoints are not checked against any entity list here.
pub fn parse_links(text: &str) -> std::result::Result<Vec<Link>, GroupingError> {
    let mut links = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (source, target) = two_fields(line)
            .map_err(|reason| GroupingError::invalid_link(i + 1, line, reason))?;

        links.push(Link::new(source, target));
    }

    Ok(links)
}

/// Read and parse an entity file
pub fn load_entities(path: impl AsRef<Path>) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    log::info!("Reading entities from {}", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file {}", path.display()))?;
    let entities = parse_entities(&text)?;

    log::info!("Loaded {} entity records", entities.len());
    Ok(entities)
}

/// Read and parse a link file
pub fn load_links(path: impl AsRef<Path>) -> Result<Vec<Link>> {
    let path = path.as_ref();
    log::info!("Reading links from {}", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read link file {}", path.display()))?;
    let links = parse_links(&text)?;

    log::info!("Loaded {} link records", links.len());
    Ok(links)
}
