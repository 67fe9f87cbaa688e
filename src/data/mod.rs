//! Input loading for entity and link lists

pub mod text;

pub use text::{load_entities, load_links, parse_entities, parse_links};
