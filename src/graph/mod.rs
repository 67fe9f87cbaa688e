//! Entity roster and connectivity module

pub mod entity;
pub mod builder;
pub mod algorithms;

pub use entity::{Entity, Gender, Link};
pub use builder::Roster;
pub use algorithms::connectivity_closure;
