//! Trait seams between the graph engine and its collaborators.

pub mod store;

pub use store::{IClusterStore, IMapStore};
