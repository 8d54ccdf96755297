//! Weighted multi-modal world graph.

mod builder;

pub use builder::{Edge, WorldGraph};
