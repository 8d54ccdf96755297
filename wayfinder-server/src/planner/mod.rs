//! Route planning: shortest-path search and itinerary reconstruction.
//!
//! The search produces a raw hop trace; the reconstructor turns it into
//! the human-readable, segment-by-segment itinerary the presentation
//! layer consumes.

mod itinerary;
mod search;

pub use itinerary::{Itinerary, Segment};
pub use search::{Hop, SearchTrace, shortest_path};
