//! Domain types for the wayfinder.
//!
//! This module contains the core model types: coordinates, named
//! locations, transport modes with their cost models, and elapsed travel
//! time. Invariants are enforced at construction time, so code receiving
//! these types can trust them.

mod location;
mod mode;
mod point;
mod travel_time;

pub use location::{ICE_HIGHWAY_MARKER, Location, PUBLIC_OWNER, owner_is_notable};
pub use mode::TransportMode;
pub use point::Point;
pub use travel_time::TravelTime;
