//! World-map dataset loading.
//!
//! Parses the tabular source data into normalized location records and
//! route groupings for the graph builder.

mod error;
mod loader;
mod record;

pub use error::DatasetError;
pub use loader::{load_dataset, read_dataset};
pub use record::{Dataset, LocationRow, RouteGrouping};
