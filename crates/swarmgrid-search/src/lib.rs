//! Waypoint generation for searching robots.
//!
//! [`SearchController`] produces the next waypoint for a robot that is
//! either searching the area around home or heading to a pickup. It
//! consults the shared grid through a [`StatusPort`] so that fresh
//! waypoints avoid cells other robots have already visited.
//!
//! Randomness comes from a seeded `ChaCha8Rng`: two controllers built
//! with the same seed and fed the same locations emit the same
//! waypoints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod point;
pub mod port;

pub use config::SearchConfig;
pub use controller::{SearchController, SearchControllerBuilder, SearchMode, SearchResult};
pub use error::SearchError;
pub use point::{Point, Waypoints};
pub use port::{GridStatusPort, NoPickups, PickupSource, StatusPort};
