//! Serialized floor descriptions.
//!
//! This module reads the JSON floor format consumed at startup and turns it
//! into per-floor waypoint lists ready for building assembly.

pub mod floor;

pub use floor::{parse_floor, read_floor};
