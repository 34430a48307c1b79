pub mod error;
pub mod facility;
pub mod graph;
pub mod io;
pub mod route;

// Prelude
pub use error::NavError;
pub use facility::{Destination, DirectionsResponse, Facility};
pub use graph::building::Building;
pub use graph::direction::Direction;
pub use graph::node::{ConnectorKind, NodeKind, WayNode};
pub use graph::room::{RoomMeta, RoomType};
pub use route::steps::DirectionStep;
