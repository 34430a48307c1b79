use thiserror::Error;

/// Errors raised while loading floor graphs or answering route queries.
///
/// An unreachable destination is not an error: the router reports it as an
/// empty path and the formatter as an empty step list.
#[derive(Debug, Error)]
pub enum NavError {
    /// A floor description is internally inconsistent and the facility must
    /// not start serving queries with it.
    #[error("malformed floor graph: {0}")]
    MalformedGraph(String),

    /// Two distinct waypoints occupy the exact same position, so the
    /// direction between them cannot be classified.
    #[error("waypoints `{a}` and `{b}` occupy the same position")]
    InvalidGeometry { a: String, b: String },

    /// A query identifier resolved to no known waypoint or room.
    #[error("location `{0}` not found")]
    LocationNotFound(String),
}
