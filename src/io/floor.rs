//! Floor description format I/O.
//!
//! A floor is a JSON object with an `elements` array. Each element carries a
//! unique `id`, normalized `x`/`y` coordinates, the ids of its `neighbors`,
//! and optionally a `room` code or a connector `type` tag. Unknown fields
//! are ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::NavError;
use crate::graph::node::{ConnectorKind, NodeKind, WayNode};
use crate::graph::room::RoomMeta;

/// Root structure of a floor description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorFile {
    pub elements: Vec<FloorElement>,
}

/// One serialized waypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub neighbors: Vec<String>,
    /// Room code such as "B216"; empty for non-rooms.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,
    /// Connector tag: "elevator", or anything containing "stair".
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl FloorElement {
    /// Chooses the waypoint variant. A recognized connector tag wins over a
    /// room code; an unrecognized tag is ignored like an unknown field.
    fn to_node(&self) -> Result<WayNode, NavError> {
        let kind = if let Some(kind) = ConnectorKind::from_tag(&self.kind) {
            NodeKind::Connector { kind, floor: 0 }
        } else if !self.room.is_empty() {
            NodeKind::Room(RoomMeta::parse(&self.room)?)
        } else {
            NodeKind::Junction
        };
        Ok(WayNode::new(&self.id, (self.x, self.y), kind))
    }
}

/// Parses one floor description into waypoints.
///
/// Construction is two passes: elements become waypoints of the right
/// variant, then each neighbor-id list is resolved against the floor's
/// element set. A neighbor id that resolves to nothing, or a room code that
/// cannot be decomposed, fails the whole floor. Adjacency is kept exactly
/// as given; the loader performs no cross-floor wiring.
///
/// # Example
/// ```
/// use wayfinder::io::parse_floor;
///
/// let nodes = parse_floor(
///     r#"{"elements": [
///         {"id": "h1", "x": 0.0, "y": 0.0, "neighbors": ["r1"]},
///         {"id": "r1", "x": 0.5, "y": 0.0, "neighbors": ["h1"], "room": "B101"}
///     ]}"#,
/// ).unwrap();
/// assert_eq!(nodes.len(), 2);
/// ```
pub fn parse_floor(json: &str) -> Result<Vec<WayNode>, NavError> {
    let file: FloorFile = serde_json::from_str(json)
        .map_err(|e| NavError::MalformedGraph(format!("floor description is not valid: {e}")))?;

    let known: HashSet<&str> = file.elements.iter().map(|e| e.id.as_str()).collect();

    let mut nodes = Vec::with_capacity(file.elements.len());
    for element in &file.elements {
        let mut node = element.to_node()?;
        for neighbor in &element.neighbors {
            if !known.contains(neighbor.as_str()) {
                return Err(NavError::MalformedGraph(format!(
                    "element `{}` references unknown neighbor `{neighbor}`",
                    element.id
                )));
            }
            node.neighbors.push(neighbor.clone());
        }
        nodes.push(node);
    }

    log::debug!("parsed floor with {} waypoints", nodes.len());
    Ok(nodes)
}

/// Reads and parses a floor description file.
///
/// # Arguments
/// * `path` - Path to the floor JSON file
pub fn read_floor(path: &Path) -> Result<Vec<WayNode>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read floor file: {}", path.display()))?;
    let nodes = parse_floor(&json)
        .with_context(|| format!("Failed to parse floor file: {}", path.display()))?;
    Ok(nodes)
}
