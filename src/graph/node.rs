use crate::graph::room::RoomMeta;

/// Connector group linking floors. Two connector waypoints belong to the
/// same vertical shaft exactly when their kinds compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorKind {
    Elevator,
    /// Stair group carrying the full tag from the floor data (e.g. "stair-A").
    Stair(String),
}

impl ConnectorKind {
    /// Parses a connector tag from the floor data. The literal `elevator` is
    /// the elevator kind; any tag containing `stair` is a stair kind. Other
    /// tags are not connectors.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "elevator" {
            Some(Self::Elevator)
        } else if tag.contains("stair") {
            Some(Self::Stair(tag.to_string()))
        } else {
            None
        }
    }
}

/// What a waypoint stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A plain routing point (hallway, intersection).
    Junction,
    /// An elevator or stairwell. The floor number is assigned when the
    /// building is assembled.
    Connector { kind: ConnectorKind, floor: i32 },
    /// An addressable room.
    Room(RoomMeta),
}

/// A positioned node in the routing graph.
///
/// Neighbors are stored as waypoint ids; undirected edges are encoded as an
/// entry on each side. Identity is the id string.
#[derive(Debug, Clone)]
pub struct WayNode {
    pub id: String,
    /// Building-local normalized coordinates; x grows eastward, y northward.
    pub position: (f64, f64),
    pub neighbors: Vec<String>,
    pub kind: NodeKind,
}

impl WayNode {
    pub fn new(id: &str, position: (f64, f64), kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            position,
            neighbors: Vec::new(),
            kind,
        }
    }

    /// Adds `other` to the neighbor list unless already present.
    pub fn add_neighbor(&mut self, other: &str) {
        if self.id != other && !self.neighbors.iter().any(|n| n == other) {
            self.neighbors.push(other.to_string());
        }
    }

    pub fn is_connector(&self) -> bool {
        matches!(self.kind, NodeKind::Connector { .. })
    }

    pub fn connector_kind(&self) -> Option<&ConnectorKind> {
        match &self.kind {
            NodeKind::Connector { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn room(&self) -> Option<&RoomMeta> {
        match &self.kind {
            NodeKind::Room(meta) => Some(meta),
            _ => None,
        }
    }

    /// Human-facing name: the room identifier for rooms, the raw id otherwise.
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Room(meta) => meta.identifier(),
            _ => self.id.clone(),
        }
    }
}
