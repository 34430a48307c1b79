//! Building container: floors of waypoints, connector wiring across floors,
//! and scale-aware distance/direction between waypoints.

use std::collections::HashMap;

use crate::error::NavError;
use crate::graph::direction::Direction;
use crate::graph::node::{ConnectorKind, NodeKind, WayNode};
use crate::route::router;
use crate::route::steps::{self, DirectionStep};

/// A building: an ordered list of floors, each floor an ordered list of
/// waypoints, stitched together through its elevator and stair connectors.
///
/// A `Building` is only obtainable through [`Building::assemble`], which
/// wires the connectors and then seals the node set. Everything afterwards
/// is read-only, so buildings can serve concurrent route queries without
/// locking.
#[derive(Debug, Clone)]
pub struct Building {
    identifier: char,
    /// Node ids per floor, in load order.
    floors: Vec<Vec<String>>,
    /// Ordinal floor index -> real-world floor number (floors may be
    /// non-contiguous, e.g. a building without a floor 2).
    floor_range: Vec<i32>,
    /// Per-axis multipliers applied to the normalized coordinates when
    /// computing real-world distance.
    scale: (f64, f64),
    nodes: HashMap<String, WayNode>,
}

impl Building {
    /// Wires connector waypoints across floors and seals the building.
    ///
    /// Wiring runs in two passes before sealing:
    /// 1. every elevator waypoint gets its floor number from `floor_range`
    ///    and an edge to every elevator waypoint on every other floor;
    /// 2. for each stair kind present on the first floor, same-kind
    ///    waypoints on different floors are connected pairwise and get
    ///    their floor numbers. Floors without that kind are skipped.
    ///
    /// Sealing verifies building-wide id uniqueness and moves the nodes
    /// into the id-indexed store; no partially wired building is ever
    /// observable.
    pub fn assemble(
        identifier: char,
        mut floors: Vec<Vec<WayNode>>,
        floor_range: Vec<i32>,
        scale: (f64, f64),
    ) -> Result<Self, NavError> {
        if floor_range.len() < floors.len() {
            return Err(NavError::MalformedGraph(format!(
                "building {identifier} has {} floors but a floor range of {}",
                floors.len(),
                floor_range.len()
            )));
        }

        wire_elevators(&mut floors, &floor_range);
        wire_stairs(&mut floors, &floor_range);

        // Seal last: wiring only touches adjacency and floor numbers.
        let mut nodes = HashMap::new();
        let mut floor_ids = Vec::with_capacity(floors.len());
        for floor in floors {
            let mut ids = Vec::with_capacity(floor.len());
            for node in floor {
                if nodes.contains_key(&node.id) {
                    return Err(NavError::MalformedGraph(format!(
                        "duplicate waypoint id `{}` in building {identifier}",
                        node.id
                    )));
                }
                ids.push(node.id.clone());
                nodes.insert(node.id.clone(), node);
            }
            floor_ids.push(ids);
        }

        log::info!(
            "assembled building {identifier}: {} floors, {} waypoints",
            floor_ids.len(),
            nodes.len()
        );

        Ok(Self {
            identifier,
            floors: floor_ids,
            floor_range,
            scale,
            nodes,
        })
    }

    pub fn identifier(&self) -> char {
        self.identifier
    }

    pub fn floor_range(&self) -> &[i32] {
        &self.floor_range
    }

    pub fn scale(&self) -> (f64, f64) {
        self.scale
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Waypoints of one floor, in load order.
    pub fn floor(&self, index: usize) -> Vec<&WayNode> {
        self.floors
            .get(index)
            .map(|ids| ids.iter().map(|id| &self.nodes[id]).collect())
            .unwrap_or_default()
    }

    pub fn node(&self, id: &str) -> Option<&WayNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &WayNode> {
        self.floors
            .iter()
            .flat_map(move |ids| ids.iter().map(move |id| &self.nodes[id]))
    }

    /// All room waypoints, in floor/load order.
    pub fn rooms(&self) -> Vec<&WayNode> {
        self.nodes().filter(|n| n.room().is_some()).collect()
    }

    /// Finds a waypoint by raw id or by derived room identifier.
    pub fn find(&self, query: &str) -> Option<&WayNode> {
        self.nodes()
            .find(|n| n.id == query || n.room().is_some_and(|m| m.identifier() == query))
    }

    /// Real-world distance between two waypoints, with each axis delta
    /// scaled by the building's factor for that axis. Floor transitions
    /// cost nothing: the distance between two connector waypoints is zero.
    pub fn distance_between(&self, a: &WayNode, b: &WayNode) -> f64 {
        if a.is_connector() && b.is_connector() {
            return 0.0;
        }
        let dx = (b.position.0 - a.position.0) * self.scale.0;
        let dy = (b.position.1 - a.position.1) * self.scale.1;
        (dx.powi(2) + dy.powi(2)).sqrt()
    }

    /// Classifies the direction of travel from `a` to `b`.
    ///
    /// Two connectors of the same kind classify as [`Direction::Elevator`]
    /// or [`Direction::Stairs`]. Otherwise the axis with the larger
    /// coordinate delta decides the compass direction; ties go to the
    /// vertical axis. Two distinct waypoints at the exact same position are
    /// invalid geometry.
    pub fn direction_between(&self, a: &WayNode, b: &WayNode) -> Result<Direction, NavError> {
        if let (Some(ka), Some(kb)) = (a.connector_kind(), b.connector_kind()) {
            if ka == kb {
                return Ok(match ka {
                    ConnectorKind::Elevator => Direction::Elevator,
                    ConnectorKind::Stair(_) => Direction::Stairs,
                });
            }
        }

        let dx = b.position.0 - a.position.0;
        let dy = b.position.1 - a.position.1;
        if dx == 0.0 && dy == 0.0 {
            return Err(NavError::InvalidGeometry {
                a: a.id.clone(),
                b: b.id.clone(),
            });
        }
        if dx.abs() > dy.abs() {
            Ok(if dx > 0.0 { Direction::East } else { Direction::West })
        } else {
            Ok(if dy > 0.0 { Direction::North } else { Direction::South })
        }
    }

    /// Routes between two waypoint ids within this building.
    ///
    /// Returns the inclusive waypoint path, or an empty path when the
    /// target cannot be reached within the step bound.
    pub fn route(&self, from: &str, to: &str) -> Vec<&WayNode> {
        router::route(self, from, to)
    }

    /// Resolves two location identifiers (raw waypoint id or derived room
    /// identifier), routes between them and consolidates the path into
    /// directional steps.
    pub fn directions(&self, from: &str, to: &str) -> Result<Vec<DirectionStep>, NavError> {
        let from = self
            .find(from)
            .ok_or_else(|| NavError::LocationNotFound(from.to_string()))?;
        let to = self
            .find(to)
            .ok_or_else(|| NavError::LocationNotFound(to.to_string()))?;
        let path = self.route(&from.id, &to.id);
        steps::consolidate(self, &path)
    }
}

/// Positions of every connector of the given kind, as (floor index, node
/// index within floor, id).
fn connector_positions(
    floors: &[Vec<WayNode>],
    matches: impl Fn(&ConnectorKind) -> bool,
) -> Vec<(usize, usize, String)> {
    let mut found = Vec::new();
    for (fi, floor) in floors.iter().enumerate() {
        for (ni, node) in floor.iter().enumerate() {
            if node.connector_kind().is_some_and(&matches) {
                found.push((fi, ni, node.id.clone()));
            }
        }
    }
    found
}

fn set_connector_floor(node: &mut WayNode, number: i32) {
    if let NodeKind::Connector { floor, .. } = &mut node.kind {
        *floor = number;
    }
}

/// Connects every pair of the given connectors that lie on different floors
/// and stamps their real-world floor numbers.
fn wire_group(floors: &mut [Vec<WayNode>], floor_range: &[i32], members: &[(usize, usize, String)]) {
    for &(fi, ni, _) in members {
        let node = &mut floors[fi][ni];
        set_connector_floor(node, floor_range[fi]);
        for (fj, _, other_id) in members {
            if *fj != fi {
                node.add_neighbor(other_id);
            }
        }
    }
}

fn wire_elevators(floors: &mut [Vec<WayNode>], floor_range: &[i32]) {
    let elevators = connector_positions(floors, |k| *k == ConnectorKind::Elevator);
    wire_group(floors, floor_range, &elevators);
    if !elevators.is_empty() {
        log::debug!("wired {} elevator waypoints", elevators.len());
    }
}

fn wire_stairs(floors: &mut [Vec<WayNode>], floor_range: &[i32]) {
    // Stair kinds are seeded from the first floor; a kind that never appears
    // there is not wired.
    let mut kinds: Vec<ConnectorKind> = Vec::new();
    if let Some(first) = floors.first() {
        for node in first {
            if let Some(kind @ ConnectorKind::Stair(_)) = node.connector_kind() {
                if !kinds.contains(kind) {
                    kinds.push(kind.clone());
                }
            }
        }
    }

    for kind in &kinds {
        let members = connector_positions(floors, |k| k == kind);
        wire_group(floors, floor_range, &members);
        log::debug!("wired {} waypoints of {kind:?}", members.len());
    }
}
