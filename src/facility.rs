//! Facility index: the read-only registry of buildings that resolves query
//! identifiers and answers direction queries.
//!
//! The index is built once at startup, after every building has been loaded
//! and assembled, and is passed by reference to whoever serves queries. All
//! methods take `&self` and the index holds no interior mutability, so any
//! number of route queries may run concurrently.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::graph::building::Building;
use crate::graph::node::WayNode;
use crate::graph::room::RoomMeta;
use crate::route::steps::DirectionStep;

/// A resolved query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Raw waypoint id.
    pub id: String,
    /// Room identifier for rooms, raw id otherwise.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomMeta>,
}

impl Destination {
    fn from_node(node: &WayNode) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label(),
            room: node.room().cloned(),
        }
    }
}

/// Answer to a direction query: both resolved endpoints plus the
/// consolidated steps between them. An empty step list between distinct
/// endpoints means no route exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub from: Destination,
    pub to: Destination,
    pub steps: Vec<DirectionStep>,
}

/// Frozen registry of all buildings in the facility.
#[derive(Debug, Clone)]
pub struct Facility {
    buildings: Vec<Building>,
}

impl Facility {
    /// Registers the given buildings. Identifiers must be unique.
    pub fn new(buildings: Vec<Building>) -> Result<Self, NavError> {
        for (i, building) in buildings.iter().enumerate() {
            if buildings[..i]
                .iter()
                .any(|b| b.identifier() == building.identifier())
            {
                return Err(NavError::MalformedGraph(format!(
                    "duplicate building identifier `{}`",
                    building.identifier()
                )));
            }
        }
        log::info!("facility index holds {} buildings", buildings.len());
        Ok(Self { buildings })
    }

    pub fn building(&self, identifier: char) -> Option<&Building> {
        self.buildings.iter().find(|b| b.identifier() == identifier)
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Resolves a location identifier (raw waypoint id or derived room
    /// identifier) to its building and waypoint.
    pub fn resolve(&self, query: &str) -> Option<(&Building, &WayNode)> {
        self.buildings
            .iter()
            .find_map(|b| b.find(query).map(|n| (b, n)))
    }

    /// Answers a direction query between two location identifiers.
    ///
    /// Both identifiers must resolve; otherwise this is
    /// [`NavError::LocationNotFound`]. The route is searched within the
    /// starting building — buildings are not connected to each other, so a
    /// cross-building query resolves but yields no steps.
    pub fn directions(&self, from: &str, to: &str) -> Result<DirectionsResponse, NavError> {
        let (building, from_node) = self
            .resolve(from)
            .ok_or_else(|| NavError::LocationNotFound(from.to_string()))?;
        let (_, to_node) = self
            .resolve(to)
            .ok_or_else(|| NavError::LocationNotFound(to.to_string()))?;

        let path = building.route(&from_node.id, &to_node.id);
        let steps = crate::route::steps::consolidate(building, &path)?;
        log::debug!(
            "directions {} -> {}: {} steps",
            from_node.label(),
            to_node.label(),
            steps.len()
        );

        Ok(DirectionsResponse {
            from: Destination::from_node(from_node),
            to: Destination::from_node(to_node),
            steps,
        })
    }
}
