//! Consolidation of raw waypoint paths into directional steps.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::graph::building::Building;
use crate::graph::direction::Direction;
use crate::graph::node::WayNode;

/// One consolidated leg of a route: a single direction held over one or
/// more graph edges, with the summed (ceiling-rounded) distance in feet.
///
/// `from` and `to` carry the waypoint labels (room identifier for rooms,
/// raw id otherwise) so the step can be rendered directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionStep {
    pub from: String,
    pub to: String,
    pub direction: Direction,
    pub distance: i32,
}

/// Collapses a waypoint path into direction steps.
///
/// Walks consecutive waypoint pairs, accumulating the ceiling of each
/// pairwise distance while the direction holds; every direction change
/// emits a step covering the finished run, from the run's start waypoint to
/// the waypoint where the run ended. The first observed direction only
/// seeds the running state, and the final run is emitted once the path is
/// exhausted. Paths of zero or one waypoint produce no steps.
pub fn consolidate(building: &Building, path: &[&WayNode]) -> Result<Vec<DirectionStep>, NavError> {
    let mut steps = Vec::new();
    if path.len() < 2 {
        return Ok(steps);
    }

    let mut run_dir = Direction::Unspecified;
    let mut run_start = 0;
    let mut run_dist = 0i32;

    for i in 0..path.len() - 1 {
        let dir = building.direction_between(path[i], path[i + 1])?;
        let leg = building.distance_between(path[i], path[i + 1]).ceil() as i32;
        if dir == run_dir {
            run_dist += leg;
        } else {
            if run_dir != Direction::Unspecified {
                steps.push(DirectionStep {
                    from: path[run_start].label(),
                    to: path[i].label(),
                    direction: run_dir,
                    distance: run_dist,
                });
                run_start = i;
            }
            run_dir = dir;
            run_dist = leg;
        }
    }

    steps.push(DirectionStep {
        from: path[run_start].label(),
        to: path[path.len() - 1].label(),
        direction: run_dir,
        distance: run_dist,
    });

    Ok(steps)
}
