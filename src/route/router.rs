//! Bounded breadth-first route search over a building's waypoint graph.

use std::collections::{HashMap, VecDeque};

use crate::graph::building::Building;
use crate::graph::node::WayNode;
use crate::route::MAX_STEPS;

/// Finds a path from `from` to `to`, both inclusive.
///
/// Breadth-first, so the returned path has a minimal number of waypoints.
/// The search never expands beyond [`MAX_STEPS`] hops; an unreachable
/// target (including one that lives in another building) yields an empty
/// path rather than an error. `route(x, x)` yields the single-waypoint
/// path.
pub fn route<'a>(building: &'a Building, from: &str, to: &str) -> Vec<&'a WayNode> {
    let Some(start) = building.node(from) else {
        return Vec::new();
    };
    if from == to {
        return vec![start];
    }

    // Predecessor map doubles as the visited set.
    let mut came_from: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    came_from.insert(&start.id, &start.id);
    queue.push_back((&start.id, 0));

    while let Some((id, depth)) = queue.pop_front() {
        if depth >= MAX_STEPS {
            continue;
        }
        let Some(node) = building.node(id) else {
            continue;
        };
        for neighbor in &node.neighbors {
            if came_from.contains_key(neighbor.as_str()) {
                continue;
            }
            came_from.insert(neighbor, id);
            if neighbor.as_str() == to {
                return backtrack(building, &came_from, from, to);
            }
            queue.push_back((neighbor, depth + 1));
        }
    }

    log::debug!("no route from `{from}` to `{to}` within {MAX_STEPS} steps");
    Vec::new()
}

fn backtrack<'a>(
    building: &'a Building,
    came_from: &HashMap<&str, &str>,
    from: &str,
    to: &str,
) -> Vec<&'a WayNode> {
    let mut path = Vec::new();
    let mut cursor = to;
    loop {
        match building.node(cursor) {
            Some(node) => path.push(node),
            None => return Vec::new(),
        }
        if cursor == from {
            break;
        }
        cursor = came_from[cursor];
    }
    path.reverse();
    path
}
