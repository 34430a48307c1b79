//! End-to-end navigation over a three-floor building loaded from floor
//! descriptions, plus facility-level query behavior.

use anyhow::Result;
use wayfinder::io::{parse_floor, read_floor};
use wayfinder::{Building, Direction, Facility, NavError};

// Building C spans floors 1, 3 and 4 (there is no floor 2). The east wing
// has a stairwell, the west wing an elevator; the top floor has no
// stairwell. One storage node on the ground floor is intentionally not
// connected to anything.
const FLOOR_1: &str = r#"{
    "elements": [
        {"id": "c1-elev", "x": -0.9, "y": 0.0, "neighbors": ["c1-hall-w"], "type": "elevator"},
        {"id": "c1-stair-a", "x": 0.9, "y": 0.0, "neighbors": ["c1-hall-e"], "type": "stair-A"},
        {"id": "c1-hall-w", "x": -0.5, "y": 0.0, "neighbors": ["c1-elev", "c1-hall-c", "c1-r01"]},
        {"id": "c1-hall-c", "x": 0.0, "y": 0.0, "neighbors": ["c1-hall-w", "c1-hall-e", "c1-r02"], "editor": {"locked": true}},
        {"id": "c1-hall-e", "x": 0.5, "y": 0.0, "neighbors": ["c1-hall-c", "c1-stair-a", "c1-r03"]},
        {"id": "c1-r01", "x": -0.5, "y": 0.55, "neighbors": ["c1-hall-w"], "room": "C101"},
        {"id": "c1-r02", "x": 0.0, "y": -0.55, "neighbors": ["c1-hall-c"], "room": "C102"},
        {"id": "c1-r03", "x": 0.5, "y": 0.55, "neighbors": ["c1-hall-e"], "room": "C103"},
        {"id": "c1-store", "x": 0.9, "y": -0.9, "neighbors": []}
    ]
}"#;

const FLOOR_3: &str = r#"{
    "elements": [
        {"id": "c3-elev", "x": -0.9, "y": 0.0, "neighbors": ["c3-hall-w"], "type": "elevator"},
        {"id": "c3-stair-a", "x": 0.9, "y": 0.0, "neighbors": ["c3-hall-e"], "type": "stair-A"},
        {"id": "c3-hall-w", "x": -0.5, "y": 0.0, "neighbors": ["c3-elev", "c3-hall-e", "c3-r01"]},
        {"id": "c3-hall-e", "x": 0.5, "y": 0.0, "neighbors": ["c3-hall-w", "c3-stair-a", "c3-r16"]},
        {"id": "c3-r01", "x": -0.5, "y": 0.55, "neighbors": ["c3-hall-w"], "room": "C301"},
        {"id": "c3-r16", "x": 0.5, "y": 0.55, "neighbors": ["c3-hall-e"], "room": "C316"}
    ]
}"#;

const FLOOR_4: &str = r#"{
    "elements": [
        {"id": "c4-elev", "x": -0.9, "y": 0.0, "neighbors": ["c4-hall"], "type": "elevator"},
        {"id": "c4-hall", "x": -0.3, "y": 0.0, "neighbors": ["c4-elev", "c4-r09", "c4-r100"]},
        {"id": "c4-r09", "x": -0.3, "y": 0.55, "neighbors": ["c4-hall"], "room": "C409"},
        {"id": "c4-r100", "x": 0.3, "y": 0.0, "neighbors": ["c4-hall"], "room": "C4100"}
    ]
}"#;

fn building_c() -> Result<Building> {
    let floors = vec![
        parse_floor(FLOOR_1)?,
        parse_floor(FLOOR_3)?,
        parse_floor(FLOOR_4)?,
    ];
    Ok(Building::assemble('C', floors, vec![1, 3, 4], (150.0, 150.0))?)
}

#[test]
fn every_destination_pair_routes_end_to_end() -> Result<()> {
    let building = building_c()?;
    let rooms: Vec<String> = building.rooms().iter().map(|r| r.label()).collect();
    assert_eq!(rooms.len(), 7);

    for from in &rooms {
        for to in &rooms {
            if from == to {
                continue;
            }
            let from_id = &building.find(from).unwrap().id;
            let to_node = building.find(to).unwrap();
            let path = building.route(from_id, &to_node.id);
            assert!(!path.is_empty(), "no route {from} -> {to}");
            assert_eq!(path.last().unwrap().id, to_node.id);

            let steps = building.directions(from, to)?;
            assert!(!steps.is_empty());
            assert_eq!(steps.last().unwrap().to, *to);
        }
    }
    Ok(())
}

#[test]
fn east_wing_crosses_floors_by_stairs_west_wing_by_elevator() -> Result<()> {
    let building = building_c()?;

    let east = building.directions("C103", "C316")?;
    assert!(east.iter().any(|s| s.direction == Direction::Stairs));
    assert!(east.iter().all(|s| s.direction != Direction::Elevator));

    let west = building.directions("C101", "C301")?;
    assert!(west.iter().any(|s| s.direction == Direction::Elevator));
    Ok(())
}

#[test]
fn floor_transition_legs_cost_no_distance() -> Result<()> {
    let building = building_c()?;
    let steps = building.directions("C101", "C409")?;
    let elevator_leg = steps
        .iter()
        .find(|s| s.direction == Direction::Elevator)
        .expect("route should use the elevator");
    assert_eq!(elevator_leg.distance, 0);
    Ok(())
}

#[test]
fn elevator_spans_nonadjacent_floors_in_one_leg() -> Result<()> {
    let building = building_c()?;
    // Floors 1 and 4 are two wiring hops apart in the data but the shaft is
    // fully connected, so a single elevator leg reaches floor 4.
    let steps = building.directions("C101", "C409")?;
    let elevators = steps
        .iter()
        .filter(|s| s.direction == Direction::Elevator)
        .count();
    assert_eq!(elevators, 1);
    Ok(())
}

#[test]
fn disconnected_waypoint_is_unreachable() -> Result<()> {
    let building = building_c()?;
    assert!(building.route("c1-hall-c", "c1-store").is_empty());
    let steps = building.directions("C102", "c1-store")?;
    assert!(steps.is_empty());
    Ok(())
}

#[test]
fn self_route_formats_to_no_steps() -> Result<()> {
    let building = building_c()?;
    let path = building.route("c1-r02", "c1-r02");
    assert_eq!(path.len(), 1);
    assert!(building.directions("C102", "C102")?.is_empty());
    Ok(())
}

#[test]
fn facility_serves_queries_by_both_identifier_forms() -> Result<()> {
    let facility = Facility::new(vec![building_c()?])?;
    assert!(facility.building('C').is_some());
    assert!(facility.building('Z').is_none());

    let by_room = facility.directions("C101", "C4100")?;
    assert_eq!(by_room.to.id, "c4-r100");
    assert!(!by_room.steps.is_empty());

    let by_id = facility.directions("c1-r01", "c4-r100")?;
    assert_eq!(by_id.from.label, "C101");
    assert_eq!(
        by_id.steps.last().unwrap().to,
        by_room.steps.last().unwrap().to
    );

    assert!(matches!(
        facility.directions("C101", "C999"),
        Err(NavError::LocationNotFound(_))
    ));
    Ok(())
}

#[test]
fn floors_load_from_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    for (name, json) in [("c1.json", FLOOR_1), ("c3.json", FLOOR_3), ("c4.json", FLOOR_4)] {
        std::fs::write(dir.path().join(name), json)?;
    }

    let floors = vec![
        read_floor(&dir.path().join("c1.json"))?,
        read_floor(&dir.path().join("c3.json"))?,
        read_floor(&dir.path().join("c4.json"))?,
    ];
    let building = Building::assemble('C', floors, vec![1, 3, 4], (150.0, 150.0))?;
    assert_eq!(building.floor_count(), 3);
    assert_eq!(building.floor(0).len(), 9);
    assert_eq!(building.floor_range(), &[1, 3, 4]);
    assert_eq!(building.scale(), (150.0, 150.0));
    assert_eq!(building.rooms().len(), 7);
    Ok(())
}
