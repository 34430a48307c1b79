use anyhow::Result;
use wayfinder::io::parse_floor;
use wayfinder::{Building, Facility};

const GROUND_FLOOR: &str = r#"{
    "elements": [
        {"id": "b1-elevator", "x": -0.8, "y": 0.0, "neighbors": ["b1-hall-w"], "type": "elevator"},
        {"id": "b1-hall-w", "x": -0.4, "y": 0.0, "neighbors": ["b1-elevator", "b1-hall-e", "b1-office"]},
        {"id": "b1-hall-e", "x": 0.4, "y": 0.0, "neighbors": ["b1-hall-w", "b1-cafeteria"]},
        {"id": "b1-office", "x": -0.4, "y": 0.6, "neighbors": ["b1-hall-w"], "room": "B101"},
        {"id": "b1-cafeteria", "x": 0.4, "y": -0.6, "neighbors": ["b1-hall-e"], "room": "B102"}
    ]
}"#;

const SECOND_FLOOR: &str = r#"{
    "elements": [
        {"id": "b2-elevator", "x": -0.8, "y": 0.0, "neighbors": ["b2-hall"], "type": "elevator"},
        {"id": "b2-hall", "x": -0.2, "y": 0.0, "neighbors": ["b2-elevator", "b2-lab"]},
        {"id": "b2-lab", "x": -0.2, "y": 0.7, "neighbors": ["b2-hall"], "room": "B216"}
    ]
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let floors = vec![parse_floor(GROUND_FLOOR)?, parse_floor(SECOND_FLOOR)?];
    let building = Building::assemble('B', floors, vec![1, 2], (220.0, 160.0))?;
    let facility = Facility::new(vec![building])?;

    let response = facility.directions("B102", "B216")?;
    println!("Start at {}.", response.from.label);
    for step in &response.steps {
        println!(
            "Go {} for {} feet towards {}.",
            step.direction, step.distance, step.to
        );
    }
    println!("Arrive at {}!", response.to.label);
    Ok(())
}
