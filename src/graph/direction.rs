use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified direction of one leg of a route.
///
/// `Unspecified` is the neutral value used to seed step consolidation; it is
/// never emitted in a finished step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    West,
    South,
    Elevator,
    Stairs,
    #[default]
    Unspecified,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "north",
            Self::East => "east",
            Self::West => "west",
            Self::South => "south",
            Self::Elevator => "elevator",
            Self::Stairs => "stairs",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{s}")
    }
}
