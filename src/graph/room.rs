use crate::error::NavError;
use serde::{Deserialize, Serialize};

/// Coarse room classification. Not present in the floor data; callers that
/// know more than the room code can set it explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Classroom,
    Office,
    Shop,
    Cafeteria,
    Bathroom,
    #[default]
    Other,
}

/// Addressing metadata of a room waypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMeta {
    pub building: char,
    pub floor: i32,
    pub room: u32,
    #[serde(default)]
    pub category: RoomType,
}

impl RoomMeta {
    pub fn new(building: char, floor: i32, room: u32, category: RoomType) -> Self {
        Self {
            building,
            floor,
            room,
            category,
        }
    }

    /// Canonical lookup identifier: building char, floor number, room number
    /// zero-padded to at least two digits. Building 'B', floor 2, room 16
    /// yields "B216"; room 9 yields "B209"; room 100 yields "B2100".
    pub fn identifier(&self) -> String {
        format!("{}{}{:02}", self.building, self.floor, self.room)
    }

    /// Decomposes a room code such as "B216" into building char, floor digit
    /// and room number.
    pub fn parse(code: &str) -> Result<Self, NavError> {
        let malformed =
            || NavError::MalformedGraph(format!("room code `{code}` cannot be decomposed"));

        let mut chars = code.chars();
        let building = chars.next().filter(|c| c.is_ascii_alphabetic()).ok_or_else(malformed)?;
        let floor = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(malformed)? as i32;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(malformed());
        }
        let room: u32 = rest.parse().map_err(|_| malformed())?;

        Ok(Self::new(building, floor, room, RoomType::Other))
    }
}
