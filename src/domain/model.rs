use serde::{Deserialize, Serialize};
use std::fmt;

/// The four directions the hall API understands, serialized as the
/// lowercase literals the wire format expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// `Right` and `Left` probe the hall width; `Up` and `Down` its height.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured extent of the hall, derived from four wall probes and never
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallDimensions {
    pub width: u32,
    pub height: u32,
}

impl HallDimensions {
    /// Integer-floor center of the hall.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }
}

/// Body of `PUT /{id}/move`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveCommand {
    pub direction: Direction,
    pub distance: u32,
}

/// Fields read from the robot creation response. The id is opaque and is
/// passed back verbatim on every later call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRobotResponse {
    pub id: String,
}

/// Fields read from a move response. `distance` may be less than what was
/// requested, and is zero when the robot is blocked by a wall.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveResponse {
    pub distance: u32,
}

/// The escape endpoint only promises a "boolean-ish" `success` field, so
/// absent, `null`, `false`, `0` and `""` all count as a denied escape.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}
