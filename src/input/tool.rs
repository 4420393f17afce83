//! Selection tool identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selection tool.
///
/// The active tool determines which region a gesture builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Axis-aligned box - drag from corner to corner
    Rectangle,
    /// Circle - drag from the center outward
    Circle,
    /// Click-built polygon - click each vertex, double-click to finish
    Polygon,
    /// Freehand lasso - follows the pointer while dragging (default)
    #[default]
    Freehand,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Rectangle, Tool::Circle, Tool::Polygon, Tool::Freehand];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Polygon => "polygon",
            Tool::Freehand => "freehand",
        }
    }

    /// One-line usage hint shown when the tool becomes active.
    pub fn instructions(&self) -> &'static str {
        match self {
            Tool::Rectangle => "Click and drag to draw a rectangle",
            Tool::Circle => "Click and drag to draw a circle",
            Tool::Polygon => "Click to add points, double-click to complete the polygon",
            Tool::Freehand => "Click and drag to draw freehand",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}
