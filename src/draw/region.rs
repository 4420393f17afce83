//! Selection region definitions.

use crate::util;
use serde::{Deserialize, Serialize};

/// A position in buffer space (pixels of the decoded image).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        util::distance(self.x, self.y, other.x, other.y)
    }
}

/// A user-outlined area of the image buffer.
///
/// Each variant keeps the raw input of its gesture; normalization (corner
/// ordering, radius, bounds) happens when the region is sampled. Regions
/// are transient: built by the gesture state machine, sampled once, then
/// dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Region {
    /// Axis-aligned rectangle given by two opposite corners, in any order
    Rectangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Circle given by its center and any point on the circumference
    Circle {
        center_x: f64,
        center_y: f64,
        edge_x: f64,
        edge_y: f64,
    },
    /// Closed polygon; also produced by freehand strokes
    Polygon { points: Vec<Point> },
}

impl Region {
    /// Builds a rectangle from the drag anchor and release point.
    pub fn rectangle(anchor: Point, end: Point) -> Self {
        Region::Rectangle {
            x1: anchor.x,
            y1: anchor.y,
            x2: end.x,
            y2: end.y,
        }
    }

    /// Builds a circle centered on the drag anchor passing through `edge`.
    pub fn circle(center: Point, edge: Point) -> Self {
        Region::Circle {
            center_x: center.x,
            center_y: center.y,
            edge_x: edge.x,
            edge_y: edge.y,
        }
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Region::Polygon { points }
    }

    /// Short label used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Region::Rectangle { .. } => "rectangle",
            Region::Circle { .. } => "circle",
            Region::Polygon { .. } => "polygon",
        }
    }
}
