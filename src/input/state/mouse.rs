use crate::draw::{Point, Region};
use crate::input::{events::MouseButton, tool::Tool};
use crate::sample::MIN_POLYGON_POINTS;
use log::debug;
use std::mem;
use std::time::Duration;

use super::{InputState, SelectionState};

impl InputState {
    /// Processes a pointer button press.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `point` - Press position in buffer space
    /// * `timestamp` - Event time, used for polygon double-click detection
    ///
    /// # Behavior
    /// - Left press with the polygon tool: adds a vertex, or completes the
    ///   polygon when it follows the previous click within the double-click
    ///   window and at least three vertices exist
    /// - Left press with other tools: starts a drag, discarding any gesture
    ///   in progress
    /// - Right press: cancels the gesture in progress
    ///
    /// Returns the completed region, if this press finished one.
    pub fn on_pointer_press(
        &mut self,
        button: MouseButton,
        point: Point,
        timestamp: Duration,
    ) -> Option<Region> {
        match button {
            MouseButton::Left => {
                if self.tool == Tool::Polygon {
                    return self.on_polygon_click(point, timestamp);
                }

                let points = if self.tool == Tool::Freehand {
                    vec![point]
                } else {
                    Vec::new()
                };
                self.state = SelectionState::Dragging {
                    tool: self.tool,
                    anchor: point,
                    points,
                };
                None
            }
            MouseButton::Right => {
                if !self.is_idle() {
                    debug!("Right click cancelled {} selection", self.tool);
                    self.state = SelectionState::Idle;
                }
                None
            }
            MouseButton::Middle => None,
        }
    }

    /// Processes pointer motion.
    ///
    /// While dragging with the freehand tool, every reported point is
    /// appended to the stroke (no decimation). Rectangle and circle drags
    /// only need the release position, so motion leaves them untouched.
    pub fn on_pointer_motion(&mut self, point: Point) {
        if let SelectionState::Dragging {
            tool: Tool::Freehand,
            points,
            ..
        } = &mut self.state
        {
            points.push(point);
        }
    }

    /// Processes a pointer button release.
    ///
    /// Ends a drag and returns its region:
    /// - Rectangle: anchor and release position as opposite corners
    /// - Circle: anchor as center, release position on the circumference
    /// - Freehand: the accumulated stroke, only if it has at least three
    ///   points
    ///
    /// Polygon collection is click-driven, so releases are ignored there.
    pub fn on_pointer_release(&mut self, button: MouseButton, point: Point) -> Option<Region> {
        if button != MouseButton::Left {
            return None;
        }
        if !matches!(self.state, SelectionState::Dragging { .. }) {
            return None;
        }

        let SelectionState::Dragging {
            tool,
            anchor,
            points,
        } = mem::take(&mut self.state)
        else {
            return None;
        };

        match tool {
            Tool::Rectangle => Some(Region::rectangle(anchor, point)),
            Tool::Circle => Some(Region::circle(anchor, point)),
            Tool::Freehand => {
                if points.len() >= MIN_POLYGON_POINTS {
                    Some(Region::polygon(points))
                } else {
                    debug!(
                        "Freehand stroke with {} point(s) discarded",
                        points.len()
                    );
                    None
                }
            }
            // Polygon presses never enter the dragging state
            Tool::Polygon => None,
        }
    }

    fn on_polygon_click(&mut self, point: Point, timestamp: Duration) -> Option<Region> {
        let previous = self.last_click.replace(timestamp);
        let is_double_click = previous
            .and_then(|prev| timestamp.checked_sub(prev))
            .is_some_and(|gap| gap < self.double_click_window);

        if is_double_click && self.pending_points().len() >= MIN_POLYGON_POINTS {
            if let SelectionState::CollectingPolygon { points } = mem::take(&mut self.state) {
                debug!("Polygon completed with {} vertices", points.len());
                return Some(Region::polygon(points));
            }
        }

        match &mut self.state {
            SelectionState::CollectingPolygon { points } => points.push(point),
            _ => {
                self.state = SelectionState::CollectingPolygon {
                    points: vec![point],
                }
            }
        }
        None
    }
}
