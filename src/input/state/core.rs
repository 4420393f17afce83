//! Selection state machine and input state management.

use crate::draw::Point;
use crate::input::tool::Tool;
use std::time::Duration;

/// Default window in which a second polygon click completes the polygon.
pub const DEFAULT_DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Current gesture state.
///
/// Rectangle, circle, and freehand gestures go `Idle -> Dragging -> Idle`;
/// click-built polygons go `Idle -> CollectingPolygon -> Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer button held down
    Dragging {
        /// Tool the drag was started with
        tool: Tool,
        /// Press position (rectangle corner / circle center)
        anchor: Point,
        /// Stroke points for freehand; empty for other tools
        points: Vec<Point>,
    },
    /// Polygon vertices placed so far
    CollectingPolygon { points: Vec<Point> },
}

/// Gesture state for one image session.
///
/// Holds the active tool, the gesture in progress, and the timestamp of the
/// last polygon click used for double-click detection. All timestamps come
/// from the events themselves, so the state machine never reads a clock.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Currently selected tool
    pub(crate) tool: Tool,
    /// Current gesture state machine
    pub(crate) state: SelectionState,
    /// Time of the previous polygon click
    pub(crate) last_click: Option<Duration>,
    /// Maximum gap between two clicks that completes a polygon
    pub(crate) double_click_window: Duration,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(Tool::default(), DEFAULT_DOUBLE_CLICK_WINDOW)
    }
}

impl InputState {
    /// Creates an idle input state.
    ///
    /// # Arguments
    /// * `tool` - Initially active tool
    /// * `double_click_window` - Click gap that completes a polygon
    pub fn with_defaults(tool: Tool, double_click_window: Duration) -> Self {
        Self {
            tool,
            state: SelectionState::Idle,
            last_click: None,
            double_click_window,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SelectionState::Idle)
    }

    pub fn double_click_window(&self) -> Duration {
        self.double_click_window
    }

    /// Points accumulated by the gesture in progress (freehand stroke or
    /// polygon vertices), for preview rendering.
    pub fn pending_points(&self) -> &[Point] {
        match &self.state {
            SelectionState::Dragging { points, .. }
            | SelectionState::CollectingPolygon { points } => points,
            SelectionState::Idle => &[],
        }
    }
}
