use crate::input::tool::Tool;
use log::debug;

use super::{InputState, SelectionState};

impl InputState {
    /// Switches the active tool.
    ///
    /// Any gesture in progress is discarded without producing a region, even
    /// when the tool does not change.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.reset_gesture();
    }

    /// Discards any gesture in progress and returns to idle.
    pub fn clear(&mut self) {
        debug!("Selection cleared");
        self.reset_gesture();
    }

    fn reset_gesture(&mut self) {
        self.state = SelectionState::Idle;
    }
}
