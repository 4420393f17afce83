mod actions;
mod core;
mod mouse;

pub use self::core::{DEFAULT_DOUBLE_CLICK_WINDOW, InputState, SelectionState};
