//! Input handling and selection state machine.
//!
//! This module translates presentation-layer pointer events into selection
//! regions. It maps client coordinates into buffer space, tracks the active
//! tool, and runs the gesture state machine (idle, dragging, collecting
//! polygon vertices) that produces a [`Region`](crate::draw::Region) once a
//! gesture completes.

pub mod coords;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use coords::map_to_buffer;
pub use events::{DisplayRect, InputEvent, MouseButton};
pub use state::{InputState, SelectionState};
pub use tool::Tool;
