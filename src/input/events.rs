//! Presentation-layer event types.

use super::tool::Tool;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary selection button)
    #[default]
    Left,
    /// Right mouse button (cancels the gesture in progress)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// On-screen box the image is currently displayed in, in client coordinates.
///
/// Its size may differ from the pixel buffer's when the presentation layer
/// scales or zooms the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Display box matching a buffer shown unscaled at the origin.
    pub fn identity(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, f64::from(width), f64::from(height))
    }
}

/// One event delivered by the presentation layer.
///
/// Pointer positions are in client (display) coordinates; the session maps
/// them into buffer space per event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Press {
        button: MouseButton,
        client_x: f64,
        client_y: f64,
        display: DisplayRect,
        /// Time of the press, relative to any fixed origin
        timestamp: Duration,
    },
    Motion {
        client_x: f64,
        client_y: f64,
        display: DisplayRect,
    },
    Release {
        button: MouseButton,
        client_x: f64,
        client_y: f64,
        display: DisplayRect,
    },
    /// Switch the active tool, discarding any gesture in progress
    SetTool(Tool),
    /// Discard the gesture in progress and the displayed result
    Clear,
}
