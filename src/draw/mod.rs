//! Color and region primitives.
//!
//! - [`Rgb`] / [`Hsl`]: averaged colors and their derived representations
//! - [`Region`]: the four selectable shapes (freehand strokes are polygons)
//! - [`Point`]: buffer-space coordinates

pub mod color;
pub mod region;

// Re-export commonly used types at module level
pub use color::{ColorParseError, Hsl, Rgb};
pub use region::{Point, Region};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
