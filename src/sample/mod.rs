//! Pixel sampling and aggregation.
//!
//! Turns a [`Region`](crate::draw::Region) plus a [`PixelBuffer`] into the
//! set of covered pixels ([`sample`]) and reduces that set to one mean color
//! ([`aggregate`]).

pub mod aggregate;
pub mod buffer;
pub mod sampler;

pub use aggregate::aggregate;
pub use buffer::{BufferError, PixelBuffer};
pub use sampler::{MIN_POLYGON_POINTS, PixelBounds, covered_pixels, sample};
