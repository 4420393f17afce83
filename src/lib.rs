//! Library exports for colorlasso.
//!
//! Everything the binary does is available here: decode an image into a
//! [`sample::PixelBuffer`], drive a [`session::Session`] with pointer events
//! or explicit [`draw::Region`]s, and receive averaged [`session::ColorReport`]s
//! through a [`session::ResultSink`].

pub mod config;
pub mod draw;
pub mod input;
pub mod loader;
pub mod replay;
pub mod sample;
pub mod session;
pub mod util;

pub use config::Config;
