//! Display-to-buffer coordinate mapping.

use super::events::DisplayRect;
use crate::draw::Point;

/// Maps a client-space pointer position into buffer pixel coordinates.
///
/// The scale is the ratio between the buffer's intrinsic size and its
/// displayed size, so presentation zoom is absorbed automatically. It must be
/// recomputed for every event since the displayed size can change at any
/// time. Positions outside the buffer are returned as-is; samplers clamp.
///
/// A display axis with zero (or non-finite) extent has no meaningful scale;
/// that axis falls back to a scale of 1.
pub fn map_to_buffer(
    client_x: f64,
    client_y: f64,
    display: &DisplayRect,
    buffer_width: u32,
    buffer_height: u32,
) -> Point {
    let scale_x = axis_scale(buffer_width, display.width);
    let scale_y = axis_scale(buffer_height, display.height);

    Point::new(
        (client_x - display.left) * scale_x,
        (client_y - display.top) * scale_y,
    )
}

fn axis_scale(buffer_extent: u32, displayed_extent: f64) -> f64 {
    if displayed_extent.is_finite() && displayed_extent > 0.0 {
        f64::from(buffer_extent) / displayed_extent
    } else {
        1.0
    }
}
