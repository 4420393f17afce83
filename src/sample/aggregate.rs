//! Reduction of sampled pixels to one mean color.

use crate::draw::Rgb;

/// Per-channel arithmetic mean of `pixels`, rounded half away from zero.
///
/// Returns `None` for an empty sample; callers treat that as "no result"
/// and leave any previously reported color untouched.
pub fn aggregate(pixels: &[Rgb]) -> Option<Rgb> {
    if pixels.is_empty() {
        return None;
    }

    let (r, g, b) = pixels.iter().fold((0u64, 0u64, 0u64), |(r, g, b), px| {
        (
            r + u64::from(px.r),
            g + u64::from(px.g),
            b + u64::from(px.b),
        )
    });

    let count = pixels.len() as f64;
    let mean = |sum: u64| (sum as f64 / count).round().clamp(0.0, 255.0) as u8;

    Some(Rgb::new(mean(r), mean(g), mean(b)))
}
