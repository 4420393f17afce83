//! Per-shape pixel membership.
//!
//! Every shape is first reduced to a clamped pixel box; candidates inside the
//! box are then tested individually where membership is non-trivial. The box
//! only limits work, it never drops a pixel that passes the shape test.

use crate::draw::{Point, Region, Rgb};
use crate::sample::PixelBuffer;
use crate::util;
use log::debug;
use std::ops::Range;

/// Polygons (and freehand strokes) need at least this many vertices.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Half-open pixel box clamped to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBounds {
    pub columns: Range<u32>,
    pub rows: Range<u32>,
}

impl PixelBounds {
    fn empty() -> Self {
        Self {
            columns: 0..0,
            rows: 0..0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Number of candidate pixels in the box.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.columns.end - self.columns.start)
                * u64::from(self.rows.end - self.rows.start)
        }
    }
}

/// Colors of all buffer pixels inside `region`, in row-major order.
///
/// An empty result means there is nothing to aggregate: degenerate shapes
/// (sub-pixel rectangles, radius below one, fewer than three polygon points)
/// and regions lying fully outside the buffer all end up here.
pub fn sample(region: &Region, buffer: &PixelBuffer) -> Vec<Rgb> {
    let mut colors = Vec::new();
    for_each_pixel(region, buffer.width(), buffer.height(), |x, y| {
        if let Some(color) = buffer.pixel(x, y) {
            colors.push(color);
        }
    });
    colors
}

/// Buffer positions covered by `region` for a `width`x`height` buffer.
pub fn covered_pixels(region: &Region, width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut positions = Vec::new();
    for_each_pixel(region, width, height, |x, y| positions.push((x, y)));
    positions
}

fn for_each_pixel(region: &Region, width: u32, height: u32, mut visit: impl FnMut(u32, u32)) {
    match region {
        Region::Rectangle { x1, y1, x2, y2 } => {
            let bounds = rectangle_bounds(*x1, *y1, *x2, *y2, width, height);
            for y in bounds.rows.clone() {
                for x in bounds.columns.clone() {
                    visit(x, y);
                }
            }
        }
        Region::Circle {
            center_x,
            center_y,
            edge_x,
            edge_y,
        } => {
            let center = Point::new(*center_x, *center_y);
            let radius = center.distance_to(Point::new(*edge_x, *edge_y));
            let bounds = circle_bounds(center, radius, width, height);
            for y in bounds.rows.clone() {
                for x in bounds.columns.clone() {
                    if circle_contains(f64::from(x), f64::from(y), center, radius) {
                        visit(x, y);
                    }
                }
            }
        }
        Region::Polygon { points } => {
            let bounds = polygon_bounds(points, width, height);
            for y in bounds.rows.clone() {
                for x in bounds.columns.clone() {
                    if polygon_contains(f64::from(x), f64::from(y), points) {
                        visit(x, y);
                    }
                }
            }
        }
    }
}

/// Normalized rectangle box: `floor(min)` corner plus `floor(|extent|)` size.
///
/// Returns an empty box when either side is shorter than one pixel.
pub fn rectangle_bounds(x1: f64, y1: f64, x2: f64, y2: f64, width: u32, height: u32) -> PixelBounds {
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        debug!("Ignoring rectangle with non-finite corners");
        return PixelBounds::empty();
    }

    let left = x1.min(x2).floor();
    let top = y1.min(y2).floor();
    let w = (x2 - x1).abs().floor();
    let h = (y2 - y1).abs().floor();

    if w < 1.0 || h < 1.0 {
        debug!("Ignoring degenerate rectangle ({w}x{h})");
        return PixelBounds::empty();
    }

    PixelBounds {
        columns: clamp_range(left, left + w, width),
        rows: clamp_range(top, top + h, height),
    }
}

/// Box around a circle, covering `floor(c - r)` through `ceil(c + r)` inclusive.
///
/// Returns an empty box when the radius is below one pixel.
pub fn circle_bounds(center: Point, radius: f64, width: u32, height: u32) -> PixelBounds {
    if !radius.is_finite() || radius < 1.0 {
        debug!("Ignoring degenerate circle (radius {radius:.3})");
        return PixelBounds::empty();
    }
    if !center.x.is_finite() || !center.y.is_finite() {
        debug!("Ignoring circle with non-finite center");
        return PixelBounds::empty();
    }

    PixelBounds {
        columns: inclusive_span(center.x - radius, center.x + radius, width),
        rows: inclusive_span(center.y - radius, center.y + radius, height),
    }
}

/// Box around all polygon vertices, covering `floor(min)` through `ceil(max)`.
///
/// Returns an empty box for fewer than [`MIN_POLYGON_POINTS`] vertices.
pub fn polygon_bounds(points: &[Point], width: u32, height: u32) -> PixelBounds {
    if points.len() < MIN_POLYGON_POINTS {
        debug!(
            "Ignoring polygon with {} point(s); need at least {}",
            points.len(),
            MIN_POLYGON_POINTS
        );
        return PixelBounds::empty();
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        debug!("Ignoring polygon with non-finite vertices");
        return PixelBounds::empty();
    }

    let mut min_x = points[0].x;
    let mut max_x = points[0].x;
    let mut min_y = points[0].y;
    let mut max_y = points[0].y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    PixelBounds {
        columns: inclusive_span(min_x, max_x, width),
        rows: inclusive_span(min_y, max_y, height),
    }
}

/// Whether the integer position `(x, y)` lies within `radius` of `center`.
///
/// The boundary is inclusive.
pub fn circle_contains(x: f64, y: f64, center: Point, radius: f64) -> bool {
    util::distance(x, y, center.x, center.y) <= radius
}

/// Even-odd ray casting toward +x.
///
/// An edge counts as a crossing when exactly one endpoint lies strictly
/// below `y` (greater y) and the edge's x at `y` is to the right of `x`. The
/// strict comparison keeps horizontal edges and shared vertices from being
/// counted twice. The polygon is implicitly closed.
///
/// The crossing is interpolated from the edge's upper endpoint so that both
/// winding directions produce bit-identical results.
pub fn polygon_contains(x: f64, y: f64, points: &[Point]) -> bool {
    let Some(last) = points.len().checked_sub(1) else {
        return false;
    };

    let mut inside = false;
    let mut j = last;
    for (i, pi) in points.iter().enumerate() {
        let pj = &points[j];
        if (pi.y > y) != (pj.y > y) {
            let (a, b) = if pi.y < pj.y { (pi, pj) } else { (pj, pi) };
            let crossing_x = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
            if x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// `[floor(start), end)` clamped to `[0, limit)`.
fn clamp_range(start: f64, end: f64, limit: u32) -> Range<u32> {
    let limit = i64::from(limit);
    let lo = util::floor_clamp(start, 0, limit);
    let hi = util::floor_clamp(end, 0, limit);
    lo as u32..hi.max(lo) as u32
}

/// `[floor(min), ceil(max)]` as a half-open range clamped to `[0, limit)`.
fn inclusive_span(min: f64, max: f64, limit: u32) -> Range<u32> {
    let limit = i64::from(limit);
    let lo = util::floor_clamp(min, 0, limit);
    let hi = util::ceil_clamp(max, -1, limit - 1) + 1;
    lo as u32..hi.max(lo) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    #[test]
    fn rectangle_normalizes_corners() {
        let a = rectangle_bounds(1.0, 1.0, 4.0, 3.0, 10, 10);
        let b = rectangle_bounds(4.0, 3.0, 1.0, 1.0, 10, 10);
        assert_eq!(a, b);
        assert_eq!(a.columns, 1..4);
        assert_eq!(a.rows, 1..3);
        assert_eq!(a.area(), 6);
    }

    #[test]
    fn rectangle_floors_fractional_corners_and_extent() {
        // left = floor(1.5) = 1, width = floor(2.9) = 2
        let bounds = rectangle_bounds(1.5, 0.2, 4.4, 3.9, 10, 10);
        assert_eq!(bounds.columns, 1..3);
        assert_eq!(bounds.rows, 0..3);
    }

    #[test]
    fn rectangle_thinner_than_a_pixel_is_empty() {
        assert!(rectangle_bounds(2.0, 2.0, 2.9, 8.0, 10, 10).is_empty());
        assert!(rectangle_bounds(2.0, 2.0, 8.0, 2.0, 10, 10).is_empty());
    }

    #[test]
    fn rectangle_is_clamped_to_buffer() {
        let bounds = rectangle_bounds(-5.0, -5.0, 3.0, 20.0, 8, 6);
        assert_eq!(bounds.columns, 0..3);
        assert_eq!(bounds.rows, 0..6);

        let outside = rectangle_bounds(20.0, 20.0, 30.0, 30.0, 8, 6);
        assert!(outside.is_empty());
    }

    #[test]
    fn rectangle_count_matches_area_inside_buffer() {
        for (w, h) in [(1, 1), (3, 2), (7, 5)] {
            let region = Region::rectangle(Point::new(1.0, 2.0), Point::new(1.0 + w as f64, 2.0 + h as f64));
            assert_eq!(covered_pixels(&region, 20, 20).len(), w * h);
        }
    }

    #[test]
    fn circle_below_unit_radius_is_empty() {
        let region = Region::circle(Point::new(5.0, 5.0), Point::new(5.5, 5.5));
        assert!(covered_pixels(&region, 10, 10).is_empty());
    }

    #[test]
    fn unit_circle_covers_plus_shape() {
        let region = Region::circle(Point::new(5.0, 5.0), Point::new(5.0, 4.0));
        let mut pixels = covered_pixels(&region, 10, 10);
        pixels.sort();
        assert_eq!(pixels, vec![(4, 5), (5, 4), (5, 5), (5, 6), (6, 5)]);
    }

    #[test]
    fn circle_membership_is_exact_within_bounds() {
        let center = Point::new(7.3, 6.6);
        let radius = 4.2;
        let region = Region::circle(center, Point::new(center.x + radius, center.y));
        let covered = covered_pixels(&region, 20, 20);
        let bounds = circle_bounds(center, radius, 20, 20);

        for y in bounds.rows.clone() {
            for x in bounds.columns.clone() {
                let inside = util::distance(x as f64, y as f64, center.x, center.y) <= radius;
                assert_eq!(covered.contains(&(x, y)), inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn circle_is_clamped_at_buffer_edges() {
        let region = Region::circle(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        let covered = covered_pixels(&region, 10, 10);
        assert!(covered.iter().all(|&(x, y)| x <= 2 && y <= 2));
        assert!(covered.contains(&(0, 0)));
        assert!(covered.contains(&(2, 0)));
        assert!(!covered.contains(&(2, 2)));
    }

    #[test]
    fn polygon_needs_three_points() {
        let region = Region::polygon(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert!(covered_pixels(&region, 10, 10).is_empty());
        assert!(!polygon_contains(1.0, 1.0, &[]));
    }

    #[test]
    fn square_polygon_excludes_right_and_bottom_edges() {
        let region = Region::polygon(square(4.0));
        let covered = covered_pixels(&region, 10, 10);
        assert_eq!(covered.len(), 16);
        assert!(covered.iter().all(|&(x, y)| x < 4 && y < 4));
    }

    #[test]
    fn horizontal_edges_do_not_toggle() {
        // Point level with the bottom edge of a triangle
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        assert!(polygon_contains(5.0, 0.0, &triangle));
        assert!(!polygon_contains(11.0, 0.0, &triangle));
        assert!(polygon_contains(5.0, 5.0, &triangle));
        assert!(!polygon_contains(9.0, 9.0, &triangle));
    }

    #[test]
    fn membership_ignores_start_vertex_and_winding() {
        let shape = vec![
            Point::new(1.0, 1.0),
            Point::new(9.5, 2.0),
            Point::new(6.0, 5.0),
            Point::new(10.0, 9.0),
            Point::new(2.0, 8.5),
        ];
        let reference = covered_pixels(&Region::polygon(shape.clone()), 12, 12);
        assert!(!reference.is_empty());

        for shift in 1..shape.len() {
            let mut rotated = shape.clone();
            rotated.rotate_left(shift);
            assert_eq!(covered_pixels(&Region::polygon(rotated), 12, 12), reference);
        }

        let mut reversed = shape.clone();
        reversed.reverse();
        assert_eq!(covered_pixels(&Region::polygon(reversed), 12, 12), reference);
    }

    #[test]
    fn self_intersecting_polygon_uses_even_odd() {
        // Bow-tie: two triangles meeting at (5, 5)
        let bowtie = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(polygon_contains(1.0, 5.0, &bowtie));
        assert!(polygon_contains(9.0, 5.0, &bowtie));
        assert!(!polygon_contains(5.0, 2.0, &bowtie));
    }

    #[test]
    fn sample_returns_pixel_colors() {
        let buffer = PixelBuffer::from_fn(4, 1, |x, _| if x < 2 { RED } else { BLUE });
        let region = Region::rectangle(Point::new(1.0, 0.0), Point::new(3.0, 1.0));
        assert_eq!(sample(&region, &buffer), vec![RED, BLUE]);
    }

    #[test]
    fn non_finite_input_yields_nothing() {
        let buffer = PixelBuffer::filled(4, 4, RED);
        let rect = Region::rectangle(Point::new(f64::NAN, 0.0), Point::new(3.0, 3.0));
        assert!(sample(&rect, &buffer).is_empty());
        let circle = Region::circle(Point::new(1.0, 1.0), Point::new(f64::INFINITY, 1.0));
        assert!(sample(&circle, &buffer).is_empty());
    }
}
