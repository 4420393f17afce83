//! Utility functions for geometry and coordinate parsing.
//!
//! This module provides:
//! - Distance and floor/ceil-with-clamp helpers shared by the samplers
//! - Parsers for the comma/space separated coordinate lists used on the CLI

use crate::draw::Point;

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Floors `val` and clamps it into `[min, max]`.
///
/// Saturates instead of wrapping for values outside the `i64` range, and maps
/// NaN to `min`.
pub fn floor_clamp(val: f64, min: i64, max: i64) -> i64 {
    if val.is_nan() {
        return min;
    }
    (val.floor() as i64).clamp(min, max)
}

/// Ceils `val` and clamps it into `[min, max]`. NaN maps to `min`.
pub fn ceil_clamp(val: f64, min: i64, max: i64) -> i64 {
    if val.is_nan() {
        return min;
    }
    (val.ceil() as i64).clamp(min, max)
}

// ============================================================================
// Coordinate Parsing
// ============================================================================

/// Parses exactly four comma-separated numbers, e.g. `"10,20,110,80"`.
///
/// Used as a clap value parser for `--rect` and `--circle`.
pub fn parse_quad(input: &str) -> Result<[f64; 4], String> {
    let values = parse_numbers(input, ',')?;
    <[f64; 4]>::try_from(values.as_slice())
        .map_err(|_| format!("expected 4 comma-separated numbers, got {}", values.len()))
}

/// Parses a whitespace-separated list of `x,y` pairs, e.g. `"0,0 10,0 5,8"`.
pub fn parse_point_list(input: &str) -> Result<Vec<Point>, String> {
    input
        .split_whitespace()
        .map(|pair| {
            let values = parse_numbers(pair, ',')?;
            match values.as_slice() {
                [x, y] => Ok(Point::new(*x, *y)),
                _ => Err(format!("expected an x,y pair, got '{pair}'")),
            }
        })
        .collect()
}

fn parse_numbers(input: &str, separator: char) -> Result<Vec<f64>, String> {
    input
        .split(separator)
        .map(|part| {
            let part = part.trim();
            let value: f64 = part
                .parse()
                .map_err(|_| format!("'{part}' is not a number"))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(format!("'{part}' is not a finite number"))
            }
        })
        .collect()
}
