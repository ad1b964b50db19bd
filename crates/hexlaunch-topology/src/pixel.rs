//! Pointy-top conversion between hex cells and pixel space.
//!
//! The grid origin maps to pixel `(0, 0)`; `size` is the distance from a hex
//! centre to any of its corners.

use crate::Hex;

/// √3, rounded the same way the launcher layout has always used it.
pub const SQRT3: f64 = 1.73205080757;
/// √3 / 2
pub const HALF_SQRT3: f64 = 0.86602540378;
/// √3 / 3
pub const SQRT3_BY_3: f64 = 0.57735026919;

const ONE_AND_A_HALF: f64 = 1.5;

/// Pixel centre of `hex`.
pub fn to_pixel(hex: Hex, size: f64) -> (f64, f64) {
    let q = hex.q as f64;
    let r = hex.r as f64;
    (
        size * (SQRT3 * q + HALF_SQRT3 * r),
        size * ONE_AND_A_HALF * r,
    )
}

/// Hex containing pixel `(x, y)`.
///
/// Fractional axial coordinates are truncated toward zero rather than
/// cube-rounded, so points near a cell edge (especially with negative
/// coordinates) can land in a neighbouring cell. Cell centres and points
/// well inside a cell map back correctly.
pub fn from_pixel(x: f64, y: f64, size: f64) -> Hex {
    let q = (SQRT3_BY_3 * x - y / 3.0) / size;
    let r = (2.0 / 3.0 * y) / size;
    Hex::new(q.trunc() as i64, r.trunc() as i64)
}

/// Bounding box `(width, height)` of a single cell.
pub fn hex_dimensions(size: f64) -> (f64, f64) {
    (SQRT3 * size, 2.0 * size)
}
