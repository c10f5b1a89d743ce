use nalgebra::Vector2;

use super::types::Point;

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// Acute angle in degrees between two directions.
///
/// Equals `atan(|(m1 − m2) / (1 + m1·m2)|)` for the slopes `m = dy/dx` of `u` and
/// `v`; the cross/dot form also covers vertical directions (90° against horizontal).
#[inline]
pub fn angle_between(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let cross = u.y * v.x - u.x * v.y;
    let dot = u.x * v.x + u.y * v.y;
    (cross / dot).abs().atan().to_degrees()
}

/// Open interval test `lo < x < hi`.
#[inline]
pub(crate) fn in_open(x: f64, (lo, hi): (f64, f64)) -> bool {
    lo < x && x < hi
}

/// Closed interval test `lo <= x <= hi`.
#[inline]
pub(crate) fn in_closed(x: f64, (lo, hi): (f64, f64)) -> bool {
    lo <= x && x <= hi
}
