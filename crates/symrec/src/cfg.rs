//! Tolerances and acceptance thresholds.
//!
//! Policy
//! - Geometric tolerances are fixed constants. They are value-dependent (a share
//!   of a segment length, an absolute pixel band) and never adapt to input.
//! - The two acceptance thresholds are grouped in `RecognizerCfg` so tests and
//!   the CLI can pin them explicitly; the defaults are the production values.

/// Endpoint match radius for `shares_one_point`, as a fraction of the segment's own length.
pub(crate) const SHARE_POINT_FRAC: f64 = 0.15;
/// Tighter radius used to locate the merged corner in `shared_point`.
pub(crate) const SHARED_POINT_MERGE_FRAC: f64 = 0.05;

/// Open interval (degrees) for the sum of a triangle's three pairwise angles.
pub(crate) const TRIANGLE_ANGLE_SUM: (f64, f64) = (165.0, 195.0);
/// Open interval (degrees) every pairwise angle must fall in for an equilateral triangle.
pub(crate) const EQUILATERAL_ANGLE: (f64, f64) = (55.0, 65.0);
/// Open interval (degrees) for adjacent rectangle sides.
pub(crate) const RIGHT_ANGLE: (f64, f64) = (80.0, 100.0);

/// Closed interval for the ratio of the two chained slope numerators of snowman centres.
pub(crate) const COLLINEAR_RATIO: (f64, f64) = (0.7, 1.3);
/// Absolute fallback when the ratio's denominator vanishes.
pub(crate) const COLLINEAR_ABS: f64 = 20.0;
/// Allowed |centre distance − (r1 + r2)| for stacked snowman circles.
pub(crate) const TANGENT_ABS: f64 = 20.0;

/// Hallow: side offsets must lie within this fraction of the circle radius from the rim.
pub(crate) const HALLOW_TANGENT_FRAC: f64 = 0.10;
/// Hallow: bisection band, as a fraction of the line's length.
pub(crate) const HALLOW_BISECT_FRAC: f64 = 0.40;

/// Acceptance thresholds for the basic symbol classifier (strict `>`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerCfg {
    pub line_goodness_min: f64,
    pub circle_goodness_min: f64,
}

impl Default for RecognizerCfg {
    fn default() -> Self {
        Self {
            line_goodness_min: 0.70,
            circle_goodness_min: 0.95,
        }
    }
}
