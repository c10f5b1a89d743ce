//! Line fits: orthogonal segment fit and ordinary regression.

use nalgebra::Vector2;

use crate::geom::{GeometryError, LineSegment, Point};

/// Orthogonal line fit of a point sequence.
///
/// Points project onto the unit direction `direction` (parameter `t`) and onto
/// its normal `(b, −a)` (parameter `t_ortho`), both relative to `centroid`.
#[derive(Clone, Copy, Debug)]
pub struct LineFit {
    pub centroid: Point,
    pub direction: Vector2<f64>,
    /// `[t_min, t_max]`; seeded at 0, so always contains 0.
    pub t_range: (f64, f64),
    /// `[t_ortho_min, t_ortho_max]`; seeded at 0, so always contains 0.
    pub t_ortho_range: (f64, f64),
}

impl LineFit {
    /// Straightness in [0,1]: `1 − min(1, ortho spread / along spread)`.
    /// A NaN ratio (degenerate input) scores 0.
    #[inline]
    pub fn goodness(&self) -> f64 {
        let spread = self.t_range.1 - self.t_range.0;
        let ortho_spread = self.t_ortho_range.1 - self.t_ortho_range.0;
        1.0 - (ortho_spread / spread).min(1.0)
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.centroid + self.direction * t
    }

    /// Fitted endpoints, `t_max` first.
    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.point_at(self.t_range.1), self.point_at(self.t_range.0)]
    }

    pub fn segment(&self) -> Result<LineSegment, GeometryError> {
        let [a, b] = self.endpoints();
        LineSegment::new(a, b)
    }
}

/// Orthogonal least-squares line through `points`.
///
/// With centred moments `Sxx, Syy, Sxy`, the doubled direction angle solves
/// `tan θ = 2·Sxy / (Sxx − Syy)`. Of the two candidates `θ1 = atan(q)` and
/// `θ1 + π`, the one with `2·Sxy·sin θ − (Syy − Sxx)·cos θ > 0` minimises the
/// orthogonal residual; the direction is `(cos θ/2, sin θ/2)`.
pub fn fit_line(points: &[Point]) -> LineFit {
    let n = points.len() as f64;
    let centroid = points.iter().fold(Point::zeros(), |acc, p| acc + p) / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for p in points {
        let d = p - centroid;
        sxy += d.x * d.y;
        sxx += d.x * d.x;
        syy += d.y * d.y;
    }

    let q = (2.0 * sxy) / (sxx - syy);
    let theta1 = q.atan();
    let theta2 = (theta1.to_degrees() + 180.0).to_radians();
    let f = |theta: f64| 2.0 * sxy * theta.sin() - (syy - sxx) * theta.cos();
    let theta = if f(theta1) > 0.0 { theta1 } else { theta2 };
    let direction = Vector2::new((theta / 2.0).cos(), (theta / 2.0).sin());

    let (mut t_min, mut t_max) = (0.0_f64, 0.0_f64);
    let (mut to_min, mut to_max) = (0.0_f64, 0.0_f64);
    for p in points {
        let d = p - centroid;
        let t = direction.x * d.x + direction.y * d.y;
        let t_ortho = direction.y * d.x - direction.x * d.y;
        if t < t_min {
            t_min = t;
        }
        if t > t_max {
            t_max = t;
        }
        if t_ortho < to_min {
            to_min = t_ortho;
        }
        if t_ortho > to_max {
            to_max = t_ortho;
        }
    }

    LineFit {
        centroid,
        direction,
        t_range: (t_min, t_max),
        t_ortho_range: (to_min, to_max),
    }
}

/// Ordinary least-squares line `y = slope·x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionLine {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Vertical-residual regression from raw power sums. Undefined (±∞/NaN) when
/// all x coincide.
pub fn fit_regression_line(points: &[Point]) -> RegressionLine {
    let n = points.len() as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for p in points {
        sx += p.x;
        sy += p.y;
        sxx += p.x * p.x;
        sxy += p.x * p.y;
    }
    let d = sxx * n - sx * sx;
    RegressionLine {
        slope: (sxy * n - sx * sy) / d,
        intercept: (sy * sxx - sx * sxy) / d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn diagonal(n: usize) -> Vec<Point> {
        (0..n).map(|i| vector![i as f64, i as f64]).collect()
    }

    #[test]
    fn straight_diagonal_is_perfect() {
        let fit = fit_line(&diagonal(10));
        assert!((fit.goodness() - 1.0).abs() < 1e-12);
        let [first, second] = fit.endpoints();
        assert!((first - vector![9.0, 9.0]).norm() < 1e-9);
        assert!((second - vector![0.0, 0.0]).norm() < 1e-9);
    }

    #[test]
    fn horizontal_and_vertical_orientation() {
        let flat = [vector![-10.0, 0.0], vector![10.0, 0.0], vector![0.0, 3.0], vector![0.0, -3.0]];
        let fit = fit_line(&flat);
        assert!((fit.direction.x.abs() - 1.0).abs() < 1e-12);
        assert!((fit.goodness() - 0.7).abs() < 1e-12);

        let upright: Vec<Point> = flat.iter().map(|p| vector![p.y, p.x]).collect();
        let fit = fit_line(&upright);
        assert!((fit.direction.y.abs() - 1.0).abs() < 1e-12);
        assert!((fit.goodness() - 0.7).abs() < 1e-12);
        let seg = fit.segment().unwrap();
        assert!(seg.slope().abs() > 1e9);
    }

    #[test]
    fn ranges_always_contain_zero() {
        let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![8.0, 0.0]];
        let fit = fit_line(&pts);
        assert!(fit.t_range.0 <= 0.0 && fit.t_range.1 >= 0.0);
        assert!(fit.t_ortho_range.0 <= 0.0 && fit.t_ortho_range.1 >= 0.0);
        assert!((fit.goodness() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scattered_points_score_low() {
        let square = [vector![0.0, 6.0], vector![6.0, 0.0], vector![-6.0, 0.0], vector![0.0, -6.0]];
        assert_eq!(fit_line(&square).goodness(), 0.0);
        let blob = [vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 9.0], vector![0.0, 9.0]];
        assert!(fit_line(&blob).goodness() < 0.7);
    }

    #[test]
    fn regression_line_matches_reference_values() {
        let fit = fit_regression_line(&diagonal(100));
        assert!((fit.slope - 1.0).abs() < 0.01);
        assert!(fit.intercept.abs() < 0.01);

        let pts = [vector![10.0, 4.0], vector![10.0, 2.0], vector![40.0, 75.0], vector![32.0, 100.0]];
        let fit = fit_regression_line(&pts);
        assert!((fit.slope - 2.96).abs() < 0.01);
        assert!((fit.intercept + 22.87).abs() < 0.01);
        assert!((fit.eval(23.0) - 45.25).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn goodness_is_rotation_invariant(angle in 0.0f64..std::f64::consts::TAU, spread in 0.5f64..4.0) {
            let base: Vec<Point> = (0..24)
                .map(|i| {
                    let t = i as f64 * 2.0 - 23.0;
                    vector![t, spread * ((i % 3) as f64 - 1.0)]
                })
                .collect();
            let (s, c) = angle.sin_cos();
            let rotated: Vec<Point> = base
                .iter()
                .map(|p| vector![c * p.x - s * p.y, s * p.x + c * p.y])
                .collect();
            let g0 = fit_line(&base).goodness();
            let g1 = fit_line(&rotated).goodness();
            prop_assert!((g0 - g1).abs() < 1e-6, "g0={g0} g1={g1}");
            prop_assert!((0.0..=1.0).contains(&g1));
        }
    }
}
