//! Algebraic circle fit.

use nalgebra::{Matrix3, Vector3};

use crate::geom::{Circle, GeometryError, Point};

/// Result of `fit_circle`.
#[derive(Clone, Copy, Debug)]
pub struct CircleFit {
    pub center: Point,
    pub radius: f64,
    /// `sqrt(Σ |dᵢ|) / n` with `dᵢ = (x−cx)² + (y−cy)² − r²`.
    pub residual: f64,
}

impl CircleFit {
    /// Roundness in [0,1]: `1 − min(1, residual / radius)`.
    #[inline]
    pub fn goodness(&self) -> f64 {
        1.0 - (self.residual / self.radius).min(1.0)
    }

    pub fn circle(&self) -> Result<Circle, GeometryError> {
        Circle::new(self.center, self.radius)
    }
}

/// Kåsa fit: minimise `Σ (x² + y² − a·x − b·y − c)²`.
///
/// The normal equations
/// ```text
/// | Σx²  Σxy  Σx | |a|   | Σx(x²+y²) |
/// | Σxy  Σy²  Σy | |b| = | Σy(x²+y²) |
/// | Σx   Σy   n  | |c|   | Σ(x²+y²)  |
/// ```
/// are solved by Cramer's rule; centre = (a/2, b/2), r² = c + cx² + cy².
/// Collinear input makes the determinant vanish and the result non-finite.
pub fn fit_circle(points: &[Point]) -> CircleFit {
    let n = points.len() as f64;
    let mut m = Matrix3::<f64>::zeros();
    let mut rhs = Vector3::<f64>::zeros();
    for p in points {
        let (x, y) = (p.x, p.y);
        let r2 = x * x + y * y;
        m += Matrix3::new(
            x * x, x * y, x, //
            x * y, y * y, y, //
            x, y, 0.0,
        );
        rhs += Vector3::new(x * r2, y * r2, r2);
    }
    m[(2, 2)] = n;

    let d = m.determinant();
    let solve = |col: usize| {
        let mut mc = m;
        mc.set_column(col, &rhs);
        mc.determinant() / d
    };
    let (a, b, c) = (solve(0), solve(1), solve(2));

    let center = Point::new(a / 2.0, b / 2.0);
    let radius_sq = c + center.x * center.x + center.y * center.y;
    let radius = radius_sq.sqrt();

    let spread: f64 = points
        .iter()
        .map(|p| ((p - center).norm_squared() - radius_sq).abs())
        .sum();
    let residual = spread.sqrt() / n;

    tracing::trace!(cx = center.x, cy = center.y, radius, residual, "circle fit");
    CircleFit { center, radius, residual }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn ring(cx: f64, cy: f64, r: f64, samples: usize) -> Vec<Point> {
        (0..samples)
            .map(|i| {
                let phi = std::f64::consts::TAU * i as f64 / samples as f64;
                vector![cx + r * phi.cos(), cy + r * phi.sin()]
            })
            .collect()
    }

    #[test]
    fn four_points_on_a_circle() {
        let pts = [vector![0.0, 6.0], vector![6.0, 0.0], vector![-6.0, 0.0], vector![0.0, -6.0]];
        let fit = fit_circle(&pts);
        assert!(fit.center.norm() < 1e-9);
        assert!((fit.radius - 6.0).abs() < 1e-9);
        assert!((fit.goodness() - 1.0).abs() < 1e-6);
        let c = fit.circle().unwrap();
        assert!((c.radius() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn offset_ring_is_recovered() {
        let fit = fit_circle(&ring(3.0, -2.0, 5.0, 32));
        assert!((fit.center - vector![3.0, -2.0]).norm() < 1e-6);
        assert!((fit.radius - 5.0).abs() < 1e-6);
        assert!(fit.goodness() > 0.99);
    }

    #[test]
    fn wobbly_ring_scores_lower() {
        let pts: Vec<Point> = ring(0.0, 0.0, 20.0, 40)
            .into_iter()
            .enumerate()
            .map(|(i, p)| if i % 2 == 0 { p * 1.3 } else { p * 0.7 })
            .collect();
        let fit = fit_circle(&pts);
        assert!(fit.goodness() < 0.95, "goodness={}", fit.goodness());
    }

    #[test]
    fn collinear_points_do_not_produce_a_circle() {
        let pts: Vec<Point> = (0..10).map(|i| vector![i as f64, 2.0 * i as f64]).collect();
        let fit = fit_circle(&pts);
        assert!(!(fit.goodness() > 0.95));
        assert!(fit.circle().is_err());
    }
}
