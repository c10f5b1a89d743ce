//! Geometric validity checks for composite symbols.
//!
//! Each check returns the first violated condition as a `ShapeError`. Bands are
//! fixed constants from `cfg`; all angles are in degrees.

use crate::cfg::{
    COLLINEAR_ABS, COLLINEAR_RATIO, EQUILATERAL_ANGLE, HALLOW_BISECT_FRAC, HALLOW_TANGENT_FRAC,
    RIGHT_ANGLE, TANGENT_ABS, TRIANGLE_ANGLE_SUM,
};
use crate::geom::{distance, in_closed, in_open, Circle, LineSegment, Point};

use super::types::{ShapeError, Triangle};

/// Valid triangle check. Returns whether the triangle is equilateral.
pub(crate) fn triangle_check(sides: &[LineSegment; 3]) -> Result<bool, ShapeError> {
    let [a, b, c] = sides;
    if !(a.shares_one_point(b) && b.shares_one_point(c) && c.shares_one_point(a)) {
        return Err(ShapeError::Disconnected);
    }
    let angles = [a.angle_to(b), b.angle_to(c), c.angle_to(a)];
    let sum: f64 = angles.iter().sum();
    if !in_open(sum, TRIANGLE_ANGLE_SUM) {
        return Err(ShapeError::AngleSum { degrees: sum });
    }
    Ok(angles.iter().all(|&deg| in_open(deg, EQUILATERAL_ANGLE)))
}

/// Every side must meet exactly two of the others near a right angle.
pub(crate) fn rectangle_check(sides: &[LineSegment; 4]) -> Result<(), ShapeError> {
    for (i, side) in sides.iter().enumerate() {
        let adjacent = sides
            .iter()
            .enumerate()
            .filter(|&(j, other)| {
                j != i && side.shares_one_point(other) && in_open(side.angle_to(other), RIGHT_ANGLE)
            })
            .count();
        if adjacent != 2 {
            return Err(ShapeError::NotRectangular);
        }
    }
    Ok(())
}

/// Sorts by radius and checks centre collinearity and pairwise tangency.
pub(crate) fn snowman_order(mut circles: [Circle; 3]) -> Result<[Circle; 3], ShapeError> {
    circles.sort_by(|a, b| a.cmp_radius(b));
    let [c1, c2, c3] = circles.map(|c| c.center());

    // Cross-multiplied slopes of c1→c2 and c2→c3.
    let slope12 = (c2.y - c1.y) * (c3.x - c2.x);
    let slope23 = (c3.y - c2.y) * (c2.x - c1.x);
    let collinear = if slope23 != 0.0 {
        in_closed((slope12 / slope23).abs(), COLLINEAR_RATIO)
    } else {
        (slope12 - slope23).abs() < COLLINEAR_ABS
    };
    if !collinear {
        return Err(ShapeError::NotCollinear);
    }

    let tangent = |a: &Circle, b: &Circle| {
        (distance(a.center(), b.center()) - (a.radius() + b.radius())).abs() < TANGENT_ABS
    };
    if !(tangent(&circles[0], &circles[1]) && tangent(&circles[1], &circles[2])) {
        return Err(ShapeError::NotTangent);
    }
    Ok(circles)
}

/// Half the endpoint difference of a side, taken as a position.
#[inline]
fn half_offset(side: &LineSegment) -> Point {
    let [p, q] = side.endpoints();
    (p - q) / 2.0
}

/// Hallow check: every side offset sits on the circle rim (±10% of the
/// radius), the line touches exactly two sides, and the line passes the
/// bisection band for some side.
///
/// The bisection band compares each offset-to-endpoint distance with itself,
/// so it holds for any finite geometry with a positive line length.
pub(crate) fn hallow_check(
    circle: &Circle,
    line: &LineSegment,
    triangle: &Triangle,
) -> Result<(), ShapeError> {
    let sides = triangle.sides();
    let r = circle.radius();
    let rim = (r - r * HALLOW_TANGENT_FRAC, r + r * HALLOW_TANGENT_FRAC);
    if !sides
        .iter()
        .all(|side| in_open(distance(half_offset(side), circle.center()), rim))
    {
        return Err(ShapeError::NotInscribed);
    }

    let touching = sides.iter().filter(|side| line.shares_one_point(side)).count();
    if touching != 2 {
        return Err(ShapeError::Disconnected);
    }

    let err = line.length() * HALLOW_BISECT_FRAC;
    let bisects = sides.iter().any(|side| {
        let v = half_offset(side);
        line.endpoints().iter().any(|&p| {
            let d = distance(v, p);
            in_open(d, (d - err, d + err))
        })
    });
    if !bisects {
        return Err(ShapeError::NotBisected);
    }
    Ok(())
}
