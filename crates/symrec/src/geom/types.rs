//! Point, segment and circle value types.
//!
//! - `Point`: plain `nalgebra` 2-vector; exact coordinate equality.
//! - `LineSegment`: unordered endpoint pair with positive length.
//! - `Circle`: centre plus positive radius, ordered by radius via `cmp_radius`.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::util::{angle_between, distance, midpoint};
use crate::cfg::{SHARED_POINT_MERGE_FRAC, SHARE_POINT_FRAC};

/// A 2D position in canvas coordinates.
pub type Point = Vector2<f64>;

/// Invalid geometry detected at construction time.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    ZeroLengthSegment,
    NonPositiveRadius { radius: f64 },
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLengthSegment => write!(f, "line segment must have a length greater than zero"),
            Self::NonPositiveRadius { radius } => {
                write!(f, "radius must be greater than zero (got {radius})")
            }
            Self::NonFinite => write!(f, "coordinates and radius must be finite"),
        }
    }
}

impl std::error::Error for GeometryError {}

#[inline]
fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Straight segment between two distinct endpoints.
#[derive(Clone, Copy, Debug)]
pub struct LineSegment {
    a: Point,
    b: Point,
}

impl LineSegment {
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        if !(is_finite(&a) && is_finite(&b)) {
            return Err(GeometryError::NonFinite);
        }
        if a == b {
            return Err(GeometryError::ZeroLengthSegment);
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, GeometryError> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Endpoints in construction order.
    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        midpoint(self.a, self.b)
    }

    /// Vector from the first endpoint to the second.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }

    /// Rise over run. ±∞ for vertical segments.
    #[inline]
    pub fn slope(&self) -> f64 {
        (self.a.y - self.b.y) / (self.a.x - self.b.x)
    }

    /// Acute angle between the supporting lines, in degrees (0..=90).
    #[inline]
    pub fn angle_to(&self, other: &LineSegment) -> f64 {
        angle_between(self.direction(), other.direction())
    }

    /// True iff exactly one (endpoint, endpoint) pair lies closer than 15% of
    /// this segment's length. Not symmetric: the radius comes from `self`.
    pub fn shares_one_point(&self, other: &LineSegment) -> bool {
        let threshold = SHARE_POINT_FRAC * self.length();
        let mut common = 0;
        for p in other.endpoints() {
            if distance(self.a, p) < threshold {
                common += 1;
            }
            if distance(self.b, p) < threshold {
                common += 1;
            }
        }
        common == 1
    }

    /// Merged corner of two connected segments: midpoint of the first endpoint
    /// pair within 5% of this segment's length.
    pub fn shared_point(&self, other: &LineSegment) -> Option<Point> {
        if !self.shares_one_point(other) {
            return None;
        }
        let threshold = SHARED_POINT_MERGE_FRAC * self.length();
        for p in other.endpoints() {
            if distance(self.a, p) < threshold {
                return Some(midpoint(self.a, p));
            }
            if distance(self.b, p) < threshold {
                return Some(midpoint(self.b, p));
            }
        }
        None
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Circle with a strictly positive radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !(is_finite(&center) && radius.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius { radius });
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn from_coords(x: f64, y: f64, radius: f64) -> Result<Self, GeometryError> {
        Self::new(Point::new(x, y), radius)
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Natural order by radius. Ties fall back to the centre so the order is total.
    pub fn cmp_radius(&self, other: &Circle) -> Ordering {
        self.radius
            .total_cmp(&other.radius)
            .then_with(|| self.center.x.total_cmp(&other.center.x))
            .then_with(|| self.center.y.total_cmp(&other.center.y))
    }
}
