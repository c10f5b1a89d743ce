//! Symbol variants and composite value types.

use std::fmt;

use crate::geom::{Circle, LineSegment};

use super::predicates::{hallow_check, rectangle_check, snowman_order, triangle_check};

/// Tag of a recognized symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    LineSegment,
    Circle,
    Triangle,
    EquilateralTriangle,
    Rectangle,
    Snowman,
    Hallow,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 7] = [
        SymbolKind::LineSegment,
        SymbolKind::Circle,
        SymbolKind::Triangle,
        SymbolKind::EquilateralTriangle,
        SymbolKind::Rectangle,
        SymbolKind::Snowman,
        SymbolKind::Hallow,
    ];

    /// Display name, as shown next to a drawn symbol.
    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::LineSegment => "LineSegment",
            SymbolKind::Circle => "Circle",
            SymbolKind::Triangle => "Triangle",
            SymbolKind::EquilateralTriangle => "Equilateral Triangle",
            SymbolKind::Rectangle => "Rectangle",
            SymbolKind::Snowman => "Snowman",
            SymbolKind::Hallow => "Hallow",
        }
    }

    #[inline]
    pub fn is_basic(self) -> bool {
        matches!(self, SymbolKind::LineSegment | SymbolKind::Circle)
    }

    #[inline]
    pub fn is_triangle(self) -> bool {
        matches!(self, SymbolKind::Triangle | SymbolKind::EquilateralTriangle)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a set of parts does not form a composite symbol.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    WrongCount { expected: usize, found: usize },
    /// Some required pair of sides does not share exactly one endpoint.
    Disconnected,
    AngleSum { degrees: f64 },
    NotRectangular,
    NotCollinear,
    NotTangent,
    /// A hallow needs one circle, one line segment and one triangle.
    MissingPart,
    NotInscribed,
    NotBisected,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { expected, found } => {
                write!(f, "expected {expected} parts, found {found}")
            }
            Self::Disconnected => write!(f, "sides do not share endpoints"),
            Self::AngleSum { degrees } => {
                write!(f, "pairwise angles sum to {degrees:.1}°, outside the triangle band")
            }
            Self::NotRectangular => write!(f, "sides do not meet at right angles"),
            Self::NotCollinear => write!(f, "circle centres are not collinear"),
            Self::NotTangent => write!(f, "adjacent circles are not tangent"),
            Self::MissingPart => write!(f, "hallow needs a circle, a line segment and a triangle"),
            Self::NotInscribed => write!(f, "triangle sides are not tangent to the circle"),
            Self::NotBisected => write!(f, "line does not bisect the triangle"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Order-insensitive part comparison used by composite equality.
fn same_parts<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && b.iter().all(|x| a.contains(x)) && a.iter().all(|x| b.contains(x))
}

fn exact<const N: usize, T: Copy>(parts: &[T]) -> Result<[T; N], ShapeError> {
    <[T; N]>::try_from(parts).map_err(|_| ShapeError::WrongCount {
        expected: N,
        found: parts.len(),
    })
}

/// Three connected sides. Equilateral iff every pairwise angle lies in (55°, 65°).
#[derive(Clone, Debug)]
pub struct Triangle {
    sides: [LineSegment; 3],
    equilateral: bool,
}

impl Triangle {
    pub fn new(sides: &[LineSegment]) -> Result<Self, ShapeError> {
        let sides = exact::<3, _>(sides)?;
        let equilateral = triangle_check(&sides)?;
        Ok(Self { sides, equilateral })
    }

    /// Sides in the order they were supplied.
    #[inline]
    pub fn sides(&self) -> &[LineSegment; 3] {
        &self.sides
    }

    #[inline]
    pub fn is_equilateral(&self) -> bool {
        self.equilateral
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        if self.equilateral {
            SymbolKind::EquilateralTriangle
        } else {
            SymbolKind::Triangle
        }
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        same_parts(&self.sides, &other.sides)
    }
}

/// Four sides, each meeting exactly two others at roughly 90°.
#[derive(Clone, Debug)]
pub struct Rectangle {
    sides: [LineSegment; 4],
}

impl Rectangle {
    pub fn new(sides: &[LineSegment]) -> Result<Self, ShapeError> {
        let sides = exact::<4, _>(sides)?;
        rectangle_check(&sides)?;
        Ok(Self { sides })
    }

    #[inline]
    pub fn sides(&self) -> &[LineSegment; 4] {
        &self.sides
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        same_parts(&self.sides, &other.sides)
    }
}

/// Three stacked, mutually tangent circles with collinear centres.
#[derive(Clone, Debug)]
pub struct Snowman {
    circles: [Circle; 3],
}

impl Snowman {
    pub fn new(circles: &[Circle]) -> Result<Self, ShapeError> {
        let circles = snowman_order(exact::<3, _>(circles)?)?;
        Ok(Self { circles })
    }

    /// Circles in ascending radius order.
    #[inline]
    pub fn circles(&self) -> &[Circle; 3] {
        &self.circles
    }
}

impl PartialEq for Snowman {
    fn eq(&self, other: &Self) -> bool {
        same_parts(&self.circles, &other.circles)
    }
}

/// A triangle inscribed around a circle, with a line through one corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Hallow {
    circle: Circle,
    line: LineSegment,
    triangle: Triangle,
}

impl Hallow {
    /// Builds a hallow from exactly three symbols: one circle, one line segment
    /// and one triangle (either kind), in any order.
    pub fn new(parts: &[Symbol]) -> Result<Self, ShapeError> {
        if parts.len() != 3 {
            return Err(ShapeError::WrongCount {
                expected: 3,
                found: parts.len(),
            });
        }
        let (mut circle, mut line, mut triangle) = (None, None, None);
        for part in parts {
            match part {
                Symbol::Circle(c) => circle = Some(*c),
                Symbol::Line(l) => line = Some(*l),
                Symbol::Triangle(t) => triangle = Some(t.clone()),
                _ => {}
            }
        }
        let (Some(circle), Some(line), Some(triangle)) = (circle, line, triangle) else {
            return Err(ShapeError::MissingPart);
        };
        hallow_check(&circle, &line, &triangle)?;
        Ok(Self { circle, line, triangle })
    }

    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub fn line(&self) -> &LineSegment {
        &self.line
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }
}

/// The two kinds the classifier can produce and the bank accepts directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BasicSymbol {
    Line(LineSegment),
    Circle(Circle),
}

impl BasicSymbol {
    #[inline]
    pub fn kind(&self) -> SymbolKind {
        match self {
            BasicSymbol::Line(_) => SymbolKind::LineSegment,
            BasicSymbol::Circle(_) => SymbolKind::Circle,
        }
    }
}

/// Any recognized symbol. Values own all their parts; cloning yields an
/// independent copy.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    Line(LineSegment),
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Snowman(Snowman),
    Hallow(Hallow),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Line(_) => SymbolKind::LineSegment,
            Symbol::Circle(_) => SymbolKind::Circle,
            Symbol::Triangle(t) => t.kind(),
            Symbol::Rectangle(_) => SymbolKind::Rectangle,
            Symbol::Snowman(_) => SymbolKind::Snowman,
            Symbol::Hallow(_) => SymbolKind::Hallow,
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<LineSegment> {
        match self {
            Symbol::Line(l) => Some(*l),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<Circle> {
        match self {
            Symbol::Circle(c) => Some(*c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Symbol::Triangle(t) => Some(t),
            _ => None,
        }
    }
}

impl From<BasicSymbol> for Symbol {
    fn from(b: BasicSymbol) -> Self {
        match b {
            BasicSymbol::Line(l) => Symbol::Line(l),
            BasicSymbol::Circle(c) => Symbol::Circle(c),
        }
    }
}

impl From<Triangle> for Symbol {
    fn from(t: Triangle) -> Self {
        Symbol::Triangle(t)
    }
}

impl From<Rectangle> for Symbol {
    fn from(r: Rectangle) -> Self {
        Symbol::Rectangle(r)
    }
}

impl From<Snowman> for Symbol {
    fn from(s: Snowman) -> Self {
        Symbol::Snowman(s)
    }
}

impl From<Hallow> for Symbol {
    fn from(h: Hallow) -> Self {
        Symbol::Hallow(h)
    }
}
