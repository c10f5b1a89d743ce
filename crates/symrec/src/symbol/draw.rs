//! Rendering-agnostic draw list: what a view paints for each symbol.

use crate::geom::{Circle, LineSegment, Point};

use super::types::Symbol;

/// One primitive stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Segment(LineSegment),
    Circle(Circle),
}

/// Colour class a view assigns to a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    Basic,
    Composite,
    Rectangle,
}

/// Text tag drawn next to a symbol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub anchor: Point,
}

impl Symbol {
    /// Flattens the symbol into basic strokes. A hallow yields its circle,
    /// then its line, then the triangle sides.
    pub fn strokes(&self) -> Vec<Stroke> {
        match self {
            Symbol::Line(l) => vec![Stroke::Segment(*l)],
            Symbol::Circle(c) => vec![Stroke::Circle(*c)],
            Symbol::Triangle(t) => t.sides().iter().copied().map(Stroke::Segment).collect(),
            Symbol::Rectangle(r) => r.sides().iter().copied().map(Stroke::Segment).collect(),
            Symbol::Snowman(s) => s.circles().iter().copied().map(Stroke::Circle).collect(),
            Symbol::Hallow(h) => {
                let mut out = vec![Stroke::Circle(*h.circle()), Stroke::Segment(*h.line())];
                out.extend(h.triangle().sides().iter().copied().map(Stroke::Segment));
                out
            }
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Symbol::Line(_) | Symbol::Circle(_) => Palette::Basic,
            Symbol::Rectangle(_) => Palette::Rectangle,
            Symbol::Triangle(_) | Symbol::Snowman(_) | Symbol::Hallow(_) => Palette::Composite,
        }
    }

    pub fn label(&self) -> Label {
        let anchor = match self {
            Symbol::Line(l) => l.endpoints()[0],
            Symbol::Circle(c) => c.center(),
            Symbol::Triangle(t) => t.sides()[0].endpoints()[0],
            Symbol::Rectangle(r) => r.sides()[0].endpoints()[0],
            Symbol::Snowman(s) => s.circles()[0].center(),
            Symbol::Hallow(h) => h.circle().center(),
        };
        Label {
            text: self.kind().label(),
            anchor,
        }
    }
}
