//! 2D geometry primitives for recognized strokes.
//!
//! Purpose
//! - Immutable value types (`Point`, `LineSegment`, `Circle`) that every basic and
//!   composite symbol is built from.
//! - Derived measures used by the composite predicates: distance, midpoint,
//!   slope, inter-segment angle, approximate endpoint sharing.
//!
//! Invariants
//! - `LineSegment` has length > 0, `Circle` has radius > 0, and all coordinates
//!   are finite. Constructors return `GeometryError` otherwise.
//! - Equality is exact (no tolerance); segment equality ignores endpoint order.
//!
//! Code cross-refs: `symbol::predicates`, `fit::{fit_line, fit_circle}`

mod types;
mod util;

pub use types::{Circle, GeometryError, LineSegment, Point};
pub use util::{angle_between, distance, midpoint};
pub(crate) use util::{in_closed, in_open};
