//! Recognized symbols: basic strokes and the composites assembled from them.
//!
//! Purpose
//! - `Symbol` is a closed variant over every kind the recognizer can hold;
//!   dispatch sites (drawing, assembly, export) match on it exhaustively.
//! - Composite constructors (`Triangle::new`, `Rectangle::new`, `Snowman::new`,
//!   `Hallow::new`) validate their geometric predicates and return `ShapeError`
//!   on the first violation. A successfully built composite always satisfies
//!   its predicate.
//! - `BasicSymbol` restricts direct bank appends to lines and circles.
//!
//! Why this design
//! - Composites own copies of their parts, so a cloned `Symbol` never aliases
//!   bank state.
//! - Equality is structural and order-insensitive over parts; triangle kind is
//!   derived from the sides and need not be compared.
//!
//! Code cross-refs: `recognizer::assemble`, `cfg` (tolerance bands)

mod draw;
mod predicates;
mod types;

pub use draw::{Label, Palette, Stroke};
pub use types::{BasicSymbol, Hallow, Rectangle, ShapeError, Snowman, Symbol, SymbolKind, Triangle};

#[cfg(test)]
mod tests;
