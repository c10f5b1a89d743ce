//! Closed-form least-squares fits for completed gestures.
//!
//! Purpose
//! - `fit_line`: orthogonal (total least squares) line via centred second
//!   moments, well defined for near-vertical strokes; yields the fitted segment
//!   and a straightness score in [0,1].
//! - `fit_circle`: algebraic (Kåsa) circle via a 3×3 Cramer solve over power
//!   sums; yields centre, radius and a roundness score in [0,1].
//! - `fit_regression_line`: ordinary least squares `y = m·x + b`, used for
//!   reporting and as a reference fit in tests.
//!
//! Numerics
//! - No minimum point count and no degeneracy guard. Callers provide at least
//!   two points (line) or three non-collinear points (circle); otherwise NaN/∞
//!   propagate into the result and the goodness scores, which then fail any
//!   acceptance threshold.
//!
//! Code cross-refs: `recognizer::classify`, `geom::{LineSegment, Circle}`

mod circle;
mod line;

pub use circle::{fit_circle, CircleFit};
pub use line::{fit_line, fit_regression_line, LineFit, RegressionLine};
