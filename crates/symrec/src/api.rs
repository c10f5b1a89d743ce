//! Curated surface for the CLI and benchmarks (UNSTABLE).
//!
//! Groups the re-exports by concern so callers do not reach into module
//! internals. Breaking changes are allowed.

// Geometry
pub use crate::geom::{angle_between, distance, midpoint, Circle, GeometryError, LineSegment, Point};
// Fitting
pub use crate::fit::{fit_circle, fit_line, fit_regression_line, CircleFit, LineFit, RegressionLine};
// Symbols and drawing
pub use crate::symbol::{
    BasicSymbol, Hallow, Label, Palette, Rectangle, ShapeError, Snowman, Stroke, Symbol, SymbolKind,
    Triangle,
};
// Recognition
pub use crate::cfg::RecognizerCfg;
pub use crate::input::{GestureCapture, PointerButton, PointerEvent};
pub use crate::recognizer::{classify, Recognizer, SymbolBank};
// Synthetic strokes
pub use crate::synth::{
    circle_stroke, line_stroke, polygon_strokes, ReplayToken as StrokeReplay, StrokeCfg,
};
