//! Freehand symbol recognition: least-squares fitting plus composite assembly.
//!
//! A completed pointer gesture (an ordered point sequence) is fitted as a line
//! and as a circle; the better-scoring basic symbol above its threshold enters a
//! `Recognizer`'s bank, which then tries to replace recent entries with
//! triangles, rectangles, snowmen or hallows.
//!
//! API Policy
//! - The crate is consumed by the `symrec` CLI in this workspace. There is no
//!   stability promise; prefer `api` or `prelude` imports over deep paths.

pub mod api;
pub mod cfg;
pub mod fit;
pub mod geom;
pub mod input;
pub mod recognizer;
pub mod symbol;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::RecognizerCfg;
pub use geom::{Circle, LineSegment, Point};
pub use recognizer::Recognizer;
pub use symbol::{BasicSymbol, Symbol, SymbolKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fit::{fit_circle, fit_line, fit_regression_line};
    pub use crate::geom::{Circle, LineSegment, Point};
    pub use crate::input::{GestureCapture, PointerButton, PointerEvent};
    pub use crate::recognizer::Recognizer;
    pub use crate::symbol::{BasicSymbol, Symbol, SymbolKind};
    pub use crate::synth::{ReplayToken, StrokeCfg};
    pub use crate::RecognizerCfg;
}
