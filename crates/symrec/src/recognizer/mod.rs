//! Gesture recognizer: classifier, symbol bank and assembly cascade.
//!
//! Purpose
//! - `Recognizer::add_symbol` turns one completed gesture into at most one
//!   basic symbol, appends it, and runs the assembly cascade:
//!   line → Triangle (→ Hallow on success) → Rectangle; circle → Snowman.
//! - `Recognizer::current_symbols` hands out an owned snapshot of the bank.
//!
//! Invariants
//! - The bank changes only by appending a basic symbol or by an assembly that
//!   removes its parts and appends exactly one composite at the end.
//! - Rejections never escape: a gesture that fits nothing, or parts that fail a
//!   predicate, leave the bank as it was.
//!
//! Why this design
//! - State is owned by an explicitly constructed `Recognizer`; there is no
//!   global bank. Callers needing shared access wrap the whole value, so that
//!   append and cascade stay one critical section.
//!
//! Code cross-refs: `symbol` (composite predicates), `fit` (goodness scores)

mod assemble;
mod bank;
mod classify;

pub use bank::SymbolBank;
pub use classify::classify;

use crate::cfg::RecognizerCfg;
use crate::geom::Point;
use crate::symbol::{BasicSymbol, Symbol};

#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    bank: SymbolBank,
    cfg: RecognizerCfg,
}

impl Recognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: RecognizerCfg) -> Self {
        Self {
            bank: SymbolBank::new(),
            cfg,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &RecognizerCfg {
        &self.cfg
    }

    /// Classifies a completed gesture and, if accepted, appends it and runs
    /// the assembly cascade. Rejected gestures are dropped silently.
    pub fn add_symbol(&mut self, points: &[Point]) {
        if let Some(basic) = classify(points, &self.cfg) {
            self.add_basic_symbol(basic);
        }
    }

    /// Appends an already classified basic symbol and runs the cascade.
    pub fn add_basic_symbol(&mut self, symbol: BasicSymbol) {
        self.bank.push(symbol.into());
        match symbol {
            BasicSymbol::Line(_) => assemble::after_line(&mut self.bank),
            BasicSymbol::Circle(_) => assemble::after_circle(&mut self.bank),
        }
    }

    /// Owned copy of the bank, oldest first.
    pub fn current_symbols(&self) -> Vec<Symbol> {
        self.bank.snapshot()
    }

    #[inline]
    pub fn bank(&self) -> &SymbolBank {
        &self.bank
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }
}
