//! Composite assembly over the bank.
//!
//! Each attempt looks up the most recent parts it needs, validates them through
//! the composite constructor, and on success removes one matching entry per
//! part (nearest to the end first) before appending the composite. A failed
//! attempt leaves the bank untouched.

use crate::symbol::{Hallow, Rectangle, ShapeError, Snowman, Symbol, SymbolKind, Triangle};

use super::bank::SymbolBank;

fn is_line(s: &Symbol) -> bool {
    matches!(s, Symbol::Line(_))
}

fn is_circle(s: &Symbol) -> bool {
    matches!(s, Symbol::Circle(_))
}

fn is_triangle(s: &Symbol) -> bool {
    matches!(s, Symbol::Triangle(_))
}

/// Cascade after a line segment was appended.
pub(crate) fn after_line(bank: &mut SymbolBank) {
    if try_triangle(bank) {
        try_hallow(bank);
    }
    try_rectangle(bank);
}

/// Cascade after a circle was appended.
pub(crate) fn after_circle(bank: &mut SymbolBank) {
    try_snowman(bank);
}

/// Commits a built composite, or logs why the parts were rejected.
fn settle(
    bank: &mut SymbolBank,
    attempt: SymbolKind,
    built: Result<Symbol, ShapeError>,
    consumes: &[fn(&Symbol) -> bool],
) -> bool {
    match built {
        Ok(symbol) => {
            for pred in consumes {
                bank.remove_recent(pred);
            }
            let kind = symbol.kind();
            bank.push(symbol);
            tracing::debug!(%kind, bank_len = bank.len(), "assembled composite");
            true
        }
        Err(reason) => {
            tracing::trace!(%attempt, %reason, "assembly rejected");
            false
        }
    }
}

fn try_triangle(bank: &mut SymbolBank) -> bool {
    let Some(sides) = bank.recent(3, Symbol::as_line) else {
        return false;
    };
    let built = Triangle::new(&sides).map(Symbol::from);
    settle(bank, SymbolKind::Triangle, built, &[is_line, is_line, is_line])
}

fn try_rectangle(bank: &mut SymbolBank) -> bool {
    let Some(sides) = bank.recent(4, Symbol::as_line) else {
        return false;
    };
    let built = Rectangle::new(&sides).map(Symbol::from);
    settle(bank, SymbolKind::Rectangle, built, &[is_line, is_line, is_line, is_line])
}

fn try_snowman(bank: &mut SymbolBank) -> bool {
    let Some(circles) = bank.recent(3, Symbol::as_circle) else {
        return false;
    };
    let built = Snowman::new(&circles).map(Symbol::from);
    settle(bank, SymbolKind::Snowman, built, &[is_circle, is_circle, is_circle])
}

fn try_hallow(bank: &mut SymbolBank) -> bool {
    let circle = bank.recent(1, |s| s.as_circle().map(Symbol::Circle));
    let line = bank.recent(1, |s| s.as_line().map(Symbol::Line));
    let triangle = bank.recent(1, |s| s.as_triangle().cloned().map(Symbol::Triangle));
    let (Some(circle), Some(line), Some(triangle)) = (circle, line, triangle) else {
        return false;
    };
    let parts: Vec<Symbol> = [circle, line, triangle].into_iter().flatten().collect();
    let built = Hallow::new(&parts).map(Symbol::from);
    settle(bank, SymbolKind::Hallow, built, &[is_circle, is_line, is_triangle])
}
