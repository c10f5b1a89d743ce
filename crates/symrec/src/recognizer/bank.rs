//! Ordered history of live symbols.

use crate::symbol::Symbol;

/// Append-biased symbol log. Entries change only by `push` and by
/// `remove_recent`; nothing is edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolBank {
    entries: Vec<Symbol>,
}

impl SymbolBank {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, symbol: Symbol) {
        self.entries.push(symbol);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter()
    }

    /// The `n` most recent entries `pick` accepts, most recent first.
    ///
    /// Scans backward and skips entries `pick` rejects, so matches need not be
    /// contiguous. `None` when fewer than `n` exist.
    pub fn recent<T>(&self, n: usize, pick: impl Fn(&Symbol) -> Option<T>) -> Option<Vec<T>> {
        let found: Vec<T> = self.entries.iter().rev().filter_map(pick).take(n).collect();
        (found.len() == n).then_some(found)
    }

    /// Removes and returns the last entry matching `pred`.
    pub fn remove_recent(&mut self, pred: impl Fn(&Symbol) -> bool) -> Option<Symbol> {
        let idx = self.entries.iter().rposition(pred)?;
        Some(self.entries.remove(idx))
    }

    /// Independent copy of the current entries, oldest first.
    pub fn snapshot(&self) -> Vec<Symbol> {
        self.entries.clone()
    }
}
