//! Selection store

use std::collections::HashSet;

/// Tracks marked rows on the current page, addressed by 0-based position
/// within the page slice.
///
/// Selection is positional, not keyed: it stays meaningful only while the
/// visible set keeps its identity. The owning table clears it whenever
/// filter, sort, or page changes what is visible.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    marked: HashSet<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given page-relative index is marked.
    pub fn is_selected(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Returns `true` if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Number of marked rows.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Marked indices in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.marked.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Flips membership of one visible row. Out-of-range indices are
    /// ignored rather than stored.
    pub fn toggle_row(&mut self, index: usize, visible_len: usize) {
        if index >= visible_len {
            return;
        }
        if !self.marked.remove(&index) {
            self.marked.insert(index);
        }
    }

    /// Selects every visible row, or clears them all if every one is
    /// already selected. Select-all covers this page only, not the whole
    /// filtered collection.
    pub fn toggle_all(&mut self, visible_len: usize) {
        let all_selected =
            visible_len > 0 && (0..visible_len).all(|i| self.marked.contains(&i));
        if all_selected {
            for i in 0..visible_len {
                self.marked.remove(&i);
            }
        } else {
            for i in 0..visible_len {
                self.marked.insert(i);
            }
        }
    }

    /// Drops every mark. Called by the table when the visible set changes.
    pub fn clear(&mut self) {
        self.marked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_all_twice_restores_empty_set() {
        let mut sel = SelectionState::new();
        sel.toggle_all(5);
        assert_eq!(sel.selected(), vec![0, 1, 2, 3, 4]);
        sel.toggle_all(5);
        assert!(sel.is_empty());
    }

    #[test]
    fn partial_selection_completes_then_clears() {
        let mut sel = SelectionState::new();
        sel.toggle_row(2, 5);
        sel.toggle_all(5);
        assert_eq!(sel.selected(), vec![0, 1, 2, 3, 4]);
        sel.toggle_all(5);
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_on_empty_page_is_noop() {
        let mut sel = SelectionState::new();
        sel.toggle_all(0);
        assert!(sel.is_empty());
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut sel = SelectionState::new();
        sel.toggle_row(7, 5);
        assert!(sel.is_empty());
    }
}
