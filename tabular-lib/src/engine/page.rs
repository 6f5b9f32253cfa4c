//! Page stage

/// Pagination state: a 1-based page number over a fixed page size.
///
/// The pager never rejects navigation; every operation clamps to
/// `[1, total_pages]` and boundary moves are no-ops. When disabled, the
/// window is the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
    enabled: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 10,
            enabled: true,
        }
    }
}

impl Pager {
    /// Creates a pager with the given page size.
    ///
    /// A zero page size is nonsensical and falls back to the default of 10.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 10 } else { page_size },
            ..Self::default()
        }
    }

    /// Creates a disabled pager: the window always covers everything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` if windowing is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Total pages for a collection of `len` rows, never less than 1.
    pub fn total_pages(&self, len: usize) -> usize {
        if !self.enabled {
            return 1;
        }
        len.div_ceil(self.page_size).max(1)
    }

    /// The current page clamped against the collection length.
    ///
    /// Filtering can shrink the collection under the stored page number;
    /// reads go through this so an empty page is never presented while rows
    /// exist.
    pub fn effective_page(&self, len: usize) -> usize {
        self.current_page.min(self.total_pages(len))
    }

    /// The half-open index window `[start, end)` for the current page.
    pub fn window(&self, len: usize) -> (usize, usize) {
        if !self.enabled {
            return (0, len);
        }
        let page = self.effective_page(len);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(len);
        (start.min(len), end)
    }

    // =========================================================================
    // Navigation
    //
    // Each returns true if the effective page changed.
    // =========================================================================

    /// Jumps to the first page.
    pub fn first(&mut self, len: usize) -> bool {
        self.go_to(1, len)
    }

    /// Moves one page back.
    pub fn prev(&mut self, len: usize) -> bool {
        let page = self.effective_page(len);
        self.go_to(page.saturating_sub(1).max(1), len)
    }

    /// Moves one page forward.
    pub fn next(&mut self, len: usize) -> bool {
        let page = self.effective_page(len);
        self.go_to(page + 1, len)
    }

    /// Jumps to the last page.
    pub fn last(&mut self, len: usize) -> bool {
        self.go_to(self.total_pages(len), len)
    }

    /// Jumps to a specific page, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if !self.enabled {
            return false;
        }
        let before = self.effective_page(len);
        self.current_page = page.clamp(1, self.total_pages(len));
        self.current_page != before
    }

    /// Re-clamps the stored page after the collection shrank.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.effective_page(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        let pager = Pager::new(10);
        assert_eq!(pager.total_pages(23), 3);
        assert_eq!(pager.total_pages(20), 2);
        assert_eq!(pager.total_pages(0), 1);
    }

    #[test]
    fn navigation_is_noop_at_boundaries() {
        let mut pager = Pager::new(10);
        assert!(!pager.prev(23));
        assert!(pager.last(23));
        assert!(!pager.next(23));
        assert_eq!(pager.effective_page(23), 3);
    }

    #[test]
    fn shrinking_collection_clamps_page() {
        let mut pager = Pager::new(10);
        pager.last(23);
        // Filter drops the set to 4 rows; page 3 no longer exists.
        assert_eq!(pager.effective_page(4), 1);
        assert_eq!(pager.window(4), (0, 4));
    }

    #[test]
    fn disabled_pager_windows_everything() {
        let pager = Pager::disabled();
        assert_eq!(pager.window(1000), (0, 1000));
        assert_eq!(pager.total_pages(1000), 1);
    }
}
