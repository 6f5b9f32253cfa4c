//! The table component: one source collection, derived views.

use log::debug;

use crate::engine::filter::filter_indices;
use crate::engine::page::Pager;
use crate::engine::selection::SelectionState;
use crate::engine::sort::{Direction, SortOrder, sort_indices};
use crate::model::Row;
use crate::schema::Column;

/// Display-only spacing preset. Has no effect on data semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    /// Blank lines inserted between body rows by a renderer.
    pub fn row_gap(self) -> u16 {
        match self {
            Density::Compact => 0,
            Density::Comfortable => 1,
            Density::Spacious => 2,
        }
    }

    /// The next preset, wrapping around. Used by density toggles.
    pub fn cycled(self) -> Self {
        match self {
            Density::Compact => Density::Comfortable,
            Density::Comfortable => Density::Spacious,
            Density::Spacious => Density::Compact,
        }
    }
}

/// One rendered header cell: label, sortability, and the active sort
/// indicator when this column drives the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub sort: Option<Direction>,
}

/// The footer line: "Showing X to Y of Z entries" plus page position.
///
/// `start` and `end` are 1-based and inclusive; an empty result reads
/// "Showing 0 to 0 of 0 entries".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl std::fmt::Display for FooterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// A table over an externally supplied row collection.
///
/// Every read derives Filter → Sort → Page from the unmodified source
/// collection; every write mutates exactly one piece of interaction state.
/// The component owns all of its state and shares none of it across
/// instances. It performs no I/O and cannot fail.
///
/// # Example
///
/// ```
/// use tabular_lib::model::Row;
/// use tabular_lib::schema::Column;
/// use tabular_lib::table::TableState;
///
/// let mut table = TableState::new(vec![
///     Column::new("name", "Product"),
///     Column::new("stock", "Stock"),
/// ]);
/// table.set_rows(vec![
///     Row::new().set("name", "Wheat").set("stock", 320i64),
///     Row::new().set("name", "Paddy").set("stock", 95i64),
/// ]);
///
/// table.set_query("whe");
/// assert_eq!(table.visible().len(), 1);
/// ```
pub struct TableState {
    rows: Vec<Row>,
    columns: Vec<Column>,
    query: String,
    sort: Option<SortOrder>,
    pager: Pager,
    selectable: bool,
    selection: SelectionState,
    density: Density,
}

impl TableState {
    /// Creates an empty table over the given column schema.
    ///
    /// Defaults: page size 10, pagination enabled, selection disabled,
    /// comfortable density.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            query: String::new(),
            sort: None,
            pager: Pager::default(),
            selectable: false,
            selection: SelectionState::new(),
            density: Density::default(),
        }
    }

    /// Sets the page size (builder pattern).
    pub fn page_size(mut self, size: usize) -> Self {
        self.pager = Pager::new(size);
        self
    }

    /// Enables row selection (builder pattern).
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Disables pagination: the page output is the full sorted collection.
    pub fn without_pagination(mut self) -> Self {
        self.pager = Pager::disabled();
        self
    }

    /// Sets the initial density (builder pattern).
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    // =========================================================================
    // Source collection
    // =========================================================================

    /// Replaces the source collection.
    ///
    /// The engine never mutates rows; it only derives views over them.
    /// Selection is cleared and the page re-clamped against the new set.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.selection.clear();
        let len = self.filtered_len();
        self.pager.clamp(len);
        debug!("rows replaced: {} total", self.rows.len());
    }

    /// Returns the unfiltered source collection.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the column schema.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Sets the free-text query.
    ///
    /// The page is re-clamped against the shrunken result and selection is
    /// cleared: positional marks do not survive a change of visible set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.selection.clear();
        let len = self.filtered_len();
        self.pager.clamp(len);
        debug!("query set to {:?}: {} rows match", self.query, len);
    }

    /// Returns the active query.
    pub fn query(&self) -> &str {
        &self.query
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Applies the header-click toggle for a column key.
    ///
    /// Same column flips direction, a different column resets to ascending.
    /// Unknown or non-sortable columns are not wired to the toggle and
    /// leave everything untouched. Selection is cleared on an actual
    /// reorder.
    pub fn toggle_sort(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key() == key && c.is_sortable());
        if !sortable {
            return;
        }
        let next = SortOrder::toggled(self.sort.as_ref(), key);
        debug!("sort toggled: {} {:?}", next.key(), next.direction());
        self.sort = Some(next);
        self.selection.clear();
    }

    /// Returns the active sort, if any.
    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        let len = self.filtered_len();
        if self.pager.first(len) {
            self.selection.clear();
        }
    }

    /// Moves one page back; no-op on the first page.
    pub fn prev_page(&mut self) {
        let len = self.filtered_len();
        if self.pager.prev(len) {
            self.selection.clear();
        }
    }

    /// Moves one page forward; no-op on the last page.
    pub fn next_page(&mut self) {
        let len = self.filtered_len();
        if self.pager.next(len) {
            self.selection.clear();
        }
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        let len = self.filtered_len();
        if self.pager.last(len) {
            self.selection.clear();
        }
    }

    /// Jumps to a specific page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        let len = self.filtered_len();
        if self.pager.go_to(page, len) {
            self.selection.clear();
        }
    }

    /// The current page, clamped against the filtered collection.
    pub fn current_page(&self) -> usize {
        self.pager.effective_page(self.filtered_len())
    }

    /// Total pages over the filtered collection, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered_len())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips the mark on one visible row. Ignored unless selection is
    /// enabled.
    pub fn toggle_row(&mut self, index: usize) {
        if !self.selectable {
            return;
        }
        let len = self.visible_len();
        self.selection.toggle_row(index, len);
    }

    /// Selects or clears every row on the current page.
    pub fn toggle_all(&mut self) {
        if !self.selectable {
            return;
        }
        let len = self.visible_len();
        self.selection.toggle_all(len);
    }

    /// Returns `true` if the visible row at `index` is marked.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// Marked page-relative indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.selected()
    }

    /// The marked rows themselves, in page order.
    pub fn selected_rows(&self) -> Vec<&Row> {
        let visible = self.visible();
        self.selection
            .selected()
            .into_iter()
            .filter_map(|i| visible.get(i).copied())
            .collect()
    }

    /// Returns `true` if selection is enabled.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    // =========================================================================
    // Density
    // =========================================================================

    /// Sets the density preset.
    pub fn set_density(&mut self, density: Density) {
        self.density = density;
    }

    /// Advances to the next density preset.
    pub fn cycle_density(&mut self) {
        self.density = self.density.cycled();
    }

    /// Returns the active density preset.
    pub fn current_density(&self) -> Density {
        self.density
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The rows on the current page, after filter and sort.
    pub fn visible(&self) -> Vec<&Row> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    /// The full row behind a visible position, for row-click events.
    ///
    /// Callers get the row object, not the display index.
    pub fn row_at(&self, visible_index: usize) -> Option<&Row> {
        let indices = self.visible_indices();
        indices.get(visible_index).map(|&i| &self.rows[i])
    }

    /// Header cells with sort indicators.
    pub fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|col| HeaderCell {
                key: col.key().to_string(),
                label: col.header().to_string(),
                sortable: col.is_sortable(),
                sort: self
                    .sort
                    .as_ref()
                    .filter(|order| order.key() == col.key())
                    .map(|order| order.direction()),
            })
            .collect()
    }

    /// Formatted cell text for every visible row.
    ///
    /// A key absent from a row yields an empty cell, not an error.
    pub fn body(&self) -> Vec<Vec<String>> {
        self.visible()
            .into_iter()
            .map(|row| self.columns.iter().map(|col| col.cell_text(row)).collect())
            .collect()
    }

    /// The footer summary for the current view.
    pub fn footer(&self) -> FooterSummary {
        let total = self.filtered_len();
        let (start, end) = self.pager.window(total);
        FooterSummary {
            start: if total == 0 { 0 } else { start + 1 },
            end,
            total,
            page: self.pager.effective_page(total),
            total_pages: self.pager.total_pages(total),
        }
    }

    /// Returns `true` if the filtered collection is empty; renderers show
    /// their "no data found" placeholder instead of a body.
    pub fn is_empty(&self) -> bool {
        self.filtered_len() == 0
    }

    // =========================================================================
    // Internal derivation pipeline
    // =========================================================================

    fn filtered_len(&self) -> usize {
        filter_indices(&self.rows, &self.query).len()
    }

    fn visible_len(&self) -> usize {
        let len = self.filtered_len();
        let (start, end) = self.pager.window(len);
        end - start
    }

    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = filter_indices(&self.rows, &self.query);
        sort_indices(&self.rows, &mut indices, self.sort.as_ref());
        let (start, end) = self.pager.window(indices.len());
        indices[start..end].to_vec()
    }
}
