//! The four derivation stages: filter, sort, page, selection.
//!
//! Each stage is a pure transformation over row indices; the
//! [`TableState`](crate::table::TableState) component composes them in
//! order on every read. There is no incremental index maintenance: at the
//! intended scale (tens to low-thousands of rows) a full recomputation per
//! state change is the simplest correct design.

pub mod filter;
pub mod page;
pub mod selection;
pub mod sort;

pub use filter::filter_indices;
pub use page::Pager;
pub use selection::SelectionState;
pub use sort::{Direction, SortOrder, sort_indices};
