//! Tabular data-presentation engine
//!
//! A reusable table component over an arbitrary in-memory record
//! collection: free-text filtering, column sorting, pagination, row
//! selection, and density control, all derived from one source collection
//! on every read. Rows are fetched by the caller before they reach the
//! engine; the engine performs no I/O and is sized for collections up to
//! the low thousands of rows.

pub mod engine;
pub mod error;
pub mod model;
pub mod schema;
pub mod table;

pub use engine::{Direction, Pager, SelectionState, SortOrder};
pub use error::FieldError;
pub use model::{Row, Value};
pub use schema::{CellFormatter, Column};
pub use table::{Density, FooterSummary, HeaderCell, TableState};
