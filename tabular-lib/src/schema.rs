//! Column definitions and cell formatting

use crate::model::Row;
use crate::model::Value;

/// Formats a cell value into display text.
///
/// Modeled as a capability trait rather than a bare closure type so custom
/// rendering stays a first-class seam: the formatter receives both the field
/// value and the whole row, which lets a column derive its text from other
/// fields (status badges, joined names, computed margins).
///
/// A blanket implementation covers plain closures:
///
/// ```
/// use tabular_lib::schema::Column;
/// use tabular_lib::model::{Row, Value};
///
/// let col = Column::new("price", "Price")
///     .formatter(|v: &Value, _: &Row| format!("₹{v}"));
/// ```
pub trait CellFormatter {
    /// Produces the display text for a cell.
    fn format(&self, value: &Value, row: &Row) -> String;
}

impl<F> CellFormatter for F
where
    F: Fn(&Value, &Row) -> String,
{
    fn format(&self, value: &Value, row: &Row) -> String {
        self(value, row)
    }
}

/// Schema entry describing how one field is labeled, sorted, and rendered.
pub struct Column {
    pub(crate) key: String,
    pub(crate) header: String,
    pub(crate) sortable: bool,
    pub(crate) formatter: Option<Box<dyn CellFormatter>>,
}

impl Column {
    /// Creates a sortable column for a field key with a header label.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            formatter: None,
        }
    }

    /// Sets whether header clicks wire this column to the sort toggle.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets a custom cell formatter.
    pub fn formatter(mut self, formatter: impl CellFormatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Returns the field key this column reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns `true` if this column participates in sort toggling.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Renders the cell text for a row.
    ///
    /// Absent fields pass [`Value::Null`] to the formatter and render as
    /// empty text by default; a missing key is not an error.
    pub fn cell_text(&self, row: &Row) -> String {
        let value = row.value_or_null(&self.key);
        match &self.formatter {
            Some(f) => f.format(value, row),
            None => value.to_string(),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}
