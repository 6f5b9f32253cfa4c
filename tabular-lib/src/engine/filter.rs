//! Free-text filter stage

use crate::model::Row;

/// Returns the indices of rows matching a free-text query.
///
/// A row passes when any field's string form contains the query,
/// case-insensitively. The empty query is an identity pass: every index is
/// returned in original order. Never fails.
pub fn filter_indices(rows: &[Row], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Checks a single row against an already lower-cased needle.
fn row_matches(row: &Row, needle: &str) -> bool {
    row.fields()
        .values()
        .any(|value| value.to_string().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_field() {
        let rows = vec![
            Row::new().set("name", "Tomato").set("unit", "kg"),
            Row::new().set("name", "Onion").set("unit", "crate"),
        ];
        assert_eq!(filter_indices(&rows, "crate"), vec![1]);
    }

    #[test]
    fn coerces_non_string_values() {
        let rows = vec![
            Row::new().set("stock", 1405i64),
            Row::new().set("stock", 33i64),
        ];
        assert_eq!(filter_indices(&rows, "140"), vec![0]);
    }
}
