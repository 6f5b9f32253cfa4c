//! Sort stage

use crate::model::Row;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort: one column key and a direction.
///
/// `None` at the [`TableState`](crate::table::TableState) level means no
/// sort is applied and the filtered order passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub(crate) key: String,
    pub(crate) direction: Direction,
}

impl SortOrder {
    /// Creates an ascending sort on a field.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Desc,
        }
    }

    /// Returns the sorted field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies the header-click toggle rule.
    ///
    /// Clicking the column already sorted flips its direction; clicking a
    /// different column resets to ascending.
    pub fn toggled(current: Option<&SortOrder>, key: &str) -> SortOrder {
        match current {
            Some(order) if order.key == key => SortOrder {
                key: order.key.clone(),
                direction: order.direction.reversed(),
            },
            _ => SortOrder::asc(key),
        }
    }
}

/// Orders filtered row indices by the active sort, in place.
///
/// The sort is stable: rows with equal key values keep their relative
/// filtered order regardless of direction. Absent keys compare as null and
/// gather at the ascending front. No descriptor leaves the order untouched.
pub fn sort_indices(rows: &[Row], indices: &mut [usize], order: Option<&SortOrder>) {
    let Some(order) = order else {
        return;
    };

    indices.sort_by(|&a, &b| {
        let ord = rows[a]
            .value_or_null(&order.key)
            .compare(rows[b].value_or_null(&order.key));
        match order.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_key_flips_direction() {
        let order = SortOrder::asc("price");
        assert_eq!(SortOrder::toggled(Some(&order), "price"), SortOrder::desc("price"));
    }

    #[test]
    fn toggle_other_key_resets_to_asc() {
        let order = SortOrder::desc("price");
        assert_eq!(SortOrder::toggled(Some(&order), "name"), SortOrder::asc("name"));
    }

    #[test]
    fn absent_keys_sort_first_ascending() {
        let rows = vec![
            Row::new().set("stock", 5i64),
            Row::new(),
            Row::new().set("stock", 1i64),
        ];
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, Some(&SortOrder::asc("stock")));
        assert_eq!(indices, vec![1, 2, 0]);
    }
}
