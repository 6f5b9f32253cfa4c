use tabular_lib::engine::filter::filter_indices;
use tabular_lib::engine::page::Pager;
use tabular_lib::engine::selection::SelectionState;
use tabular_lib::engine::sort::{SortOrder, sort_indices};
use tabular_lib::model::Row;

fn produce_rows() -> Vec<Row> {
    vec![
        Row::new().set("name", "Alphonso Mango").set("stock", 140i64),
        Row::new().set("name", "Basmati Rice").set("stock", 80i64),
        Row::new().set("name", "Red Onion").set("stock", 140i64),
        Row::new().set("name", "Green Chilli").set("stock", 12i64),
        Row::new().set("name", "Turmeric Powder").set("stock", 55i64),
    ]
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn test_filter_is_case_insensitive() {
    let rows = produce_rows();
    assert_eq!(filter_indices(&rows, "MANGO"), vec![0]);
    assert_eq!(filter_indices(&rows, "mango"), vec![0]);
}

#[test]
fn test_filter_matches_substring_in_any_field() {
    let rows = produce_rows();
    // "14" only appears in the stock field.
    assert_eq!(filter_indices(&rows, "14"), vec![0, 2]);
}

#[test]
fn test_empty_query_returns_all_in_order() {
    let rows = produce_rows();
    assert_eq!(filter_indices(&rows, ""), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_filter_empty_collection() {
    assert!(filter_indices(&[], "anything").is_empty());
}

#[test]
fn test_filter_no_match() {
    let rows = produce_rows();
    assert!(filter_indices(&rows, "zucchini").is_empty());
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort_ascending_by_number() {
    let rows = produce_rows();
    let mut indices = vec![0, 1, 2, 3, 4];
    sort_indices(&rows, &mut indices, Some(&SortOrder::asc("stock")));
    assert_eq!(indices, vec![3, 4, 1, 0, 2]);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let rows = produce_rows();
    let mut indices = vec![0, 1, 2, 3, 4];
    // Rows 0 and 2 both have stock=140; row 0 came first and must stay first.
    sort_indices(&rows, &mut indices, Some(&SortOrder::asc("stock")));
    let pos0 = indices.iter().position(|&i| i == 0).unwrap();
    let pos2 = indices.iter().position(|&i| i == 2).unwrap();
    assert!(pos0 < pos2);

    // Same holds descending: ties keep their relative filtered order.
    let mut indices = vec![0, 1, 2, 3, 4];
    sort_indices(&rows, &mut indices, Some(&SortOrder::desc("stock")));
    let pos0 = indices.iter().position(|&i| i == 0).unwrap();
    let pos2 = indices.iter().position(|&i| i == 2).unwrap();
    assert!(pos0 < pos2);
}

#[test]
fn test_desc_reverses_asc_for_strict_order() {
    let rows: Vec<Row> = (0..7)
        .map(|i| Row::new().set("n", (i * 3 + 1) as i64))
        .collect();
    let mut asc = vec![6, 2, 4, 0, 1, 5, 3];
    let mut desc = asc.clone();
    sort_indices(&rows, &mut asc, Some(&SortOrder::asc("n")));
    sort_indices(&rows, &mut desc, Some(&SortOrder::desc("n")));
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_no_descriptor_passes_through() {
    let rows = produce_rows();
    let mut indices = vec![4, 2, 0];
    sort_indices(&rows, &mut indices, None);
    assert_eq!(indices, vec![4, 2, 0]);
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn test_pages_cover_collection_exactly_once() {
    for page_size in 1..=8 {
        let mut pager = Pager::new(page_size);
        let len = 23;
        let mut seen = Vec::new();
        pager.first(len);
        loop {
            let (start, end) = pager.window(len);
            seen.extend(start..end);
            if !pager.next(len) {
                break;
            }
        }
        assert_eq!(seen, (0..len).collect::<Vec<_>>(), "page_size {page_size}");
    }
}

#[test]
fn test_jump_is_bounded() {
    let mut pager = Pager::new(10);
    pager.go_to(99, 23);
    assert_eq!(pager.effective_page(23), 3);
    pager.go_to(0, 23);
    assert_eq!(pager.effective_page(23), 1);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_toggle_row_flips_membership() {
    let mut sel = SelectionState::new();
    sel.toggle_row(3, 10);
    assert!(sel.is_selected(3));
    sel.toggle_row(3, 10);
    assert!(!sel.is_selected(3));
}

#[test]
fn test_selected_is_sorted() {
    let mut sel = SelectionState::new();
    sel.toggle_row(4, 10);
    sel.toggle_row(1, 10);
    sel.toggle_row(2, 10);
    assert_eq!(sel.selected(), vec![1, 2, 4]);
}

#[test]
fn test_clear_drops_all_marks() {
    let mut sel = SelectionState::new();
    sel.toggle_all(5);
    sel.clear();
    assert!(sel.is_empty());
}
