use tabular_lib::engine::sort::Direction;
use tabular_lib::model::{Row, Value};
use tabular_lib::schema::Column;
use tabular_lib::table::{Density, TableState};

fn listing_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Product"),
        Column::new("stock", "Stock"),
        Column::new("actions", "Actions").sortable(false),
    ]
}

/// 23 rows named item-00..item-22 with stock equal to their index.
fn listing_rows() -> Vec<Row> {
    (0..23)
        .map(|i| {
            Row::new()
                .set("name", format!("item-{i:02}"))
                .set("stock", i as i64)
        })
        .collect()
}

fn table() -> TableState {
    let mut table = TableState::new(listing_columns());
    table.set_rows(listing_rows());
    table
}

// ============================================================================
// Pagination scenario: 23 rows, page size 10
// ============================================================================

#[test]
fn test_three_pages_of_23_rows() {
    let mut table = table();
    assert_eq!(table.total_pages(), 3);

    let page1: Vec<String> = table.visible().iter().map(|r| r.display("name")).collect();
    assert_eq!(page1.first().unwrap(), "item-00");
    assert_eq!(page1.last().unwrap(), "item-09");

    table.next_page();
    let page2: Vec<String> = table.visible().iter().map(|r| r.display("name")).collect();
    assert_eq!(page2.first().unwrap(), "item-10");
    assert_eq!(page2.last().unwrap(), "item-19");

    table.next_page();
    let page3: Vec<String> = table.visible().iter().map(|r| r.display("name")).collect();
    assert_eq!(page3.len(), 3);
    assert_eq!(page3.last().unwrap(), "item-22");

    // Boundary no-op.
    table.next_page();
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_footer_summary_text() {
    let mut table = table();
    assert_eq!(table.footer().to_string(), "Showing 1 to 10 of 23 entries");
    table.last_page();
    assert_eq!(table.footer().to_string(), "Showing 21 to 23 of 23 entries");
}

#[test]
fn test_footer_for_empty_result() {
    let mut table = table();
    table.set_query("x-no-such-item");
    assert!(table.is_empty());
    assert_eq!(table.total_pages(), 1);
    assert_eq!(table.footer().to_string(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_filter_shrink_clamps_page() {
    let mut table = table();
    table.last_page();
    assert_eq!(table.current_page(), 3);
    // Only item-00..item-09 contain "item-0".
    table.set_query("item-0");
    assert_eq!(table.total_pages(), 1);
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.visible().len(), 10);
}

#[test]
fn test_pagination_disabled_shows_everything() {
    let mut table = TableState::new(listing_columns()).without_pagination();
    table.set_rows(listing_rows());
    assert_eq!(table.visible().len(), 23);
    assert_eq!(table.total_pages(), 1);
}

// ============================================================================
// Sorting through the header toggle
// ============================================================================

#[test]
fn test_header_toggle_asc_then_desc() {
    let mut table = table();
    table.toggle_sort("stock");
    assert_eq!(table.visible()[0].display("stock"), "0");

    table.toggle_sort("stock");
    assert_eq!(table.visible()[0].display("stock"), "22");

    let header = table.header();
    assert_eq!(header[1].sort, Some(Direction::Desc));
    assert_eq!(header[0].sort, None);
}

#[test]
fn test_switching_column_resets_to_asc() {
    let mut table = table();
    table.toggle_sort("stock");
    table.toggle_sort("stock");
    table.toggle_sort("name");
    assert_eq!(table.sort().unwrap().key(), "name");
    assert_eq!(table.sort().unwrap().direction(), Direction::Asc);
}

#[test]
fn test_non_sortable_column_ignores_toggle() {
    let mut table = table();
    table.toggle_sort("actions");
    assert!(table.sort().is_none());
    assert!(!table.header()[2].sortable);
}

#[test]
fn test_sort_applies_before_paging() {
    let mut table = table();
    table.toggle_sort("stock");
    table.toggle_sort("stock"); // desc
    table.next_page();
    // Second page of the descending order: stocks 12..=3.
    assert_eq!(table.visible()[0].display("stock"), "12");
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selection_requires_enablement() {
    let mut table = table();
    table.toggle_row(0);
    assert!(table.selected_indices().is_empty());
}

#[test]
fn test_toggle_all_covers_current_page_only() {
    let mut table = TableState::new(listing_columns()).selectable(true);
    table.set_rows(listing_rows());
    table.last_page();
    table.toggle_all();
    // Last page holds 3 rows.
    assert_eq!(table.selected_indices(), vec![0, 1, 2]);
    table.toggle_all();
    assert!(table.selected_indices().is_empty());
}

#[test]
fn test_selected_rows_returns_full_rows() {
    let mut table = TableState::new(listing_columns()).selectable(true);
    table.set_rows(listing_rows());
    table.toggle_row(4);
    let rows = table.selected_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].display("name"), "item-04");
}

#[test]
fn test_selection_cleared_when_visible_set_changes() {
    let mut table = TableState::new(listing_columns()).selectable(true);
    table.set_rows(listing_rows());
    table.toggle_row(0);

    table.next_page();
    assert!(table.selected_indices().is_empty());

    table.toggle_row(1);
    table.set_query("item-1");
    assert!(table.selected_indices().is_empty());

    table.set_query("");
    table.toggle_row(2);
    table.toggle_sort("stock");
    assert!(table.selected_indices().is_empty());
}

// ============================================================================
// Cells and formatters
// ============================================================================

#[test]
fn test_missing_key_renders_empty_cell() {
    let mut table = TableState::new(vec![
        Column::new("name", "Product"),
        Column::new("ghost", "Ghost"),
    ]);
    table.set_rows(vec![Row::new().set("name", "Paddy")]);
    assert_eq!(table.body(), vec![vec!["Paddy".to_string(), String::new()]]);
}

#[test]
fn test_custom_formatter_sees_value_and_row() {
    let mut table = TableState::new(vec![
        Column::new("stock", "Stock").formatter(|v: &Value, row: &Row| {
            format!("{} {}", v, row.display("unit"))
        }),
    ]);
    table.set_rows(vec![Row::new().set("stock", 40i64).set("unit", "kg")]);
    assert_eq!(table.body(), vec![vec!["40 kg".to_string()]]);
}

#[test]
fn test_row_click_yields_full_row() {
    let mut table = table();
    table.toggle_sort("stock");
    table.toggle_sort("stock"); // desc
    let clicked = table.row_at(0).unwrap();
    assert_eq!(clicked.display("name"), "item-22");
    assert!(table.row_at(99).is_none());
}

// ============================================================================
// Density and ingestion
// ============================================================================

#[test]
fn test_density_does_not_affect_data() {
    let mut table = table();
    let before = table.footer();
    table.set_density(Density::Compact);
    table.cycle_density();
    assert_eq!(table.current_density(), Density::Comfortable);
    assert_eq!(table.footer(), before);
}

#[test]
fn test_rows_from_fetched_json() {
    let payload = serde_json::json!([
        { "name": "Sona Masoori", "price": 52, "organic": true },
        { "name": "Desi Cow Ghee", "price": 710, "organic": false },
    ]);
    let rows: Vec<Row> = payload
        .as_array()
        .unwrap()
        .iter()
        .map(|v| Row::from(v.clone()))
        .collect();

    let mut table = TableState::new(vec![
        Column::new("name", "Product"),
        Column::new("price", "Price"),
    ]);
    table.set_rows(rows);
    table.set_query("ghee");
    assert_eq!(table.visible().len(), 1);
    assert_eq!(table.visible()[0].get_i64("price").unwrap(), Some(710));
}
