use std::fs::File;
use std::time::Duration;

use rust_decimal::Decimal;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabular_lib::model::{Row, Value};
use tabular_lib::schema::Column;
use tabular_lib::table::TableState;
use tabular_tui::widget::{TableEvent, TableWidget};
use tabular_tui::{Buffer, Event, Key, Terminal, translate};

fn product_rows() -> Vec<Row> {
    let products: &[(&str, &str, i64, i64, bool)] = &[
        ("Alphonso Mango", "Fruits", 14050, 140, true),
        ("Basmati Rice", "Grains", 5200, 820, true),
        ("Red Onion", "Vegetables", 2400, 455, true),
        ("Green Chilli", "Vegetables", 6000, 12, false),
        ("Turmeric Powder", "Spices", 18500, 55, true),
        ("Desi Cow Ghee", "Dairy", 71000, 34, true),
        ("Sona Masoori", "Grains", 4600, 610, true),
        ("Black Pepper", "Spices", 52000, 8, false),
        ("Cold-Pressed Groundnut Oil", "Oils", 32000, 72, true),
        ("Jaggery Block", "Sweeteners", 9000, 130, true),
        ("Tender Coconut", "Fruits", 4500, 260, true),
        ("Curry Leaves", "Herbs", 1500, 40, false),
        ("Moong Dal", "Pulses", 11800, 310, true),
        ("Toor Dal", "Pulses", 12900, 280, true),
        ("Cashew W320", "Dry Fruits", 78000, 25, true),
    ];

    products
        .iter()
        .map(|&(name, category, price_paise, stock, in_stock)| {
            Row::new()
                .set("name", name)
                .set("category", category)
                .set("price", Decimal::new(price_paise, 2))
                .set("stock", stock)
                .set("in_stock", in_stock)
        })
        .collect()
}

fn listing_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Product"),
        Column::new("category", "Category"),
        Column::new("price", "Price").formatter(|v: &Value, _: &Row| format!("₹{v}")),
        Column::new("stock", "Stock"),
        Column::new("in_stock", "Status")
            .sortable(false)
            .formatter(|v: &Value, _: &Row| {
                match v {
                    Value::Bool(true) => "available",
                    Value::Bool(false) => "out of stock",
                    _ => "unknown",
                }
                .to_string()
            }),
    ]
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut table = TableState::new(listing_columns())
        .page_size(8)
        .selectable(true);
    table.set_rows(product_rows());

    let mut term = Terminal::new()?;
    let mut widget = TableWidget::new();
    let mut status = String::new();

    loop {
        let (width, height) = term.size()?;
        let mut buf = Buffer::new(width, height);
        widget.render(&table, &mut buf);
        if !status.is_empty() {
            buf.put_str(
                0,
                height.saturating_sub(2),
                &status,
                width,
                tabular_tui::TextStyle::new().dim(),
            );
        }
        term.draw(&buf)?;

        for raw in term.poll(Some(Duration::from_millis(250)))? {
            let Some(event) = translate(&raw) else {
                continue;
            };
            // Ctrl-C / q-with-ctrl exits; plain chars belong to the query.
            if let Event::Key { key: Key::Char('c'), modifiers } = &event {
                if modifiers.ctrl {
                    return Ok(());
                }
            }
            if let Some(TableEvent::RowActivated(row)) = widget.handle_event(&mut table, &event) {
                status = format!("activated: {}", row.display("name"));
            }
        }
    }
}
