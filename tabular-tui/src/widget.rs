//! Table widget: paints a `TableState` and feeds input back into it.

use log::debug;
use tabular_lib::engine::sort::Direction;
use tabular_lib::model::Row;
use tabular_lib::table::TableState;

use crate::buffer::{Buffer, TextStyle};
use crate::event::{Event, Key, MouseButton};

/// Line shown in place of the body when the filtered collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No data found";

/// Outcome of an input event the host cares about.
///
/// Row events carry the full row object, never a display index.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Enter on the cursor row, or a click on a body row.
    RowActivated(Row),
}

/// Terminal widget over a [`TableState`].
///
/// Fixed chrome: line 0 is the search box, line 1 the header, the footer
/// occupies the last line, and body rows fill the space between with the
/// density gap of the table. The widget holds only view state (the keyboard
/// cursor); all data state lives in the `TableState`.
///
/// Key bindings: printable characters edit the query (`Esc` clears it,
/// `Backspace` deletes), `Up`/`Down` move the cursor, `Left`/`Right` and
/// `PageUp`/`PageDown` change page, `Home`/`End` jump to the first/last
/// page, `Insert` toggles the cursor row's mark, `ctrl-a` toggles the whole
/// page, `Tab` cycles density, `Enter` activates the cursor row. Clicking a
/// sortable header cell toggles its sort.
#[derive(Debug, Default)]
pub struct TableWidget {
    cursor: usize,
    /// Size of the last rendered buffer; click hit-testing must use the
    /// same geometry the user saw.
    last_width: u16,
    last_height: u16,
}

/// Selection gutter width when the table is selectable: `"[x] "`.
const GUTTER: u16 = 4;

impl TableWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The keyboard cursor as a page-relative row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Paints the full table chrome into the buffer.
    pub fn render(&mut self, state: &TableState, buf: &mut Buffer) {
        buf.clear();
        self.last_width = buf.width();
        self.last_height = buf.height();
        let width = buf.width();

        // Search line.
        buf.put_str(
            0,
            0,
            &format!("Search: {}", state.query()),
            width,
            TextStyle::new(),
        );

        self.render_header(state, buf);
        self.render_body(state, buf);

        // Footer on the last line.
        let footer = state.footer();
        let line = format!(
            "{}  ·  page {}/{}",
            footer, footer.page, footer.total_pages
        );
        buf.put_str(0, buf.height().saturating_sub(1), &line, width, TextStyle::new().dim());
    }

    fn render_header(&self, state: &TableState, buf: &mut Buffer) {
        let style = TextStyle::new().bold();
        let gutter = self.gutter(state);
        if gutter > 0 {
            buf.put_str(0, 1, "[ ]", gutter, style);
        }
        for (cell, (x, w)) in state.header().iter().zip(self.column_spans(state, buf.width())) {
            let label = match cell.sort {
                Some(Direction::Asc) => format!("{} ▲", cell.label),
                Some(Direction::Desc) => format!("{} ▼", cell.label),
                None => cell.label.clone(),
            };
            let style = if cell.sortable {
                style.underline()
            } else {
                style
            };
            buf.put_str(x, 1, &label, w.saturating_sub(1), style);
        }
    }

    fn render_body(&self, state: &TableState, buf: &mut Buffer) {
        if state.is_empty() {
            buf.put_str(2, 3, EMPTY_PLACEHOLDER, buf.width(), TextStyle::new().dim());
            return;
        }

        let gap = state.current_density().row_gap();
        let gutter = self.gutter(state);
        let spans = self.column_spans(state, buf.width());
        let last_line = buf.height().saturating_sub(1);

        for (i, cells) in state.body().iter().enumerate() {
            let y = 2 + (i as u16) * (1 + gap);
            if y >= last_line {
                break;
            }
            if gutter > 0 {
                let mark = if state.is_selected(i) { "[x]" } else { "[ ]" };
                buf.put_str(0, y, mark, gutter, TextStyle::new());
            }
            for (text, &(x, w)) in cells.iter().zip(spans.iter()) {
                buf.put_str(x, y, text, w.saturating_sub(1), TextStyle::new());
            }
            if i == self.cursor {
                buf.style_line(y, TextStyle::new().reverse());
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Routes one input event into the table state.
    pub fn handle_event(&mut self, state: &mut TableState, event: &Event) -> Option<TableEvent> {
        match event {
            Event::Key { key, modifiers } => self.handle_key(state, *key, modifiers.ctrl),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(state, *x, *y),
            _ => None,
        }
    }

    fn handle_key(&mut self, state: &mut TableState, key: Key, ctrl: bool) -> Option<TableEvent> {
        match key {
            Key::Char('a') if ctrl => {
                state.toggle_all();
            }
            Key::Char(c) if !ctrl && c != '\0' => {
                let mut query = state.query().to_string();
                query.push(c);
                state.set_query(query);
                self.cursor = 0;
            }
            Key::Backspace => {
                let mut query = state.query().to_string();
                query.pop();
                state.set_query(query);
                self.cursor = 0;
            }
            Key::Escape => {
                state.set_query("");
                self.cursor = 0;
            }
            Key::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Key::Down => {
                let max = state.visible().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
            }
            Key::Left | Key::PageUp => {
                state.prev_page();
                self.cursor = 0;
            }
            Key::Right | Key::PageDown => {
                state.next_page();
                self.cursor = 0;
            }
            Key::Home => {
                state.first_page();
                self.cursor = 0;
            }
            Key::End => {
                state.last_page();
                self.cursor = 0;
            }
            Key::Insert => {
                state.toggle_row(self.cursor);
            }
            Key::Tab => {
                state.cycle_density();
            }
            Key::Enter => {
                if let Some(row) = state.row_at(self.cursor) {
                    return Some(TableEvent::RowActivated(row.clone()));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, state: &mut TableState, x: u16, y: u16) -> Option<TableEvent> {
        if y == 1 {
            // Header row: toggle sort on the clicked column.
            let key = self
                .column_spans(state, self.last_width)
                .into_iter()
                .zip(state.header())
                .find(|((cx, cw), _)| x >= *cx && x < *cx + *cw)
                .map(|(_, cell)| cell.key);
            if let Some(key) = key {
                debug!("header click on column {key}");
                state.toggle_sort(&key);
            }
            return None;
        }

        let index = self.row_index_at(state, y)?;
        self.cursor = index;
        if self.gutter(state) > 0 && x < GUTTER {
            state.toggle_row(index);
            return None;
        }
        state
            .row_at(index)
            .cloned()
            .map(TableEvent::RowActivated)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn gutter(&self, state: &TableState) -> u16 {
        if state.is_selectable() { GUTTER } else { 0 }
    }

    /// Equal-width column spans `(x, width)` after the selection gutter.
    fn column_spans(&self, state: &TableState, total: u16) -> Vec<(u16, u16)> {
        let count = state.columns().len().max(1) as u16;
        let gutter = self.gutter(state);
        let usable = total.saturating_sub(gutter);
        let per = (usable / count).max(1);
        (0..count).map(|i| (gutter + i * per, per)).collect()
    }

    /// Maps a screen line back to a page-relative row index, honoring the
    /// density gap. Lines at or below the footer map to nothing, even when
    /// the page holds more rows than the buffer could paint.
    fn row_index_at(&self, state: &TableState, y: u16) -> Option<usize> {
        let last_line = self.last_height.saturating_sub(1);
        if y < 2 || y >= last_line {
            return None;
        }
        let stride = 1 + state.current_density().row_gap();
        let offset = y - 2;
        if offset % stride != 0 {
            return None;
        }
        let index = (offset / stride) as usize;
        (index < state.visible().len()).then_some(index)
    }
}
