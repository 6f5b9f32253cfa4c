//! Terminal front end for the tabular engine

pub mod buffer;
pub mod event;
pub mod terminal;
pub mod widget;

pub use buffer::{Buffer, Cell, TextStyle};
pub use event::{Event, Key, Modifiers, MouseButton, translate};
pub use terminal::Terminal;
pub use widget::{EMPTY_PLACEHOLDER, TableEvent, TableWidget};
