//! Ratatui front-end: a striped credential table with a filter box, modal
//! add/edit form, delete confirmation and copy menu.

mod app;
mod clipboard;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use clipboard::{Clipboard, TerminalClipboard};
pub use terminal::run_app;
