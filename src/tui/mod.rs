mod app;
mod form;
pub mod keymap;
mod ui;

pub use app::{App, CrosstermEvents, EventSource, Screen, run_loop, run_tui};
pub use form::{Field, TaskForm, TextField};
pub use keymap::Msg;
