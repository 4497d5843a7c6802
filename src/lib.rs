pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod tui;
