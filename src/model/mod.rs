mod board;
mod column;
mod config;
mod stage;
mod task;

pub use board::Board;
pub use column::Column;
pub use config::Config;
pub use stage::Stage;
pub use task::Task;
