use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;
use crate::model::Config;
use crate::tui::keymap;

#[derive(Parser, Debug)]
#[command(
    name = "stagehand",
    version,
    about = "A three-column kanban board in your terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty board instead of example tasks
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the board (default)
    Board,

    /// Print the effective configuration as JSON
    Config,

    /// Print the keyboard reference
    Keys,
}

pub fn config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn keys() -> Result<()> {
    println!("stagehand — Keyboard Reference");
    println!();
    for (key, action) in keymap::reference() {
        println!("  {key:<16}{action}");
    }
    Ok(())
}
