//! CLI layer: command definitions and handlers

pub mod commands;
pub mod handlers;

pub use commands::Cli;
pub use commands::Commands;
pub use handlers::*;
