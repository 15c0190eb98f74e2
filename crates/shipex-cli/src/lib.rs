mod args;
mod commands;
pub mod config;
mod logging;
pub mod types;

pub use args::Cli;
pub use commands::run;
