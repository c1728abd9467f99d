//! CLI Module
//!
//! The interactive shell: session state, command handlers and the REPL.
//!
//! # Commands
//! - `help`, `exit`
//! - `map` / `mapb` - Page forward/back through locations
//! - `explore <area>` - List pokemon found in an area
//! - `catch <name>`, `inspect <name>`, `pokedex` - The caught collection
//! - `cache` - Response cache statistics

mod app;
pub mod commands;
pub mod repl;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
pub use commands::{Command, CommandInfo, Flow, COMMANDS};
pub use repl::{clean_input, run, PROMPT};
