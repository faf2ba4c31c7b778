//! REPL Module
//!
//! Line-oriented shell for browsing location areas.

mod commands;
mod input;
mod shell;

pub use commands::{Action, Command, CommandRegistry};
pub use input::clean_input;
pub use shell::{Flow, Repl, Reply, Session, PROMPT};
