//! Command registry.
//!
//! The registry is built once at startup and handed to the REPL; there is no
//! process-wide command table.

use std::collections::BTreeMap;

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Help,
    Map,
    MapBack,
    Explore,
}

/// A named REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

/// Lookup table from command name to command.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Creates the registry with every built-in command.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("exit", "Exit the Pokedex", Action::Exit);
        registry.register("help", "Displays a help message", Action::Help);
        registry.register(
            "map",
            "Displays the next page of location areas in the Pokemon world",
            Action::Map,
        );
        registry.register(
            "mapb",
            "Displays the previous page of location areas (go back a page)",
            Action::MapBack,
        );
        registry.register(
            "explore",
            "Explore a location area by name: explore <area>",
            Action::Explore,
        );
        registry
    }

    /// Creates a registry with no commands.
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Adds a command, replacing any command already registered under `name`.
    pub fn register(&mut self, name: &'static str, description: &'static str, action: Action) {
        self.commands.insert(
            name,
            Command {
                name,
                description,
                action,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Iterates commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
