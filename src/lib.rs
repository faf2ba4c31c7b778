//! Pokedex - an interactive location-area browser
//!
//! Pages through the PokeAPI location-area listing and explores individual
//! areas, memoizing raw responses in an expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeClient;
pub use cache::TtlCache;
pub use config::Config;
pub use repl::{CommandRegistry, Repl};
