//! API Module
//!
//! HTTP client for the location-area endpoints, fronted by the response cache.

mod client;

pub use client::PokeClient;
