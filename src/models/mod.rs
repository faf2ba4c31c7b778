//! Response models for the location-area API
//!
//! Only the fields the REPL prints are decoded; everything else in the
//! payload is ignored.

pub mod responses;

pub use responses::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
