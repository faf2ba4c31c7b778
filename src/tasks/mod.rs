//! Background Tasks Module
//!
//! # Tasks
//! - Reaper: sweeps expired cache entries once per cache interval

mod reaper;

pub use reaper::spawn_reaper;
