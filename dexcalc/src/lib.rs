pub mod config;
pub mod coverage;
pub mod error;
pub mod evs;
pub mod speed;
pub mod spreads;
pub mod stats;
pub mod synergy;
pub mod types;

pub use dexcalc_data::*;
