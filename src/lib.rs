//! Climate migration risk scoring.
//!
//! Pipeline: climate risk sub-score -> migration risk aggregation -> tier
//! classification -> recommendation lookup, plus a trend analyzer over
//! observation histories. Everything here is synchronous and performs no I/O
//! apart from configuration loading.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::types::*;
