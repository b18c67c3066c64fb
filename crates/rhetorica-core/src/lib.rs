//! Rhetorica Core - Domain types shared across the analysis pipeline.

mod types;

pub use types::*;
