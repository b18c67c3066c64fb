//! Rhetorica Gemini - Gemini API integration.
//!
//! This crate provides an async client for the Gemini REST API:
//! listing models, picking a usable one, and submitting a prompt
//! plus sampled video frames for multimodal analysis.

mod client;
mod error;
mod select;
mod types;

pub use client::GeminiClient;
pub use error::{GeminiError, GeminiResult};
pub use select::{choose_model, select_model, ModelChoice};
pub use types::*;
