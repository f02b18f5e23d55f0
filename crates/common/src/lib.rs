//! Shared types for the engine editor workspace.
//!
//! # Invariants
//! - A `Viewport` never reports a zero-height aspect ratio.
//! - Every fatal startup failure maps to exactly one `EngineError` variant.

mod error;
mod types;

pub use error::EngineError;
pub use types::{Rgba, Viewport};
