//! Editor UI: sliders, color pickers and the File menu.
//!
//! # Invariants
//! - Widgets read a snapshot; changes leave as [`engine_runtime::Intent`]s.
//! - Only File > Exit has an action. New/Open/Save are stubs.

mod panel;

pub use panel::{EditorPanel, clip_ranges};
