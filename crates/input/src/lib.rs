//! Input bridge: held keys and mouse drags become per-frame camera deltas.
//!
//! # Invariants
//! - Deltas are fixed-step per frame, never scaled by elapsed time.
//! - A mouse button event (press or release) resets the drag anchor.
//! - This crate knows nothing about the windowing backend; the window crate
//!   maps native codes onto [`Key`] and [`MouseButton`].

pub mod bridge;
pub mod delta;
pub mod state;
pub mod types;

pub use bridge::{InputBridge, InputConfig};
pub use delta::InputDelta;
pub use state::InputState;
pub use types::{Key, MouseButton};
