//! Runtime: the state the editor owns and the loop that advances it.
//!
//! # Invariants
//! - Camera and scene parameters are owned by one [`EditorState`], passed by
//!   `&mut` into the loop. No globals.
//! - UI intents emitted in tick N are applied at the start of tick N+1,
//!   before the camera update.
//! - The loop reaches `ShuttingDown` at most once.

mod intent;
mod render_loop;
mod state;

pub use intent::Intent;
pub use render_loop::{LoopError, LoopState, RenderLoop, ShutdownReason};
pub use state::EditorState;
