//! Window: owns the native window and the GPU context behind it.
//!
//! Native events are translated into [`WindowEvent`] and dispatched to one
//! optional callback before being handed to the caller.
//!
//! # Invariants
//! - Width/height always reflect the last resize seen.
//! - The event-callback slot holds at most one callback; setting replaces.
//! - Destroying twice is a no-op.

mod error;
mod event;
mod platform;
mod state;
mod window;

pub use error::WindowError;
pub use event::WindowEvent;
pub use platform::{map_key, map_mouse_button};
pub use state::{EventCallback, Lifecycle, WindowState};
pub use window::{SurfaceFrame, Window};
