use engine_input::{Key, MouseButton};

/// Typed window event, produced from native events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Resized { width: u32, height: u32 },
    Moved { x: i32, y: i32 },
    CursorMoved { x: f64, y: f64 },
    /// Carries the cursor position at the time of the press or release.
    MouseButton {
        button: MouseButton,
        pressed: bool,
        x: f64,
        y: f64,
    },
    Key { key: Key, pressed: bool },
    FocusLost,
    Closed,
}
