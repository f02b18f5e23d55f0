use crate::event::WindowEvent;
use engine_input::{Key, MouseButton};
use winit::event::{ElementState, KeyEvent, WindowEvent as NativeEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        _ => Key::Other,
    }
}

pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

/// Translate a native event. `cursor` is the last known cursor position,
/// attached to button events. Events the editor has no use for map to `None`.
pub(crate) fn translate(event: &NativeEvent, cursor: (f64, f64)) -> Option<WindowEvent> {
    let translated = match event {
        NativeEvent::Resized(size) => WindowEvent::Resized {
            width: size.width,
            height: size.height,
        },
        NativeEvent::Moved(pos) => WindowEvent::Moved { x: pos.x, y: pos.y },
        NativeEvent::CloseRequested => WindowEvent::Closed,
        NativeEvent::Focused(false) => WindowEvent::FocusLost,
        NativeEvent::CursorMoved { position, .. } => WindowEvent::CursorMoved {
            x: position.x,
            y: position.y,
        },
        NativeEvent::MouseInput { state, button, .. } => WindowEvent::MouseButton {
            button: map_mouse_button(*button),
            pressed: *state == ElementState::Pressed,
            x: cursor.0,
            y: cursor.1,
        },
        NativeEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } => WindowEvent::Key {
            key: map_key(*code),
            pressed: *state == ElementState::Pressed,
        },
        _ => return None,
    };
    Some(translated)
}
