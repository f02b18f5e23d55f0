use crate::types::{Key, MouseButton};
use glam::Vec2;
use std::collections::HashSet;

/// Current "is down" state for keys and mouse buttons, plus the cursor.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: Key, pressed: bool) {
        if key == Key::Other {
            return;
        }
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_down.insert(button);
        } else {
            self.buttons_down.remove(&button);
        }
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x as f32, y as f32);
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Cursor position in physical pixels, origin top-left.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Drop every held key and button. Used when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }
}
