use crate::delta::InputDelta;
use crate::state::InputState;
use crate::types::{Key, MouseButton};
use glam::Vec2;

/// Step sizes for keyboard and mouse-drag camera control.
///
/// Steps are applied once per frame regardless of frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfig {
    /// Translation per frame for W/S, A/D and Q/E.
    pub move_step: f32,
    /// Pitch/yaw degrees per frame for the arrow keys.
    pub rotate_step: f32,
    /// Roll degrees per frame for O/P.
    pub roll_step: f32,
    /// Screen pixels per world unit when panning.
    pub pan_divisor: f32,
    /// Screen pixels per degree when orbiting.
    pub orbit_divisor: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_step: 0.005,
            rotate_step: 0.005,
            roll_step: 0.05,
            pan_divisor: 100.0,
            orbit_divisor: 5.0,
        }
    }
}

/// Turns held input into per-frame camera deltas.
///
/// The drag anchor is the cursor position at the last mouse button event or
/// the last processed drag frame, whichever came later.
#[derive(Debug, Clone, Default)]
pub struct InputBridge {
    config: InputConfig,
    anchor: Vec2,
}

impl InputBridge {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            anchor: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Reset the drag anchor. Called for both press and release.
    pub fn on_mouse_button(&mut self, x: f64, y: f64) {
        self.anchor = Vec2::new(x as f32, y as f32);
    }

    /// Compute this frame's delta and advance the drag anchor.
    pub fn update(&mut self, input: &InputState) -> InputDelta {
        let step = self.config.move_step;
        let turn = self.config.rotate_step;
        let roll = self.config.roll_step;
        let mut delta = InputDelta::default();

        let axis = |pos: Key, neg: Key, amount: f32| -> f32 {
            let mut v = 0.0;
            if input.is_key_pressed(pos) {
                v += amount;
            }
            if input.is_key_pressed(neg) {
                v -= amount;
            }
            v
        };

        delta.movement.x = axis(Key::W, Key::S, step);
        delta.movement.y = axis(Key::D, Key::A, step);
        delta.movement.z = axis(Key::E, Key::Q, step);

        delta.rotation.x = axis(Key::P, Key::O, roll);
        delta.rotation.y = axis(Key::Down, Key::Up, turn);
        delta.rotation.z = axis(Key::Left, Key::Right, turn);

        if input.is_button_pressed(MouseButton::Right) {
            let cursor = input.cursor();
            if input.is_button_pressed(MouseButton::Left) {
                delta.pan.x = (cursor.x - self.anchor.x) / self.config.pan_divisor;
                delta.pan.y = (self.anchor.y - cursor.y) / self.config.pan_divisor;
            } else {
                delta.rotation.z += (self.anchor.x - cursor.x) / self.config.orbit_divisor;
                delta.rotation.y -= (self.anchor.y - cursor.y) / self.config.orbit_divisor;
            }
            self.anchor = cursor;
        }

        if !delta.is_zero() {
            tracing::trace!(?delta, "input delta");
        }
        delta
    }
}
