use crate::intent::Intent;
use crate::state::EditorState;
use engine_common::Viewport;
use engine_input::{InputBridge, InputState};
use engine_render::FrameData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Init,
    Running,
    ShuttingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The native window was asked to close.
    CloseRequested,
    /// File > Exit in the menu bar.
    ExitMenu,
}

#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error("invalid render loop transition from {from:?} to {to:?}")]
    InvalidTransition { from: LoopState, to: LoopState },
}

/// Per-frame orchestration: `Init -> Running -> ShuttingDown`.
///
/// Each [`RenderLoop::tick`] applies last frame's UI intents, updates the
/// camera from input, runs the UI pass, and returns the frame to draw. The
/// caller draws it, renders the UI overlay, and presents.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    bridge: InputBridge,
    pending: Vec<Intent>,
    frame_count: u64,
    shutdown_reason: Option<ShutdownReason>,
}

impl RenderLoop {
    pub fn new(bridge: InputBridge) -> Self {
        Self {
            state: LoopState::Init,
            bridge,
            pending: Vec::new(),
            frame_count: 0,
            shutdown_reason: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn shutdown_reason(&self) -> Option<ShutdownReason> {
        self.shutdown_reason
    }

    /// Intents queued by the last UI pass, not yet applied.
    pub fn pending_intents(&self) -> &[Intent] {
        &self.pending
    }

    pub fn bridge_mut(&mut self) -> &mut InputBridge {
        &mut self.bridge
    }

    /// Enter the steady state. Only valid from `Init`.
    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.state != LoopState::Init {
            return Err(LoopError::InvalidTransition {
                from: self.state,
                to: LoopState::Running,
            });
        }
        self.state = LoopState::Running;
        tracing::info!("render loop running");
        Ok(())
    }

    /// Move to `ShuttingDown`. Returns `true` only for the first request.
    pub fn request_shutdown(&mut self, reason: ShutdownReason) -> bool {
        if self.state == LoopState::ShuttingDown {
            return false;
        }
        self.state = LoopState::ShuttingDown;
        self.shutdown_reason = Some(reason);
        self.pending.clear();
        tracing::info!(?reason, frames = self.frame_count, "render loop shutting down");
        true
    }

    /// Advance one frame. Returns `None` when not running, including when an
    /// `Exit` intent from the previous UI pass ends the loop.
    pub fn tick<F>(
        &mut self,
        editor: &mut EditorState,
        input: &InputState,
        viewport: Viewport,
        ui: F,
    ) -> Option<FrameData>
    where
        F: FnOnce(&EditorState) -> Vec<Intent>,
    {
        if self.state != LoopState::Running {
            return None;
        }

        for intent in std::mem::take(&mut self.pending) {
            if intent == Intent::Exit {
                self.request_shutdown(ShutdownReason::ExitMenu);
                return None;
            }
            editor.apply(&intent);
        }

        editor
            .camera
            .set_viewport_size(viewport.width, viewport.height);
        let delta = self.bridge.update(input);
        editor.apply_input(&delta);

        self.pending = ui(editor);

        self.frame_count += 1;
        Some(editor.frame(viewport))
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(InputBridge::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_input::{InputConfig, Key};
    use engine_render::{Camera, ProjectionMode, SceneParams};
    use glam::Vec3;

    fn running() -> RenderLoop {
        let mut rl = RenderLoop::new(InputBridge::new(InputConfig::default()));
        rl.start().unwrap();
        rl
    }

    fn no_ui(_: &EditorState) -> Vec<Intent> {
        Vec::new()
    }

    #[test]
    fn starts_in_init_and_runs_once() {
        let mut rl = RenderLoop::default();
        assert_eq!(rl.state(), LoopState::Init);
        rl.start().unwrap();
        assert!(rl.is_running());
        assert!(rl.start().is_err());
    }

    #[test]
    fn tick_before_start_yields_nothing() {
        let mut rl = RenderLoop::default();
        let mut editor = EditorState::default();
        let frame = rl.tick(&mut editor, &InputState::new(), Viewport::default(), no_ui);
        assert!(frame.is_none());
        assert_eq!(rl.frame_count(), 0);
    }

    #[test]
    fn forward_key_one_tick() {
        let mut rl = running();
        let mut editor = EditorState::new(
            Camera::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, ProjectionMode::Perspective),
            SceneParams::default(),
        );
        let mut input = InputState::new();
        input.set_key(Key::W, true);

        let frame = rl.tick(&mut editor, &input, Viewport::default(), no_ui).unwrap();
        assert!(editor.camera.position().abs_diff_eq(Vec3::new(0.005, 0.0, 2.0), 1e-6));
        assert_eq!(frame.camera_position, editor.camera.position());
    }

    #[test]
    fn intents_apply_on_next_tick() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();

        rl.tick(&mut editor, &input, Viewport::default(), |_| {
            vec![Intent::SetFieldOfView(90.0)]
        });
        assert_eq!(editor.camera.field_of_view(), 60.0);
        assert_eq!(rl.pending_intents(), &[Intent::SetFieldOfView(90.0)]);

        rl.tick(&mut editor, &input, Viewport::default(), no_ui);
        assert_eq!(editor.camera.field_of_view(), 90.0);
        assert!(rl.pending_intents().is_empty());
    }

    #[test]
    fn ui_sees_camera_after_input_update() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let mut input = InputState::new();
        input.set_key(Key::E, true);
        let start = editor.camera.position();

        let mut seen = None;
        rl.tick(&mut editor, &input, Viewport::default(), |state| {
            seen = Some(state.camera.position());
            Vec::new()
        });
        assert_eq!(seen, Some(start + Vec3::new(0.0, 0.0, 0.005)));
    }

    #[test]
    fn resize_reaches_next_projection() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();

        let wide = rl
            .tick(&mut editor, &input, Viewport::new(1600, 800), no_ui)
            .unwrap();
        let square = rl
            .tick(&mut editor, &input, Viewport::new(800, 800), no_ui)
            .unwrap();
        assert_eq!(square.viewport, Viewport::new(800, 800));
        assert!((editor.camera.aspect() - 1.0).abs() < 1e-6);
        assert_ne!(wide.projection, square.projection);
    }

    #[test]
    fn minimized_window_keeps_projection_finite() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();

        let shown = rl
            .tick(&mut editor, &input, Viewport::new(1600, 800), no_ui)
            .unwrap();
        let minimized = rl
            .tick(&mut editor, &input, Viewport::new(0, 0), no_ui)
            .unwrap();
        assert!(minimized.viewport.is_empty());
        assert!(minimized.projection.is_finite());
        assert_eq!(minimized.projection, shown.projection);
        assert_eq!(editor.camera.aspect(), 2.0);
    }

    #[test]
    fn exit_intent_shuts_down_once() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();

        rl.tick(&mut editor, &input, Viewport::default(), |_| vec![Intent::Exit]);
        assert!(rl.is_running());
        let frame = rl.tick(&mut editor, &input, Viewport::default(), no_ui);
        assert!(frame.is_none());
        assert_eq!(rl.state(), LoopState::ShuttingDown);
        assert_eq!(rl.shutdown_reason(), Some(ShutdownReason::ExitMenu));

        // A close event arriving afterwards does not transition again.
        assert!(!rl.request_shutdown(ShutdownReason::CloseRequested));
        assert_eq!(rl.shutdown_reason(), Some(ShutdownReason::ExitMenu));
    }

    #[test]
    fn close_event_shuts_down_once() {
        let mut rl = running();
        assert!(rl.request_shutdown(ShutdownReason::CloseRequested));
        assert!(!rl.request_shutdown(ShutdownReason::CloseRequested));
        assert!(!rl.request_shutdown(ShutdownReason::ExitMenu));
        assert_eq!(rl.shutdown_reason(), Some(ShutdownReason::CloseRequested));
    }

    #[test]
    fn intents_before_exit_are_applied() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();
        rl.tick(&mut editor, &input, Viewport::default(), |_| {
            vec![Intent::SetShininess(8.0), Intent::Exit]
        });
        rl.tick(&mut editor, &input, Viewport::default(), no_ui);
        assert_eq!(editor.scene.material.shininess, 8.0);
        assert!(!rl.is_running());
    }

    #[test]
    fn projection_checkbox_round_trip_is_bit_equal() {
        let mut rl = running();
        let mut editor = EditorState::default();
        let input = InputState::new();
        editor.camera.set_near_clip_plane(0.1);
        editor.camera.set_far_clip_plane(100.0);

        let before = rl.tick(&mut editor, &input, Viewport::default(), |_| {
            vec![Intent::SetProjectionMode(ProjectionMode::Orthographic)]
        });
        let ortho = rl.tick(&mut editor, &input, Viewport::default(), |_| {
            vec![Intent::SetProjectionMode(ProjectionMode::Perspective)]
        });
        let after = rl.tick(&mut editor, &input, Viewport::default(), no_ui);

        let before = before.unwrap().projection.to_cols_array();
        let after = after.unwrap().projection.to_cols_array();
        assert_eq!(ortho.unwrap().projection.z_axis.w, 0.0);
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
