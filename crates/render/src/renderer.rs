use crate::camera::ProjectionMode;
use crate::frame::FrameData;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads one frame snapshot and produces output. It never
/// touches the editor state the snapshot was built from.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameData) -> Self::Output;
}

/// Text renderer for headless runs and tests.
///
/// Produces a human-readable description of what the GPU backend would draw.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameData) -> String {
        let mut out = String::new();
        let mode = match frame.projection_mode {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        };
        let c = frame.clear_color.0;
        let _ = writeln!(
            out,
            "=== Frame {}x{} ({mode}) ===",
            frame.viewport.width, frame.viewport.height
        );
        let _ = writeln!(
            out,
            "Clear: ({:.2}, {:.2}, {:.2}, {:.2})",
            c[0], c[1], c[2], c[3]
        );
        let p = frame.camera_position;
        let _ = writeln!(out, "Camera: pos=({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        let l = frame.light;
        let _ = writeln!(
            out,
            "Light: pos=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2})",
            l.position.x, l.position.y, l.position.z, l.color.x, l.color.y, l.color.z
        );
        let m = frame.material;
        let _ = writeln!(
            out,
            "Material: ambient={:.2} diffuse={:.2} specular={:.2} shininess={:.1}",
            m.ambient, m.diffuse, m.specular, m.shininess
        );
        let t = frame.model.w_axis;
        let _ = writeln!(out, "Quad: origin=({:.2}, {:.2}, {:.2})", t.x, t.y, t.z);
        out
    }
}
