use egui::{Context, DragValue, Slider, Ui};
use engine_common::Rgba;
use engine_render::ProjectionMode;
use engine_runtime::{EditorState, Intent};
use glam::Vec3;
use std::ops::RangeInclusive;

/// Smallest gap kept between the near and far clip planes.
const CLIP_GAP: f32 = 0.01;

/// Immediate-mode property editor.
///
/// Reads a snapshot of the editor state every frame and returns the changes
/// the user made as intents. It never writes the state itself.
#[derive(Debug, Clone)]
pub struct EditorPanel {
    pub show_editor: bool,
    pub show_demo: bool,
}

impl Default for EditorPanel {
    fn default() -> Self {
        Self {
            show_editor: true,
            show_demo: true,
        }
    }
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare all widgets for this frame and collect the resulting intents.
    pub fn show(&mut self, ctx: &Context, state: &EditorState) -> Vec<Intent> {
        let mut intents = Vec::new();
        self.menu_bar(ctx, &mut intents);

        let mut show_editor = self.show_editor;
        egui::Window::new("Editor")
            .open(&mut show_editor)
            .default_width(320.0)
            .show(ctx, |ui| editor_widgets(ui, state, &mut intents));
        self.show_editor = show_editor;

        let mut show_demo = self.show_demo;
        egui::Window::new("Demo")
            .open(&mut show_demo)
            .default_pos([360.0, 40.0])
            .show(ctx, |ui| demo_widgets(ui, state, &mut intents));
        self.show_demo = show_demo;

        intents
    }

    fn menu_bar(&mut self, ctx: &Context, intents: &mut Vec<Intent>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for stub in ["New Scene...", "Open Scene...", "Save Scene..."] {
                        if ui.button(stub).clicked() {
                            tracing::debug!("menu item '{stub}' has no action");
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        intents.push(Intent::Exit);
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_editor, "Editor");
                    ui.checkbox(&mut self.show_demo, "Demo");
                });
            });
        });
    }
}

fn editor_widgets(ui: &mut Ui, state: &EditorState, intents: &mut Vec<Intent>) {
    let scene = &state.scene;
    let camera = &state.camera;

    ui.heading("Lighting");
    let mut light_pos = scene.light.position;
    if vec3_drag(ui, "light source position", &mut light_pos, -10.0..=10.0) {
        intents.push(Intent::SetLightPosition(light_pos));
    }
    let mut light_color = scene.light.color.to_array();
    if color_row(ui, "light source color", |ui| ui.color_edit_button_rgb(&mut light_color)) {
        intents.push(Intent::SetLightColor(Vec3::from_array(light_color)));
    }

    ui.separator();
    ui.heading("Material");
    let m = scene.material;
    let mut ambient = m.ambient;
    if slider(ui, "ambient factor", &mut ambient, 0.0..=1.0) {
        intents.push(Intent::SetAmbientFactor(ambient));
    }
    let mut diffuse = m.diffuse;
    if slider(ui, "diffuse factor", &mut diffuse, 0.0..=1.0) {
        intents.push(Intent::SetDiffuseFactor(diffuse));
    }
    let mut specular = m.specular;
    if slider(ui, "specular factor", &mut specular, 0.0..=1.0) {
        intents.push(Intent::SetSpecularFactor(specular));
    }
    let mut shininess = m.shininess;
    if slider(ui, "shininess", &mut shininess, 1.0..=128.0) {
        intents.push(Intent::SetShininess(shininess));
    }

    ui.separator();
    ui.heading("Camera");
    let mut position = camera.position();
    if vec3_drag(ui, "camera position", &mut position, -10.0..=10.0) {
        intents.push(Intent::SetCameraPosition(position));
    }
    let mut rotation = camera.rotation();
    if vec3_drag(ui, "camera rotation", &mut rotation, 0.0..=360.0) {
        intents.push(Intent::SetCameraRotation(rotation));
    }
    let mut fov = camera.field_of_view();
    if slider(ui, "camera FOV", &mut fov, 1.0..=120.0) {
        intents.push(Intent::SetFieldOfView(fov));
    }
    let (near_range, far_range) = clip_ranges(camera.near_clip_plane(), camera.far_clip_plane());
    let mut near = camera.near_clip_plane();
    if slider(ui, "camera near clip plane", &mut near, near_range) {
        intents.push(Intent::SetNearClipPlane(near));
    }
    let mut far = camera.far_clip_plane();
    if slider(ui, "camera far clip plane", &mut far, far_range) {
        intents.push(Intent::SetFarClipPlane(far));
    }
    let mut perspective = camera.projection_mode() == ProjectionMode::Perspective;
    if ui.checkbox(&mut perspective, "perspective camera").changed() {
        let mode = if perspective {
            ProjectionMode::Perspective
        } else {
            ProjectionMode::Orthographic
        };
        intents.push(Intent::SetProjectionMode(mode));
    }

    ui.separator();
    let mut background = scene.background.0;
    if color_row(ui, "background color", |ui| {
        ui.color_edit_button_rgba_unmultiplied(&mut background)
    }) {
        intents.push(Intent::SetBackground(Rgba(background)));
    }
}

fn demo_widgets(ui: &mut Ui, state: &EditorState, intents: &mut Vec<Intent>) {
    let object = state.scene.object;

    let mut scale = object.scale;
    if vec3_drag(ui, "scale", &mut scale, -2.0..=2.0) {
        intents.push(Intent::SetObjectScale(scale));
    }
    let mut rotation = object.rotation;
    if slider(ui, "rotation", &mut rotation, 0.0..=360.0) {
        intents.push(Intent::SetObjectRotation(rotation));
    }
    let mut translation = object.translation;
    if vec3_drag(ui, "translation", &mut translation, -1.0..=1.0) {
        intents.push(Intent::SetObjectTranslation(translation));
    }
}

/// Slider ranges for near and far that keep `near < far`.
pub fn clip_ranges(near: f32, far: f32) -> (RangeInclusive<f32>, RangeInclusive<f32>) {
    let near_max = (far - CLIP_GAP).clamp(0.1, 10.0);
    let far_min = (near + CLIP_GAP).clamp(1.0, 100.0);
    (0.1..=near_max, far_min..=100.0)
}

fn slider(ui: &mut Ui, label: &str, value: &mut f32, range: RangeInclusive<f32>) -> bool {
    ui.add(Slider::new(value, range).text(label)).changed()
}

/// Three drag fields. The range only applies to user edits, so values pushed
/// outside it by keyboard or mouse camera control are left alone.
fn vec3_drag(ui: &mut Ui, label: &str, value: &mut Vec3, range: RangeInclusive<f32>) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for component in [&mut value.x, &mut value.y, &mut value.z] {
            if ui.add(DragValue::new(&mut *component).speed(0.05)).changed() {
                *component = component.clamp(*range.start(), *range.end());
                changed = true;
            }
        }
        ui.label(label);
    });
    changed
}

fn color_row(ui: &mut Ui, label: &str, widget: impl FnOnce(&mut Ui) -> egui::Response) -> bool {
    ui.horizontal(|ui| {
        let changed = widget(ui).changed();
        ui.label(label);
        changed
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::{ClippedShape, Shape};
    use egui::{Event, Modifiers, PointerButton, Pos2, Rect};

    /// Drives a panel frame by frame with synthetic pointer input.
    struct Frames {
        ctx: Context,
        panel: EditorPanel,
        state: EditorState,
        intents: Vec<Intent>,
        shapes: Vec<ClippedShape>,
    }

    impl Frames {
        fn new() -> Self {
            let mut frames = Self {
                ctx: Context::default(),
                panel: EditorPanel::new(),
                state: EditorState::default(),
                intents: Vec::new(),
                shapes: Vec::new(),
            };
            frames.settle();
            frames
        }

        fn step(&mut self, events: Vec<Event>) {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1600.0, 1200.0))),
                events,
                ..Default::default()
            };
            let output = self.ctx.run(input, |ctx| {
                self.intents.extend(self.panel.show(ctx, &self.state));
            });
            self.shapes = output.shapes;
        }

        /// Let windows and popups finish their sizing pass.
        fn settle(&mut self) {
            for _ in 0..3 {
                self.step(Vec::new());
            }
        }

        fn text_rect(&self, text: &str) -> Rect {
            self.shapes
                .iter()
                .find_map(|clipped| find_text(&clipped.shape, text))
                .unwrap_or_else(|| panic!("'{text}' not drawn"))
        }

        fn click_text(&mut self, text: &str) {
            let pos = self.text_rect(text).center();
            let button = |pressed| Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            };
            self.step(vec![Event::PointerMoved(pos)]);
            self.step(vec![button(true)]);
            self.step(vec![button(false)]);
        }
    }

    fn find_text(shape: &Shape, text: &str) -> Option<Rect> {
        match shape {
            Shape::Text(t) if t.galley.text() == text => {
                Some(t.galley.rect.translate(t.pos.to_vec2()))
            }
            Shape::Vec(shapes) => shapes.iter().find_map(|s| find_text(s, text)),
            _ => None,
        }
    }

    fn run_once(panel: &mut EditorPanel, state: &EditorState) -> Vec<Intent> {
        let ctx = Context::default();
        let mut intents = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            intents = panel.show(ctx, state);
        });
        intents
    }

    #[test]
    fn no_input_no_intents() {
        let mut panel = EditorPanel::new();
        let state = EditorState::default();
        assert!(run_once(&mut panel, &state).is_empty());
        // Second frame after layout settles.
        assert!(run_once(&mut panel, &state).is_empty());
    }

    #[test]
    fn drawing_does_not_mutate_state() {
        let mut panel = EditorPanel::new();
        let state = EditorState::default();
        let before = state.clone();
        run_once(&mut panel, &state);
        assert_eq!(state, before);
    }

    #[test]
    fn clip_ranges_keep_near_below_far() {
        let (near, far) = clip_ranges(0.1, 100.0);
        assert_eq!(*near.end(), 10.0);
        assert!((*far.start() - 1.0).abs() < 1e-6);

        let (near, far) = clip_ranges(5.0, 2.0);
        assert!(*near.end() < 2.0);
        assert!(*far.start() > 5.0);
    }

    #[test]
    fn hidden_windows_still_show_menu() {
        let mut panel = EditorPanel {
            show_editor: false,
            show_demo: false,
        };
        let state = EditorState::default();
        assert!(run_once(&mut panel, &state).is_empty());
        assert!(!panel.show_editor);
    }

    #[test]
    fn perspective_checkbox_emits_projection_intent() {
        let mut frames = Frames::new();
        assert!(frames.intents.is_empty());
        let before = frames.state.clone();

        frames.click_text("perspective camera");
        assert_eq!(
            frames.intents,
            vec![Intent::SetProjectionMode(ProjectionMode::Orthographic)]
        );
        assert_eq!(frames.state, before);

        // Nothing else fires once the pointer rests.
        frames.settle();
        assert_eq!(frames.intents.len(), 1);
    }

    #[test]
    fn file_exit_emits_exit_intent() {
        let mut frames = Frames::new();
        frames.click_text("File");
        frames.settle();
        assert!(frames.intents.is_empty());

        frames.click_text("Exit");
        assert_eq!(frames.intents, vec![Intent::Exit]);
    }

    #[test]
    fn file_stub_items_emit_nothing() {
        let mut frames = Frames::new();
        frames.click_text("File");
        frames.settle();
        frames.click_text("Save Scene...");
        frames.settle();
        assert!(frames.intents.is_empty());
    }
}
