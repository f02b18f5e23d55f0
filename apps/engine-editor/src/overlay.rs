use egui::Context as EguiContext;
use winit::event::WindowEvent as NativeEvent;
use winit::window::Window as NativeWindow;

/// Tessellation inputs kept between the UI pass and the paint pass.
struct PendingPaint {
    shapes: Vec<egui::epaint::ClippedShape>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

/// egui integration: winit input in, wgpu draw data out.
///
/// The UI pass ([`EguiOverlay::run`]) happens before the scene draw; the
/// paint pass ([`EguiOverlay::paint`]) loads the scene color and draws on top.
pub struct EguiOverlay {
    ctx: EguiContext,
    winit_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pending: Option<PendingPaint>,
}

impl EguiOverlay {
    pub fn new(
        window: &NativeWindow,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let ctx = EguiContext::default();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);
        Self {
            ctx,
            winit_state,
            renderer,
            pending: None,
        }
    }

    /// Feed a native event to egui. Returns whether egui consumed it.
    pub fn on_window_event(&mut self, window: &NativeWindow, event: &NativeEvent) -> bool {
        self.winit_state.on_window_event(window, event).consumed
    }

    /// Run the UI pass and keep its output for [`EguiOverlay::paint`].
    pub fn run<T: Default>(
        &mut self,
        window: &NativeWindow,
        mut build: impl FnMut(&EguiContext) -> T,
    ) -> T {
        let raw_input = self.winit_state.take_egui_input(window);
        let mut result = T::default();
        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = self.ctx.run(raw_input, |ctx| {
            result = build(ctx);
        });
        self.winit_state
            .handle_platform_output(window, platform_output);
        self.pending = Some(PendingPaint {
            shapes,
            textures_delta,
            pixels_per_point,
        });
        result
    }

    /// Draw the last UI pass on top of `view`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
    ) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let paint_jobs = self.ctx.tessellate(pending.shapes, pending.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: pending.pixels_per_point,
        };

        for (id, image_delta) in &pending.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &pending.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
