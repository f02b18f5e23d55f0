mod overlay;

use anyhow::Result;
use clap::Parser;
use engine_common::EngineError;
use engine_input::InputState;
use engine_render_wgpu::WgpuRenderer;
use engine_runtime::{EditorState, LoopState, RenderLoop, ShutdownReason};
use engine_ui::EditorPanel;
use engine_window::{Window, WindowEvent};
use overlay::EguiOverlay;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent as NativeEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

#[derive(Parser)]
#[command(name = "engine-editor", about = "Textured quad editor with camera controls")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Window title
    #[arg(long, default_value = "Engine Editor")]
    title: String,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

/// Application state. Everything the loop touches is owned here.
struct EditorApp {
    title: String,
    width: u32,
    height: u32,
    window: Option<Window>,
    renderer: Option<WgpuRenderer>,
    overlay: Option<EguiOverlay>,
    editor: EditorState,
    input: InputState,
    render_loop: RenderLoop,
    panel: EditorPanel,
    fatal: Option<EngineError>,
}

impl EditorApp {
    fn new(cli: &Cli) -> Self {
        Self {
            title: cli.title.clone(),
            width: cli.width,
            height: cli.height,
            window: None,
            renderer: None,
            overlay: None,
            editor: EditorState::default(),
            input: InputState::new(),
            render_loop: RenderLoop::default(),
            panel: EditorPanel::new(),
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let mut window = Window::create(event_loop, &self.title, self.width, self.height)?;
        window
            .state_mut()
            .set_event_callback(|event| tracing::trace!(?event, "window event"));

        let viewport = window.viewport();
        let (Some(native), Some(device), Some(queue), Some(format)) = (
            window.native(),
            window.device(),
            window.queue(),
            window.surface_format(),
        ) else {
            return Err(EngineError::InitFailure("window has no GPU context".into()));
        };

        let renderer = WgpuRenderer::new(device, queue, format, viewport.width, viewport.height)?;
        let overlay = EguiOverlay::new(native, device, format);

        self.render_loop
            .start()
            .map_err(|e| EngineError::InitFailure(e.to_string()))?;

        window.request_redraw();
        self.renderer = Some(renderer);
        self.overlay = Some(overlay);
        self.window = Some(window);
        Ok(())
    }

    fn on_event(&mut self, event: WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::Resized { width, height } => {
                if let (Some(renderer), Some(device)) = (
                    self.renderer.as_mut(),
                    self.window.as_ref().and_then(Window::device),
                ) {
                    renderer.resize(device, width, height);
                }
            }
            WindowEvent::Closed => {
                self.render_loop
                    .request_shutdown(ShutdownReason::CloseRequested);
            }
            WindowEvent::Key { key, pressed } => {
                // Releases always pass so keys never stick behind a widget.
                if !(pressed && egui_consumed) {
                    self.input.set_key(key, pressed);
                }
            }
            WindowEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => {
                if pressed && egui_consumed {
                    return;
                }
                self.input.set_button(button, pressed);
                self.render_loop.bridge_mut().on_mouse_button(x, y);
            }
            WindowEvent::CursorMoved { x, y } => self.input.set_cursor(x, y),
            WindowEvent::FocusLost => self.input.release_all(),
            WindowEvent::Moved { .. } => {}
        }
    }

    /// One tick: input and UI pass, scene draw, overlay draw, present.
    fn redraw(&mut self) {
        let Self {
            window,
            renderer,
            overlay,
            editor,
            input,
            render_loop,
            panel,
            ..
        } = self;
        let (Some(window), Some(renderer), Some(overlay)) =
            (window.as_mut(), renderer.as_ref(), overlay.as_mut())
        else {
            return;
        };

        let viewport = window.viewport();
        let frame = {
            let Some(native) = window.native() else {
                return;
            };
            render_loop.tick(editor, input, viewport, |state| {
                overlay.run(native, |ctx| panel.show(ctx, state))
            })
        };
        let Some(frame) = frame else {
            return;
        };
        window.state_mut().set_background(frame.clear_color);

        let Some(surface) = window.acquire_frame() else {
            return;
        };
        let (Some(device), Some(queue)) = (window.device(), window.queue()) else {
            return;
        };
        let background = window.state().background();
        renderer.render(device, queue, &surface.view, &frame, background);
        overlay.paint(device, queue, &surface.view, [viewport.width, viewport.height]);
        window.present(surface);
    }

    /// Release GPU resources before the window that owns the device.
    fn teardown(&mut self, event_loop: &ActiveEventLoop) {
        self.overlay = None;
        self.renderer = None;
        if let Some(window) = self.window.as_mut() {
            window.destroy();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for EditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.fatal.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            tracing::error!("{e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: NativeEvent,
    ) {
        if matches!(event, NativeEvent::RedrawRequested) {
            self.redraw();
        } else {
            let Some(window) = self.window.as_mut() else {
                return;
            };
            let egui_consumed = match (self.overlay.as_mut(), window.native()) {
                (Some(overlay), Some(native)) => overlay.on_window_event(native, &event),
                _ => false,
            };
            if let Some(translated) = window.handle_native(&event) {
                self.on_event(translated, egui_consumed);
            }
        }

        if self.render_loop.state() == LoopState::ShuttingDown {
            self.teardown(event_loop);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("engine-editor starting");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            let err = EngineError::InitFailure(e.to_string());
            tracing::error!("{err}");
            return Ok(ExitCode::from(err.exit_code()));
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = EditorApp::new(&cli);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.fatal.take() {
        return Ok(ExitCode::from(err.exit_code()));
    }
    tracing::info!(
        frames = app.render_loop.frame_count(),
        reason = ?app.render_loop.shutdown_reason(),
        "engine-editor exited"
    );
    Ok(ExitCode::SUCCESS)
}
