use crate::error::WindowError;
use crate::event::WindowEvent;
use crate::platform::translate;
use crate::state::WindowState;
use engine_common::Viewport;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent as NativeEvent;
use winit::event_loop::ActiveEventLoop;

/// GPU objects tied to one native window.
struct GpuContext {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    native: Arc<winit::window::Window>,
}

/// A surface texture acquired for one frame, plus its default view.
pub struct SurfaceFrame {
    texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

/// Native window plus the GPU context rendering into it.
///
/// Owns both exclusively. [`Window::destroy`] releases them; it is safe to
/// call more than once and is called again on drop.
pub struct Window {
    state: WindowState,
    cursor: (f64, f64),
    gpu: Option<GpuContext>,
}

impl Window {
    /// Create the window, surface, adapter, device and queue.
    pub fn create(
        event_loop: &ActiveEventLoop,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Self, WindowError> {
        tracing::info!("Creating window '{title}' with size {width}x{height}");

        let attrs = winit::window::Window::default_attributes()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height));
        let native = event_loop
            .create_window(attrs)
            .map_err(|source| WindowError::CreateWindow {
                title: title.to_owned(),
                width,
                height,
                source,
            })
            .inspect_err(|e| tracing::error!("{e}"))?;
        let native = Arc::new(native);

        let gpu = Self::create_gpu(native).inspect_err(|e| tracing::error!("{e}"))?;
        let size = gpu.native.inner_size();

        Ok(Self {
            state: WindowState::new(title, size.width, size.height),
            cursor: (0.0, 0.0),
            gpu: Some(gpu),
        })
    }

    fn create_gpu(native: Arc<winit::window::Window>) -> Result<GpuContext, WindowError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(native.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(WindowError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("engine_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let size = native.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or(WindowError::NoSurfaceFormat)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(GpuContext {
            surface,
            device,
            queue,
            config,
            native,
        })
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport()
    }

    pub fn is_alive(&self) -> bool {
        self.gpu.is_some()
    }

    pub fn native(&self) -> Option<&winit::window::Window> {
        self.gpu.as_ref().map(|g| g.native.as_ref())
    }

    pub fn device(&self) -> Option<&wgpu::Device> {
        self.gpu.as_ref().map(|g| &g.device)
    }

    pub fn queue(&self) -> Option<&wgpu::Queue> {
        self.gpu.as_ref().map(|g| &g.queue)
    }

    pub fn surface_format(&self) -> Option<wgpu::TextureFormat> {
        self.gpu.as_ref().map(|g| g.config.format)
    }

    /// Translate a native event, update size/surface on resize, run the
    /// callback, and return the typed event to the caller.
    pub fn handle_native(&mut self, event: &NativeEvent) -> Option<WindowEvent> {
        if let NativeEvent::CursorMoved { position, .. } = event {
            self.cursor = (position.x, position.y);
        }
        let translated = translate(event, self.cursor)?;
        if let WindowEvent::Resized { width, height } = translated {
            self.reconfigure(width, height);
        }
        self.state.dispatch(&translated);
        Some(translated)
    }

    fn reconfigure(&mut self, width: u32, height: u32) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        gpu.config.width = width;
        gpu.config.height = height;
        gpu.surface.configure(&gpu.device, &gpu.config);
    }

    /// Acquire the next surface texture. Returns `None` when the frame should
    /// be skipped (minimized, surface lost or outdated, or destroyed).
    pub fn acquire_frame(&mut self) -> Option<SurfaceFrame> {
        let gpu = self.gpu.as_ref()?;
        if self.state.viewport().is_empty() {
            return None;
        }
        match gpu.surface.get_current_texture() {
            Ok(texture) => {
                let view = texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Some(SurfaceFrame { texture, view })
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                None
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                None
            }
        }
    }

    /// Present the frame and schedule the next redraw.
    pub fn present(&self, frame: SurfaceFrame) {
        frame.texture.present();
        self.request_redraw();
    }

    pub fn request_redraw(&self) {
        if let Some(gpu) = &self.gpu {
            gpu.native.request_redraw();
        }
    }

    /// Release the GPU context and native window. Returns `true` only the
    /// first time; later calls do nothing.
    pub fn destroy(&mut self) -> bool {
        if !self.state.mark_destroyed() {
            return false;
        }
        self.gpu = None;
        tracing::info!("window '{}' destroyed", self.state.title());
        true
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.destroy();
    }
}
