use engine_common::EngineError;

/// Window or GPU context creation failures. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to create window '{title}' with size {width}x{height}: {source}")]
    CreateWindow {
        title: String,
        width: u32,
        height: u32,
        #[source]
        source: winit::error::OsError,
    },
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

impl From<WindowError> for EngineError {
    fn from(err: WindowError) -> Self {
        EngineError::InitFailure(err.to_string())
    }
}
