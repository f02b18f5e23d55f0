use engine_common::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader or pipeline validation failed: {0}")]
    ShaderCompile(String),
}

impl From<RenderError> for EngineError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::ShaderCompile(msg) => EngineError::CompileFailure(msg),
        }
    }
}
