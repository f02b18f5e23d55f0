/// Fatal failures. Both are reported once at startup and end the process.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Window, surface, adapter or device creation failed.
    #[error("initialization failed: {0}")]
    InitFailure(String),
    /// A shader module or pipeline failed validation.
    #[error("shader compilation failed: {0}")]
    CompileFailure(String),
}

impl EngineError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InitFailure(_) => 1,
            Self::CompileFailure(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_nonzero_and_distinct() {
        let init = EngineError::InitFailure("no adapter".into());
        let compile = EngineError::CompileFailure("bad wgsl".into());
        assert_ne!(init.exit_code(), 0);
        assert_ne!(compile.exit_code(), 0);
        assert_ne!(init.exit_code(), compile.exit_code());
    }

    #[test]
    fn display_mentions_cause() {
        let e = EngineError::CompileFailure("entry point missing".into());
        assert!(e.to_string().contains("entry point missing"));
    }
}
