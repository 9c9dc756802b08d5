use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(pxgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pxgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PxgenError::from(io);
        assert!(matches!(err, PxgenError::IoError(_)));
        assert!(err.to_string().contains("missing"));
    }
}
