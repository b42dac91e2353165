use thiserror::Error;

/// Unified error type for bump-check operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command `{command}` failed with exit code {code}: {stderr}")]
    Command {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-check
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a descriptor error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        BumpError::Descriptor(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}
