//! Error types shared across Remix Studio crates.

/// Top-level error type for Remix Studio operations.
///
/// The processing service reports failures as free-text `detail` messages;
/// the client classifies them into enumerated kinds at the boundary so
/// callers can react without parsing strings.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Client-detected invalid input. The action is blocked before any
    /// network call and no state changes.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Network failure or non-success response from the processing service.
    /// Carries the server's `detail` text when one was supplied.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service reported a failure mid long-running operation
    /// (remix encoding, background removal).
    #[error("Processing error: {message}")]
    Processing { message: String },

    /// An asset upload was rejected (unsupported media type or transport
    /// failure during the upload itself).
    #[error("Upload error: {message}")]
    Upload { message: String },

    /// The referenced resource does not exist on the service.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StudioError.
pub type StudioResult<T> = Result<T, StudioError>;

impl StudioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
        }
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload {
            message: msg.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
