//! Error types for engine control calls.

use thiserror::Error;

use crate::status;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Typed failure reported by the native capture engine.
///
/// One variant per known status code, plus [`EngineError::Unspecified`] for
/// anything the engine reports outside the known set.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine could not load the requested plugin library.
    #[error("plugin load failed: {0}")]
    PluginLoad(String),

    /// The loaded plugin does not implement the requested operation.
    #[error("operation not implemented: {0}")]
    NotImplemented(String),

    /// The engine rejected the requested resolution.
    #[error("invalid resolution: {0}")]
    InvalidResolution(String),

    /// An async read loop is already active.
    #[error("capture already running: {0}")]
    AlreadyRunning(String),

    /// The engine reported a code outside the known set.
    #[error("engine failure (status {code}): {context}")]
    Unspecified { code: i32, context: String },
}

impl EngineError {
    /// Translate a raw status code into a typed failure.
    ///
    /// Returns `None` for [`status::OK`]. Unknown codes are preserved in
    /// [`EngineError::Unspecified`] rather than collapsed, so the original
    /// code survives translation.
    pub fn from_status(code: i32, context: &str) -> Option<Self> {
        match code {
            status::OK => None,
            status::PLUGIN_LOAD_FAILED => Some(EngineError::PluginLoad(context.to_string())),
            status::NOT_IMPLEMENTED => Some(EngineError::NotImplemented(context.to_string())),
            status::INVALID_RESOLUTION => {
                Some(EngineError::InvalidResolution(context.to_string()))
            }
            status::ALREADY_RUNNING => Some(EngineError::AlreadyRunning(context.to_string())),
            other => Some(EngineError::Unspecified {
                code: other,
                context: context.to_string(),
            }),
        }
    }

    /// The status code this failure was translated from.
    pub fn raw_status(&self) -> i32 {
        match self {
            EngineError::PluginLoad(_) => status::PLUGIN_LOAD_FAILED,
            EngineError::NotImplemented(_) => status::NOT_IMPLEMENTED,
            EngineError::InvalidResolution(_) => status::INVALID_RESOLUTION,
            EngineError::AlreadyRunning(_) => status::ALREADY_RUNNING,
            EngineError::Unspecified { code, .. } => *code,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
