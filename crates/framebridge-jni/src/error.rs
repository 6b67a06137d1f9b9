//! Error types and Java exception mapping.

use framebridge_core::EngineError;
use jni::JNIEnv;
use thiserror::Error;

/// Errors that can occur inside the bridge.
///
/// Engine status codes arrive already translated as [`EngineError`]; the
/// remaining variants cover the glue between the JVM and the engine.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The native engine reported a failure status.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A subsystem was used before `nativeInit` established it.
    #[error("not initialized: {0} (call nativeInit first)")]
    NotInitialized(&'static str),

    /// Failed to load the engine shared library.
    #[error("failed to load engine library: {0}")]
    LibraryLoad(String),

    /// A required symbol is missing from the engine library.
    #[error("engine symbol not found: {0}")]
    SymbolNotFound(String),

    /// The target object is missing a required field or method.
    #[error("target is missing member {name} with signature {signature}")]
    MissingMember {
        name: &'static str,
        signature: &'static str,
    },

    /// The pixel buffer did not match the delivered frame.
    #[error("pixel buffer mismatch: {0}")]
    PixelBuffer(String),

    /// Failed to convert a string across the boundary.
    #[error("string conversion failed: {0}")]
    StringConversion(String),

    /// A JNI call failed.
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The configuration JSON was rejected.
    #[error("invalid bridge configuration: {0}")]
    Config(String),

    /// A panic was caught at the bridge boundary.
    #[error("bridge panicked: {0}")]
    Panic(String),
}

impl BridgeError {
    /// The Java exception class thrown for this error.
    ///
    /// Engine failures map to the `com.framebridge` exception hierarchy;
    /// glue failures map to standard JDK classes.
    pub fn exception_class(&self) -> &'static str {
        match self {
            BridgeError::Engine(EngineError::PluginLoad(_)) => {
                "com/framebridge/PluginLoadException"
            }
            BridgeError::Engine(EngineError::NotImplemented(_)) => {
                "com/framebridge/NotImplementedException"
            }
            BridgeError::Engine(EngineError::InvalidResolution(_)) => {
                "com/framebridge/InvalidResolutionException"
            }
            BridgeError::Engine(EngineError::AlreadyRunning(_)) => {
                "com/framebridge/AlreadyRunningException"
            }
            BridgeError::Engine(EngineError::Unspecified { .. }) => {
                "com/framebridge/EngineException"
            }
            BridgeError::MissingMember { .. } => "com/framebridge/MissingMemberException",
            BridgeError::NotInitialized(_) => "java/lang/IllegalStateException",
            BridgeError::LibraryLoad(_) | BridgeError::SymbolNotFound(_) => {
                "java/lang/UnsatisfiedLinkError"
            }
            BridgeError::Config(_) => "java/lang/IllegalArgumentException",
            BridgeError::PixelBuffer(_)
            | BridgeError::StringConversion(_)
            | BridgeError::Jni(_)
            | BridgeError::Panic(_) => "java/lang/RuntimeException",
        }
    }
}

/// Clear any exception pending on the calling thread.
pub(crate) fn clear_pending(env: &mut JNIEnv) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_clear();
    }
}

/// Throw `err` as a Java exception.
///
/// Clears an already-pending exception first so the throw cannot be
/// swallowed, and falls back to `RuntimeException` if the mapped class
/// cannot be resolved.
pub fn throw_bridge_exception(env: &mut JNIEnv, err: &BridgeError) {
    clear_pending(env);

    let message = err.to_string();
    if env.throw_new(err.exception_class(), &message).is_err() {
        // FindClass failed and left its own exception pending.
        clear_pending(env);
        let _ = env.throw_new("java/lang/RuntimeException", &message);
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
