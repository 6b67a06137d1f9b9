//! Panic handling for the JNI boundary
//!
//! A panic must never unwind into the JVM or the engine's callback driver.
//! These helpers convert panics into [`BridgeError`] values at every entry
//! point instead.

use std::any::Any;
use std::panic;

use crate::error::BridgeError;

/// Run `f`, converting a panic into [`BridgeError::Panic`].
///
/// The panic is logged via tracing and returned as an error the caller can
/// throw or count like any other failure.
pub fn catch_panic<F, T>(f: F) -> Result<T, BridgeError>
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    panic::catch_unwind(f).map_err(|panic_info| {
        let message = panic_to_string(&panic_info);
        tracing::error!("panic caught at bridge boundary: {}", message);
        BridgeError::Panic(message)
    })
}

/// Convert a panic payload to a human-readable string.
///
/// Handles common panic payload types (&str, String) and provides
/// a fallback for unknown types.
fn panic_to_string(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Install a panic hook that routes panic reports through tracing.
///
/// Called during `nativeInit`. The hook is global for the entire process
/// and replaces any existing hook.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        match panic_info.location() {
            Some(location) => tracing::error!(
                "PANIC at {}:{}:{}: {}",
                location.file(),
                location.line(),
                location.column(),
                payload
            ),
            None => tracing::error!("PANIC: {}", payload),
        }
    }));
}

#[cfg(test)]
#[path = "panic_guard/panic_guard_tests.rs"]
mod panic_guard_tests;
