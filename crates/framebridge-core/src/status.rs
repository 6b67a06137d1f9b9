//! Native engine status codes.
//!
//! Every control call into the capture engine returns one code from this
//! closed set. Codes never reach callers raw; [`check`] translates them into
//! [`EngineError`] values first.

use crate::error::EngineError;

/// The call succeeded.
pub const OK: i32 = 0;
/// The engine failed to load the requested plugin.
pub const PLUGIN_LOAD_FAILED: i32 = 1;
/// The plugin does not implement the requested operation.
pub const NOT_IMPLEMENTED: i32 = 2;
/// The engine rejected the requested width/height pair.
pub const INVALID_RESOLUTION: i32 = 3;
/// An async read loop is already active.
pub const ALREADY_RUNNING: i32 = 4;

/// Translate a native status code into a typed result.
///
/// `context` names the operation that produced the code and becomes part of
/// the error message. [`OK`] maps to `Ok(())`; every other code, including
/// codes outside the known set, maps to an [`EngineError`].
pub fn check(code: i32, context: &str) -> Result<(), EngineError> {
    match EngineError::from_status(code, context) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}
