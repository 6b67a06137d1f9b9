//! Capture session lifecycle.

use std::ffi::c_void;

use jni::objects::JObject;
use jni::JNIEnv;

use crate::adapter;
use crate::context::TargetContext;
use crate::engine::CaptureEngine;
use crate::error::BridgeError;

/// Run one capture session against `target`.
///
/// Resolves the receiver's members, then blocks inside the engine's read
/// loop until [`stop`] is called from another thread or the engine fails.
/// The context, and with it both global references, is released when the
/// loop returns, on every path.
pub fn start(env: &mut JNIEnv, target: &JObject) -> Result<(), BridgeError> {
    let engine = CaptureEngine::global()?;
    let context = TargetContext::resolve(env, target)?;

    tracing::info!("capture session starting");
    let result = engine.read_async(
        adapter::deliver_frame,
        &context as *const TargetContext as *mut c_void,
    );
    drop(context);
    tracing::info!("capture session ended");

    result
}

/// Ask the engine to exit the read loop at its next safe point.
///
/// Runs on a different thread than the one blocked in [`start`]. Only
/// signals the engine; teardown stays with the session that owns the
/// context.
pub fn stop() -> Result<(), BridgeError> {
    CaptureEngine::global()?.stop()
}

#[cfg(test)]
#[path = "session/session_tests.rs"]
mod session_tests;
