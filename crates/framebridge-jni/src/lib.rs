//! framebridge-jni - JNI bindings for the framebridge capture pipeline
//!
//! This crate is the `cdylib` a JVM application loads via
//! `System.loadLibrary`. It implements the native methods of
//! `com.framebridge.FrameReceiver`:
//!
//! 1. `nativeInit` parses the JSON config, captures the JVM handle, and
//!    binds the capture engine shared library
//! 2. The control methods (`nativeLoadPlugin`, `nativeSetGain`, ...) call
//!    straight through to the engine and translate its status codes into
//!    typed Java exceptions
//! 3. `nativeStart` resolves the receiver's members, then blocks inside the
//!    engine's read loop while frames arrive on the engine's own thread
//! 4. `nativeStop`, from another thread, asks the engine to end the loop
//!
//! # Java contract
//!
//! The receiver must declare `int[] pixels`, `int width`, `int height`,
//! `void resize(int, int)`, and `void frameReady()`. Each delivered frame
//! is converted to packed grayscale pixels and written into `pixels` before
//! `frameReady` fires; `resize` fires first whenever the frame's dimensions
//! differ from the receiver's.

mod adapter;
mod context;
mod engine;
mod error;
mod logging;
mod panic_guard;
mod runtime;
mod session;

use std::panic::AssertUnwindSafe;

use engine::CaptureEngine;
use error::BridgeError;
use framebridge_core::BridgeConfig;
use jni::objects::{JObject, JString};
use jni::sys::{jfloat, jint, jlong};
use jni::JNIEnv;
use runtime::RuntimeBridge;

/// Unwrap the panic-guarded result of an export body, throwing on failure.
fn handle_result(env: &mut JNIEnv, result: Result<Result<(), BridgeError>, BridgeError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(err)) | Err(err) => error::throw_bridge_exception(env, &err),
    }
}

fn get_rust_string(env: &mut JNIEnv, value: &JString) -> Result<String, BridgeError> {
    Ok(env
        .get_string(value)
        .map_err(|e| BridgeError::StringConversion(e.to_string()))?
        .into())
}

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the bridge.
///
/// Must be called once, before any other native method.
///
/// # Parameters
/// - `config_json`: JSON configuration, e.g.
///   `{"engine_library": "/usr/lib/libsdrengine.so", "log_filter": "info"}`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    config_json: JString<'local>,
) {
    let result = panic_guard::catch_panic(AssertUnwindSafe(|| init_impl(&mut env, &config_json)));
    handle_result(&mut env, result);
}

fn init_impl(env: &mut JNIEnv, config_json: &JString) -> Result<(), BridgeError> {
    let raw = get_rust_string(env, config_json)?;
    let config = BridgeConfig::from_json(&raw).map_err(|e| BridgeError::Config(e.to_string()))?;

    logging::init(&config.log_filter);
    panic_guard::install_panic_hook();
    RuntimeBridge::install(env)?;
    CaptureEngine::bind(&config.engine_library)?;

    tracing::info!("framebridge initialized");
    Ok(())
}

// ============================================================================
// Engine control methods
// ============================================================================

/// Load an SDR source plugin into the engine.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeLoadPlugin<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    path: JString<'local>,
) {
    let result = panic_guard::catch_panic(AssertUnwindSafe(|| load_plugin_impl(&mut env, &path)));
    handle_result(&mut env, result);
}

fn load_plugin_impl(env: &mut JNIEnv, path: &JString) -> Result<(), BridgeError> {
    let path = get_rust_string(env, path)?;
    CaptureEngine::global()?.load_plugin(&path)
}

/// Pass a parameter string to the loaded plugin.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetPluginParams<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    params: JString<'local>,
) {
    let result =
        panic_guard::catch_panic(AssertUnwindSafe(|| plugin_params_impl(&mut env, &params)));
    handle_result(&mut env, result);
}

fn plugin_params_impl(env: &mut JNIEnv, params: &JString) -> Result<(), BridgeError> {
    let params = get_rust_string(env, params)?;
    CaptureEngine::global()?.plugin_params(&params)
}

/// Set the capture sample rate in samples per second.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetSampleRate<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    rate: jlong,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.set_sample_rate(rate as u32));
    handle_result(&mut env, result);
}

/// Set the base tuning frequency in Hz.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetBaseFreq<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    freq: jlong,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.set_base_freq(freq as u32));
    handle_result(&mut env, result);
}

/// Set the receiver gain, nominally in `[0, 1]`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetGain<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    gain: jfloat,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.set_gain(gain));
    handle_result(&mut env, result);
}

/// Set the vertical refresh frequency in Hz.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetVfreq<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    freq: jfloat,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.set_vfreq(freq));
    handle_result(&mut env, result);
}

/// Set the horizontal refresh frequency in Hz.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetHfreq<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    freq: jfloat,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.set_hfreq(freq));
    handle_result(&mut env, result);
}

/// Set the frame resolution the engine reconstructs.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeSetResolution<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    width: jint,
    height: jint,
) {
    let result = panic_guard::catch_panic(|| {
        CaptureEngine::global()?.set_resolution(width as u32, height as u32)
    });
    handle_result(&mut env, result);
}

/// Unload the current SDR source plugin.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeUnloadPlugin<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    let result = panic_guard::catch_panic(|| CaptureEngine::global()?.unload_plugin());
    handle_result(&mut env, result);
}

// ============================================================================
// Session methods
// ============================================================================

/// Run the capture session.
///
/// Blocks the calling thread inside the engine's read loop until
/// `nativeStop` is called from another thread (or the engine fails). Frames
/// are delivered into `this` for the whole session.
///
/// # Parameters
/// - `this`: the receiver whose `pixels`/`width`/`height`, `resize`, and
///   `frameReady` members the session binds to
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeStart<'local>(
    mut env: JNIEnv<'local>,
    this: JObject<'local>,
) {
    let result = panic_guard::catch_panic(AssertUnwindSafe(|| session::start(&mut env, &this)));
    handle_result(&mut env, result);
}

/// Ask a running capture session to end.
///
/// Safe to call from any thread; returns without waiting for the session's
/// teardown.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeStop<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    let result = panic_guard::catch_panic(session::stop);
    handle_result(&mut env, result);
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Get the number of frames dropped after mid-delivery failures.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_framebridge_FrameReceiver_nativeDroppedFrames<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jlong {
    adapter::dropped_frames() as jlong
}
