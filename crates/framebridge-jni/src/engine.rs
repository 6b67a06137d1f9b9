//! Dynamic binding to the native capture engine.
//!
//! The engine shared library is opened once, at `nativeInit`, and its
//! control symbols are resolved into a function-pointer table. The engine
//! manages its single capture instance internally, so the binding is a
//! process-wide singleton rather than a per-session handle.

use std::ffi::{c_char, c_int, c_void, CString};

use framebridge_core::status;
use libloading::{Library, Symbol};
use once_cell::sync::OnceCell;

use crate::error::BridgeError;

/// Callback invoked by the engine once per produced frame.
///
/// `samples` points to `width * height` floats valid only for the duration
/// of the call; `user_data` is the pointer handed to
/// [`CaptureEngine::read_async`].
pub type FrameSink = unsafe extern "C" fn(
    samples: *const f32,
    width: u32,
    height: u32,
    user_data: *mut c_void,
);

// Type signatures for the engine's control functions
type LoadPluginFn = unsafe extern "C" fn(path: *const c_char) -> c_int;
type PluginParamsFn = unsafe extern "C" fn(params: *const c_char) -> c_int;
type SetSampleRateFn = unsafe extern "C" fn(rate: u32) -> c_int;
type SetBaseFreqFn = unsafe extern "C" fn(freq: u32) -> c_int;
type SetGainFn = unsafe extern "C" fn(gain: f32) -> c_int;
type SetVfreqFn = unsafe extern "C" fn(freq: f32) -> c_int;
type SetHfreqFn = unsafe extern "C" fn(freq: f32) -> c_int;
type SetResolutionFn = unsafe extern "C" fn(width: u32, height: u32) -> c_int;
type ReadAsyncFn = unsafe extern "C" fn(sink: FrameSink, user_data: *mut c_void) -> c_int;
type StopFn = unsafe extern "C" fn() -> c_int;
type UnloadPluginFn = unsafe extern "C" fn() -> c_int;

/// Global engine binding
static ENGINE: OnceCell<CaptureEngine> = OnceCell::new();

/// The bound capture engine, keeping its library alive and providing safe
/// wrappers over the control surface.
///
/// Every wrapper runs the returned status code through
/// [`framebridge_core::status::check`], so callers only ever see typed
/// failures.
pub struct CaptureEngine {
    /// The loaded library (must be kept alive while the function table is in use).
    _library: Library,

    /// Function pointers resolved from the engine library.
    api: EngineApi,
}

/// Function pointers to the engine's control functions.
struct EngineApi {
    load_plugin: LoadPluginFn,
    plugin_params: PluginParamsFn,
    set_sample_rate: SetSampleRateFn,
    set_base_freq: SetBaseFreqFn,
    set_gain: SetGainFn,
    set_vfreq: SetVfreqFn,
    set_hfreq: SetHfreqFn,
    set_resolution: SetResolutionFn,
    read_async: ReadAsyncFn,
    stop: StopFn,
    unload_plugin: UnloadPluginFn,
}

impl CaptureEngine {
    /// Bind the engine shared library.
    ///
    /// Idempotent: the first successful bind wins, and later calls return
    /// the existing binding regardless of `library_path`.
    pub fn bind(library_path: &str) -> Result<&'static CaptureEngine, BridgeError> {
        ENGINE.get_or_try_init(|| load_engine(library_path))
    }

    /// The bound engine, or a typed failure before [`CaptureEngine::bind`].
    pub fn global() -> Result<&'static CaptureEngine, BridgeError> {
        ENGINE
            .get()
            .ok_or(BridgeError::NotInitialized("capture engine"))
    }

    /// Load an SDR source plugin.
    pub fn load_plugin(&self, path: &str) -> Result<(), BridgeError> {
        let c_path = to_c_string(path)?;
        // SAFETY: c_path is a valid NUL-terminated string for the duration
        // of the call.
        let code = unsafe { (self.api.load_plugin)(c_path.as_ptr()) };
        Ok(status::check(code, path)?)
    }

    /// Pass a parameter string to the loaded plugin.
    pub fn plugin_params(&self, params: &str) -> Result<(), BridgeError> {
        let c_params = to_c_string(params)?;
        // SAFETY: c_params is a valid NUL-terminated string for the duration
        // of the call.
        let code = unsafe { (self.api.plugin_params)(c_params.as_ptr()) };
        Ok(status::check(code, "engine_plugin_params")?)
    }

    /// Set the capture sample rate in samples per second.
    pub fn set_sample_rate(&self, rate: u32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_sample_rate)(rate) };
        Ok(status::check(code, "engine_set_sample_rate")?)
    }

    /// Set the base tuning frequency in Hz.
    pub fn set_base_freq(&self, freq: u32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_base_freq)(freq) };
        Ok(status::check(code, "engine_set_base_freq")?)
    }

    /// Set the receiver gain, nominally in `[0, 1]`.
    pub fn set_gain(&self, gain: f32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_gain)(gain) };
        Ok(status::check(code, "engine_set_gain")?)
    }

    /// Set the vertical refresh frequency in Hz.
    pub fn set_vfreq(&self, freq: f32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_vfreq)(freq) };
        Ok(status::check(code, "engine_set_vfreq")?)
    }

    /// Set the horizontal refresh frequency in Hz.
    pub fn set_hfreq(&self, freq: f32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_hfreq)(freq) };
        Ok(status::check(code, "engine_set_hfreq")?)
    }

    /// Set the frame resolution the engine reconstructs.
    pub fn set_resolution(&self, width: u32, height: u32) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.set_resolution)(width, height) };
        Ok(status::check(code, "engine_set_resolution")?)
    }

    /// Run the engine's read loop; blocks until [`CaptureEngine::stop`].
    ///
    /// `sink` is invoked on the engine's own thread once per frame with
    /// `user_data` passed through untouched.
    pub fn read_async(&self, sink: FrameSink, user_data: *mut c_void) -> Result<(), BridgeError> {
        // SAFETY: sink and user_data stay valid for the duration of the
        // call; the engine stops invoking the sink once this returns.
        let code = unsafe { (self.api.read_async)(sink, user_data) };
        Ok(status::check(code, "engine_read_async")?)
    }

    /// Ask a running read loop to exit at its next safe point.
    pub fn stop(&self) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.stop)() };
        Ok(status::check(code, "engine_stop")?)
    }

    /// Unload the current SDR source plugin.
    pub fn unload_plugin(&self) -> Result<(), BridgeError> {
        // SAFETY: plain value call into the bound engine.
        let code = unsafe { (self.api.unload_plugin)() };
        Ok(status::check(code, "engine_unload_plugin")?)
    }
}

fn to_c_string(value: &str) -> Result<CString, BridgeError> {
    CString::new(value).map_err(|e| BridgeError::StringConversion(e.to_string()))
}

/// Open the engine library and resolve its control symbols.
fn load_engine(library_path: &str) -> Result<CaptureEngine, BridgeError> {
    // SAFETY: We're loading a shared library. The caller is responsible for
    // pointing engine_library at a trusted engine build.
    let library = unsafe { Library::new(library_path) }
        .map_err(|e| BridgeError::LibraryLoad(format!("{}: {}", library_path, e)))?;

    // Get all required symbols
    // SAFETY: We're getting function pointers from the loaded library.
    let load_plugin: Symbol<LoadPluginFn> = unsafe { library.get(b"engine_load_plugin\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_load_plugin: {}", e)))?;

    let plugin_params: Symbol<PluginParamsFn> = unsafe { library.get(b"engine_plugin_params\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_plugin_params: {}", e)))?;

    let set_sample_rate: Symbol<SetSampleRateFn> =
        unsafe { library.get(b"engine_set_sample_rate\0") }
            .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_sample_rate: {}", e)))?;

    let set_base_freq: Symbol<SetBaseFreqFn> = unsafe { library.get(b"engine_set_base_freq\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_base_freq: {}", e)))?;

    let set_gain: Symbol<SetGainFn> = unsafe { library.get(b"engine_set_gain\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_gain: {}", e)))?;

    let set_vfreq: Symbol<SetVfreqFn> = unsafe { library.get(b"engine_set_vfreq\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_vfreq: {}", e)))?;

    let set_hfreq: Symbol<SetHfreqFn> = unsafe { library.get(b"engine_set_hfreq\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_hfreq: {}", e)))?;

    let set_resolution: Symbol<SetResolutionFn> =
        unsafe { library.get(b"engine_set_resolution\0") }
            .map_err(|e| BridgeError::SymbolNotFound(format!("engine_set_resolution: {}", e)))?;

    let read_async: Symbol<ReadAsyncFn> = unsafe { library.get(b"engine_read_async\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_read_async: {}", e)))?;

    let stop: Symbol<StopFn> = unsafe { library.get(b"engine_stop\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_stop: {}", e)))?;

    let unload_plugin: Symbol<UnloadPluginFn> = unsafe { library.get(b"engine_unload_plugin\0") }
        .map_err(|e| BridgeError::SymbolNotFound(format!("engine_unload_plugin: {}", e)))?;

    // Store function pointers (they must outlive the Symbol guards)
    // SAFETY: These function pointers stay valid as long as the library is loaded
    let api = EngineApi {
        load_plugin: *load_plugin,
        plugin_params: *plugin_params,
        set_sample_rate: *set_sample_rate,
        set_base_freq: *set_base_freq,
        set_gain: *set_gain,
        set_vfreq: *set_vfreq,
        set_hfreq: *set_hfreq,
        set_resolution: *set_resolution,
        read_async: *read_async,
        stop: *stop,
        unload_plugin: *unload_plugin,
    };

    tracing::info!("capture engine bound from {}", library_path);

    Ok(CaptureEngine {
        _library: library,
        api,
    })
}

#[cfg(test)]
#[path = "engine/engine_tests.rs"]
mod engine_tests;
