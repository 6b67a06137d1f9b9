//! Frame delivery from the engine thread into the JVM.
//!
//! [`deliver_frame`] is the callback the running session hands to
//! `engine_read_async`. It runs on the engine's producer thread, which it
//! attaches to the JVM on first use, and performs the per-frame sequence:
//! read the receiver's dimensions, resize if the frame's differ, convert
//! the samples into the pixel array, then fire `frameReady`.
//!
//! A frame that fails mid-delivery is logged and skipped; the read loop
//! keeps running and the cumulative count is reported through
//! [`dropped_frames`].

use std::ffi::c_void;
use std::sync::atomic::{AtomicU64, Ordering};

use framebridge_core::render_grayscale;
use jni::objects::{JIntArray, JValue, ReleaseMode};
use jni::signature::{Primitive, ReturnType};
use jni::sys::jint;
use jni::JNIEnv;

use crate::context::TargetContext;
use crate::error::{clear_pending, BridgeError};
use crate::panic_guard;
use crate::runtime::RuntimeBridge;

/// Local references created per frame (the pixel array plus call temporaries).
const LOCAL_FRAME_CAPACITY: i32 = 16;

/// Frames dropped after a mid-delivery failure.
static DROPPED_FRAMES: AtomicU64 = AtomicU64::new(0);

/// Total frames dropped since the library was loaded.
pub fn dropped_frames() -> u64 {
    DROPPED_FRAMES.load(Ordering::Relaxed)
}

/// Engine-facing frame callback.
///
/// # Safety
/// `samples` must point to `width * height` floats valid for the duration
/// of the call, and `user_data` must be the `TargetContext` pointer the
/// running session handed to `engine_read_async`.
pub(crate) unsafe extern "C" fn deliver_frame(
    samples: *const f32,
    width: u32,
    height: u32,
    user_data: *mut c_void,
) {
    let result = panic_guard::catch_panic(|| {
        if samples.is_null() {
            return Err(BridgeError::PixelBuffer(
                "engine delivered a null sample buffer".to_string(),
            ));
        }
        let sample_count = width as usize * height as usize;
        // SAFETY: per the callback contract, samples holds width * height
        // floats until this invocation returns.
        let samples = unsafe { std::slice::from_raw_parts(samples, sample_count) };
        // SAFETY: user_data is the TargetContext the session passed to
        // engine_read_async; it outlives the read loop.
        let context = unsafe { &*(user_data as *const TargetContext) };

        deliver_frame_impl(context, samples, width, height)
    });

    match result {
        Ok(Ok(())) => {}
        Ok(Err(err)) | Err(err) => {
            let dropped = DROPPED_FRAMES.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::error!("frame dropped ({} total): {}", dropped, err);
        }
    }
}

fn deliver_frame_impl(
    context: &TargetContext,
    samples: &[f32],
    width: u32,
    height: u32,
) -> Result<(), BridgeError> {
    let mut env = RuntimeBridge::global()?.current_env()?;

    let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| {
        write_frame(env, context, samples, width, height)
    });

    if result.is_err() {
        // A failed JNI call can leave a Java exception pending on this
        // thread; the next frame must start clean.
        clear_pending(&mut env);
    }

    result
}

/// One frame's worth of JNI traffic, inside its own local frame.
fn write_frame(
    env: &mut JNIEnv,
    context: &TargetContext,
    samples: &[f32],
    width: u32,
    height: u32,
) -> Result<(), BridgeError> {
    let target = context.object.as_obj();

    let current_width = env
        .get_field_unchecked(
            target,
            context.width_field,
            ReturnType::Primitive(Primitive::Int),
        )?
        .i()?;
    let current_height = env
        .get_field_unchecked(
            target,
            context.height_field,
            ReturnType::Primitive(Primitive::Int),
        )?
        .i()?;

    if current_width != width as jint || current_height != height as jint {
        let args = [
            JValue::Int(width as jint).as_jni(),
            JValue::Int(height as jint).as_jni(),
        ];
        // SAFETY: resize_method was resolved against the receiver's class
        // with signature (II)V and both arguments are jints.
        unsafe {
            env.call_method_unchecked(
                target,
                context.resize_method,
                ReturnType::Primitive(Primitive::Void),
                &args,
            )?
        };
    }

    let pixels_obj = env
        .get_field_unchecked(target, context.pixels_field, ReturnType::Array)?
        .l()?;
    if pixels_obj.is_null() {
        return Err(BridgeError::PixelBuffer("pixels array is null".to_string()));
    }
    let pixels = JIntArray::from(pixels_obj);

    // SAFETY: pixels is a live int[]; CopyBack writes the converted frame
    // back into it when the guard is released.
    let mut elements = unsafe { env.get_array_elements(&pixels, ReleaseMode::CopyBack)? };

    if elements.len() != samples.len() {
        return Err(BridgeError::PixelBuffer(format!(
            "pixel buffer holds {} ints, frame needs {} ({}x{})",
            elements.len(),
            samples.len(),
            width,
            height,
        )));
    }

    render_grayscale(samples, &mut elements);

    // Release (and copy back) before the notify call can observe the pixels.
    drop(elements);

    // SAFETY: frame_ready_method was resolved against the receiver's class
    // with signature ()V and takes no arguments.
    unsafe {
        env.call_method_unchecked(
            target,
            context.frame_ready_method,
            ReturnType::Primitive(Primitive::Void),
            &[],
        )?
    };

    Ok(())
}

#[cfg(test)]
#[path = "adapter/adapter_tests.rs"]
mod adapter_tests;
