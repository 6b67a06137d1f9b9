//! Per-session bindings to the receiver object.
//!
//! A capture session resolves the receiver's fields and methods exactly
//! once, before the read loop starts, and never re-resolves them while
//! frames are in flight.

use jni::objects::{GlobalRef, JClass, JFieldID, JMethodID, JObject};
use jni::JNIEnv;

use crate::error::{clear_pending, BridgeError};

/// Resolved handles to one receiver object, owned by one session.
///
/// The object and class references are global, so the engine thread can use
/// them; both are released exactly once when the context drops, after the
/// read loop has returned.
pub struct TargetContext {
    /// The receiver, promoted for the session's lifetime.
    pub(crate) object: GlobalRef,
    /// The receiver's class, held so the cached IDs below stay valid.
    _class: GlobalRef,
    pub(crate) pixels_field: JFieldID,
    pub(crate) width_field: JFieldID,
    pub(crate) height_field: JFieldID,
    pub(crate) resize_method: JMethodID,
    pub(crate) frame_ready_method: JMethodID,
}

impl TargetContext {
    /// Resolve every member of the receiver contract up front.
    ///
    /// A missing member fails the whole resolution with
    /// [`BridgeError::MissingMember`] before any frame can be delivered.
    pub fn resolve(env: &mut JNIEnv, target: &JObject) -> Result<TargetContext, BridgeError> {
        let object = env.new_global_ref(target)?;
        let class = env.get_object_class(target)?;

        let pixels_field = lookup_field(env, &class, "pixels", "[I")?;
        let width_field = lookup_field(env, &class, "width", "I")?;
        let height_field = lookup_field(env, &class, "height", "I")?;
        let resize_method = lookup_method(env, &class, "resize", "(II)V")?;
        let frame_ready_method = lookup_method(env, &class, "frameReady", "()V")?;

        let class = env.new_global_ref(&class)?;

        Ok(TargetContext {
            object,
            _class: class,
            pixels_field,
            width_field,
            height_field,
            resize_method,
            frame_ready_method,
        })
    }
}

fn lookup_field(
    env: &mut JNIEnv,
    class: &JClass,
    name: &'static str,
    signature: &'static str,
) -> Result<JFieldID, BridgeError> {
    env.get_field_id(class, name, signature).map_err(|_| {
        // The JVM raised NoSuchFieldError; report the miss typed instead.
        clear_pending(env);
        BridgeError::MissingMember { name, signature }
    })
}

fn lookup_method(
    env: &mut JNIEnv,
    class: &JClass,
    name: &'static str,
    signature: &'static str,
) -> Result<JMethodID, BridgeError> {
    env.get_method_id(class, name, signature).map_err(|_| {
        // The JVM raised NoSuchMethodError; report the miss typed instead.
        clear_pending(env);
        BridgeError::MissingMember { name, signature }
    })
}
