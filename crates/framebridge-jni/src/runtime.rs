//! Process-wide JVM access.
//!
//! The engine delivers frames on a thread the JVM has never seen. This
//! module holds the `JavaVM` captured at `nativeInit` and hands any thread,
//! attached or not, a usable `JNIEnv`.

use jni::sys::jint;
use jni::{JNIEnv, JavaVM};
use once_cell::sync::OnceCell;

use crate::error::BridgeError;

/// Global JVM handle
static RUNTIME: OnceCell<RuntimeBridge> = OnceCell::new();

/// The JVM handle and the JNI version it reported at install time.
pub struct RuntimeBridge {
    vm: JavaVM,
    version: jint,
}

impl RuntimeBridge {
    /// Capture the JVM from the caller's environment.
    ///
    /// Idempotent: the first call wins and later calls keep the original
    /// handle. Must complete before any capture session starts.
    pub fn install(env: &JNIEnv) -> Result<&'static RuntimeBridge, BridgeError> {
        RUNTIME.get_or_try_init(|| {
            let vm = env.get_java_vm()?;
            let version = env.get_version()?.into();
            tracing::debug!("captured JVM handle (JNI version {:#x})", version);
            Ok(RuntimeBridge { vm, version })
        })
    }

    /// The installed bridge, or a typed failure before [`RuntimeBridge::install`].
    pub fn global() -> Result<&'static RuntimeBridge, BridgeError> {
        RUNTIME.get().ok_or(BridgeError::NotInitialized("JVM handle"))
    }

    /// The calling thread's JNI environment.
    ///
    /// Threads the JVM does not know yet (the engine's producer thread) are
    /// attached permanently; the attachment lasts until the thread exits.
    pub fn current_env(&self) -> Result<JNIEnv<'_>, BridgeError> {
        match self.vm.get_env() {
            Ok(env) => Ok(env),
            Err(jni::errors::Error::JniCall(jni::errors::JniError::ThreadDetached)) => {
                tracing::debug!(
                    "attaching engine thread to the JVM (JNI version {:#x})",
                    self.version
                );
                Ok(self.vm.attach_current_thread_permanently()?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
