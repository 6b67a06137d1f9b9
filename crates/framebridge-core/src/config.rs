//! Bridge configuration.

use serde::{Deserialize, Serialize};

/// Configuration passed to `nativeInit` as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Path (or soname) of the capture engine shared library.
    pub engine_library: String,

    /// Tracing filter directive, e.g. `"info"` or `"framebridge_jni=debug"`.
    ///
    /// The `RUST_LOG` environment variable takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl BridgeConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
