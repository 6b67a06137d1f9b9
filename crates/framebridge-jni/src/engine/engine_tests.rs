#![allow(non_snake_case)]

use super::*;

// No engine library exists in the test environment, so bind() can never
// succeed here and the global cell stays unset across the whole binary.

#[test]
fn CaptureEngine___bind_missing_library___returns_library_load_error() {
    let result = CaptureEngine::bind("/nonexistent/libsdrengine.so");

    let err = result.err().unwrap();
    assert!(matches!(err, BridgeError::LibraryLoad(_)));
    assert!(err.to_string().contains("/nonexistent/libsdrengine.so"));
}

#[test]
fn CaptureEngine___failed_bind___leaves_global_unbound() {
    let _ = CaptureEngine::bind("/nonexistent/libsdrengine.so");

    let result = CaptureEngine::global();

    assert!(matches!(result, Err(BridgeError::NotInitialized(_))));
}

#[test]
fn CaptureEngine___global_before_bind___returns_not_initialized() {
    let result = CaptureEngine::global();

    assert!(matches!(result, Err(BridgeError::NotInitialized(_))));
}
