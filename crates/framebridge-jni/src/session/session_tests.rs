#![allow(non_snake_case)]

use super::*;

#[test]
fn stop___before_engine_bound___returns_not_initialized() {
    // No engine library exists in the test environment, so nothing can have
    // bound the engine before this runs.
    let result = stop();

    let err = result.unwrap_err();
    assert!(matches!(err, BridgeError::NotInitialized(_)));
    assert_eq!(err.exception_class(), "java/lang/IllegalStateException");
}
