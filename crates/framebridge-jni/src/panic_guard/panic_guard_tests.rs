#![allow(non_snake_case)]

use super::*;

#[test]
fn catch_panic___no_panic___passes_value_through() {
    let result = catch_panic(|| 7);

    assert_eq!(result.unwrap(), 7);
}

#[test]
fn catch_panic___str_payload___becomes_panic_error() {
    let result: Result<(), BridgeError> = catch_panic(|| panic!("boom"));

    let err = result.unwrap_err();
    assert!(matches!(err, BridgeError::Panic(_)));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn catch_panic___string_payload___preserves_message() {
    let frame = 42;
    let result: Result<(), BridgeError> = catch_panic(move || panic!("bad frame {}", frame));

    assert!(result.unwrap_err().to_string().contains("bad frame 42"));
}

#[test]
fn catch_panic___error_result___is_not_mistaken_for_panic() {
    let result = catch_panic(|| -> Result<(), BridgeError> {
        Err(BridgeError::NotInitialized("capture engine"))
    });

    let inner = result.unwrap();
    assert!(matches!(inner, Err(BridgeError::NotInitialized(_))));
}
