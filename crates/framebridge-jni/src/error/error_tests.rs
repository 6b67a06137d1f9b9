#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(
    EngineError::PluginLoad("p".into()),
    "com/framebridge/PluginLoadException"
)]
#[test_case(
    EngineError::NotImplemented("n".into()),
    "com/framebridge/NotImplementedException"
)]
#[test_case(
    EngineError::InvalidResolution("r".into()),
    "com/framebridge/InvalidResolutionException"
)]
#[test_case(
    EngineError::AlreadyRunning("a".into()),
    "com/framebridge/AlreadyRunningException"
)]
fn BridgeError___engine_failure___maps_to_typed_exception(err: EngineError, expected: &str) {
    let err = BridgeError::from(err);

    assert_eq!(err.exception_class(), expected);
}

#[test]
fn BridgeError___unspecified_engine_failure___maps_to_engine_exception() {
    let err = BridgeError::from(EngineError::Unspecified {
        code: 9,
        context: "engine_stop".into(),
    });

    assert_eq!(err.exception_class(), "com/framebridge/EngineException");
}

#[test]
fn BridgeError___missing_member___maps_to_missing_member_exception() {
    let err = BridgeError::MissingMember {
        name: "pixels",
        signature: "[I",
    };

    assert_eq!(
        err.exception_class(),
        "com/framebridge/MissingMemberException"
    );
}

#[test]
fn BridgeError___not_initialized___maps_to_illegal_state() {
    let err = BridgeError::NotInitialized("capture engine");

    assert_eq!(err.exception_class(), "java/lang/IllegalStateException");
}

#[test_case(BridgeError::LibraryLoad("no such file".into()))]
#[test_case(BridgeError::SymbolNotFound("engine_stop".into()))]
fn BridgeError___load_failure___maps_to_unsatisfied_link_error(err: BridgeError) {
    assert_eq!(err.exception_class(), "java/lang/UnsatisfiedLinkError");
}

#[test]
fn BridgeError___config___maps_to_illegal_argument() {
    let err = BridgeError::Config("missing field engine_library".into());

    assert_eq!(err.exception_class(), "java/lang/IllegalArgumentException");
}

#[test_case(BridgeError::PixelBuffer("short".into()))]
#[test_case(BridgeError::StringConversion("bad utf8".into()))]
#[test_case(BridgeError::Panic("boom".into()))]
fn BridgeError___glue_failure___maps_to_runtime_exception(err: BridgeError) {
    assert_eq!(err.exception_class(), "java/lang/RuntimeException");
}

#[test]
fn BridgeError___engine_failure___keeps_engine_message() {
    let err = BridgeError::from(EngineError::AlreadyRunning("engine_read_async".into()));

    assert_eq!(err.to_string(), "capture already running: engine_read_async");
}

#[test]
fn BridgeError___missing_member___names_member_and_signature() {
    let err = BridgeError::MissingMember {
        name: "frameReady",
        signature: "()V",
    };

    let display = err.to_string();

    assert!(display.contains("frameReady"));
    assert!(display.contains("()V"));
}

#[test]
fn BridgeError___not_initialized___points_at_native_init() {
    let err = BridgeError::NotInitialized("JVM handle");

    assert!(err.to_string().contains("nativeInit"));
}
