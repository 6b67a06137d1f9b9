#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn EngineError___from_status_ok___returns_none() {
    let result = EngineError::from_status(status::OK, "engine_set_gain");

    assert!(result.is_none());
}

#[test_case(status::PLUGIN_LOAD_FAILED)]
#[test_case(status::NOT_IMPLEMENTED)]
#[test_case(status::INVALID_RESOLUTION)]
#[test_case(status::ALREADY_RUNNING)]
fn EngineError___from_status_known_code___round_trips_raw_status(code: i32) {
    let err = EngineError::from_status(code, "test").unwrap();

    assert_eq!(err.raw_status(), code);
}

#[test]
fn EngineError___from_status_plugin_load___returns_plugin_load_variant() {
    let err = EngineError::from_status(status::PLUGIN_LOAD_FAILED, "libmirics.so").unwrap();

    assert!(matches!(err, EngineError::PluginLoad(_)));
}

#[test]
fn EngineError___from_status_unknown_code___returns_unspecified() {
    let err = EngineError::from_status(255, "engine internals").unwrap();

    assert!(matches!(err, EngineError::Unspecified { code: 255, .. }));
}

#[test]
fn EngineError___all_variants___have_distinct_raw_status() {
    let errors = vec![
        EngineError::PluginLoad("".into()),
        EngineError::NotImplemented("".into()),
        EngineError::InvalidResolution("".into()),
        EngineError::AlreadyRunning("".into()),
        EngineError::Unspecified {
            code: 17,
            context: "".into(),
        },
    ];

    let codes: Vec<i32> = errors.iter().map(|e| e.raw_status()).collect();
    let unique: std::collections::HashSet<i32> = codes.iter().copied().collect();

    assert_eq!(codes.len(), unique.len(), "raw status codes should be unique");
}

#[test]
fn EngineError___already_running___displays_context() {
    let err = EngineError::AlreadyRunning("engine_read_async".into());

    let display = err.to_string();

    assert_eq!(display, "capture already running: engine_read_async");
}

#[test]
fn EngineError___unspecified___displays_code_and_context() {
    let err = EngineError::Unspecified {
        code: 7,
        context: "engine_set_sample_rate".into(),
    };

    let display = err.to_string();

    assert_eq!(display, "engine failure (status 7): engine_set_sample_rate");
}
