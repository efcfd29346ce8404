
use fixtures::*;
use macro_engine::{DispatchOutcome, DispatcherState, KeyEvent};
use macrod_cli::loader::build_dispatcher;
use std::fs;
use test_utils::{initialize_for_test, write_config};

#[test]
fn test_config_to_pipe_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let file = pipe_config(&out, "a", &[("ab", "ab;"), ("c*", "typed {};")]);
    let config = load(&file);

    let mut dispatcher = build_dispatcher(&config, "default").unwrap();
    assert_eq!(dispatcher.binding_count(), 2);

    tap_all(&mut dispatcher, &[KEY_A, KEY_B]);
    tap_all(&mut dispatcher, &[KEY_C, KEY_H, KEY_I, KEY_ENTER]);

    assert_eq!(fs::read_to_string(&out).unwrap(), "ab;typed hi;");
    assert_eq!(dispatcher.state(), DispatcherState::Accumulating);
    assert_eq!(dispatcher.buffer(), &[KeyEvent::release(KEY_ENTER)]);
}

#[test]
fn test_reset_key_abandons_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let file = pipe_config(&out, "w", &[("ab", "fired")]);
    let mut dispatcher = build_dispatcher(&load(&file), "default").unwrap();

    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(KEY_A)),
        DispatchOutcome::Retained
    );
    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(KEY_ESC)),
        DispatchOutcome::Reset
    );
    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(KEY_B)),
        DispatchOutcome::Flushed
    );
    assert!(!out.exists());
}

#[test]
fn test_configured_reset_and_wildcard_keys() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let file = write_config(&format!(
        r#"{{
            "reset_key": "<TAB>",
            "wildcard_key": "SPACE",
            "expressions": {{"default": {{"pipe path={}": {{"*": "{{}}"}}}}}}
        }}"#,
        out.display()
    ));
    let mut dispatcher = build_dispatcher(&load(&file), "default").unwrap();

    tap_all(&mut dispatcher, &[KEY_A, KEY_ENTER]);
    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(57)),
        DispatchOutcome::Fired { binding: 0 }
    );
    assert_eq!(fs::read_to_string(&out).unwrap(), "a");

    dispatcher.handle_event(KeyEvent::press(KEY_B));
    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(15)),
        DispatchOutcome::Reset
    );
}

#[test]
fn test_unknown_handler_fails_load() {
    let file = write_config(r#"{"expressions": {"default": {"callback": {"a": "x()"}}}}"#);

    let err = build_dispatcher(&load(&file), "default").unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("callback"), "{}", chain);
}

#[test]
fn test_bad_pattern_fails_load() {
    let file = write_config(r#"{"expressions": {"default": {"dummy": {"a-b": ""}}}}"#);

    let err = build_dispatcher(&load(&file), "default").unwrap_err();
    assert!(format!("{:#}", err).contains("a-b"));
}

#[test]
fn test_unknown_key_name_fails_load() {
    let file = write_config(r#"{"expressions": {"default": {"dummy": {"<NOPE>": ""}}}}"#);

    assert!(build_dispatcher(&load(&file), "default").is_err());
}

#[test]
fn test_missing_scheme_fails_load() {
    let file = write_config(r#"{"expressions": {"default": {"dummy": {"a": ""}}}}"#);

    assert!(build_dispatcher(&load(&file), "gaming").is_err());
}

#[test]
fn test_pointer_namespace() {
    let file = write_config(
        r#"{"namespace": "button", "reset_key": "SIDE", "wildcard_key": "MIDDLE",
            "expressions": {"default": {"dummy": {"<left><right>": ""}}}}"#,
    );
    let mut dispatcher = build_dispatcher(&load(&file), "default").unwrap();

    dispatcher.handle_event(KeyEvent::press(272));
    assert_eq!(
        dispatcher.handle_event(KeyEvent::press(273)),
        DispatchOutcome::Fired { binding: 0 }
    );
}

#[test]
fn test_global_config_points_at_file() {
    let file = write_config("{}");
    let config = initialize_for_test(&file);

    assert_eq!(config.config_files(), vec![file.path().to_path_buf()]);
    assert_eq!(config.scheme, "default");
}
