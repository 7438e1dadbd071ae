use avfield::prelude::*;
use serde_json::json;

#[test]
fn raw_integer_attrs_use_original_encodings() {
    let config = FieldConfig::from_attrs(&json!({ "mode": 1, "input": 3 }));
    assert_eq!(config.mode, Mode::Click);
    assert_eq!(config.input, InputKind::Password);
    assert_eq!(config.end_icon, EndIcon::PasswordToggle);
}

#[test]
fn string_attrs_are_accepted() {
    let config = FieldConfig::from_attrs(&json!({
        "mode": "click",
        "input": "email",
        "tap_target": "icon-only",
        "end_icon": "action",
        "invalid_error": "Bad value",
    }));
    assert_eq!(config.mode, Mode::Click);
    assert_eq!(config.input, InputKind::Email);
    assert_eq!(config.tap_target, TapTarget::IconOnly);
    assert_eq!(config.end_icon, EndIcon::Action);
    assert_eq!(config.invalid_error.as_deref(), Some("Bad value"));
}

#[test]
fn unknown_values_fall_back_to_defaults() {
    let config = FieldConfig::from_attrs(&json!({
        "mode": 7,
        "input": -1,
        "tap_target": "everywhere",
        "end_icon": "sparkles",
    }));
    assert_eq!(config.mode, Mode::Edit);
    assert_eq!(config.input, InputKind::Text);
    assert_eq!(config.tap_target, TapTarget::FieldAndIcon);
    assert_eq!(config.end_icon, EndIcon::None);
}

#[test]
fn missing_attrs_yield_defaults() {
    for attrs in [json!({}), json!(null)] {
        let config = FieldConfig::from_attrs(&attrs);
        assert_eq!(config.mode, Mode::Edit);
        assert_eq!(config.input, InputKind::Text);
        assert_eq!(config.end_icon, EndIcon::None);
        assert_eq!(config.invalid_error, None);
        assert_eq!(config.validation, None);
    }
}

#[test]
fn end_icon_defaults_from_input_kind() {
    let password = FieldConfig::from_attrs(&json!({ "input": "password" }));
    assert_eq!(password.end_icon, EndIcon::PasswordToggle);

    let text = FieldConfig::from_attrs(&json!({ "input": "text" }));
    assert_eq!(text.end_icon, EndIcon::None);

    let explicit = FieldConfig::from_attrs(&json!({ "input": "password", "end_icon": "none" }));
    assert_eq!(explicit.end_icon, EndIcon::None);
}

#[test]
fn declarative_validation_builds_a_working_controller() {
    let attrs = json!({
        "input": "number",
        "invalid_error": "Invalid",
        "validation": {
            "pattern": "[0-9]{4}",
            "empty_error": "Required",
            "invalid_error": "4 digits",
        },
    });
    let mut controller = FieldController::from_config(FieldConfig::from_attrs(&attrs)).unwrap();

    controller.on_text_changed("");
    assert_eq!(controller.error(), Some("Required"));
    controller.on_text_changed("12");
    assert_eq!(controller.error(), Some("4 digits"));
    assert!(controller.on_text_changed("1234"));
    assert_eq!(controller.error(), None);
}

#[test]
fn declarative_default_error_backs_a_sparse_strategy() {
    let attrs = json!({
        "invalid_error": "Invalid",
        "validation": { "pattern": "[0-9]+" },
    });
    let mut controller = FieldController::from_config(FieldConfig::from_attrs(&attrs)).unwrap();
    controller.on_text_changed("abc");
    assert_eq!(controller.error(), Some("Invalid"));
}

#[test]
fn malformed_validation_shape_is_ignored() {
    let config = FieldConfig::from_attrs(&json!({ "validation": 5 }));
    assert_eq!(config.validation, None);
}

#[test]
fn malformed_validation_pattern_fails_at_configuration() {
    let attrs = json!({ "validation": { "pattern": "(" } });
    let err = FieldController::from_config(FieldConfig::from_attrs(&attrs)).unwrap_err();
    assert_eq!(err.pattern, "(");
}

#[test]
fn from_config_applies_mode_and_masking() {
    let click = FieldController::from_config(FieldConfig::from_attrs(&json!({ "mode": "click" })))
        .unwrap();
    assert_eq!(click.mode(), Mode::Click);
    assert!(!click.interaction().focusable);

    let password =
        FieldController::from_config(FieldConfig::from_attrs(&json!({ "input": "password" })))
            .unwrap();
    assert!(password.is_masked());
    assert_eq!(password.end_icon(), EndIcon::PasswordToggle);
}
