use serde_json::Value;

use crate::field::{Mode, RegexStrategy, TapTarget};

/// Input kind of a field, as the declarative `input` attribute encodes it.
/// Password input starts masked and defaults to a visibility-toggle end
/// icon; the other kinds only describe the expected content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Password,
}

impl InputKind {
    pub fn raw(self) -> i64 {
        match self {
            InputKind::Text => 0,
            InputKind::Email => 1,
            InputKind::Number => 2,
            InputKind::Password => 3,
        }
    }

    pub fn from_raw(raw: i64) -> Option<InputKind> {
        match raw {
            0 => Some(InputKind::Text),
            1 => Some(InputKind::Email),
            2 => Some(InputKind::Number),
            3 => Some(InputKind::Password),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<InputKind> {
        match name {
            "text" => Some(InputKind::Text),
            "email" => Some(InputKind::Email),
            "number" => Some(InputKind::Number),
            "password" => Some(InputKind::Password),
            _ => None,
        }
    }

    pub fn is_password(self) -> bool {
        self == InputKind::Password
    }
}

/// Trailing icon behavior.
///  - `PasswordToggle`: flips display masking; never fires an action.
///  - `Action`: taps fire `on_action` regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndIcon {
    #[default]
    None,
    PasswordToggle,
    Action,
}

impl EndIcon {
    pub fn from_name(name: &str) -> Option<EndIcon> {
        match name {
            "none" => Some(EndIcon::None),
            "password-toggle" => Some(EndIcon::PasswordToggle),
            "action" => Some(EndIcon::Action),
            _ => None,
        }
    }
}

/// One-shot translation of raw declarative attributes, performed before the
/// controller is configured.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    pub mode: Mode,
    pub input: InputKind,
    pub tap_target: TapTarget,
    pub end_icon: EndIcon,
    pub invalid_error: Option<String>,
    pub validation: Option<RegexStrategy>,
}

impl FieldConfig {
    /// Parse an attribute object.
    ///
    /// Enum-valued attributes accept the raw integer encodings (`mode`:
    /// 0=edit 1=click; `input`: 0=text 1=email 2=number 3=password) or the
    /// lowercase names. Unknown or out-of-range values fall back to the
    /// documented defaults; parsing never fails. A missing `end_icon`
    /// defaults from the input kind. An optional `validation` object
    /// deserializes into a [`RegexStrategy`]; its pattern is compiled (and
    /// rejected if malformed) by `FieldController::from_config`.
    pub fn from_attrs(attrs: &Value) -> FieldConfig {
        let mode = attr_enum(attrs, "mode", Mode::from_raw, Mode::from_name).unwrap_or_default();
        let input = attr_enum(attrs, "input", InputKind::from_raw, InputKind::from_name)
            .unwrap_or_default();
        let tap_target = attr_str(attrs, "tap_target")
            .and_then(|name| TapTarget::from_name(&name))
            .unwrap_or_default();
        let end_icon = attr_str(attrs, "end_icon")
            .and_then(|name| EndIcon::from_name(&name))
            .unwrap_or(default_end_icon(input));
        let invalid_error = attr_str(attrs, "invalid_error");
        let validation = attrs
            .get("validation")
            .and_then(|value| serde_json::from_value(value.clone()).ok());

        FieldConfig {
            mode,
            input,
            tap_target,
            end_icon,
            invalid_error,
            validation,
        }
    }
}

fn default_end_icon(input: InputKind) -> EndIcon {
    if input.is_password() {
        EndIcon::PasswordToggle
    } else {
        EndIcon::None
    }
}

fn attr_enum<T>(
    attrs: &Value,
    key: &str,
    from_raw: impl Fn(i64) -> Option<T>,
    from_name: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match attrs.get(key)? {
        Value::Number(num) => num.as_i64().and_then(from_raw),
        Value::String(name) => from_name(name),
        _ => None,
    }
}

fn attr_str(attrs: &Value, key: &str) -> Option<String> {
    attrs
        .get(key)
        .and_then(|value| value.as_str().map(str::to_string))
}
