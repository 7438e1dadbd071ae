/// Tap behavior of a field.
///
/// - `Edit`: the field is directly editable; taps on the field surface do
///   nothing special.
/// - `Click`: the field behaves like a button; taps on it are reported as
///   actions and the cursor never appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Click,
}

impl Mode {
    pub fn raw(self) -> i64 {
        match self {
            Mode::Edit => 0,
            Mode::Click => 1,
        }
    }

    /// Decode a raw attribute value. Unknown values are not guessed at.
    pub fn from_raw(raw: i64) -> Option<Mode> {
        match raw {
            0 => Some(Mode::Edit),
            1 => Some(Mode::Click),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "edit" => Some(Mode::Edit),
            "click" => Some(Mode::Click),
            _ => None,
        }
    }

    pub fn is_edit(self) -> bool {
        self == Mode::Edit
    }
}

/// Which tap surfaces produce an action while in [`Mode::Click`].
///
/// Icon taps are governed by the configured end icon alone and are not
/// affected by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapTarget {
    IconOnly,
    #[default]
    FieldAndIcon,
}

impl TapTarget {
    pub fn from_name(name: &str) -> Option<TapTarget> {
        match name {
            "icon" | "icon-only" => Some(TapTarget::IconOnly),
            "field-and-icon" => Some(TapTarget::FieldAndIcon),
            _ => None,
        }
    }
}

/// Where a tap landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapSource {
    Field,
    Icon,
}
