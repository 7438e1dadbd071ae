use regex::Regex;

use crate::config::{EndIcon, FieldConfig, InputKind};

use super::error::InvalidPatternError;
use super::listener::EventListener;
use super::mode::{Mode, TapSource, TapTarget};
use super::strategy::{ValidationStrategy, compile_full_match};

/// Host interaction flags derived from the current [`Mode`]. The host is
/// expected to honor these when routing focus and keystrokes: a field in
/// click mode takes no focus and shows no cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub focusable: bool,
    pub cursor_visible: bool,
    pub long_clickable: bool,
}

impl Interaction {
    fn for_mode(mode: Mode) -> Self {
        let edit = mode.is_edit();
        Self {
            focusable: edit,
            cursor_visible: edit,
            long_clickable: edit,
        }
    }
}

/// FieldController
/// Action-validation state for one text field. It consumes the raw
/// text-change and tap notifications of a host text widget and derives the
/// two outcomes the caller cares about: an action signal and a validation
/// signal, delivered through an optional [`EventListener`] and as return
/// values.
///
/// The controller owns the derived field state (current text, validity,
/// error message, masking, interaction flags); the host reads it back to
/// render. It never renders anything itself.
pub struct FieldController {
    mode: Mode,
    tap_target: TapTarget,
    input: InputKind,
    end_icon: EndIcon,
    strategy: Option<Box<dyn ValidationStrategy>>,
    pattern: Option<Regex>,
    default_invalid_error: Option<String>,
    listener: Option<Box<dyn EventListener>>,
    text: String,
    error: Option<String>,
    valid: bool,
    masked: bool,
}

impl FieldController {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            tap_target: TapTarget::default(),
            input: InputKind::default(),
            end_icon: EndIcon::None,
            strategy: None,
            pattern: None,
            default_invalid_error: None,
            listener: None,
            text: String::new(),
            error: None,
            valid: true,
            masked: false,
        }
    }

    /// Build a controller from parsed declarative attributes. A declarative
    /// validation pattern that fails to compile is reported here, at
    /// configuration time, not on a later keystroke.
    pub fn from_config(config: FieldConfig) -> Result<Self, InvalidPatternError> {
        let mut controller = Self::new();
        controller.mode = config.mode;
        controller.tap_target = config.tap_target;
        controller.end_icon = config.end_icon;
        controller.default_invalid_error = config.invalid_error;
        controller.set_input(config.input);
        if let Some(validation) = config.validation {
            controller.set_validation_strategy(Some(Box::new(validation)))?;
        }
        Ok(controller)
    }

    pub fn with_listener(mut self, listener: impl EventListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn with_default_invalid_error(mut self, message: impl Into<String>) -> Self {
        self.default_invalid_error = Some(message.into());
        self
    }

    pub fn set_listener(&mut self, listener: Option<Box<dyn EventListener>>) {
        self.listener = listener;
    }

    pub fn set_default_invalid_error(&mut self, message: Option<String>) {
        self.default_invalid_error = message;
    }

    /// Reconfigure tap interception. Idempotent: tap acceptance and the
    /// interaction flags are derived from the stored mode on every event,
    /// so repeated calls cannot stack handlers.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_tap_target(&mut self, tap_target: TapTarget) {
        self.tap_target = tap_target;
    }

    pub fn set_input(&mut self, input: InputKind) {
        self.input = input;
        self.masked = input.is_password();
    }

    pub fn set_end_icon(&mut self, end_icon: EndIcon) {
        self.end_icon = end_icon;
    }

    /// Replace the active strategy. The pattern is compiled (whole-string
    /// anchored) up front; on failure the previously installed strategy
    /// stays active and the error is returned to the caller.
    ///
    /// Replacing the strategy does not itself re-run validation: the
    /// displayed error and validity change on the next text-change event.
    /// Call [`revalidate`](Self::revalidate) for eager behavior.
    pub fn set_validation_strategy(
        &mut self,
        strategy: Option<Box<dyn ValidationStrategy>>,
    ) -> Result<(), InvalidPatternError> {
        let pattern = match &strategy {
            Some(strategy) => match strategy.pattern() {
                Some(pattern) => Some(compile_full_match(&pattern)?),
                None => None,
            },
            None => None,
        };
        self.strategy = strategy;
        self.pattern = pattern;
        Ok(())
    }

    /// Feed the field's current full text after an insert/delete/replace.
    ///
    /// Recomputes validity and the displayed error, then reports through
    /// `on_validation` unconditionally (with no strategy installed the
    /// field is always valid). Returns the validity.
    pub fn on_text_changed(&mut self, text: &str) -> bool {
        self.text.clear();
        self.text.push_str(text);

        let (is_valid, error) = match &self.strategy {
            None => (true, None),
            Some(strategy) => {
                let matches = match &self.pattern {
                    Some(pattern) => pattern.is_match(text),
                    None => true,
                };
                let error = if text.trim().is_empty() {
                    // Empty input errors come from the strategy alone, never
                    // from the default fallback.
                    strategy.empty_error()
                } else if !matches {
                    strategy
                        .invalid_error()
                        .or_else(|| self.default_invalid_error.clone())
                } else {
                    None
                };
                (matches, error)
            }
        };

        self.valid = is_valid;
        self.error = error;
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_validation(is_valid, text);
        }
        is_valid
    }

    /// Re-run validation against the current text, e.g. after the strategy
    /// changed.
    pub fn revalidate(&mut self) -> bool {
        let text = self.text.clone();
        self.on_text_changed(&text)
    }

    /// Report a tap on the field surface or the end icon. Returns whether
    /// an action was fired.
    ///
    /// Icon taps are interpreted by the configured [`EndIcon`] regardless
    /// of mode: a password toggle flips masking, an action icon fires
    /// `on_action`. Field taps fire `on_action` only in [`Mode::Click`]
    /// with [`TapTarget::FieldAndIcon`].
    pub fn tap(&mut self, source: TapSource) -> bool {
        match source {
            TapSource::Icon => match self.end_icon {
                EndIcon::PasswordToggle => {
                    self.masked = !self.masked;
                    false
                }
                EndIcon::Action => self.fire_action(),
                EndIcon::None => false,
            },
            TapSource::Field => {
                if self.mode == Mode::Click && self.tap_target == TapTarget::FieldAndIcon {
                    self.fire_action()
                } else {
                    false
                }
            }
        }
    }

    fn fire_action(&mut self) -> bool {
        let text = self.text.clone();
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_action(&text);
        }
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text as the host should show it: masked when a password field is
    /// currently hidden, verbatim otherwise.
    pub fn display_text(&self) -> String {
        if self.masked {
            self.text.chars().map(|_| '•').collect()
        } else {
            self.text.clone()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tap_target(&self) -> TapTarget {
        self.tap_target
    }

    pub fn input(&self) -> InputKind {
        self.input
    }

    pub fn end_icon(&self) -> EndIcon {
        self.end_icon
    }

    pub fn interaction(&self) -> Interaction {
        Interaction::for_mode(self.mode)
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }
}

impl Default for FieldController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FieldController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldController")
            .field("mode", &self.mode)
            .field("tap_target", &self.tap_target)
            .field("input", &self.input)
            .field("end_icon", &self.end_icon)
            .field("strategy", &self.strategy)
            .field("text", &self.text)
            .field("error", &self.error)
            .field("valid", &self.valid)
            .field("masked", &self.masked)
            .finish_non_exhaustive()
    }
}
