use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::InvalidPatternError;

/// ValidationStrategy
/// Provides a regex to validate input with. The value returned by
/// [`empty_error`](ValidationStrategy::empty_error) is shown when input is
/// empty or blank; the one returned by
/// [`invalid_error`](ValidationStrategy::invalid_error) when input does not
/// pass validation. All three are independently optional.
pub trait ValidationStrategy: std::fmt::Debug {
    fn pattern(&self) -> Option<String> {
        None
    }

    fn empty_error(&self) -> Option<String> {
        None
    }

    fn invalid_error(&self) -> Option<String> {
        None
    }

    /// True if no pattern is supplied, otherwise true iff the pattern
    /// matches the entire text. A pattern that fails to compile is an
    /// error, never "valid".
    fn validate(&self, text: &str) -> Result<bool, InvalidPatternError> {
        match self.pattern() {
            Some(pattern) => Ok(compile_full_match(&pattern)?.is_match(text)),
            None => Ok(true),
        }
    }
}

/// A strategy described by data: a pattern and the two error strings.
///
/// Deserializable so it can ride in a declarative attribute object; see
/// [`FieldConfig::from_attrs`](crate::FieldConfig::from_attrs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexStrategy {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub empty_error: Option<String>,
    #[serde(default)]
    pub invalid_error: Option<String>,
}

impl RegexStrategy {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            empty_error: None,
            invalid_error: None,
        }
    }

    /// A strategy with no pattern: accepts anything, shows no errors.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_empty_error(mut self, message: impl Into<String>) -> Self {
        self.empty_error = Some(message.into());
        self
    }

    pub fn with_invalid_error(mut self, message: impl Into<String>) -> Self {
        self.invalid_error = Some(message.into());
        self
    }
}

impl ValidationStrategy for RegexStrategy {
    fn pattern(&self) -> Option<String> {
        self.pattern.clone()
    }

    fn empty_error(&self) -> Option<String> {
        self.empty_error.clone()
    }

    fn invalid_error(&self) -> Option<String> {
        self.invalid_error.clone()
    }
}

/// Compile a pattern anchored to the whole input. Strategies describe the
/// entire acceptable text, not a substring of it.
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, InvalidPatternError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|err| InvalidPatternError {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}
