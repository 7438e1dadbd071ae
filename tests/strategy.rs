use avfield::prelude::*;

#[test]
fn pattern_matches_whole_text_not_substrings() {
    let strategy = RegexStrategy::new("[0-9]{4}");
    assert!(strategy.validate("1234").unwrap());
    assert!(!strategy.validate("a1234b").unwrap());
    assert!(!strategy.validate("12345").unwrap());
}

#[test]
fn explicit_anchors_are_tolerated() {
    let strategy = RegexStrategy::new("^[0-9]{4}$");
    assert!(strategy.validate("1234").unwrap());
    assert!(!strategy.validate("x1234").unwrap());
}

#[test]
fn absent_pattern_accepts_anything() {
    let strategy = RegexStrategy::none();
    assert!(strategy.validate("").unwrap());
    assert!(strategy.validate("no rules here").unwrap());
    assert_eq!(strategy.empty_error(), None);
    assert_eq!(strategy.invalid_error(), None);
}

#[test]
fn malformed_pattern_is_an_error_not_silently_valid() {
    let strategy = RegexStrategy::new("(");
    let err = strategy.validate("anything").unwrap_err();
    assert_eq!(err.pattern, "(");
    assert!(err.to_string().contains("invalid pattern"));
}

#[test]
fn builder_carries_error_strings() {
    let strategy = RegexStrategy::new("[a-z]+")
        .with_empty_error("Required")
        .with_invalid_error("Lowercase only");
    assert_eq!(strategy.pattern(), Some("[a-z]+".to_string()));
    assert_eq!(strategy.empty_error(), Some("Required".to_string()));
    assert_eq!(strategy.invalid_error(), Some("Lowercase only".to_string()));
}

#[derive(Debug)]
struct HexColor;

impl ValidationStrategy for HexColor {
    fn pattern(&self) -> Option<String> {
        Some("#[0-9a-fA-F]{6}".to_string())
    }

    fn invalid_error(&self) -> Option<String> {
        Some("Expected #RRGGBB".to_string())
    }
}

#[test]
fn custom_strategy_uses_trait_defaults() {
    let strategy = HexColor;
    assert_eq!(strategy.empty_error(), None);
    assert!(strategy.validate("#00ff99").unwrap());
    assert!(!strategy.validate("00ff99").unwrap());
}
