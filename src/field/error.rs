#[derive(Debug, Clone)]
pub struct InvalidPatternError {
    pub pattern: String,
    pub message: String,
}

impl std::fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.message)
    }
}

impl std::error::Error for InvalidPatternError {}
