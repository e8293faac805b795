//structural parse errors,
//raised when a token the statement form needs is missing

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub code: &'static str,
    pub message: String,
    /// Token cursor index where the token was expected.
    pub position: usize,
    pub line: Option<usize>,
}

impl ParseError {
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        position: usize,
        line: Option<usize>,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            position,
            line,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        match self.line {
            Some(line) => write!(f, " (line {}, token {})", line, self.position),
            None => write!(f, " (token {})", self.position),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_location() {
        let err = ParseError::new("ERR-SYN-005", "IF block is never closed", 12, Some(3));
        assert_eq!(
            err.to_string(),
            "[ERR-SYN-005] IF block is never closed (line 3, token 12)"
        );
        let err = ParseError::new("ERR-SYN-001", "nothing to read", 0, None);
        assert_eq!(err.to_string(), "[ERR-SYN-001] nothing to read (token 0)");
    }
}
