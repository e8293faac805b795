//parser state: the token slice and a forward-only cursor,
//plus the bounds-checked accessors every statement form goes through

use crate::ast::Program;
use crate::lexer_tokenizer::{Token, TokenKind};
use crate::parser::parser_error::ParseError;
use tracing::debug;

pub struct Parser<'a> {
    pub tokens: &'a [Token],
    pub pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Token at an absolute index the statement form cannot do without.
    pub fn require(
        &self,
        index: usize,
        code: &'static str,
        message: &str,
    ) -> Result<&'a Token, ParseError> {
        self.tokens
            .get(index)
            .ok_or_else(|| self.error_at(index, code, message))
    }

    pub fn error_at(&self, index: usize, code: &'static str, message: impl Into<String>) -> ParseError {
        let line = self
            .tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .map(|t| t.line);
        ParseError::new(code, message, index, line)
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while self.current().is_some() {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }

        debug!(statements = statements.len(), tokens = self.tokens.len(), "parsed program");
        Ok(Program { statements })
    }
}

pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
