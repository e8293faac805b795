//the translation pipeline: lex, parse, generate,
//every stage consumes the previous one in full, a failure anywhere aborts the run

use crate::ast::Program;
use crate::compiler_script::generate;
use crate::lexer_tokenizer::{LexError, tokenize};
use crate::parser::{ParseError, parse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "Lexer",
            CompileError::Parse(_) => "Parser",
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            CompileError::Lex(e) => Some(e.line),
            CompileError::Parse(e) => e.line,
        }
    }
}

/// A completed pipeline stage, reported to observers as it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexed { tokens: usize },
    Parsed { statements: usize },
    Generated { bytes: usize },
}

impl Stage {
    pub const COUNT: u64 = 3;

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Lexed { .. } => "Lexer",
            Stage::Parsed { .. } => "Parser",
            Stage::Generated { .. } => "Codegen",
        }
    }
}

pub fn transpile(source: &str) -> Result<String, CompileError> {
    transpile_observed(source, |_| {})
}

pub fn transpile_observed(
    source: &str,
    mut observer: impl FnMut(Stage),
) -> Result<String, CompileError> {
    let program = front_end(source, &mut observer)?;
    let script = generate(&program);
    observer(Stage::Generated {
        bytes: script.len(),
    });
    Ok(script)
}

/// Lex and parse only; the program is returned for inspection.
pub fn check(source: &str) -> Result<Program, CompileError> {
    front_end(source, &mut |_| {})
}

fn front_end(source: &str, observer: &mut impl FnMut(Stage)) -> Result<Program, CompileError> {
    let tokens = tokenize(source)?;
    observer(Stage::Lexed {
        tokens: tokens.len(),
    });

    let program = parse(&tokens)?;
    observer(Stage::Parsed {
        statements: program.statements.len(),
    });
    Ok(program)
}
