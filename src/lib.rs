//! FORTRAN-subset to JavaScript translator.
//!
//! The pipeline is `lexer_tokenizer::tokenize` → `parser::parse` →
//! `compiler_script::generate`; `pipeline::transpile` runs all three.

pub mod ast;
pub mod compiler_script;
pub mod config;
pub mod driver;
pub mod lexer_tokenizer;
pub mod parser;
pub mod pipeline;

pub use pipeline::{CompileError, Stage, check, transpile, transpile_observed};
