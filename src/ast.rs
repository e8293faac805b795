//AST (abstract syntax tree) is what the token stream turns into after parsing,
//here it is flat: a list of statements with no expression trees

use crate::lexer_tokenizer::Number;

/// A single-token value: assignment right-hand sides and loop bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Identifier(String),
    Number(Number),
    Str(String),
    // any other token kind, kept as its text
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrintItem {
    StringLiteral(String),
    VariableReference(String),
    RawLiteral(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub values: Vec<PrintItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `INTEGER :: name`, always zero-initialized.
    Declaration { variable: String },
    Assignment { variable: String, value: Operand },
    Print(PrintStatement),
    /// Condition is raw token text, translated only by substitution at codegen.
    Conditional {
        condition: String,
        then_branch: Vec<PrintStatement>,
    },
    /// Step is always 1 and never read from source.
    Loop {
        variable: String,
        start: Operand,
        end: Operand,
        body: Vec<PrintStatement>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}
