//code generation kernel,
//walks the AST once and writes the target script, statement by statement

use crate::ast::{Program, Statement};
use tracing::debug;

pub mod compiler_context;
pub mod compiler_if_codegen;
pub mod compiler_loop_codegen;
pub mod compiler_print_codegen;
pub mod compiler_runtime;
pub mod compiler_variable_codegen;

use compiler_context::Compiler;

pub fn codegen_statement(compiler: &mut Compiler, stmt: &Statement) {
    match stmt {
        Statement::Declaration { variable } => {
            compiler_variable_codegen::codegen_declaration(compiler, variable)
        }
        Statement::Assignment { variable, value } => {
            compiler_variable_codegen::codegen_assignment(compiler, variable, value)
        }
        Statement::Print(print) => compiler_print_codegen::codegen_print(compiler, print, 0),
        Statement::Conditional {
            condition,
            then_branch,
        } => compiler_if_codegen::codegen_if(compiler, condition, then_branch),
        Statement::Loop {
            variable,
            start,
            end,
            body,
        } => compiler_loop_codegen::codegen_loop(compiler, variable, start, end, body),
    }
}

/// Translates a whole program. Pure: the same AST always yields the same text.
pub fn generate(program: &Program) -> String {
    let mut compiler = Compiler::new();
    compiler_runtime::codegen_runtime(&mut compiler);

    for stmt in &program.statements {
        codegen_statement(&mut compiler, stmt);
    }

    debug!(
        statements = program.statements.len(),
        declared = compiler.declared.len(),
        bytes = compiler.output.len(),
        "generated script"
    );
    compiler.finish()
}
