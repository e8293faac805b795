//declarations and assignments,
//both go through the program-wide declared set

use super::compiler_context::Compiler;
use super::compiler_print_codegen::quote_string;
use crate::ast::Operand;

pub fn codegen_declaration(compiler: &mut Compiler, variable: &str) {
    compiler.bind(variable, "0");
}

pub fn codegen_assignment(compiler: &mut Compiler, variable: &str, value: &Operand) {
    compiler.bind(variable, &render_operand(value));
}

/// Script text for a single-token value.
pub fn render_operand(operand: &Operand) -> String {
    match operand {
        Operand::Identifier(name) => name.clone(),
        Operand::Number(number) => number.to_string(),
        Operand::Str(text) => quote_string(text),
        Operand::Raw(text) => text.clone(),
    }
}
