//DO becomes a doLoop call with a fixed step of 1,
//the loop variable is the callback parameter

use super::compiler_context::Compiler;
use super::compiler_print_codegen::codegen_print;
use super::compiler_variable_codegen::render_operand;
use crate::ast::{Operand, PrintStatement};

pub const LOOP_STEP: i64 = 1;

pub fn codegen_loop(
    compiler: &mut Compiler,
    variable: &str,
    start: &Operand,
    end: &Operand,
    body: &[PrintStatement],
) {
    compiler.emit_line(
        0,
        &format!(
            "doLoop({}, {}, {}, ({}) => {{",
            render_operand(start),
            render_operand(end),
            LOOP_STEP,
            variable
        ),
    );
    for stmt in body {
        codegen_print(compiler, stmt, 1);
    }
    compiler.emit_line(0, "});");
}
