//fixed text every generated program starts with:
//a provenance comment and the doLoop helper that DO loops call into

use super::compiler_context::Compiler;

pub const PREAMBLE: &str = "// Generated from FORTRAN source\n\n";

/// Counted loop with FORTRAN semantics. Ascending steps run while
/// `index <= final`, descending ones while `index >= final`, and when
/// `init === final` the body runs exactly once whatever the step.
pub const DO_LOOP_HELPER: &str = r#"function doLoop(init, final, step, callback) {
    // Ensure FORTRAN DO loop semantics with at least one iteration
    let index = init;
    if (step > 0 && index <= final) {
        do {
            callback(index);
            index += step;
        } while (index <= final);
    } else if (step < 0 && index >= final) {
        do {
            callback(index);
            index += step;
        } while (index >= final);
    } else if (init === final) {
        // Execute exactly once when init equals final
        callback(init);
    }
}

"#;

pub fn codegen_runtime(compiler: &mut Compiler) {
    compiler.emit_raw(PREAMBLE);
    compiler.emit_raw(DO_LOOP_HELPER);
}
