//IF becomes an `if (...) { }` block,
//the condition is raw text so only a fixed set of operator spellings is rewritten

use super::compiler_context::Compiler;
use super::compiler_print_codegen::codegen_print;
use crate::ast::PrintStatement;

/// Applied in order, each over the whole condition text.
pub const CONDITION_SUBSTITUTIONS: &[(&str, &str)] =
    &[("/=", "!="), (".EQ.", "==="), (".NE.", "!==")];

pub fn translate_condition(condition: &str) -> String {
    CONDITION_SUBSTITUTIONS
        .iter()
        .fold(condition.to_string(), |text, (from, to)| text.replace(from, to))
}

pub fn codegen_if(compiler: &mut Compiler, condition: &str, then_branch: &[PrintStatement]) {
    compiler.emit_line(0, &format!("if ({}) {{", translate_condition(condition)));
    for stmt in then_branch {
        codegen_print(compiler, stmt, 1);
    }
    compiler.emit_line(0, "}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrintItem;

    #[test]
    fn substitution_table() {
        assert!(translate_condition("X /= 5").contains("!="));
        assert_eq!(translate_condition("X /= 5"), "X != 5");
        assert_eq!(translate_condition("X .EQ. Y"), "X === Y");
        assert_eq!(translate_condition("X .NE. Y"), "X !== Y");
    }

    #[test]
    fn other_text_passes_through() {
        for text in ["( x > 5 )", "A <= B", "A == 1", "N >= \"x\""] {
            assert_eq!(translate_condition(text), text);
        }
    }

    #[test]
    fn block_has_indented_prints_and_no_else() {
        let mut compiler = Compiler::new();
        let body = vec![PrintStatement {
            values: vec![PrintItem::StringLiteral("Matched".into())],
        }];
        codegen_if(&mut compiler, "X == 5", &body);
        assert_eq!(
            compiler.finish(),
            "if (X == 5) {\n    console.log('Matched');\n}\n"
        );
    }
}
