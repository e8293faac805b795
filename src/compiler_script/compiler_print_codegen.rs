//PRINT becomes a console.log call,
//variables pass through bare and every literal is re-quoted as a string

use super::compiler_context::Compiler;
use crate::ast::{PrintItem, PrintStatement};

pub fn codegen_print(compiler: &mut Compiler, stmt: &PrintStatement, depth: usize) {
    compiler.emit_line(depth, &format!("console.log({});", format_print_values(&stmt.values)));
}

pub fn format_print_values(values: &[PrintItem]) -> String {
    values
        .iter()
        .map(|item| match item {
            PrintItem::VariableReference(name) => name.clone(),
            PrintItem::StringLiteral(text) | PrintItem::RawLiteral(text) => quote_string(text),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Script string literal. Single quotes unless the text holds a single quote
/// and no double quote.
pub fn quote_string(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_items_keep_order() {
        let values = vec![
            PrintItem::StringLiteral("Value:".into()),
            PrintItem::VariableReference("X".into()),
            PrintItem::RawLiteral("5".into()),
        ];
        assert_eq!(format_print_values(&values), "'Value:', X, '5'");
    }

    #[test]
    fn empty_print_is_an_empty_call() {
        let mut compiler = Compiler::new();
        codegen_print(&mut compiler, &PrintStatement { values: vec![] }, 1);
        assert_eq!(compiler.finish(), "    console.log();\n");
    }

    #[test]
    fn quoting_escapes_what_it_must() {
        assert_eq!(quote_string("plain"), "'plain'");
        assert_eq!(quote_string("it's"), "\"it's\"");
        assert_eq!(quote_string("both ' and \""), "'both \\' and \"'");
        assert_eq!(quote_string("a\\b"), "'a\\\\b'");
        assert_eq!(quote_string("two\nlines"), "'two\\nlines'");
    }
}
