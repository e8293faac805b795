//codegen state: the output buffer and the names already bound with `let`,
//the declared set lives for the whole program, there are no scopes

use std::collections::HashSet;

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct Compiler {
    pub output: String,
    pub declared: HashSet<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn emit_raw(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// First binding of a name declares it, every later one rebinds.
    pub fn bind(&mut self, name: &str, value: &str) {
        if self.declared.insert(name.to_string()) {
            self.emit_line(0, &format!("let {} = {};", name, value));
        } else {
            self.emit_line(0, &format!("{} = {};", name, value));
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}
