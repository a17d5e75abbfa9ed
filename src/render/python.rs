//! Python code generation

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::ir::IrStatement;

use super::{escape_keyword, pointer_step, provenance_lines, RenderConfig};

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "match", "case", "type",
];

/// Render a unit to a Python module holding one class of static methods
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> String {
    PythonRenderer { config }.render(unit)
}

struct PythonRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> PythonRenderer<'a> {
    fn render(&self, unit: &CompiledUnit) -> String {
        let mut out = String::new();

        if self.config.provenance {
            for line in provenance_lines(unit) {
                out.push_str(&format!("# {}\n", line));
            }
            out.push('\n');
        }

        out.push_str(&format!("TAPE_SIZE = {}\n\n\n", self.config.tape_size));
        out.push_str(&format!("class {}:\n", self.config.container));

        if unit.functions.is_empty() {
            self.line(&mut out, 1, "pass");
        }

        for (i, function) in unit.functions.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_function(function, &mut out);
        }

        out
    }

    fn render_function(&self, function: &CompiledFunction, out: &mut String) {
        let name = escape_keyword(function.name.clone(), KEYWORDS);

        self.line(out, 1, "@staticmethod");
        self.line(
            out,
            1,
            &format!("def {}(input: str = \"\") -> str:", name),
        );
        self.line(out, 2, &format!("\"\"\"Compiled from {}\"\"\"", function.source));
        for line in [
            "tape = bytearray(TAPE_SIZE)",
            "ptr = 0",
            "input_pos = 0",
            "output = []",
        ] {
            self.line(out, 2, line);
        }

        let mut depth = 2;
        let mut previous = None;
        for stmt in &function.body {
            match stmt {
                IrStatement::LoopOpen => {
                    self.line(out, depth, "while tape[ptr] != 0:");
                    depth += 1;
                }
                IrStatement::LoopClose => {
                    if previous == Some(&IrStatement::LoopOpen) {
                        self.line(out, depth, "pass");
                    }
                    depth = depth.saturating_sub(1);
                }
                other => {
                    for line in self.statement(other) {
                        self.line(out, depth, &line);
                    }
                }
            }
            previous = Some(stmt);
        }

        self.line(out, 2, "return \"\".join(output)");
    }

    fn statement(&self, stmt: &IrStatement) -> Vec<String> {
        match stmt {
            IrStatement::Increment => vec!["tape[ptr] = (tape[ptr] + 1) % 256".into()],
            IrStatement::Decrement => vec!["tape[ptr] = (tape[ptr] - 1) % 256".into()],
            IrStatement::MovePointer(delta) => vec![format!(
                "ptr = (ptr + {}) % TAPE_SIZE",
                pointer_step(*delta, self.config.tape_size)
            )],
            IrStatement::Write => vec!["output.append(chr(tape[ptr]))".into()],
            IrStatement::Read => vec![
                "tape[ptr] = ord(input[input_pos]) % 256 if input_pos < len(input) else 0".into(),
                "input_pos += 1".into(),
            ],
            IrStatement::LoopOpen | IrStatement::LoopClose => vec![],
        }
    }

    fn line(&self, out: &mut String, depth: usize, text: &str) {
        out.push_str(&self.config.indent.repeat(depth));
        out.push_str(text);
        out.push('\n');
    }
}
