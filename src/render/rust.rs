//! Rust code generation
//!
//! Built as plain text, then normalized with prettyplease. The provenance
//! header is prepended after formatting because `//` comments do not
//! survive the round trip through `syn`.

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::error::Result;
use crate::format::format_rust;
use crate::ir::IrStatement;
use crate::util::to_snake_case;

use super::{escape_keyword, pointer_step, provenance_lines, RenderConfig};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
    "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
];

/// Render a unit to a Rust module
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> Result<String> {
    let code = RustRenderer { config }.render(unit);
    let code = if config.auto_format {
        format_rust(&code)?
    } else {
        code
    };

    let mut out = String::new();
    if config.provenance {
        for line in provenance_lines(unit) {
            out.push_str(&format!("// {}\n", line));
        }
        out.push('\n');
    }
    out.push_str(&code);
    Ok(out)
}

struct RustRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> RustRenderer<'a> {
    fn render(&self, unit: &CompiledUnit) -> String {
        let ind = &self.config.indent;
        let module = escape_keyword(to_snake_case(&self.config.container), KEYWORDS);
        let mut out = String::new();

        out.push_str(&format!("pub mod {} {{\n", module));
        out.push_str(&format!(
            "{}#![allow(unused_mut, unused_variables, unused_assignments)]\n\n",
            ind
        ));
        out.push_str(&format!(
            "{}pub const TAPE_SIZE: usize = {};\n",
            ind, self.config.tape_size
        ));

        for function in &unit.functions {
            out.push('\n');
            self.render_function(function, &mut out);
        }

        out.push_str("}\n");
        out
    }

    fn render_function(&self, function: &CompiledFunction, out: &mut String) {
        let ind = &self.config.indent;
        let name = escape_keyword(function.name.clone(), KEYWORDS);

        out.push_str(&format!("{}// {}\n", ind, function.source));
        out.push_str(&format!("{}pub fn {}(input: &str) -> String {{\n", ind, name));

        let mut depth = 2;
        for line in [
            "let input = input.as_bytes();",
            "let mut tape = [0u8; TAPE_SIZE];",
            "let mut ptr: usize = 0;",
            "let mut input_pos: usize = 0;",
            "let mut output = String::new();",
        ] {
            self.line(out, depth, line);
        }

        for stmt in &function.body {
            match stmt {
                IrStatement::LoopOpen => {
                    self.line(out, depth, "while tape[ptr] != 0 {");
                    depth += 1;
                }
                IrStatement::LoopClose => {
                    depth = depth.saturating_sub(1);
                    self.line(out, depth, "}");
                }
                other => {
                    for line in self.statement(other) {
                        self.line(out, depth, &line);
                    }
                }
            }
        }

        self.line(out, 2, "output");
        self.line(out, 1, "}");
    }

    fn statement(&self, stmt: &IrStatement) -> Vec<String> {
        match stmt {
            IrStatement::Increment => vec!["tape[ptr] = tape[ptr].wrapping_add(1);".into()],
            IrStatement::Decrement => vec!["tape[ptr] = tape[ptr].wrapping_sub(1);".into()],
            IrStatement::MovePointer(delta) => vec![format!(
                "ptr = (ptr + {}) % TAPE_SIZE;",
                pointer_step(*delta, self.config.tape_size)
            )],
            IrStatement::Write => vec!["output.push(char::from(tape[ptr]));".into()],
            IrStatement::Read => vec![
                "tape[ptr] = input.get(input_pos).copied().unwrap_or(0);".into(),
                "input_pos += 1;".into(),
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
