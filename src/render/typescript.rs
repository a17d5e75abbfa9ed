//! TypeScript code generation from the embedded MiniJinja template

use serde::Serialize;

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::error::Result;
use crate::ir::IrStatement;
use crate::templates::render_template;
use crate::util::to_camel_case;

use super::{escape_keyword, pointer_step, provenance_lines, RenderConfig, Target};

// Static members may not shadow these built-in properties of a class
const RESERVED: &[&str] = &[
    "name",
    "length",
    "caller",
    "arguments",
    "prototype",
    "constructor",
];

#[derive(Serialize)]
struct UnitContext {
    provenance: Option<Vec<String>>,
    tape_size: usize,
    container: String,
    functions: Vec<FunctionContext>,
}

#[derive(Serialize)]
struct FunctionContext {
    name: String,
    source: String,
    lines: Vec<Line>,
}

#[derive(Serialize)]
struct Line {
    depth: usize,
    text: String,
}

/// Render a unit to a TypeScript module exporting one class
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> Result<String> {
    let ctx = UnitContext {
        provenance: config.provenance.then(|| provenance_lines(unit)),
        tape_size: config.tape_size,
        container: config.container.clone(),
        functions: unit
            .functions
            .iter()
            .map(|f| function_context(f, config.tape_size))
            .collect(),
    };
    Ok(render_template(Target::TypeScript, &ctx)?)
}

fn function_context(function: &CompiledFunction, tape_size: usize) -> FunctionContext {
    let mut depth = 2;
    let mut lines = Vec::new();
    let mut push = |depth: usize, text: String| lines.push(Line { depth, text });

    for stmt in &function.body {
        match stmt {
            IrStatement::LoopOpen => {
                push(depth, "while (tape[ptr] !== 0) {".into());
                depth += 1;
            }
            IrStatement::LoopClose => {
                depth = depth.saturating_sub(1);
                push(depth, "}".into());
            }
            IrStatement::Increment => push(depth, "tape[ptr]++;".into()),
            IrStatement::Decrement => push(depth, "tape[ptr]--;".into()),
            IrStatement::MovePointer(delta) => push(
                depth,
                format!(
                    "ptr = (ptr + {}) % TAPE_SIZE;",
                    pointer_step(*delta, tape_size)
                ),
            ),
            IrStatement::Write => push(depth, "output += String.fromCharCode(tape[ptr]);".into()),
            IrStatement::Read => {
                push(
                    depth,
                    "tape[ptr] = inputPos < input.length ? input.charCodeAt(inputPos) & 0xff : 0;"
                        .into(),
                );
                push(depth, "inputPos++;".into());
            }
        }
    }

    FunctionContext {
        name: escape_keyword(to_camel_case(&function.name), RESERVED),
        source: function.source.clone(),
        lines,
    }
}
