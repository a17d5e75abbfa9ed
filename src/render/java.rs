//! Java code generation using genco

use genco::prelude::*;

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::error::{Error, Result};
use crate::ir::{nest, Block, IrStatement};
use crate::util::to_camel_case;

use super::{escape_keyword, pointer_step, provenance_lines, RenderConfig};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
    "null", "var", "yield", "record",
];

/// Render a unit to a final Java class of static methods
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> Result<String> {
    let tokens = JavaRenderer { config }.render(unit);
    tokens
        .to_file_string()
        .map_err(|e| Error::Render(format!("Java: {}", e)))
}

struct JavaRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> JavaRenderer<'a> {
    fn render(&self, unit: &CompiledUnit) -> java::Tokens {
        let class_name = &self.config.container;
        let header = if self.config.provenance {
            provenance_lines(unit)
        } else {
            vec![]
        };

        quote! {
            $(if !header.is_empty() {
                $(for line in &header join ($['\r']) => $(format!("// {}", line)))
                $['\n']
            })
            public final class $class_name {
                public static final int TAPE_SIZE = $(self.config.tape_size.to_string());
                $['\n']
                private $(class_name)() {
                }
                $(for function in &unit.functions =>
                    $['\n']
                    $(self.render_function(function))
                )
            }
        }
    }

    fn render_function(&self, function: &CompiledFunction) -> java::Tokens {
        let name = escape_keyword(to_camel_case(&function.name), KEYWORDS);
        let doc = format!("/** Compiled from {} */", function.source);

        quote! {
            $(&doc)
            public static String $(&name)() {
                return $(&name)("");
            }
            $['\n']
            $(&doc)
            public static String $(&name)(String input) {
                if (input == null) {
                    input = "";
                }
                int[] tape = new int[TAPE_SIZE];
                int ptr = 0;
                int inputPos = 0;
                StringBuilder output = new StringBuilder();
                $(self.render_blocks(&nest(&function.body)))
                return output.toString();
            }
        }
    }

    fn render_blocks(&self, blocks: &[Block<'_>]) -> java::Tokens {
        let mut tokens = java::Tokens::new();
        for block in blocks {
            match block {
                Block::Stmt(stmt) => {
                    for line in self.statement(stmt) {
                        tokens.append(line);
                        tokens.push();
                    }
                }
                Block::Loop(inner) => {
                    let body = self.render_blocks(inner);
                    tokens.append(quote! {
                        while (tape[ptr] != 0) {
                            $body
                        }
                    });
                    tokens.push();
                }
            }
        }
        tokens
    }

    fn statement(&self, stmt: &IrStatement) -> Vec<String> {
        match stmt {
            IrStatement::Increment => vec!["tape[ptr] = (tape[ptr] + 1) & 0xFF;".into()],
            IrStatement::Decrement => vec!["tape[ptr] = (tape[ptr] - 1) & 0xFF;".into()],
            IrStatement::MovePointer(delta) => vec![format!(
                "ptr = (ptr + {}) % TAPE_SIZE;",
                pointer_step(*delta, self.config.tape_size)
            )],
            IrStatement::Write => vec!["output.append((char) tape[ptr]);".into()],
            IrStatement::Read => vec![
                "tape[ptr] = inputPos < input.length() ? input.charAt(inputPos) & 0xFF : 0;"
                    .into(),
                "inputPos++;".into(),
            ],
            IrStatement::LoopOpen | IrStatement::LoopClose => vec![],
        }
    }
}
