//! Go code generation using genco

use genco::prelude::*;

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::error::{Error, Result};
use crate::ir::{nest, Block, IrStatement};
use crate::util::to_pascal_case;

use super::{pointer_step, provenance_lines, RenderConfig};

/// Render a unit to a Go package of exported functions
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> Result<String> {
    let tokens = GoRenderer { config }.render(unit);
    tokens
        .to_file_string()
        .map_err(|e| Error::Render(format!("Go: {}", e)))
}

struct GoRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> GoRenderer<'a> {
    fn render(&self, unit: &CompiledUnit) -> go::Tokens {
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
            package $(self.config.container.to_lowercase())
            $['\n']
            import "strings"
            $['\n']
            const TapeSize = $(self.config.tape_size.to_string())
            $(for function in &unit.functions =>
                $['\n']
                $(self.render_function(function))
            )
        }
    }

    fn render_function(&self, function: &CompiledFunction) -> go::Tokens {
        let mut name = to_pascal_case(&function.name);
        if name == "TapeSize" {
            name.push('_');
        }
        let doc = format!("// {} is compiled from {}", name, function.source);

        quote! {
            $doc
            func $(&name)(input string) string {
                var tape [TapeSize]byte
                ptr := 0
                inputPos := 0
                var output strings.Builder
                _, _, _ = tape, ptr, inputPos
                $(self.render_blocks(&nest(&function.body)))
                return output.String()
            }
        }
    }

    fn render_blocks(&self, blocks: &[Block<'_>]) -> go::Tokens {
        let mut tokens = go::Tokens::new();
        for block in blocks {
            match block {
                Block::Stmt(stmt) => {
                    tokens.append(self.statement(stmt));
                    tokens.push();
                }
                Block::Loop(inner) => {
                    let body = self.render_blocks(inner);
                    tokens.append(quote! {
                        for tape[ptr] != 0 {
                            $body
                        }
                    });
                    tokens.push();
                }
            }
        }
        tokens
    }

    fn statement(&self, stmt: &IrStatement) -> go::Tokens {
        match stmt {
            IrStatement::Increment => quote!(tape[ptr]++),
            IrStatement::Decrement => quote!(tape[ptr]--),
            IrStatement::MovePointer(delta) => {
                let step = pointer_step(*delta, self.config.tape_size).to_string();
                quote!(ptr = (ptr + $step) % TapeSize)
            }
            IrStatement::Write => quote!(output.WriteRune(rune(tape[ptr]))),
            IrStatement::Read => quote! {
                if inputPos < len(input) {
                    tape[ptr] = input[inputPos]
                } else {
                    tape[ptr] = 0
                }
                inputPos++
            },
            IrStatement::LoopOpen | IrStatement::LoopClose => go::Tokens::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_all;
    use crate::source::SourceUnit;

    fn unit(sources: &[(&str, &str)]) -> CompiledUnit {
        let units: Vec<_> = sources
            .iter()
            .map(|(name, text)| SourceUnit::parse(*name, text))
            .collect();
        compile_all(&units)
    }

    #[test]
    fn test_render_package_and_function() {
        let code = render(&unit(&[("hello.bf", "+.")]), &RenderConfig::default()).unwrap();

        assert!(code.contains("package bf"));
        assert!(code.contains("import \"strings\""));
        assert!(code.contains("const TapeSize = 256"));
        assert!(code.contains("func Hello(input string) string {"));
        assert!(code.contains("tape[ptr]++"));
        assert!(code.contains("output.WriteRune(rune(tape[ptr]))"));
        assert!(code.contains("return output.String()"));
    }

    #[test]
    fn test_render_loop_and_read() {
        let code = render(&unit(&[("cat.bf", ",[.,]")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("for tape[ptr] != 0 {"));
        assert!(code.contains("if inputPos < len(input) {"));
        assert!(code.contains("inputPos++"));
    }

    #[test]
    fn test_unused_locals_are_silenced() {
        let code = render(&unit(&[("noop.bf", "")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("_, _, _ = tape, ptr, inputPos"));
    }

    #[test]
    fn test_function_named_like_constant() {
        let code = render(&unit(&[("tape_size.bf", "+")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("func TapeSize_(input string) string {"));
    }

    #[test]
    fn test_provenance_precedes_package() {
        let code = render(&unit(&[("a.bf", "+")]), &RenderConfig::default()).unwrap();
        let header = code.find("// Generated by tapegen").unwrap();
        let package = code.find("package bf").unwrap();
        assert!(header < package);
    }

    #[test]
    fn test_provenance_lines_are_contiguous() {
        let code = render(&unit(&[("a.bf", "+"), ("b.bf", "-")]), &RenderConfig::default()).unwrap();
        let lines: Vec<_> = code.lines().take(5).collect();

        assert!(lines[0].starts_with("// Generated by tapegen "));
        assert!(lines[1].starts_with("//   a.bf (sha256:"));
        assert!(lines[2].starts_with("//   b.bf (sha256:"));
        assert_eq!(lines[3], "// DO NOT EDIT: regenerate from the tape-language sources");
        assert_eq!(lines[4], "");
    }
}
