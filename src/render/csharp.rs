//! C# code generation using genco

use genco::prelude::*;

use crate::compile::{CompiledFunction, CompiledUnit};
use crate::error::{Error, Result};
use crate::ir::{nest, Block, IrStatement};
use crate::util::to_pascal_case;

use super::{pointer_step, provenance_lines, RenderConfig};

/// Render a unit to a static C# class
pub fn render(unit: &CompiledUnit, config: &RenderConfig) -> Result<String> {
    let tokens = CSharpRenderer { config }.render(unit);
    tokens
        .to_file_string()
        .map_err(|e| Error::Render(format!("C#: {}", e)))
}

struct CSharpRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> CSharpRenderer<'a> {
    fn render(&self, unit: &CompiledUnit) -> csharp::Tokens {
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
            public static class $class_name
            {
                public const int TapeSize = $(self.config.tape_size.to_string());
                $(for function in &unit.functions =>
                    $['\n']
                    $(self.render_function(function))
                )
            }
        }
    }

    fn render_function(&self, function: &CompiledFunction) -> csharp::Tokens {
        let mut name = to_pascal_case(&function.name);
        if name == self.config.container || name == "TapeSize" {
            name.push('_');
        }
        let summary = format!("/// <summary>Compiled from {}</summary>", function.source);

        quote! {
            $summary
            public static string $(&name)(string input = "")
            {
                input ??= string.Empty;
                var tape = new byte[TapeSize];
                var ptr = 0;
                var inputPos = 0;
                var output = new System.Text.StringBuilder();
                $(self.render_blocks(&nest(&function.body)))
                return output.ToString();
            }
        }
    }

    fn render_blocks(&self, blocks: &[Block<'_>]) -> csharp::Tokens {
        let mut tokens = csharp::Tokens::new();
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
                        while (tape[ptr] != 0)
                        {
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
            IrStatement::Increment => vec!["tape[ptr]++;".into()],
            IrStatement::Decrement => vec!["tape[ptr]--;".into()],
            IrStatement::MovePointer(delta) => vec![format!(
                "ptr = (ptr + {}) % TapeSize;",
                pointer_step(*delta, self.config.tape_size)
            )],
            IrStatement::Write => vec!["output.Append((char)tape[ptr]);".into()],
            IrStatement::Read => vec![
                "tape[ptr] = inputPos < input.Length ? (byte)input[inputPos] : (byte)0;".into(),
                "inputPos++;".into(),
            ],
            IrStatement::LoopOpen | IrStatement::LoopClose => vec![],
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
    fn test_render_class_and_method() {
        let code = render(&unit(&[("hello_world.bf", "+.")]), &RenderConfig::default()).unwrap();

        assert!(code.contains("public static class BF"));
        assert!(code.contains("public const int TapeSize = 256;"));
        assert!(code.contains("public static string HelloWorld(string input = \"\")"));
        assert!(code.contains("tape[ptr]++;"));
        assert!(code.contains("output.Append((char)tape[ptr]);"));
        assert!(code.contains("return output.ToString();"));
    }

    #[test]
    fn test_render_loops() {
        let code = render(&unit(&[("clear.bf", "[-]")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("while (tape[ptr] != 0)"));
        assert!(code.contains("tape[ptr]--;"));
    }

    #[test]
    fn test_render_read() {
        let code = render(&unit(&[("echo.bf", ",")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("(byte)input[inputPos]"));
        assert!(code.contains("inputPos++;"));
    }

    #[test]
    fn test_method_named_like_class() {
        let code = render(&unit(&[("bf.bf", "+")]), &RenderConfig::default()).unwrap();
        assert!(code.contains("public static string Bf(string input"));

        let config = RenderConfig {
            container: "Echo".into(),
            ..RenderConfig::default()
        };
        let code = render(&unit(&[("echo.bf", "+")]), &config).unwrap();
        assert!(code.contains("public static string Echo_(string input"));
    }

    #[test]
    fn test_balanced_braces() {
        let code = render(&unit(&[("n.bf", "+[>[-]<[[]]]")]), &RenderConfig::default()).unwrap();
        assert_eq!(code.matches('{').count(), code.matches('}').count());
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
