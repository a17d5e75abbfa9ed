//! Custom MiniJinja filters for code generation

use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("indent", indent);
}

/// Add indentation to each non-empty line
fn indent(value: &str, spaces: usize) -> String {
    let indent_str = " ".repeat(spaces);
    value
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent_str, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
        assert_eq!(indent("x", 0), "x");
    }

    #[test]
    fn test_indent_filter_in_template() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str(
                "{{ text | indent(depth * 2) }}",
                minijinja::context! { text => "a\nb", depth => 2 },
            )
            .unwrap();
        assert_eq!(out, "    a\n    b");
    }
}
