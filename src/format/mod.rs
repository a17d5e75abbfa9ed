//! Code Formatting Module
//!
//! Canonical formatting for generated Rust, through `syn` + `prettyplease`.
//! The other targets are emitted in their conventional layout directly.

use thiserror::Error;

/// Format Rust code using prettyplease
///
/// Plain `//` comments do not survive; callers add headers afterwards.
pub fn format_rust(code: &str) -> Result<String, FormatError> {
    match syn::parse_file(code) {
        Ok(syntax_tree) => Ok(prettyplease::unparse(&syntax_tree)),
        Err(e) => Err(FormatError::ParseError {
            language: "Rust".to_string(),
            message: e.to_string(),
        }),
    }
}

/// Formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Failed to parse the code
    #[error("Failed to parse {language} code: {message}")]
    ParseError { language: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rust_simple() {
        let code = "fn foo(){let x=1;x}";
        let result = format_rust(code).unwrap();

        assert!(result.contains("fn foo()"));
        assert!(result.contains("let x = 1;"));
    }

    #[test]
    fn test_format_rust_nested_loops() {
        let code = r#"
pub fn f(input: &str) -> String {
let mut tape = [0u8; 4];
let mut ptr: usize = 0;
while tape[ptr] != 0 {
while tape[ptr] != 0 {
ptr = (ptr + 1) % 4;
}
}
String::new()
}
"#;
        let result = format_rust(code).unwrap();

        assert!(result.contains("        while tape[ptr] != 0 {"));
        assert!(result.contains("            ptr = (ptr + 1) % 4;"));
    }

    #[test]
    fn test_format_rust_invalid() {
        let result = format_rust("fn invalid( { }");

        match result {
            Err(FormatError::ParseError { language, .. }) => {
                assert_eq!(language, "Rust");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }
}
