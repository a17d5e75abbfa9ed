//! Template-based code generation
//!
//! Uses MiniJinja templates for targets whose layout reads best as a
//! template. Templates are embedded in the binary.

pub mod filters;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::sync::OnceLock;

use crate::render::Target;

// Embedded templates (compiled into binary)
mod embedded {
    pub const TYPESCRIPT: &str = include_str!("../../templates/typescript.jinja");
}

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    filters::register_filters(&mut env);

    env.add_template("typescript.jinja", embedded::TYPESCRIPT)
        .expect("Failed to load typescript template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Get the template name for a target language, if it is template-rendered
pub fn template_name(target: Target) -> Option<&'static str> {
    match target {
        Target::TypeScript => Some("typescript.jinja"),
        Target::Rust | Target::CSharp | Target::Python | Target::Go | Target::Java => None,
    }
}

/// Render a target's template with a serializable context
pub fn render_template<C: Serialize>(target: Target, ctx: &C) -> Result<String, TemplateError> {
    let name = template_name(target)
        .ok_or_else(|| TemplateError::TemplateNotFound(target.to_string()))?;
    let template = engine()
        .get_template(name)
        .map_err(|e| TemplateError::TemplateNotFound(e.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Template errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template not found
    TemplateNotFound(String),
    /// Template render error
    RenderError(String),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::TemplateNotFound(msg) => write!(f, "Template not found: {}", msg),
            TemplateError::RenderError(msg) => write!(f, "Template render error: {}", msg),
        }
    }
}

impl std::error::Error for TemplateError {}
