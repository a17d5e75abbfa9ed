//! Code rendering: generate host-language source from compiled functions
//!
//! Every target renders a whole [`CompiledUnit`] into one file: a
//! provenance header, the tape-size constant, and one container holding one
//! function per compiled source, in compilation order. Rendering is
//! deterministic, so the same unit always produces byte-identical text.
//!
//! Each generated function implements the same runtime contract as
//! [`crate::tape::Machine`]: a zeroed tape of `tape_size` unsigned bytes,
//! cells wrapping mod 256, the pointer wrapping mod `tape_size`, reads past
//! the end of the input storing 0, and writes appending one character.

mod csharp;
mod go;
mod java;
mod python;
mod rust;
mod typescript;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::compile::CompiledUnit;
use crate::config::DEFAULT_TAPE_SIZE;
use crate::error::{Error, Result};
use crate::util::to_snake_case;

/// Target host language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[serde(alias = "rs")]
    Rust,
    #[serde(alias = "cs", alias = "c#")]
    CSharp,
    #[serde(alias = "py")]
    Python,
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "golang")]
    Go,
    Java,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::Rust,
        Target::CSharp,
        Target::Python,
        Target::TypeScript,
        Target::Go,
        Target::Java,
    ];

    /// File extension of generated sources
    pub fn extension(&self) -> &'static str {
        match self {
            Target::Rust => "rs",
            Target::CSharp => "cs",
            Target::Python => "py",
            Target::TypeScript => "ts",
            Target::Go => "go",
            Target::Java => "java",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::CSharp => "csharp",
            Target::Python => "python",
            Target::TypeScript => "typescript",
            Target::Go => "go",
            Target::Java => "java",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(Target::Rust),
            "csharp" | "cs" | "c#" => Ok(Target::CSharp),
            "python" | "py" => Ok(Target::Python),
            "typescript" | "ts" => Ok(Target::TypeScript),
            "go" | "golang" => Ok(Target::Go),
            "java" => Ok(Target::Java),
            other => Err(Error::Other(format!(
                "unknown target '{}' (expected rust, csharp, python, typescript, go or java)",
                other
            ))),
        }
    }
}

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Name of the generated container
    pub container: String,
    /// Cells on the tape
    pub tape_size: usize,
    /// Include provenance header
    pub provenance: bool,
    /// Run the target formatter when one exists
    pub auto_format: bool,
    /// Indentation for string-built targets
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container: "BF".into(),
            tape_size: DEFAULT_TAPE_SIZE,
            provenance: true,
            auto_format: true,
            indent: "    ".into(),
        }
    }
}

/// Render a unit with the default configuration
pub fn render(unit: &CompiledUnit, target: Target) -> Result<String> {
    Renderer::new(target).render(unit)
}

/// Code renderer
pub struct Renderer {
    target: Target,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(target: Target, config: RenderConfig) -> Self {
        Self { target, config }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Render the unit to target source
    pub fn render(&self, unit: &CompiledUnit) -> Result<String> {
        match self.target {
            Target::Rust => rust::render(unit, &self.config),
            Target::CSharp => csharp::render(unit, &self.config),
            Target::Python => Ok(python::render(unit, &self.config)),
            Target::TypeScript => typescript::render(unit, &self.config),
            Target::Go => go::render(unit, &self.config),
            Target::Java => java::render(unit, &self.config),
        }
    }

    /// Name of the file the rendered unit is emitted as
    pub fn file_name(&self) -> String {
        let container = &self.config.container;
        let stem = match self.target {
            Target::Rust | Target::Python => to_snake_case(container),
            Target::Go => container.to_lowercase(),
            Target::CSharp | Target::TypeScript | Target::Java => container.clone(),
        };
        format!("{}.{}", stem, self.target.extension())
    }
}

/// Header lines, without comment markers
pub(crate) fn provenance_lines(unit: &CompiledUnit) -> Vec<String> {
    let mut lines = vec![format!("Generated by tapegen {}", crate::VERSION)];
    for function in &unit.functions {
        lines.push(format!("  {} ({})", function.source, function.source_hash));
    }
    lines.push("DO NOT EDIT: regenerate from the tape-language sources".into());
    lines
}

/// Non-negative pointer step equivalent to `delta` mod `tape_size`
pub(crate) fn pointer_step(delta: isize, tape_size: usize) -> usize {
    delta.rem_euclid(tape_size.max(1) as isize) as usize
}

/// Append `_` to names that collide with a target keyword
pub(crate) fn escape_keyword(name: String, keywords: &[&str]) -> String {
    if keywords.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}
