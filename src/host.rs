//! Host integration and the generator driver
//!
//! A [`Host`] supplies the tape-language sources and receives the single
//! generated file. [`generate`] is the whole pipeline: discover, compile,
//! render, emit.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::compile::{compile_all, UnitFailure};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{Renderer, Target};
use crate::source::SourceUnit;

/// The build environment a generator runs in
pub trait Host {
    /// Names of every additional file, in discovery order
    fn additional_files(&self) -> Result<Vec<String>>;

    /// Full text of one additional file
    fn read_additional_file(&self, name: &str) -> Result<String>;

    /// Add a generated source to the build
    fn emit_source(&mut self, name: &str, text: &str) -> Result<()>;
}

/// Host backed by an input and an output directory
#[derive(Debug, Clone)]
pub struct FsHost {
    input: PathBuf,
    output: PathBuf,
}

impl FsHost {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Host for FsHost {
    /// Files under the input directory, recursively, sorted by name.
    /// Names are relative to the input directory and use `/`.
    fn additional_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Host(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.input)
                .map_err(|e| Error::Host(e.to_string()))?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(name);
        }
        Ok(files)
    }

    fn read_additional_file(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.input.join(name))?)
    }

    fn emit_source(&mut self, name: &str, text: &str) -> Result<()> {
        std::fs::create_dir_all(&self.output)?;
        std::fs::write(self.output.join(name), text)?;
        Ok(())
    }
}

/// In-memory host: fixed inputs, captured outputs
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    inputs: Vec<(String, String)>,
    emitted: Vec<(String, String)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input file; discovery order is insertion order
    pub fn with_file(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.inputs.push((name.into(), text.into()));
        self
    }

    /// Every `(name, text)` passed to `emit_source`
    pub fn emitted(&self) -> &[(String, String)] {
        &self.emitted
    }
}

impl Host for MemoryHost {
    fn additional_files(&self) -> Result<Vec<String>> {
        Ok(self.inputs.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_additional_file(&self, name: &str) -> Result<String> {
        self.inputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| Error::Host(format!("no such file: {}", name)))
    }

    fn emit_source(&mut self, name: &str, text: &str) -> Result<()> {
        self.emitted.push((name.to_string(), text.to_string()));
        Ok(())
    }
}

/// What one generator run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub target: Target,
    /// Source files considered, in discovery order
    pub sources: Vec<String>,
    /// Names of the generated functions
    pub functions: Vec<String>,
    pub failures: Vec<UnitFailure>,
    /// File handed to the host, if any
    pub emitted: Option<String>,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run the generator against a host
pub fn generate<H: Host + ?Sized>(host: &mut H, config: &Config) -> Result<GenerationReport> {
    let sources: Vec<String> = host
        .additional_files()?
        .into_iter()
        .filter(|name| config.matches_source(name))
        .collect();

    let mut report = GenerationReport {
        target: config.target,
        sources: sources.clone(),
        functions: Vec::new(),
        failures: Vec::new(),
        emitted: None,
    };

    if sources.is_empty() {
        debug!(extension = %config.extension, "no tape-language sources");
        return Ok(report);
    }

    let mut units = Vec::with_capacity(sources.len());
    for name in &sources {
        let text = host.read_additional_file(name)?;
        units.push(SourceUnit::parse(name.clone(), &text));
    }

    let compiled = compile_all(&units);
    report.functions = compiled.functions.iter().map(|f| f.name.clone()).collect();
    report.failures = compiled.failures.clone();

    if compiled.is_empty() {
        return Ok(report);
    }

    let renderer = Renderer::with_config(config.target, config.render_config());
    let text = renderer.render(&compiled)?;
    let file_name = renderer.file_name();
    host.emit_source(&file_name, &text)?;

    info!(
        file = %file_name,
        target = %config.target,
        functions = compiled.functions.len(),
        "emitted generated source"
    );
    report.emitted = Some(file_name);
    Ok(report)
}
