//! Render command: programs to host-language source

use std::path::PathBuf;
use tapegen::{compile_all, Error, RenderConfig, Renderer, Result, Target};

use super::util::{read_units, write_output};

pub fn cmd_render(
    files: &[PathBuf],
    target: Target,
    container: String,
    tape_size: usize,
    no_provenance: bool,
    output: &Option<PathBuf>,
) -> Result<bool> {
    if tape_size == 0 {
        return Err(Error::Config("tape size must be at least 1".into()));
    }
    if !tapegen::util::is_identifier(&container) {
        return Err(Error::Config(format!(
            "container '{}' is not a valid identifier",
            container
        )));
    }

    let compiled = compile_all(&read_units(files)?);
    for failure in &compiled.failures {
        eprintln!("✗ {}: {}", failure.file, failure.error);
    }
    if compiled.is_empty() {
        return Ok(false);
    }

    let config = RenderConfig {
        container,
        tape_size,
        provenance: !no_provenance,
        ..RenderConfig::default()
    };
    let code = Renderer::with_config(target, config).render(&compiled)?;
    write_output(output, &code)?;

    Ok(!compiled.has_failures())
}
