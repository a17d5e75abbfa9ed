//! Build command: directory of programs in, one generated file out

use std::path::{Path, PathBuf};
use tapegen::{generate, Config, Error, FsHost, Result, Target};

pub fn cmd_build(
    input: &Path,
    output: &Path,
    target: Option<Target>,
    config_path: Option<&PathBuf>,
    json: bool,
) -> Result<bool> {
    if !input.is_dir() {
        return Err(Error::Host(format!(
            "input '{}' is not a directory",
            input.display()
        )));
    }

    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(input)?,
    };
    if let Some(target) = target {
        config.target = target;
    }

    let mut host = FsHost::new(input, output);
    let report = generate(&mut host, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for failure in &report.failures {
            eprintln!("✗ {}: {}", failure.file, failure.error);
        }
        match &report.emitted {
            Some(file) => println!(
                "✓ {} function(s) -> {}",
                report.functions.len(),
                output.join(file).display()
            ),
            None if report.sources.is_empty() => {
                println!("No .{} sources under {}", config.extension, input.display())
            }
            None => println!("Nothing generated"),
        }
    }

    Ok(!report.has_failures())
}
