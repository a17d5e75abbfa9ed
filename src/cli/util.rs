//! CLI utility helpers

use std::fs;
use std::path::{Path, PathBuf};
use tapegen::{Error, Result, SourceUnit};

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Read a program file, named as given on the command line
pub fn read_unit(path: &Path) -> Result<SourceUnit> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Host(format!("{}: {}", path.display(), e)))?;
    Ok(SourceUnit::parse(path.display().to_string(), &text))
}

/// Read every program file, in argument order
pub fn read_units(paths: &[PathBuf]) -> Result<Vec<SourceUnit>> {
    paths.iter().map(|p| read_unit(p)).collect()
}
