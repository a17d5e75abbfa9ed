//! Check command: structural validation only

use serde::Serialize;
use std::path::PathBuf;
use tapegen::{compile, CompileFailure, IrStatement, Result};

use super::util::read_units;

#[derive(Serialize)]
struct CheckResult {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CompileFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ir: Option<Vec<IrStatement>>,
}

pub fn cmd_check(files: &[PathBuf], show_ir: bool, json: bool) -> Result<bool> {
    let units = read_units(files)?;

    let results: Vec<CheckResult> = units
        .iter()
        .map(|unit| match compile(unit) {
            Ok(function) => CheckResult {
                file: unit.name.clone(),
                valid: true,
                error: None,
                ir: show_ir.then_some(function.body),
            },
            Err(error) => CheckResult {
                file: unit.name.clone(),
                valid: false,
                error: Some(error),
                ir: None,
            },
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match &result.error {
                None => println!("✓ {}", result.file),
                Some(error) => println!("✗ {}: {}", result.file, error),
            }
            for stmt in result.ir.iter().flatten() {
                println!("    {}", stmt);
            }
        }
    }

    Ok(results.iter().all(|r| r.valid))
}
