//! Run command: execute one program with the reference machine

use std::io::Write;
use std::path::Path;
use tapegen::{compile, Machine, Result};

use super::util::read_unit;

pub fn cmd_run(file: &Path, input: &str, tape_size: usize, max_steps: Option<u64>) -> Result<bool> {
    let function = compile(&read_unit(file)?)?;

    let mut machine = Machine::new(tape_size);
    if let Some(limit) = max_steps {
        machine = machine.with_step_limit(limit);
    }
    let output = machine.run_str(&function, input)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(true)
}
