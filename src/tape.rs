//! Runtime semantics of generated functions
//!
//! [`Tape`] is the memory every generated function manipulates and
//! [`Machine`] executes a [`CompiledFunction`] directly, with the same
//! policies the renderers emit:
//!
//! - cells are unsigned 8-bit and wrap mod 256,
//! - the pointer wraps mod the tape size,
//! - `Read` on exhausted input stores 0,
//! - `Write` appends the cell as one character with code 0-255.

use thiserror::Error;

use crate::compile::CompiledFunction;
use crate::config::DEFAULT_TAPE_SIZE;
use crate::ir::{nest, Block, IrStatement};

/// Fixed-size wrapping byte tape with a single pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    ptr: usize,
}

impl Tape {
    /// A zeroed tape; a size of 0 is treated as 1
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size.max(1)],
            ptr: 0,
        }
    }

    pub fn get(&self) -> u8 {
        self.cells[self.ptr]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.ptr] = value;
    }

    pub fn increment(&mut self) {
        self.cells[self.ptr] = self.cells[self.ptr].wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.cells[self.ptr] = self.cells[self.ptr].wrapping_sub(1);
    }

    pub fn move_by(&mut self, delta: isize) {
        let size = self.cells.len() as isize;
        self.ptr = (self.ptr as isize + delta).rem_euclid(size) as usize;
    }

    pub fn pointer(&self) -> usize {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_SIZE)
    }
}

/// Failure while executing a function
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// Reference executor for compiled functions
#[derive(Debug, Clone)]
pub struct Machine {
    tape_size: usize,
    step_limit: Option<u64>,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_SIZE)
    }
}

impl Machine {
    pub fn new(tape_size: usize) -> Self {
        Self {
            tape_size,
            step_limit: None,
        }
    }

    /// Stop with [`RuntimeError::StepLimitExceeded`] after `limit` steps.
    /// Each statement and each loop-condition check is one step.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Run `function` on raw input bytes and return its output
    pub fn run(&self, function: &CompiledFunction, input: &[u8]) -> Result<String, RuntimeError> {
        let mut exec = Execution {
            tape: Tape::new(self.tape_size),
            input,
            input_pos: 0,
            output: String::new(),
            steps: 0,
            step_limit: self.step_limit,
        };
        exec.run_blocks(&nest(&function.body))?;
        Ok(exec.output)
    }

    /// Run `function` on a string, consumed as its UTF-8 bytes
    pub fn run_str(&self, function: &CompiledFunction, input: &str) -> Result<String, RuntimeError> {
        self.run(function, input.as_bytes())
    }
}

struct Execution<'a> {
    tape: Tape,
    input: &'a [u8],
    input_pos: usize,
    output: String,
    steps: u64,
    step_limit: Option<u64>,
}

impl Execution<'_> {
    fn tick(&mut self) -> Result<(), RuntimeError> {
        self.steps += 1;
        match self.step_limit {
            Some(limit) if self.steps > limit => Err(RuntimeError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn run_blocks(&mut self, blocks: &[Block<'_>]) -> Result<(), RuntimeError> {
        for block in blocks {
            match block {
                Block::Stmt(stmt) => {
                    self.tick()?;
                    self.step(stmt);
                }
                Block::Loop(inner) => loop {
                    self.tick()?;
                    if self.tape.get() == 0 {
                        break;
                    }
                    self.run_blocks(inner)?;
                },
            }
        }
        Ok(())
    }

    fn step(&mut self, stmt: &IrStatement) {
        match stmt {
            IrStatement::Increment => self.tape.increment(),
            IrStatement::Decrement => self.tape.decrement(),
            IrStatement::MovePointer(delta) => self.tape.move_by(*delta),
            IrStatement::Write => self.output.push(char::from(self.tape.get())),
            IrStatement::Read => {
                let value = self.input.get(self.input_pos).copied().unwrap_or(0);
                self.tape.set(value);
                self.input_pos += 1;
            }
            // consumed by `nest`
            IrStatement::LoopOpen | IrStatement::LoopClose => {}
        }
    }
}
