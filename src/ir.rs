//! Statement IR
//!
//! The emitter maps every instruction to exactly one [`IrStatement`]. Loops
//! stay flat (`LoopOpen` … `LoopClose`); renderers that want structure use
//! [`nest`], which relies on the validator having already proven the
//! brackets well-nested.

use serde::Serialize;
use std::fmt;

use crate::source::{Symbol, SymbolKind};
use crate::validate::BracketMap;

/// One abstract imperative operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", content = "delta", rename_all = "snake_case")]
pub enum IrStatement {
    /// Add one to the current cell, wrapping mod 256
    Increment,
    /// Subtract one from the current cell, wrapping mod 256
    Decrement,
    /// Move the pointer by the given delta, wrapping mod tape size
    MovePointer(isize),
    /// Append the current cell to the output as one character
    Write,
    /// Store the next input code unit in the current cell (0 when exhausted)
    Read,
    /// Enter the loop while the current cell is non-zero
    LoopOpen,
    /// Jump back to the matching `LoopOpen`
    LoopClose,
}

impl IrStatement {
    pub fn is_loop_bracket(&self) -> bool {
        matches!(self, IrStatement::LoopOpen | IrStatement::LoopClose)
    }
}

impl From<SymbolKind> for IrStatement {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Inc => IrStatement::Increment,
            SymbolKind::Dec => IrStatement::Decrement,
            SymbolKind::MoveRight => IrStatement::MovePointer(1),
            SymbolKind::MoveLeft => IrStatement::MovePointer(-1),
            SymbolKind::Write => IrStatement::Write,
            SymbolKind::Read => IrStatement::Read,
            SymbolKind::LoopOpen => IrStatement::LoopOpen,
            SymbolKind::LoopClose => IrStatement::LoopClose,
        }
    }
}

impl fmt::Display for IrStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrStatement::Increment => write!(f, "increment"),
            IrStatement::Decrement => write!(f, "decrement"),
            IrStatement::MovePointer(delta) => write!(f, "move {:+}", delta),
            IrStatement::Write => write!(f, "write"),
            IrStatement::Read => write!(f, "read"),
            IrStatement::LoopOpen => write!(f, "loop {{"),
            IrStatement::LoopClose => write!(f, "}}"),
        }
    }
}

/// Translate a validated instruction stream, one statement per symbol
pub fn emit(instructions: &[Symbol], brackets: &BracketMap) -> Vec<IrStatement> {
    instructions
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            let stmt = IrStatement::from(symbol.kind);
            debug_assert!(
                !stmt.is_loop_bracket() || brackets.partner(index).is_some(),
                "bracket at instruction {} has no partner",
                index
            );
            stmt
        })
        .collect()
}

/// Nested view of a flat statement list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Stmt(&'a IrStatement),
    Loop(Vec<Block<'a>>),
}

/// Pair every `LoopOpen` with the block its own `LoopClose` terminates
pub fn nest(body: &[IrStatement]) -> Vec<Block<'_>> {
    let mut stack: Vec<Vec<Block<'_>>> = vec![Vec::new()];

    for stmt in body {
        match stmt {
            IrStatement::LoopOpen => stack.push(Vec::new()),
            IrStatement::LoopClose => close_block(&mut stack),
            other => {
                if let Some(current) = stack.last_mut() {
                    current.push(Block::Stmt(other));
                }
            }
        }
    }

    // only reachable for unvalidated input
    while stack.len() > 1 {
        close_block(&mut stack);
    }

    stack.pop().unwrap_or_default()
}

fn close_block(stack: &mut Vec<Vec<Block<'_>>>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(inner) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.push(Block::Loop(inner));
        }
    }
}
