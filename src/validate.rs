//! Structural validation of loop brackets
//!
//! A single left-to-right pass with a stack of pending `[` positions. A `]`
//! with nothing to pop, or any `[` left on the stack at the end, is a
//! [`StructuralError`] pointing at the offending symbol. Because matching is
//! done by the stack, accepted programs are well-nested, not merely balanced.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::source::{Position, Symbol, SymbolKind};

/// Matched loop brackets, keyed by instruction index in both directions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketMap {
    partners: BTreeMap<usize, usize>,
}

impl BracketMap {
    fn insert(&mut self, open: usize, close: usize) {
        self.partners.insert(open, close);
        self.partners.insert(close, open);
    }

    /// Index of the bracket matching the one at `index`
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(&index).copied()
    }

    /// `(open, close)` pairs ordered by open index
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .filter(|(open, close)| open < close)
            .map(|(open, close)| (*open, *close))
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.partners.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Compile-time failure caused by unmatched loop brackets
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralError {
    #[error("unmatched '[' at {position}: loop is never closed")]
    UnmatchedLoopOpen { position: Position },

    #[error("unmatched ']' at {position}: no open loop to close")]
    UnmatchedLoopClose { position: Position },
}

impl StructuralError {
    pub fn position(&self) -> Position {
        match self {
            StructuralError::UnmatchedLoopOpen { position }
            | StructuralError::UnmatchedLoopClose { position } => *position,
        }
    }
}

/// Match every `[` with its `]`
pub fn validate(instructions: &[Symbol]) -> Result<BracketMap, StructuralError> {
    let mut map = BracketMap::default();
    let mut pending: Vec<usize> = Vec::new();

    for (index, symbol) in instructions.iter().enumerate() {
        match symbol.kind {
            SymbolKind::LoopOpen => pending.push(index),
            SymbolKind::LoopClose => match pending.pop() {
                Some(open) => map.insert(open, index),
                None => {
                    return Err(StructuralError::UnmatchedLoopClose {
                        position: symbol.position,
                    })
                }
            },
            _ => {}
        }
    }

    // bottom of the stack is the earliest unresolved open
    if let Some(&open) = pending.first() {
        return Err(StructuralError::UnmatchedLoopOpen {
            position: instructions[open].position,
        });
    }

    Ok(map)
}
