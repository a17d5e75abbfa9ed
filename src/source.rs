//! Tape-language sources and lexing
//!
//! A [`SourceUnit`] is one input file reduced to its instruction stream.
//! Every character outside the eight instruction symbols is insignificant
//! and dropped here, but each kept [`Symbol`] remembers where it came from
//! so later passes can point at the exact offending character.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// One of the eight tape-language instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    /// `+`
    Inc,
    /// `-`
    Dec,
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `.`
    Write,
    /// `,`
    Read,
    /// `[`
    LoopOpen,
    /// `]`
    LoopClose,
}

impl SymbolKind {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => SymbolKind::Inc,
            '-' => SymbolKind::Dec,
            '>' => SymbolKind::MoveRight,
            '<' => SymbolKind::MoveLeft,
            '.' => SymbolKind::Write,
            ',' => SymbolKind::Read,
            '[' => SymbolKind::LoopOpen,
            ']' => SymbolKind::LoopClose,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            SymbolKind::Inc => '+',
            SymbolKind::Dec => '-',
            SymbolKind::MoveRight => '>',
            SymbolKind::MoveLeft => '<',
            SymbolKind::Write => '.',
            SymbolKind::Read => ',',
            SymbolKind::LoopOpen => '[',
            SymbolKind::LoopClose => ']',
        }
    }
}

/// Location of a symbol in the raw, unstripped source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Character index into the raw text (0-based)
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// A lexed instruction together with its source position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub position: Position,
}

/// Lex raw text into the instruction stream, dropping everything else
pub fn lex(text: &str) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let mut line = 1;
    let mut column = 1;

    for (offset, c) in text.chars().enumerate() {
        if let Some(kind) = SymbolKind::from_char(c) {
            symbols.push(Symbol {
                kind,
                position: Position::new(offset, line, column),
            });
        }

        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    symbols
}

/// One discovered tape-language input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Name as supplied by the host, e.g. `programs/hello_world.bf`
    pub name: String,
    pub instructions: Vec<Symbol>,
    hash: String,
}

impl SourceUnit {
    /// Lex `text` into a unit named `name`
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            instructions: lex(text),
            hash: hash_source(text),
        }
    }

    /// Short SHA-256 of the raw text, used in provenance headers
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// File base name without directories or extension
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

fn hash_source(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
}
