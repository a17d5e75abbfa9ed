// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # tapegen
//!
//! Compiles programs in the eight-symbol tape language into ordinary
//! functions of a host language.
//!
//! ## Core Concept
//!
//! Every source file becomes one function `name(input) -> string`. The
//! function owns a zeroed byte tape, reads its input one character at a
//! time and returns whatever the program wrote. All functions of a build
//! land in one generated file, inside one container.
//!
//! ## Quick Start
//!
//! ```rust
//! use tapegen::{compile, render, Machine, SourceUnit, Target};
//!
//! let unit = SourceUnit::parse("echo.bf", ",.");
//! let function = compile(&unit).unwrap();
//!
//! // Execute directly
//! let output = Machine::default().run_str(&function, "A").unwrap();
//! assert_eq!(output, "A");
//!
//! // Or generate host-language code
//! let compiled = tapegen::compile_all(&[unit]);
//! let code = render(&compiled, Target::Python).unwrap();
//! assert!(code.contains("def echo("));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! source text ──► lex ──► validate ──► emit ──► CompiledFunction
//!                           │                        │
//!                     StructuralError          render(Target)
//!                                                    │
//!                                          Host::emit_source
//! ```

pub mod compile;
pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod ir;
pub mod render;
pub mod source;
pub mod tape;
pub mod templates;
pub mod util;
pub mod validate;

pub use compile::{compile, compile_all, CompileFailure, CompiledFunction, CompiledUnit, UnitFailure};
pub use config::{Config, CONFIG_FILE, DEFAULT_TAPE_SIZE};
pub use error::{Error, Result};
pub use format::{format_rust, FormatError};
pub use host::{generate, FsHost, GenerationReport, Host, MemoryHost};
pub use ir::{emit, IrStatement};
pub use render::{render, RenderConfig, Renderer, Target};
pub use source::{lex, Position, SourceUnit, Symbol, SymbolKind};
pub use tape::{Machine, RuntimeError, Tape};
pub use validate::{validate, BracketMap, StructuralError};

/// Version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
