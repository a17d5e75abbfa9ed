//! CLI command implementations
//!
//! - `build`: generate one source file from a directory of programs
//! - `check`: validate programs without generating code
//! - `render`: render programs for a target to stdout or a file
//! - `run`: execute one program with the reference machine
//! - `schema`: print the JSON schema of `tapegen.yaml`

pub mod build;
pub mod check;
pub mod render;
pub mod run;
pub mod schema;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tapegen::Target;

pub use build::cmd_build;
pub use check::cmd_check;
pub use render::cmd_render;
pub use run::cmd_run;
pub use schema::cmd_schema;

/// Compile tape-language programs into host-language functions
#[derive(Parser, Debug)]
#[command(name = "tapegen", author, version, about)]
pub struct Cli {
    /// Log more (-v debug, -vv trace); TAPEGEN_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile every program under INPUT into one file in OUTPUT
    Build {
        /// Directory searched recursively for programs
        input: PathBuf,
        /// Directory the generated file is written to
        output: PathBuf,
        /// Target language, overriding the configuration
        #[arg(short, long)]
        target: Option<Target>,
        /// Configuration file (default: INPUT/tapegen.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate programs and report structural errors
    Check {
        /// Program files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the emitted statements of each valid program
        #[arg(long)]
        ir: bool,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render programs for a target
    Render {
        /// Program files; each becomes one function
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Target language
        #[arg(short, long, default_value = "rust")]
        target: Target,
        /// Name of the generated container
        #[arg(long, default_value = "BF")]
        container: String,
        /// Cells on the tape
        #[arg(long, default_value_t = tapegen::DEFAULT_TAPE_SIZE)]
        tape_size: usize,
        /// Omit the provenance header
        #[arg(long)]
        no_provenance: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Execute a program with the reference machine
    Run {
        /// Program file
        file: PathBuf,
        /// Program input
        #[arg(short, long, default_value = "")]
        input: String,
        /// Cells on the tape
        #[arg(long, default_value_t = tapegen::DEFAULT_TAPE_SIZE)]
        tape_size: usize,
        /// Abort after this many steps
        #[arg(long)]
        max_steps: Option<u64>,
    },

    /// Print the JSON schema of tapegen.yaml
    Schema,
}
