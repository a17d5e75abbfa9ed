//! tapegen CLI
//!
//! Commands:
//!   build   - Compile a directory of programs into one generated file
//!   check   - Validate programs
//!   render  - Render programs for a target
//!   run     - Execute a program
//!   schema  - Print the configuration schema

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build {
            input,
            output,
            target,
            config,
            json,
        } => cli::cmd_build(&input, &output, target, config.as_ref(), json),
        Command::Check { files, ir, json } => cli::cmd_check(&files, ir, json),
        Command::Render {
            files,
            target,
            container,
            tape_size,
            no_provenance,
            output,
        } => cli::cmd_render(&files, target, container, tape_size, no_provenance, &output),
        Command::Run {
            file,
            input,
            tape_size,
            max_steps,
        } => cli::cmd_run(&file, &input, tape_size, max_steps),
        Command::Schema => cli::cmd_schema().map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr; `TAPEGEN_LOG` wins over `RUST_LOG`, which wins over `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TAPEGEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
