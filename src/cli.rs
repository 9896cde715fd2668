// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `courseorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseorder",
    version,
    about = "Find an order in which to complete courses, given their requirements.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the problem file (`n m` followed by `m` lines of `a b`).
    ///
    /// Reads stdin when omitted or when given as `-`.
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The input file to read, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
