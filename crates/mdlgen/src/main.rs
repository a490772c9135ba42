//! Command‑line entry point for the `mdlgen` tool.
//!
//! Writes the vase, torus fractal and clock frame scripts for the external
//! renderer. Run with no subcommand to write all of them into the current
//! directory.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mdlscript::registry;

/// CLI command implementations.
mod cmd;

#[derive(Parser)]
#[command(name = "mdlgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Directory outputs are written under.
    #[arg(
        short = 'C',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        global = true,
        help = "Directory the scripts are written under (subdirectories must exist)"
    )]
    root: PathBuf,

    /// Command to execute; all generators run when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
/// Subcommands supported by the `mdlgen` tool.
enum Commands {
    #[command(about = "Write the vase script")]
    /// Write the `vase` script.
    Vase,

    #[command(about = "Write the torus fractal script")]
    /// Write the `torusfractal` script.
    Torus,

    #[command(about = "Write the sixty clock frame scripts")]
    /// Write `clockscripts/clock00` through `clockscripts/clock59`.
    Clock,

    #[command(about = "Write every script")]
    /// Run every generator.
    All,

    #[command(about = "Parse a script and summarise it")]
    /// Validate an existing script against the command grammar.
    Check {
        #[arg(help = "Script file to check")]
        /// Script to parse.
        input: PathBuf,
    },

    #[command(name = "list-generators", about = "List generators and their outputs")]
    /// List supported generators and the files they write.
    ListGenerators,
}

/// Map the `-v` count onto a default log filter.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise logging; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Handle the generator subcommands.
fn handle_generate(name: Option<&str>, root: &Path) -> Result<()> {
    let written = match name {
        Some(name) => cmd::generate(name, root)?,
        None => cmd::generate_all(root)?,
    };
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Handle the `check` subcommand.
fn handle_check(input: &Path) -> Result<()> {
    let report = cmd::check(input)?;
    println!(
        "{}: {} commands, {} primitives",
        input.display(),
        report.instructions,
        report.primitives
    );
    for save in &report.saves {
        println!("saves {save}");
    }
    Ok(())
}

/// Handle the `list-generators` subcommand.
fn handle_list_generators() {
    println!("Supported generators (key — display — outputs):");
    for entry in registry::REGISTRY {
        println!("- {} — {} — {}", entry.key, entry.display, entry.outputs);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        None | Some(Commands::All) => report_ok(handle_generate(None, &cli.root), "OK!"),
        Some(Commands::Vase) => report_ok(handle_generate(Some("vase"), &cli.root), "OK!"),
        Some(Commands::Torus) => report_ok(handle_generate(Some("torus"), &cli.root), "OK!"),
        Some(Commands::Clock) => report_ok(handle_generate(Some("clock"), &cli.root), "OK!"),
        Some(Commands::Check { input }) => report_ok(handle_check(&input), "OK!"),
        Some(Commands::ListGenerators) => handle_list_generators(),
    }
}
