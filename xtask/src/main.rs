//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Write every script into a scratch directory and validate each one.
    Smoke,
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// Scratch directory used by `smoke`.
    scratch: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            scratch: root.join("target").join("smoke"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Smoke => smoke(&paths),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Generate every script under `target/smoke` and run `mdlgen check` on each.
fn smoke(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    let scratch = &paths.scratch;

    if sh.path_exists(scratch) {
        sh.remove_path(scratch)?;
    }
    sh.create_dir(scratch.join("clockscripts"))?;

    cmd!(sh, "cargo run -q -p mdlgen -- -C {scratch} all").run()?;

    let mut scripts = vec![scratch.join("vase"), scratch.join("torusfractal")];
    scripts.extend(sh.read_dir(scratch.join("clockscripts"))?);
    for script in &scripts {
        cmd!(sh, "cargo run -q -p mdlgen -- check {script}").run()?;
    }

    println!("Checked {} scripts.", scripts.len());
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}
