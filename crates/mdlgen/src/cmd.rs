//! Command handlers for the `mdlgen` CLI.
//!
//! These functions run generators and write the resulting scripts to disk, or
//! validate scripts that already exist.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use mdlscript::{Command, Script, generator_from_name, registry};

/// Run the named generator and write every artifact under `root`.
///
/// Output directories must already exist. The first failed write aborts the
/// run. Returns the paths written.
pub fn generate(name: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let generator = generator_from_name(name)?;
    info!("running {} generator", generator.name());

    generator
        .artifacts()
        .iter()
        .map(|artifact| {
            artifact.write_under(root).with_context(|| {
                format!("{} generator aborted", generator.name().to_lowercase())
            })
        })
        .collect()
}

/// Run every registered generator in registry order.
pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for name in registry::GENERATOR_NAMES {
        written.extend(generate(name, root)?);
    }
    Ok(written)
}

/// Summary of a validated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Commands the renderer acts on (comments excluded).
    pub instructions: usize,
    /// Drawing primitives among them.
    pub primitives: usize,
    /// Image names the script saves to.
    pub saves: Vec<String>,
}

/// Parse the script at `path` and summarise it.
pub fn check(path: &Path) -> Result<CheckReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let script =
        Script::parse(&text).with_context(|| format!("invalid script {}", path.display()))?;

    Ok(CheckReport {
        instructions: script.instructions().count(),
        primitives: script.count(Command::is_primitive),
        saves: script
            .iter()
            .filter_map(|c| match c {
                Command::Save(name) => Some(name.clone()),
                _ => None,
            })
            .collect(),
    })
}
