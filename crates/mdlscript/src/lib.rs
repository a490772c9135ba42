//! Core library for building MDL-style rendering command scripts.
//!
//! Exposes the command grammar, a line-oriented serializer and parser, and the
//! [`Generator`] trait used by the CLI crate in this workspace.
//!
//! # Supported Generators
//!
//! - Vase (nested mirrored Bézier profiles)
//! - Torus fractal (binary subdivision of torus rings)
//! - Clock frames (sixty per-minute animation scripts)

/// The command grammar shared by every generator.
pub mod command;
/// Error types used across the crate.
pub mod error;
/// Implementations of the individual script generators.
pub mod generators;
/// Ordered command sequences and the files they are written to.
pub mod script;

pub use crate::{
    command::{Axis, Command},
    generators::Generator,
    script::{Artifact, Script},
};

/// Central registry of generator metadata and constructors.
pub mod registry;

/// Construct a generator by name.
///
/// Returns an error if the name is unknown.
pub fn generator_from_name(name: &str) -> error::Result<Box<dyn Generator + 'static>> {
    registry::construct(name)
}
