//! Script generators.
//!
//! Each generator is stateless and deterministic: the same constants always
//! produce byte-identical artifacts.

/// Sixty per-minute analog clock frames.
pub mod clock;
/// Binary subdivision of torus rings.
pub mod torus;
/// Nested mirrored Bézier vase profiles.
pub mod vase;

use crate::script::Artifact;

/// Origin offset shared by all generators; the renderer's canvas is 500×500.
pub const CENTER: f64 = 250.0;

/// A producer of one or more scene scripts.
pub trait Generator {
    /// Human-readable generator name.
    fn name(&self) -> &'static str;
    /// Short description of what the generated scripts depict.
    fn info(&self) -> &'static str;
    /// Build every script this generator emits, bound to its output path.
    fn artifacts(&self) -> Vec<Artifact>;
}
