//! Generator metadata and constructors keyed by name.

use crate::{
    error::{Error, Result},
    generators::{Generator, clock::ClockFrames, torus::TorusFractal, vase::VaseProfile},
};

/// Metadata for one registered generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorEntry {
    /// Lookup key used on the command line.
    pub key: &'static str,
    /// Display name.
    pub display: &'static str,
    /// Description of the files written.
    pub outputs: &'static str,
    /// Constructor.
    build: fn() -> Box<dyn Generator>,
}

/// All generators, in the order `all` runs them.
pub const REGISTRY: &[GeneratorEntry] = &[
    GeneratorEntry {
        key: "vase",
        display: "Vase",
        outputs: "vase -> vase.png",
        build: || Box::new(VaseProfile::default()),
    },
    GeneratorEntry {
        key: "torus",
        display: "Torus fractal",
        outputs: "torusfractal -> torusfractal.png",
        build: || Box::new(TorusFractal),
    },
    GeneratorEntry {
        key: "clock",
        display: "Clock frames",
        outputs: "clockscripts/clock00..59 -> clockframes/clock00..59.png",
        build: || Box::new(ClockFrames),
    },
];

/// Registered generator keys.
pub const GENERATOR_NAMES: &[&str] = &["vase", "torus", "clock"];

/// Look up a registry entry by key.
pub fn entry(name: &str) -> Option<&'static GeneratorEntry> {
    REGISTRY.iter().find(|e| e.key == name)
}

/// Construct the generator registered under `name`.
pub fn construct(name: &str) -> Result<Box<dyn Generator>> {
    entry(name)
        .map(|e| (e.build)())
        .ok_or_else(|| Error::UnknownGenerator(name.to_string()))
}
