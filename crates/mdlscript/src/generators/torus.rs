//! Self-similar torus arrangement from repeated binary subdivision.
//!
//! Level `d` lays `2^d` rings of major radius `SPAN / 2^d` side by side across
//! `(-SPAN, SPAN)` on the x axis, so every level covers the same span with
//! twice as many rings, each half as large.

use log::{debug, trace};

use super::{CENTER, Generator};
use crate::{
    command::{Axis, Command},
    script::{Artifact, Script},
};

/// Generator for the `torusfractal` script.
#[derive(Debug, Clone, Copy, Default)]
pub struct TorusFractal;

impl TorusFractal {
    /// Number of subdivision levels.
    pub const MAX_DEPTH: u32 = 5;
    /// Half-width of the region every level covers.
    pub const SPAN: f64 = 250.0;
    /// Tube thickness of every ring.
    pub const MINOR_RADIUS: f64 = 10.0;
    /// Script path.
    pub const OUTPUT: &'static str = "torusfractal";
    /// Image the script saves.
    pub const IMAGE: &'static str = "torusfractal.png";

    /// Rings at one subdivision level, left to right.
    pub fn level(depth: u32) -> Vec<Command> {
        let points = 1u32 << depth;
        let radius = Self::SPAN / f64::from(points);
        (0..points)
            .map(|i| {
                let x = radius * f64::from(1 + 2 * i) - Self::SPAN;
                Command::torus([x, 0.0, 0.0], Self::MINOR_RADIUS, radius)
            })
            .collect()
    }

    /// Tilt the arrangement and move it to the canvas centre.
    fn closing() -> [Command; 5] {
        [
            Command::Rotate(Axis::X, 45.0),
            Command::Rotate(Axis::Y, 20.0),
            Command::Move([CENTER, CENTER, 0.0]),
            Command::Apply,
            Command::Save(Self::IMAGE.to_string()),
        ]
    }

    /// Build the complete script: every level, shallowest first, then the
    /// closing transform and save.
    pub fn script(&self) -> Script {
        let mut script = Script::new();
        for depth in 0..Self::MAX_DEPTH {
            let rings = Self::level(depth);
            trace!("torus level {depth}: {} rings", rings.len());
            script.extend(rings);
        }
        script.extend(Self::closing());
        script
    }
}

impl Generator for TorusFractal {
    fn name(&self) -> &'static str {
        "Torus fractal"
    }

    fn info(&self) -> &'static str {
        "Rows of torus rings, each level doubling the count and halving the\n\
        radius across the same span, tilted and centred on the canvas."
    }

    fn artifacts(&self) -> Vec<Artifact> {
        let script = self.script();
        debug!("torus: {} commands", script.len());
        vec![Artifact::new(Self::OUTPUT, script)]
    }
}
