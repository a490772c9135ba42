//! Vase silhouette built from a shrinking sequence of mirrored Bézier pairs.

use std::iter;

use log::debug;

use super::{CENTER, Generator};
use crate::{
    command::Command,
    script::{Artifact, Script},
};

/// Geometry of one vase iteration, as offsets from [`CENTER`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeState {
    /// Rim height above the centre.
    pub top: f64,
    /// Half the rim width.
    pub half_width: f64,
    /// Horizontal pull of the upper control point.
    pub half_top_dragger: f64,
    /// Depth of the base below the centre.
    pub bottom: f64,
    /// Horizontal bulge of the lower control point.
    pub left_x: f64,
    /// Vertical position of the lower control point.
    pub left_y: f64,
}

impl ShapeState {
    /// The outermost profile.
    pub const INITIAL: Self = Self {
        top: 150.0,
        half_width: 125.0,
        half_top_dragger: 50.0,
        bottom: 200.0,
        left_x: 235.0,
        left_y: 160.0,
    };

    /// The next, smaller profile: every field scaled by `factor`.
    pub fn next(self, factor: f64) -> Self {
        Self {
            top: self.top * factor,
            half_width: self.half_width * factor,
            half_top_dragger: self.half_top_dragger * factor,
            bottom: self.bottom * factor,
            left_x: self.left_x * factor,
            left_y: self.left_y * factor,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> [f64; 6] {
        [
            self.top,
            self.half_width,
            self.half_top_dragger,
            self.bottom,
            self.left_x,
            self.left_y,
        ]
    }

    /// Left and right profile curves plus the rim line for this state.
    pub fn commands(&self) -> [Command; 3] {
        let rim = CENTER + self.top;
        let base = CENTER - self.bottom;
        let low = CENTER - self.left_y;
        [
            Command::Bezier([
                [CENTER - self.half_width, rim],
                [CENTER + self.half_top_dragger, rim],
                [CENTER - self.left_x, low],
                [CENTER, base],
            ]),
            Command::Bezier([
                [CENTER + self.half_width, rim],
                [CENTER - self.half_top_dragger, rim],
                [CENTER + self.left_x, low],
                [CENTER, base],
            ]),
            Command::line(
                [CENTER - self.half_width, rim, 0.0],
                [CENTER + self.half_width, rim, 0.0],
            ),
        ]
    }
}

impl Default for ShapeState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Generator for the `vase` script.
#[derive(Debug, Clone)]
pub struct VaseProfile {
    /// First (largest) profile.
    pub initial: ShapeState,
    /// Scale applied between successive profiles.
    pub factor: f64,
    /// Number of profiles drawn.
    pub steps: usize,
}

impl VaseProfile {
    /// Decay applied between profiles.
    pub const DECAY_FACTOR: f64 = 0.3;
    /// Number of nested profiles.
    pub const STEPS: usize = 20;
    /// Script path.
    pub const OUTPUT: &'static str = "vase";
    /// Image the script saves.
    pub const IMAGE: &'static str = "vase.png";

    /// The `steps` states drawn, starting from `initial`. Decay happens after
    /// a state is drawn, so the first is undecayed.
    pub fn states(&self) -> Vec<ShapeState> {
        let factor = self.factor;
        iter::successors(Some(self.initial), |s| Some(s.next(factor)))
            .take(self.steps)
            .collect()
    }

    /// Build the complete script: three commands per state, then the save.
    pub fn script(&self) -> Script {
        let mut script = self
            .states()
            .iter()
            .fold(Script::new(), |mut script, state| {
                script.extend(state.commands());
                script
            });
        script.push(Command::Save(Self::IMAGE.to_string()));
        script
    }
}

impl Default for VaseProfile {
    fn default() -> Self {
        Self {
            initial: ShapeState::INITIAL,
            factor: Self::DECAY_FACTOR,
            steps: Self::STEPS,
        }
    }
}

impl Generator for VaseProfile {
    fn name(&self) -> &'static str {
        "Vase"
    }

    fn info(&self) -> &'static str {
        "Nested pairs of mirrored cubic Bézier curves, each capped by a rim\n\
        line and shrunk by a constant factor, approximating a revolved vase."
    }

    fn artifacts(&self) -> Vec<Artifact> {
        let script = self.script();
        debug!("vase: {} profiles, {} commands", self.steps, script.len());
        vec![Artifact::new(Self::OUTPUT, script)]
    }
}
