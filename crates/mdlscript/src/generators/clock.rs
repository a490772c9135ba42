//! Sixty analog clock frames, one per elapsed minute.
//!
//! The hour hand is drawn right after the minute hand's `apply`, with no
//! rotation of its own, so it follows whatever transform the renderer has
//! committed at that point. Each tick mark starts from `ident`, so the
//! preceding mark's committed rotation does not move the next mark. Both
//! sequences are emitted as-is; how they look depends on the renderer's
//! transform semantics.

use log::{debug, trace};

use super::{CENTER, Generator};
use crate::{
    command::{Axis, Command},
    script::{Artifact, Script},
};

/// Generator for the `clockscripts/clockNN` scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockFrames;

impl ClockFrames {
    /// Number of frames, one per minute.
    pub const FRAMES: u32 = 60;
    /// Number of edge tick marks per frame.
    pub const MARKS: u32 = 12;
    /// Minute hand length.
    pub const MINUTE_LENGTH: f64 = 200.0;
    /// Hour hand length.
    pub const HOUR_LENGTH: f64 = 125.0;
    /// Tick mark length.
    pub const MARK_LENGTH: f64 = 25.0;
    /// Distance from the centre to the outer end of a tick mark.
    pub const DIAL_EDGE: f64 = 245.0;
    /// Minute hand rotation per frame, in degrees (clockwise).
    pub const DEGREES_PER_MINUTE: i32 = -6;
    /// Rotation between tick marks, in degrees.
    pub const DEGREES_PER_MARK: f64 = -30.0;
    /// Directory the scripts are written to.
    pub const SCRIPT_DIR: &'static str = "clockscripts";
    /// Directory the rendered frames are saved to.
    pub const FRAME_DIR: &'static str = "clockframes";

    /// Script path for frame `index`.
    pub fn script_path(index: u32) -> String {
        format!("{}/clock{index:02}", Self::SCRIPT_DIR)
    }

    /// Image path saved by frame `index`.
    pub fn image_path(index: u32) -> String {
        format!("{}/clock{index:02}.png", Self::FRAME_DIR)
    }

    /// Minute hand rotation for frame `index`, in degrees.
    pub fn minute_angle(index: u32) -> f64 {
        let minutes = i32::try_from(index).unwrap_or(i32::MAX);
        f64::from(minutes.saturating_mul(Self::DEGREES_PER_MINUTE))
    }

    /// A hand of `length` pointing up from the origin.
    fn hand(length: f64) -> Command {
        Command::line([0.0; 3], [0.0, length, 0.0])
    }

    /// Build the script for frame `index`.
    pub fn frame(index: u32) -> Script {
        let mut script = Script::new();

        script.push(Command::Comment("Minute hand".into()));
        script.extend([
            Self::hand(Self::MINUTE_LENGTH),
            Command::Rotate(Axis::Z, Self::minute_angle(index)),
            Command::Apply,
        ]);

        script.push(Command::Comment("Hour hand".into()));
        script.push(Self::hand(Self::HOUR_LENGTH));

        script.push(Command::Comment("Edge markings".into()));
        for _ in 0..Self::MARKS {
            script.extend([
                Command::Ident,
                Command::line(
                    [0.0, Self::DIAL_EDGE - Self::MARK_LENGTH, 0.0],
                    [0.0, Self::DIAL_EDGE, 0.0],
                ),
                Command::Rotate(Axis::Z, Self::DEGREES_PER_MARK),
                Command::Apply,
            ]);
        }

        script.extend([
            Command::Ident,
            Command::Move([CENTER, CENTER, 0.0]),
            Command::Apply,
            Command::Save(Self::image_path(index)),
        ]);
        trace!("clock frame {index:02}: {} commands", script.len());
        script
    }
}

impl Generator for ClockFrames {
    fn name(&self) -> &'static str {
        "Clock frames"
    }

    fn info(&self) -> &'static str {
        "Sixty animation frames of an analog clock face: a minute hand\n\
        advancing six degrees per frame, an hour hand and twelve edge marks."
    }

    fn artifacts(&self) -> Vec<Artifact> {
        let artifacts: Vec<Artifact> = (0..Self::FRAMES)
            .map(|i| Artifact::new(Self::script_path(i), Self::frame(i)))
            .collect();
        debug!("clock: {} frames", artifacts.len());
        artifacts
    }
}
