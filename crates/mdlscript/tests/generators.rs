//! Integration tests checking the structure of every generated script.
#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use mdlscript::{
        Axis, Command, Generator, Script, error, generator_from_name,
        generators::{clock::ClockFrames, torus::TorusFractal, vase::VaseProfile},
        registry,
    };

    /// The first rotation in a frame is the minute hand's.
    fn frame_angle(frame: &Script) -> Option<f64> {
        frame.iter().find_map(|c| match c {
            Command::Rotate(Axis::Z, degrees) => Some(*degrees),
            _ => None,
        })
    }

    macro_rules! clock_frame_tests {
        ($(($index:expr, $angle:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<clock_frame_ $index _minute_rotation>]() {
                        let frame = ClockFrames::frame($index);
                        assert_eq!(
                            frame.commands()[2],
                            Command::Rotate(Axis::Z, $angle),
                            "frame {} minute hand",
                            $index
                        );
                        assert_eq!(
                            frame.commands().last(),
                            Some(&Command::Save(format!("clockframes/clock{:02}.png", $index)))
                        );
                    }
                }
            )*
        };
    }

    clock_frame_tests! {
        (0, 0.0),
        (1, -6.0),
        (9, -54.0),
        (15, -90.0),
        (30, -180.0),
        (45, -270.0),
        (59, -354.0),
    }

    #[test]
    fn clock_minute_angles_cover_every_increment_once() {
        let angles: BTreeSet<i64> = (0..ClockFrames::FRAMES)
            .map(|i| (ClockFrames::minute_angle(i) as i64).rem_euclid(360))
            .collect();
        assert_eq!(angles.len(), 60);
        assert!(angles.iter().all(|a| a % 6 == 0));

        for i in 1..ClockFrames::FRAMES {
            assert!(ClockFrames::minute_angle(i) < ClockFrames::minute_angle(i - 1));
        }
    }

    #[test]
    fn clock_frames_have_hands_and_marks() {
        let generator = ClockFrames;
        let artifacts = generator.artifacts();
        assert_eq!(artifacts.len(), 60);

        for (i, artifact) in artifacts.iter().enumerate() {
            assert_eq!(
                artifact.path.to_str(),
                Some(format!("clockscripts/clock{i:02}").as_str())
            );
            let script = &artifact.script;
            let is_line = |c: &Command| matches!(c, Command::Line { .. });
            // minute hand + hour hand + 12 marks
            assert_eq!(script.count(is_line), 14);

            let hands: Vec<&Command> = script
                .iter()
                .filter(|c| matches!(c, Command::Line { from, .. } if *from == [0.0; 3]))
                .collect();
            assert_eq!(
                hands,
                [
                    &Command::line([0.0; 3], [0.0, 200.0, 0.0]),
                    &Command::line([0.0; 3], [0.0, 125.0, 0.0]),
                ]
            );

            let mark_blocks = script
                .commands()
                .windows(4)
                .filter(|w| {
                    w[0] == Command::Ident
                        && is_line(&w[1])
                        && w[2] == Command::Rotate(Axis::Z, -30.0)
                        && w[3] == Command::Apply
                })
                .count();
            assert_eq!(mark_blocks, 12);
            assert_eq!(frame_angle(script), Some(ClockFrames::minute_angle(i as u32)));
        }
    }

    #[test]
    fn hour_hand_has_no_rotation_of_its_own() {
        let frame = ClockFrames::frame(20);
        let cmds: Vec<&Command> = frame.instructions().collect();
        assert_eq!(cmds[2], &Command::Apply);
        assert_eq!(cmds[3], &Command::line([0.0; 3], [0.0, 125.0, 0.0]));
        assert_eq!(cmds[4], &Command::Ident);
    }

    #[test]
    fn torus_levels_double_and_stay_symmetric() {
        let mut expected = Vec::new();
        for depth in 0..TorusFractal::MAX_DEPTH {
            let level = TorusFractal::level(depth);
            assert_eq!(level.len(), 1 << depth);

            let points = f64::from(1u32 << depth);
            let xs: Vec<f64> = level
                .iter()
                .map(|c| match c {
                    Command::Torus { center, major_radius, minor_radius } => {
                        assert_eq!(*minor_radius, 10.0);
                        assert_eq!(*major_radius, 250.0 / points);
                        center[0]
                    }
                    other => panic!("unexpected {other:?}"),
                })
                .collect();

            for (i, x) in xs.iter().enumerate() {
                assert_eq!(*x, 250.0 / points * (1.0 + 2.0 * i as f64) - 250.0);
                assert!(*x > -250.0 && *x < 250.0);
                assert_eq!(*x, -xs[xs.len() - 1 - i]);
            }
            for pair in xs.windows(2) {
                assert_eq!(pair[1] - pair[0], 500.0 / points);
            }
            expected.extend(level);
        }

        let script = TorusFractal.script();
        assert_eq!(&script.commands()[..31], expected.as_slice());
    }

    #[test]
    fn torus_closing_commands() {
        let script = TorusFractal.script();
        let tail: Vec<String> = script.commands()[31..].iter().map(ToString::to_string).collect();
        assert_eq!(
            tail,
            [
                "rotate x 45",
                "rotate y 20",
                "move 250 250 0",
                "apply",
                "save torusfractal.png"
            ]
        );
    }

    #[test]
    fn vase_script_shape() {
        let script = VaseProfile::default().script();
        let text = script.render();
        assert_eq!(text.lines().count(), 61);
        assert_eq!(
            text.lines().next(),
            Some("bezier 125 400 300 400 15 90 250 50")
        );
        assert_eq!(text.lines().last(), Some("save vase.png"));

        let rims: Vec<f64> = script
            .iter()
            .filter_map(|c| match c {
                Command::Line { from, .. } => Some(from[1]),
                _ => None,
            })
            .collect();
        assert_eq!(rims.len(), 20);
        assert!(rims.windows(2).all(|w| w[1] < w[0]));
        assert!(rims.iter().all(|y| *y > 250.0));
    }

    #[test]
    fn every_generator_is_deterministic_and_parses_back() -> error::Result<()> {
        for name in registry::GENERATOR_NAMES {
            let first = generator_from_name(name)?.artifacts();
            let second = generator_from_name(name)?.artifacts();
            assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.path, b.path);
                assert_eq!(a.script.render(), b.script.render());
                assert_eq!(Script::parse(&a.script.render())?, a.script);
            }
        }
        Ok(())
    }
}
