//! Command grammar understood by the external renderer.
//!
//! Every [`Command`] renders to exactly one line of text via [`Display`] and
//! can be read back from one line via [`FromStr`]. The grammar is:
//!
//! ```text
//! bezier x1 y1 x2 y2 x3 y3 x4 y4
//! line   x1 y1 z1 x2 y2 z2
//! torus  cx cy cz minorRadius majorRadius
//! rotate axis(x|y|z) degrees
//! move   dx dy dz
//! apply
//! ident
//! save   filename
//! ```
//!
//! Anything after `#` on a line is a comment.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use smallvec::SmallVec;

use crate::error::ParseErrorKind;

/// Rotation axis for [`Command::Rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rotate about the x axis.
    X,
    /// Rotate about the y axis.
    Y,
    /// Rotate about the z axis.
    Z,
}

impl Axis {
    /// Keyword used for this axis in scripts.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Axis {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            other => Err(ParseErrorKind::InvalidAxis(other.to_string())),
        }
    }
}

/// One instruction of a scene script.
///
/// Numeric fields are not validated; degenerate geometry is the renderer's
/// concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Straight edge between two 3D points.
    Line {
        /// Start point.
        from: [f64; 3],
        /// End point.
        to: [f64; 3],
    },
    /// Cubic Bézier curve given by four 2D control points.
    Bezier([[f64; 2]; 4]),
    /// Torus primitive.
    Torus {
        /// Centre of the ring.
        center: [f64; 3],
        /// Tube thickness.
        minor_radius: f64,
        /// Ring radius.
        major_radius: f64,
    },
    /// Append a rotation, in degrees, to the pending transform.
    Rotate(Axis, f64),
    /// Append a translation to the pending transform.
    Move([f64; 3]),
    /// Commit the pending transform to everything drawn so far.
    Apply,
    /// Reset the pending transform to identity.
    Ident,
    /// Render and save the image under the given file name.
    Save(String),
    /// Free-form annotation ignored by the renderer.
    Comment(String),
}

impl Command {
    /// Convenience constructor for [`Command::Line`].
    pub fn line(from: [f64; 3], to: [f64; 3]) -> Self {
        Self::Line { from, to }
    }

    /// Convenience constructor for [`Command::Torus`].
    pub fn torus(center: [f64; 3], minor_radius: f64, major_radius: f64) -> Self {
        Self::Torus {
            center,
            minor_radius,
            major_radius,
        }
    }

    /// Keyword that starts this command's line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Bezier(_) => "bezier",
            Self::Torus { .. } => "torus",
            Self::Rotate(..) => "rotate",
            Self::Move(_) => "move",
            Self::Apply => "apply",
            Self::Ident => "ident",
            Self::Save(_) => "save",
            Self::Comment(_) => "#",
        }
    }

    /// Whether this command draws geometry.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Line { .. } | Self::Bezier(_) | Self::Torus { .. }
        )
    }
}

/// Formats a number the way scripts expect: shortest decimal form, no
/// trailing `.0`, and never `-0`.
#[derive(Clone, Copy)]
struct Num(f64);

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Write `values` as space-prefixed numbers.
fn write_numbers(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for v in values {
        write!(f, " {}", Num(*v))?;
    }
    Ok(())
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) if text.is_empty() => return f.write_str("#"),
            Self::Comment(text) => return write!(f, "# {text}"),
            _ => f.write_str(self.keyword())?,
        }
        match self {
            Self::Line { from, to } => {
                write_numbers(f, from)?;
                write_numbers(f, to)
            }
            Self::Bezier(points) => write_numbers(f, points.as_flattened()),
            Self::Torus {
                center,
                minor_radius,
                major_radius,
            } => {
                write_numbers(f, center)?;
                write_numbers(f, &[*minor_radius, *major_radius])
            }
            Self::Rotate(axis, degrees) => write!(f, " {axis} {}", Num(*degrees)),
            Self::Move(delta) => write_numbers(f, delta),
            Self::Save(name) => write!(f, " {name}"),
            Self::Apply | Self::Ident | Self::Comment(_) => Ok(()),
        }
    }
}

/// Tokens of one line. The longest command (`bezier`) has nine.
type Tokens<'a> = SmallVec<[&'a str; 9]>;

/// Check the argument count of `command` and return the arguments.
fn arguments<'a, 'b>(
    command: &'static str,
    tokens: &'b Tokens<'a>,
    expected: usize,
) -> Result<&'b [&'a str], ParseErrorKind> {
    let args = &tokens[1..];
    if args.len() < expected {
        return Err(ParseErrorKind::MissingArgument {
            command,
            expected,
            found: args.len(),
        });
    }
    if let Some(extra) = args.get(expected) {
        return Err(ParseErrorKind::TrailingToken((*extra).to_string()));
    }
    Ok(args)
}

/// Parse a numeric argument.
fn number(token: &str) -> Result<f64, ParseErrorKind> {
    token
        .parse()
        .map_err(|_| ParseErrorKind::InvalidNumber(token.to_string()))
}

/// Parse exactly `N` numeric arguments.
fn numbers<const N: usize>(args: &[&str]) -> Result<[f64; N], ParseErrorKind> {
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = number(token)?;
    }
    Ok(out)
}

impl FromStr for Command {
    type Err = ParseErrorKind;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (body, comment) = match line.split_once('#') {
            Some((body, comment)) => (body, Some(comment)),
            None => (line, None),
        };

        let tokens: Tokens<'_> = body.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            return match comment {
                Some(text) => Ok(Self::Comment(text.trim().to_string())),
                None => Err(ParseErrorKind::Empty),
            };
        };

        match keyword {
            "line" => {
                let [x1, y1, z1, x2, y2, z2] = numbers::<6>(arguments("line", &tokens, 6)?)?;
                Ok(Self::line([x1, y1, z1], [x2, y2, z2]))
            }
            "bezier" => {
                let [x1, y1, x2, y2, x3, y3, x4, y4] =
                    numbers::<8>(arguments("bezier", &tokens, 8)?)?;
                Ok(Self::Bezier([[x1, y1], [x2, y2], [x3, y3], [x4, y4]]))
            }
            "torus" => {
                let [cx, cy, cz, minor, major] = numbers::<5>(arguments("torus", &tokens, 5)?)?;
                Ok(Self::torus([cx, cy, cz], minor, major))
            }
            "rotate" => {
                let args = arguments("rotate", &tokens, 2)?;
                Ok(Self::Rotate(args[0].parse()?, number(args[1])?))
            }
            "move" => Ok(Self::Move(numbers::<3>(arguments("move", &tokens, 3)?)?)),
            "apply" => arguments("apply", &tokens, 0).map(|_| Self::Apply),
            "ident" => arguments("ident", &tokens, 0).map(|_| Self::Ident),
            "save" => {
                let args = arguments("save", &tokens, 1)?;
                Ok(Self::Save(args[0].to_string()))
            }
            other => Err(ParseErrorKind::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integral_values_without_fraction() {
        let c = Command::Bezier([[125.0, 400.0], [300.0, 400.0], [15.0, 90.0], [250.0, 50.0]]);
        assert_eq!(c.to_string(), "bezier 125 400 300 400 15 90 250 50");

        let c = Command::line([212.5, 295.0, 0.0], [287.5, 295.0, 0.0]);
        assert_eq!(c.to_string(), "line 212.5 295 0 287.5 295 0");
    }

    #[test]
    fn never_renders_negative_zero() {
        assert_eq!(Command::Rotate(Axis::Z, -0.0).to_string(), "rotate z 0");
        assert_eq!(Command::Move([-0.0, 0.0, -0.0]).to_string(), "move 0 0 0");
    }

    #[test]
    fn renders_transforms_and_save() {
        assert_eq!(Command::Rotate(Axis::X, 45.0).to_string(), "rotate x 45");
        assert_eq!(Command::Rotate(Axis::Z, -354.0).to_string(), "rotate z -354");
        assert_eq!(Command::Move([250.0, 250.0, 0.0]).to_string(), "move 250 250 0");
        assert_eq!(Command::Apply.to_string(), "apply");
        assert_eq!(Command::Ident.to_string(), "ident");
        assert_eq!(
            Command::Save("clockframes/clock07.png".into()).to_string(),
            "save clockframes/clock07.png"
        );
        assert_eq!(
            Command::torus([-125.0, 0.0, 0.0], 10.0, 125.0).to_string(),
            "torus -125 0 0 10 125"
        );
        assert_eq!(Command::Comment("Hour hand".into()).to_string(), "# Hour hand");
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            "torus 0 0 0 10 250".parse::<Command>(),
            Ok(Command::torus([0.0; 3], 10.0, 250.0))
        );
        assert_eq!(
            "  rotate   y 20 ".parse::<Command>(),
            Ok(Command::Rotate(Axis::Y, 20.0))
        );
        assert_eq!(
            "line 0 0 0 0 200 0 # minute".parse::<Command>(),
            Ok(Command::line([0.0; 3], [0.0, 200.0, 0.0]))
        );
        assert_eq!(
            "# Edge markings".parse::<Command>(),
            Ok(Command::Comment("Edge markings".into()))
        );
        assert_eq!(
            "save vase.png".parse::<Command>(),
            Ok(Command::Save("vase.png".into()))
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            "scale 1 1 1".parse::<Command>(),
            Err(ParseErrorKind::UnknownCommand("scale".into()))
        );
        assert_eq!(
            "move 1 2".parse::<Command>(),
            Err(ParseErrorKind::MissingArgument {
                command: "move",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "apply now".parse::<Command>(),
            Err(ParseErrorKind::TrailingToken("now".into()))
        );
        assert_eq!(
            "rotate w 30".parse::<Command>(),
            Err(ParseErrorKind::InvalidAxis("w".into()))
        );
        assert_eq!(
            "line 0 0 zero 0 1 0".parse::<Command>(),
            Err(ParseErrorKind::InvalidNumber("zero".into()))
        );
        assert_eq!("   ".parse::<Command>(), Err(ParseErrorKind::Empty));
        // Keywords are case-sensitive.
        assert!("Line 0 0 0 0 1 0".parse::<Command>().is_err());
    }
}
