//! Ordered command sequences and the files they are written to.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    slice,
};

use log::debug;

use crate::{
    command::Command,
    error::{self, Error},
};

/// An ordered scene script. Order matters: transforms affect primitives drawn
/// before the next `apply`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    /// Commands in emission order.
    commands: Vec<Command>,
}

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single command.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The commands in emission order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands, comments included.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the script holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands.
    pub fn iter(&self) -> slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Count commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Commands without comments, i.e. what the renderer acts on.
    pub fn instructions(&self) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .filter(|c| !matches!(c, Command::Comment(_)))
    }

    /// Render the script as text, one newline-terminated line per command.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            out.push_str(&command.to_string());
            out.push('\n');
        }
        out
    }

    /// Parse script text. Blank lines are skipped; errors report the 1-based
    /// line number.
    pub fn parse(text: &str) -> error::Result<Self> {
        let mut script = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let command = line.parse().map_err(|kind| Error::Parse {
                line: idx + 1,
                kind,
            })?;
            script.push(command);
        }
        Ok(script)
    }
}

impl Extend<Command> for Script {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Script {
    type Item = Command;
    type IntoIter = <Vec<Command> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Command;
    type IntoIter = slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// A script bound to the relative path it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Output path, relative to the directory the generator runs in.
    pub path: PathBuf,
    /// Script contents.
    pub script: Script,
}

impl Artifact {
    /// Bind `script` to `path`.
    pub fn new(path: impl Into<PathBuf>, script: Script) -> Self {
        Self {
            path: path.into(),
            script,
        }
    }

    /// Write the rendered script to `root/path`.
    ///
    /// Parent directories must already exist; they are never created here.
    /// Returns the full path written.
    pub fn write_under(&self, root: &Path) -> error::Result<PathBuf> {
        let dest = root.join(&self.path);
        let io_err = |source| Error::Io {
            path: dest.clone(),
            source,
        };

        let file = File::create(&dest).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        out.write_all(self.script.render().as_bytes())
            .and_then(|()| out.flush())
            .map_err(io_err)?;

        debug!("wrote {} ({} commands)", dest.display(), self.script.len());
        Ok(dest)
    }
}
