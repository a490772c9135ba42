//! Error types for script parsing, generator lookup and script output.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Reasons a single script line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The first token is not a known command keyword.
    #[error("'{0}' not recognized as a command")]
    UnknownCommand(String),
    /// The command ended before all of its arguments were read.
    #[error("'{command}' expects {expected} arguments, found {found}")]
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// Required argument count.
        expected: usize,
        /// Arguments actually present.
        found: usize,
    },
    /// More tokens followed a complete command.
    #[error("unexpected trailing token '{0}'")]
    TrailingToken(String),
    /// A numeric argument could not be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A rotation axis other than `x`, `y` or `z`.
    #[error("unrecognized axis '{0}'; use x/y/z")]
    InvalidAxis(String),
    /// The line held no tokens.
    #[error("empty command")]
    Empty,
}

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// No generator is registered under the requested name.
    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),
    /// A script line could not be parsed.
    #[error("line {line}: {kind}")]
    Parse {
        /// 1-based line number; 0 when parsing a standalone command.
        line: usize,
        /// What went wrong.
        kind: ParseErrorKind,
    },
    /// Writing a script to disk failed.
    #[error("failed to write {}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl From<ParseErrorKind> for Error {
    fn from(kind: ParseErrorKind) -> Self {
        Self::Parse { line: 0, kind }
    }
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
