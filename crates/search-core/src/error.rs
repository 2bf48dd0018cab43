//! Error types for search-core operations.
//!
//! Every failure in `search` is fatal: the message is printed to standard error
//! and the process exits with status 1. The variants still carry enough detail
//! for callers (and tests) to tell the failure modes apart via [`ErrorKind`].
//!
//! ```rust
//! use search_core::{Error, ErrorKind};
//!
//! let err = Error::MissingQuery { command: "grep".into() };
//! assert_eq!(err.kind(), ErrorKind::MissingQuery);
//! assert_eq!(err.exit_code(), 1);
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for search-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A command that needs a query was invoked without one.
    #[error("{command}: a search query is required")]
    MissingQuery {
        /// Name of the command that was invoked.
        command: String,
    },

    /// A path argument does not exist on the filesystem.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path as given on the command line.
        path: PathBuf,
    },

    /// The command or browser step has no implementation for this platform.
    #[error("{feature} is not supported on {platform}")]
    UnsupportedPlatform {
        /// What was attempted (a command name or "opening a URL").
        feature: String,
        /// The operating system identifier.
        platform: String,
    },

    /// No command with this name is registered.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The external program required by a command is not on `PATH`.
    #[error("{program} is not installed or not on PATH")]
    ToolNotInstalled {
        /// Program that could not be found.
        program: String,
    },

    /// A command received more positional arguments than it accepts.
    #[error("{command}: unexpected argument '{argument}'")]
    TooManyArguments {
        /// Name of the command that was invoked.
        command: String,
        /// First surplus argument.
        argument: String,
    },

    /// A command argument cannot be passed on safely.
    #[error("{command}: invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the command that was invoked.
        command: String,
        /// The offending argument, lossily decoded for display.
        argument: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An option was not recognized or is missing its value.
    #[error("{0}")]
    InvalidOption(String),

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Spawning or waiting on a subprocess failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of an [`Error`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::MissingQuery`].
    MissingQuery,
    /// See [`Error::PathNotFound`].
    PathNotFound,
    /// See [`Error::UnsupportedPlatform`].
    UnsupportedPlatform,
    /// See [`Error::UnknownCommand`].
    UnknownCommand,
    /// See [`Error::ToolNotInstalled`].
    ToolNotInstalled,
    /// See [`Error::TooManyArguments`].
    TooManyArguments,
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::InvalidOption`].
    InvalidOption,
    /// See [`Error::Config`].
    Config,
    /// See [`Error::Io`].
    Io,
}

impl ErrorKind {
    /// Short, stable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingQuery => "missing query",
            Self::PathNotFound => "path not found",
            Self::UnsupportedPlatform => "unsupported platform",
            Self::UnknownCommand => "unknown command",
            Self::ToolNotInstalled => "tool not installed",
            Self::TooManyArguments => "too many arguments",
            Self::InvalidArgument => "invalid argument",
            Self::InvalidOption => "invalid option",
            Self::Config => "configuration error",
            Self::Io => "io error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// The kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingQuery { .. } => ErrorKind::MissingQuery,
            Self::PathNotFound { .. } => ErrorKind::PathNotFound,
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::ToolNotInstalled { .. } => ErrorKind::ToolNotInstalled,
            Self::TooManyArguments { .. } => ErrorKind::TooManyArguments,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidOption(_) => ErrorKind::InvalidOption,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error. All failures exit with 1.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            Error::UnknownCommand("nope".into()).kind(),
            ErrorKind::UnknownCommand
        );
        assert_eq!(
            Error::PathNotFound {
                path: PathBuf::from("/missing")
            }
            .kind(),
            ErrorKind::PathNotFound
        );
        assert_eq!(
            Error::Io(std::io::Error::other("boom")).kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_every_kind_exits_with_one() {
        let errors = [
            Error::MissingQuery {
                command: "grep".into(),
            },
            Error::ToolNotInstalled {
                program: "rg".into(),
            },
            Error::UnsupportedPlatform {
                feature: "mdfind".into(),
                platform: "linux".into(),
            },
            Error::InvalidOption("unexpected argument '--bogus'".into()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ErrorKind::MissingQuery.to_string(), "missing query");
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "invalid argument");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::UnknownCommand("frobnicate".into()).to_string(),
            "Unknown command: frobnicate"
        );
        assert_eq!(
            Error::MissingQuery {
                command: "google".into()
            }
            .to_string(),
            "google: a search query is required"
        );
        assert_eq!(
            Error::PathNotFound {
                path: PathBuf::from("/no/such/dir")
            }
            .to_string(),
            "path not found: /no/such/dir"
        );
    }
}
