//! Error reporting and exit codes.
//!
//! Every failure is fatal and exits with status 1. The exit status of a
//! successfully spawned search tool is passed through unchanged, so `search grep`
//! behaves like `grep` in shell conditionals:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success (or the tool's own status) |
//! | 1 | Validation failure, unknown command, usage error, or tool failure |

use colored::Colorize;
use is_terminal::IsTerminal;
use tracing::debug;

/// Determine the exit code for an error returned by [`crate::run`].
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<search_core::Error>()
        .map_or(1, search_core::Error::exit_code)
}

/// The line printed to stderr for `err`.
#[must_use]
pub fn error_line(err: &anyhow::Error, color: bool) -> String {
    let prefix = if color {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    };
    format!("{prefix} {err:#}")
}

/// Print `err` to stderr, colored when stderr is a terminal and `NO_COLOR` is unset.
pub fn report(err: &anyhow::Error) {
    if let Some(core) = err.downcast_ref::<search_core::Error>() {
        debug!(kind = %core.kind(), "command failed");
    }
    let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    eprintln!("{}", error_line(err, color));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn core_errors_exit_with_their_code() {
        let err: anyhow::Error = search_core::Error::UnknownCommand("nope".into()).into();
        assert_eq!(exit_code_from_error(&err), 1);
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(exit_code_from_error(&anyhow!("something broke")), 1);
    }

    #[test]
    fn error_line_includes_context_chain() {
        let err = Err::<(), _>(search_core::Error::Config("bad value".into()))
            .context("Failed to load configuration")
            .unwrap_err();
        assert_eq!(
            error_line(&err, false),
            "Error: Failed to load configuration: Configuration error: bad value"
        );
    }

    #[test]
    fn plain_error_line() {
        let err: anyhow::Error = search_core::Error::UnknownCommand("frobnicate".into()).into();
        assert_eq!(error_line(&err, false), "Error: Unknown command: frobnicate");
    }
}
