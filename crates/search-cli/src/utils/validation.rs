//! Parameter validation shared by the handlers.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use search_core::options::END_OF_OPTIONS;
use search_core::{Error, Result};

use crate::registry::Command;

/// Drop the first `--` so queries starting with `-` can be passed through.
pub fn positional(params: &[OsString]) -> Vec<&OsStr> {
    let mut seen_marker = false;
    params
        .iter()
        .map(OsString::as_os_str)
        .filter(|param| {
            if !seen_marker && *param == END_OF_OPTIONS {
                seen_marker = true;
                false
            } else {
                true
            }
        })
        .collect()
}

/// Arguments of a `<query> [<path>]` command.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryArgs<'a> {
    /// Search query, passed to the tool as given.
    pub query: &'a OsStr,
    /// Existing search root, when given.
    pub path: Option<&'a Path>,
}

/// Validate `<query> [<path>]` (or just `<query>` when `accepts_path` is false).
///
/// Checks run in order: missing query, surplus arguments, nonexistent path.
pub fn query_args<'a>(
    command: &Command,
    params: &'a [OsString],
    accepts_path: bool,
) -> Result<QueryArgs<'a>> {
    let words = positional(params);
    let query = words
        .first()
        .copied()
        .filter(|query| !query.is_empty())
        .ok_or_else(|| Error::MissingQuery {
            command: command.name.to_string(),
        })?;

    let max = if accepts_path { 2 } else { 1 };
    if let Some(extra) = words.get(max) {
        return Err(Error::TooManyArguments {
            command: command.name.to_string(),
            argument: extra.to_string_lossy().into_owned(),
        });
    }

    let path = match words.get(1) {
        Some(path) => Some(existing_path(*path)?),
        None => None,
    };

    Ok(QueryArgs { query, path })
}

/// `path` as a [`Path`], provided it exists.
pub fn existing_path(path: &OsStr) -> Result<&Path> {
    let path = Path::new(path);
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::PathNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Every word as UTF-8 text, for commands whose arguments end up in text.
pub fn utf8_words<'a>(command: &Command, words: &[&'a OsStr]) -> Result<Vec<&'a str>> {
    words
        .iter()
        .map(|&word| {
            word.to_str().ok_or_else(|| Error::InvalidArgument {
                command: command.name.to_string(),
                argument: word.to_string_lossy().into_owned(),
                reason: "not valid UTF-8",
            })
        })
        .collect()
}
