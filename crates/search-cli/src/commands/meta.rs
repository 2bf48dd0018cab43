//! `commands`, `help` and `version`, plus the help text they print.

use std::ffi::OsString;

use colored::Colorize;
use search_core::{Error, Result};
use serde::Serialize;

use crate::registry::{self, COMMANDS, Command, Context};
use crate::utils::validation::{positional, utf8_words};

/// Program name and version, e.g. `search 0.4.0`.
pub fn version_line() -> String {
    format!("search {}", env!("CARGO_PKG_VERSION"))
}

/// `version`
pub fn version(_ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    reject_params(command, &utf8_words(command, &positional(params))?)?;
    println!("{}", version_line());
    Ok(0)
}

/// How `commands` prints the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    /// Names and descriptions in two columns.
    Table,
    /// Names only, one per line.
    Raw,
    /// JSON array of `{name, description}`.
    Json,
}

#[derive(Serialize)]
struct CommandEntry<'a> {
    name: &'a str,
    description: &'a str,
}

/// `commands [--raw | --json]`
pub fn commands(_ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let mut format = ListFormat::Table;
    for param in utf8_words(command, &positional(params))? {
        format = match param {
            "--raw" => ListFormat::Raw,
            "--json" => ListFormat::Json,
            other if other.starts_with('-') => {
                return Err(Error::InvalidOption(format!(
                    "{}: unknown option '{other}'",
                    command.name
                )));
            },
            other => {
                return Err(Error::TooManyArguments {
                    command: command.name.to_string(),
                    argument: other.to_string(),
                });
            },
        };
    }

    print!("{}", render_command_list(format)?);
    Ok(0)
}

/// Render the command table in `format`.
pub fn render_command_list(format: ListFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        ListFormat::Raw => {
            for name in registry::names() {
                out.push_str(name);
                out.push('\n');
            }
        },
        ListFormat::Json => {
            let entries: Vec<_> = COMMANDS
                .iter()
                .map(|command| CommandEntry {
                    name: command.name,
                    description: command.description,
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|err| Error::Io(err.into()))?;
            out.push_str(&json);
            out.push('\n');
        },
        ListFormat::Table => write_table(&mut out, ""),
    }
    Ok(out)
}

fn write_table(out: &mut String, indent: &str) {
    let width = registry::names().map(str::len).max().unwrap_or(0);
    for command in COMMANDS {
        let name = format!("{:<width$}", command.name);
        out.push_str(&format!("{indent}{}  {}\n", name.bold(), command.description));
    }
}

/// `help [<command>]`
pub fn help(_ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let words = utf8_words(command, &positional(params))?;
    let text = match words.as_slice() {
        [] => render_program_help(),
        [name] => {
            let target =
                registry::find(name).ok_or_else(|| Error::UnknownCommand((*name).to_string()))?;
            render_command_help(target)
        },
        [_, extra, ..] => {
            return Err(Error::TooManyArguments {
                command: command.name.to_string(),
                argument: (*extra).to_string(),
            });
        },
    };
    print!("{text}");
    Ok(0)
}

/// Top-level help: usage synopsis and the command table.
pub fn render_program_help() -> String {
    let mut out = String::new();
    out.push_str(&version_line());
    out.push('\n');
    out.push_str("Search from the command line with local tools and web search engines.\n\n");
    out.push_str("Usage:\n");
    out.push_str(
        "  search [--debug] [--gui] [-b|--browser <BIN>] [-n|--dry-run] <command> [<args>...]\n",
    );
    out.push_str("  search -h | --help [<command>]\n");
    out.push_str("  search --version\n\n");
    out.push_str("Options:\n");
    out.push_str("  --debug              Log parsing and process invocations to stderr\n");
    out.push_str("  --gui                Open web searches in the desktop browser\n");
    out.push_str("  -b, --browser <BIN>  Terminal browser for web searches (default: w3m)\n");
    out.push_str("  -n, --dry-run        Print the command instead of running it\n");
    out.push_str("  -h, --help           Show help\n");
    out.push_str("  --version            Show version\n\n");
    out.push_str("Commands:\n");
    write_table(&mut out, "  ");
    out.push_str("\nRun `search help <command>` for details on a command.\n");
    out
}

/// Help for a single command: usage line and description.
pub fn render_command_help(command: &Command) -> String {
    format!(
        "Usage:\n  search {}\n\nDescription:\n  {}\n",
        command.usage, command.description
    )
}

fn reject_params(command: &Command, words: &[&str]) -> Result<()> {
    match words.first() {
        Some(extra) => Err(Error::TooManyArguments {
            command: command.name.to_string(),
            argument: (*extra).to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::utils::test_support::{RecordingRunner, context, params};
    use search_core::ErrorKind;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn raw_list_is_exactly_the_registry_names() {
        let raw = render_command_list(ListFormat::Raw).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        let expected: Vec<_> = registry::names().collect();
        assert_eq!(lines, expected);
        assert!(raw.ends_with('\n'));
        assert_eq!(raw.lines().count(), COMMANDS.len());
    }

    #[test]
    fn table_aligns_descriptions() {
        plain();
        let table = render_command_list(ListFormat::Table).unwrap();
        let width = registry::names().map(str::len).max().unwrap();
        for (line, command) in table.lines().zip(COMMANDS) {
            assert!(line.starts_with(command.name), "{line}");
            assert_eq!(&line[width + 2..], command.description, "{line}");
        }
    }

    #[test]
    fn json_list_has_names_and_descriptions() {
        let json = render_command_list(ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), COMMANDS.len());
        assert_eq!(entries[0]["name"], COMMANDS[0].name);
        assert_eq!(entries[0]["description"], COMMANDS[0].description);
    }

    #[test]
    fn commands_rejects_unknown_options() {
        let runner = RecordingRunner::default();
        let cmd = registry::find("commands").unwrap();
        let err = commands(&context(&runner), cmd, &params(&["--verbose"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
        let err = commands(&context(&runner), cmd, &params(&["extra"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyArguments);
    }

    #[test]
    fn help_for_unknown_command_fails() {
        let runner = RecordingRunner::default();
        let cmd = registry::find("help").unwrap();
        let err = help(&context(&runner), cmd, &params(&["frobnicate"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
    }

    #[test]
    fn command_help_shows_usage_and_description() {
        let text = render_command_help(registry::find("grep").unwrap());
        assert!(text.contains("search grep <query> [<path>]"));
        assert!(text.contains("Search file contents recursively with grep"));
    }

    #[test]
    fn program_help_lists_every_command() {
        plain();
        let text = render_program_help();
        assert!(text.starts_with(&version_line()));
        for name in registry::names() {
            assert!(text.contains(name), "{name}");
        }
    }

    #[test]
    fn version_rejects_arguments() {
        let runner = RecordingRunner::default();
        let cmd = registry::find("version").unwrap();
        assert!(version(&context(&runner), cmd, &params(&["now"])).is_err());
    }
}
