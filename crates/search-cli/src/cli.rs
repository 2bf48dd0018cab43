//! # CLI Structure and Argument Parsing
//!
//! Parsing happens in two stages:
//!
//! 1. [`search_core::options::normalize`] splits `-abc` clusters and
//!    `--flag=value` pairs into separate tokens.
//! 2. clap recognizes the global flags. The first token that is not one of them
//!    becomes the command name, and every token after it is handed to that
//!    command untouched, so global flags written after the command name belong
//!    to the command.
//!
//! ```bash
//! search --debug google rust borrow checker
//! search --gui wikipedia Ferris
//! search -nb lynx duckduckgo "zero cost abstractions"   # dry run with lynx
//! search grep TODO src/
//! ```

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use search_core::Error;
use search_core::options::normalize;

/// Short flags that consume a value, used when splitting `-abc` clusters.
pub const VALUE_FLAGS: &[char] = &['b'];

/// Global options accepted before the command name.
#[derive(Parser, Clone, Debug, Default)]
#[command(name = "search")]
#[command(about = "search - one front end for local and web search tools", long_about = None)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Print help for the program, or for the command that follows
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Print the program version
    #[arg(long)]
    pub version: bool,

    /// Log parsing and process invocations to stderr
    #[arg(long)]
    pub debug: bool,

    /// Open web searches with the desktop browser instead of a terminal browser
    #[arg(long)]
    pub gui: bool,

    /// Terminal browser to use for web searches (default: w3m)
    #[arg(short = 'b', long, value_name = "BIN")]
    pub browser: Option<String>,

    /// Print the command that would run instead of running it
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Command name followed by its arguments
    #[command(subcommand)]
    pub command: Option<CommandLine>,
}

/// The command name and everything after it.
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum CommandLine {
    /// Any command; resolved against the registry at dispatch time.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Global flags recognized on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct GlobalFlags {
    /// `-h`/`--help`
    pub help: bool,
    /// `--version`
    pub version: bool,
    /// `--debug`
    pub debug: bool,
    /// `--gui`
    pub gui: bool,
    /// `-n`/`--dry-run`
    pub dry_run: bool,
}

/// Result of parsing the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Command name, if one was given.
    pub command: Option<String>,
    /// Global flags seen before the command name.
    pub flags: GlobalFlags,
    /// Terminal browser override from `--browser`.
    pub browser: Option<String>,
    /// Tokens after the command name, in order, exactly as given.
    pub parameters: Vec<OsString>,
}

impl TryFrom<Cli> for ParsedInvocation {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Error> {
        let (command, parameters) = match cli.command {
            Some(CommandLine::External(mut words)) if !words.is_empty() => {
                let name = words.remove(0).into_string().map_err(|name| {
                    Error::UnknownCommand(name.to_string_lossy().into_owned())
                })?;
                (Some(name), words)
            },
            _ => (None, Vec::new()),
        };

        Ok(Self {
            command,
            flags: GlobalFlags {
                help: cli.help,
                version: cli.version,
                debug: cli.debug,
                gui: cli.gui,
                dry_run: cli.dry_run,
            },
            browser: cli.browser,
            parameters,
        })
    }
}

/// Parse a full argument vector (program name first).
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] for unrecognized global options or a
/// `--browser` without a value.
///
/// Arguments need not be valid UTF-8; command parameters keep their exact bytes.
pub fn parse_args<I, S>(args: I) -> Result<ParsedInvocation, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("search"));
    let tokens = normalize(args, VALUE_FLAGS);

    let cli = Cli::try_parse_from(std::iter::once(program).chain(tokens))
        .map_err(|err| Error::InvalidOption(clap_message(&err)))?;
    ParsedInvocation::try_from(cli)
}

/// First line of a clap error, without clap's `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
