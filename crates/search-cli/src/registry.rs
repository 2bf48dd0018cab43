//! The command table and dispatcher.
//!
//! Every command `search` understands is one row in [`COMMANDS`]. Adding a
//! command means adding a row; there is no other registration step.

use std::ffi::OsString;

use search_core::{BrowserSettings, Error, Platform, ProcessRunner, Result};
use tracing::debug;

use crate::commands::{local, meta, web};

/// Handler signature for commands implemented as functions.
pub type HandlerFn = fn(&Context<'_>, &Command, &[OsString]) -> Result<u8>;

/// What running a command does.
#[derive(Clone, Copy, Debug)]
pub enum Handler {
    /// Open `base_url` followed by the `+`-joined query terms.
    Web(&'static str),
    /// Call a handler function.
    Run(HandlerFn),
}

/// One registered command.
#[derive(Clone, Copy, Debug)]
pub struct Command {
    /// Name typed on the command line; unique within the table.
    pub name: &'static str,
    /// One-line summary shown in listings.
    pub description: &'static str,
    /// Argument synopsis shown in command help.
    pub usage: &'static str,
    /// Behavior.
    pub handler: Handler,
}

impl Command {
    /// Run this command with `params`.
    pub fn run(&self, ctx: &Context<'_>, params: &[OsString]) -> Result<u8> {
        match self.handler {
            Handler::Web(base_url) => web::open_search(ctx, self, base_url, params),
            Handler::Run(handler) => handler(ctx, self, params),
        }
    }
}

/// Everything a handler needs besides its parameters.
pub struct Context<'a> {
    /// Browser preferences for web searches.
    pub browser: BrowserSettings,
    /// Host platform.
    pub platform: Platform,
    /// Where invocations go.
    pub runner: &'a dyn ProcessRunner,
}

/// All commands, sorted by name.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "ack",
        description: "Search file contents with ack",
        usage: "ack <query> [<path>]",
        handler: Handler::Run(local::ack),
    },
    Command {
        name: "ag",
        description: "Search file contents with The Silver Searcher",
        usage: "ag <query> [<path>]",
        handler: Handler::Run(local::ag),
    },
    Command {
        name: "amazon",
        description: "Search Amazon",
        usage: "amazon <query>...",
        handler: Handler::Web("https://www.amazon.com/s?k="),
    },
    Command {
        name: "bing",
        description: "Search Bing",
        usage: "bing <query>...",
        handler: Handler::Web("https://www.bing.com/search?q="),
    },
    Command {
        name: "commands",
        description: "List available commands",
        usage: "commands [--raw | --json]",
        handler: Handler::Run(meta::commands),
    },
    Command {
        name: "duckduckgo",
        description: "Search DuckDuckGo",
        usage: "duckduckgo <query>...",
        handler: Handler::Web("https://duckduckgo.com/?q="),
    },
    Command {
        name: "find",
        description: "Search file names with find",
        usage: "find <query> [<path>]",
        handler: Handler::Run(local::find),
    },
    Command {
        name: "github",
        description: "Search GitHub",
        usage: "github <query>...",
        handler: Handler::Web("https://github.com/search?q="),
    },
    Command {
        name: "google",
        description: "Search Google",
        usage: "google <query>...",
        handler: Handler::Web("https://www.google.com/search?q="),
    },
    Command {
        name: "grep",
        description: "Search file contents recursively with grep",
        usage: "grep <query> [<path>]",
        handler: Handler::Run(local::grep),
    },
    Command {
        name: "hackernews",
        description: "Search Hacker News",
        usage: "hackernews <query>...",
        handler: Handler::Web("https://hn.algolia.com/?q="),
    },
    Command {
        name: "help",
        description: "Show help for the program or a command",
        usage: "help [<command>]",
        handler: Handler::Run(meta::help),
    },
    Command {
        name: "locate",
        description: "Search the file name database with locate",
        usage: "locate <query>",
        handler: Handler::Run(local::locate),
    },
    Command {
        name: "mdfind",
        description: "Search with Spotlight (macOS only)",
        usage: "mdfind <query> [<path>]",
        handler: Handler::Run(local::mdfind),
    },
    Command {
        name: "reddit",
        description: "Search Reddit",
        usage: "reddit <query>...",
        handler: Handler::Web("https://www.reddit.com/search?q="),
    },
    Command {
        name: "rg",
        description: "Search file contents with ripgrep",
        usage: "rg <query> [<path>]",
        handler: Handler::Run(local::rg),
    },
    Command {
        name: "stackoverflow",
        description: "Search Stack Overflow",
        usage: "stackoverflow <query>...",
        handler: Handler::Web("https://stackoverflow.com/search?q="),
    },
    Command {
        name: "version",
        description: "Print the program version",
        usage: "version",
        handler: Handler::Run(meta::version),
    },
    Command {
        name: "wikipedia",
        description: "Search Wikipedia",
        usage: "wikipedia <query>...",
        handler: Handler::Web("https://en.wikipedia.org/w/index.php?search="),
    },
    Command {
        name: "youtube",
        description: "Search YouTube",
        usage: "youtube <query>...",
        handler: Handler::Web("https://www.youtube.com/results?search_query="),
    },
];

/// Look up a command by exact name.
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Names of every registered command, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|command| command.name)
}

/// Look up `name` and run it with `params`.
///
/// `-h`/`--help` as the first parameter prints the command's help instead.
pub fn dispatch(ctx: &Context<'_>, name: &str, params: &[OsString]) -> Result<u8> {
    let command = find(name).ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
    debug!("dispatching {} with {params:?}", command.name);

    if matches!(params.first().and_then(|p| p.to_str()), Some("-h" | "--help")) {
        print!("{}", meta::render_command_help(command));
        return Ok(0);
    }

    command.run(ctx, params)
}
