//! search CLI - one front end for local and web search tools
//!
//! `search <command> <args>...` looks `<command>` up in a static table and runs
//! its handler: a local search tool (`grep`, `rg`, `find`, ...) or a web search
//! opened in a terminal or desktop browser.
use anyhow::{Context as _, Result};
use search_core::{Config, DryRunner, Platform, ProcessRunner, SystemRunner};
use tracing::debug;

pub mod cli;
pub mod commands;
pub mod error;
pub mod registry;
mod utils;

use crate::cli::{ParsedInvocation, parse_args};
use crate::commands::meta;
use crate::registry::Context;
use crate::utils::initialize_logging;

/// Execute the search CLI with the process arguments and environment.
///
/// Returns the exit status to terminate with.
///
/// # Errors
///
/// Returns an error if argument parsing, configuration loading or the command fails.
pub fn run() -> Result<u8> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let invocation = parse_args(std::env::args_os())?;
    initialize_logging(invocation.flags.debug)?;
    debug!(?invocation, "parsed command line");

    execute(&invocation, Platform::current())
}

/// Act on a parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command fails.
pub fn execute(invocation: &ParsedInvocation, platform: Platform) -> Result<u8> {
    let flags = invocation.flags;

    if flags.version {
        println!("{}", meta::version_line());
        return Ok(0);
    }

    let Some(name) = invocation.command.as_deref() else {
        print!("{}", meta::render_program_help());
        return Ok(0);
    };

    if flags.help {
        let command = registry::find(name)
            .ok_or_else(|| search_core::Error::UnknownCommand(name.to_string()))?;
        print!("{}", meta::render_command_help(command));
        return Ok(0);
    }

    let config = Config::load().context("Failed to load configuration")?;
    debug!(?config, "loaded configuration");

    let runner: &dyn ProcessRunner = if flags.dry_run {
        &DryRunner
    } else {
        &SystemRunner
    };
    let ctx = Context {
        browser: config.browser_settings(flags.gui, invocation.browser.as_deref()),
        platform,
        runner,
    };

    Ok(registry::dispatch(&ctx, name, &invocation.parameters)?)
}
