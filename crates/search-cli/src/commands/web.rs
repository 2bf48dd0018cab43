//! Web search commands.

use std::ffi::OsString;

use search_core::browser::open_invocation;
use search_core::query::search_url;
use search_core::{Error, Result};
use tracing::debug;

use crate::registry::{Command, Context};
use crate::utils::validation::{positional, utf8_words};

/// Open `base_url` + the `+`-joined query terms in a browser.
pub fn open_search(
    ctx: &Context<'_>,
    command: &Command,
    base_url: &str,
    params: &[OsString],
) -> Result<u8> {
    let terms = utf8_words(command, &positional(params))?;
    let url = search_url(base_url, &terms).ok_or_else(|| Error::MissingQuery {
        command: command.name.to_string(),
    })?;
    debug!("{} url: {url}", command.name);

    let invocation = open_invocation(&url, &ctx.browser, ctx.platform, ctx.runner)?;
    ctx.runner.run(&invocation)
}
