//! Choosing how a search URL gets opened.
//!
//! A terminal browser wins when it is installed and the GUI was not requested;
//! otherwise the platform's URL opener takes over.

use tracing::debug;

use crate::platform::Platform;
use crate::runner::{Invocation, ProcessRunner};
use crate::{Error, Result};

/// Resolved browser preferences (config, environment and flags merged).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSettings {
    /// Skip the terminal browser and go straight to the platform opener.
    pub gui: bool,
    /// Terminal browser binary.
    pub terminal: String,
    /// Replacement for the platform opener.
    pub opener: Option<String>,
}

/// Build the invocation that opens `url`.
pub fn open_invocation(
    url: &str,
    settings: &BrowserSettings,
    platform: Platform,
    runner: &dyn ProcessRunner,
) -> Result<Invocation> {
    if !settings.gui && runner.is_installed(&settings.terminal) {
        debug!("opening with terminal browser {}", settings.terminal);
        return Ok(Invocation::new(settings.terminal.as_str()).arg(url));
    }

    let opener = settings
        .opener
        .as_deref()
        .or_else(|| platform.url_opener())
        .ok_or_else(|| Error::UnsupportedPlatform {
            feature: "opening a URL".to_string(),
            platform: platform.to_string(),
        })?;
    debug!("opening with {opener}");
    Ok(Invocation::new(opener).arg(url))
}
