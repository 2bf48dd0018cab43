//! Logging initialization and color control.

use anyhow::Result;
use colored::control as color_control;
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber and decide whether to emit colors.
///
/// Logs go to stderr at WARN, or DEBUG with `--debug`. Colors are disabled
/// when `NO_COLOR` is set or stdout is not a terminal.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if env_no_color || !std::io::stdout().is_terminal() {
        color_control::set_override(false);
    }
    Ok(())
}
