//! search - one front end for local and web search tools
//!
//! This is the entry point for the `search` binary; everything else lives in
//! the `search_cli` library.

use std::process::ExitCode;

fn main() -> ExitCode {
    match search_cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            search_cli::error::report(&err);
            ExitCode::from(search_cli::error::exit_code_from_error(&err))
        },
    }
}
