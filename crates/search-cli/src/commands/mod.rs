//! Command handlers for the search CLI
//!
//! - [`local`]: wrappers around local search tools (`grep`, `rg`, `find`, ...)
//! - [`web`]: search-engine URLs opened in a browser
//! - [`meta`]: `commands`, `help` and `version`

pub mod local;
pub mod meta;
pub mod web;
