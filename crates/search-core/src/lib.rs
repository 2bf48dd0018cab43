//! # search-core
//!
//! Core functionality for `search`, a command-line dispatcher that sends a query
//! to a local search tool (`grep`, `rg`, `find`, ...) or to a web search engine.
//!
//! The crate holds everything that does not depend on the command table:
//!
//! - **Options**: argument normalization ahead of flag parsing
//! - **Query**: `+`-joining of query terms and search URL construction
//! - **Browser**: picking a terminal browser or the platform URL opener
//! - **Runner**: the seam through which external programs are spawned
//! - **Config**: layered browser configuration
//! - **Error Handling**: one error enum covering every fatal condition
//!
//! ## Quick Start
//!
//! ```rust
//! use search_core::query;
//! use search_core::runner::Invocation;
//!
//! let url = query::search_url("https://www.google.com/search?q=", &["rust", "lifetimes"])
//!     .expect("query is not empty");
//! assert_eq!(url, "https://www.google.com/search?q=rust+lifetimes");
//!
//! let open = Invocation::new("xdg-open").arg(url);
//! assert_eq!(open.args.len(), 1);
//! ```

/// Browser selection for web searches
pub mod browser;
/// Layered configuration
pub mod config;
/// Error types and result alias
pub mod error;
/// Argument normalization
pub mod options;
/// Host platform detection
pub mod platform;
/// Query joining and search URLs
pub mod query;
/// External process invocation
pub mod runner;

pub use browser::BrowserSettings;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use platform::Platform;
pub use runner::{DryRunner, Invocation, ProcessRunner, SystemRunner};
