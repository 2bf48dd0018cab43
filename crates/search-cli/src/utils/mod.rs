//! Shared helpers for the CLI: logging setup and parameter validation.

pub mod logging;
pub mod validation;

#[cfg(test)]
pub mod test_support;

pub use logging::initialize_logging;
