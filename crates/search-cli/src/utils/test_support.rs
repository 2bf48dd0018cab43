#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;

use search_core::{Config, Invocation, Platform, ProcessRunner, Result};

use crate::registry::Context;

/// Records invocations instead of spawning them.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    installed: Vec<String>,
    status: u8,
    ran: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    /// Pretend exactly `programs` are on `PATH`.
    pub(crate) fn with_installed(programs: &[&str]) -> Self {
        Self {
            installed: programs.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Report `status` for every invocation.
    pub(crate) fn exiting_with(mut self, status: u8) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn invocations(&self) -> Vec<Invocation> {
        self.ran.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<u8> {
        self.ran.borrow_mut().push(invocation.clone());
        Ok(self.status)
    }

    fn is_installed(&self, program: &str) -> bool {
        self.installed.iter().any(|installed| installed == program)
    }
}

/// Linux context with default browser settings.
pub(crate) fn context(runner: &RecordingRunner) -> Context<'_> {
    Context {
        browser: Config::default().browser_settings(false, None),
        platform: Platform::Linux,
        runner,
    }
}

pub(crate) fn params(args: &[&str]) -> Vec<OsString> {
    args.iter().map(|arg| OsString::from(*arg)).collect()
}
