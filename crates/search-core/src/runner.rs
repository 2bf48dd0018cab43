//! External process invocation.
//!
//! Every command ends in at most one subprocess. Handlers describe it as an
//! [`Invocation`] and hand it to a [`ProcessRunner`]; the runner decides
//! whether to spawn it ([`SystemRunner`]) or only print it ([`DryRunner`]).

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::{Error, Result};

/// One external program plus its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path, resolved through `PATH` when spawned.
    pub program: String,
    /// Arguments passed verbatim, without a shell. Paths keep their exact bytes.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Start an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Shell-quoted form, so the printed line can be pasted into a shell.
///
/// Arguments that are not valid UTF-8 are shown lossily; the invocation itself
/// still carries the original bytes.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = shlex::try_quote(&self.program).map_err(|_| fmt::Error)?;
        f.write_str(&quoted)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            let quoted = shlex::try_quote(&arg).map_err(|_| fmt::Error)?;
            write!(f, " {quoted}")?;
        }
        Ok(())
    }
}

/// Seam between handlers and the operating system.
pub trait ProcessRunner {
    /// Run `invocation` to completion and return its exit status.
    fn run(&self, invocation: &Invocation) -> Result<u8>;

    /// Whether `program` can be found on `PATH`.
    fn is_installed(&self, program: &str) -> bool {
        find_executable(program).is_some()
    }
}

/// Spawns invocations with inherited stdio and waits for them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<u8> {
        debug!("running: {invocation}");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|err| spawn_error(&invocation.program, err))?;
        debug!("{} exited with {status}", invocation.program);
        Ok(exit_code(status))
    }
}

/// Prints invocations to stdout instead of running them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunner;

impl ProcessRunner for DryRunner {
    fn run(&self, invocation: &Invocation) -> Result<u8> {
        println!("{invocation}");
        Ok(0)
    }
}

fn spawn_error(program: &str, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::ToolNotInstalled {
            program: program.to_string(),
        }
    } else {
        Error::Io(err)
    }
}

/// Map a child's exit status to our own; signals become 1.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .map_or(1, |code| u8::try_from(code).unwrap_or(1))
}

/// Locate `program` on `PATH`, returning the first executable match.
pub fn find_executable(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path = env::var_os("PATH")?;
    env::split_paths(&path).find_map(|dir| {
        executable_names(program)
            .map(|name| dir.join(name))
            .find(|full| is_executable(full))
    })
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    [String::new(), ".exe".to_string(), ".bat".to_string(), ".cmd".to_string()]
        .into_iter()
        .map(move |ext| format!("{program}{ext}"))
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = &OsStr> {
    std::iter::once(OsStr::new(program))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
