//! Local search commands.
//!
//! Each handler validates `<query> [<path>]` and runs exactly one external
//! search tool with inherited stdio; its exit status becomes ours.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use search_core::{Error, Invocation, Result};

use crate::registry::{Command, Context};
use crate::utils::validation::{QueryArgs, query_args};

/// `ack -- <query> [<path>]`, falling back to `ack-grep` (Debian's name for it).
pub fn ack(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    let program = ["ack", "ack-grep"]
        .into_iter()
        .find(|program| ctx.runner.is_installed(program))
        .ok_or_else(|| Error::ToolNotInstalled {
            program: "ack".to_string(),
        })?;
    ctx.runner.run(&query_then_path(program, "--", &args))
}

/// `ag -- <query> [<path>]`
pub fn ag(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    ctx.runner.run(&query_then_path("ag", "--", &args))
}

/// `rg -e <query> [<path>]`
pub fn rg(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    ctx.runner.run(&query_then_path("rg", "-e", &args))
}

/// `grep -r -n --color=auto -e <query> <path>`; the path defaults to `.`.
pub fn grep(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    let invocation = Invocation::new("grep")
        .args(["-r", "-n", "--color=auto", "-e"])
        .arg(args.query)
        .arg(root(&args));
    ctx.runner.run(&invocation)
}

/// `find <path> -iname '*<query>*'`; matches file names, not contents.
///
/// The query sits inside the pattern, so a leading `-` cannot become a `find`
/// primary.
pub fn find(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    let mut pattern = OsString::from("*");
    pattern.push(args.query);
    pattern.push("*");
    let invocation = Invocation::new("find")
        .arg(root(&args))
        .arg("-iname")
        .arg(pattern);
    ctx.runner.run(&invocation)
}

/// `locate -i -- <query>`
pub fn locate(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, false)?;
    ctx.runner
        .run(&Invocation::new("locate").args(["-i", "--"]).arg(args.query))
}

/// `mdfind [-onlyin <path>] <query>`, macOS only.
///
/// mdfind has no end-of-options marker, so queries starting with `-` are refused.
pub fn mdfind(ctx: &Context<'_>, command: &Command, params: &[OsString]) -> Result<u8> {
    let args = query_args(command, params, true)?;
    if args.query.as_encoded_bytes().starts_with(b"-") {
        return Err(Error::InvalidArgument {
            command: command.name.to_string(),
            argument: args.query.to_string_lossy().into_owned(),
            reason: "mdfind cannot search for text starting with '-'",
        });
    }
    if !ctx.platform.has_spotlight() {
        return Err(Error::UnsupportedPlatform {
            feature: command.name.to_string(),
            platform: ctx.platform.to_string(),
        });
    }

    let mut invocation = Invocation::new("mdfind");
    if let Some(path) = args.path {
        invocation = invocation.arg("-onlyin").arg(path);
    }
    ctx.runner.run(&invocation.arg(args.query))
}

/// `<program> <query_flag> <query> [<path>]`
fn query_then_path(program: &str, query_flag: &str, args: &QueryArgs<'_>) -> Invocation {
    let invocation = Invocation::new(program).arg(query_flag).arg(args.query);
    match args.path {
        Some(path) => invocation.arg(path),
        None => invocation,
    }
}

fn root<'a>(args: &QueryArgs<'a>) -> &'a OsStr {
    args.path.map_or(OsStr::new("."), Path::as_os_str)
}
