//! Argument normalization.
//!
//! Turns the raw argument list into a uniform token stream before any flag is
//! recognized:
//!
//! - `-abc` becomes `-a -b -c`
//! - `-bw3m` becomes `-b w3m` when `b` takes a value
//! - `--flag=value` becomes `--flag value`
//! - `--` ends option processing; everything after it is passed through as-is
//!
//! ```rust
//! use search_core::options::normalize;
//!
//! let tokens = normalize(["-nb", "lynx", "--browser=w3m", "google"], &['b']);
//! assert_eq!(tokens, ["-n", "-b", "lynx", "--browser", "w3m", "google"]);
//! ```

use std::ffi::OsString;

/// Explicit end-of-options marker.
pub const END_OF_OPTIONS: &str = "--";

/// Normalize `args` in a single left-to-right pass.
///
/// `value_flags` lists the short flags that take a value; when one of them
/// appears inside a combined short option with characters after it, the rest of
/// the token is emitted as its value. Tokens that are not valid UTF-8 cannot be
/// options and pass through with their bytes intact.
pub fn normalize<I, S>(args: I, value_flags: &[char]) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut tokens = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            tokens.push(arg);
            continue;
        };

        if text == END_OF_OPTIONS {
            tokens.push(arg);
            tokens.extend(args.by_ref());
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    tokens.push(format!("--{name}").into());
                    tokens.push(value.into());
                },
                _ => tokens.push(arg),
            }
            continue;
        }

        match text.strip_prefix('-') {
            Some(shorts) if shorts.chars().count() > 1 => {
                split_short_cluster(shorts, value_flags, &mut tokens);
            },
            _ => tokens.push(arg),
        }
    }

    tokens
}

fn split_short_cluster(cluster: &str, value_flags: &[char], tokens: &mut Vec<OsString>) {
    for (idx, flag) in cluster.char_indices() {
        tokens.push(format!("-{flag}").into());
        let rest = &cluster[idx + flag.len_utf8()..];
        if value_flags.contains(&flag) && !rest.is_empty() {
            tokens.push(rest.into());
            return;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn norm(args: &[&str]) -> Vec<OsString> {
        normalize(args.iter().copied(), &['b'])
    }

    #[test]
    fn splits_combined_short_flags() {
        assert_eq!(norm(&["-abc"]), ["-a", "-b", "-c"]);
    }

    #[test]
    fn trailing_value_attaches_to_value_flag() {
        assert_eq!(norm(&["-bw3m"]), ["-b", "w3m"]);
        assert_eq!(norm(&["-nbw3m", "google"]), ["-n", "-b", "w3m", "google"]);
    }

    #[test]
    fn value_flag_at_end_of_cluster_keeps_next_token_separate() {
        assert_eq!(norm(&["-nb", "lynx"]), ["-n", "-b", "lynx"]);
    }

    #[test]
    fn splits_long_flag_on_first_equals() {
        assert_eq!(norm(&["--browser=w3m"]), ["--browser", "w3m"]);
        assert_eq!(norm(&["--opt=a=b"]), ["--opt", "a=b"]);
        assert_eq!(norm(&["--opt="]), ["--opt", ""]);
    }

    #[test]
    fn end_of_options_stops_normalization() {
        assert_eq!(
            norm(&["--debug", "--", "-abc", "--x=y"]),
            ["--debug", "--", "-abc", "--x=y"]
        );
    }

    #[test]
    fn passes_plain_tokens_through() {
        assert_eq!(
            norm(&["google", "-", "-h", "--gui", "foo bar"]),
            ["google", "-", "-h", "--gui", "foo bar"]
        );
    }

    #[test]
    fn leaves_malformed_long_equals_alone() {
        assert_eq!(norm(&["--=value"]), ["--=value"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_pass_through_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = OsStr::from_bytes(b"/tmp/caf\xE9");
        let tokens = normalize([OsStr::new("grep"), OsStr::new("x"), dir], &['b']);
        assert_eq!(tokens, [OsStr::new("grep"), OsStr::new("x"), dir]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(norm(&[]).is_empty());
    }
}
