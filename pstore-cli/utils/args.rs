//! Single-dash long flag support.
//!
//! `pstore` accepts Go-style flags (`-name foo`, `-name=foo`) next to the
//! usual `--name foo`. Before `clap` sees the command line, every single-dash
//! token that names a known long flag is rewritten to its double-dash form.
//! Values of value-taking flags, and everything after `--`, are left alone.

use std::ffi::OsString;

/// A long flag known to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongFlag {
    /// Flag name without dashes
    pub name: String,
    /// Whether the flag consumes the following token as its value. Flags
    /// whose value must be attached with `=` do not.
    pub takes_value: bool,
}

/// Collect the long flags of a built `clap` command.
pub fn long_flags(command: &clap::Command) -> Vec<LongFlag> {
    command
        .get_arguments()
        .filter_map(|arg| {
            arg.get_long().map(|name| LongFlag {
                name: name.to_string(),
                takes_value: arg.get_action().takes_values() && !arg.is_require_equals_set(),
            })
        })
        .collect()
}

/// Split a flag token into its dash count, name and inline-value marker.
fn parse_flag(token: &str) -> Option<(usize, &str, bool)> {
    let (dashes, body) = if let Some(body) = token.strip_prefix("--") {
        (2, body)
    } else if let Some(body) = token.strip_prefix('-') {
        (1, body)
    } else {
        return None;
    };

    if body.is_empty() || (dashes == 1 && body.chars().count() < 2) {
        return None;
    }

    match body.split_once('=') {
        Some((name, _)) => Some((dashes, name, true)),
        None => Some((dashes, body, false)),
    }
}

/// Rewrite single-dash long flags in `args` to double-dash form.
///
/// The first element is treated as the program name and passed through.
pub fn normalize_long_flags<I>(args: I, flags: &[LongFlag]) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    let mut expect_value = false;
    let mut verbatim = false;

    for arg in iter {
        if verbatim || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(token) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if token == "--" {
            verbatim = true;
            out.push(arg);
            continue;
        }

        let Some((dashes, name, inline_value)) = parse_flag(token) else {
            out.push(arg);
            continue;
        };

        let Some(flag) = flags.iter().find(|f| f.name == name) else {
            out.push(arg);
            continue;
        };

        expect_value = flag.takes_value && !inline_value;
        if dashes == 1 {
            out.push(OsString::from(format!("-{token}")));
        } else {
            out.push(arg);
        }
    }

    out
}
