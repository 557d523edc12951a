//! Argument lexing.
//!
//! Converts a raw argument vector into a stream of classified tokens.
//!
//! Lexing is total: every input element produces exactly one token, no
//! input fails, and original indices are preserved throughout.

use crate::token::{Token, TokenKind};

/// Flag markers, longest first so `--` wins over `-`.
const MARKERS: [&str; 3] = ["--", "-", "/"];

/// Lexes a raw argument vector into tokens.
///
/// - A leading `--`, `-`, or `/` marks a flag; the marker is stripped from
///   the flag name. `--name=value` carries its value inline.
/// - The element following a flag, if it is not itself a flag and no inline
///   value was given, is classified as that flag's value.
/// - Everything else is positional.
/// - A boolean-style flag with no following value is legal.
#[must_use]
pub fn lex<I, S>(args: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens: Vec<Token> = Vec::new();

    for (index, arg) in args.into_iter().enumerate() {
        let raw = arg.as_ref().to_string();

        if let Some(stripped) = strip_marker(&raw) {
            let (name, inline) = split_inline_value(stripped);
            tokens.push(Token::new(
                raw.clone(),
                index,
                TokenKind::Flag { name },
                inline,
            ));
            continue;
        }

        // A non-flag element directly after a flag without a value becomes
        // that flag's associated value.
        let claimed = match tokens.last_mut() {
            Some(prev) if prev.is_flag() && prev.value.is_none() && prev.index + 1 == index => {
                prev.value = Some(raw.clone());
                true
            }
            _ => false,
        };

        let kind = if claimed {
            TokenKind::Value
        } else {
            TokenKind::Positional
        };
        tokens.push(Token::new(raw, index, kind, None));
    }

    tokens
}

/// Strips a flag marker, returning the remainder if one was present.
///
/// A bare marker (`--`, `-`, `/`) is not a flag.
fn strip_marker(raw: &str) -> Option<&str> {
    MARKERS
        .iter()
        .find_map(|marker| raw.strip_prefix(marker))
        .filter(|rest| !rest.is_empty())
}

/// Splits `name=value` into the name and its inline value.
fn split_inline_value(stripped: &str) -> (String, Option<String>) {
    match stripped.split_once('=') {
        Some((name, value)) => (name.to_string(), Some(value.to_string())),
        None => (stripped.to_string(), None),
    }
}
