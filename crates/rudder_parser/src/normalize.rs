//! Name normalization helpers.
//!
//! Pure string helpers for the naming conventions the matcher and builder
//! honor: case-insensitive matching, the `Controller` suffix on command
//! owners, and the `set`/`get` accessor prefix on configuration parameters.
//! Deliberately decoupled from any introspection mechanism.

/// Case-insensitive (ASCII) name comparison.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Strips a trailing `controller` suffix, case-insensitively.
///
/// `MathController` and `mathcontroller` both normalize to `Math`; a name
/// that is nothing but the suffix is left alone.
#[must_use]
pub fn strip_command_suffix(name: &str) -> &str {
    const SUFFIX: &str = "controller";
    let Some(split) = name.len().checked_sub(SUFFIX.len()).filter(|&n| n > 0) else {
        return name;
    };
    if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(SUFFIX) {
        &name[..split]
    } else {
        name
    }
}

/// Strips a leading `set`/`set_`/`get`/`get_` accessor prefix,
/// case-insensitively.
///
/// `SetVerbosity` and `set_verbosity` both normalize to `Verbosity` /
/// `verbosity`; a name that is nothing but the prefix is left alone.
#[must_use]
pub fn strip_accessor_prefix(name: &str) -> &str {
    for prefix in ["set_", "get_", "set", "get"] {
        if name.len() > prefix.len()
            && name.is_char_boundary(prefix.len())
            && name[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return &name[prefix.len()..];
        }
    }
    name
}
