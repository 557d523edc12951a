//! Command matching.
//!
//! Decides which registered command, if any, a token stream addresses.

use crate::descriptor::CommandDescriptor;
use crate::token::Token;

/// Matches the first two positional tokens against the registered commands.
///
/// Tests token\[0\] against each command name and token\[1\] against that
/// command's operation name, case-insensitively, in registration order.
/// The first descriptor that matches wins; duplicate registrations are not
/// an error, they are resolved silently by order. Returns `None` when
/// either identifier token is missing or is a flag.
///
/// Pure and side-effect-free: matching never consumes tokens.
#[must_use]
pub fn match_command<'a>(
    commands: &'a [CommandDescriptor],
    tokens: &[Token],
) -> Option<&'a CommandDescriptor> {
    let command = tokens.first().filter(|t| t.is_positional())?;
    let operation = tokens.get(1).filter(|t| t.is_positional())?;

    commands
        .iter()
        .find(|descriptor| descriptor.matches(&command.raw, &operation.raw))
}
