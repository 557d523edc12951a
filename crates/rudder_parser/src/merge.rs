//! Scope reconciliation.
//!
//! Combines the global binding with a matched command's binding into one
//! result. The command scope owns the two identifier tokens and every
//! token it bound; the merge makes sure no positional token is claimed by
//! both scopes and that the command wins every collision.

use std::collections::BTreeSet;

use crate::binder::{Binding, BoundParameter};
use crate::normalize::names_match;
use crate::token::UnboundToken;

/// Merges the global binding with a command-scope binding.
///
/// `claimed` is the set of original token indices owned by the command
/// scope: the command and operation identifier tokens plus every index the
/// command bound. Index coincidence is always checked on original input
/// indices; the command scope binds over the post-identifier sub-range but
/// its tokens keep the indices they had in the full input.
///
/// Rules, in order:
/// - A global binding that was inferred positionally and sits on a claimed
///   index is discarded; the token belongs to the command scope.
/// - A global binding on an index the command also bound is discarded (the
///   command-scope binding wins the token).
/// - On a canonical-name collision the command-scope binding wins.
/// - Unbound tokens from both scopes union in ascending index order, minus
///   indices bound in either scope or claimed by the command.
///
/// The merged descriptor set is the union of both scopes, so a required
/// re-check on the result covers global and command requirements alike.
#[must_use]
pub fn merge(global: &Binding, command: &Binding, claimed: &BTreeSet<usize>) -> Binding {
    let command_indices: BTreeSet<usize> = command.bound().iter().map(|b| b.index).collect();

    let mut bound: Vec<BoundParameter> = global
        .bound()
        .iter()
        .filter(|b| !(b.inferred_positional && claimed.contains(&b.index)))
        .filter(|b| !command_indices.contains(&b.index))
        .filter(|b| {
            !command
                .bound()
                .iter()
                .any(|c| names_match(&c.descriptor.name, &b.descriptor.name))
        })
        .cloned()
        .collect();
    bound.extend(command.bound().iter().cloned());

    let bound_indices: BTreeSet<usize> = bound
        .iter()
        .flat_map(|b| [Some(b.index), b.value_index])
        .flatten()
        .collect();

    let mut seen: BTreeSet<usize> = BTreeSet::new();
    let unbound: Vec<UnboundToken> = global
        .unbound()
        .iter()
        .chain(command.unbound())
        .filter(|token| !bound_indices.contains(&token.index) && !claimed.contains(&token.index))
        .filter(|token| seen.insert(token.index))
        .cloned()
        .collect();

    let mut descriptors = global.descriptors().to_vec();
    descriptors.extend(command.descriptors().iter().cloned());

    Binding::new(bound, unbound, descriptors)
}
