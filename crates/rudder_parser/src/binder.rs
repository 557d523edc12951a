//! Generic parameter binding.
//!
//! One algorithm serves both scopes: the global descriptor set binds over
//! the full token stream, and a matched command's descriptor set binds over
//! the tokens after the two identifier tokens. Tokens keep their original
//! input indices either way, which is what lets the merge engine reconcile
//! the two scopes.

use std::collections::BTreeSet;
use std::sync::Arc;

use rudder_foundation::error::MissingParameter;

use crate::descriptor::ParameterDescriptor;
use crate::normalize::names_match;
use crate::token::{Token, UnboundToken};

/// Raw value bound for a flag that carries no value.
const FLAG_PRESENT: &str = "true";

/// A descriptor successfully bound to a token.
#[derive(Clone, Debug)]
pub struct BoundParameter {
    /// The descriptor this binding satisfies.
    pub descriptor: Arc<ParameterDescriptor>,
    /// The raw string value, before conversion.
    pub raw: String,
    /// Original input index of the token that produced the binding.
    pub index: usize,
    /// Original index of the separate value token consumed alongside a
    /// flag, when the value did not arrive inline.
    pub value_index: Option<usize>,
    /// True if bound by position rather than by an explicit flag.
    pub inferred_positional: bool,
}

/// The outcome of binding a descriptor set against a token sequence.
///
/// Holds the bound parameters, the tokens left over for diagnostics, and a
/// back-reference to the descriptor set that was bound against. Created
/// fresh per parse call and never mutated after being returned.
#[derive(Clone, Debug, Default)]
pub struct Binding {
    bound: Vec<BoundParameter>,
    unbound: Vec<UnboundToken>,
    descriptors: Vec<Arc<ParameterDescriptor>>,
}

impl Binding {
    /// Creates a binding from its parts.
    ///
    /// Unbound tokens are kept in ascending original-index order.
    #[must_use]
    pub fn new(
        bound: Vec<BoundParameter>,
        mut unbound: Vec<UnboundToken>,
        descriptors: Vec<Arc<ParameterDescriptor>>,
    ) -> Self {
        unbound.sort_by_key(|token| token.index);
        Self {
            bound,
            unbound,
            descriptors,
        }
    }

    /// The bound parameters.
    #[must_use]
    pub fn bound(&self) -> &[BoundParameter] {
        &self.bound
    }

    /// The tokens no binding consumed, in ascending original-index order.
    #[must_use]
    pub fn unbound(&self) -> &[UnboundToken] {
        &self.unbound
    }

    /// The descriptor set this binding was produced against.
    #[must_use]
    pub fn descriptors(&self) -> &[Arc<ParameterDescriptor>] {
        &self.descriptors
    }

    /// Looks up a bound parameter by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BoundParameter> {
        self.bound
            .iter()
            .find(|b| names_match(&b.descriptor.name, name))
    }

    /// Every required descriptor with no bound parameter, in declaration
    /// order, deduplicated by name.
    ///
    /// A descriptor counts as satisfied when any bound parameter carries
    /// its canonical name; after a merge that lets a command-scope binding
    /// satisfy a same-named global requirement.
    #[must_use]
    pub fn missing_required(&self) -> Vec<MissingParameter> {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut missing = Vec::new();
        for descriptor in &self.descriptors {
            if !descriptor.required {
                continue;
            }
            let satisfied = self
                .bound
                .iter()
                .any(|b| names_match(&b.descriptor.name, &descriptor.name));
            if !satisfied && seen.insert(descriptor.name.to_ascii_lowercase()) {
                missing.push(MissingParameter::new(
                    descriptor.name.clone(),
                    descriptor.help.clone(),
                ));
            }
        }
        missing
    }
}

/// Binds a descriptor set against a token subsequence.
///
/// 1. Each flag token is matched against the descriptors by exact or alias
///    name, case-insensitively. On a match the flag and its associated
///    value token are consumed; a descriptor never binds twice, and a flag
///    with no match stays unbound. A value-less flag binds `"true"`.
/// 2. With `infer_positional` set, remaining positional tokens bind
///    left-to-right to the next still-unbound descriptor in declaration
///    order, marked inferred.
/// 3. Everything not consumed becomes an unbound token.
///
/// Explicit flagged binding always outranks inference: a token consumed in
/// step 1 is never reconsidered in step 2.
#[must_use]
pub fn bind(
    descriptors: &[Arc<ParameterDescriptor>],
    tokens: &[Token],
    infer_positional: bool,
) -> Binding {
    let mut bound: Vec<BoundParameter> = Vec::new();
    let mut consumed: BTreeSet<usize> = BTreeSet::new();

    // Step 1: explicit flag matches.
    for (position, token) in tokens.iter().enumerate() {
        let Some(flag_name) = token.flag_name() else {
            continue;
        };
        let matched = descriptors.iter().find(|descriptor| {
            descriptor.matches(flag_name)
                && !bound
                    .iter()
                    .any(|b| Arc::ptr_eq(&b.descriptor, descriptor))
        });
        let Some(descriptor) = matched else {
            continue;
        };

        consumed.insert(token.index);
        // The associated value may live in the following value token; if
        // so, consume that token as well.
        let value_index = match (token.value.as_ref(), tokens.get(position + 1)) {
            (Some(_), Some(next)) if next.kind == crate::token::TokenKind::Value => {
                consumed.insert(next.index);
                Some(next.index)
            }
            _ => None,
        };

        let raw = token
            .value
            .clone()
            .unwrap_or_else(|| FLAG_PRESENT.to_string());
        bound.push(BoundParameter {
            descriptor: Arc::clone(descriptor),
            raw,
            index: token.index,
            value_index,
            inferred_positional: false,
        });
    }

    // Step 2: positional inference over what remains.
    if infer_positional {
        for token in tokens {
            if !token.is_positional() || consumed.contains(&token.index) {
                continue;
            }
            let next_unbound = descriptors.iter().find(|descriptor| {
                !bound
                    .iter()
                    .any(|b| Arc::ptr_eq(&b.descriptor, descriptor))
            });
            let Some(descriptor) = next_unbound else {
                break;
            };

            consumed.insert(token.index);
            bound.push(BoundParameter {
                descriptor: Arc::clone(descriptor),
                raw: token.raw.clone(),
                index: token.index,
                value_index: None,
                inferred_positional: true,
            });
        }
    }

    let unbound = tokens
        .iter()
        .filter(|token| !consumed.contains(&token.index))
        .map(UnboundToken::from)
        .collect();

    Binding::new(bound, unbound, descriptors.to_vec())
}
