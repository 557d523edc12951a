//! Integration tests for scope merging
//!
//! Global and command-scope bindings over the same input reconcile into
//! one result where the command wins every collision and no token is
//! claimed twice.

use std::collections::BTreeSet;
use std::sync::Arc;

use rudder_parser::{bind, lex, merge, Binding, ParameterDescriptor};

fn set(specs: &[(&str, bool)]) -> Vec<Arc<ParameterDescriptor>> {
    specs
        .iter()
        .map(|(name, required)| {
            let mut d = ParameterDescriptor::new(*name);
            if *required {
                d = d.required();
            }
            Arc::new(d)
        })
        .collect()
}

fn claimed_by(command: &Binding, identifiers: [usize; 2]) -> BTreeSet<usize> {
    let mut claimed: BTreeSet<usize> = identifiers.into_iter().collect();
    claimed.extend(command.bound().iter().map(|b| b.index));
    claimed
}

#[test]
fn command_scope_owns_ordinal_tokens() {
    // With only ordinals on the line, an unset required global must come
    // back missing instead of swallowing the command's tokens.
    let globals = set(&[("verbosity", true)]);
    let params = set(&[("a", false), ("b", false)]);
    let tokens = lex(["math", "add", "3", "4"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    assert!(merged.get("verbosity").is_none());
    assert_eq!(merged.get("a").unwrap().raw, "3");
    assert_eq!(merged.get("b").unwrap().raw, "4");

    let missing = merged.missing_required();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].name, "verbosity");
}

#[test]
fn explicitly_flagged_global_survives() {
    let globals = set(&[("verbosity", true)]);
    let params = set(&[("a", false)]);
    let tokens = lex(["math", "add", "--verbosity", "2", "7"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    assert_eq!(merged.get("verbosity").unwrap().raw, "2");
    assert_eq!(merged.get("a").unwrap().raw, "7");
    assert!(merged.missing_required().is_empty());
}

#[test]
fn name_collision_resolves_to_the_command_descriptor() {
    let globals = set(&[("name", false)]);
    let params = set(&[("name", false)]);
    let tokens = lex(["widget", "create", "--name", "acme"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    let matches: Vec<_> = merged
        .bound()
        .iter()
        .filter(|b| b.descriptor.name == "name")
        .collect();
    assert_eq!(matches.len(), 1);
    assert!(Arc::ptr_eq(&matches[0].descriptor, &params[0]));
}

#[test]
fn command_binding_satisfies_required_global_of_same_name() {
    let globals = set(&[("name", true)]);
    let params = set(&[("name", false)]);
    let tokens = lex(["widget", "create", "--name", "acme"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    assert!(merged.missing_required().is_empty());
}

#[test]
fn merged_unbound_is_deduplicated_and_ascending() {
    let globals = set(&[]);
    let params = set(&[("a", false)]);
    let tokens = lex(["math", "add", "1", "stray", "--odd"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    let indices: Vec<_> = merged.unbound().iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![3, 4]);
}

#[test]
fn no_token_serves_two_scopes() {
    let globals = set(&[("verbosity", false), ("name", false)]);
    let params = set(&[("name", false), ("count", false)]);
    let tokens = lex(["widget", "create", "--name", "acme", "--verbosity", "3", "9"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let merged = merge(&global, &command, &claimed_by(&command, [0, 1]));

    let mut indices: Vec<_> = merged.bound().iter().map(|b| b.index).collect();
    let total = indices.len();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), total);

    assert_eq!(merged.get("verbosity").unwrap().raw, "3");
    assert_eq!(merged.get("name").unwrap().raw, "acme");
    assert_eq!(merged.get("count").unwrap().raw, "9");
}

#[test]
fn merging_the_same_bindings_twice_gives_the_same_result() {
    let globals = set(&[("verbosity", false)]);
    let params = set(&[("a", false)]);
    let tokens = lex(["math", "add", "3", "--verbosity", "2"]);

    let global = bind(&globals, &tokens, true);
    let command = bind(&params, &tokens[2..], true);
    let claimed = claimed_by(&command, [0, 1]);

    let first = merge(&global, &command, &claimed);
    let second = merge(&global, &command, &claimed);

    let names = |b: &Binding| -> Vec<(String, String, usize)> {
        b.bound()
            .iter()
            .map(|p| (p.descriptor.name.clone(), p.raw.clone(), p.index))
            .collect()
    };
    assert_eq!(names(&first), names(&second));
    let unbound = |b: &Binding| -> Vec<usize> { b.unbound().iter().map(|t| t.index).collect() };
    assert_eq!(unbound(&first), unbound(&second));
}
