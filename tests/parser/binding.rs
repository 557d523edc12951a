//! Integration tests for the generic binder
//!
//! One binding algorithm serves both the global scope and a matched
//! command's scope; these tests run it over realistic argument shapes.

use std::sync::Arc;

use rudder_parser::{bind, lex, ParameterDescriptor};

fn set(names: &[&str]) -> Vec<Arc<ParameterDescriptor>> {
    names
        .iter()
        .map(|name| Arc::new(ParameterDescriptor::new(*name)))
        .collect()
}

// =============================================================================
// Flag Binding
// =============================================================================

#[test]
fn separate_and_inline_values_bind_alike() {
    let descriptors = set(&["name"]);

    let separate = bind(&descriptors, &lex(["--name", "acme"]), false);
    let inline = bind(&descriptors, &lex(["--name=acme"]), false);

    assert_eq!(separate.get("name").unwrap().raw, "acme");
    assert_eq!(inline.get("name").unwrap().raw, "acme");
}

#[test]
fn all_three_markers_reach_the_same_descriptor() {
    let descriptors = set(&["name"]);
    for args in [["--name", "acme"], ["-name", "acme"], ["/name", "acme"]] {
        let binding = bind(&descriptors, &lex(args), false);
        assert_eq!(binding.get("name").unwrap().raw, "acme", "for {args:?}");
    }
}

#[test]
fn flag_names_match_case_insensitively() {
    let descriptors = set(&["Name"]);
    let binding = bind(&descriptors, &lex(["--NAME", "acme"]), false);
    assert_eq!(binding.get("name").unwrap().raw, "acme");
}

#[test]
fn aliases_bind_like_canonical_names() {
    let descriptors = vec![Arc::new(
        ParameterDescriptor::new("verbosity").with_alias("v"),
    )];
    let binding = bind(&descriptors, &lex(["-v", "3"]), false);
    assert_eq!(binding.get("verbosity").unwrap().raw, "3");
}

#[test]
fn value_less_flag_reads_as_true() {
    let descriptors = set(&["force"]);
    let binding = bind(&descriptors, &lex(["--force"]), false);
    assert_eq!(binding.get("force").unwrap().raw, "true");
}

// =============================================================================
// Positional Inference
// =============================================================================

#[test]
fn positionals_fill_declaration_order_not_flag_order() {
    let descriptors = set(&["a", "b", "c"]);
    let binding = bind(&descriptors, &lex(["--b", "2", "1", "3"]), true);

    assert_eq!(binding.get("a").unwrap().raw, "1");
    assert_eq!(binding.get("b").unwrap().raw, "2");
    assert_eq!(binding.get("c").unwrap().raw, "3");
    assert!(!binding.get("b").unwrap().inferred_positional);
    assert!(binding.get("a").unwrap().inferred_positional);
}

#[test]
fn inference_can_be_disabled() {
    let descriptors = set(&["a"]);
    let binding = bind(&descriptors, &lex(["1"]), false);

    assert!(binding.bound().is_empty());
    assert_eq!(binding.unbound().len(), 1);
}

#[test]
fn surplus_positionals_surface_as_unbound() {
    let descriptors = set(&["a"]);
    let binding = bind(&descriptors, &lex(["1", "2", "3"]), true);

    let leftovers: Vec<_> = binding.unbound().iter().map(|t| t.raw.as_str()).collect();
    assert_eq!(leftovers, vec!["2", "3"]);
}

// =============================================================================
// Required Reporting
// =============================================================================

#[test]
fn missing_required_carries_help_text() {
    let descriptors = vec![
        Arc::new(
            ParameterDescriptor::new("name")
                .required()
                .with_help("widget name"),
        ),
        Arc::new(ParameterDescriptor::new("count").required()),
    ];
    let binding = bind(&descriptors, &lex::<_, &str>([]), true);

    let missing = binding.missing_required();
    assert_eq!(missing.len(), 2);
    assert_eq!(missing[0].name, "name");
    assert_eq!(missing[0].help.as_deref(), Some("widget name"));
    assert_eq!(missing[1].help, None);
}

#[test]
fn bound_required_descriptor_is_not_missing() {
    let descriptors = vec![Arc::new(ParameterDescriptor::new("name").required())];
    let binding = bind(&descriptors, &lex(["--name", "acme"]), false);
    assert!(binding.missing_required().is_empty());
}

// =============================================================================
// Index Discipline
// =============================================================================

#[test]
fn subsequence_binding_keeps_original_indices() {
    let descriptors = set(&["a", "b"]);
    let tokens = lex(["widget", "create", "--a", "1", "2"]);
    let binding = bind(&descriptors, &tokens[2..], true);

    assert_eq!(binding.get("a").unwrap().index, 2);
    assert_eq!(binding.get("a").unwrap().value_index, Some(3));
    assert_eq!(binding.get("b").unwrap().index, 4);
}
