//! End-to-end pipeline tests
//!
//! Raw argument vectors in, dispatch-ready results or typed failures out.

use rudder::foundation::{ErrorKind, TypeTag, Value};
use rudder::parser::ParameterDescriptor;
use rudder::runtime::{Builder, Command, Configuration, Operation, Parsed};

fn app() -> Configuration {
    Builder::new()
        .parameter(
            ParameterDescriptor::new("verbosity")
                .required()
                .with_help("output level"),
        )
        .command(
            Command::new("widget")
                .operation(
                    Operation::new("create", |_, args| Ok(args[0].clone()))
                        .parameter(ParameterDescriptor::new("name").required()),
                )
                .operation(Operation::new("list", |_, _| Ok(Value::Nil))),
        )
        .command(
            Command::new("math").operation(
                Operation::new("add", |_, args| {
                    let a = args[0].as_int().ok_or("a must be an int")?;
                    let b = args[1].as_int().ok_or("b must be an int")?;
                    Ok(Value::Int(a + b))
                })
                .parameter(ParameterDescriptor::new("a").typed(TypeTag::Int))
                .parameter(ParameterDescriptor::new("b").typed(TypeTag::Int)),
            ),
        )
        .freeze()
}

// =============================================================================
// Recognition
// =============================================================================

#[test]
fn flagged_command_dispatches_with_zero_unbound() {
    let parsed = app()
        .parse(["widget", "create", "--name", "acme", "--verbosity", "2"])
        .unwrap();

    let Parsed::Dispatch(dispatch) = parsed else {
        panic!("expected a dispatch");
    };
    assert_eq!(dispatch.command().command, "widget");
    assert_eq!(dispatch.command().operation, "create");
    assert_eq!(dispatch.binding().get("name").unwrap().raw, "acme");
    assert!(dispatch.binding().unbound().is_empty());
    assert_eq!(dispatch.invoke().unwrap(), Value::Text("acme".into()));
}

#[test]
fn unset_required_global_fails_listing_exactly_it() {
    let err = app()
        .parse(["widget", "create", "--name", "acme"])
        .unwrap_err();

    let ErrorKind::MissingRequired { missing } = &err.kind else {
        panic!("expected a missing-required failure");
    };
    let names: Vec<_> = missing.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["verbosity"]);
    assert_eq!(missing[0].help.as_deref(), Some("output level"));
}

#[test]
fn ordinal_command_converts_and_invokes() {
    let parsed = app()
        .parse(["math", "add", "3", "4", "--verbosity", "0"])
        .unwrap();

    let Parsed::Dispatch(dispatch) = parsed else {
        panic!("expected a dispatch");
    };
    assert_eq!(dispatch.arguments(), &[Value::Int(3), Value::Int(4)]);
    assert!(dispatch.binding().unbound().is_empty());
    assert_eq!(dispatch.invoke().unwrap(), Value::Int(7));
}

#[test]
fn flagged_command_without_globals_binds_cleanly() {
    let config = Builder::new()
        .command(
            Command::new("widget").operation(
                Operation::new("create", |_, args| Ok(args[0].clone()))
                    .parameter(ParameterDescriptor::new("name").required()),
            ),
        )
        .freeze();

    let parsed = config.parse(["widget", "create", "--name", "acme"]).unwrap();
    let Parsed::Dispatch(dispatch) = parsed else {
        panic!("expected a dispatch");
    };
    assert_eq!(dispatch.binding().get("name").unwrap().raw, "acme");
    assert!(dispatch.binding().unbound().is_empty());
}

#[test]
fn unrecognized_pair_falls_back_to_global_only() {
    let config = Builder::new().freeze();
    let parsed = config.parse(["unknown", "thing"]).unwrap();

    let Parsed::GlobalOnly(binding) = parsed else {
        panic!("expected a global-only outcome");
    };
    let leftovers: Vec<_> = binding.unbound().iter().map(|t| t.raw.as_str()).collect();
    assert_eq!(leftovers, vec!["unknown", "thing"]);
}

// =============================================================================
// Required and Conversion Failures
// =============================================================================

#[test]
fn missing_required_spans_both_scopes() {
    let err = app().parse(["widget", "create"]).unwrap_err();

    let ErrorKind::MissingRequired { missing } = &err.kind else {
        panic!("expected a missing-required failure");
    };
    let mut names: Vec<_> = missing.iter().map(|m| m.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["name", "verbosity"]);
}

#[test]
fn conversion_failure_names_parameter_value_and_type() {
    let err = app()
        .parse(["math", "add", "three", "4", "--verbosity", "0"])
        .unwrap_err();

    let ErrorKind::Conversion {
        parameter,
        raw,
        target,
        ..
    } = &err.kind
    else {
        panic!("expected a conversion failure");
    };
    assert_eq!(parameter, "a");
    assert_eq!(raw, "three");
    assert_eq!(target, &TypeTag::Int);
}

#[test]
fn command_opting_out_ignores_unmatched_globals() {
    let config = Builder::new()
        .parameter(ParameterDescriptor::new("verbosity").required())
        .command(
            Command::new("status")
                .ignore_global_required()
                .operation(Operation::new("show", |_, _| Ok(Value::Nil))),
        )
        .freeze();

    let parsed = config.parse(["status", "show"]).unwrap();
    assert!(parsed.is_dispatch());
}

// =============================================================================
// Scope Precedence
// =============================================================================

#[test]
fn explicit_global_flag_coexists_with_ordinals() {
    let parsed = app()
        .parse(["math", "add", "--verbosity", "1", "3", "4"])
        .unwrap();

    let Parsed::Dispatch(dispatch) = parsed else {
        panic!("expected a dispatch");
    };
    assert_eq!(dispatch.binding().get("verbosity").unwrap().raw, "1");
    assert_eq!(dispatch.arguments(), &[Value::Int(3), Value::Int(4)]);
}

#[test]
fn command_scope_wins_shared_parameter_names() {
    let config = Builder::new()
        .parameter(ParameterDescriptor::new("name"))
        .command(
            Command::new("widget").operation(
                Operation::new("create", |_, args| Ok(args[0].clone()))
                    .parameter(ParameterDescriptor::new("name")),
            ),
        )
        .freeze();

    let parsed = config.parse(["widget", "create", "--name", "acme"]).unwrap();
    let Parsed::Dispatch(dispatch) = parsed else {
        panic!("expected a dispatch");
    };
    assert_eq!(dispatch.arguments(), &[Value::Text("acme".into())]);
}

// =============================================================================
// Naming Conventions
// =============================================================================

#[test]
fn controller_suffixed_owner_matches_bare_name() {
    let config = Builder::new()
        .command(
            Command::new("InventoryController")
                .operation(Operation::new("count", |_, _| Ok(Value::Int(0)))),
        )
        .freeze();

    assert!(config.parse(["inventory", "count"]).unwrap().is_dispatch());
    assert!(!config
        .parse(["inventorycontroller", "count"])
        .unwrap()
        .is_dispatch());
}

#[test]
fn recognition_is_case_insensitive_end_to_end() {
    let parsed = app()
        .parse(["WIDGET", "Create", "--NAME", "acme", "--verbosity", "2"])
        .unwrap();
    assert!(parsed.is_dispatch());
    assert_eq!(parsed.binding().get("name").unwrap().raw, "acme");
}
