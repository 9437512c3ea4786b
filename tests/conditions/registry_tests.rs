//! Registry dispatch tests.

use marginalia_conditions::{ConditionRegistry, EventContext, StaticContext};
use marginalia_foundation::{ConditionCall, ErrorKind, Result};

fn always_true(_: &dyn EventContext, _: &[String]) -> Result<bool> {
    Ok(true)
}

fn always_false(_: &dyn EventContext, _: &[String]) -> Result<bool> {
    Ok(false)
}

fn call(name: &str) -> ConditionCall {
    ConditionCall::new(name, Vec::new())
}

#[test]
fn conjunction_over_call_list() {
    let mut registry = ConditionRegistry::new();
    registry.register("always_true", always_true);
    registry.register("always_false", always_false);
    let ctx = StaticContext::new();

    let mixed = [call("always_true"), call("always_false"), call("always_true")];
    assert!(!registry.eval_all(&mixed, &ctx).unwrap());

    let all_true = [call("always_true"), call("always_true")];
    assert!(registry.eval_all(&all_true, &ctx).unwrap());

    assert!(registry.eval_all(&[], &ctx).unwrap());
}

#[test]
fn unknown_name_is_a_configuration_error() {
    let mut registry = ConditionRegistry::new();
    registry.register("always_true", always_true);
    let ctx = StaticContext::new();

    let calls = [call("always_true"), call("never_registered")];
    let err = registry.eval_all(&calls, &ctx).unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::UnknownCondition(name) if name == "never_registered"
    ));
}

#[test]
fn replacement_dispatches_to_newest_handler() {
    let mut registry = ConditionRegistry::new();
    registry.register("x", always_true);
    registry.register("x", always_false);
    let ctx = StaticContext::new();

    assert!(!registry.eval_call(&call("x"), &ctx).unwrap());
}

#[test]
fn independent_sources_layer_additively() {
    // The suite plus a host extension, the way a real startup assembles
    // the registry.
    let mut registry = marginalia_suite::standard_registry();
    let before = registry.len();
    registry.register("host_ready", always_true);

    assert_eq!(registry.len(), before + 1);
    assert!(registry.contains("switch"));
    assert!(registry.contains("host_ready"));
}
