//! Suite condition tests against a populated static context.

use marginalia_conditions::{Actor, StaticContext};
use marginalia_foundation::{ConditionCall, ErrorKind};
use marginalia_suite::standard_registry;

fn world() -> StaticContext {
    let mut ralph = Actor::new(1, 12);
    ralph.params.insert("atk".into(), 140);
    ralph.weapons.push(5);

    let mut edna = Actor::new(2, 9);
    edna.armors.push(3);

    StaticContext::new()
        .with_variable(1, 5)
        .with_variable(2, 5)
        .with_switch(7, true)
        .with_actor(ralph)
        .with_actor(edna)
        .with_party_member(1)
        .with_party_member(2)
        .with_item(42)
}

fn call(name: &str, args: &[&str]) -> ConditionCall {
    ConditionCall::new(name, args.iter().map(ToString::to_string).collect())
}

#[test]
fn variable_conditions() {
    let registry = standard_registry();
    let ctx = world();

    assert!(registry.eval_call(&call("var_==", &["1", "5"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("var_==", &["1", "2", "true"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("var_between", &["1", "4", "6"]), &ctx).unwrap());
    assert!(!registry.eval_call(&call("var_not_between", &["1", "4", "6"]), &ctx).unwrap());
}

#[test]
fn switch_conditions() {
    let registry = standard_registry();
    let ctx = world();

    assert!(registry.eval_call(&call("switch", &["7", "true"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("switch", &["8", "false"]), &ctx).unwrap());
}

#[test]
fn actor_conditions() {
    let registry = standard_registry();
    let ctx = world();

    assert!(registry.eval_call(&call("actor_using_weapon", &["1", "5"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("actor_using_armor", &["2", "3"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("actor_level_>=", &["1", "12"]), &ctx).unwrap());
    assert!(registry
        .eval_call(&call("actor_param_>", &["1", "atk", "100"]), &ctx)
        .unwrap());
    // party slot 1 is edna
    assert!(registry
        .eval_call(&call("actor_level_<", &["1", "10", "false", "true"]), &ctx)
        .unwrap());
}

#[test]
fn party_conditions() {
    let registry = standard_registry();
    let ctx = world();

    assert!(registry.eval_call(&call("actor_in_party", &["1"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("actor_out_of_party", &["9"]), &ctx).unwrap());
    assert!(registry.eval_call(&call("party_has_item", &["42"]), &ctx).unwrap());
    assert!(!registry.eval_call(&call("party_has_weapon", &["42"]), &ctx).unwrap());
}

#[test]
fn coercion_failures_are_loud() {
    let registry = standard_registry();
    let ctx = world();

    let err = registry
        .eval_call(&call("var_==", &["1", "five"]), &ctx)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BadArgument { .. }));

    let err = registry
        .eval_call(&call("switch", &["7"]), &ctx)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingArgument { .. }));
}

#[test]
fn missing_actor_is_loud_not_false() {
    let registry = standard_registry();
    let ctx = world();

    let err = registry
        .eval_call(&call("actor_level_>", &["99", "1"]), &ctx)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingActor { .. }));
}
