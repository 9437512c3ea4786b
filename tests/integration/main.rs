//! End-to-end tests: raw comment text through parse and evaluation.

use marginalia_conditions::{Actor, EventContext, StaticContext};
use marginalia_foundation::{ErrorKind, Result};
use marginalia_parser::parse;
use marginalia_suite::standard_registry;

#[test]
fn page_becomes_eligible_when_state_changes() {
    let page = parse(
        "A hidden staircase, revealed once the lever is thrown.\n\
         <Condition: switch(4,true), var_>=(2,10)>",
    );
    let registry = standard_registry();

    let before = StaticContext::new().with_switch(4, false).with_variable(2, 10);
    assert!(!registry.page_eligible(&page, &before).unwrap());

    let after = StaticContext::new().with_switch(4, true).with_variable(2, 10);
    assert!(registry.page_eligible(&page, &after).unwrap());
}

#[test]
fn untagged_page_is_always_eligible() {
    let page = parse("just flavor text, no directives");
    let registry = standard_registry();
    let ctx = StaticContext::new();

    assert!(registry.page_eligible(&page, &ctx).unwrap());
}

#[test]
fn authoring_mistakes_surface_instead_of_hiding() {
    // A typoed condition name must not read as "page not eligible".
    let page = parse("<Condition: swich(4,true)>");
    let registry = standard_registry();
    let ctx = StaticContext::new().with_switch(4, true);

    let err = registry.page_eligible(&page, &ctx).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCondition(name) if name == "swich"));
}

#[test]
fn host_extension_replaces_a_suite_condition() {
    fn switch_always_on(_: &dyn EventContext, _: &[String]) -> Result<bool> {
        Ok(true)
    }

    let page = parse("<Condition: switch(4,true)>");
    let mut registry = standard_registry();
    registry.register("switch", switch_always_on);
    let ctx = StaticContext::new(); // switch 4 unset

    assert!(registry.page_eligible(&page, &ctx).unwrap());
}

#[test]
fn full_page_round_trip() {
    let page = parse(
        "The harbor ferry.\n\
         <Movement: Ship>\n\
         <Left Size: 1>\n\
         <Right Size: 1>\n\
         <Sound: waves, 70, 8>\n\
         <Condition: actor_in_party(1), actor_level_>=(1,5)>",
    );
    let registry = standard_registry();
    let ctx = StaticContext::new()
        .with_actor(Actor::new(1, 6))
        .with_party_member(1);

    assert!(registry.page_eligible(&page, &ctx).unwrap());
    assert_eq!(page.condition_calls.len(), 2);
    assert!(page.sound_spec.is_some());
}
