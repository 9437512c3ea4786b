//! Scope scanner tests.
//!
//! The scanner exists so condition payloads split on bracket pairs rather
//! than naively on commas; these tests pin that behavior down.

use marginalia_parser::scope::scan;
use proptest::prelude::*;
use regex::Regex;

fn call_pattern() -> Regex {
    Regex::new(r"(\S+\()").unwrap()
}

#[test]
fn two_sibling_calls_in_opening_order() {
    let scopes = scan("foo(1,2), bar(3,4)", &call_pattern(), ")");

    assert_eq!(scopes.len(), 2);
    assert!(scopes[0].closed);
    assert_eq!(scopes[0].text, "foo(1,2)");
    assert!(scopes[1].closed);
    assert_eq!(scopes[1].text, "bar(3,4)");
}

#[test]
fn interior_commas_do_not_split_a_call() {
    let scopes = scan("between(3,7,true,false)", &call_pattern(), ")");

    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes[0].text, "between(3,7,true,false)");
}

#[test]
fn nested_call_closes_before_its_parent() {
    let scopes = scan("a(b(1),2)", &call_pattern(), ")");

    assert_eq!(scopes.len(), 2);
    assert_eq!(scopes[0].text, "a(b(1),2)");
    assert_eq!(scopes[1].text, "b(1)");
    assert!(scopes.iter().all(|s| s.closed));
}

#[test]
fn trailing_unclosed_call_stays_open() {
    let scopes = scan("ok(1), broken(2", &call_pattern(), ")");

    assert_eq!(scopes.len(), 2);
    assert!(scopes[0].closed);
    assert!(!scopes[1].closed);
}

#[test]
fn plain_text_yields_nothing() {
    assert!(scan("no calls here", &call_pattern(), ")").is_empty());
}

proptest! {
    /// Any flat comma-joined list of simple calls is recovered whole.
    #[test]
    fn flat_call_lists_roundtrip(
        names in proptest::collection::vec("[a-z_]{1,8}", 1..5),
        arg in 0i64..1000,
    ) {
        let payload = names
            .iter()
            .map(|n| format!("{n}({arg},{arg})"))
            .collect::<Vec<_>>()
            .join(", ");
        let scopes = scan(&payload, &call_pattern(), ")");

        prop_assert_eq!(scopes.len(), names.len());
        for (scope, name) in scopes.iter().zip(&names) {
            prop_assert!(scope.closed);
            prop_assert_eq!(&scope.text, &format!("{name}({arg},{arg})"));
        }
    }
}
