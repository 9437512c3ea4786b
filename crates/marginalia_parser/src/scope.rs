//! Nested scope scanning.
//!
//! Splits a string into ordered, possibly-nested bracket-delimited segments.
//! This exists because the condition directive's payload cannot be split on
//! commas: an argument list may contain commas of its own. Keying off matched
//! open/close delimiter pairs instead captures each `name(args)` call intact,
//! interior separators and all.

use regex::Regex;

/// A captured substring of the scanned input.
///
/// Scopes are numbered in the order they were opened. Scope 0 always spans
/// the whole input and is a bookkeeping artifact; [`scan`] does not return
/// it. A scope still open at end of input is malformed; callers must check
/// [`Scope::closed`] and discard open scopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    /// The accumulated text of this scope, delimiters included.
    pub text: String,
    /// Whether the scope's closing delimiter was seen.
    pub closed: bool,
}

impl Scope {
    fn open(seed: String) -> Self {
        Self {
            text: seed,
            closed: false,
        }
    }
}

/// Scans `input` into bracket-delimited scopes.
///
/// The scan walks the input one character at a time, appending each character
/// to every open scope's buffer and to a rolling tail buffer. When the tail
/// matches `open` (capture group 1 if present, otherwise the whole match), a
/// new scope opens seeded with the matched text and the tail clears. When the
/// tail instead contains the `close` literal, the most recently opened
/// still-open scope closes and the tail clears. Scopes therefore close in
/// reverse order of opening: each call's own closing bracket closes only that
/// call's scope, leaving siblings and outer scopes accumulating.
///
/// Returns scopes 1..N in opening order; scope 0 (the whole input) is
/// excluded. An input with no opening delimiters yields an empty list.
#[must_use]
pub fn scan(input: &str, open: &Regex, close: &str) -> Vec<Scope> {
    let mut scopes = vec![Scope::open(String::new())];
    let mut tail = String::new();

    for ch in input.chars() {
        for scope in scopes.iter_mut().filter(|s| !s.closed) {
            scope.text.push(ch);
        }
        tail.push(ch);

        if let Some(seed) = open_match(&tail, open) {
            scopes.push(Scope::open(seed));
            tail.clear();
        } else if tail.contains(close) {
            if let Some(scope) = scopes.iter_mut().rev().find(|s| !s.closed) {
                scope.closed = true;
            }
            tail.clear();
        }
    }

    scopes.drain(..1);
    scopes
}

/// Returns the text that seeds a new scope, if the tail opens one.
fn open_match(tail: &str, open: &Regex) -> Option<String> {
    let caps = open.captures(tail)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    Some(m.as_str().to_string())
}
