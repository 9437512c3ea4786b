//! Registry for condition handlers.
//!
//! Stores condition handlers by name and evaluates a page's condition calls
//! against an evaluation context. Registration sources (the built-in suite,
//! host extensions) add handlers additively at startup; re-registering a
//! name replaces the previous handler without complaint.

use std::collections::HashMap;

use marginalia_foundation::{AnnotationSet, ConditionCall, Error, ErrorContext, Result};

use crate::context::EventContext;

/// A condition handler: a pure predicate over `(context, arguments)`.
pub type ConditionFn = fn(&dyn EventContext, &[String]) -> Result<bool>;

/// Registry for storing and dispatching condition handlers.
#[derive(Clone, Debug, Default)]
pub struct ConditionRegistry {
    conditions: HashMap<String, ConditionFn>,
}

impl ConditionRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: HashMap::new(),
        }
    }

    /// Registers a condition handler.
    ///
    /// Replaces any handler already bound to `name`; subsequent calls
    /// dispatch to the newest registration.
    pub fn register(&mut self, name: impl Into<String>, handler: ConditionFn) {
        let name = name.into();
        if self.conditions.insert(name.clone(), handler).is_some() {
            log::debug!("condition {name:?} re-registered, replacing handler");
        } else {
            log::debug!("condition {name:?} registered");
        }
    }

    /// Looks up a condition handler by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ConditionFn> {
        self.conditions.get(name).copied()
    }

    /// Whether a condition with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.conditions.contains_key(name)
    }

    /// Number of registered conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates a single condition call.
    ///
    /// A name no registration source provided is a configuration error, not
    /// a false result; it propagates so the authoring mistake stays visible.
    /// Handler errors gain the rendered call as context.
    pub fn eval_call(&self, call: &ConditionCall, ctx: &dyn EventContext) -> Result<bool> {
        let handler = self
            .get(&call.name)
            .ok_or_else(|| Error::unknown_condition(&call.name))?;
        handler(ctx, &call.args).map_err(|e| e.with_context(ErrorContext::call(call.to_string())))
    }

    /// Evaluates a list of condition calls as a conjunction.
    ///
    /// Calls are evaluated in order and ANDed, short-circuiting on the
    /// first false result; an empty list is vacuously true.
    pub fn eval_all(&self, calls: &[ConditionCall], ctx: &dyn EventContext) -> Result<bool> {
        for call in calls {
            if !self.eval_call(call, ctx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether a parsed page's condition list holds under the context.
    pub fn page_eligible(&self, page: &AnnotationSet, ctx: &dyn EventContext) -> Result<bool> {
        self.eval_all(&page.condition_calls, ctx)
    }
}
