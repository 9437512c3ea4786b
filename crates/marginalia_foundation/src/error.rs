//! Error types for the Marginalia system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Parse-time problems never reach this type: malformed directive text is
//! recovered locally by keeping defaults. Evaluation-time problems (unknown
//! condition names, argument coercion failures) always do, so that a
//! misconfigured condition list is never mistaken for "condition not met."

use std::fmt;

use thiserror::Error;

/// The main error type for Marginalia operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, unless context is already present.
    ///
    /// The innermost context names the offending call most precisely, so the
    /// first attachment wins.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Creates an unknown condition error.
    #[must_use]
    pub fn unknown_condition(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCondition(name.into()))
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(condition: impl Into<String>, index: usize) -> Self {
        Self::new(ErrorKind::MissingArgument {
            condition: condition.into(),
            index,
        })
    }

    /// Creates a bad argument error.
    #[must_use]
    pub fn bad_argument(
        condition: impl Into<String>,
        index: usize,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::BadArgument {
            condition: condition.into(),
            index,
            value: value.into(),
            expected: expected.into(),
        })
    }

    /// Creates a missing actor error.
    #[must_use]
    pub fn missing_actor(condition: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingActor {
            condition: condition.into(),
            reference: reference.into(),
        })
    }

    /// Creates an unknown actor parameter error.
    #[must_use]
    pub fn unknown_param(condition: impl Into<String>, param: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownParam {
            condition: condition.into(),
            param: param.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A condition call referenced a name no registration source provided.
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    /// A condition handler required an argument the call did not supply.
    #[error("condition {condition}: missing argument {index}")]
    MissingArgument {
        /// The condition name.
        condition: String,
        /// Zero-based index of the missing argument.
        index: usize,
    },

    /// A condition handler could not coerce an argument to the type it needs.
    #[error("condition {condition}: argument {index} ({value:?}) is not a valid {expected}")]
    BadArgument {
        /// The condition name.
        condition: String,
        /// Zero-based index of the offending argument.
        index: usize,
        /// The raw argument text.
        value: String,
        /// Description of the expected type.
        expected: String,
    },

    /// A condition referenced an actor the context does not know.
    #[error("condition {condition}: no such actor ({reference})")]
    MissingActor {
        /// The condition name.
        condition: String,
        /// How the actor was referenced (id or party slot).
        reference: String,
    },

    /// A condition referenced an actor parameter the actor does not carry.
    #[error("condition {condition}: actor has no parameter {param:?}")]
    UnknownParam {
        /// The condition name.
        condition: String,
        /// The parameter name that was requested.
        param: String,
    },
}

/// Context describing the condition call an error arose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// The full call rendered as authored (`name(arg, arg)`).
    pub call: String,
}

impl ErrorContext {
    /// Creates context from a rendered condition call.
    #[must_use]
    pub fn call(call: impl Into<String>) -> Self {
        Self { call: call.into() }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in {}", self.call)
    }
}

/// Convenient result type alias for Marginalia operations.
pub type Result<T> = std::result::Result<T, Error>;
