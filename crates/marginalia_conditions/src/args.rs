//! Argument coercion for condition handlers.
//!
//! Arguments cross the dispatch boundary as an ordered list of raw strings,
//! exactly as authored. Each handler owns its own arity and types; these
//! helpers make the common coercions one-liners and guarantee that a failed
//! coercion surfaces as a distinct error rather than a false result.

use marginalia_foundation::{Error, Result};

/// A condition call's arguments, bound to the condition's name for error
/// reporting.
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    condition: &'a str,
    args: &'a [String],
}

impl<'a> Args<'a> {
    /// Wraps a call's raw arguments.
    #[must_use]
    pub fn new(condition: &'a str, args: &'a [String]) -> Self {
        Self { condition, args }
    }

    /// Number of arguments supplied by the caller.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether the caller supplied no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The raw text of a required argument.
    pub fn raw(&self, index: usize) -> Result<&'a str> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_argument(self.condition, index))
    }

    /// A required integer argument.
    pub fn int(&self, index: usize) -> Result<i64> {
        let raw = self.raw(index)?;
        raw.trim()
            .parse()
            .map_err(|_| Error::bad_argument(self.condition, index, raw, "integer"))
    }

    /// A required party-slot argument (non-negative integer).
    pub fn slot(&self, index: usize) -> Result<usize> {
        let raw = self.raw(index)?;
        raw.trim()
            .parse()
            .map_err(|_| Error::bad_argument(self.condition, index, raw, "party slot"))
    }

    /// A required strict boolean argument, `true` or `false`.
    pub fn bool_value(&self, index: usize) -> Result<bool> {
        let raw = self.raw(index)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::bad_argument(self.condition, index, raw, "boolean")),
        }
    }

    /// An optional boolean flag; an omitted argument reads as false.
    ///
    /// Flags gate optional behavior (indirect lookup, party-slot
    /// addressing), so absence means "off" rather than an arity error.
    /// Anything other than `true` is off.
    #[must_use]
    pub fn flag(&self, index: usize) -> bool {
        self.args
            .get(index)
            .is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true"))
    }

    /// Resolves the literal-or-indirect argument idiom.
    ///
    /// Many conditions accept a value alongside a boolean flag saying
    /// whether the value is a constant or the id of a variable to read from
    /// the context. With the flag at `flag_index` off, the argument at
    /// `value_index` is parsed as a literal integer; with it on, the
    /// argument is parsed as a variable id and `lookup` supplies the value,
    /// an absent slot reading as 0.
    pub fn resolve<F>(&self, value_index: usize, flag_index: usize, lookup: F) -> Result<i64>
    where
        F: Fn(i64) -> Option<i64>,
    {
        let value = self.int(value_index)?;
        if self.flag(flag_index) {
            Ok(lookup(value).unwrap_or(0))
        } else {
            Ok(value)
        }
    }
}
