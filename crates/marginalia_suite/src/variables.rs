//! Variable conditions.
//!
//! Comparisons and range checks over numbered variable slots. Almost all of
//! them take the same three arguments:
//!
//! - `var` - the id of the variable being checked
//! - `val` - the value it is checked against
//! - `gvar` - optional; pass `true` to treat `val` as the id of another
//!   variable to read instead of a literal value
//!
//! `<Condition: var_!=(1,5)>` holds while variable 1 is not 5;
//! `<Condition: var_==(1,2,true)>` holds while variables 1 and 2 are equal.
//!
//! An unset variable slot reads as 0.

use std::cmp::Ordering;

use marginalia_conditions::{Args, ConditionRegistry, EventContext};
use marginalia_foundation::Result;

/// Registers the variable conditions.
pub fn register(registry: &mut ConditionRegistry) {
    registry.register("var_!=", var_ne);
    registry.register("var_==", var_eq);
    registry.register("var_<", var_lt);
    registry.register("var_<=", var_le);
    registry.register("var_>", var_gt);
    registry.register("var_>=", var_ge);
    registry.register("var_between", var_between);
    registry.register("var_not_between", var_not_between);
}

/// Reads a variable slot, an unset slot counting as 0.
fn variable(ctx: &dyn EventContext, id: i64) -> i64 {
    ctx.variable(id).unwrap_or(0)
}

/// Shared body of the six comparison forms.
fn compare(
    ctx: &dyn EventContext,
    raw: &[String],
    name: &str,
    test: fn(Ordering) -> bool,
) -> Result<bool> {
    let args = Args::new(name, raw);
    let var = args.int(0)?;
    let target = args.resolve(1, 2, |id| ctx.variable(id))?;
    Ok(test(variable(ctx, var).cmp(&target)))
}

fn var_ne(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_!=", Ordering::is_ne)
}

fn var_eq(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_==", Ordering::is_eq)
}

fn var_lt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_<", Ordering::is_lt)
}

fn var_le(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_<=", Ordering::is_le)
}

fn var_gt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_>", Ordering::is_gt)
}

fn var_ge(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare(ctx, raw, "var_>=", Ordering::is_ge)
}

/// Shared body of the range forms.
///
/// Takes `(var, lower, upper, gvar_lower, gvar_upper)`; each bound has its
/// own indirect flag.
fn within(ctx: &dyn EventContext, raw: &[String], name: &str) -> Result<bool> {
    let args = Args::new(name, raw);
    let var = args.int(0)?;
    let lower = args.resolve(1, 3, |id| ctx.variable(id))?;
    let upper = args.resolve(2, 4, |id| ctx.variable(id))?;
    Ok((lower..=upper).contains(&variable(ctx, var)))
}

fn var_between(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    within(ctx, raw, "var_between")
}

fn var_not_between(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    within(ctx, raw, "var_not_between").map(|held| !held)
}
