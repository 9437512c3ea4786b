//! Actor conditions.
//!
//! Equipment, level, and named-parameter checks on a single actor. The
//! first argument names the actor; a trailing `party` flag switches it from
//! an actor id to a party slot (slot 0 is the leader):
//!
//! - `<Condition: actor_using_weapon(1,5)>` - actor 1 has weapon 5 equipped
//! - `<Condition: actor_param_>=(0,atk,100,false,true)>` - the party leader
//!   has at least 100 atk
//!
//! Level and parameter comparisons also accept the indirect `gvar` flag on
//! their value argument, as variable conditions do. Referencing an actor
//! the context does not know is a loud error, never a false result.

use std::cmp::Ordering;

use marginalia_conditions::{Actor, Args, ConditionRegistry, EventContext};
use marginalia_foundation::{Error, Result};

/// Registers the actor conditions.
pub fn register(registry: &mut ConditionRegistry) {
    registry.register("actor_using_weapon", actor_using_weapon);
    registry.register("actor_using_armor", actor_using_armor);
    registry.register("actor_level_>", actor_level_gt);
    registry.register("actor_level_>=", actor_level_ge);
    registry.register("actor_level_<", actor_level_lt);
    registry.register("actor_level_<=", actor_level_le);
    registry.register("actor_param_>", actor_param_gt);
    registry.register("actor_param_>=", actor_param_ge);
    registry.register("actor_param_<", actor_param_lt);
    registry.register("actor_param_<=", actor_param_le);
}

/// Resolves the actor argument, by id or by party slot per the flag.
fn resolve_actor(
    ctx: &dyn EventContext,
    args: Args<'_>,
    condition: &str,
    party_flag: usize,
) -> Result<Actor> {
    if args.flag(party_flag) {
        let slot = args.slot(0)?;
        ctx.party_member(slot)
            .ok_or_else(|| Error::missing_actor(condition, format!("party slot {slot}")))
    } else {
        let id = args.int(0)?;
        ctx.actor(id)
            .ok_or_else(|| Error::missing_actor(condition, format!("id {id}")))
    }
}

fn actor_using_weapon(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let args = Args::new("actor_using_weapon", raw);
    let weapon = args.int(1)?;
    let actor = resolve_actor(ctx, args, "actor_using_weapon", 2)?;
    Ok(actor.weapons.contains(&weapon))
}

fn actor_using_armor(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let args = Args::new("actor_using_armor", raw);
    let armor = args.int(1)?;
    let actor = resolve_actor(ctx, args, "actor_using_armor", 2)?;
    Ok(actor.armors.contains(&armor))
}

/// Shared body of the level comparisons: `(actor, lvl, gvar, party)`.
fn compare_level(
    ctx: &dyn EventContext,
    raw: &[String],
    name: &str,
    test: fn(Ordering) -> bool,
) -> Result<bool> {
    let args = Args::new(name, raw);
    let target = args.resolve(1, 2, |id| ctx.variable(id))?;
    let actor = resolve_actor(ctx, args, name, 3)?;
    Ok(test(actor.level.cmp(&target)))
}

fn actor_level_gt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_level(ctx, raw, "actor_level_>", Ordering::is_gt)
}

fn actor_level_ge(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_level(ctx, raw, "actor_level_>=", Ordering::is_ge)
}

fn actor_level_lt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_level(ctx, raw, "actor_level_<", Ordering::is_lt)
}

fn actor_level_le(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_level(ctx, raw, "actor_level_<=", Ordering::is_le)
}

/// Shared body of the parameter comparisons:
/// `(actor, param, val, gvar, party)`.
fn compare_param(
    ctx: &dyn EventContext,
    raw: &[String],
    name: &str,
    test: fn(Ordering) -> bool,
) -> Result<bool> {
    let args = Args::new(name, raw);
    let param = args.raw(1)?;
    let target = args.resolve(2, 3, |id| ctx.variable(id))?;
    let actor = resolve_actor(ctx, args, name, 4)?;
    let value = actor
        .param(param)
        .ok_or_else(|| Error::unknown_param(name, param))?;
    Ok(test(value.cmp(&target)))
}

fn actor_param_gt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_param(ctx, raw, "actor_param_>", Ordering::is_gt)
}

fn actor_param_ge(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_param(ctx, raw, "actor_param_>=", Ordering::is_ge)
}

fn actor_param_lt(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_param(ctx, raw, "actor_param_<", Ordering::is_lt)
}

fn actor_param_le(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    compare_param(ctx, raw, "actor_param_<=", Ordering::is_le)
}
