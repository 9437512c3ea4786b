//! Party conditions.
//!
//! Membership and inventory checks:
//!
//! - `<Condition: actor_in_party(1)>` - actor 1 is in the party
//! - `<Condition: party_has_item(1)>` - the inventory holds item 1

use marginalia_conditions::{Args, ConditionRegistry, EventContext};
use marginalia_foundation::Result;

/// Registers the party conditions.
pub fn register(registry: &mut ConditionRegistry) {
    registry.register("actor_in_party", actor_in_party);
    registry.register("actor_out_of_party", actor_out_of_party);
    registry.register("party_has_item", party_has_item);
    registry.register("party_has_weapon", party_has_weapon);
    registry.register("party_has_armor", party_has_armor);
}

fn actor_in_party(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let id = Args::new("actor_in_party", raw).int(0)?;
    Ok(ctx.party_has_actor(id))
}

fn actor_out_of_party(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let id = Args::new("actor_out_of_party", raw).int(0)?;
    Ok(!ctx.party_has_actor(id))
}

fn party_has_item(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let id = Args::new("party_has_item", raw).int(0)?;
    Ok(ctx.party_has_item(id))
}

fn party_has_weapon(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let id = Args::new("party_has_weapon", raw).int(0)?;
    Ok(ctx.party_has_weapon(id))
}

fn party_has_armor(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let id = Args::new("party_has_armor", raw).int(0)?;
    Ok(ctx.party_has_armor(id))
}
