//! Switch conditions.
//!
//! `<Condition: switch(1,true)>` holds while switch 1 is on;
//! `<Condition: switch(1,false)>` holds while it is off. An unset switch
//! slot reads as off.

use marginalia_conditions::{Args, ConditionRegistry, EventContext};
use marginalia_foundation::Result;

/// Registers the switch conditions.
pub fn register(registry: &mut ConditionRegistry) {
    registry.register("switch", switch);
}

fn switch(ctx: &dyn EventContext, raw: &[String]) -> Result<bool> {
    let args = Args::new("switch", raw);
    let id = args.int(0)?;
    let expected = args.bool_value(1)?;
    Ok(ctx.switch(id).unwrap_or(false) == expected)
}
