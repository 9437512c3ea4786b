//! The evaluation context: external state as seen by conditions.
//!
//! Conditions never touch global state; the context passed into every call
//! is the sole channel to variables, switches, actors, and party data. The
//! core defines no storage of its own beyond "lookup by id, possibly
//! absent" - the host decides where the values actually live.

use std::collections::{HashMap, HashSet};

/// A queryable actor record.
///
/// A plain value snapshot: id, level, named numeric parameters, and the ids
/// of equipped weapons and armors. Hosts build these from their own data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Actor {
    /// The actor's id.
    pub id: i64,
    /// The actor's current level.
    pub level: i64,
    /// Named numeric parameters (`atk`, `def`, ...), lower-case keys.
    pub params: HashMap<String, i64>,
    /// Ids of equipped weapons.
    pub weapons: Vec<i64>,
    /// Ids of equipped armors.
    pub armors: Vec<i64>,
}

impl Actor {
    /// Creates an actor with the given id and level.
    #[must_use]
    pub fn new(id: i64, level: i64) -> Self {
        Self {
            id,
            level,
            ..Self::default()
        }
    }

    /// Looks up a named numeric parameter.
    ///
    /// `level` is always available under its own name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<i64> {
        if name == "level" {
            return Some(self.level);
        }
        self.params.get(name).copied()
    }
}

/// Read access to the external state conditions evaluate against.
///
/// Absent ids are reported as `None`/`false`; it is the condition layer's
/// business whether absence defaults (variables read as 0, switches as off)
/// or fails loudly (a missing actor).
pub trait EventContext {
    /// Reads a numbered variable slot.
    fn variable(&self, id: i64) -> Option<i64>;

    /// Reads a numbered boolean switch slot.
    fn switch(&self, id: i64) -> Option<bool>;

    /// Looks up an actor by id.
    fn actor(&self, id: i64) -> Option<Actor>;

    /// Looks up the actor in the given party slot (slot 0 is the leader).
    fn party_member(&self, slot: usize) -> Option<Actor>;

    /// Whether the actor with the given id is in the party.
    fn party_has_actor(&self, id: i64) -> bool;

    /// Whether the party inventory holds at least one of the given item.
    fn party_has_item(&self, id: i64) -> bool;

    /// Whether the party inventory holds at least one of the given weapon.
    fn party_has_weapon(&self, id: i64) -> bool;

    /// Whether the party inventory holds at least one of the given armor.
    fn party_has_armor(&self, id: i64) -> bool;
}

/// An in-memory [`EventContext`] backed by plain maps.
///
/// Useful for tests and for hosts whose state already lives in memory.
/// Built up with the `with_*` methods:
///
/// ```
/// use marginalia_conditions::StaticContext;
///
/// let ctx = StaticContext::new()
///     .with_variable(1, 42)
///     .with_switch(2, true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticContext {
    variables: HashMap<i64, i64>,
    switches: HashMap<i64, bool>,
    actors: HashMap<i64, Actor>,
    party: Vec<i64>,
    items: HashSet<i64>,
    weapons: HashSet<i64>,
    armors: HashSet<i64>,
}

impl StaticContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable slot.
    #[must_use]
    pub fn with_variable(mut self, id: i64, value: i64) -> Self {
        self.variables.insert(id, value);
        self
    }

    /// Sets a switch slot.
    #[must_use]
    pub fn with_switch(mut self, id: i64, on: bool) -> Self {
        self.switches.insert(id, on);
        self
    }

    /// Adds an actor record.
    #[must_use]
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors.insert(actor.id, actor);
        self
    }

    /// Appends an actor id to the party, in slot order.
    #[must_use]
    pub fn with_party_member(mut self, actor_id: i64) -> Self {
        self.party.push(actor_id);
        self
    }

    /// Adds an item to the party inventory.
    #[must_use]
    pub fn with_item(mut self, id: i64) -> Self {
        self.items.insert(id);
        self
    }

    /// Adds a weapon to the party inventory.
    #[must_use]
    pub fn with_weapon(mut self, id: i64) -> Self {
        self.weapons.insert(id);
        self
    }

    /// Adds an armor to the party inventory.
    #[must_use]
    pub fn with_armor(mut self, id: i64) -> Self {
        self.armors.insert(id);
        self
    }
}

impl EventContext for StaticContext {
    fn variable(&self, id: i64) -> Option<i64> {
        self.variables.get(&id).copied()
    }

    fn switch(&self, id: i64) -> Option<bool> {
        self.switches.get(&id).copied()
    }

    fn actor(&self, id: i64) -> Option<Actor> {
        self.actors.get(&id).cloned()
    }

    fn party_member(&self, slot: usize) -> Option<Actor> {
        let id = self.party.get(slot)?;
        self.actors.get(id).cloned()
    }

    fn party_has_actor(&self, id: i64) -> bool {
        self.party.contains(&id)
    }

    fn party_has_item(&self, id: i64) -> bool {
        self.items.contains(&id)
    }

    fn party_has_weapon(&self, id: i64) -> bool {
        self.weapons.contains(&id)
    }

    fn party_has_armor(&self, id: i64) -> bool {
        self.armors.contains(&id)
    }
}
