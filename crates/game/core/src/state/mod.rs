//! Mutable per-encounter state: actors and their active status effects.

pub mod actor;
pub mod status;

pub use actor::{
    Actor, ActorState, Buffs, Combatant, DamageSource, EnemyActor, PlayerActor,
};
pub use status::{StatusEffect, StatusEffects, StatusKind};
