//! Actors: the tagged `Player | Enemy` variant and the capability both expose.
//!
//! Capability differences (who has a weapon, who has attack modes, who softens
//! critical failures) are resolved once here, at construction, instead of being
//! probed at every call site.

use crate::env::{AttackModes, DamageRange, Weapon};
use crate::stats::{CombatScalars, Stat, StatBlock};

use super::status::StatusEffects;

/// State shared by every actor.
///
/// # Invariants
///
/// - Alive ⇔ `health > 0`
/// - `status_effects` is only mutated by the status engine
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub name: String,
    /// Current health. Combat damage floors at 0; effect ticks may push it lower.
    pub health: i32,
    pub stats: StatBlock,
    /// Detectability: higher stealth hides, larger size reveals.
    pub stealth: i32,
    pub size: i32,
    /// Derived once at construction.
    pub scalars: CombatScalars,
    status_effects: StatusEffects,
}

impl ActorState {
    pub fn new(name: impl Into<String>, stats: StatBlock, scalars: CombatScalars) -> Self {
        Self {
            name: name.into(),
            health: scalars.max_health,
            stats,
            stealth: 0,
            size: crate::config::GameConfig::NEUTRAL_SIZE,
            scalars,
            status_effects: StatusEffects::empty(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies combat damage, flooring health at 0.
    pub fn apply_damage(&mut self, damage: i32) {
        self.health = (self.health - damage.max(0)).max(0);
    }

    pub fn status_effects(&self) -> &StatusEffects {
        &self.status_effects
    }

    pub(crate) fn status_effects_mut(&mut self) -> &mut StatusEffects {
        &mut self.status_effects
    }

    /// Unclamped health change used by effect ticks.
    pub(crate) fn adjust_health(&mut self, delta: i32) {
        self.health += delta;
    }
}

/// Where an attacker's base damage comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageSource<'a> {
    /// Pick one named mode by weight.
    AttackModes(&'a AttackModes),
    /// Equipped weapon, subject to stat requirements.
    Weapon(&'a Weapon),
    /// Bare-handed or legacy min-max attack.
    Unarmed(DamageRange),
}

/// Uniform capability interface used by combat, visibility and the status engine.
pub trait Combatant {
    fn state(&self) -> &ActorState;

    fn state_mut(&mut self) -> &mut ActorState;

    /// Player attackers soften critical failures and earn experience.
    fn is_player(&self) -> bool;

    /// Damage source resolved for this actor.
    fn damage_source(&self) -> DamageSource<'_>;

    fn name(&self) -> &str {
        &self.state().name
    }

    fn health(&self) -> i32 {
        self.state().health
    }

    fn is_alive(&self) -> bool {
        self.state().is_alive()
    }

    fn stats(&self) -> &StatBlock {
        &self.state().stats
    }

    fn stat(&self, stat: Stat) -> i32 {
        self.state().stats.get(stat)
    }

    fn scalars(&self) -> CombatScalars {
        self.state().scalars
    }

    fn status_effects(&self) -> &StatusEffects {
        self.state().status_effects()
    }
}

// ============================================================================
// Player
// ============================================================================

/// Temporary attack modifiers granted to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs {
    /// Added to the attack roll modifier.
    pub attack_bonus: i32,
}

/// The player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerActor {
    pub state: ActorState,
    pub weapon: Option<Weapon>,
    pub buffs: Buffs,
}

impl PlayerActor {
    /// Fresh character with every attribute at the baseline.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stats(name, StatBlock::uniform(StatBlock::PLAYER_BASELINE))
    }

    pub fn with_stats(name: impl Into<String>, stats: StatBlock) -> Self {
        let scalars = CombatScalars::from_stats(&stats);
        Self {
            state: ActorState::new(name, stats, scalars),
            weapon: None,
            buffs: Buffs::default(),
        }
    }

    #[must_use]
    pub fn equipped(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Attack roll modifier from skill.
    pub fn skill(&self) -> i32 {
        self.state.scalars.skill
    }

    /// Perception attribute used as the detection baseline.
    pub fn perception(&self) -> i32 {
        self.state.stats.get(Stat::Per)
    }
}

impl Combatant for PlayerActor {
    fn state(&self) -> &ActorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    fn is_player(&self) -> bool {
        true
    }

    fn damage_source(&self) -> DamageSource<'_> {
        match &self.weapon {
            Some(weapon) => DamageSource::Weapon(weapon),
            None => DamageSource::Unarmed(DamageRange::UNARMED),
        }
    }
}

// ============================================================================
// Enemy
// ============================================================================

/// A hostile creature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyActor {
    pub state: ActorState,
    pub attack_modes: Option<AttackModes>,
    /// Legacy min-max attack used when no attack modes are defined.
    pub attack: DamageRange,
}

impl EnemyActor {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            state: ActorState::new(name, StatBlock::new(), CombatScalars::creature(health)),
            attack_modes: None,
            attack: DamageRange::UNARMED,
        }
    }

    #[must_use]
    pub fn with_attack(mut self, attack: DamageRange) -> Self {
        self.attack = attack;
        self
    }

    #[must_use]
    pub fn with_attack_modes(mut self, modes: AttackModes) -> Self {
        self.attack_modes = Some(modes);
        self
    }

    #[must_use]
    pub fn with_stealth(mut self, stealth: i32) -> Self {
        self.state.stealth = stealth;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: i32) -> Self {
        self.state.size = size;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.state.stats = stats;
        self
    }
}

impl Combatant for EnemyActor {
    fn state(&self) -> &ActorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    fn is_player(&self) -> bool {
        false
    }

    fn damage_source(&self) -> DamageSource<'_> {
        match &self.attack_modes {
            Some(modes) => DamageSource::AttackModes(modes),
            None => DamageSource::Unarmed(self.attack),
        }
    }
}

// ============================================================================
// Actor
// ============================================================================

/// Any participant in an encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    Player(PlayerActor),
    Enemy(EnemyActor),
}

impl Actor {
    pub fn as_player(&self) -> Option<&PlayerActor> {
        match self {
            Self::Player(player) => Some(player),
            Self::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyActor> {
        match self {
            Self::Enemy(enemy) => Some(enemy),
            Self::Player(_) => None,
        }
    }
}

impl Combatant for Actor {
    fn state(&self) -> &ActorState {
        match self {
            Self::Player(player) => &player.state,
            Self::Enemy(enemy) => &enemy.state,
        }
    }

    fn state_mut(&mut self) -> &mut ActorState {
        match self {
            Self::Player(player) => &mut player.state,
            Self::Enemy(enemy) => &mut enemy.state,
        }
    }

    fn is_player(&self) -> bool {
        matches!(self, Self::Player(_))
    }

    fn damage_source(&self) -> DamageSource<'_> {
        match self {
            Self::Player(player) => player.damage_source(),
            Self::Enemy(enemy) => enemy.damage_source(),
        }
    }
}

impl From<PlayerActor> for Actor {
    fn from(player: PlayerActor) -> Self {
        Self::Player(player)
    }
}

impl From<EnemyActor> for Actor {
    fn from(enemy: EnemyActor) -> Self {
        Self::Enemy(enemy)
    }
}
