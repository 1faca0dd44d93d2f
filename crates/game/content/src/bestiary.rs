//! Enemy templates and encounter groups.

use game_core::{AttackModes, DamageRange, EnemyActor, GameConfig, StatBlock};

/// Static description of an enemy kind. Spawning produces a fresh actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub health: i32,
    /// Legacy min-max attack, used when no attack modes are listed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: Option<DamageRange>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_modes: Option<AttackModes>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stealth: i32,
    #[cfg_attr(feature = "serde", serde(default = "EnemyTemplate::neutral_size"))]
    pub size: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack: None,
            attack_modes: None,
            stealth: 0,
            size: Self::neutral_size(),
            stats: StatBlock::new(),
        }
    }

    pub const fn neutral_size() -> i32 {
        GameConfig::NEUTRAL_SIZE
    }

    #[must_use]
    pub fn with_attack(mut self, attack: DamageRange) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn with_attack_modes(mut self, modes: AttackModes) -> Self {
        self.attack_modes = Some(modes);
        self
    }

    #[must_use]
    pub fn with_stealth(mut self, stealth: i32) -> Self {
        self.stealth = stealth;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Creates a fresh actor at full health with no active effects.
    pub fn spawn(&self) -> EnemyActor {
        let mut enemy = EnemyActor::new(self.name.clone(), self.health)
            .with_stealth(self.stealth)
            .with_size(self.size)
            .with_stats(self.stats.clone());
        if let Some(attack) = self.attack {
            enemy = enemy.with_attack(attack);
        }
        if let Some(modes) = &self.attack_modes {
            enemy = enemy.with_attack_modes(modes.clone());
        }
        enemy
    }
}

/// Spawns `count` independent copies of a template.
pub fn make_multiple(template: &EnemyTemplate, count: usize) -> Vec<EnemyActor> {
    (0..count).map(|_| template.spawn()).collect()
}

/// `count` enemies of one bestiary entry within a named encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterGroup {
    /// Bestiary id.
    pub enemy: String,
    #[cfg_attr(feature = "serde", serde(default = "EncounterGroup::single"))]
    pub count: usize,
}

impl EncounterGroup {
    pub fn new(enemy: impl Into<String>, count: usize) -> Self {
        Self {
            enemy: enemy.into(),
            count,
        }
    }

    pub const fn single() -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Combatant;

    #[test]
    fn spawn_copies_template_fields() {
        let template = EnemyTemplate::new("Goblin", 20)
            .with_attack(DamageRange::new(4, 8).unwrap())
            .with_stealth(2)
            .with_size(4);
        let goblin = template.spawn();

        assert_eq!(goblin.name(), "Goblin");
        assert_eq!(goblin.health(), 20);
        assert_eq!(goblin.state.stealth, 2);
        assert_eq!(goblin.state.size, 4);
        assert_eq!(goblin.attack, DamageRange::new(4, 8).unwrap());
        assert!(goblin.attack_modes.is_none());
    }

    #[test]
    fn make_multiple_spawns_independent_actors() {
        let template = EnemyTemplate::new("Goblin", 20);
        let mut goblins = make_multiple(&template, 3);
        assert_eq!(goblins.len(), 3);

        goblins[0].state.apply_damage(5);
        assert_eq!(goblins[0].health(), 15);
        assert_eq!(goblins[1].health(), 20);
    }
}
