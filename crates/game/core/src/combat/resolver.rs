//! One attack, start to finish.
//!
//! Step order is fixed:
//!
//! 1. roll, classify the natural roll;
//! 2. pick the damage source and roll base damage;
//! 3. multiplier from the modified total;
//! 4. apply floored damage to the target;
//! 5. fire traits through the status engine on a successful total;
//! 6. notify progression for successful player attacks;
//! 7. narrate, with the defeat line checked last.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{self, ProgressionHook};
use crate::env::{RngSource, WeaponTrait};
use crate::state::{Buffs, Combatant, DamageSource};

use super::damage::{final_damage, multiplier};
use super::dice::roll_attack;
use super::hit::classify;
use super::narration::{Party, attack_lines};
use super::result::{AttackOutcome, AttackReport, StatusApplication};

/// Situational inputs for one attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackRequest {
    pub roll_modifier: i32,
    pub half_damage: bool,
    pub buffs: Buffs,
}

impl AttackRequest {
    pub fn new(roll_modifier: i32) -> Self {
        Self {
            roll_modifier,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn half_damage(mut self) -> Self {
        self.half_damage = true;
        self
    }

    #[must_use]
    pub fn with_buffs(mut self, buffs: Buffs) -> Self {
        self.buffs = buffs;
        self
    }

    /// Modifier actually added to the dice.
    pub fn effective_modifier(&self) -> i32 {
        self.roll_modifier + self.buffs.attack_bonus
    }
}

/// Rolled base damage and where it came from.
struct BaseDamage<'a> {
    amount: i32,
    traits: &'a [WeaponTrait],
    name: Option<&'a str>,
    penalized: bool,
}

/// Resolves attacks under one set of rules.
#[derive(Clone, Copy, Debug)]
pub struct CombatResolver<'a> {
    config: &'a GameConfig,
}

impl<'a> CombatResolver<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Resolves `attacker` striking `target`, mutating the target's health and
    /// status effects.
    pub fn resolve_attack<A, T>(
        &self,
        attacker: &A,
        target: &mut T,
        request: AttackRequest,
        rng: &mut impl RngSource,
        progression: &mut impl ProgressionHook,
    ) -> AttackReport
    where
        A: Combatant + ?Sized,
        T: Combatant + ?Sized,
    {
        let roll = roll_attack(request.effective_modifier(), rng);
        let hit_type = classify(roll.base_total);

        let base = Self::base_damage(attacker, rng);

        let softener = if attacker.is_player() {
            f64::from(attacker.scalars().skill) * self.config.crit_fail_softener_per_skill
        } else {
            0.0
        };
        let multiplier = multiplier(f64::from(roll.modified_total), request.half_damage, softener);

        let damage = final_damage(base.amount, multiplier);
        target.state_mut().apply_damage(damage);

        let success = self.config.is_success(roll.modified_total);
        let mut applications = Vec::new();
        if success {
            for weapon_trait in base.traits {
                if rng.chance(weapon_trait.chance()) {
                    let effect = weapon_trait.effect();
                    let application = engine::apply(&mut *target, effect);
                    applications.push(StatusApplication {
                        trait_tag: weapon_trait.tag(),
                        effect,
                        application,
                    });
                }
            }
        }

        if attacker.is_player() && success {
            let tags: Vec<&'static str> = base.traits.iter().map(WeaponTrait::tag).collect();
            progression.gain_xp_from_attack(true, &tags);
        }

        let defeated = !target.is_alive();

        debug!(
            target: "combat",
            attacker = attacker.name(),
            defender = target.name(),
            natural = roll.base_total,
            total = roll.modified_total,
            %hit_type,
            base = base.amount,
            multiplier,
            damage,
            applied = applications.len(),
            "attack resolved"
        );
        if defeated {
            info!(target: "combat", attacker = attacker.name(), defender = target.name(), "target defeated");
        }

        let outcome = AttackOutcome {
            roll,
            hit_type,
            success,
            attack_name: base.name.map(str::to_owned),
            base_damage: base.amount,
            penalized: base.penalized,
            multiplier,
            damage,
            applications,
            defeated,
        };
        let lines = attack_lines(&outcome, Party::of(attacker), Party::of(&*target));

        AttackReport { outcome, lines }
    }

    fn base_damage<'s, A: Combatant + ?Sized>(
        attacker: &'s A,
        rng: &mut impl RngSource,
    ) -> BaseDamage<'s> {
        match attacker.damage_source() {
            DamageSource::AttackModes(modes) => {
                let mode = modes.select(rng);
                debug!(target: "combat", attacker = attacker.name(), mode = %mode.name, "attack mode selected");
                BaseDamage {
                    amount: mode.damage.roll(rng),
                    traits: &mode.traits,
                    name: Some(mode.name.as_str()),
                    penalized: false,
                }
            }
            DamageSource::Weapon(weapon) => {
                let rolled = weapon.damage.roll(rng);
                let penalized = !weapon.meets_requirements(attacker.stats());
                let amount = if penalized { (rolled / 2).max(1) } else { rolled };
                BaseDamage {
                    amount,
                    traits: &weapon.traits,
                    name: Some(weapon.name.as_str()),
                    penalized,
                }
            }
            DamageSource::Unarmed(range) => BaseDamage {
                amount: range.roll(rng),
                traits: &[],
                name: None,
                penalized: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::HitType;
    use crate::engine::{NoProgression, RecordingProgression};
    use crate::env::{
        AttackMode, AttackModes, ControlParams, DamageRange, DamageType, DotParams, ScriptedRng,
        Weapon,
    };
    use crate::state::{EnemyActor, PlayerActor, StatusKind};
    use crate::stats::{Stat, StatBlock};

    fn range(min: i32, max: i32) -> DamageRange {
        DamageRange::new(min, max).unwrap()
    }

    fn knight_with(weapon: Weapon) -> PlayerActor {
        PlayerActor::with_stats("Ada", StatBlock::uniform(7)).equipped(weapon)
    }

    #[test]
    fn natural_twelve_with_heavy_weapon() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let player = knight_with(Weapon::new("Greatsword", range(8, 16), DamageType::Sharp));
        let mut target = EnemyActor::new("Ancient Mech Core", 60);

        // 6 + 6, then a damage roll of 10.
        let mut rng = ScriptedRng::new([
            ScriptedRng::die(6),
            ScriptedRng::die(6),
            ScriptedRng::pick(10, 8),
        ]);
        let report = resolver.resolve_attack(
            &player,
            &mut target,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );

        let outcome = &report.outcome;
        assert_eq!(outcome.hit_type, HitType::Critical);
        assert_eq!(outcome.multiplier, multiplier(12.0, false, 0.0));
        assert_eq!(outcome.damage, 27);
        assert_eq!(target.health(), 33);
        assert!(!outcome.defeated);
        assert!(!report.lines.iter().any(|l| l.contains("defeated")));
    }

    #[test]
    fn defeat_line_appears_once_health_reaches_zero() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let player = knight_with(Weapon::new("Greatsword", range(8, 16), DamageType::Sharp));
        let mut goblin = EnemyActor::new("Goblin", 20);

        let mut rng = ScriptedRng::new([
            ScriptedRng::die(6),
            ScriptedRng::die(6),
            ScriptedRng::pick(16, 8),
        ]);
        let report = resolver.resolve_attack(
            &player,
            &mut goblin,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );

        assert_eq!(goblin.health(), 0);
        assert!(report.outcome.defeated);
        assert_eq!(report.lines.last().unwrap(), "💀 Goblin is defeated!");
    }

    #[test]
    fn traits_fire_only_on_success() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let spider = EnemyActor::new("Giant Spider", 25).with_attack_modes(
            AttackModes::new(vec![
                AttackMode::new("Venomous Bite", range(2, 4)).with_trait(WeaponTrait::PoisonOnHit(
                    DotParams {
                        damage: Some(2),
                        duration: Some(4),
                        chance: Some(1.0),
                    },
                )),
            ])
            .unwrap(),
        );
        let mut player = PlayerActor::new("Ada");

        // 1 + 2 natural (miss), mode pick, damage 2.
        let mut rng = ScriptedRng::new([ScriptedRng::die(1), ScriptedRng::die(2), 0, 0]);
        let report = resolver.resolve_attack(
            &spider,
            &mut player,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );
        assert!(!report.outcome.success);
        assert!(report.outcome.applications.is_empty());
        assert!(player.status_effects().is_empty());

        // 4 + 4, mode pick, damage 3, trait chance.
        let mut rng = ScriptedRng::new([
            ScriptedRng::die(4),
            ScriptedRng::die(4),
            0,
            ScriptedRng::pick(3, 2),
            ScriptedRng::HIT,
        ]);
        let report = resolver.resolve_attack(
            &spider,
            &mut player,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );
        assert!(report.outcome.success);
        assert_eq!(report.outcome.attack_name.as_deref(), Some("Venomous Bite"));
        assert_eq!(report.outcome.damage, 3);
        assert_eq!(
            player.status_effects().find(StatusKind::Poison),
            Some(&crate::state::StatusEffect::poison(2, 4))
        );
        assert_eq!(report.lines[1], "Giant Spider uses Venomous Bite!");
        assert!(report.lines.contains(&"You are poisoned!".to_string()));
    }

    #[test]
    fn failed_chance_roll_skips_the_effect() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let drone = EnemyActor::new("Scyther Drone", 40).with_attack_modes(
            AttackModes::new(vec![AttackMode::new("Charge Ram", range(4, 8)).with_trait(
                WeaponTrait::Maim(ControlParams {
                    duration: None,
                    chance: Some(0.5),
                }),
            )])
            .unwrap(),
        );
        let mut player = PlayerActor::new("Ada");

        let mut rng = ScriptedRng::new([
            ScriptedRng::die(5),
            ScriptedRng::die(5),
            0,
            ScriptedRng::pick(4, 4),
            ScriptedRng::MISS,
        ]);
        let report = resolver.resolve_attack(
            &drone,
            &mut player,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );
        assert!(report.outcome.success);
        assert!(!player.status_effects().has(StatusKind::Maim));
    }

    #[test]
    fn unmet_requirements_halve_damage_with_minimum_one() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let mace = Weapon::new("Iron Mace", range(6, 10), DamageType::Blunt)
            .with_requirement(Stat::Str, 6);
        let weakling = PlayerActor::new("Ada").equipped(mace);
        let mut target = EnemyActor::new("Dummy", 100);

        // 4 + 4 = 8 → ×1.0; rolled 9 → penalized to 4.
        let mut rng = ScriptedRng::new([
            ScriptedRng::die(4),
            ScriptedRng::die(4),
            ScriptedRng::pick(9, 6),
        ]);
        let report = resolver.resolve_attack(
            &weakling,
            &mut target,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );
        assert!(report.outcome.penalized);
        assert_eq!(report.outcome.base_damage, 4);
        assert_eq!(report.outcome.damage, 4);
        assert!(report.lines.contains(&"You struggle to wield the Iron Mace.".to_string()));
    }

    #[test]
    fn progression_hears_successful_player_attacks_with_all_tags() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let blade = Weapon::new("Eldritch Blade", range(8, 16), DamageType::Psychic).with_trait(
            WeaponTrait::Bleed(DotParams {
                chance: Some(0.0),
                ..DotParams::default()
            }),
        );
        let player = knight_with(blade);
        let mut target = EnemyActor::new("Dummy", 100);
        let mut progression = RecordingProgression::default();

        let mut rng = ScriptedRng::new([
            ScriptedRng::die(3),
            ScriptedRng::die(3),
            ScriptedRng::pick(8, 8),
            ScriptedRng::HIT,
        ]);
        let report = resolver.resolve_attack(
            &player,
            &mut target,
            AttackRequest::new(0),
            &mut rng,
            &mut progression,
        );

        assert!(report.outcome.success);
        assert!(report.outcome.applications.is_empty());
        assert_eq!(progression.calls, vec![(true, vec!["bleed"])]);

        // A miss is never reported.
        let mut rng = ScriptedRng::new([ScriptedRng::die(1), ScriptedRng::die(2), 0, 0]);
        resolver.resolve_attack(
            &player,
            &mut target,
            AttackRequest::new(0),
            &mut rng,
            &mut progression,
        );
        assert_eq!(progression.calls.len(), 1);
    }

    #[test]
    fn enemies_never_notify_progression() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let goblin = EnemyActor::new("Goblin", 20).with_attack(range(4, 8));
        let mut player = PlayerActor::new("Ada");
        let mut progression = RecordingProgression::default();

        let mut rng = ScriptedRng::new([ScriptedRng::die(6), ScriptedRng::die(6), 0]);
        resolver.resolve_attack(
            &goblin,
            &mut player,
            AttackRequest::new(0),
            &mut rng,
            &mut progression,
        );
        assert!(progression.calls.is_empty());
    }

    #[test]
    fn buffs_add_to_the_modifier_but_not_the_natural_roll() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let player = PlayerActor::new("Ada");
        let mut target = EnemyActor::new("Dummy", 100);

        let mut rng = ScriptedRng::new([ScriptedRng::die(2), ScriptedRng::die(3), 1]);
        let report = resolver.resolve_attack(
            &player,
            &mut target,
            AttackRequest::new(1).with_buffs(Buffs { attack_bonus: 2 }),
            &mut rng,
            &mut NoProgression,
        );

        assert_eq!(report.outcome.roll.base_total, 5);
        assert_eq!(report.outcome.roll.modified_total, 8);
        assert_eq!(report.outcome.hit_type, HitType::Miss);
        assert!(report.outcome.success);
        assert_eq!(report.outcome.damage, 2);
    }

    #[test]
    fn player_skill_softens_critical_failure() {
        let config = GameConfig::default();
        let resolver = CombatResolver::new(&config);
        let nimble = PlayerActor::with_stats("Ada", StatBlock::uniform(4).with(Stat::Dex, 30));
        assert!(nimble.skill() >= 4);
        let mut target = EnemyActor::new("Dummy", 100);

        let mut rng = ScriptedRng::new([ScriptedRng::die(1), ScriptedRng::die(1), 1]);
        let report = resolver.resolve_attack(
            &nimble,
            &mut target,
            AttackRequest::new(0),
            &mut rng,
            &mut NoProgression,
        );
        assert_eq!(report.outcome.hit_type, HitType::CritFail);
        assert_eq!(
            report.outcome.multiplier,
            multiplier(2.0, false, f64::from(nimble.skill()) * 0.25)
        );
        assert_eq!(report.lines.last().unwrap(), "You miss and lose balance!");
    }
}
