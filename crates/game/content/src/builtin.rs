//! Built-in weapons, bestiary and encounters.
//!
//! These match the shipped `data/` files entry for entry. Every constructor
//! goes through the validating core builders, so a typo here fails the same
//! way a bad data file would.

use game_core::{
    AttackMode, AttackModes, ConfigError, ControlParams, DamageRange, DamageType, DotParams,
    Stat, Weapon, WeaponTrait,
};

use crate::bestiary::{EncounterGroup, EnemyTemplate};

type Built<T> = Result<T, ConfigError>;

fn poison(damage: i32, duration: i32, chance: f64) -> WeaponTrait {
    WeaponTrait::PoisonOnHit(DotParams {
        damage: Some(damage),
        duration: Some(duration),
        chance: Some(chance),
    })
}

fn bleed(chance: f64) -> WeaponTrait {
    WeaponTrait::Bleed(DotParams {
        chance: Some(chance),
        ..DotParams::default()
    })
}

fn burn(damage: i32, duration: i32) -> WeaponTrait {
    WeaponTrait::Burn(DotParams {
        damage: Some(damage),
        duration: Some(duration),
        chance: None,
    })
}

fn blind(duration: i32) -> WeaponTrait {
    WeaponTrait::Blind(ControlParams {
        duration: Some(duration),
        chance: None,
    })
}

fn maim(chance: f64) -> WeaponTrait {
    WeaponTrait::Maim(ControlParams {
        duration: None,
        chance: Some(chance),
    })
}

fn mode(name: &str, min: i32, max: i32, weight: u32) -> Built<AttackMode> {
    Ok(AttackMode::new(name, DamageRange::new(min, max)?).with_weight(weight))
}

// ============================================================================
// Weapons
// ============================================================================

pub fn hunting_knife() -> Built<Weapon> {
    Ok(Weapon::new("Hunting Knife", DamageRange::new(3, 6)?, DamageType::Sharp))
}

pub fn iron_mace() -> Built<Weapon> {
    Ok(
        Weapon::new("Iron Mace", DamageRange::new(6, 10)?, DamageType::Blunt)
            .with_requirement(Stat::Str, 6),
    )
}

pub fn eldritch_blade() -> Built<Weapon> {
    let blade = Weapon::new("Eldritch Blade", DamageRange::new(8, 16)?, DamageType::Psychic)
        .with_trait(bleed(1.0))
        .with_requirement(Stat::Psi, 7)
        .with_requirement(Stat::Dex, 5)
        .with_tag("relic");
    blade.validate()?;
    Ok(blade)
}

/// `(id, weapon)` pairs.
pub fn weapons() -> Built<Vec<(String, Weapon)>> {
    Ok(vec![
        ("knife".into(), hunting_knife()?),
        ("mace".into(), iron_mace()?),
        ("eldritch_blade".into(), eldritch_blade()?),
    ])
}

// ============================================================================
// Bestiary
// ============================================================================

pub fn goblin() -> Built<EnemyTemplate> {
    Ok(EnemyTemplate::new("Goblin", 20).with_attack(DamageRange::new(4, 8)?))
}

pub fn giant_spider() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Venomous Bite", 2, 4, 3)?.with_trait(poison(2, 4, 1.0)),
        mode("Web Wrap", 0, 0, 1)?.with_trait(maim(0.5)),
    ])?;
    Ok(EnemyTemplate::new("Giant Spider", 25).with_attack_modes(modes))
}

pub fn scyther_drone() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Mono-blade Slash", 6, 10, 3)?.with_trait(bleed(1.0)),
        mode("Charge Ram", 4, 8, 1)?.with_trait(maim(0.5)),
    ])?;
    Ok(EnemyTemplate::new("Scyther Drone", 40).with_attack_modes(modes))
}

pub fn chitin_bug() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Mandible Clamp", 3, 5, 2)?.with_trait(bleed(0.7)),
        mode("Acid Spit", 2, 4, 3)?.with_trait(poison(2, 2, 1.0)),
    ])?;
    Ok(EnemyTemplate::new("Chitin Bug", 30).with_attack_modes(modes))
}

pub fn psylink_aberrant() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Mind Shatter", 5, 8, 2)?.with_trait(blind(2)),
        mode("Neural Lash", 3, 6, 1)?.with_trait(maim(1.0)),
    ])?;
    Ok(EnemyTemplate::new("Psylink Aberrant", 28)
        .with_attack_modes(modes)
        .with_stealth(6))
}

pub fn burned_thrall() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Charred Swipe", 2, 5, 3)?,
        mode("Molten Touch", 3, 6, 2)?.with_trait(burn(1, 3)),
    ])?;
    Ok(EnemyTemplate::new("Burned Thrall", 20).with_attack_modes(modes))
}

pub fn ancient_mech_core() -> Built<EnemyTemplate> {
    let modes = AttackModes::new(vec![
        mode("Pulse Beam", 8, 12, 3)?,
        mode("Neural Feedback", 0, 0, 1)?
            .with_trait(blind(2))
            .with_trait(maim(1.0)),
    ])?;
    Ok(EnemyTemplate::new("Ancient Mech Core", 60)
        .with_attack_modes(modes)
        .with_size(8))
}

/// `(id, template)` pairs.
pub fn bestiary() -> Built<Vec<(String, EnemyTemplate)>> {
    Ok(vec![
        ("goblin".into(), goblin()?),
        ("giant_spider".into(), giant_spider()?),
        ("scyther_drone".into(), scyther_drone()?),
        ("chitin_bug".into(), chitin_bug()?),
        ("psylink_aberrant".into(), psylink_aberrant()?),
        ("burned_thrall".into(), burned_thrall()?),
        ("ancient_mech_core".into(), ancient_mech_core()?),
    ])
}

// ============================================================================
// Encounters
// ============================================================================

/// `(name, groups)` pairs.
pub fn encounters() -> Vec<(String, Vec<EncounterGroup>)> {
    vec![
        ("goblin_ambush".into(), vec![EncounterGroup::new("goblin", 2)]),
        (
            "spider_nest".into(),
            vec![
                EncounterGroup::new("giant_spider", 1),
                EncounterGroup::new("chitin_bug", 2),
            ],
        ),
        (
            "drone_patrol".into(),
            vec![EncounterGroup::new("scyther_drone", 2)],
        ),
        (
            "psionic_ruins".into(),
            vec![
                EncounterGroup::new("burned_thrall", 2),
                EncounterGroup::new("psylink_aberrant", 1),
            ],
        ),
        (
            "core_chamber".into(),
            vec![
                EncounterGroup::new("ancient_mech_core", 1),
                EncounterGroup::new("burned_thrall", 1),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Combatant, StatBlock};

    #[test]
    fn every_builtin_entry_validates() {
        assert_eq!(weapons().unwrap().len(), 3);
        assert_eq!(bestiary().unwrap().len(), 7);
    }

    #[test]
    fn spider_prefers_its_bite() {
        let spider = giant_spider().unwrap();
        let modes = spider.attack_modes.as_ref().unwrap();
        let weights: Vec<(&str, u32)> = modes.iter().map(|m| (m.name.as_str(), m.weight)).collect();
        assert_eq!(weights, vec![("Venomous Bite", 3), ("Web Wrap", 1)]);
        assert_eq!(spider.spawn().health(), 25);
    }

    #[test]
    fn eldritch_blade_demands_psi_and_dex() {
        let blade = eldritch_blade().unwrap();
        let novice = StatBlock::uniform(StatBlock::PLAYER_BASELINE);
        let unmet: Vec<Stat> = blade
            .unmet_requirements(&novice)
            .into_iter()
            .map(|u| u.stat)
            .collect();
        assert_eq!(unmet, vec![Stat::Dex, Stat::Psi]);
    }
}
