//! Skill progression driven by successful attacks.
//!
//! Every weapon trait tag is its own skill. A successful player attack grants one
//! experience point per tag, and each point rolls for a level-up with chance
//! `xp / (5 · (level + 1))`. Experience resets on level-up.

use std::collections::BTreeMap;

use game_core::{PcgRng, ProgressionHook, RngSource};
use tracing::info;

/// Skill tags that are always listed, even at level 0.
pub const CORE_SKILLS: [&str; 4] = ["melee", "ranged", "unarmed", "tech"];

/// Level at which any other skill becomes visible.
pub const VISIBLE_LEVEL: u32 = 3;

/// Levels above this stop adding to the roll-bonus chance.
const BONUS_LEVEL_CAP: u32 = 100;

/// A skill that just gained a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub tag: String,
    pub level: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SkillRecord {
    level: u32,
    xp: u32,
}

/// Per-tag experience and levels for the player.
///
/// Owns its own RNG so that progression rolls never shift the combat dice.
#[derive(Clone, Debug)]
pub struct SkillProgression<R = PcgRng> {
    skills: BTreeMap<String, SkillRecord>,
    pending: Vec<LevelUp>,
    rng: R,
}

impl SkillProgression<PcgRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(PcgRng::seeded(seed))
    }
}

impl<R: RngSource> SkillProgression<R> {
    pub fn new(rng: R) -> Self {
        Self {
            skills: BTreeMap::new(),
            pending: Vec::new(),
            rng,
        }
    }

    pub fn level(&self, tag: &str) -> u32 {
        self.skills.get(tag).map_or(0, |record| record.level)
    }

    pub fn xp(&self, tag: &str) -> u32 {
        self.skills.get(tag).map_or(0, |record| record.xp)
    }

    /// Grants one point to each tag and rolls for level-ups.
    pub fn gain_xp_on_success(&mut self, tags: &[&str]) {
        for &tag in tags {
            let record = self.skills.entry(tag.to_string()).or_default();
            record.xp += 1;

            let threshold = 5 * (record.level + 1);
            let chance = f64::from(record.xp) / f64::from(threshold);
            if self.rng.chance(chance) {
                record.level += 1;
                record.xp = 0;
                info!(target: "progression", skill = tag, level = record.level, "skill level up");
                self.pending.push(LevelUp {
                    tag: tag.to_string(),
                    level: record.level,
                });
            }
        }
    }

    /// +1 per tag with probability `min(level, 100) / 100`.
    pub fn skill_roll_bonus(&mut self, tags: &[&str]) -> i32 {
        let mut bonus = 0;
        for &tag in tags {
            let level = self.level(tag).min(BONUS_LEVEL_CAP);
            if self.rng.chance(f64::from(level) / f64::from(BONUS_LEVEL_CAP)) {
                bonus += 1;
            }
        }
        bonus
    }

    /// Skills worth showing: the core set, plus anything at level 3 or above.
    pub fn visible_skills(&self) -> BTreeMap<&str, u32> {
        self.skills
            .iter()
            .filter(|(tag, record)| {
                CORE_SKILLS.contains(&tag.as_str()) || record.level >= VISIBLE_LEVEL
            })
            .map(|(tag, record)| (tag.as_str(), record.level))
            .collect()
    }

    /// Drains level-ups recorded since the last call.
    pub fn take_level_ups(&mut self) -> Vec<LevelUp> {
        std::mem::take(&mut self.pending)
    }
}

impl<R: RngSource> ProgressionHook for SkillProgression<R> {
    fn gain_xp_from_attack(&mut self, success: bool, trait_tags: &[&'static str]) {
        if success {
            self.gain_xp_on_success(trait_tags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ScriptedRng;

    #[test]
    fn failed_attacks_grant_nothing() {
        let mut progression = SkillProgression::new(ScriptedRng::new([ScriptedRng::HIT]));
        progression.gain_xp_from_attack(false, &["bleed"]);
        assert_eq!(progression.xp("bleed"), 0);
        assert!(progression.visible_skills().is_empty());
    }

    #[test]
    fn missed_level_roll_keeps_experience() {
        let mut progression = SkillProgression::new(ScriptedRng::new([ScriptedRng::MISS]));
        progression.gain_xp_from_attack(true, &["bleed", "melee"]);
        assert_eq!(progression.xp("bleed"), 1);
        assert_eq!(progression.xp("melee"), 1);
        assert_eq!(progression.level("melee"), 0);
        assert!(progression.take_level_ups().is_empty());
    }

    #[test]
    fn level_up_resets_experience() {
        let mut progression = SkillProgression::new(ScriptedRng::new([ScriptedRng::HIT]));
        progression.gain_xp_on_success(&["poison_on_hit"]);

        assert_eq!(progression.level("poison_on_hit"), 1);
        assert_eq!(progression.xp("poison_on_hit"), 0);
        assert_eq!(
            progression.take_level_ups(),
            vec![LevelUp {
                tag: "poison_on_hit".to_string(),
                level: 1
            }]
        );
        assert!(progression.take_level_ups().is_empty());
    }

    #[test]
    fn level_up_chance_scales_with_experience() {
        // xp 1 at level 0: chance 1/5 = 0.2. A draw of 0.25 fails, 0.15 passes.
        let quarter = u32::MAX / 4;
        let below = u32::MAX / 100 * 15;
        let mut progression = SkillProgression::new(ScriptedRng::new([quarter, below]));

        progression.gain_xp_on_success(&["melee"]);
        assert_eq!(progression.level("melee"), 0);
        // xp 2: chance 0.4, draw 0.15 passes.
        progression.gain_xp_on_success(&["melee"]);
        assert_eq!(progression.level("melee"), 1);
    }

    #[test]
    fn roll_bonus_needs_levels() {
        let mut progression = SkillProgression::new(ScriptedRng::new([ScriptedRng::HIT]));
        assert_eq!(progression.skill_roll_bonus(&["bleed", "melee"]), 0);

        progression.gain_xp_on_success(&["bleed"]);
        assert_eq!(progression.skill_roll_bonus(&["bleed", "melee"]), 1);
    }

    #[test]
    fn niche_skills_appear_at_level_three() {
        let mut progression = SkillProgression::new(ScriptedRng::new([ScriptedRng::HIT]));
        progression.gain_xp_on_success(&["melee", "bleed"]);
        progression.gain_xp_on_success(&["bleed"]);

        let visible = progression.visible_skills();
        assert_eq!(visible.get("melee"), Some(&1));
        assert!(!visible.contains_key("bleed"));

        progression.gain_xp_on_success(&["bleed"]);
        assert_eq!(progression.visible_skills().get("bleed"), Some(&3));
    }
}
