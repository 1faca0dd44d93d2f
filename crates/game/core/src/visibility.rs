//! Perception versus stealth.
//!
//! `score = perception − stealth + (size − 5)`; a target is detectable when the
//! score is non-negative. Detection is one-directional: it says nothing about
//! whether the perceiver is seen.

use crate::config::GameConfig;
use crate::state::Combatant;

/// Raw detection score of `target` for a perceiver with the given perception.
pub fn detection_score<C: Combatant + ?Sized>(perception: i32, target: &C) -> i32 {
    let state = target.state();
    perception - state.stealth + (state.size - GameConfig::NEUTRAL_SIZE)
}

pub fn is_detectable<C: Combatant + ?Sized>(perception: i32, target: &C) -> bool {
    detection_score(perception, target) >= 0
}

/// Living, detectable targets paired with their index in `candidates`.
///
/// This is both the valid-target list for attacks and the set of enemies a
/// room description may mention.
pub fn visible_targets<C: Combatant>(
    perception: i32,
    candidates: &[C],
) -> impl Iterator<Item = (usize, &C)> {
    candidates
        .iter()
        .enumerate()
        .filter(move |(_, c)| c.is_alive() && is_detectable(perception, *c))
}

/// Temporary perception bonus granted by searching.
///
/// Counts down once per turn tick whether or not any detection check happened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBonus {
    bonus: i32,
    turns_remaining: u32,
}

impl SearchBonus {
    /// Starts (or restarts) the bonus window.
    pub fn activate(&mut self, config: &GameConfig) {
        self.bonus = config.search_bonus;
        self.turns_remaining = config.search_turns;
    }

    /// Advances one turn.
    pub fn tick(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.turns_remaining > 0
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Current bonus, zero once the window has elapsed.
    pub fn bonus(&self) -> i32 {
        if self.is_active() { self.bonus } else { 0 }
    }
}

/// Base perception plus any active search bonus.
pub fn effective_perception(base: i32, search: &SearchBonus) -> i32 {
    base + search.bonus()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EnemyActor;

    fn lurker(stealth: i32, size: i32) -> EnemyActor {
        EnemyActor::new("Lurker", 10)
            .with_stealth(stealth)
            .with_size(size)
    }

    #[test]
    fn neutral_size_compares_perception_to_stealth() {
        assert!(is_detectable(4, &lurker(4, 5)));
        assert!(!is_detectable(3, &lurker(4, 5)));
    }

    #[test]
    fn stealthy_target_needs_high_perception() {
        assert!(!is_detectable(5, &lurker(10, 5)));
        assert!(is_detectable(15, &lurker(10, 5)));
        assert!(!is_detectable(9, &lurker(10, 5)));
        assert!(is_detectable(9, &lurker(10, 10)));
    }

    #[test]
    fn size_shifts_detection() {
        assert_eq!(detection_score(4, &lurker(6, 7)), 0);
        assert!(is_detectable(4, &lurker(6, 7)));
        assert!(!is_detectable(4, &lurker(2, 2)));
    }

    #[test]
    fn search_bonus_lasts_two_ticks() {
        let config = GameConfig::default();
        let mut search = SearchBonus::default();
        assert_eq!(effective_perception(4, &search), 4);

        search.activate(&config);
        assert_eq!(effective_perception(4, &search), 7);
        search.tick();
        assert_eq!(effective_perception(4, &search), 7);
        search.tick();
        assert_eq!(effective_perception(4, &search), 4);
        search.tick();
        assert!(!search.is_active());
    }

    #[test]
    fn search_reveals_a_hidden_target() {
        let config = GameConfig::default();
        let hidden = lurker(6, 4);
        let mut search = SearchBonus::default();
        assert!(!is_detectable(4, &hidden));
        search.activate(&config);
        assert!(is_detectable(effective_perception(4, &search), &hidden));
    }

    #[test]
    fn visible_targets_skip_dead_and_hidden() {
        let mut dead = lurker(0, 5);
        dead.state.health = 0;
        let enemies = vec![lurker(0, 5), dead, lurker(9, 5), lurker(2, 5)];

        let indices: Vec<usize> = visible_targets(4, &enemies).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 3]);
    }
}
