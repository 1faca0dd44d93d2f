//! Turn order at the start of an encounter.

use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::Combatant;
use crate::stats::Stat;

use super::dice::roll_2d6;

/// One participant's initiative result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeRoll {
    /// Position in the slice passed to [`roll_initiative`].
    pub index: usize,
    pub score: i32,
}

/// Rolls `2d6 + AGI + PER / 2` for every participant and returns them highest
/// first. Ties keep input order.
///
/// Dice are drawn in input order, so the result is reproducible for a given
/// RNG state.
pub fn roll_initiative(
    participants: &[&dyn Combatant],
    config: &GameConfig,
    rng: &mut impl RngSource,
) -> Vec<InitiativeRoll> {
    let mut order: Vec<InitiativeRoll> = participants
        .iter()
        .enumerate()
        .map(|(index, actor)| {
            let (die1, die2) = roll_2d6(rng);
            let weighted = actor.stat(Stat::Agi) * config.initiative_agility_halves
                + actor.stat(Stat::Per) * config.initiative_perception_halves;
            InitiativeRoll {
                index,
                score: (die1 + die2) as i32 + weighted / 2,
            }
        })
        .collect();

    order.sort_by(|a, b| b.score.cmp(&a.score));
    order
}
