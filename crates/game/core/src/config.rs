/// Rules constants and tunable parameters for combat resolution.
///
/// The damage curve itself is not configurable; these are the thresholds and
/// coefficients that surround it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Minimum modified total that counts as a successful action
    /// (status traits fire, experience is granted).
    pub success_threshold: i32,

    /// Crit-fail softener granted per point of player skill.
    pub crit_fail_softener_per_skill: f64,

    /// Flat perception bonus granted by searching.
    pub search_bonus: i32,

    /// Number of turn ticks the search bonus lasts.
    pub search_turns: u32,

    /// Initiative weight applied to AGI, in halves (2 = ×1.0).
    pub initiative_agility_halves: i32,

    /// Initiative weight applied to PER, in halves (1 = ×0.5).
    pub initiative_perception_halves: i32,
}

impl GameConfig {
    // ===== fixed rule constants =====
    /// Size score that neither helps nor hinders detection.
    pub const NEUTRAL_SIZE: i32 = 5;
    /// Sides on each attack die.
    pub const DIE_SIDES: u32 = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SUCCESS_THRESHOLD: i32 = 6;
    pub const DEFAULT_CRIT_FAIL_SOFTENER_PER_SKILL: f64 = 0.25;
    pub const DEFAULT_SEARCH_BONUS: i32 = 3;
    pub const DEFAULT_SEARCH_TURNS: u32 = 2;

    pub fn new() -> Self {
        Self {
            success_threshold: Self::DEFAULT_SUCCESS_THRESHOLD,
            crit_fail_softener_per_skill: Self::DEFAULT_CRIT_FAIL_SOFTENER_PER_SKILL,
            search_bonus: Self::DEFAULT_SEARCH_BONUS,
            search_turns: Self::DEFAULT_SEARCH_TURNS,
            initiative_agility_halves: 2,
            initiative_perception_halves: 1,
        }
    }

    /// Returns true if the modified total qualifies as a success.
    pub fn is_success(&self, modified_total: i32) -> bool {
        modified_total >= self.success_threshold
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
