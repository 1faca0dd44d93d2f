//! Two-six-sided-dice attack rolls.

use crate::config::GameConfig;
use crate::env::RngSource;

/// Die-face glyphs indexed by `face - 1`.
const FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// A rolled attack: two faces, their natural sum and the modified total.
///
/// No clamping happens here; the damage curve accepts any total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRoll {
    pub die1: u32,
    pub die2: u32,
    /// Natural roll (`die1 + die2`).
    pub base_total: i32,
    pub modifier: i32,
    /// `base_total + modifier`.
    pub modified_total: i32,
}

impl AttackRoll {
    pub fn from_faces(die1: u32, die2: u32, modifier: i32) -> Self {
        let base_total = (die1 + die2) as i32;
        Self {
            die1,
            die2,
            base_total,
            modifier,
            modified_total: base_total + modifier,
        }
    }

    /// Debug trace shown before every attack.
    ///
    /// ```text
    /// 🎲 Roll: ⚅ ⚄ → Base: 11 + Mod: 2 = Total: 13
    /// ```
    pub fn trace(&self) -> String {
        format!(
            "🎲 Roll: {} {} → Base: {} + Mod: {} = Total: {}",
            face_glyph(self.die1),
            face_glyph(self.die2),
            self.base_total,
            self.modifier,
            self.modified_total
        )
    }
}

fn face_glyph(face: u32) -> char {
    FACES
        .get((face as usize).wrapping_sub(1))
        .copied()
        .unwrap_or('?')
}

/// Rolls two dice.
pub fn roll_2d6(rng: &mut impl RngSource) -> (u32, u32) {
    (
        rng.roll_die(GameConfig::DIE_SIDES),
        rng.roll_die(GameConfig::DIE_SIDES),
    )
}

/// Rolls an attack with the given modifier.
pub fn roll_attack(modifier: i32, rng: &mut impl RngSource) -> AttackRoll {
    let (die1, die2) = roll_2d6(rng);
    AttackRoll::from_faces(die1, die2, modifier)
}
