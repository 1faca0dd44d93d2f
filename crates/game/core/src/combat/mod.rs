//! Combat resolution: dice, the damage curve, and the attack orchestrator.
//!
//! # Core Functions
//!
//! - `roll_attack`: 2d6 plus modifier, with a printable trace
//! - `classify`: hit type of the natural roll
//! - `multiplier` / `final_damage`: the damage curve
//! - `CombatResolver::resolve_attack`: one full attack
//! - `roll_initiative`: encounter turn order

pub mod damage;
pub mod dice;
pub mod hit;
pub mod initiative;
pub mod narration;
pub mod resolver;
pub mod result;

pub use damage::{final_damage, multiplier};
pub use dice::{AttackRoll, roll_2d6, roll_attack};
pub use hit::{HitType, classify};
pub use initiative::{InitiativeRoll, roll_initiative};
pub use narration::{Party, attack_lines, effect_line, effect_lines};
pub use resolver::{AttackRequest, CombatResolver};
pub use result::{AttackOutcome, AttackReport, StatusApplication};
