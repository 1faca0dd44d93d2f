//! Turns attack outcomes and effect events into display lines.
//!
//! The player is always addressed in the second person ("You hit", "Your
//! poison has worn off"); everyone else by name with third-person verbs.

use crate::engine::{Application, EffectEvent};
use crate::state::{Combatant, StatusKind};

use super::hit::HitType;
use super::result::AttackOutcome;

/// How a participant is named in narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Party<'a> {
    pub name: &'a str,
    pub is_player: bool,
}

impl<'a> Party<'a> {
    pub fn of<C: Combatant + ?Sized>(actor: &'a C) -> Self {
        Self {
            name: actor.name(),
            is_player: actor.is_player(),
        }
    }

    /// Sentence-initial form.
    pub fn subject(&self) -> &'a str {
        if self.is_player { "You" } else { self.name }
    }

    pub fn object(&self) -> &'a str {
        if self.is_player { "you" } else { self.name }
    }

    /// Picks the verb form that agrees with this party.
    pub fn verb(&self, second_person: &'static str, third_person: &'static str) -> &'static str {
        if self.is_player { second_person } else { third_person }
    }

    /// "You are" / "Goblin is".
    fn be(&self) -> String {
        format!("{} {}", self.subject(), self.verb("are", "is"))
    }
}

/// Adjective describing an actor under a status kind.
fn condition(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Poison => "poisoned",
        StatusKind::Burn => "burning",
        StatusKind::Bleed => "bleeding",
        StatusKind::Regen => "regenerating",
        StatusKind::Blind => "blinded",
        StatusKind::Maim => "maimed",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Full message sequence for one attack, in display order.
pub fn attack_lines(outcome: &AttackOutcome, attacker: Party<'_>, target: Party<'_>) -> Vec<String> {
    let mut lines = vec![outcome.roll.trace()];

    if let Some(name) = &outcome.attack_name {
        if !attacker.is_player {
            lines.push(format!("{} uses {}!", attacker.subject(), name));
        }
    }

    lines.push(outcome.hit_type.narrative().to_string());

    if outcome.penalized {
        if let Some(name) = &outcome.attack_name {
            lines.push(format!(
                "{} {} to wield the {}.",
                attacker.subject(),
                attacker.verb("struggle", "struggles"),
                name
            ));
        }
    }

    lines.push(damage_line(outcome, attacker, target));

    for applied in &outcome.applications {
        let adjective = condition(applied.effect.kind);
        let line = match applied.application {
            Application::Stacked { stacks } if stacks > 1 => {
                format!("{} even more {} ({} stacks)!", target.be(), adjective, stacks)
            }
            Application::Refreshed => format!("{} {} again!", target.be(), adjective),
            _ => format!("{} {}!", target.be(), adjective),
        };
        lines.push(line);
    }

    if outcome.defeated {
        if target.is_player {
            lines.push("You are defeated!".to_string());
        } else {
            lines.push(format!("💀 {} is defeated!", target.name));
        }
    }

    lines
}

fn damage_line(outcome: &AttackOutcome, attacker: Party<'_>, target: Party<'_>) -> String {
    if outcome.damage > 0 {
        format!(
            "{} {} {} for {} damage!",
            attacker.subject(),
            attacker.verb("hit", "hits"),
            target.object(),
            outcome.damage
        )
    } else if outcome.success {
        format!(
            "{} {} {} but {} no damage.",
            attacker.subject(),
            attacker.verb("hit", "hits"),
            target.object(),
            attacker.verb("deal", "deals")
        )
    } else if outcome.hit_type == HitType::CritFail {
        format!(
            "{} {} and {} balance!",
            attacker.subject(),
            attacker.verb("miss", "misses"),
            attacker.verb("lose", "loses")
        )
    } else {
        format!(
            "{} {} completely.",
            attacker.subject(),
            attacker.verb("miss", "misses")
        )
    }
}

/// Display lines for one status tick event on `target`.
pub fn effect_line(event: &EffectEvent, target: Party<'_>) -> String {
    match *event {
        EffectEvent::GroupDamage {
            kind,
            amount,
            stacks,
        } => {
            let stacks = if stacks > 1 {
                format!(" ({stacks} stacks)")
            } else {
                String::new()
            };
            format!(
                "{} {} {} {} damage{}.",
                target.subject(),
                target.verb("suffer", "suffers"),
                amount,
                kind,
                stacks
            )
        }
        EffectEvent::Healed { amount, .. } => {
            if target.is_player {
                format!("You regain {amount} health.")
            } else {
                format!("{} regenerates {} health.", target.name, amount)
            }
        }
        EffectEvent::Control { kind } => format!("{} {}.", target.be(), condition(kind)),
        EffectEvent::Expired { kind } => {
            if target.is_player {
                format!("Your {kind} has worn off.")
            } else {
                format!("{} has worn off from {}.", capitalize(kind.as_ref()), target.name)
            }
        }
    }
}

/// Lines for a whole tick, in event order.
pub fn effect_lines(events: &[EffectEvent], target: Party<'_>) -> Vec<String> {
    events.iter().map(|event| effect_line(event, target)).collect()
}
