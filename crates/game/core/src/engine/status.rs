//! Status effect engine: applies, ticks and clears effects on an actor.
//!
//! One [`process`] call is one turn tick. Its order is fixed:
//!
//! 1. Each stacking group (poison, burn, bleed) deals the *sum* of its
//!    instances' magnitudes in a single aggregate event.
//! 2. Every stacking instance is decremented; expired ones are marked.
//! 3. Each non-stacking effect applies (regen heals, control kinds announce)
//!    and is then decremented; expired ones are marked.
//! 4. Marked instances are removed in one batch.
//! 5. One expiry event is emitted per removed instance.
//!
//! Marking and removal are separate so that no instance is skipped while the
//! list is being walked.

use tracing::debug;

use crate::state::{Combatant, StatusEffect, StatusKind};

/// Observable result of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectEvent {
    /// A stacking group dealt `amount` damage across `stacks` instances.
    GroupDamage {
        kind: StatusKind,
        amount: i32,
        stacks: usize,
    },
    /// A healing effect restored `amount` health.
    Healed { kind: StatusKind, amount: i32 },
    /// A control effect is active this tick.
    Control { kind: StatusKind },
    /// An instance ran out and was removed.
    Expired { kind: StatusKind },
}

impl EffectEvent {
    pub fn kind(&self) -> StatusKind {
        match *self {
            Self::GroupDamage { kind, .. }
            | Self::Healed { kind, .. }
            | Self::Control { kind }
            | Self::Expired { kind } => kind,
        }
    }
}

/// How [`apply`] merged a new effect into the actor's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Application {
    /// Appended as another instance of a stacking kind.
    Stacked { stacks: usize },
    /// Replaced the magnitude and duration of the existing instance.
    Refreshed,
    /// First instance of a non-stacking kind.
    Added,
}

/// Adds an effect to an actor.
///
/// Stacking kinds always append. Non-stacking kinds refresh the existing
/// instance in place, so at most one ever exists.
pub fn apply<C: Combatant + ?Sized>(actor: &mut C, effect: StatusEffect) -> Application {
    let effects = actor.state_mut().status_effects_mut();
    let application = if effect.kind.is_stacking() {
        effects.push(effect);
        Application::Stacked {
            stacks: effects.count(effect.kind),
        }
    } else if let Some(existing) = effects.find_mut(effect.kind) {
        existing.magnitude = effect.magnitude;
        existing.duration = effect.duration;
        Application::Refreshed
    } else {
        effects.push(effect);
        Application::Added
    };

    debug!(
        target: "status",
        actor = actor.name(),
        kind = %effect.kind,
        magnitude = effect.magnitude,
        duration = ?effect.duration,
        ?application,
        "status applied"
    );
    application
}

/// Runs one tick of every active effect on `actor` and returns the events in
/// emission order.
pub fn process<C: Combatant + ?Sized>(actor: &mut C) -> Vec<EffectEvent> {
    let state = actor.state_mut();
    let mut events = Vec::new();

    // 1. Aggregate damage per stacking group.
    for kind in StatusKind::STACKING {
        let (amount, stacks) = state
            .status_effects()
            .iter()
            .filter(|e| e.kind == kind)
            .fold((0, 0), |(sum, n), e| (sum + e.magnitude, n + 1));
        if stacks > 0 {
            state.adjust_health(-amount);
            events.push(EffectEvent::GroupDamage {
                kind,
                amount,
                stacks,
            });
        }
    }

    // 2. Decrement stacking instances, group by group.
    let mut expired: Vec<(usize, StatusKind)> = Vec::new();
    for kind in StatusKind::STACKING {
        for (index, effect) in state.status_effects_mut().as_mut_slice().iter_mut().enumerate() {
            if effect.kind == kind && effect.tick_duration() {
                expired.push((index, kind));
            }
        }
    }

    // 3. Non-stacking effects apply, then decrement.
    let singles: Vec<(usize, StatusEffect)> = state
        .status_effects()
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, e)| !e.kind.is_stacking())
        .collect();
    for (index, effect) in singles {
        if effect.kind == StatusKind::Regen {
            state.adjust_health(effect.magnitude);
            events.push(EffectEvent::Healed {
                kind: effect.kind,
                amount: effect.magnitude,
            });
        } else {
            events.push(EffectEvent::Control { kind: effect.kind });
        }
        if let Some(live) = state.status_effects_mut().as_mut_slice().get_mut(index) {
            if live.tick_duration() {
                expired.push((index, effect.kind));
            }
        }
    }

    // 4. Batch removal.
    let indices: Vec<usize> = expired.iter().map(|(index, _)| *index).collect();
    state.status_effects_mut().remove_indices(&indices);

    // 5. Expiry events, in marking order.
    events.extend(expired.into_iter().map(|(_, kind)| EffectEvent::Expired { kind }));

    debug!(
        target: "status",
        actor = %state.name,
        health = state.health,
        remaining = state.status_effects().len(),
        events = events.len(),
        "status tick"
    );
    events
}

/// Removes every instance of `kind` without emitting events. Returns the
/// number removed.
pub fn clear<C: Combatant + ?Sized>(actor: &mut C, kind: StatusKind) -> usize {
    let removed = actor.state_mut().status_effects_mut().remove_kind(kind);
    if removed > 0 {
        debug!(target: "status", actor = actor.name(), %kind, removed, "status cleared");
    }
    removed
}
