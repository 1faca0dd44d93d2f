//! Hooks that let outer layers react to combat without the core owning them.
//!
//! The core decides *when* progression should be notified; what that means
//! (skill experience, level-ups, achievements) belongs to whoever implements the
//! hook.

/// Receives experience notifications for successful player attacks.
///
/// Called at most once per attack, only when the attacker is a player and the
/// modified total reached the success threshold.
pub trait ProgressionHook {
    /// `trait_tags` lists every trait carried by the weapon, whether or not it
    /// triggered on this hit.
    fn gain_xp_from_attack(&mut self, success: bool, trait_tags: &[&'static str]);
}

impl<H: ProgressionHook + ?Sized> ProgressionHook for &mut H {
    fn gain_xp_from_attack(&mut self, success: bool, trait_tags: &[&'static str]) {
        (**self).gain_xp_from_attack(success, trait_tags);
    }
}

/// Hook that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgression;

impl ProgressionHook for NoProgression {
    fn gain_xp_from_attack(&mut self, _success: bool, _trait_tags: &[&'static str]) {}
}

/// Hook that records every notification. Useful for assertions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingProgression {
    pub calls: Vec<(bool, Vec<&'static str>)>,
}

impl ProgressionHook for RecordingProgression {
    fn gain_xp_from_attack(&mut self, success: bool, trait_tags: &[&'static str]) {
        self.calls.push((success, trait_tags.to_vec()));
    }
}
