//! Hit-type classification of the natural roll.

/// Narrative class of an attack, decided by the natural (unmodified) roll.
///
/// | natural | class |
/// |---|---|
/// | 2 | critfail |
/// | 3–5 | miss |
/// | 6–7 | glancing |
/// | 8–11 | hit |
/// | 12 | critical |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum HitType {
    CritFail,
    Miss,
    Glancing,
    Hit,
    Critical,
}

impl HitType {
    /// Flavor line for the narration, independent of damage.
    pub const fn narrative(self) -> &'static str {
        match self {
            Self::CritFail => "💀 Critical failure! A clumsy stumble.",
            Self::Miss => "❌ The attack goes wide.",
            Self::Glancing => "⚠️ Glancing blow. Barely connects.",
            Self::Hit => "✅ A clean hit!",
            Self::Critical => "💥 Critical hit! Devastating strike!",
        }
    }
}

/// Classifies a natural two-dice roll.
///
/// Values outside 2..=12 cannot come from the dice; they clamp to the nearest band.
pub fn classify(natural: i32) -> HitType {
    match natural {
        i32::MIN..=2 => HitType::CritFail,
        3..=5 => HitType::Miss,
        6..=7 => HitType::Glancing,
        8..=11 => HitType::Hit,
        _ => HitType::Critical,
    }
}
