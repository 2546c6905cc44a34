//! Named haptic effects.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EffectError;

/// A pre-defined haptic pattern.
///
/// Ordinals follow the platform effect enumeration so they can be
/// exchanged with callers as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Effect {
    /// Single crisp click.
    Click = 0,
    /// Two clicks in quick succession.
    DoubleClick = 1,
    /// Very short, light click.
    Tick = 2,
    /// Low, heavy thud.
    Thud = 3,
    /// Short pop.
    Pop = 4,
    /// Stronger click.
    HeavyClick = 5,
    /// Ringtone pattern 1.
    Ringtone1 = 6,
    /// Ringtone pattern 2.
    Ringtone2 = 7,
    /// Ringtone pattern 3.
    Ringtone3 = 8,
    /// Ringtone pattern 4.
    Ringtone4 = 9,
    /// Ringtone pattern 5.
    Ringtone5 = 10,
    /// Ringtone pattern 6.
    Ringtone6 = 11,
    /// Ringtone pattern 7.
    Ringtone7 = 12,
    /// Ringtone pattern 8.
    Ringtone8 = 13,
    /// Ringtone pattern 9.
    Ringtone9 = 14,
    /// Ringtone pattern 10.
    Ringtone10 = 15,
    /// Ringtone pattern 11.
    Ringtone11 = 16,
    /// Ringtone pattern 12.
    Ringtone12 = 17,
    /// Ringtone pattern 13.
    Ringtone13 = 18,
    /// Ringtone pattern 14.
    Ringtone14 = 19,
    /// Ringtone pattern 15.
    Ringtone15 = 20,
    /// Textured tick, played as a loop.
    TextureTick = 21,
}

impl Effect {
    /// Every effect, in ordinal order.
    pub const ALL: [Effect; 22] = [
        Effect::Click,
        Effect::DoubleClick,
        Effect::Tick,
        Effect::Thud,
        Effect::Pop,
        Effect::HeavyClick,
        Effect::Ringtone1,
        Effect::Ringtone2,
        Effect::Ringtone3,
        Effect::Ringtone4,
        Effect::Ringtone5,
        Effect::Ringtone6,
        Effect::Ringtone7,
        Effect::Ringtone8,
        Effect::Ringtone9,
        Effect::Ringtone10,
        Effect::Ringtone11,
        Effect::Ringtone12,
        Effect::Ringtone13,
        Effect::Ringtone14,
        Effect::Ringtone15,
        Effect::TextureTick,
    ];

    /// Platform ordinal.
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Effect::Click => "CLICK",
            Effect::DoubleClick => "DOUBLE_CLICK",
            Effect::Tick => "TICK",
            Effect::Thud => "THUD",
            Effect::Pop => "POP",
            Effect::HeavyClick => "HEAVY_CLICK",
            Effect::Ringtone1 => "RINGTONE_1",
            Effect::Ringtone2 => "RINGTONE_2",
            Effect::Ringtone3 => "RINGTONE_3",
            Effect::Ringtone4 => "RINGTONE_4",
            Effect::Ringtone5 => "RINGTONE_5",
            Effect::Ringtone6 => "RINGTONE_6",
            Effect::Ringtone7 => "RINGTONE_7",
            Effect::Ringtone8 => "RINGTONE_8",
            Effect::Ringtone9 => "RINGTONE_9",
            Effect::Ringtone10 => "RINGTONE_10",
            Effect::Ringtone11 => "RINGTONE_11",
            Effect::Ringtone12 => "RINGTONE_12",
            Effect::Ringtone13 => "RINGTONE_13",
            Effect::Ringtone14 => "RINGTONE_14",
            Effect::Ringtone15 => "RINGTONE_15",
            Effect::TextureTick => "TEXTURE_TICK",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Effect {
    type Error = EffectError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Effect::ALL
            .into_iter()
            .find(|e| e.ordinal() == value)
            .ok_or_else(|| EffectError::unknown_ordinal("effect", value))
    }
}

impl FromStr for Effect {
    type Err = EffectError;

    /// Accepts `DOUBLE_CLICK`, `double_click` and `double-click`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Effect::ALL
            .into_iter()
            .find(|e| e.name() == normalized)
            .ok_or_else(|| EffectError::unknown_name("effect", s))
    }
}
