//! Immutable effect and strength tables.
//!
//! A table maps each supported [`Effect`] to the RAM waveform that plays it
//! and each supported [`Strength`] to a gain. Tables are validated once at
//! construction and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_GAIN;
use crate::effect::Effect;
use crate::error::{EffectError, EffectResult};
use crate::strength::Strength;

/// How the driver plays an effect from its RAM waveform table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// Waveform index in the driver's RAM table.
    pub hardware_index: u8,
    /// Loop repeat count; `0` plays the waveform once.
    pub loop_count: u8,
}

impl EffectDescriptor {
    /// Creates a descriptor.
    pub const fn new(hardware_index: u8, loop_count: u8) -> Self {
        Self {
            hardware_index,
            loop_count,
        }
    }

    /// Whether the effect needs looped playback.
    pub const fn is_looped(&self) -> bool {
        self.loop_count != 0
    }
}

/// Effects supported by the reference device.
pub const REFERENCE_EFFECTS: [(Effect, EffectDescriptor); 5] = [
    (Effect::Click, EffectDescriptor::new(3, 0)),
    (Effect::DoubleClick, EffectDescriptor::new(3, 0)),
    (Effect::Tick, EffectDescriptor::new(2, 0)),
    (Effect::TextureTick, EffectDescriptor::new(4, 15)),
    (Effect::HeavyClick, EffectDescriptor::new(5, 0)),
];

/// Strength gains of the reference device.
pub const REFERENCE_STRENGTHS: [(Strength, u8); 3] = [
    (Strength::Light, 64),
    (Strength::Medium, 96),
    (Strength::Strong, 128),
];

/// Lookup tables for effects and strengths.
///
/// Iteration is in ascending ordinal order and is stable for the life of
/// the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTable {
    effects: BTreeMap<Effect, EffectDescriptor>,
    strengths: BTreeMap<Strength, u8>,
}

impl EffectTable {
    /// The reference device table, built on first use.
    pub fn reference() -> &'static EffectTable {
        static REFERENCE: OnceLock<EffectTable> = OnceLock::new();
        REFERENCE.get_or_init(|| EffectTable {
            effects: REFERENCE_EFFECTS.into_iter().collect(),
            strengths: REFERENCE_STRENGTHS.into_iter().collect(),
        })
    }

    /// Start building a custom table.
    pub fn builder() -> EffectTableBuilder {
        EffectTableBuilder::default()
    }

    /// Descriptor for an effect, if supported.
    pub fn lookup_effect(&self, effect: Effect) -> Option<EffectDescriptor> {
        self.effects.get(&effect).copied()
    }

    /// Gain for a strength, if supported.
    pub fn lookup_strength(&self, strength: Strength) -> Option<u8> {
        self.strengths.get(&strength).copied()
    }

    /// Every supported effect, in table order.
    pub fn supported_effects(&self) -> Vec<Effect> {
        self.effects.keys().copied().collect()
    }

    /// Every supported strength, weakest first.
    pub fn supported_strengths(&self) -> Vec<Strength> {
        self.strengths.keys().copied().collect()
    }

    /// Iterate over `(effect, descriptor)` pairs in table order.
    pub fn effects(&self) -> impl Iterator<Item = (Effect, EffectDescriptor)> + '_ {
        self.effects.iter().map(|(e, d)| (*e, *d))
    }

    /// Iterate over `(strength, gain)` pairs, weakest first.
    pub fn strengths(&self) -> impl Iterator<Item = (Strength, u8)> + '_ {
        self.strengths.iter().map(|(s, g)| (*s, *g))
    }
}

impl Default for EffectTable {
    fn default() -> Self {
        EffectTable::reference().clone()
    }
}

/// Builder for [`EffectTable`].
#[derive(Debug, Default, Clone)]
pub struct EffectTableBuilder {
    effects: Vec<(Effect, EffectDescriptor)>,
    strengths: Vec<(Strength, u8)>,
}

impl EffectTableBuilder {
    /// Add an effect.
    #[must_use]
    pub fn effect(mut self, effect: Effect, descriptor: EffectDescriptor) -> Self {
        self.effects.push((effect, descriptor));
        self
    }

    /// Add several effects.
    #[must_use]
    pub fn effects(
        mut self,
        effects: impl IntoIterator<Item = (Effect, EffectDescriptor)>,
    ) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Add a strength gain.
    #[must_use]
    pub fn strength(mut self, strength: Strength, gain: u8) -> Self {
        self.strengths.push((strength, gain));
        self
    }

    /// Add several strength gains.
    #[must_use]
    pub fn strengths(mut self, strengths: impl IntoIterator<Item = (Strength, u8)>) -> Self {
        self.strengths.extend(strengths);
        self
    }

    /// Validate and build the table.
    ///
    /// # Errors
    ///
    /// Returns an error if an effect or strength is defined twice, a gain
    /// exceeds [`MAX_GAIN`], or gains do not increase strictly with strength.
    pub fn build(self) -> EffectResult<EffectTable> {
        let mut effects = BTreeMap::new();
        for (effect, descriptor) in self.effects {
            if effects.insert(effect, descriptor).is_some() {
                return Err(EffectError::DuplicateEffect(effect));
            }
        }

        let mut strengths = BTreeMap::new();
        for (strength, gain) in self.strengths {
            if gain > MAX_GAIN {
                return Err(EffectError::GainOutOfRange {
                    strength,
                    gain,
                    max: MAX_GAIN,
                });
            }
            if strengths.insert(strength, gain).is_some() {
                return Err(EffectError::DuplicateStrength(strength));
            }
        }

        let ordered: Vec<(Strength, u8)> = strengths.iter().map(|(s, g)| (*s, *g)).collect();
        for pair in ordered.windows(2) {
            if let [(lower, lower_gain), (higher, higher_gain)] = *pair {
                if higher_gain <= lower_gain {
                    return Err(EffectError::NonMonotonicGain {
                        lower,
                        lower_gain,
                        higher,
                        higher_gain,
                    });
                }
            }
        }

        Ok(EffectTable { effects, strengths })
    }
}
