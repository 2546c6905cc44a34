//! Haptic effect and strength tables.
//!
//! This crate holds the static vocabulary of the vibrator:
//!
//! - [`Effect`] - the platform's named haptic patterns
//! - [`Strength`] - coarse intensity tiers, and the amplitude banding onto them
//! - [`EffectTable`] - the immutable mapping from effect to RAM waveform
//!   ([`EffectDescriptor`]) and from strength to gain
//!
//! Tables are built once and never mutated, so they can be shared between
//! threads without synchronization.
//!
//! # Example
//!
//! ```
//! use awhaptic_effects::{Effect, EffectTable, Strength};
//!
//! let table = EffectTable::reference();
//! let click = table.lookup_effect(Effect::Click).expect("click is supported");
//! assert_eq!(click.hardware_index, 3);
//! assert_eq!(table.lookup_strength(Strength::Medium), Some(96));
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod effect;
pub mod error;
pub mod strength;
pub mod table;

pub use constants::*;
pub use effect::Effect;
pub use error::{EffectError, EffectResult};
pub use strength::Strength;
pub use table::{
    EffectDescriptor, EffectTable, EffectTableBuilder, REFERENCE_EFFECTS, REFERENCE_STRENGTHS,
};
