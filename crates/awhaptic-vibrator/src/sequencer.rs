//! Ordered register programming.
//!
//! Each step is one synchronous register write. The first failing write
//! aborts the sequence and is returned as is; writes that already landed
//! are left in place.

use awhaptic_registers::{Node, RegisterPort};
use tracing::trace;

use crate::error::{VibratorError, VibratorResult};
use crate::mode::OperatingMode;
use crate::request::PlaybackRequest;

const ACTIVATE_ON: i32 = 1;
const ACTIVATE_OFF: i32 = 0;

/// Issues the register writes that arm and trigger an [`OperatingMode`].
#[derive(Debug)]
pub struct ModeSequencer<'a, P: RegisterPort + ?Sized> {
    port: &'a P,
}

impl<'a, P: RegisterPort + ?Sized> ModeSequencer<'a, P> {
    /// Sequencer over `port`.
    pub fn new(port: &'a P) -> Self {
        Self { port }
    }

    fn write(&self, node: Node, value: i32) -> VibratorResult<()> {
        trace!(%node, value, "register write");
        self.port.write_int(node, value)?;
        Ok(())
    }

    /// Select the playback mode. Must come before any other programming.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the write fails.
    pub fn arm(&self, mode: OperatingMode) -> VibratorResult<()> {
        self.write(Node::ActivateMode, mode.register_value())
    }

    /// Select the RAM waveform.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the write fails.
    pub fn set_index(&self, index: u8) -> VibratorResult<()> {
        self.write(Node::Index, i32::from(index))
    }

    /// Set the loop repeat count.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the write fails.
    pub fn set_loop(&self, loop_count: u8) -> VibratorResult<()> {
        self.write(Node::Loop, i32::from(loop_count))
    }

    /// Set the output gain.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the write fails.
    pub fn set_strength(&self, gain: u8) -> VibratorResult<()> {
        self.write(Node::Gain, i32::from(gain))
    }

    /// Write the duration (when non-zero), then trigger playback.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::IllegalArgument`] if `duration_ms` does not
    /// fit the register, or [`VibratorError::Io`] if a write fails.
    pub fn activate(&self, duration_ms: u32) -> VibratorResult<()> {
        if duration_ms > 0 {
            let value = i32::try_from(duration_ms).map_err(|e| {
                VibratorError::illegal_argument(format!("duration {duration_ms}ms: {e}"))
            })?;
            self.write(Node::Duration, value)?;
        }
        self.write(Node::Activate, ACTIVATE_ON)
    }

    /// Stop playback.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the write fails.
    pub fn stop(&self) -> VibratorResult<()> {
        self.write(Node::Activate, ACTIVATE_OFF)
    }

    /// Arm, program and trigger `request`.
    ///
    /// Index and loop are only written for RAM modes.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails.
    pub fn program(&self, request: &PlaybackRequest) -> VibratorResult<()> {
        self.arm(request.mode)?;
        if request.mode.uses_waveform_table() {
            self.set_index(request.index)?;
            self.set_loop(request.loop_count)?;
        }
        self.activate(request.activation_timeout_ms)
    }
}
