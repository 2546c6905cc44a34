//! The vibrator command surface.

use std::thread;
use std::time::Duration;

use awhaptic_effects::{Effect, EffectTable, Strength};
use awhaptic_registers::{Node, RegisterPort, SysfsRegisterPort};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::capabilities::Capabilities;
use crate::completion::CompletionHandle;
use crate::config::VibratorConfig;
use crate::error::{VibratorError, VibratorResult};
use crate::extended::ExtendedOperation;
use crate::request::{PlaybackRequest, RAM_ACTIVATION_TIMEOUT_MS};
use crate::scheduler::{CompletionScheduler, ThreadScheduler, TimedTask};
use crate::sequencer::ModeSequencer;

/// Nominal playback time of every effect except DOUBLE_CLICK, in milliseconds.
pub const EFFECT_DURATION_MS: u32 = 12;

/// Nominal playback time of DOUBLE_CLICK, in milliseconds.
pub const DOUBLE_CLICK_DURATION_MS: u32 = 120;

/// Fixed playback time of `effect`. Not read from hardware.
#[must_use]
pub const fn nominal_duration_ms(effect: Effect) -> u32 {
    match effect {
        Effect::DoubleClick => DOUBLE_CLICK_DURATION_MS,
        _ => EFFECT_DURATION_MS,
    }
}

/// Snapshot of the control nodes, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    /// Nodes that exist.
    pub present: Vec<Node>,
    /// Nodes that do not exist.
    pub missing: Vec<Node>,
    /// Current gain, or `-1` when unreadable.
    pub gain: i32,
}

impl NodeReport {
    /// Whether every node exists.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Register-driven vibrator.
///
/// Commands run on the caller's thread and are serialized against each
/// other so their register sequences never interleave. The lock is not
/// held while DOUBLE_CLICK waits between its pulses. Completions are
/// handed to the scheduler `S` and delivered off the caller's thread.
#[derive(Debug)]
pub struct Vibrator<P: RegisterPort, S: CompletionScheduler = ThreadScheduler> {
    port: P,
    scheduler: S,
    table: EffectTable,
    config: VibratorConfig,
    command_lock: Mutex<()>,
}

impl<P: RegisterPort> Vibrator<P, ThreadScheduler> {
    /// Vibrator over `port` with the default configuration and the
    /// reference effect table.
    pub fn new(port: P) -> Self {
        Self {
            port,
            scheduler: ThreadScheduler::new(),
            table: EffectTable::reference().clone(),
            config: VibratorConfig::default(),
            command_lock: Mutex::new(()),
        }
    }

    /// Vibrator over `port` with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::InvalidConfiguration`] if `config` fails validation.
    pub fn with_config(port: P, config: VibratorConfig) -> VibratorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(port)
        })
    }
}

impl Vibrator<SysfsRegisterPort, ThreadScheduler> {
    /// Vibrator over the sysfs nodes named by `config.registers`.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::InvalidConfiguration`] if `config` fails validation.
    pub fn from_config(config: VibratorConfig) -> VibratorResult<Self> {
        config.validate()?;
        let port = SysfsRegisterPort::new(config.registers.clone())
            .map_err(|e| VibratorError::invalid_configuration(e.to_string()))?;
        Self::with_config(port, config)
    }
}

impl<P: RegisterPort, S: CompletionScheduler> Vibrator<P, S> {
    /// Replace the completion scheduler.
    pub fn with_scheduler<S2: CompletionScheduler>(self, scheduler: S2) -> Vibrator<P, S2> {
        Vibrator {
            port: self.port,
            scheduler,
            table: self.table,
            config: self.config,
            command_lock: self.command_lock,
        }
    }

    /// Replace the effect table.
    #[must_use]
    pub fn with_table(mut self, table: EffectTable) -> Self {
        self.table = table;
        self
    }

    /// The register port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// The configuration in use.
    pub fn config(&self) -> &VibratorConfig {
        &self.config
    }

    /// The effect table in use.
    pub fn table(&self) -> &EffectTable {
        &self.table
    }

    /// Advertised capabilities. Always [`Capabilities::DEVICE`].
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::DEVICE
    }

    /// Every effect in the table, in table order.
    pub fn supported_effects(&self) -> Vec<Effect> {
        self.table.supported_effects()
    }

    /// Stop playback.
    ///
    /// Completions already scheduled still fire.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::Io`] if the activate write fails.
    pub fn off(&self) -> VibratorResult<()> {
        let _guard = self.command_lock.lock();
        debug!("off");
        ModeSequencer::new(&self.port).stop()
    }

    /// Vibrate continuously for `timeout_ms`.
    ///
    /// Returns once the hardware is armed. When `completion` is given it
    /// fires once, `timeout_ms` after the call, off the caller's thread.
    ///
    /// # Errors
    ///
    /// - [`VibratorError::IllegalArgument`] if `timeout_ms` exceeds `i32::MAX`;
    ///   nothing is written.
    /// - [`VibratorError::Io`] if a register write fails; the remaining
    ///   writes are skipped and `completion` is dropped un-invoked.
    /// - [`VibratorError::Scheduling`] if the completion could not be
    ///   scheduled; the hardware is already running and the handle is
    ///   returned inside the error.
    pub fn on(&self, timeout_ms: u32, completion: Option<CompletionHandle>) -> VibratorResult<()> {
        if i32::try_from(timeout_ms).is_err() {
            return Err(VibratorError::illegal_argument(format!(
                "timeout {timeout_ms}ms exceeds the register range"
            )));
        }

        let _guard = self.command_lock.lock();
        debug!(timeout_ms, has_completion = completion.is_some(), "on");
        ModeSequencer::new(&self.port).program(&PlaybackRequest::continuous(timeout_ms))?;

        if let Some(handle) = completion {
            self.schedule("on", timeout_ms, handle)?;
        }
        Ok(())
    }

    /// Play `effect` at `strength` and return its nominal duration in milliseconds.
    ///
    /// When `completion` is given it fires once, the nominal duration plus
    /// the configured margin after the first activation.
    ///
    /// DOUBLE_CLICK additionally blocks the caller for its nominal
    /// duration and then re-triggers the armed waveform for the second
    /// pulse, unless `double_click_second_pulse` is disabled.
    ///
    /// # Errors
    ///
    /// - [`VibratorError::UnsupportedEffect`] / [`VibratorError::UnsupportedStrength`]
    ///   if either is missing from the table; nothing is written.
    /// - [`VibratorError::Io`] if a register write fails.
    /// - [`VibratorError::Scheduling`] if the completion could not be
    ///   scheduled. The effect still plays in full, DOUBLE_CLICK's second
    ///   pulse included, and the handle is returned inside the error.
    pub fn perform(
        &self,
        effect: Effect,
        strength: Strength,
        completion: Option<CompletionHandle>,
    ) -> VibratorResult<u32> {
        let descriptor = self
            .table
            .lookup_effect(effect)
            .ok_or(VibratorError::UnsupportedEffect(effect))?;
        let gain = self
            .table
            .lookup_strength(strength)
            .ok_or(VibratorError::UnsupportedStrength(strength))?;

        let duration_ms = nominal_duration_ms(effect);
        let scheduled = {
            let _guard = self.command_lock.lock();
            debug!(%effect, %strength, has_completion = completion.is_some(), "perform");

            let sequencer = ModeSequencer::new(&self.port);
            sequencer.set_strength(gain)?;
            sequencer.program(&PlaybackRequest::from_descriptor(&descriptor))?;

            match completion {
                Some(handle) => {
                    let delay_ms =
                        duration_ms.saturating_add(self.config.perform_completion_margin_ms);
                    self.schedule("perform", delay_ms, handle)
                }
                None => Ok(()),
            }
        };

        // The lock is released for the gap so other commands, `off` included,
        // can land between the two pulses.
        if effect == Effect::DoubleClick && self.config.double_click_second_pulse {
            thread::sleep(Duration::from_millis(u64::from(duration_ms)));
            let _guard = self.command_lock.lock();
            debug!("double click second pulse");
            ModeSequencer::new(&self.port).activate(RAM_ACTIVATION_TIMEOUT_MS)?;
        }

        scheduled.map(|()| duration_ms)
    }

    /// Set the output gain from a continuous amplitude in `(0, 1]`.
    ///
    /// Activation state is left alone.
    ///
    /// # Errors
    ///
    /// - [`VibratorError::IllegalArgument`] if `amplitude` is outside `(0, 1]` or NaN.
    /// - [`VibratorError::UnsupportedStrength`] if the resolved strength has no gain.
    /// - [`VibratorError::Io`] if the gain write fails.
    pub fn set_amplitude(&self, amplitude: f32) -> VibratorResult<()> {
        let strength = Strength::from_amplitude(amplitude).ok_or_else(|| {
            VibratorError::illegal_argument(format!("amplitude {amplitude} is outside (0, 1]"))
        })?;
        let gain = self
            .table
            .lookup_strength(strength)
            .ok_or(VibratorError::UnsupportedStrength(strength))?;

        let _guard = self.command_lock.lock();
        debug!(amplitude, %strength, gain, "set amplitude");
        ModeSequencer::new(&self.port).set_strength(gain)
    }

    /// Dispatch an extended operation. None are implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`VibratorError::UnsupportedOperation`].
    pub fn invoke_extended(&self, operation: ExtendedOperation) -> VibratorResult<()> {
        debug!(%operation, "extended operation rejected");
        Err(VibratorError::UnsupportedOperation(operation))
    }

    /// Report which nodes exist and the current gain. Never fails.
    pub fn probe(&self) -> NodeReport {
        let (present, missing): (Vec<Node>, Vec<Node>) =
            Node::ALL.into_iter().partition(|node| self.port.exists(*node));
        for node in &missing {
            warn!(%node, "control node missing");
        }
        NodeReport {
            present,
            missing,
            gain: self.port.read_int(Node::Gain, -1),
        }
    }

    fn schedule(
        &self,
        label: &'static str,
        delay_ms: u32,
        handle: CompletionHandle,
    ) -> VibratorResult<()> {
        debug!(label, delay_ms, "scheduling completion");
        let delay = Duration::from_millis(u64::from(delay_ms));
        self.scheduler
            .schedule(TimedTask::new(label, delay, handle))
            .map_err(VibratorError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awhaptic_effects::EffectDescriptor;
    use awhaptic_registers::MemoryRegisterPort;

    fn vibrator() -> (MemoryRegisterPort, Vibrator<MemoryRegisterPort>) {
        let port = MemoryRegisterPort::with_all_nodes();
        (port.clone(), Vibrator::new(port))
    }

    #[test]
    fn test_nominal_durations() {
        assert_eq!(nominal_duration_ms(Effect::DoubleClick), 120);
        assert_eq!(nominal_duration_ms(Effect::Click), 12);
        assert_eq!(nominal_duration_ms(Effect::TextureTick), 12);
    }

    #[test]
    fn test_perform_click_write_order() -> Result<(), Box<dyn std::error::Error>> {
        let (port, vibrator) = vibrator();
        assert_eq!(vibrator.perform(Effect::Click, Strength::Strong, None)?, 12);
        assert_eq!(
            port.int_writes(),
            vec![
                (Node::Gain, 128),
                (Node::ActivateMode, 1),
                (Node::Index, 3),
                (Node::Loop, 0),
                (Node::Duration, 1),
                (Node::Activate, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_perform_texture_tick_uses_ram_loop() -> Result<(), Box<dyn std::error::Error>> {
        let (port, vibrator) = vibrator();
        vibrator.perform(Effect::TextureTick, Strength::Light, None)?;
        assert_eq!(port.value(Node::ActivateMode).as_deref(), Some("5"));
        assert_eq!(port.value(Node::Index).as_deref(), Some("4"));
        assert_eq!(port.value(Node::Loop).as_deref(), Some("15"));
        assert_eq!(port.value(Node::Gain).as_deref(), Some("64"));
        Ok(())
    }

    #[test]
    fn test_perform_unknown_effect_writes_nothing() {
        let (port, vibrator) = vibrator();
        let result = vibrator.perform(Effect::Thud, Strength::Medium, None);
        assert!(matches!(result, Err(VibratorError::UnsupportedEffect(Effect::Thud))));
        assert_eq!(port.write_count(), 0);
    }

    #[test]
    fn test_perform_unknown_strength_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let table = EffectTable::builder()
            .effect(Effect::Click, EffectDescriptor::new(3, 0))
            .strength(Strength::Light, 64)
            .build()?;
        let (port, vibrator) = vibrator();
        let vibrator = vibrator.with_table(table);
        let result = vibrator.perform(Effect::Click, Strength::Strong, None);
        assert!(matches!(
            result,
            Err(VibratorError::UnsupportedStrength(Strength::Strong))
        ));
        assert_eq!(port.write_count(), 0);
        Ok(())
    }

    #[test]
    fn test_on_writes_continuous_sequence() -> Result<(), Box<dyn std::error::Error>> {
        let (port, vibrator) = vibrator();
        vibrator.on(500, None)?;
        assert_eq!(
            port.int_writes(),
            vec![
                (Node::ActivateMode, 4),
                (Node::Duration, 500),
                (Node::Activate, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_on_rejects_oversized_timeout() {
        let (port, vibrator) = vibrator();
        let result = vibrator.on(u32::MAX, None);
        assert!(matches!(result, Err(VibratorError::IllegalArgument(_))));
        assert_eq!(port.write_count(), 0);
    }

    #[test]
    fn test_off_writes_activate_zero() -> Result<(), Box<dyn std::error::Error>> {
        let (port, vibrator) = vibrator();
        vibrator.off()?;
        assert_eq!(port.int_writes(), vec![(Node::Activate, 0)]);
        Ok(())
    }

    #[test]
    fn test_off_missing_node_is_io() {
        let port = MemoryRegisterPort::with_nodes(&[Node::Gain]);
        let vibrator = Vibrator::new(port);
        assert!(matches!(vibrator.off(), Err(VibratorError::Io(_))));
    }

    #[test]
    fn test_set_amplitude_only_touches_gain() -> Result<(), Box<dyn std::error::Error>> {
        let (port, vibrator) = vibrator();
        vibrator.set_amplitude(0.5)?;
        assert_eq!(port.int_writes(), vec![(Node::Gain, 96)]);
        Ok(())
    }

    #[test]
    fn test_set_amplitude_nan_rejected() {
        let (port, vibrator) = vibrator();
        assert!(matches!(
            vibrator.set_amplitude(f32::NAN),
            Err(VibratorError::IllegalArgument(_))
        ));
        assert_eq!(port.write_count(), 0);
    }

    #[test]
    fn test_double_click_second_pulse_disabled() -> Result<(), Box<dyn std::error::Error>> {
        let port = MemoryRegisterPort::with_all_nodes();
        let config = VibratorConfig::builder()
            .double_click_second_pulse(false)
            .build()?;
        let vibrator = Vibrator::with_config(port.clone(), config)?;
        let start = std::time::Instant::now();
        assert_eq!(vibrator.perform(Effect::DoubleClick, Strength::Medium, None)?, 120);
        assert!(start.elapsed() < Duration::from_millis(100));
        let activations = port
            .int_writes()
            .into_iter()
            .filter(|w| *w == (Node::Activate, 1))
            .count();
        assert_eq!(activations, 1);
        Ok(())
    }

    #[test]
    fn test_probe_reports_missing_nodes() {
        let port = MemoryRegisterPort::with_nodes(&[Node::Activate, Node::Gain]);
        let vibrator = Vibrator::new(port);
        let report = vibrator.probe();
        assert_eq!(report.present, vec![Node::Activate, Node::Gain]);
        assert_eq!(report.missing.len(), 4);
        assert_eq!(report.gain, 0);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_probe_without_gain_node() {
        let port = MemoryRegisterPort::new();
        let report = Vibrator::new(port).probe();
        assert_eq!(report.gain, -1);
        assert!(report.present.is_empty());
    }

    #[test]
    fn test_extended_operations_unsupported() {
        let (port, vibrator) = vibrator();
        for op in ExtendedOperation::ALL {
            let err = vibrator.invoke_extended(op);
            assert!(matches!(err, Err(VibratorError::UnsupportedOperation(o)) if o == op));
        }
        assert_eq!(port.write_count(), 0);
    }
}
