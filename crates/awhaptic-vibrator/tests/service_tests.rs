//! Command-surface tests for the vibrator service.

use std::time::Duration;

use awhaptic_registers::RegisterError;
use awhaptic_test_helpers::prelude::*;
use awhaptic_vibrator::prelude::*;

fn memory_vibrator() -> (MemoryRegisterPort, Vibrator<MemoryRegisterPort>) {
    let port = MemoryRegisterPort::with_all_nodes();
    (port.clone(), Vibrator::new(port))
}

fn manual_vibrator() -> (
    MemoryRegisterPort,
    ManualScheduler,
    Vibrator<MemoryRegisterPort, ManualScheduler>,
) {
    let port = MemoryRegisterPort::with_all_nodes();
    let scheduler = ManualScheduler::new();
    let config = must(
        VibratorConfig::builder()
            .double_click_second_pulse(false)
            .build(),
    );
    let vibrator =
        must(Vibrator::with_config(port.clone(), config)).with_scheduler(scheduler.clone());
    (port, scheduler, vibrator)
}

// =========================================================================
// Queries
// =========================================================================

#[test]
fn supported_effects_are_the_reference_five_in_order() {
    let (_, vibrator) = memory_vibrator();
    let expected = vec![
        Effect::Click,
        Effect::DoubleClick,
        Effect::Tick,
        Effect::HeavyClick,
        Effect::TextureTick,
    ];
    assert_eq!(vibrator.supported_effects(), expected);
    assert_eq!(vibrator.supported_effects(), vibrator.supported_effects());
}

#[test]
fn capabilities_are_fixed() {
    let (port, vibrator) = memory_vibrator();
    let first = vibrator.capabilities();
    for _ in 0..10 {
        assert_eq!(vibrator.capabilities(), first);
    }
    assert_eq!(first.bits(), 7);
    assert!(first.contains(Capabilities::ON_CALLBACK));
    assert!(first.contains(Capabilities::PERFORM_CALLBACK));
    assert!(first.contains(Capabilities::AMPLITUDE_CONTROL));
    assert_eq!(port.write_count(), 0);
}

// =========================================================================
// perform
// =========================================================================

#[test]
fn perform_every_supported_pair_returns_nominal_duration() -> TestResult {
    let (_, _, vibrator) = manual_vibrator();
    for effect in vibrator.supported_effects() {
        for strength in Strength::ALL {
            let expected = if effect == Effect::DoubleClick { 120 } else { 12 };
            assert_eq!(vibrator.perform(effect, strength, None)?, expected);
        }
    }
    Ok(())
}

#[test]
fn perform_unsupported_effects_write_nothing() {
    let (port, scheduler, vibrator) = manual_vibrator();
    for effect in Effect::ALL {
        if vibrator.table().lookup_effect(effect).is_some() {
            continue;
        }
        let probe = CompletionProbe::new();
        let err = must_err(vibrator.perform(effect, Strength::Medium, Some(probe.handle())));
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert_eq!(err.exception_code(), -7);
        assert_eq!(probe.count(), 0);
    }
    assert_eq!(port.write_count(), 0);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn perform_heavy_click_programs_gain_before_mode() -> TestResult {
    let (port, _, vibrator) = manual_vibrator();
    vibrator.perform(Effect::HeavyClick, Strength::Light, None)?;
    assert_writes!(
        port,
        [
            (Node::Gain, 64),
            (Node::ActivateMode, 1),
            (Node::Index, 5),
            (Node::Loop, 0),
            (Node::Duration, 1),
            (Node::Activate, 1),
        ]
    );
    Ok(())
}

#[test]
fn perform_schedules_duration_plus_margin() -> TestResult {
    let (_, scheduler, vibrator) = manual_vibrator();
    let probe = CompletionProbe::new();
    vibrator.perform(Effect::Tick, Strength::Strong, Some(probe.handle()))?;
    vibrator.perform(Effect::DoubleClick, Strength::Strong, Some(probe.handle()))?;
    assert_eq!(
        scheduler.scheduled(),
        vec![
            ("perform", Duration::from_millis(22)),
            ("perform", Duration::from_millis(130)),
        ]
    );
    assert_eq!(probe.count(), 0);
    assert_eq!(scheduler.fire_all(), 2);
    assert_eq!(probe.count(), 2);
    Ok(())
}

#[test]
fn perform_with_custom_margin() -> TestResult {
    let port = MemoryRegisterPort::with_all_nodes();
    let scheduler = ManualScheduler::new();
    let config = VibratorConfig::builder()
        .perform_completion_margin_ms(0)
        .build()?;
    let vibrator = Vibrator::with_config(port, config)?.with_scheduler(scheduler.clone());
    vibrator.perform(Effect::Click, Strength::Medium, Some(CompletionProbe::new().handle()))?;
    assert_eq!(scheduler.scheduled(), vec![("perform", Duration::from_millis(12))]);
    Ok(())
}

#[test]
fn perform_io_failure_aborts_without_rollback_or_completion() {
    let (port, scheduler, vibrator) = manual_vibrator();
    port.fail_node(Node::Loop);
    let probe = CompletionProbe::new();
    let err = must_err(vibrator.perform(Effect::Click, Strength::Medium, Some(probe.handle())));
    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert_eq!(err.exception_code(), -5);
    assert_writes!(
        port,
        [(Node::Gain, 96), (Node::ActivateMode, 1), (Node::Index, 3)]
    );
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(probe.count(), 0);
}

#[test]
fn perform_missing_node_is_io_failure() {
    let port = MemoryRegisterPort::with_all_nodes();
    port.remove_node(Node::ActivateMode);
    let vibrator = Vibrator::new(port.clone());
    let err = must_err(vibrator.perform(Effect::Click, Strength::Light, None));
    assert!(matches!(err, VibratorError::Io(RegisterError::NotPresent { .. })));
    assert_writes!(port, [(Node::Gain, 64)]);
}

#[test]
fn custom_table_without_strength_rejects_it() -> TestResult {
    let table = EffectTable::builder()
        .effect(Effect::Thud, EffectDescriptor::new(7, 2))
        .strength(Strength::Light, 40)
        .strength(Strength::Medium, 80)
        .build()?;
    let (port, _, vibrator) = manual_vibrator();
    let vibrator = vibrator.with_table(table);

    assert_eq!(vibrator.supported_effects(), vec![Effect::Thud]);
    let err = must_err(vibrator.perform(Effect::Thud, Strength::Strong, None));
    assert!(matches!(err, VibratorError::UnsupportedStrength(Strength::Strong)));
    assert_eq!(port.write_count(), 0);

    assert_eq!(vibrator.perform(Effect::Thud, Strength::Medium, None)?, 12);
    assert_eq!(port.value(Node::ActivateMode).as_deref(), Some("5"));
    assert_eq!(port.value(Node::Loop).as_deref(), Some("2"));
    Ok(())
}

// =========================================================================
// on / off
// =========================================================================

#[test]
fn on_schedules_exact_timeout() -> TestResult {
    let (port, scheduler, vibrator) = manual_vibrator();
    let probe = CompletionProbe::new();
    vibrator.on(200, Some(probe.handle()))?;
    assert_writes!(
        port,
        [
            (Node::ActivateMode, 4),
            (Node::Duration, 200),
            (Node::Activate, 1),
        ]
    );
    assert_eq!(scheduler.scheduled(), vec![("on", Duration::from_millis(200))]);
    Ok(())
}

#[test]
fn on_zero_timeout_skips_duration() -> TestResult {
    let (port, _, vibrator) = manual_vibrator();
    vibrator.on(0, None)?;
    assert_writes!(port, [(Node::ActivateMode, 4), (Node::Activate, 1)]);
    Ok(())
}

#[test]
fn off_does_not_cancel_scheduled_completion() -> TestResult {
    let (port, scheduler, vibrator) = manual_vibrator();
    let probe = CompletionProbe::new();
    vibrator.on(1000, Some(probe.handle()))?;
    vibrator.off()?;
    assert_eq!(port.value(Node::Activate).as_deref(), Some("0"));
    assert_eq!(scheduler.pending(), 1);
    scheduler.fire_all();
    assert_eq!(probe.count(), 1);
    Ok(())
}

#[test]
fn scheduling_failure_returns_handle_after_programming() -> TestResult {
    let port = MemoryRegisterPort::with_all_nodes();
    let vibrator = Vibrator::new(port.clone()).with_scheduler(RejectingScheduler);
    let probe = CompletionProbe::new();

    let err = must_err(vibrator.on(50, Some(probe.handle())));
    assert_eq!(err.kind(), ErrorKind::SchedulingFailure);
    assert_eq!(err.exception_code(), -5);
    assert_eq!(port.value(Node::Activate).as_deref(), Some("1"));
    assert_eq!(probe.count(), 0);

    let handle = must_some(err.into_completion_handle(), "handle returned");
    handle.complete()?;
    assert_eq!(probe.count(), 1);
    Ok(())
}

#[test]
fn double_click_plays_both_pulses_when_scheduling_fails() -> TestResult {
    let port = MemoryRegisterPort::with_all_nodes();
    let vibrator = Vibrator::new(port.clone()).with_scheduler(RejectingScheduler);
    let probe = CompletionProbe::new();

    let err = must_err(vibrator.perform(
        Effect::DoubleClick,
        Strength::Medium,
        Some(probe.handle()),
    ));
    assert_eq!(err.kind(), ErrorKind::SchedulingFailure);

    let pulses = port
        .int_writes()
        .into_iter()
        .filter(|write| *write == (Node::Activate, 1))
        .count();
    assert_eq!(pulses, 2);
    assert_eq!(probe.count(), 0);

    let handle = must_some(err.into_completion_handle(), "handle returned");
    handle.complete()?;
    assert_eq!(probe.count(), 1);
    Ok(())
}

#[test]
fn commands_without_completion_never_touch_the_scheduler() -> TestResult {
    let port = MemoryRegisterPort::with_all_nodes();
    let vibrator = Vibrator::new(port).with_scheduler(RejectingScheduler);
    vibrator.on(10, None)?;
    vibrator.perform(Effect::Click, Strength::Light, None)?;
    vibrator.off()?;
    Ok(())
}

// =========================================================================
// set_amplitude
// =========================================================================

#[test]
fn amplitude_band_edges() -> TestResult {
    let (port, vibrator) = memory_vibrator();
    for (amplitude, gain) in [(0.33_f32, 64), (0.34, 96), (0.66, 96), (0.67, 128), (1.0, 128)] {
        port.clear_journal();
        vibrator.set_amplitude(amplitude)?;
        assert_writes!(port, [(Node::Gain, gain)]);
    }
    Ok(())
}

#[test]
fn amplitude_out_of_range_is_illegal_argument() {
    let (port, vibrator) = memory_vibrator();
    for amplitude in [0.0_f32, -0.5, 1.01, f32::INFINITY, f32::NAN] {
        let err = must_err(vibrator.set_amplitude(amplitude));
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        assert_eq!(err.exception_code(), -3);
    }
    assert_eq!(port.write_count(), 0);
}

// =========================================================================
// extended operations and diagnostics
// =========================================================================

#[test]
fn every_extended_operation_is_unsupported() {
    let (port, vibrator) = memory_vibrator();
    for op in ExtendedOperation::ALL {
        let err = must_err(vibrator.invoke_extended(op));
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(err.to_string().contains(op.name()));
    }
    assert_eq!(port.write_count(), 0);
}

#[test]
fn probe_reports_gain_after_amplitude() -> TestResult {
    let (_, vibrator) = memory_vibrator();
    vibrator.set_amplitude(0.9)?;
    let report = vibrator.probe();
    assert!(report.is_complete());
    assert_eq!(report.gain, 128);
    Ok(())
}
