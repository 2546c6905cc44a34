//! Command execution against a vibrator.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;
use awhaptic_effects::{Effect, Strength};
use awhaptic_registers::RegisterPort;
use awhaptic_vibrator::{CompletionHandle, CompletionScheduler, Vibrator, VibratorError};
use tracing::info;

use crate::Commands;
use crate::error::CliError;
use crate::output::Outcome;

/// Extra time allowed past the nominal delay when waiting for a completion.
const WAIT_SLACK: Duration = Duration::from_secs(2);

/// Run one command.
pub fn run<P: RegisterPort, S: CompletionScheduler>(
    vibrator: &Vibrator<P, S>,
    command: &Commands,
) -> Result<Outcome> {
    match command {
        Commands::Capabilities => Ok(Outcome::Capabilities(vibrator.capabilities())),
        Commands::Effects => Ok(Outcome::Effects {
            effects: vibrator.table().effects().collect(),
            strengths: vibrator.table().strengths().collect(),
        }),
        Commands::On { timeout_ms, wait } => {
            let (handle, receiver) = completion(*wait);
            vibrator.on(*timeout_ms, handle)?;
            let completed = await_completion(receiver, u64::from(*timeout_ms))?;
            Ok(Outcome::On {
                timeout_ms: *timeout_ms,
                completed,
            })
        }
        Commands::Off => {
            vibrator.off()?;
            Ok(Outcome::Off)
        }
        Commands::Perform {
            effect,
            strength,
            wait,
        } => perform(vibrator, *effect, *strength, *wait),
        Commands::Amplitude { value } => {
            vibrator.set_amplitude(*value)?;
            let strength = Strength::from_amplitude(*value)
                .ok_or_else(|| VibratorError::illegal_argument(format!("amplitude {value}")))?;
            Ok(Outcome::Amplitude {
                amplitude: *value,
                strength,
            })
        }
        Commands::Status => Ok(Outcome::Status(vibrator.probe())),
        Commands::Extended { operation } => {
            vibrator.invoke_extended(*operation)?;
            Ok(Outcome::Extended(*operation))
        }
    }
}

fn perform<P: RegisterPort, S: CompletionScheduler>(
    vibrator: &Vibrator<P, S>,
    effect: Effect,
    strength: Strength,
    wait: bool,
) -> Result<Outcome> {
    let (handle, receiver) = completion(wait);
    let duration_ms = vibrator.perform(effect, strength, handle)?;
    info!(%effect, %strength, duration_ms, "effect started");
    let delay_ms =
        u64::from(duration_ms) + u64::from(vibrator.config().perform_completion_margin_ms);
    let completed = await_completion(receiver, delay_ms)?;
    Ok(Outcome::Perform {
        effect,
        strength,
        duration_ms,
        completed,
    })
}

fn completion(wait: bool) -> (Option<CompletionHandle>, Option<Receiver<()>>) {
    if wait {
        let (sender, receiver) = mpsc::channel();
        (Some(CompletionHandle::from_sender(sender)), Some(receiver))
    } else {
        (None, None)
    }
}

/// Block until the completion arrives. Returns whether one was awaited.
fn await_completion(receiver: Option<Receiver<()>>, delay_ms: u64) -> Result<bool, CliError> {
    match receiver {
        Some(receiver) => {
            receiver.recv_timeout(Duration::from_millis(delay_ms) + WAIT_SLACK)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
