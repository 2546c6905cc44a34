//! Output formatting for CLI responses

use anyhow::Error;
use awhaptic_effects::{Effect, EffectDescriptor, Strength};
use awhaptic_registers::RegisterWrite;
use awhaptic_vibrator::{Capabilities, ExtendedOperation, NodeReport};
use colored::Colorize;
use serde_json::{Value, json};

use crate::error::error_type_name;

/// Result of one successful command.
#[derive(Debug)]
pub enum Outcome {
    Capabilities(Capabilities),
    Effects {
        effects: Vec<(Effect, EffectDescriptor)>,
        strengths: Vec<(Strength, u8)>,
    },
    On {
        timeout_ms: u32,
        completed: bool,
    },
    Off,
    Perform {
        effect: Effect,
        strength: Strength,
        duration_ms: u32,
        completed: bool,
    },
    Amplitude {
        amplitude: f32,
        strength: Strength,
    },
    Status(NodeReport),
    Extended(ExtendedOperation),
}

impl Outcome {
    fn to_json(&self) -> Value {
        match self {
            Outcome::Capabilities(caps) => json!({
                "capabilities": caps.bits(),
                "names": caps.names(),
            }),
            Outcome::Effects { effects, strengths } => json!({
                "effects": effects
                    .iter()
                    .map(|(effect, d)| json!({
                        "effect": effect.name(),
                        "index": d.hardware_index,
                        "loop": d.loop_count,
                    }))
                    .collect::<Vec<_>>(),
                "strengths": strengths
                    .iter()
                    .map(|(strength, gain)| json!({ "strength": strength.name(), "gain": gain }))
                    .collect::<Vec<_>>(),
            }),
            Outcome::On {
                timeout_ms,
                completed,
            } => json!({ "command": "on", "timeout_ms": timeout_ms, "completed": completed }),
            Outcome::Off => json!({ "command": "off" }),
            Outcome::Perform {
                effect,
                strength,
                duration_ms,
                completed,
            } => json!({
                "command": "perform",
                "effect": effect.name(),
                "strength": strength.name(),
                "duration_ms": duration_ms,
                "completed": completed,
            }),
            Outcome::Amplitude {
                amplitude,
                strength,
            } => json!({
                "command": "amplitude",
                "amplitude": amplitude,
                "strength": strength.name(),
            }),
            Outcome::Status(report) => json!({ "status": report }),
            Outcome::Extended(operation) => {
                json!({ "command": "extended", "operation": operation.name() })
            }
        }
    }

    fn print_human(&self) {
        match self {
            Outcome::Capabilities(caps) => {
                println!("{} {:#x}", "Capabilities:".bold(), caps.bits());
                for name in caps.names() {
                    println!("  {} {}", "●".green(), name);
                }
            }
            Outcome::Effects { effects, strengths } => {
                println!("{}", "Supported effects:".bold());
                for (effect, d) in effects {
                    println!(
                        "  {:<14} index {:<3} loop {}",
                        effect.name(),
                        d.hardware_index,
                        d.loop_count
                    );
                }
                println!("{}", "Strengths:".bold());
                for (strength, gain) in strengths {
                    println!("  {:<14} gain {gain}", strength.name());
                }
            }
            Outcome::On {
                timeout_ms,
                completed,
            } => {
                println!("{} vibrating for {timeout_ms}ms", "✓".green());
                if *completed {
                    println!("{} completed", "✓".green());
                }
            }
            Outcome::Off => println!("{} stopped", "✓".green()),
            Outcome::Perform {
                effect,
                strength,
                duration_ms,
                completed,
            } => {
                println!(
                    "{} {effect} at {strength}: {duration_ms}ms",
                    "✓".green()
                );
                if *completed {
                    println!("{} completed", "✓".green());
                }
            }
            Outcome::Amplitude {
                amplitude,
                strength,
            } => println!("{} amplitude {amplitude} -> {strength}", "✓".green()),
            Outcome::Status(report) => {
                println!("{}", "Control nodes:".bold());
                for node in &report.present {
                    println!("  {} {}", "●".green(), node.file_name());
                }
                for node in &report.missing {
                    println!("  {} {} {}", "●".red(), node.file_name(), "(missing)".dimmed());
                }
                println!("Gain: {}", report.gain);
            }
            Outcome::Extended(operation) => println!("{} {operation}", "✓".green()),
        }
    }
}

fn writes_json(writes: &[RegisterWrite]) -> Value {
    Value::Array(
        writes
            .iter()
            .map(|w| json!({ "node": w.node.file_name(), "value": w.value }))
            .collect(),
    )
}

/// Print a successful outcome, with the dry-run register journal when given.
pub fn print_outcome(outcome: &Outcome, json: bool, writes: Option<&[RegisterWrite]>) {
    if json {
        let mut output = json!({ "success": true });
        if let (Value::Object(map), Value::Object(fields)) = (&mut output, outcome.to_json()) {
            map.extend(fields);
            if let Some(writes) = writes {
                map.insert("writes".to_string(), writes_json(writes));
            }
        }
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format output as JSON: {e}"),
        }
    } else {
        outcome.print_human();
        if let Some(writes) = writes {
            println!("{}", "Register writes (dry run):".dimmed());
            for w in writes {
                println!("  {} <- {}", w.node.file_name(), w.value);
            }
        }
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}
