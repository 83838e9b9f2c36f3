//! Semantic invariants of the gate state.

use crate::core::gate::StepGate;

/// Check structural invariants the transition rules are meant to preserve:
/// - at least two steps
/// - completed ids within range
/// - non-final completions form a contiguous prefix starting at 1
/// - the running step is within range, has its prerequisites completed, and
///   (unless final) is not already completed
/// - the active marker is display-only but must still point at a real,
///   incomplete step, and must be absent while running or when all complete
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_invariants(gate: &StepGate) -> Vec<String> {
    let mut errors = Vec::new();
    let total = gate.total();

    if total < 2 {
        errors.push(format!("gate must cover at least 2 steps, has {total}"));
    }

    let completed = gate.completed_steps();
    for step in &completed {
        if *step < 1 || *step > total {
            errors.push(format!("completed step {step} outside 1..={total}"));
        }
    }

    let non_final: Vec<u8> = completed
        .iter()
        .copied()
        .filter(|step| *step < total)
        .collect();
    let expected_prefix: Vec<u8> = (1..=non_final.len() as u8).collect();
    if non_final != expected_prefix {
        errors.push(format!(
            "non-final completions must form a prefix from 1, got {non_final:?}"
        ));
    }

    if let Some(running) = gate.running() {
        if running < 1 || running > total {
            errors.push(format!("running step {running} outside 1..={total}"));
        } else {
            if !gate.can_run(running) {
                errors.push(format!(
                    "running step {running} lacks completed prerequisites"
                ));
            }
            if running != total && gate.is_completed(running) {
                errors.push(format!("non-final step {running} running after completion"));
            }
        }
        if gate.active().is_some() {
            errors.push("active marker retained while a step is running".to_string());
        }
    }

    if let Some(active) = gate.active() {
        if active < 1 || active > total {
            errors.push(format!("active step {active} outside 1..={total}"));
        }
        if gate.is_completed(active) {
            errors.push(format!("active step {active} is already completed"));
        }
    }
    if gate.all_complete() && gate.active().is_some() {
        errors.push("active marker set although all steps completed".to_string());
    }

    errors
}
