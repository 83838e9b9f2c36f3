//! Ordered step gating for the walkthrough.
//!
//! The gate decides which step may legally run next. Steps 1..N-1 complete
//! exactly once and in order; the final step is repeatable and may re-enter
//! `running` after completion without a reset.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::types::{GateSnapshot, StepPhase, StepView};

/// Rejection reasons for gate transitions.
///
/// All variants are non-fatal: a rejected transition leaves the gate
/// unchanged and is safe to retry once its precondition holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Prerequisite steps are incomplete. Carries the missing ids for the
    /// user-facing blocking notice.
    OutOfOrder { step: u8, missing: Vec<u8> },
    /// A non-repeatable step was asked to run again.
    AlreadyCompleted { step: u8 },
    /// Another step is mid-run; the gate holds no queue.
    Busy { step: u8, running: u8 },
    /// Step id outside `[1, total]`.
    UnknownStep { step: u8, total: u8 },
    /// `complete` was called for a step that is not the running one.
    NotRunning { step: u8, running: Option<u8> },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::OutOfOrder { step, missing } => {
                let missing = missing
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "step {step} is out of order: run step(s) {missing} first")
            }
            GateError::AlreadyCompleted { step } => {
                write!(f, "step {step} is already completed and cannot be re-run")
            }
            GateError::Busy { step, running } => {
                write!(f, "cannot start step {step}: step {running} is still running")
            }
            GateError::UnknownStep { step, total } => {
                write!(f, "unknown step {step} (valid steps are 1..={total})")
            }
            GateError::NotRunning { step, running: Some(running) } => {
                write!(f, "cannot complete step {step}: step {running} is running")
            }
            GateError::NotRunning { step, running: None } => {
                write!(f, "cannot complete step {step}: no step is running")
            }
        }
    }
}

impl std::error::Error for GateError {}

/// Result of a successful [`StepGate::complete`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteOutcome {
    pub step: u8,
    /// Step now carrying the active display marker, if any.
    pub active: Option<u8>,
    pub all_complete: bool,
    /// True exactly once per full run-through, when the last open step
    /// completes. Idempotent thereafter.
    pub completion_fired: bool,
}

/// Step-gating state machine.
///
/// State: the set of completed steps, the single running step (if any), and
/// the display-only active marker. The active marker never influences
/// [`StepGate::can_run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGate {
    total: u8,
    completed: BTreeSet<u8>,
    running: Option<u8>,
    active: Option<u8>,
    completion_emitted: bool,
}

impl StepGate {
    /// Create a gate over steps `1..=total` with step 1 active.
    pub fn new(total: u8) -> Self {
        Self {
            total,
            completed: BTreeSet::new(),
            running: None,
            active: Some(1),
            completion_emitted: false,
        }
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn running(&self) -> Option<u8> {
        self.running
    }

    pub fn active(&self) -> Option<u8> {
        self.active
    }

    pub fn is_completed(&self, step: u8) -> bool {
        self.completed.contains(&step)
    }

    pub fn all_complete(&self) -> bool {
        self.completed.len() == usize::from(self.total)
    }

    pub fn completion_emitted(&self) -> bool {
        self.completion_emitted
    }

    /// Completed step ids in ascending order.
    pub fn completed_steps(&self) -> Vec<u8> {
        self.completed.iter().copied().collect()
    }

    /// First step that has never completed, in step order.
    pub fn first_open(&self) -> Option<u8> {
        (1..=self.total).find(|step| !self.completed.contains(step))
    }

    /// Whether `step` may legally run now.
    ///
    /// The final step requires every other step to be completed but may run
    /// again regardless of its own status. Any other step requires exactly
    /// its predecessors. Out-of-range ids are never runnable. No side
    /// effects.
    pub fn can_run(&self, step: u8) -> bool {
        if step < 1 || step > self.total {
            return false;
        }
        self.missing_prerequisites(step).is_empty()
    }

    /// Mark `step` as running.
    pub fn begin(&mut self, step: u8) -> Result<(), GateError> {
        if step < 1 || step > self.total {
            return Err(GateError::UnknownStep {
                step,
                total: self.total,
            });
        }
        if let Some(running) = self.running {
            return Err(GateError::Busy { step, running });
        }
        let missing = self.missing_prerequisites(step);
        if !missing.is_empty() {
            return Err(GateError::OutOfOrder { step, missing });
        }
        if step != self.total && self.completed.contains(&step) {
            return Err(GateError::AlreadyCompleted { step });
        }

        self.running = Some(step);
        if self.active == Some(step) {
            self.active = None;
        }
        Ok(())
    }

    /// Record completion of the running step.
    ///
    /// Advances the active marker to the next step unless that step already
    /// completed (possible only around re-runs of the final step). Reports
    /// the one-shot completion signal through the returned outcome.
    pub fn complete(&mut self, step: u8) -> Result<CompleteOutcome, GateError> {
        if self.running != Some(step) {
            return Err(GateError::NotRunning {
                step,
                running: self.running,
            });
        }

        self.running = None;
        self.completed.insert(step);

        let all_complete = self.all_complete();
        if all_complete {
            self.active = None;
        } else if step < self.total {
            let next = step + 1;
            if !self.completed.contains(&next) {
                self.active = Some(next);
            }
        }

        let completion_fired = all_complete && !self.completion_emitted;
        if completion_fired {
            self.completion_emitted = true;
        }

        Ok(CompleteOutcome {
            step,
            active: self.active,
            all_complete,
            completion_fired,
        })
    }

    /// Reinitialize to the start state. No failure modes.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.running = None;
        self.active = Some(1);
        self.completion_emitted = false;
    }

    pub fn phase(&self, step: u8) -> StepPhase {
        if self.running == Some(step) {
            StepPhase::Running
        } else if self.completed.contains(&step) {
            StepPhase::Completed
        } else if self.active == Some(step) {
            StepPhase::Active
        } else {
            StepPhase::Locked
        }
    }

    /// Per-step phase view for presentation.
    pub fn snapshot(&self) -> GateSnapshot {
        GateSnapshot {
            steps: (1..=self.total)
                .map(|id| StepView {
                    id,
                    phase: self.phase(id),
                })
                .collect(),
        }
    }

    fn missing_prerequisites(&self, step: u8) -> Vec<u8> {
        let upto = if step == self.total { self.total } else { step };
        (1..upto)
            .filter(|prior| !self.completed.contains(prior))
            .collect()
    }

    /// Assemble a gate from raw parts, bypassing transition rules.
    #[cfg(any(test, feature = "test-support"))]
    pub fn from_parts(
        total: u8,
        completed: &[u8],
        running: Option<u8>,
        active: Option<u8>,
    ) -> Self {
        Self {
            total,
            completed: completed.iter().copied().collect(),
            running,
            active,
            completion_emitted: false,
        }
    }
}
