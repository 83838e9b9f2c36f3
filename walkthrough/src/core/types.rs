use serde::{Deserialize, Serialize};

/// Display phase of a single step.
///
/// `Active` and the ordering below are presentation state only; run
/// eligibility is always decided by [`crate::core::gate::StepGate::can_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPhase {
    Locked,
    Active,
    Running,
    Completed,
}

/// Per-step view of the gate, in step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    pub id: u8,
    pub phase: StepPhase,
}

/// Serializable snapshot of the whole gate for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSnapshot {
    pub steps: Vec<StepView>,
}

impl GateSnapshot {
    pub fn phase(&self, step: u8) -> Option<StepPhase> {
        self.steps
            .iter()
            .find(|view| view.id == step)
            .map(|view| view.phase)
    }
}
