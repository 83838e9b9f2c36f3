//! Static experiment catalog: step plan with precomputed outputs, the
//! mode/slot artifact table, and the downloadable report reference.
//!
//! The catalog is embedded in the binary, validated against an embedded
//! JSON Schema plus semantic invariants, and loaded exactly once at
//! startup. It is immutable thereafter.

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::mode::{ArtifactSlot, VizMode};

const EXPERIMENT_JSON: &str = include_str!("../../assets/experiment.json");
const EXPERIMENT_SCHEMA: &str = include_str!("../../schemas/experiment.schema.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub experiment: ExperimentInfo,
    pub steps: Vec<StepSpec>,
    pub artifacts: ArtifactTable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperimentInfo {
    pub title: String,
    pub report: ReportAsset,
    pub parameters: Parameters,
}

/// The one downloadable asset, exposed by static path and fixed filename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportAsset {
    pub path: String,
    pub filename: String,
}

/// Hyperparameters of the simulated experiment, used by the descriptive
/// code templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameters {
    pub vocab_size: u32,
    pub max_len: u32,
    pub embed_dim: u32,
    pub rnn_units: u32,
    pub lstm_units: u32,
    pub batch_size: u32,
    pub epochs: u32,
}

/// One cell of the walkthrough: the code shown to the user and the
/// precomputed output revealed after the simulated run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepSpec {
    pub id: u8,
    pub title: String,
    pub code: String,
    pub output: String,
}

/// The full mode -> slot -> asset table (3 modes x 3 slots).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactTable {
    pub rnn: ArtifactSet,
    pub lstm: ArtifactSet,
    pub combined: ArtifactSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactSet {
    pub primary_curves: ArtifactRef,
    pub secondary_curves: ArtifactRef,
    pub combined_metric: ArtifactRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactRef {
    pub title: String,
    pub path: String,
}

impl ArtifactTable {
    pub fn for_mode(&self, mode: VizMode) -> &ArtifactSet {
        match mode {
            VizMode::Rnn => &self.rnn,
            VizMode::Lstm => &self.lstm,
            VizMode::Combined => &self.combined,
        }
    }
}

impl ArtifactSet {
    pub fn slot(&self, slot: ArtifactSlot) -> &ArtifactRef {
        match slot {
            ArtifactSlot::PrimaryCurves => &self.primary_curves,
            ArtifactSlot::SecondaryCurves => &self.secondary_curves,
            ArtifactSlot::CombinedMetric => &self.combined_metric,
        }
    }

    /// Slots in display order.
    pub fn entries(&self) -> [(ArtifactSlot, &ArtifactRef); 3] {
        [
            (ArtifactSlot::PrimaryCurves, &self.primary_curves),
            (ArtifactSlot::SecondaryCurves, &self.secondary_curves),
            (ArtifactSlot::CombinedMetric, &self.combined_metric),
        ]
    }
}

impl Catalog {
    /// Load and validate the embedded catalog (schema + invariants).
    pub fn load_embedded() -> Result<Catalog> {
        let value: Value =
            serde_json::from_str(EXPERIMENT_JSON).context("parse embedded experiment.json")?;
        validate_schema(&value)?;
        let catalog: Catalog =
            serde_json::from_value(value).context("deserialize experiment catalog")?;
        let errors = validate_catalog(&catalog);
        if !errors.is_empty() {
            return Err(anyhow!("catalog invariants failed: {}", errors.join("; ")));
        }
        Ok(catalog)
    }

    pub fn total_steps(&self) -> u8 {
        self.steps.len() as u8
    }

    pub fn step(&self, id: u8) -> Option<&StepSpec> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn artifact_set(&self, mode: VizMode) -> &ArtifactSet {
        self.artifacts.for_mode(mode)
    }

    pub fn report(&self) -> &ReportAsset {
        &self.experiment.report
    }
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(EXPERIMENT_SCHEMA).context("parse embedded experiment schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

/// Check semantic invariants not expressible in JSON Schema:
/// - step ids are contiguous from 1, in order
/// - artifact and report paths are non-blank
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, step) in catalog.steps.iter().enumerate() {
        let expected = (index + 1) as u8;
        if step.id != expected {
            errors.push(format!(
                "step at position {index} has id {}, expected {expected}",
                step.id
            ));
        }
    }

    for mode in VizMode::ALL {
        let set = catalog.artifacts.for_mode(mode);
        for (slot, artifact) in set.entries() {
            if artifact.path.trim().is_empty() {
                errors.push(format!(
                    "artifact ({mode}, {}) has a blank path",
                    slot.as_str()
                ));
            }
        }
    }

    if catalog.experiment.report.path.trim().is_empty() {
        errors.push("report path is blank".to_string());
    }
    if catalog.experiment.report.filename.trim().is_empty() {
        errors.push("report filename is blank".to_string());
    }

    errors
}
