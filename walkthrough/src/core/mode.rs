//! Visualization mode vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-selectable visualization variant. Exactly one is selected at any
/// time; `Combined` is the default and the fallback for unrecognized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VizMode {
    Rnn,
    Lstm,
    #[default]
    Combined,
}

/// Unrecognized mode input. Non-fatal: callers substitute the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidModeError {
    pub input: String,
}

impl fmt::Display for InvalidModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown visualization mode '{}' (expected rnn, lstm, or combined)",
            self.input
        )
    }
}

impl std::error::Error for InvalidModeError {}

impl VizMode {
    pub const ALL: [VizMode; 3] = [VizMode::Rnn, VizMode::Lstm, VizMode::Combined];

    pub fn as_str(self) -> &'static str {
        match self {
            VizMode::Rnn => "rnn",
            VizMode::Lstm => "lstm",
            VizMode::Combined => "combined",
        }
    }

    /// Parse a user-supplied mode string (case-insensitive, trimmed).
    pub fn parse(input: &str) -> Result<Self, InvalidModeError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "rnn" => Ok(VizMode::Rnn),
            "lstm" => Ok(VizMode::Lstm),
            "combined" => Ok(VizMode::Combined),
            _ => Err(InvalidModeError {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for VizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three named artifact slots every mode fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSlot {
    PrimaryCurves,
    SecondaryCurves,
    CombinedMetric,
}

impl ArtifactSlot {
    pub const ALL: [ArtifactSlot; 3] = [
        ArtifactSlot::PrimaryCurves,
        ArtifactSlot::SecondaryCurves,
        ArtifactSlot::CombinedMetric,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactSlot::PrimaryCurves => "primary_curves",
            ArtifactSlot::SecondaryCurves => "secondary_curves",
            ArtifactSlot::CombinedMetric => "combined_metric",
        }
    }
}
