//! Presentation adapter boundary.
//!
//! The [`Presenter`] trait decouples the session from the rendering surface
//! (currently a terminal front-end). The core only queries visibility and
//! pushes render requests; it owns no display state. Tests use a recording
//! presenter that never draws anything.

use crate::core::mode::VizMode;
use crate::io::catalog::{ArtifactSet, ReportAsset};

/// Capability set the session requires from a rendering surface.
pub trait Presenter {
    /// Whether the output panel of `step` is currently visible to the user.
    fn output_visible(&self, step: u8) -> bool;

    /// Reveal the precomputed output of `step`.
    fn reveal_output(&mut self, step: u8, output: &str);

    /// Render the artifact set for `mode` into the visualization panel.
    fn render_artifacts(&mut self, mode: VizMode, artifacts: &ArtifactSet);

    /// Replace the descriptive code listing shown for the visualization step.
    fn update_description(&mut self, mode: VizMode, code: &str);

    /// One-shot notification that every step has completed. The session
    /// guarantees at most one call per full run-through.
    fn announce_completion(&mut self);

    /// Offer the static report asset for download under its fixed filename.
    fn offer_download(&mut self, report: &ReportAsset);

    /// Hide all outputs again (reset).
    fn clear_outputs(&mut self);
}
