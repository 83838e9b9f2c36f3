//! Terminal implementation of the presentation adapter.
//!
//! Owns the only display state the core ever asks about: which output
//! panels are currently visible.

use std::collections::BTreeSet;

use walkthrough::core::mode::VizMode;
use walkthrough::core::types::{GateSnapshot, StepPhase};
use walkthrough::io::catalog::{ArtifactSet, Catalog, ReportAsset};
use walkthrough::io::presenter::Presenter;

#[derive(Debug, Default)]
pub struct ConsolePresenter {
    visible: BTreeSet<u8>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for ConsolePresenter {
    fn output_visible(&self, step: u8) -> bool {
        self.visible.contains(&step)
    }

    fn reveal_output(&mut self, step: u8, output: &str) {
        self.visible.insert(step);
        println!("\n--- output: step {step} ---");
        println!("{output}");
    }

    fn render_artifacts(&mut self, mode: VizMode, artifacts: &ArtifactSet) {
        println!("\n=== visualization [{mode}] ===");
        for (slot, artifact) in artifacts.entries() {
            println!("  {:16} {} -> {}", slot.as_str(), artifact.title, artifact.path);
        }
    }

    fn update_description(&mut self, mode: VizMode, code: &str) {
        println!("\n--- visualization code [{mode}] ---");
        println!("{code}");
    }

    fn announce_completion(&mut self) {
        println!("\nAll steps completed. The experiment walkthrough is finished.");
    }

    fn offer_download(&mut self, report: &ReportAsset) {
        println!("\ndownload: {} (save as {})", report.path, report.filename);
    }

    fn clear_outputs(&mut self) {
        self.visible.clear();
        println!("\nOutputs cleared. Back to step 1.");
    }
}

/// Print the step list with phase markers.
pub fn print_status(snapshot: &GateSnapshot, catalog: &Catalog) {
    for view in &snapshot.steps {
        let marker = match view.phase {
            StepPhase::Completed => "[x]",
            StepPhase::Running => "[~]",
            StepPhase::Active => "[>]",
            StepPhase::Locked => "[ ]",
        };
        let title = catalog
            .step(view.id)
            .map(|step| step.title.as_str())
            .unwrap_or("(unknown step)");
        println!("{marker} {}. {title}", view.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_reveal_and_clear() {
        let mut presenter = ConsolePresenter::new();
        assert!(!presenter.output_visible(8));

        presenter.reveal_output(8, "output");
        assert!(presenter.output_visible(8));

        presenter.clear_outputs();
        assert!(!presenter.output_visible(8));
    }

    #[test]
    fn render_artifacts_accepts_every_mode() {
        let catalog = Catalog::load_embedded().expect("catalog");
        let mut presenter = ConsolePresenter::new();
        for mode in VizMode::ALL {
            presenter.render_artifacts(mode, catalog.artifact_set(mode));
        }
    }
}
