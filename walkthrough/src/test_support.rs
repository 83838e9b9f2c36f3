//! Test-only presenter and scheduler fakes.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::time::Duration;

use crate::core::mode::VizMode;
use crate::io::catalog::{ArtifactSet, Catalog, ReportAsset};
use crate::io::config::WalkthroughConfig;
use crate::io::presenter::Presenter;
use crate::io::scheduler::Scheduler;
use crate::session::Session;

/// One presenter call, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    OutputRevealed(u8),
    ArtifactsRendered(VizMode),
    DescriptionUpdated(VizMode),
    CompletionAnnounced,
    DownloadOffered(String),
    OutputsCleared,
}

/// Presenter that records calls and tracks output visibility in memory.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    visible: BTreeSet<u8>,
    pub events: Vec<PresenterEvent>,
}

impl Presenter for RecordingPresenter {
    fn output_visible(&self, step: u8) -> bool {
        self.visible.contains(&step)
    }

    fn reveal_output(&mut self, step: u8, _output: &str) {
        self.visible.insert(step);
        self.events.push(PresenterEvent::OutputRevealed(step));
    }

    fn render_artifacts(&mut self, mode: VizMode, _artifacts: &ArtifactSet) {
        self.events.push(PresenterEvent::ArtifactsRendered(mode));
    }

    fn update_description(&mut self, mode: VizMode, _code: &str) {
        self.events.push(PresenterEvent::DescriptionUpdated(mode));
    }

    fn announce_completion(&mut self) {
        self.events.push(PresenterEvent::CompletionAnnounced);
    }

    fn offer_download(&mut self, report: &ReportAsset) {
        self.events
            .push(PresenterEvent::DownloadOffered(report.filename.clone()));
    }

    fn clear_outputs(&mut self) {
        self.visible.clear();
        self.events.push(PresenterEvent::OutputsCleared);
    }
}

/// Scheduler that skips the pause and counts invocations.
#[derive(Debug, Default)]
pub struct InstantScheduler {
    pauses: Cell<u32>,
}

impl InstantScheduler {
    pub fn pauses(&self) -> u32 {
        self.pauses.get()
    }
}

impl Scheduler for InstantScheduler {
    fn pause(&self, _delay: Duration) {
        self.pauses.set(self.pauses.get() + 1);
    }
}

/// Zero-delay config for deterministic tests.
pub fn test_config() -> WalkthroughConfig {
    WalkthroughConfig {
        execution_delay_ms: 0,
        ..WalkthroughConfig::default()
    }
}

/// Session over the embedded catalog with recording fakes.
pub fn test_session() -> Session<RecordingPresenter, InstantScheduler> {
    let catalog = Catalog::load_embedded().expect("embedded catalog");
    Session::new(
        catalog,
        test_config(),
        RecordingPresenter::default(),
        InstantScheduler::default(),
    )
    .expect("session")
}
