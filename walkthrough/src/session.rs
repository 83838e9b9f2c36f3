//! Orchestration for a walkthrough session.
//!
//! A [`Session`] wires the step gate and the mode selection to the injected
//! presenter and scheduler: validate via the gate, suspend for the simulated
//! delay, record completion, and drive re-renders. All calls arrive from a
//! single thread of control; the front-end serializes user actions.

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::core::gate::{GateError, StepGate};
use crate::core::mode::VizMode;
use crate::core::types::GateSnapshot;
use crate::io::catalog::Catalog;
use crate::io::config::WalkthroughConfig;
use crate::io::describe::DescriptionTable;
use crate::io::presenter::Presenter;
use crate::io::scheduler::Scheduler;

/// Result of a single simulated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: u8,
    /// Step now carrying the active display marker, if any.
    pub active: Option<u8>,
    pub all_complete: bool,
    /// True when this run fired the one-shot completion signal.
    pub completion_fired: bool,
}

/// Result of a mode selection. Selection never fails; unknown input falls
/// back to the default mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub mode: VizMode,
    /// The input was unrecognized and the default was substituted.
    pub fell_back: bool,
    /// The visualization output was visible and re-rendered immediately.
    pub refreshed: bool,
}

/// Next actionable step, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Ready(u8),
    Complete,
}

/// Summary of a [`Session::run_remaining`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub steps_executed: u32,
}

pub struct Session<P: Presenter, S: Scheduler> {
    gate: StepGate,
    mode: VizMode,
    default_mode: VizMode,
    catalog: Catalog,
    descriptions: DescriptionTable,
    config: WalkthroughConfig,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> Session<P, S> {
    /// Build a session over the catalog's step plan and push the initial
    /// descriptive listing to the presenter.
    pub fn new(
        catalog: Catalog,
        config: WalkthroughConfig,
        presenter: P,
        scheduler: S,
    ) -> Result<Self> {
        config.validate()?;
        let default_mode = VizMode::parse(&config.default_mode)
            .map_err(|err| anyhow!("invalid default_mode: {err}"))?;
        let descriptions = DescriptionTable::render(&catalog.experiment.parameters)
            .context("render description table")?;
        let gate = StepGate::new(catalog.total_steps());

        let mut session = Self {
            gate,
            mode: default_mode,
            default_mode,
            catalog,
            descriptions,
            config,
            presenter,
            scheduler,
        };
        session.push_description();
        Ok(session)
    }

    pub fn can_run(&self, step: u8) -> bool {
        self.gate.can_run(step)
    }

    pub fn mode(&self) -> VizMode {
        self.mode
    }

    pub fn gate(&self) -> &StepGate {
        &self.gate
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn snapshot(&self) -> GateSnapshot {
        self.gate.snapshot()
    }

    /// First step that has never completed, or `Complete`.
    pub fn next_step(&self) -> NextStep {
        match self.gate.first_open() {
            Some(step) => NextStep::Ready(step),
            None => NextStep::Complete,
        }
    }

    /// Execute one simulated run of `step`: gate check, fixed pause, reveal,
    /// completion. There is no abort path; once the gate admits the step the
    /// pause always completes and completion always follows.
    ///
    /// Gate rejections come back as [`GateError`] (downcastable) and leave
    /// all state unchanged.
    pub fn run_step(&mut self, step: u8) -> Result<StepOutcome> {
        let Some(spec) = self.catalog.step(step) else {
            return Err(anyhow::Error::new(GateError::UnknownStep {
                step,
                total: self.gate.total(),
            }));
        };

        self.gate.begin(step).map_err(anyhow::Error::new)?;
        info!(step, title = %spec.title, "step running");

        self.scheduler.pause(self.config.delay());

        if step == self.gate.total() {
            self.presenter
                .render_artifacts(self.mode, self.catalog.artifact_set(self.mode));
        }
        self.presenter.reveal_output(step, &spec.output);

        let outcome = self.gate.complete(step).map_err(anyhow::Error::new)?;
        if outcome.completion_fired {
            info!("walkthrough complete");
            self.presenter.announce_completion();
        }

        Ok(StepOutcome {
            step,
            active: outcome.active,
            all_complete: outcome.all_complete,
            completion_fired: outcome.completion_fired,
        })
    }

    /// Run every remaining step in order until the walkthrough completes.
    ///
    /// The final step is executed at most once here; re-runs happen only
    /// through an explicit [`Session::run_step`] request.
    pub fn run_remaining<F: FnMut(&StepOutcome)>(&mut self, mut on_step: F) -> Result<WalkOutcome> {
        let mut steps_executed = 0u32;
        loop {
            let step = match self.next_step() {
                NextStep::Ready(step) => step,
                NextStep::Complete => {
                    return Ok(WalkOutcome { steps_executed });
                }
            };
            let outcome = self.run_step(step)?;
            steps_executed += 1;
            on_step(&outcome);
        }
    }

    /// Switch the visualization mode.
    ///
    /// Always updates the descriptive listing. Re-renders the artifact set
    /// immediately only when the final step has completed at least once and
    /// its output panel is visible; selecting a mode before the first run
    /// must never trigger one.
    pub fn select_mode(&mut self, input: &str) -> SelectionOutcome {
        let (mode, fell_back) = match VizMode::parse(input) {
            Ok(mode) => (mode, false),
            Err(err) => {
                warn!(%err, fallback = %VizMode::default(), "falling back to default mode");
                (VizMode::default(), true)
            }
        };

        self.mode = mode;
        self.push_description();

        let last = self.gate.total();
        let refreshed = self.gate.is_completed(last) && self.presenter.output_visible(last);
        if refreshed {
            self.presenter
                .render_artifacts(mode, self.catalog.artifact_set(mode));
        }

        SelectionOutcome {
            mode,
            fell_back,
            refreshed,
        }
    }

    /// Hard reset: gate back to step 1, mode back to the configured default,
    /// outputs hidden. No failure modes.
    pub fn reset(&mut self) {
        self.gate.reset();
        self.mode = self.default_mode;
        self.presenter.clear_outputs();
        self.push_description();
        info!("session reset");
    }

    /// Offer the experiment report for download by its fixed filename.
    pub fn download_report(&mut self) {
        self.presenter.offer_download(self.catalog.report());
    }

    fn push_description(&mut self) {
        self.presenter
            .update_description(self.mode, self.descriptions.description(self.mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::validate_invariants;
    use crate::test_support::{PresenterEvent, test_session};

    /// Scenario: steps 1..7 in order, each completion advances the marker,
    /// then the final step becomes runnable.
    #[test]
    fn ordered_walk_unlocks_final_step() {
        let mut session = test_session();
        for step in 1..=7 {
            let outcome = session.run_step(step).expect("run");
            assert_eq!(outcome.active, Some(step + 1));
            assert!(!outcome.completion_fired);
            assert!(validate_invariants(session.gate()).is_empty());
        }
        assert!(session.can_run(8));
        assert_eq!(session.next_step(), NextStep::Ready(8));
    }

    /// Scenario: selecting a mode before the final step ever ran updates the
    /// description only.
    #[test]
    fn select_before_first_visualization_run_does_not_render() {
        let mut session = test_session();
        for step in 1..=7 {
            session.run_step(step).expect("run");
        }

        let outcome = session.select_mode("lstm");
        assert_eq!(
            outcome,
            SelectionOutcome {
                mode: VizMode::Lstm,
                fell_back: false,
                refreshed: false,
            }
        );
        assert!(
            session
                .presenter()
                .events
                .iter()
                .all(|event| !matches!(event, PresenterEvent::ArtifactsRendered(_)))
        );
    }

    /// Scenario: once the visualization output is visible, selection
    /// re-renders immediately without another run.
    #[test]
    fn select_after_visualization_run_rerenders() {
        let mut session = test_session();
        for step in 1..=8 {
            session.run_step(step).expect("run");
        }

        let outcome = session.select_mode("rnn");
        assert!(outcome.refreshed);
        assert_eq!(
            session.presenter().events.last(),
            Some(&PresenterEvent::ArtifactsRendered(VizMode::Rnn))
        );
    }

    /// Scenario: out-of-order run is rejected with no state change.
    #[test]
    fn out_of_order_run_is_rejected() {
        let mut session = test_session();
        session.run_step(1).expect("run");

        let err = session.run_step(3).expect_err("run should fail");
        let gate_err = err.downcast_ref::<GateError>().expect("gate error");
        assert_eq!(
            gate_err,
            &GateError::OutOfOrder {
                step: 3,
                missing: vec![2],
            }
        );
        assert!(!session.can_run(3));
        assert!(
            !session
                .presenter()
                .events
                .contains(&PresenterEvent::OutputRevealed(3))
        );
    }

    /// Scenario: the final step re-runs after full completion; earlier steps
    /// stay completed and the completion signal does not repeat.
    #[test]
    fn final_step_rerun_preserves_completion() {
        let mut session = test_session();
        for step in 1..=8 {
            session.run_step(step).expect("run");
        }

        let rerun = session.run_step(8).expect("re-run");
        assert!(rerun.all_complete);
        assert!(!rerun.completion_fired);
        for step in 1..=7 {
            assert!(session.gate().is_completed(step));
        }
        let completions = session
            .presenter()
            .events
            .iter()
            .filter(|event| matches!(event, PresenterEvent::CompletionAnnounced))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn run_step_renders_artifacts_before_revealing_final_output() {
        let mut session = test_session();
        for step in 1..=7 {
            session.run_step(step).expect("run");
        }
        session.run_step(8).expect("run");

        let events = &session.presenter().events;
        let render_pos = events
            .iter()
            .position(|event| matches!(event, PresenterEvent::ArtifactsRendered(_)))
            .expect("artifacts rendered");
        let reveal_pos = events
            .iter()
            .position(|event| matches!(event, PresenterEvent::OutputRevealed(8)))
            .expect("output revealed");
        assert!(render_pos < reveal_pos);
    }

    #[test]
    fn unknown_mode_falls_back_to_default() {
        let mut session = test_session();
        session.select_mode("lstm");
        let outcome = session.select_mode("gru");
        assert_eq!(outcome.mode, VizMode::Combined);
        assert!(outcome.fell_back);
        assert_eq!(session.mode(), VizMode::Combined);
    }

    #[test]
    fn run_remaining_completes_the_walkthrough_once() {
        let mut session = test_session();
        let mut seen = Vec::new();
        let outcome = session
            .run_remaining(|step| seen.push(step.step))
            .expect("walk");

        assert_eq!(outcome.steps_executed, 8);
        assert_eq!(seen, (1..=8).collect::<Vec<u8>>());
        assert!(session.gate().all_complete());
        // One simulated pause per run, none for rejected or skipped steps.
        assert_eq!(session.scheduler().pauses(), 8);

        // A second walk has nothing left to do and never re-runs step 8.
        let outcome = session.run_remaining(|_| {}).expect("walk");
        assert_eq!(outcome.steps_executed, 0);
    }

    #[test]
    fn reset_restores_defaults_and_hides_outputs() {
        let mut session = test_session();
        for step in 1..=8 {
            session.run_step(step).expect("run");
        }
        session.select_mode("rnn");

        session.reset();
        assert!(session.can_run(1));
        assert!(!session.can_run(2));
        assert_eq!(session.mode(), VizMode::Combined);
        assert!(!session.presenter().output_visible(8));
        assert_eq!(
            session.presenter().events.last(),
            Some(&PresenterEvent::DescriptionUpdated(VizMode::Combined))
        );

        // A fresh full pass fires the completion signal again.
        let mut fired = 0;
        session
            .run_remaining(|outcome| {
                if outcome.completion_fired {
                    fired += 1;
                }
            })
            .expect("walk");
        assert_eq!(fired, 1);
    }

    #[test]
    fn download_offers_fixed_filename() {
        let mut session = test_session();
        session.download_report();
        assert_eq!(
            session.presenter().events.last(),
            Some(&PresenterEvent::DownloadOffered(
                "lstm_sentiment_analysis_experiment.pdf".to_string()
            ))
        );
    }

    #[test]
    fn new_session_pushes_initial_description() {
        let session = test_session();
        assert_eq!(
            session.presenter().events,
            vec![PresenterEvent::DescriptionUpdated(VizMode::Combined)]
        );
    }
}
