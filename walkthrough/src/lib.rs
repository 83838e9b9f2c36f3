//! Simulated notebook walkthrough of an ML experiment.
//!
//! This crate replays a pre-computed LSTM-vs-RNN sentiment analysis
//! experiment as an ordered sequence of runnable cells. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (step gating, mode vocabulary,
//!   invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Boundaries (presentation adapter, simulated-delay
//!   scheduler, static catalog, configuration). Injected into the session
//!   to enable fakes in tests.
//!
//! [`session`] coordinates core logic with the boundaries: a user action is
//! validated by the gate, suspended for a fixed simulated delay, recorded,
//! and rendered through the presenter.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
