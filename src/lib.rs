//! # Introduction
//!
//! seekstep runs classic search algorithms one observable step at a time so a
//! person can watch them work. Each algorithm's loop is rewritten as an
//! explicit state machine, which lets a run be paused, single-stepped,
//! resumed, stopped or restarted at any step boundary without skipping or
//! repeating a comparison.
//!
//! ## Execution pipeline
//!
//! ```text
//! SearchInput → Machine::prepare → SearchMachine::advance → Step → StepSink
//!                                                          ↘ SearchResult → CompletionSink
//! ```
//!
//! 1. [`model`]: input snapshots, [`model::Step`] records, highlight roles,
//!    cursors and the final [`model::SearchResult`].
//! 2. [`comparators`]: stateless reference implementations and the KMP and
//!    Boyer-Moore preprocessing tables.
//! 3. [`algorithms`]: one resumable machine per algorithm, plus
//!    [`algorithms::trace`] for an uninterrupted reference run.
//! 4. [`engine`]: the shared start/pause/resume/step/stop protocol driven by
//!    an external scheduler.
//! 5. [`history`]: a bounded step log with replay navigation.
//!
//! ## Supported algorithms
//!
//! Arrays of `i32`: linear, binary, jump and exponential search.
//! Text: naive matching, Knuth-Morris-Pratt and Boyer-Moore (bad-character
//! rule). Binary, jump and exponential search expect ascending input; see
//! [`comparators::is_sorted`].
//!
//! ## Example
//!
//! ```
//! use seekstep::algorithms::AlgorithmKind;
//! use seekstep::engine::{Discard, Engine, Status};
//! use seekstep::model::{SearchInput, SearchResult};
//!
//! let mut engine = Engine::new(AlgorithmKind::Binary);
//! engine
//!     .start(SearchInput::array(&[1, 3, 5, 7, 9, 11], 7), Discard, Discard)
//!     .unwrap();
//!
//! engine.tick();
//! engine.pause();
//! engine.step().unwrap();
//! assert_eq!(engine.status(), Status::Paused);
//!
//! engine.resume().unwrap();
//! assert_eq!(engine.run_to_completion(), Some(SearchResult::FoundAt(3)));
//! ```

pub mod algorithms;
pub mod comparators;
pub mod engine;
pub mod history;
pub mod model;
