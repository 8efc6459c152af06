//! Shared control protocol for the seven search engines
//!
//! An [`Engine`] owns one run at a time: the input snapshot taken at
//! [`Engine::start`], the state machine for the selected algorithm, the step
//! counter and the two sinks. It holds no threads and never sleeps. An
//! external scheduler calls [`Engine::tick`] whenever it wants the next step
//! (typically every [`Engine::execution_delay`] milliseconds) and uses
//! [`pause`](Engine::pause), [`resume`](Engine::resume),
//! [`step`](Engine::step) and [`stop`](Engine::stop) to control the run.
//!
//! ```text
//!            start              natural end
//!   Idle ──────────▶ Running ───────────────▶ Done
//!                     │  ▲
//!               pause │  │ resume
//!                     ▼  │
//!                    Paused ── step ─▶ Paused | Done
//!
//!   any status ── stop ─▶ Stopped (no further steps, no completion)
//! ```
//!
//! - [`config`]: delay bounds and [`EngineConfig`]
//! - [`errors`]: [`EngineError`] and [`HistoryError`]
//! - [`sink`]: the [`StepSink`] and [`CompletionSink`] traits

pub mod config;
pub mod errors;
pub mod sink;

pub use config::{
    DelayRange, EngineConfig, ARRAY_DELAY_RANGE, DEFAULT_EXECUTION_DELAY_MS,
    DEFAULT_HISTORY_LIMIT, STRING_DELAY_RANGE,
};
pub use errors::{EngineError, HistoryError};
pub use sink::{CompletionSink, Discard, StepSink};

use crate::algorithms::{AlgorithmKind, Machine, Prepared, SearchMachine};
use crate::model::{Cursor, Phase, SearchInput, SearchResult, StepDetail};
use log::{debug, info, trace, warn};
use serde::Serialize;
use std::fmt;
use strum_macros::Display;

/// Where the engine is in its control lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Done,
    /// Terminal: the run was abandoned and will never complete
    Stopped,
}

/// Everything owned by one run
struct Run {
    input: SearchInput,
    /// `None` for inputs resolved without steps
    machine: Option<Machine>,
    step_count: usize,
    result: Option<SearchResult>,
    step_sink: Box<dyn StepSink>,
    completion_sink: Box<dyn CompletionSink>,
}

/// Drives one algorithm through the shared control protocol
pub struct Engine {
    kind: AlgorithmKind,
    execution_delay_ms: u64,
    status: Status,
    run: Option<Run>,
}

impl Engine {
    pub fn new(kind: AlgorithmKind) -> Self {
        Engine::with_config(kind, EngineConfig::default())
    }

    pub fn with_config(kind: AlgorithmKind, config: EngineConfig) -> Self {
        let range = DelayRange::for_family(kind.family());
        Engine {
            kind,
            execution_delay_ms: range.clamp(config.execution_delay_ms),
            status: Status::Idle,
            run: None,
        }
    }

    /// Snapshot `input` and begin a new run.
    ///
    /// Rejected while another run is running or paused. Input the algorithm
    /// cannot search leaves the engine idle. Degenerate string inputs (empty
    /// pattern, pattern longer than text) finish immediately: no step is
    /// emitted and `completion_sink` fires once before this returns.
    pub fn start<S, C>(
        &mut self,
        input: SearchInput,
        step_sink: S,
        completion_sink: C,
    ) -> Result<(), EngineError>
    where
        S: StepSink + 'static,
        C: CompletionSink + 'static,
    {
        if matches!(self.status, Status::Running | Status::Paused) {
            return Err(self.reject("start"));
        }

        let prepared = match Machine::prepare(self.kind, &input) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!("{}: rejected input: {}", self.kind, err);
                self.run = None;
                self.status = Status::Idle;
                return Err(err);
            }
        };

        debug!("{}: starting run over {} elements", self.kind, input.len());
        self.run = Some(Run {
            input,
            machine: None,
            step_count: 0,
            result: None,
            step_sink: Box::new(step_sink),
            completion_sink: Box::new(completion_sink),
        });
        self.launch(prepared);
        Ok(())
    }

    /// Emit the next step if the engine is running. Returns the status
    /// afterwards; any status other than `Running` makes this a no-op.
    pub fn tick(&mut self) -> Status {
        if self.status == Status::Running {
            self.advance_run();
        }
        self.status
    }

    /// Suspend at the current step boundary. No-op unless running.
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            debug!(
                "{}: paused after step {}",
                self.kind,
                self.current_step_count()
            );
            self.status = Status::Paused;
        }
    }

    /// Continue a paused run. Resuming a running engine is a no-op.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        match self.status {
            Status::Paused => {
                debug!(
                    "{}: resumed at step {}",
                    self.kind,
                    self.current_step_count()
                );
                self.status = Status::Running;
                Ok(())
            }
            Status::Running => Ok(()),
            Status::Idle | Status::Done | Status::Stopped => Err(self.reject("resume")),
        }
    }

    /// Emit exactly one step from a paused run and stay paused, unless that
    /// step ends the search
    pub fn step(&mut self) -> Result<(), EngineError> {
        if self.status != Status::Paused {
            return Err(self.reject("step"));
        }
        self.advance_run();
        Ok(())
    }

    /// Abandon the run. Nothing further reaches either sink; phase, cursor
    /// and comparison count keep describing where the run stopped.
    pub fn stop(&mut self) {
        if self.status != Status::Stopped {
            debug!(
                "{}: stopped after step {}",
                self.kind,
                self.current_step_count()
            );
        }
        self.status = Status::Stopped;
    }

    /// Start a fresh run over the last input with the same sinks.
    ///
    /// Like [`start`](Engine::start), rejected while a run is running or
    /// paused; `stop` it first.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        if matches!(self.status, Status::Running | Status::Paused) {
            return Err(self.reject("restart"));
        }
        let prepared = match &self.run {
            Some(run) => Machine::prepare(self.kind, &run.input)?,
            None => return Err(self.reject("restart")),
        };
        if let Some(run) = self.run.as_mut() {
            run.machine = None;
            run.step_count = 0;
            run.result = None;
        }

        debug!("{}: restarting run", self.kind);
        self.launch(prepared);
        Ok(())
    }

    /// Discard the run and return to `Idle`
    pub fn reset(&mut self) {
        self.run = None;
        self.status = Status::Idle;
    }

    /// Tick until the run leaves `Running` and return the result, if any
    pub fn run_to_completion(&mut self) -> Option<SearchResult> {
        while self.tick() == Status::Running {}
        self.result()
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.status == Status::Stopped
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Steps emitted so far in the current run
    pub fn current_step_count(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.step_count)
    }

    pub fn result(&self) -> Option<SearchResult> {
        self.run.as_ref().and_then(|run| run.result)
    }

    pub fn phase(&self) -> Phase {
        match &self.run {
            Some(Run {
                machine: Some(machine),
                ..
            }) => machine.phase(),
            Some(Run {
                result: Some(_), ..
            }) => Phase::Done,
            _ => Phase::NotStarted,
        }
    }

    /// Pause point of the current run
    pub fn cursor(&self) -> Option<Cursor> {
        self.run
            .as_ref()
            .and_then(|run| run.machine.as_ref())
            .map(|machine| machine.cursor())
    }

    /// Element comparisons made so far in the current run
    pub fn comparisons(&self) -> usize {
        self.run
            .as_ref()
            .and_then(|run| run.machine.as_ref())
            .map_or(0, |machine| machine.comparisons())
    }

    /// Set the advisory delay between automatic steps, clamped to this
    /// algorithm's range. Persists across runs.
    pub fn set_execution_delay(&mut self, ms: u64) {
        let range = DelayRange::for_family(self.kind.family());
        self.execution_delay_ms = range.clamp(ms);
        if self.execution_delay_ms != ms {
            debug!(
                "{}: execution delay {}ms clamped to {}ms",
                self.kind, ms, self.execution_delay_ms
            );
        }
    }

    pub fn execution_delay(&self) -> u64 {
        self.execution_delay_ms
    }

    /// Current settings, for persisting
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            execution_delay_ms: self.execution_delay_ms,
        }
    }

    /// One-line description of the engine's state for display
    pub fn status_message(&self) -> String {
        match self.status {
            Status::Idle => "Ready".to_string(),
            Status::Running => "Search in progress".to_string(),
            Status::Paused => "Paused".to_string(),
            Status::Done => self
                .result()
                .map_or_else(|| "Done".to_string(), |result| result.to_string()),
            Status::Stopped => "Stopped".to_string(),
        }
    }

    fn launch(&mut self, prepared: Prepared) {
        self.status = Status::Running;
        match prepared {
            Prepared::Ready(machine) => {
                if let Some(run) = self.run.as_mut() {
                    run.machine = Some(machine);
                }
            }
            Prepared::Resolved(result) => {
                debug!("{}: input resolved without steps", self.kind);
                self.complete(result);
            }
        }
    }

    fn advance_run(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let Some(machine) = run.machine.as_mut() else {
            return;
        };

        run.step_count += 1;
        let (step, outcome) = machine.emit(run.step_count);
        trace!("{}: step {}: {}", self.kind, step.number, step.description);

        run.step_sink.on_step(&step);
        match &step.detail {
            StepDetail::Range { left, right, mid } if self.kind.narrows_range() => {
                run.step_sink
                    .on_range_highlight(*left, *right, *mid, &step.description);
            }
            StepDetail::Table {
                table,
                complete: true,
            } => run.step_sink.on_table_built(table, &step.description),
            StepDetail::Range { .. } | StepDetail::Table { .. } | StepDetail::None => {}
        }

        if let Some(result) = outcome.result() {
            self.complete(result);
        }
    }

    /// Record the result and notify the completion sink, once per run
    fn complete(&mut self, result: SearchResult) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.result.is_some() {
            return;
        }

        run.result = Some(result);
        self.status = Status::Done;
        info!("{}: {} after {} steps", self.kind, result, run.step_count);
        run.completion_sink.on_complete(result);
    }

    fn reject(&self, operation: &'static str) -> EngineError {
        warn!("{}: cannot {} while {}", self.kind, operation, self.status);
        EngineError::InvalidOperation {
            operation,
            status: self.status,
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("kind", &self.kind)
            .field("status", &self.status)
            .field("execution_delay_ms", &self.execution_delay_ms)
            .field("steps", &self.current_step_count())
            .field("result", &self.result())
            .finish()
    }
}
