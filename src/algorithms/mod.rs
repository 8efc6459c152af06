//! Resumable search state machines
//!
//! Every algorithm is written as an explicit struct holding all of its
//! loop-carried variables plus a private `Stage` enum naming the next unit of
//! work. [`SearchMachine::advance`] performs exactly one unit (one comparison,
//! one evaluation, one table entry or one phase transition) and returns a
//! [`Transition`]. Nothing is held on the call stack between calls, so a
//! machine can be left alone indefinitely and resumed later without skipping
//! or repeating a comparison.
//!
//! - [`linear`], [`binary`], [`jump`], [`exponential`]: array family
//! - [`naive`], [`kmp`], [`boyer_moore`]: text family
//! - [`info`]: descriptive metadata for each algorithm
//!
//! [`Machine`] is the tagged union the engine drives; [`Machine::prepare`]
//! validates a [`SearchInput`] and resolves degenerate string inputs without
//! emitting any step.

pub mod binary;
pub mod boyer_moore;
pub mod exponential;
pub mod info;
pub mod jump;
pub mod kmp;
pub mod linear;
pub mod naive;

pub use binary::BinarySearch;
pub use boyer_moore::BoyerMooreSearch;
pub use exponential::ExponentialSearch;
pub use info::AlgorithmInfo;
pub use jump::JumpSearch;
pub use kmp::KmpSearch;
pub use linear::LinearSearch;
pub use naive::NaiveSearch;

use crate::comparators;
use crate::engine::errors::EngineError;
use crate::model::{
    Cursor, Family, Highlight, Lane, Phase, Role, SearchInput, SearchResult, Step, StepDetail,
};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The seven supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum AlgorithmKind {
    #[strum(to_string = "Linear Search")]
    Linear,
    #[strum(to_string = "Binary Search")]
    Binary,
    #[strum(to_string = "Jump Search")]
    Jump,
    #[strum(to_string = "Exponential Search")]
    Exponential,
    #[strum(to_string = "Naive String Search")]
    Naive,
    #[strum(to_string = "KMP String Search")]
    Kmp,
    #[strum(to_string = "Boyer-Moore String Search")]
    BoyerMoore,
}

impl AlgorithmKind {
    pub fn family(self) -> Family {
        match self {
            AlgorithmKind::Linear
            | AlgorithmKind::Binary
            | AlgorithmKind::Jump
            | AlgorithmKind::Exponential => Family::Array,
            AlgorithmKind::Naive | AlgorithmKind::Kmp | AlgorithmKind::BoyerMoore => Family::Text,
        }
    }

    /// Whether the result is only meaningful on ascending input
    pub fn requires_sorted(self) -> bool {
        matches!(
            self,
            AlgorithmKind::Binary | AlgorithmKind::Jump | AlgorithmKind::Exponential
        )
    }

    /// Binary and exponential search narrow a `[left, right]` range with a
    /// midpoint; their range steps reach [`StepSink::on_range_highlight`].
    ///
    /// [`StepSink::on_range_highlight`]: crate::engine::StepSink::on_range_highlight
    pub fn narrows_range(self) -> bool {
        matches!(self, AlgorithmKind::Binary | AlgorithmKind::Exponential)
    }
}

/// What a single `advance` concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Found(usize),
    NotFound,
}

impl StepOutcome {
    /// The terminal result, or `None` while the search continues
    pub fn result(self) -> Option<SearchResult> {
        match self {
            StepOutcome::Continue => None,
            StepOutcome::Found(index) => Some(SearchResult::FoundAt(index)),
            StepOutcome::NotFound => Some(SearchResult::NotFound),
        }
    }
}

impl From<SearchResult> for StepOutcome {
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::FoundAt(index) => StepOutcome::Found(index),
            SearchResult::NotFound => StepOutcome::NotFound,
        }
    }
}

/// Output of one unit of work, before the engine numbers it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub description: String,
    pub highlights: Vec<Highlight>,
    pub detail: StepDetail,
    pub outcome: StepOutcome,
}

impl Transition {
    pub(crate) fn proceed(description: impl Into<String>) -> Self {
        Transition {
            description: description.into(),
            highlights: Vec::new(),
            detail: StepDetail::None,
            outcome: StepOutcome::Continue,
        }
    }

    pub(crate) fn found(description: impl Into<String>, index: usize) -> Self {
        Transition {
            outcome: StepOutcome::Found(index),
            ..Transition::proceed(description)
        }
    }

    /// Terminal "not found" step that dims every position of `lane`
    pub(crate) fn not_found(description: impl Into<String>, lane: Lane, len: usize) -> Self {
        let mut transition = Transition {
            outcome: StepOutcome::NotFound,
            ..Transition::proceed(description)
        };
        for index in 0..len {
            transition = transition.mark(lane, index, Role::NotFound);
        }
        transition
    }

    /// Step emitted when a finished machine is advanced again
    pub(crate) fn finished(result: SearchResult) -> Self {
        Transition {
            outcome: result.into(),
            ..Transition::proceed(format!("Search already finished: {}", result))
        }
    }

    pub(crate) fn mark(mut self, lane: Lane, index: usize, role: Role) -> Self {
        self.highlights.push(Highlight::new(lane, index, role));
        self
    }

    pub(crate) fn mark_span(mut self, lane: Lane, start: usize, len: usize, role: Role) -> Self {
        for index in start..start + len {
            self.highlights.push(Highlight::new(lane, index, role));
        }
        self
    }

    pub(crate) fn with_detail(mut self, detail: StepDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// A loop-based algorithm reified into an externally driven state machine
pub trait SearchMachine {
    /// Perform exactly one unit of work
    fn advance(&mut self) -> Transition;

    fn phase(&self) -> Phase;

    /// The pause point: everything needed to make the next unit of work
    fn cursor(&self) -> Cursor;

    /// Element comparisons made so far, preprocessing included
    fn comparisons(&self) -> usize;
}

/// Result of a degenerate string search that needs no steps at all: an
/// empty pattern matches at 0, a pattern longer than the text never matches
pub(crate) fn trivial_text_result(text: &[char], pattern: &[char]) -> Option<SearchResult> {
    if pattern.is_empty() {
        Some(SearchResult::FoundAt(0))
    } else if pattern.len() > text.len() {
        Some(SearchResult::NotFound)
    } else {
        None
    }
}

/// Format a char slice for step descriptions
pub(crate) fn show(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Tagged union over the seven machines
#[derive(Debug, Clone)]
pub enum Machine {
    Linear(LinearSearch),
    Binary(BinarySearch),
    Jump(JumpSearch),
    Exponential(ExponentialSearch),
    Naive(NaiveSearch),
    Kmp(KmpSearch),
    BoyerMoore(BoyerMooreSearch),
}

/// A validated run: either a machine to drive, or a result known up front
#[derive(Debug, Clone)]
pub enum Prepared {
    Ready(Machine),
    Resolved(SearchResult),
}

impl Machine {
    /// Validate `input` for `kind` and build the machine for it
    pub fn prepare(kind: AlgorithmKind, input: &SearchInput) -> Result<Prepared, EngineError> {
        let wrong_kind = EngineError::WrongInputKind {
            algorithm: kind,
            expected: kind.family(),
        };

        match input {
            SearchInput::Array { values, target } => {
                if kind.family() != Family::Array {
                    return Err(wrong_kind);
                }
                if values.is_empty() {
                    return Err(EngineError::EmptyArray { algorithm: kind });
                }

                let (values, target) = (values.clone(), *target);
                let machine = match kind {
                    AlgorithmKind::Linear => Machine::Linear(LinearSearch::new(values, target)),
                    AlgorithmKind::Binary => Machine::Binary(BinarySearch::new(values, target)),
                    AlgorithmKind::Jump => Machine::Jump(JumpSearch::new(values, target)),
                    AlgorithmKind::Exponential => {
                        Machine::Exponential(ExponentialSearch::new(values, target))
                    }
                    AlgorithmKind::Naive | AlgorithmKind::Kmp | AlgorithmKind::BoyerMoore => {
                        return Err(wrong_kind)
                    }
                };
                Ok(Prepared::Ready(machine))
            }

            SearchInput::Text { text, pattern } => {
                if kind.family() != Family::Text {
                    return Err(wrong_kind);
                }
                if let Some(result) = trivial_text_result(text, pattern) {
                    return Ok(Prepared::Resolved(result));
                }

                let (text, pattern) = (text.clone(), pattern.clone());
                let machine = match kind {
                    AlgorithmKind::Naive => Machine::Naive(NaiveSearch::new(text, pattern)),
                    AlgorithmKind::Kmp => Machine::Kmp(KmpSearch::new(text, pattern)),
                    AlgorithmKind::BoyerMoore => {
                        Machine::BoyerMoore(BoyerMooreSearch::new(text, pattern))
                    }
                    AlgorithmKind::Linear
                    | AlgorithmKind::Binary
                    | AlgorithmKind::Jump
                    | AlgorithmKind::Exponential => return Err(wrong_kind),
                };
                Ok(Prepared::Ready(machine))
            }
        }
    }

    fn inner(&self) -> &dyn SearchMachine {
        match self {
            Machine::Linear(m) => m,
            Machine::Binary(m) => m,
            Machine::Jump(m) => m,
            Machine::Exponential(m) => m,
            Machine::Naive(m) => m,
            Machine::Kmp(m) => m,
            Machine::BoyerMoore(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SearchMachine {
        match self {
            Machine::Linear(m) => m,
            Machine::Binary(m) => m,
            Machine::Jump(m) => m,
            Machine::Exponential(m) => m,
            Machine::Naive(m) => m,
            Machine::Kmp(m) => m,
            Machine::BoyerMoore(m) => m,
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Machine::Linear(_) => AlgorithmKind::Linear,
            Machine::Binary(_) => AlgorithmKind::Binary,
            Machine::Jump(_) => AlgorithmKind::Jump,
            Machine::Exponential(_) => AlgorithmKind::Exponential,
            Machine::Naive(_) => AlgorithmKind::Naive,
            Machine::Kmp(_) => AlgorithmKind::Kmp,
            Machine::BoyerMoore(_) => AlgorithmKind::BoyerMoore,
        }
    }

    /// Advance once and package the transition as step `number`
    pub fn emit(&mut self, number: usize) -> (Step, StepOutcome) {
        let Transition {
            description,
            highlights,
            detail,
            outcome,
        } = self.advance();

        let step = Step {
            number,
            phase: self.phase(),
            description,
            highlights,
            detail,
            cursor: self.cursor(),
        };
        (step, outcome)
    }
}

impl SearchMachine for Machine {
    fn advance(&mut self) -> Transition {
        self.inner_mut().advance()
    }

    fn phase(&self) -> Phase {
        self.inner().phase()
    }

    fn cursor(&self) -> Cursor {
        self.inner().cursor()
    }

    fn comparisons(&self) -> usize {
        self.inner().comparisons()
    }
}

/// A complete, uninterrupted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub result: SearchResult,
}

/// Drive a fresh machine for `kind` over `input` to completion with no
/// control operations in between. This is the reference sequence any paused
/// or single-stepped run must reproduce.
pub fn trace(kind: AlgorithmKind, input: &SearchInput) -> Result<Trace, EngineError> {
    let mut machine = match Machine::prepare(kind, input)? {
        Prepared::Ready(machine) => machine,
        Prepared::Resolved(result) => {
            return Ok(Trace {
                steps: Vec::new(),
                result,
            })
        }
    };

    let mut steps = Vec::new();
    loop {
        let (step, outcome) = machine.emit(steps.len() + 1);
        steps.push(step);
        if let Some(result) = outcome.result() {
            return Ok(Trace { steps, result });
        }
    }
}

/// Run the stateless comparator for `kind`, with the same input validation
/// the engine applies
pub fn baseline(kind: AlgorithmKind, input: &SearchInput) -> Result<SearchResult, EngineError> {
    let wrong_kind = EngineError::WrongInputKind {
        algorithm: kind,
        expected: kind.family(),
    };

    let result = match input {
        SearchInput::Array { values, target } => {
            if kind.family() == Family::Array && values.is_empty() {
                return Err(EngineError::EmptyArray { algorithm: kind });
            }
            match kind {
                AlgorithmKind::Linear => comparators::linear_search(values, *target),
                AlgorithmKind::Binary => comparators::binary_search(values, *target),
                AlgorithmKind::Jump => comparators::jump_search(values, *target),
                AlgorithmKind::Exponential => comparators::exponential_search(values, *target),
                AlgorithmKind::Naive | AlgorithmKind::Kmp | AlgorithmKind::BoyerMoore => {
                    return Err(wrong_kind)
                }
            }
        }
        SearchInput::Text { text, pattern } => match kind {
            AlgorithmKind::Naive => comparators::naive_search(text, pattern),
            AlgorithmKind::Kmp => comparators::kmp_search(text, pattern),
            AlgorithmKind::BoyerMoore => comparators::boyer_moore_search(text, pattern),
            AlgorithmKind::Linear
            | AlgorithmKind::Binary
            | AlgorithmKind::Jump
            | AlgorithmKind::Exponential => return Err(wrong_kind),
        },
    };
    Ok(result)
}
