//! Jump search.
//!
//! Two phases share one state machine: probe every `jump_size`-th element
//! until one is not below the target, then scan the block between the last
//! two probes.

use crate::algorithms::{SearchMachine, Transition};
use crate::comparators::jump_size;
use crate::model::{Cursor, Lane, Phase, Role, SearchResult, StepDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    /// Show the probe at `index`
    Jump { prev: usize, index: usize },
    /// Compare the probe at `index` against the target
    CheckJump { prev: usize, index: usize },
    /// Mark `[start, end]` as the block to scan
    SelectBlock { start: usize, end: usize },
    Scan {
        index: usize,
        start: usize,
        end: usize,
    },
    CheckScan {
        index: usize,
        start: usize,
        end: usize,
    },
    Finished(SearchResult),
}

#[derive(Debug, Clone)]
pub struct JumpSearch {
    values: Vec<i32>,
    target: i32,
    jump: usize,
    stage: Stage,
    comparisons: usize,
}

impl JumpSearch {
    pub fn new(values: Vec<i32>, target: i32) -> Self {
        let jump = jump_size(values.len());
        JumpSearch {
            values,
            target,
            jump,
            stage: Stage::Start,
            comparisons: 0,
        }
    }

    /// Block size, fixed for the run
    pub fn jump_size(&self) -> usize {
        self.jump
    }

    fn last(&self) -> usize {
        self.values.len() - 1
    }
}

impl SearchMachine for JumpSearch {
    fn advance(&mut self) -> Transition {
        match self.stage {
            Stage::Start => {
                let n = self.values.len();
                if n == 0 {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        "Array is empty: nothing to search",
                        Lane::Array,
                        0,
                    );
                }

                let first = (self.jump - 1).min(n - 1);
                self.stage = Stage::Jump {
                    prev: 0,
                    index: first,
                };
                Transition::proceed(format!(
                    "Starting Jump Search for {} with jump size {}",
                    self.target, self.jump
                ))
            }

            Stage::Jump { prev, index } => {
                self.stage = Stage::CheckJump { prev, index };
                Transition::proceed(format!(
                    "Jumping to index {} (value: {}), comparing with target {}",
                    index, self.values[index], self.target
                ))
                .mark(Lane::Array, index, Role::Current)
            }

            Stage::CheckJump { prev, index } => {
                self.comparisons += 1;
                let value = self.values[index];

                if value >= self.target {
                    self.stage = Stage::SelectBlock {
                        start: prev,
                        end: index,
                    };
                    return Transition::proceed(format!(
                        "Found block! Value {} >= target {}. Linear search from {} to {}",
                        value, self.target, prev, index
                    ))
                    .mark(Lane::Array, index, Role::RangeBoundary);
                }

                if index == self.last() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "Last element {} < target {}: {} not found",
                            value, self.target, self.target
                        ),
                        Lane::Array,
                        self.values.len(),
                    );
                }

                let next = (index + self.jump).min(self.last());
                self.stage = Stage::Jump {
                    prev: index,
                    index: next,
                };
                Transition::proceed(format!(
                    "Value {} < target {}, continue jumping. Previous: {}, Next jump: {}",
                    value, self.target, index, next
                ))
                .mark(Lane::Array, index, Role::Mismatch)
            }

            Stage::SelectBlock { start, end } => {
                self.stage = Stage::Scan {
                    index: start,
                    start,
                    end,
                };
                Transition::proceed(format!("Searching in block [{}, {}]", start, end))
                    .mark_span(Lane::Array, start, end - start + 1, Role::RangeBoundary)
                    .with_detail(StepDetail::Range {
                        left: start,
                        right: end,
                        mid: None,
                    })
            }

            Stage::Scan { index, start, end } => {
                if index > end {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "Block [{}, {}] exhausted: {} not found",
                            start, end, self.target
                        ),
                        Lane::Array,
                        self.values.len(),
                    );
                }

                self.stage = Stage::CheckScan { index, start, end };
                Transition::proceed(format!(
                    "Linear search: checking index {} (value: {}) vs target {}",
                    index, self.values[index], self.target
                ))
                .mark(Lane::Array, index, Role::Compare)
            }

            Stage::CheckScan { index, start, end } => {
                self.comparisons += 1;
                let value = self.values[index];

                if value == self.target {
                    self.stage = Stage::Finished(SearchResult::FoundAt(index));
                    return Transition::found(
                        format!("{} == {}: found at index {}", value, self.target, index),
                        index,
                    )
                    .mark(Lane::Array, index, Role::Found);
                }

                self.stage = Stage::Scan {
                    index: index + 1,
                    start,
                    end,
                };
                Transition::proceed(format!("{} != {}, next in block", value, self.target))
                    .mark(Lane::Array, index, Role::Mismatch)
            }

            Stage::Finished(result) => Transition::finished(result),
        }
    }

    fn phase(&self) -> Phase {
        match self.stage {
            Stage::Start => Phase::NotStarted,
            Stage::Finished(_) => Phase::Done,
            _ => Phase::Searching,
        }
    }

    fn cursor(&self) -> Cursor {
        match self.stage {
            Stage::Start => Cursor::Idle,
            Stage::Jump { prev, index } | Stage::CheckJump { prev, index } => Cursor::Jump {
                prev,
                jump_index: index,
                scan: None,
            },
            Stage::SelectBlock { start, end } => Cursor::Jump {
                prev: start,
                jump_index: end,
                scan: None,
            },
            Stage::Scan { index, start, end } | Stage::CheckScan { index, start, end } => {
                Cursor::Jump {
                    prev: start,
                    jump_index: end,
                    scan: Some(index),
                }
            }
            Stage::Finished(_) => Cursor::Finished,
        }
    }

    fn comparisons(&self) -> usize {
        self.comparisons
    }
}
