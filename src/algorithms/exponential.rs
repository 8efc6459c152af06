//! Exponential search.
//!
//! Phase one checks `values[0]`, then doubles a bound (1, 2, 4, ...) while
//! the element under it is below the target. Phase two hands the last
//! doubling interval to the same [`RangeSearch`] binary search uses.

use crate::algorithms::binary::RangeSearch;
use crate::algorithms::{SearchMachine, Transition};
use crate::model::{Cursor, Lane, Phase, Role, SearchResult, StepDetail};

#[derive(Debug, Clone)]
enum Stage {
    Start,
    ShowFirst,
    CheckFirst,
    /// Show the element under `bound`, or close the doubling phase once the
    /// bound has run off the end
    Bound { bound: usize },
    CheckBound { bound: usize },
    Range(RangeSearch),
    Finished(SearchResult),
}

#[derive(Debug, Clone)]
pub struct ExponentialSearch {
    values: Vec<i32>,
    target: i32,
    stage: Stage,
    /// Comparisons made during the doubling phase
    comparisons: usize,
}

impl ExponentialSearch {
    pub fn new(values: Vec<i32>, target: i32) -> Self {
        ExponentialSearch {
            values,
            target,
            stage: Stage::Start,
            comparisons: 0,
        }
    }

    /// Close the doubling phase on `bound` and emit the range step
    fn select_range(&mut self, bound: usize, reason: String) -> Transition {
        let left = bound / 2;
        let right = bound.min(self.values.len() - 1);
        self.stage = Stage::Range(RangeSearch::new(left as isize, right as isize));

        Transition::proceed(format!(
            "{}. Range found! Binary search from index {} to {}",
            reason, left, right
        ))
        .mark_span(Lane::Array, left, right - left + 1, Role::RangeBoundary)
        .with_detail(StepDetail::Range {
            left,
            right,
            mid: None,
        })
    }
}

impl SearchMachine for ExponentialSearch {
    fn advance(&mut self) -> Transition {
        match &mut self.stage {
            Stage::Start => {
                if self.values.is_empty() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        "Array is empty: nothing to search",
                        Lane::Array,
                        0,
                    );
                }
                self.stage = Stage::ShowFirst;
                Transition::proceed(format!("Starting Exponential Search for {}", self.target))
            }

            Stage::ShowFirst => {
                self.stage = Stage::CheckFirst;
                Transition::proceed(format!(
                    "Checking first element (value: {})",
                    self.values[0]
                ))
                .mark(Lane::Array, 0, Role::Current)
            }

            Stage::CheckFirst => {
                self.comparisons += 1;
                if self.values[0] == self.target {
                    self.stage = Stage::Finished(SearchResult::FoundAt(0));
                    return Transition::found(
                        format!("Found! Target {} found at index 0", self.target),
                        0,
                    )
                    .mark(Lane::Array, 0, Role::Found);
                }

                self.stage = Stage::Bound { bound: 1 };
                Transition::proceed(format!(
                    "{} != {}, starting to double the bound from 1",
                    self.values[0], self.target
                ))
                .mark(Lane::Array, 0, Role::Mismatch)
            }

            Stage::Bound { bound } => {
                let bound = *bound;
                if bound >= self.values.len() {
                    return self.select_range(
                        bound,
                        format!("Bound {} is past the end of the array", bound),
                    );
                }

                self.stage = Stage::CheckBound { bound };
                Transition::proceed(format!(
                    "Exponential phase: checking index {} (bound: {}, value: {})",
                    bound, bound, self.values[bound]
                ))
                .mark(Lane::Array, bound, Role::Current)
            }

            Stage::CheckBound { bound } => {
                let bound = *bound;
                self.comparisons += 1;
                let value = self.values[bound];

                if value < self.target {
                    self.stage = Stage::Bound { bound: bound * 2 };
                    return Transition::proceed(format!(
                        "Value {} < target {}, doubling bound from {} to {}",
                        value,
                        self.target,
                        bound,
                        bound * 2
                    ))
                    .mark(Lane::Array, bound, Role::Mismatch);
                }

                self.select_range(bound, format!("Value {} >= target {}", value, self.target))
            }

            Stage::Range(range) => {
                let transition = range.advance(&self.values, self.target);
                if let Some(result) = transition.outcome.result() {
                    self.comparisons += range.comparisons();
                    self.stage = Stage::Finished(result);
                }
                transition
            }

            Stage::Finished(result) => Transition::finished(*result),
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
        match &self.stage {
            Stage::Start => Cursor::Idle,
            Stage::ShowFirst | Stage::CheckFirst => Cursor::Doubling { bound: 0 },
            Stage::Bound { bound } | Stage::CheckBound { bound } => {
                Cursor::Doubling { bound: *bound }
            }
            Stage::Range(range) => range.cursor(),
            Stage::Finished(_) => Cursor::Finished,
        }
    }

    fn comparisons(&self) -> usize {
        match &self.stage {
            Stage::Range(range) => self.comparisons + range.comparisons(),
            _ => self.comparisons,
        }
    }
}
