//! Linear search.
//!
//! Each element takes two steps: one that puts the cursor on `values[i]`
//! and one that evaluates it as a match or a mismatch.

use crate::algorithms::{SearchMachine, Transition};
use crate::model::{Cursor, Lane, Phase, Role, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Examine { index: usize },
    Evaluate { index: usize },
    Finished(SearchResult),
}

#[derive(Debug, Clone)]
pub struct LinearSearch {
    values: Vec<i32>,
    target: i32,
    stage: Stage,
    comparisons: usize,
}

impl LinearSearch {
    pub fn new(values: Vec<i32>, target: i32) -> Self {
        LinearSearch {
            values,
            target,
            stage: Stage::Start,
            comparisons: 0,
        }
    }
}

impl SearchMachine for LinearSearch {
    fn advance(&mut self) -> Transition {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::Examine { index: 0 };
                Transition::proceed(format!(
                    "Starting Linear Search for {} in {} elements",
                    self.target,
                    self.values.len()
                ))
            }

            Stage::Examine { index } => {
                if index >= self.values.len() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!("Reached the end of the array: {} not found", self.target),
                        Lane::Array,
                        self.values.len(),
                    );
                }

                self.stage = Stage::Evaluate { index };
                Transition::proceed(format!(
                    "Checking index {} (value: {})",
                    index, self.values[index]
                ))
                .mark(Lane::Array, index, Role::Current)
            }

            Stage::Evaluate { index } => {
                self.comparisons += 1;
                let value = self.values[index];

                if value == self.target {
                    self.stage = Stage::Finished(SearchResult::FoundAt(index));
                    Transition::found(
                        format!("{} == {}: found at index {}", value, self.target, index),
                        index,
                    )
                    .mark(Lane::Array, index, Role::Found)
                } else {
                    self.stage = Stage::Examine { index: index + 1 };
                    Transition::proceed(format!(
                        "{} != {}, moving to index {}",
                        value,
                        self.target,
                        index + 1
                    ))
                    .mark(Lane::Array, index, Role::Mismatch)
                }
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
            Stage::Examine { index } | Stage::Evaluate { index } => Cursor::Linear { index },
            Stage::Finished(_) => Cursor::Finished,
        }
    }

    fn comparisons(&self) -> usize {
        self.comparisons
    }
}
