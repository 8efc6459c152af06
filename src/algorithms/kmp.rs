//! Knuth-Morris-Pratt string search.
//!
//! The failure function is built one iteration per step (a match, a
//! mismatch retry, or a zero entry) before matching starts. During matching
//! the text index never moves backwards: a mismatch after a partial match
//! falls back through the table instead.

use crate::algorithms::{show, trivial_text_result, SearchMachine, Transition};
use crate::model::{Cursor, Lane, Phase, Role, SearchResult, StepDetail, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    FailureBase,
    /// One iteration of failure-function construction; `i >= m` closes the
    /// table
    FailureStep { i: usize, j: usize },
    Compare {
        text_index: usize,
        pattern_index: usize,
    },
    Evaluate {
        text_index: usize,
        pattern_index: usize,
    },
    Finished(SearchResult),
}

#[derive(Debug, Clone)]
pub struct KmpSearch {
    text: Vec<char>,
    pattern: Vec<char>,
    failure: Vec<usize>,
    stage: Stage,
    comparisons: usize,
}

impl KmpSearch {
    pub fn new(text: Vec<char>, pattern: Vec<char>) -> Self {
        let failure = vec![0; pattern.len()];
        KmpSearch {
            text,
            pattern,
            failure,
            stage: Stage::Start,
            comparisons: 0,
        }
    }

    /// The failure function as built so far. Entries past the construction
    /// cursor are still zero.
    pub fn failure_table(&self) -> &[usize] {
        &self.failure
    }

    fn table_detail(&self, complete: bool) -> StepDetail {
        StepDetail::Table {
            table: TableView::Failure(self.failure.clone()),
            complete,
        }
    }
}

impl SearchMachine for KmpSearch {
    fn advance(&mut self) -> Transition {
        let m = self.pattern.len();

        match self.stage {
            Stage::Start => {
                if let Some(result) = trivial_text_result(&self.text, &self.pattern) {
                    self.stage = Stage::Finished(result);
                    return match result {
                        SearchResult::FoundAt(index) => {
                            Transition::found("Empty pattern matches at index 0", index)
                        }
                        SearchResult::NotFound => Transition::not_found(
                            "Pattern is longer than the text: no alignment possible",
                            Lane::Text,
                            self.text.len(),
                        ),
                    };
                }

                self.stage = Stage::FailureBase;
                Transition::proceed(format!(
                    "Starting KMP String Search for pattern \"{}\" in text. Building failure function (partial match table)",
                    show(&self.pattern)
                ))
            }

            Stage::FailureBase => {
                self.failure[0] = 0;
                self.stage = Stage::FailureStep { i: 1, j: 0 };
                Transition::proceed("failure[0] = 0 (base case)")
                    .mark(Lane::Table, 0, Role::Current)
                    .with_detail(self.table_detail(false))
            }

            Stage::FailureStep { i, j } => {
                if i >= m {
                    self.stage = Stage::Compare {
                        text_index: 0,
                        pattern_index: 0,
                    };
                    return Transition::proceed(
                        "Failure function complete! Now starting pattern matching...",
                    )
                    .with_detail(self.table_detail(true));
                }

                self.comparisons += 1;
                let (pi, pj) = (self.pattern[i], self.pattern[j]);

                let transition = if pi == pj {
                    self.failure[i] = j + 1;
                    self.stage = Stage::FailureStep { i: i + 1, j: j + 1 };
                    Transition::proceed(format!(
                        "pattern[{}]='{}' == pattern[{}]='{}'. Match! failure[{}] = {}",
                        i,
                        pi,
                        j,
                        pj,
                        i,
                        j + 1
                    ))
                    .mark(Lane::Pattern, i, Role::Match)
                    .mark(Lane::Pattern, j, Role::Match)
                } else if j != 0 {
                    let fallback = self.failure[j - 1];
                    self.stage = Stage::FailureStep { i, j: fallback };
                    Transition::proceed(format!(
                        "pattern[{}]='{}' != pattern[{}]='{}'. Mismatch! Using failure[{}] = {}",
                        i,
                        pi,
                        j,
                        pj,
                        j - 1,
                        fallback
                    ))
                    .mark(Lane::Pattern, i, Role::Mismatch)
                    .mark(Lane::Pattern, j, Role::Mismatch)
                    .mark(Lane::Table, j - 1, Role::Current)
                } else {
                    self.failure[i] = 0;
                    self.stage = Stage::FailureStep { i: i + 1, j: 0 };
                    Transition::proceed(format!(
                        "pattern[{}]='{}' != pattern[0]='{}'. No match, failure[{}] = 0",
                        i, pi, pj, i
                    ))
                    .mark(Lane::Pattern, i, Role::Mismatch)
                    .mark(Lane::Pattern, 0, Role::Mismatch)
                };

                transition
                    .mark(Lane::Table, i, Role::Current)
                    .with_detail(self.table_detail(false))
            }

            Stage::Compare {
                text_index,
                pattern_index,
            } => {
                if text_index >= self.text.len() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "Reached the end of the text: pattern \"{}\" not found",
                            show(&self.pattern)
                        ),
                        Lane::Text,
                        self.text.len(),
                    );
                }

                self.stage = Stage::Evaluate {
                    text_index,
                    pattern_index,
                };
                Transition::proceed(format!(
                    "Comparing text[{}]='{}' with pattern[{}]='{}'",
                    text_index,
                    self.text[text_index],
                    pattern_index,
                    self.pattern[pattern_index]
                ))
                .mark(Lane::Text, text_index, Role::Compare)
                .mark(Lane::Pattern, pattern_index, Role::Compare)
            }

            Stage::Evaluate {
                text_index,
                pattern_index,
            } => {
                self.comparisons += 1;

                if self.text[text_index] == self.pattern[pattern_index] {
                    let matched = pattern_index + 1;
                    if matched == m {
                        let start = text_index + 1 - m;
                        self.stage = Stage::Finished(SearchResult::FoundAt(start));
                        return Transition::found(
                            format!("Pattern found at index {}!", start),
                            start,
                        )
                        .mark_span(Lane::Text, start, m, Role::Found);
                    }

                    self.stage = Stage::Compare {
                        text_index: text_index + 1,
                        pattern_index: matched,
                    };
                    return Transition::proceed(format!(
                        "Match! Continue comparing... ({}/{})",
                        matched, m
                    ))
                    .mark(Lane::Text, text_index, Role::Match)
                    .mark(Lane::Pattern, pattern_index, Role::Match);
                }

                let transition = if pattern_index != 0 {
                    let fallback = self.failure[pattern_index - 1];
                    self.stage = Stage::Compare {
                        text_index,
                        pattern_index: fallback,
                    };
                    Transition::proceed(format!(
                        "Mismatch! Using failure[{}] = {} to skip",
                        pattern_index - 1,
                        fallback
                    ))
                    .mark(Lane::Table, pattern_index - 1, Role::Current)
                } else {
                    self.stage = Stage::Compare {
                        text_index: text_index + 1,
                        pattern_index: 0,
                    };
                    Transition::proceed("No partial match, move to next character")
                };

                transition
                    .mark(Lane::Text, text_index, Role::Mismatch)
                    .mark(Lane::Pattern, pattern_index, Role::Mismatch)
            }

            Stage::Finished(result) => Transition::finished(result),
        }
    }

    fn phase(&self) -> Phase {
        match self.stage {
            Stage::Start => Phase::NotStarted,
            Stage::FailureBase | Stage::FailureStep { .. } => Phase::Preprocessing,
            Stage::Compare { .. } | Stage::Evaluate { .. } => Phase::Searching,
            Stage::Finished(_) => Phase::Done,
        }
    }

    fn cursor(&self) -> Cursor {
        match self.stage {
            Stage::Start => Cursor::Idle,
            Stage::FailureBase => Cursor::FailureFunction { i: 0, j: 0 },
            Stage::FailureStep { i, j } => Cursor::FailureFunction { i, j },
            Stage::Compare {
                text_index,
                pattern_index,
            }
            | Stage::Evaluate {
                text_index,
                pattern_index,
            } => Cursor::Text {
                text_index,
                pattern_index,
            },
            Stage::Finished(_) => Cursor::Finished,
        }
    }

    fn comparisons(&self) -> usize {
        self.comparisons
    }
}
