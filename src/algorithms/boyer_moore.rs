//! Boyer-Moore string search with the bad-character rule.
//!
//! The shift table is recorded one pattern position per step. Matching then
//! compares each alignment right to left; on a mismatch the window moves by
//! the shift recorded for the text character under the last pattern
//! position.

use crate::algorithms::{show, trivial_text_result, SearchMachine, Transition};
use crate::comparators::BadCharacterTable;
use crate::model::{Cursor, Lane, Phase, Role, SearchResult, StepDetail, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    /// Record pattern position `i`; `i >= m - 1` closes the table
    Table { i: usize },
    /// Align the last pattern character with `text[text_index]`
    Align { text_index: usize },
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
pub struct BoyerMooreSearch {
    text: Vec<char>,
    pattern: Vec<char>,
    table: BadCharacterTable,
    stage: Stage,
    comparisons: usize,
}

impl BoyerMooreSearch {
    pub fn new(text: Vec<char>, pattern: Vec<char>) -> Self {
        let table = BadCharacterTable::new(pattern.len());
        BoyerMooreSearch {
            text,
            pattern,
            table,
            stage: Stage::Start,
            comparisons: 0,
        }
    }

    /// The bad-character table as recorded so far
    pub fn bad_character_table(&self) -> &BadCharacterTable {
        &self.table
    }

    fn table_detail(&self, complete: bool) -> StepDetail {
        StepDetail::Table {
            table: TableView::BadCharacter(self.table.entries()),
            complete,
        }
    }

    fn window_start(&self, text_index: usize) -> usize {
        text_index + 1 - self.pattern.len()
    }
}

impl SearchMachine for BoyerMooreSearch {
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

                self.stage = Stage::Table { i: 0 };
                Transition::proceed(format!(
                    "Starting Boyer-Moore String Search for pattern \"{}\". Building Bad Character Table",
                    show(&self.pattern)
                ))
            }

            Stage::Table { i } => {
                if i + 1 >= m {
                    self.stage = Stage::Align { text_index: m - 1 };
                    let summary: Vec<String> = self
                        .table
                        .entries()
                        .iter()
                        .map(|(c, shift)| format!("{} -> {}", c, shift))
                        .collect();
                    return Transition::proceed(format!(
                        "Bad Character Table built: [{}]. Now starting pattern matching...",
                        summary.join(", ")
                    ))
                    .with_detail(self.table_detail(true));
                }

                let (c, shift) = self.table.record(&self.pattern, i);
                self.stage = Stage::Table { i: i + 1 };
                Transition::proceed(format!(
                    "pattern[{}]='{}': bad character shift = {} - 1 - {} = {}",
                    i, c, m, i, shift
                ))
                .mark(Lane::Pattern, i, Role::Current)
                .with_detail(self.table_detail(false))
            }

            Stage::Align { text_index } => {
                if text_index >= self.text.len() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "Window passed the end of the text: pattern \"{}\" not found",
                            show(&self.pattern)
                        ),
                        Lane::Text,
                        self.text.len(),
                    );
                }

                let start = self.window_start(text_index);
                self.stage = Stage::Compare {
                    text_index,
                    pattern_index: m - 1,
                };
                Transition::proceed(format!(
                    "Comparing pattern from right to left at position {}",
                    start
                ))
                .mark_span(Lane::Text, start, m, Role::RangeBoundary)
                .with_detail(StepDetail::Range {
                    left: start,
                    right: text_index,
                    mid: None,
                })
            }

            Stage::Compare {
                text_index,
                pattern_index,
            } => {
                let position = self.window_start(text_index) + pattern_index;
                self.stage = Stage::Evaluate {
                    text_index,
                    pattern_index,
                };
                Transition::proceed(format!(
                    "Comparing text[{}]='{}' with pattern[{}]='{}'",
                    position, self.text[position], pattern_index, self.pattern[pattern_index]
                ))
                .mark(Lane::Text, position, Role::Compare)
                .mark(Lane::Pattern, pattern_index, Role::Compare)
            }

            Stage::Evaluate {
                text_index,
                pattern_index,
            } => {
                self.comparisons += 1;
                let start = self.window_start(text_index);
                let position = start + pattern_index;

                if self.text[position] == self.pattern[pattern_index] {
                    if pattern_index == 0 {
                        self.stage = Stage::Finished(SearchResult::FoundAt(start));
                        let message = format!("Pattern found at index {}!", start);
                        return Transition::found(message, start)
                            .mark_span(Lane::Text, start, m, Role::Found);
                    }

                    self.stage = Stage::Compare {
                        text_index,
                        pattern_index: pattern_index - 1,
                    };
                    return Transition::proceed(format!(
                        "Match! Continue matching leftwards ({}/{})",
                        m - pattern_index,
                        m
                    ))
                    .mark(Lane::Text, position, Role::Match)
                    .mark(Lane::Pattern, pattern_index, Role::Match);
                }

                let bad = self.text[text_index];
                let skip = self.table.shift(bad);
                self.stage = Stage::Align {
                    text_index: text_index + skip,
                };
                Transition::proceed(format!(
                    "Mismatch! Bad character '{}' - skipping {} positions",
                    bad, skip
                ))
                .mark(Lane::Text, position, Role::Mismatch)
                .mark(Lane::Pattern, pattern_index, Role::Mismatch)
            }

            Stage::Finished(result) => Transition::finished(result),
        }
    }

    fn phase(&self) -> Phase {
        match self.stage {
            Stage::Start => Phase::NotStarted,
            Stage::Table { .. } => Phase::Preprocessing,
            Stage::Align { .. } | Stage::Compare { .. } | Stage::Evaluate { .. } => {
                Phase::Searching
            }
            Stage::Finished(_) => Phase::Done,
        }
    }

    fn cursor(&self) -> Cursor {
        match self.stage {
            Stage::Start => Cursor::Idle,
            Stage::Table { i } => Cursor::BadCharacter { i },
            Stage::Align { text_index } => Cursor::Text {
                text_index,
                pattern_index: self.pattern.len() - 1,
            },
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::StepOutcome;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(machine: &mut BoyerMooreSearch) -> Vec<Transition> {
        let mut transitions = Vec::new();
        loop {
            let transition = machine.advance();
            let done = transition.outcome != StepOutcome::Continue;
            transitions.push(transition);
            if done {
                return transitions;
            }
        }
    }

    #[test]
    fn table_matches_reference_build() {
        let pattern = chars("EXAMPLE");
        let mut machine = BoyerMooreSearch::new(chars("HERE IS A SIMPLE EXAMPLE"), pattern.clone());
        let transitions = run(&mut machine);

        assert_eq!(
            machine.bad_character_table(),
            &BadCharacterTable::build(&pattern)
        );
        assert_eq!(
            transitions.last().map(|t| t.outcome),
            Some(StepOutcome::Found(17))
        );
    }

    #[test]
    fn one_table_step_per_position_before_the_last() {
        let mut machine = BoyerMooreSearch::new(chars("xxABCx"), chars("ABC"));
        machine.advance();
        assert_eq!(machine.cursor(), Cursor::BadCharacter { i: 0 });
        machine.advance();
        machine.advance();
        assert_eq!(machine.phase(), Phase::Preprocessing);
        assert_eq!(
            machine.bad_character_table().entries(),
            vec![('A', 2), ('B', 1)]
        );

        let complete = machine.advance();
        assert_eq!(
            complete.detail,
            StepDetail::Table {
                table: TableView::BadCharacter(vec![('A', 2), ('B', 1)]),
                complete: true
            }
        );
        assert_eq!(
            machine.cursor(),
            Cursor::Text {
                text_index: 2,
                pattern_index: 2
            }
        );
    }

    #[test]
    fn skip_uses_the_aligned_text_character() {
        // 'x' under the last pattern position is absent: shift by 3
        let mut machine = BoyerMooreSearch::new(chars("abxabc"), chars("abc"));
        let transitions = run(&mut machine);

        let skip = "Mismatch! Bad character 'x' - skipping 3 positions";
        assert!(transitions.iter().any(|t| t.description == skip));
        assert_eq!(
            transitions.last().map(|t| t.outcome),
            Some(StepOutcome::Found(3))
        );
        assert_eq!(machine.comparisons(), 4);
    }

    #[test]
    fn single_character_pattern() {
        let mut machine = BoyerMooreSearch::new(chars("abc"), chars("c"));
        let transitions = run(&mut machine);
        assert_eq!(
            transitions.last().map(|t| t.outcome),
            Some(StepOutcome::Found(2))
        );
        assert!(machine.bad_character_table().is_empty());
    }
}
