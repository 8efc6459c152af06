//! Naive string search: try every alignment, comparing left to right.

use crate::algorithms::{show, trivial_text_result, SearchMachine, Transition};
use crate::model::{Cursor, Lane, Phase, Role, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    /// Show `text[start + offset]` against `pattern[offset]`
    Compare { start: usize, offset: usize },
    Evaluate { start: usize, offset: usize },
    Finished(SearchResult),
}

#[derive(Debug, Clone)]
pub struct NaiveSearch {
    text: Vec<char>,
    pattern: Vec<char>,
    stage: Stage,
    comparisons: usize,
}

impl NaiveSearch {
    pub fn new(text: Vec<char>, pattern: Vec<char>) -> Self {
        NaiveSearch {
            text,
            pattern,
            stage: Stage::Start,
            comparisons: 0,
        }
    }
}

impl SearchMachine for NaiveSearch {
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

                self.stage = Stage::Compare {
                    start: 0,
                    offset: 0,
                };
                Transition::proceed(format!(
                    "Starting Naive String Search for pattern \"{}\" in text",
                    show(&self.pattern)
                ))
            }

            Stage::Compare { start, offset } => {
                if start + m > self.text.len() {
                    self.stage = Stage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "No alignment left: pattern \"{}\" not found",
                            show(&self.pattern)
                        ),
                        Lane::Text,
                        self.text.len(),
                    );
                }

                let text_index = start + offset;
                self.stage = Stage::Evaluate { start, offset };
                Transition::proceed(format!(
                    "Comparing pattern at position {}: text[{}]='{}' with pattern[{}]='{}'",
                    start, text_index, self.text[text_index], offset, self.pattern[offset]
                ))
                .mark_span(Lane::Text, start, offset, Role::Match)
                .mark_span(Lane::Pattern, 0, offset, Role::Match)
                .mark(Lane::Text, text_index, Role::Compare)
                .mark(Lane::Pattern, offset, Role::Compare)
            }

            Stage::Evaluate { start, offset } => {
                self.comparisons += 1;
                let text_index = start + offset;

                if self.text[text_index] != self.pattern[offset] {
                    self.stage = Stage::Compare {
                        start: start + 1,
                        offset: 0,
                    };
                    return Transition::proceed(format!(
                        "Mismatch! Moving to next starting position ({} -> {})",
                        start,
                        start + 1
                    ))
                    .mark(Lane::Text, text_index, Role::Mismatch)
                    .mark(Lane::Pattern, offset, Role::Mismatch);
                }

                if offset + 1 == m {
                    self.stage = Stage::Finished(SearchResult::FoundAt(start));
                    return Transition::found(format!("Pattern found at index {}!", start), start)
                        .mark_span(Lane::Text, start, m, Role::Found);
                }

                self.stage = Stage::Compare {
                    start,
                    offset: offset + 1,
                };
                Transition::proceed(format!(
                    "Character match! Continue comparing... ({}/{})",
                    offset + 1,
                    m
                ))
                .mark(Lane::Text, text_index, Role::Match)
                .mark(Lane::Pattern, offset, Role::Match)
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
            Stage::Compare { start, offset } | Stage::Evaluate { start, offset } => Cursor::Text {
                text_index: start,
                pattern_index: offset,
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
    use crate::model::Highlight;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(machine: &mut NaiveSearch) -> StepOutcome {
        loop {
            let outcome = machine.advance().outcome;
            if outcome != StepOutcome::Continue {
                return outcome;
            }
        }
    }

    #[test]
    fn finds_after_partial_match() {
        let mut machine = NaiveSearch::new(chars("aab"), chars("ab"));
        assert_eq!(run(&mut machine), StepOutcome::Found(1));
        // a=a, a!=b, a=a, b=b
        assert_eq!(machine.comparisons(), 4);
    }

    #[test]
    fn runs_out_of_alignments() {
        let mut machine = NaiveSearch::new(chars("abcabc"), chars("cab"));
        assert_eq!(run(&mut machine), StepOutcome::Found(2));

        let mut machine = NaiveSearch::new(chars("abcabc"), chars("cc"));
        assert_eq!(run(&mut machine), StepOutcome::NotFound);
        assert_eq!(machine.phase(), Phase::Done);
    }

    #[test]
    fn degenerate_inputs_finish_on_first_advance() {
        let mut machine = NaiveSearch::new(chars("abc"), Vec::new());
        assert_eq!(machine.advance().outcome, StepOutcome::Found(0));

        let mut machine = NaiveSearch::new(chars("ab"), chars("abc"));
        assert_eq!(machine.advance().outcome, StepOutcome::NotFound);
    }

    #[test]
    fn compare_step_highlights_both_lanes() {
        let mut machine = NaiveSearch::new(chars("xyz"), chars("yz"));
        machine.advance();
        let compare = machine.advance();
        let pattern_compare = Highlight::new(Lane::Pattern, 0, Role::Compare);
        assert!(compare.highlights.contains(&pattern_compare));
        assert_eq!(
            machine.cursor(),
            Cursor::Text {
                text_index: 0,
                pattern_index: 0
            }
        );
    }

    #[test]
    fn cursor_holds_alignment_start() {
        let mut machine = NaiveSearch::new(chars("aab"), chars("ab"));
        machine.advance();
        machine.advance();
        machine.advance();
        // a=a at alignment 0, next compares text[1] against pattern[1]
        assert_eq!(
            machine.cursor(),
            Cursor::Text {
                text_index: 0,
                pattern_index: 1
            }
        );

        machine.advance();
        machine.advance();
        assert_eq!(
            machine.cursor(),
            Cursor::Text {
                text_index: 1,
                pattern_index: 0
            }
        );
    }
}
