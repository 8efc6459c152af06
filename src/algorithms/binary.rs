//! Binary search, plus the range-halving core that exponential search reuses.

use crate::algorithms::{SearchMachine, Transition};
use crate::model::{Cursor, Lane, Phase, Role, SearchResult, StepDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeStage {
    /// Compute `mid` for the current range and show it
    Probe,
    /// Compare `values[mid]` against the target and shrink the range
    Compare { mid: usize },
    Finished(SearchResult),
}

/// Resumable halving over the inclusive range `[left, right]`.
///
/// Invariant while searching: `left <= right` at every probe, and
/// `mid = left + (right - left) / 2`.
#[derive(Debug, Clone)]
pub(crate) struct RangeSearch {
    left: isize,
    right: isize,
    stage: RangeStage,
    comparisons: usize,
}

impl RangeSearch {
    pub(crate) fn new(left: isize, right: isize) -> Self {
        RangeSearch {
            left,
            right,
            stage: RangeStage::Probe,
            comparisons: 0,
        }
    }

    pub(crate) fn advance(&mut self, values: &[i32], target: i32) -> Transition {
        match self.stage {
            RangeStage::Probe => {
                if self.left > self.right {
                    self.stage = RangeStage::Finished(SearchResult::NotFound);
                    return Transition::not_found(
                        format!(
                            "Range is empty (left {} > right {}): {} not found",
                            self.left, self.right, target
                        ),
                        Lane::Array,
                        values.len(),
                    );
                }

                let left = self.left as usize;
                let right = self.right as usize;
                let mid = left + (right - left) / 2;
                self.stage = RangeStage::Compare { mid };

                Transition::proceed(format!(
                    "Searching in range [{}, {}], middle at index {} (value: {})",
                    left, right, mid, values[mid]
                ))
                .mark(Lane::Array, left, Role::RangeBoundary)
                .mark(Lane::Array, right, Role::RangeBoundary)
                .mark(Lane::Array, mid, Role::Current)
                .with_detail(StepDetail::Range {
                    left,
                    right,
                    mid: Some(mid),
                })
            }

            RangeStage::Compare { mid } => {
                self.comparisons += 1;
                let value = values[mid];

                if value == target {
                    self.stage = RangeStage::Finished(SearchResult::FoundAt(mid));
                    return Transition::found(
                        format!(
                            "Middle element {} equals target {}: found at index {}",
                            value, target, mid
                        ),
                        mid,
                    )
                    .mark(Lane::Array, mid, Role::Found);
                }

                let half = if value > target {
                    self.right = mid as isize - 1;
                    "left"
                } else {
                    self.left = mid as isize + 1;
                    "right"
                };
                self.stage = RangeStage::Probe;

                Transition::proceed(format!(
                    "{} {} {}, searching {} half. New range: [{}, {}]",
                    value,
                    if value > target { ">" } else { "<" },
                    target,
                    half,
                    self.left,
                    self.right
                ))
                .mark(Lane::Array, mid, Role::Mismatch)
            }

            RangeStage::Finished(result) => Transition::finished(result),
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        matches!(self.stage, RangeStage::Finished(_))
    }

    pub(crate) fn cursor(&self) -> Cursor {
        match self.stage {
            RangeStage::Probe => Cursor::Range {
                left: self.left,
                right: self.right,
                mid: None,
            },
            RangeStage::Compare { mid } => Cursor::Range {
                left: self.left,
                right: self.right,
                mid: Some(mid),
            },
            RangeStage::Finished(_) => Cursor::Finished,
        }
    }

    pub(crate) fn comparisons(&self) -> usize {
        self.comparisons
    }
}

#[derive(Debug, Clone)]
pub struct BinarySearch {
    values: Vec<i32>,
    target: i32,
    /// `None` until the introductory step has been emitted
    range: Option<RangeSearch>,
}

impl BinarySearch {
    pub fn new(values: Vec<i32>, target: i32) -> Self {
        BinarySearch {
            values,
            target,
            range: None,
        }
    }
}

impl SearchMachine for BinarySearch {
    fn advance(&mut self) -> Transition {
        match self.range.as_mut() {
            Some(range) => range.advance(&self.values, self.target),
            None => {
                let n = self.values.len();
                self.range = Some(RangeSearch::new(0, n as isize - 1));

                let start = Transition::proceed(format!(
                    "Starting Binary Search for {} in sorted array of {} elements",
                    self.target, n
                ));
                if n == 0 {
                    return start;
                }
                start.with_detail(StepDetail::Range {
                    left: 0,
                    right: n - 1,
                    mid: None,
                })
            }
        }
    }

    fn phase(&self) -> Phase {
        match &self.range {
            None => Phase::NotStarted,
            Some(range) if range.is_finished() => Phase::Done,
            Some(_) => Phase::Searching,
        }
    }

    fn cursor(&self) -> Cursor {
        self.range
            .as_ref()
            .map_or(Cursor::Idle, RangeSearch::cursor)
    }

    fn comparisons(&self) -> usize {
        self.range.as_ref().map_or(0, RangeSearch::comparisons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::StepOutcome;
    use pretty_assertions::assert_eq;

    fn run(machine: &mut BinarySearch) -> (Vec<Cursor>, StepOutcome) {
        let mut cursors = Vec::new();
        loop {
            let outcome = machine.advance().outcome;
            cursors.push(machine.cursor());
            if outcome != StepOutcome::Continue {
                return (cursors, outcome);
            }
        }
    }

    #[test]
    fn textbook_example_takes_three_comparisons() {
        let mut machine = BinarySearch::new(vec![1, 3, 5, 7, 9, 11], 7);
        let (cursors, outcome) = run(&mut machine);

        assert_eq!(outcome, StepOutcome::Found(3));
        assert_eq!(machine.comparisons(), 3);

        let probed: Vec<usize> = cursors
            .iter()
            .filter_map(|c| match c {
                Cursor::Range { mid: Some(mid), .. } => Some(*mid),
                _ => None,
            })
            .collect();
        assert_eq!(probed, vec![2, 4, 3]);
    }

    #[test]
    fn range_empties_on_the_left() {
        let mut machine = BinarySearch::new(vec![5, 6, 7], 1);
        let (cursors, outcome) = run(&mut machine);

        assert_eq!(outcome, StepOutcome::NotFound);
        assert!(cursors.contains(&Cursor::Range {
            left: 0,
            right: -1,
            mid: None
        }));
    }

    #[test]
    fn single_element() {
        let mut machine = BinarySearch::new(vec![42], 42);
        let (_, outcome) = run(&mut machine);
        assert_eq!(outcome, StepOutcome::Found(0));
        assert_eq!(machine.phase(), Phase::Done);
    }

    #[test]
    fn probe_step_carries_range_detail() {
        let mut machine = BinarySearch::new(vec![1, 2, 3, 4], 4);
        machine.advance();
        let probe = machine.advance();
        assert_eq!(
            probe.detail,
            StepDetail::Range {
                left: 0,
                right: 3,
                mid: Some(1)
            }
        );
    }
}
