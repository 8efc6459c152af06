// Step history for replaying a run

use crate::engine::{HistoryError, StepSink, DEFAULT_HISTORY_LIMIT};
use crate::model::Step;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Bounded log of emitted steps with a replay position.
///
/// Steps are only ever appended. The replay position is independent of the
/// engine: moving it backwards shows an earlier step without touching the
/// run that produced it.
#[derive(Debug, Clone)]
pub struct StepHistory {
    steps: Vec<Step>,
    max_memory: usize,
    current_memory: usize,
    position: usize,
}

impl StepHistory {
    pub fn new(max_memory: usize) -> Self {
        StepHistory {
            steps: Vec::new(),
            max_memory,
            current_memory: 0,
            position: 0,
        }
    }

    /// Append a step and move the replay position onto it
    pub fn push(&mut self, step: Step) -> Result<(), HistoryError> {
        let step_size = step.estimated_size();

        if self.current_memory + step_size > self.max_memory {
            return Err(HistoryError::LimitExceeded {
                current: self.current_memory,
                requested: step_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += step_size;
        self.steps.push(step);
        self.position = self.steps.len() - 1;
        Ok(())
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    /// Step at the replay position
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn step_backward(&mut self) -> Result<&Step, HistoryError> {
        if self.steps.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.position == 0 {
            return Err(HistoryError::AtStart);
        }
        self.position -= 1;
        Ok(&self.steps[self.position])
    }

    pub fn step_forward(&mut self) -> Result<&Step, HistoryError> {
        if self.steps.is_empty() {
            return Err(HistoryError::Empty);
        }
        if self.position + 1 >= self.steps.len() {
            return Err(HistoryError::AtEnd);
        }
        self.position += 1;
        Ok(&self.steps[self.position])
    }

    pub fn rewind_to_start(&mut self) -> Result<&Step, HistoryError> {
        let first = self.steps.first().ok_or(HistoryError::Empty)?;
        self.position = 0;
        Ok(first)
    }

    pub fn jump_to_end(&mut self) -> Result<&Step, HistoryError> {
        let last = self.steps.last().ok_or(HistoryError::Empty)?;
        self.position = self.steps.len() - 1;
        Ok(last)
    }

    /// Forget every step, keeping the limit
    pub fn clear(&mut self) {
        self.steps.clear();
        self.current_memory = 0;
        self.position = 0;
    }
}

impl Default for StepHistory {
    fn default() -> Self {
        StepHistory::new(DEFAULT_HISTORY_LIMIT)
    }
}

/// A [`StepSink`] that appends into a shared [`StepHistory`].
///
/// Clone it before handing it to an engine and keep the clone to read the
/// history back. A step that would exceed the history limit is dropped with
/// a warning; the run itself carries on.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    history: Rc<RefCell<StepHistory>>,
}

impl Recorder {
    pub fn new(max_memory: usize) -> Self {
        Recorder {
            history: Rc::new(RefCell::new(StepHistory::new(max_memory))),
        }
    }

    pub fn history(&self) -> Rc<RefCell<StepHistory>> {
        Rc::clone(&self.history)
    }

    /// Copy of every recorded step
    pub fn steps(&self) -> Vec<Step> {
        self.history.borrow().steps().to_vec()
    }
}

impl StepSink for Recorder {
    fn on_step(&mut self, step: &Step) {
        if let Err(err) = self.history.borrow_mut().push(step.clone()) {
            warn!("dropping step {}: {}", step.number, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cursor, Phase, StepDetail};

    fn step(number: usize) -> Step {
        Step {
            number,
            phase: Phase::Searching,
            description: format!("step {}", number),
            highlights: Vec::new(),
            detail: StepDetail::None,
            cursor: Cursor::Idle,
        }
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut history = StepHistory::default();
        assert_eq!(history.step_backward().unwrap_err(), HistoryError::Empty);

        for n in 1..=3 {
            history.push(step(n)).unwrap();
        }
        assert_eq!(history.current().map(|s| s.number), Some(3));
        assert_eq!(history.step_forward().unwrap_err(), HistoryError::AtEnd);

        assert_eq!(history.step_backward().map(|s| s.number), Ok(2));
        assert_eq!(history.rewind_to_start().map(|s| s.number), Ok(1));
        assert_eq!(history.step_backward().unwrap_err(), HistoryError::AtStart);
        assert_eq!(history.jump_to_end().map(|s| s.number), Ok(3));
    }

    #[test]
    fn limit_rejects_without_recording() {
        let size = step(1).estimated_size();
        let mut history = StepHistory::new(size * 2);
        history.push(step(1)).unwrap();
        history.push(step(2)).unwrap();

        let err = history.push(step(3)).unwrap_err();
        assert!(matches!(err, HistoryError::LimitExceeded { .. }));
        assert_eq!(history.len(), 2);
        assert_eq!(history.memory_usage(), size * 2);
    }

    #[test]
    fn recorder_shares_history() {
        let recorder = Recorder::default();
        let mut sink = recorder.clone();
        sink.on_step(&step(1));
        sink.on_step(&step(2));

        assert_eq!(recorder.history().borrow().len(), 2);
        assert_eq!(recorder.steps()[1].number, 2);
    }
}
