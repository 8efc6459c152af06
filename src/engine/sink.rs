// Consumers of engine output

use crate::model::{SearchResult, Step, TableView};

/// Receives every step of a run, in order.
///
/// A sink renders; it never influences the search. The engine calls the
/// optional hooks after `on_step` for the same step: `on_range_highlight`
/// for the range steps of binary and exponential search, `on_table_built`
/// once a KMP or Boyer-Moore table is complete.
pub trait StepSink {
    fn on_step(&mut self, step: &Step);

    /// A search range was (re)drawn
    fn on_range_highlight(
        &mut self,
        _left: usize,
        _right: usize,
        _mid: Option<usize>,
        _description: &str,
    ) {
    }

    /// A preprocessing table finished building
    fn on_table_built(&mut self, _table: &TableView, _description: &str) {}
}

impl<F> StepSink for F
where
    F: FnMut(&Step),
{
    fn on_step(&mut self, step: &Step) {
        self(step)
    }
}

/// Receives the result of a run, exactly once per run
pub trait CompletionSink {
    fn on_complete(&mut self, result: SearchResult);
}

impl<F> CompletionSink for F
where
    F: FnMut(SearchResult),
{
    fn on_complete(&mut self, result: SearchResult) {
        self(result)
    }
}

/// Sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl StepSink for Discard {
    fn on_step(&mut self, _step: &Step) {}
}

impl CompletionSink for Discard {
    fn on_complete(&mut self, _result: SearchResult) {}
}
