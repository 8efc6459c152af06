// Integration tests for the pause/resume/step/stop protocol

use pretty_assertions::assert_eq;
use seekstep::algorithms::{trace, AlgorithmKind};
use seekstep::engine::{Discard, Engine, Status, StepSink};
use seekstep::history::Recorder;
use seekstep::model::{Cursor, Family, Phase, SearchInput, SearchResult, Step, TableView};
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use test_case::test_case;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_input(kind: AlgorithmKind, present: bool) -> SearchInput {
    match (kind.family(), present) {
        (Family::Array, true) => SearchInput::array(&[2, 5, 8, 12, 16, 23, 38, 56, 72, 91], 72),
        (Family::Array, false) => SearchInput::array(&[2, 5, 8, 12, 16, 23, 38, 56, 72, 91], 40),
        (Family::Text, true) => SearchInput::text("ABABDABACDABABCABAB", "ABABCABAB"),
        (Family::Text, false) => SearchInput::text("ABABDABACDABABCABAB", "ABABE"),
    }
}

fn results_log() -> (Rc<RefCell<Vec<SearchResult>>>, impl FnMut(SearchResult)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&log);
    (log, move |result: SearchResult| sink_log.borrow_mut().push(result))
}

/// Drive `engine` with every control operation mixed in until it finishes
fn drive_interleaved(engine: &mut Engine) {
    let mut round = 0;
    while engine.status() != Status::Done {
        match round % 5 {
            0 | 4 => {
                engine.tick();
            }
            1 => engine.pause(),
            2 => engine.step().unwrap(),
            _ => {
                engine.resume().unwrap();
                engine.resume().unwrap();
            }
        }
        round += 1;
    }
}

#[test]
fn interleaved_runs_reproduce_the_uninterrupted_trace() {
    init_logging();

    for kind in AlgorithmKind::iter() {
        for present in [true, false] {
            let input = sample_input(kind, present);
            let reference = trace(kind, &input).unwrap();

            let recorder = Recorder::default();
            let (results, completion) = results_log();
            let mut engine = Engine::new(kind);
            engine.start(input, recorder.clone(), completion).unwrap();
            drive_interleaved(&mut engine);

            assert_eq!(
                recorder.steps(),
                reference.steps,
                "{} present={}",
                kind,
                present
            );
            assert_eq!(*results.borrow(), vec![reference.result], "{}", kind);
        }
    }
}

#[test]
fn step_numbers_increase_by_one() {
    for kind in AlgorithmKind::iter() {
        let recorder = Recorder::default();
        let mut engine = Engine::new(kind);
        engine
            .start(sample_input(kind, false), recorder.clone(), Discard)
            .unwrap();
        drive_interleaved(&mut engine);

        let numbers: Vec<usize> = recorder.steps().iter().map(|s| s.number).collect();
        let expected: Vec<usize> = (1..=numbers.len()).collect();
        assert_eq!(numbers, expected, "{}", kind);
        assert_eq!(engine.current_step_count(), numbers.len());
    }
}

#[test]
fn resume_while_running_never_emits() {
    let recorder = Recorder::default();
    let mut engine = Engine::new(AlgorithmKind::Linear);
    engine
        .start(
            SearchInput::array(&[9, 8, 7, 6], 6),
            recorder.clone(),
            Discard,
        )
        .unwrap();

    engine.tick();
    for _ in 0..10 {
        engine.resume().unwrap();
    }
    assert_eq!(recorder.steps().len(), 1);

    engine.tick();
    assert_eq!(recorder.steps().len(), 2);
}

#[test]
fn single_step_only_while_paused() {
    let mut engine = Engine::new(AlgorithmKind::Kmp);
    engine
        .start(SearchInput::text("aaab", "ab"), Discard, Discard)
        .unwrap();

    assert!(engine.step().is_err());
    engine.pause();
    assert!(engine.is_paused());

    engine.step().unwrap();
    engine.step().unwrap();
    assert_eq!(engine.current_step_count(), 2);
    assert_eq!(engine.status(), Status::Paused);
    assert_eq!(engine.status_message(), "Paused");

    // ticks do nothing while paused
    engine.tick();
    assert_eq!(engine.current_step_count(), 2);
}

#[test_case(AlgorithmKind::Binary ; "binary")]
#[test_case(AlgorithmKind::Exponential ; "exponential")]
#[test_case(AlgorithmKind::BoyerMoore ; "boyer moore")]
fn stop_silences_both_sinks(kind: AlgorithmKind) {
    let recorder = Recorder::default();
    let (results, completion) = results_log();
    let mut engine = Engine::new(kind);
    engine
        .start(sample_input(kind, true), recorder.clone(), completion)
        .unwrap();

    engine.tick();
    engine.tick();
    engine.stop();
    assert!(engine.is_stopped());

    assert_eq!(engine.tick(), Status::Stopped);
    assert!(engine.resume().is_err());
    assert!(engine.step().is_err());
    engine.pause();

    assert_eq!(recorder.steps().len(), 2);
    assert!(results.borrow().is_empty());
    assert_eq!(engine.result(), None);
    assert_eq!(engine.status_message(), "Stopped");
}

#[test]
fn stop_keeps_the_position_of_the_run() {
    let mut engine = Engine::new(AlgorithmKind::Kmp);
    engine
        .start(sample_input(AlgorithmKind::Kmp, true), Discard, Discard)
        .unwrap();
    for _ in 0..4 {
        engine.tick();
    }
    let (phase, cursor, comparisons) = (engine.phase(), engine.cursor(), engine.comparisons());
    assert_eq!(phase, Phase::Preprocessing);
    assert_eq!(cursor, Some(Cursor::FailureFunction { i: 3, j: 1 }));
    assert_eq!(comparisons, 2);

    engine.stop();
    assert_eq!(engine.phase(), phase);
    assert_eq!(engine.cursor(), cursor);
    assert_eq!(engine.comparisons(), comparisons);
    assert_eq!(engine.current_step_count(), 4);

    // still frozen after further ticks
    engine.tick();
    assert_eq!(engine.cursor(), cursor);
}

#[test]
fn stopped_engine_can_start_again() {
    let (results, completion) = results_log();
    let mut engine = Engine::new(AlgorithmKind::Naive);
    engine
        .start(SearchInput::text("haystack", "st"), Discard, Discard)
        .unwrap();
    engine.tick();
    engine.stop();

    engine
        .start(SearchInput::text("haystack", "st"), Discard, completion)
        .unwrap();
    assert_eq!(engine.run_to_completion(), Some(SearchResult::FoundAt(3)));
    assert_eq!(*results.borrow(), vec![SearchResult::FoundAt(3)]);
}

#[test]
fn paused_engine_rejects_a_new_start() {
    let mut engine = Engine::new(AlgorithmKind::Linear);
    engine
        .start(SearchInput::array(&[1, 2], 2), Discard, Discard)
        .unwrap();
    engine.pause();

    let err = engine
        .start(SearchInput::array(&[3], 3), Discard, Discard)
        .unwrap_err();
    assert!(!err.is_invalid_input());
    assert_eq!(engine.status(), Status::Paused);
}

#[derive(Default)]
struct Views {
    ranges: Vec<(usize, usize, Option<usize>)>,
    tables: Vec<TableView>,
}

#[derive(Clone, Default)]
struct ViewSink(Rc<RefCell<Views>>);

impl StepSink for ViewSink {
    fn on_step(&mut self, _step: &Step) {}

    fn on_range_highlight(
        &mut self,
        left: usize,
        right: usize,
        mid: Option<usize>,
        _description: &str,
    ) {
        self.0.borrow_mut().ranges.push((left, right, mid));
    }

    fn on_table_built(&mut self, table: &TableView, _description: &str) {
        self.0.borrow_mut().tables.push(table.clone());
    }
}

#[test]
fn rich_views_reach_the_sink() {
    let sink = ViewSink::default();
    let mut engine = Engine::new(AlgorithmKind::Binary);
    engine
        .start(
            SearchInput::array(&[1, 3, 5, 7, 9, 11], 7),
            sink.clone(),
            Discard,
        )
        .unwrap();
    engine.run_to_completion();
    assert_eq!(
        sink.0.borrow().ranges,
        vec![
            (0, 5, None),
            (0, 5, Some(2)),
            (3, 5, Some(4)),
            (3, 3, Some(3)),
        ]
    );

    let sink = ViewSink::default();
    let mut engine = Engine::new(AlgorithmKind::Kmp);
    engine
        .start(SearchInput::text("AAAAB", "AAAA"), sink.clone(), Discard)
        .unwrap();
    engine.run_to_completion();
    assert_eq!(
        sink.0.borrow().tables,
        vec![TableView::Failure(vec![0, 1, 2, 3])]
    );
}

#[test_case(AlgorithmKind::Jump ; "jump")]
#[test_case(AlgorithmKind::BoyerMoore ; "boyer moore")]
fn range_hook_is_reserved_for_range_narrowing_searches(kind: AlgorithmKind) {
    let sink = ViewSink::default();
    let mut engine = Engine::new(kind);
    engine
        .start(sample_input(kind, true), sink.clone(), Discard)
        .unwrap();
    engine.run_to_completion();

    assert!(engine.is_done());
    assert!(sink.0.borrow().ranges.is_empty());
}

#[test]
fn reset_returns_to_idle() {
    let mut engine = Engine::new(AlgorithmKind::Jump);
    engine
        .start(SearchInput::array(&[1, 2, 3, 4], 4), Discard, Discard)
        .unwrap();
    engine.run_to_completion();
    assert!(engine.is_done());

    engine.reset();
    assert_eq!(engine.status(), Status::Idle);
    assert_eq!(engine.current_step_count(), 0);
    assert_eq!(engine.cursor(), None);
    assert!(engine.restart().is_err());
}
