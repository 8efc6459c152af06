// End-to-end walkthroughs of individual algorithms

use pretty_assertions::assert_eq;
use seekstep::algorithms::{baseline, trace, AlgorithmKind};
use seekstep::comparators::{max_binary_comparisons, BadCharacterTable};
use seekstep::engine::{Discard, Engine, EngineConfig, Status};
use seekstep::history::Recorder;
use seekstep::model::{
    Cursor, Lane, Phase, Role, SearchInput, SearchResult, Step, StepDetail, TableView,
};

fn record(kind: AlgorithmKind, input: SearchInput) -> (Engine, Vec<Step>) {
    let recorder = Recorder::default();
    let mut engine = Engine::new(kind);
    engine.start(input, recorder.clone(), Discard).unwrap();
    engine.run_to_completion();
    (engine, recorder.steps())
}

fn completed_table(steps: &[Step]) -> Option<TableView> {
    steps.iter().find_map(|step| match &step.detail {
        StepDetail::Table {
            table,
            complete: true,
        } => Some(table.clone()),
        _ => None,
    })
}

#[test]
fn binary_search_of_seven() {
    let (engine, steps) = record(
        AlgorithmKind::Binary,
        SearchInput::array(&[1, 3, 5, 7, 9, 11], 7),
    );

    assert_eq!(engine.result(), Some(SearchResult::FoundAt(3)));
    assert_eq!(engine.comparisons(), 3);
    assert!(engine.comparisons() <= max_binary_comparisons(6));

    let mids: Vec<usize> = steps
        .iter()
        .flat_map(|step| step.positions(Lane::Array, Role::Current))
        .collect();
    assert_eq!(mids, vec![2, 4, 3]);
    assert_eq!(steps.last().map(|s| s.cursor), Some(Cursor::Finished));
}

#[test]
fn kmp_textbook_text() {
    let input = SearchInput::text("ABABDABACDABABCABCABCABCABC", "ABCAB");
    let expected = baseline(AlgorithmKind::Kmp, &input).unwrap();
    let (engine, steps) = record(AlgorithmKind::Kmp, input);

    assert_eq!(engine.result(), Some(expected));
    assert_eq!(expected, SearchResult::FoundAt(12));
    assert_eq!(
        steps.last().map(|s| s.positions(Lane::Text, Role::Found)),
        Some(vec![12, 13, 14, 15, 16])
    );
}

#[test]
fn jump_search_visits_block_ends() {
    let values: Vec<i32> = (1..=16).map(|i| i * 5).collect();
    let (engine, steps) = record(AlgorithmKind::Jump, SearchInput::array(&values, values[12]));

    let jumps: Vec<usize> = steps
        .iter()
        .flat_map(|step| step.positions(Lane::Array, Role::Current))
        .collect();
    let scanned: Vec<usize> = steps
        .iter()
        .flat_map(|step| step.positions(Lane::Array, Role::Compare))
        .collect();

    assert_eq!(jumps, vec![3, 7, 11, 15]);
    assert_eq!(scanned, vec![11, 12]);
    assert_eq!(engine.result(), Some(SearchResult::FoundAt(12)));
}

#[test]
fn kmp_failure_tables() {
    for (pattern, expected) in [
        ("ABABAB", vec![0, 0, 1, 2, 3, 4]),
        ("AAAA", vec![0, 1, 2, 3]),
    ] {
        let (_, steps) = record(AlgorithmKind::Kmp, SearchInput::text("ABABABAB", pattern));
        assert_eq!(
            completed_table(&steps),
            Some(TableView::Failure(expected)),
            "{}",
            pattern
        );
    }
}

#[test]
fn kmp_construction_exposes_retry_point() {
    // failure[5] for AABAAA retries j = 2 -> failure[1] = 1 without moving i
    let steps = trace(AlgorithmKind::Kmp, &SearchInput::text("AABAAAB", "AABAAA"))
        .unwrap()
        .steps;
    let cursors: Vec<Cursor> = steps
        .iter()
        .filter(|step| step.phase == Phase::Preprocessing)
        .map(|step| step.cursor)
        .collect();

    assert!(cursors.contains(&Cursor::FailureFunction { i: 5, j: 2 }));
    assert!(cursors.contains(&Cursor::FailureFunction { i: 5, j: 1 }));
}

#[test]
fn boyer_moore_table() {
    let (_, steps) = record(AlgorithmKind::BoyerMoore, SearchInput::text("xxABC", "ABC"));
    assert_eq!(
        completed_table(&steps),
        Some(TableView::BadCharacter(vec![('A', 2), ('B', 1)]))
    );
    assert_eq!(
        BadCharacterTable::build(&['A', 'B', 'C']).entries(),
        vec![('A', 2), ('B', 1)]
    );
}

#[test]
fn pausing_mid_table_construction_keeps_progress() {
    let input = SearchInput::text("HERE IS A SIMPLE EXAMPLE", "EXAMPLE");
    let mut engine = Engine::new(AlgorithmKind::BoyerMoore);
    engine.start(input.clone(), Discard, Discard).unwrap();

    engine.tick();
    engine.tick();
    engine.tick();
    engine.pause();
    assert_eq!(engine.phase(), Phase::Preprocessing);
    assert_eq!(engine.cursor(), Some(Cursor::BadCharacter { i: 2 }));

    engine.resume().unwrap();
    assert_eq!(engine.run_to_completion(), Some(SearchResult::FoundAt(17)));
    assert_eq!(
        engine.result(),
        Some(baseline(AlgorithmKind::BoyerMoore, &input).unwrap())
    );
}

#[test]
fn degenerate_patterns_finish_without_steps() {
    for kind in [
        AlgorithmKind::Naive,
        AlgorithmKind::Kmp,
        AlgorithmKind::BoyerMoore,
    ] {
        let (engine, steps) = record(kind, SearchInput::text("abc", ""));
        assert!(steps.is_empty());
        assert_eq!(engine.result(), Some(SearchResult::FoundAt(0)));

        let (engine, steps) = record(kind, SearchInput::text("", "abc"));
        assert!(steps.is_empty());
        assert_eq!(engine.status(), Status::Done);
        assert_eq!(engine.status_message(), "Not found");
    }
}

#[test]
fn config_loads_from_json_and_clamps() {
    let config: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(
        Engine::with_config(AlgorithmKind::Naive, config).execution_delay(),
        1000
    );

    let config: EngineConfig = serde_json::from_str(r#"{ "execution_delay_ms": 50 }"#).unwrap();
    assert_eq!(
        Engine::with_config(AlgorithmKind::Linear, config).execution_delay(),
        100
    );
    assert_eq!(
        Engine::with_config(AlgorithmKind::Kmp, config).execution_delay(),
        200
    );

    let engine = Engine::with_config(
        AlgorithmKind::BoyerMoore,
        EngineConfig {
            execution_delay_ms: 2500,
        },
    );
    let saved = serde_json::to_string(&engine.config()).unwrap();
    assert_eq!(saved, r#"{"execution_delay_ms":2500}"#);
}

#[test]
fn trace_serialises_for_export() {
    let trace = trace(AlgorithmKind::Linear, &SearchInput::array(&[3, 1, 2], 2)).unwrap();
    let json = serde_json::to_value(&trace).unwrap();

    assert_eq!(json["result"]["FoundAt"], 2);
    assert_eq!(json["steps"][0]["number"], 1);
    assert_eq!(
        json["steps"].as_array().map(Vec::len),
        Some(trace.steps.len())
    );
}

#[test]
fn status_messages_follow_the_run() {
    let mut engine = Engine::new(AlgorithmKind::Exponential);
    assert_eq!(engine.status_message(), "Ready");

    engine
        .start(SearchInput::array(&[1, 2, 4, 8], 3), Discard, Discard)
        .unwrap();
    assert_eq!(engine.status_message(), "Search in progress");

    engine.run_to_completion();
    assert_eq!(engine.status_message(), "Not found");
}
