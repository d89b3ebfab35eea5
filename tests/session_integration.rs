//! Integration tests for the grading session
//!
//! These drive the public API end to end on a manual clock: exercise
//! construction, the full run lifecycle, grading, reset, and the
//! completion notification contract.

use gradebox::session::controller::{COMPILE_DELAY, COMPLETION_DELAY};
use gradebox::{ExerciseSpec, ManualClock, Session, SessionStatus, Verdict};

fn graded(tag: &str, source: &str, expected: &str) -> (Session, ManualClock) {
    build(tag, source, Some(expected.to_string()))
}

fn ungraded(tag: &str, source: &str) -> (Session, ManualClock) {
    build(tag, source, None)
}

fn build(tag: &str, source: &str, expected: Option<String>) -> (Session, ManualClock) {
    let clock = ManualClock::new();
    let spec = ExerciseSpec::new(tag, source, expected);
    let session = Session::new(spec, Box::new(clock.clone()));
    (session, clock)
}

fn finish_run(session: &mut Session, clock: &ManualClock) {
    clock.advance(COMPILE_DELAY);
    session.tick();
}

#[test]
fn test_python_variable_snippet_ungraded() {
    let (mut session, clock) = ungraded("python", "x = \"ready\"\nprint(x)");
    session.run();
    finish_run(&mut session, &clock);

    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.verdict(), Some(Verdict::Success));
    assert_eq!(session.log(), ["$ python3 main.py", "ready"]);
}

#[test]
fn test_java_variable_snippet_graded() {
    let (mut session, clock) = graded(
        "java",
        "String x = \"done\";\nSystem.out.println(x);",
        "done",
    );
    session.run();
    finish_run(&mut session, &clock);

    assert_eq!(session.verdict(), Some(Verdict::Success));
    assert_eq!(session.log(), ["$ javac Main.java", "$ java Main", "done"]);
}

#[test]
fn test_rust_literal_mismatch_fails_then_reset_restores() {
    let (mut session, clock) = graded("rust", "println!(\"42\")", "100");
    session.edit_source("println!(\"42\") // tweaked");
    session.run();
    finish_run(&mut session, &clock);

    assert_eq!(session.verdict(), Some(Verdict::Fail));
    assert_eq!(
        session.log(),
        ["$ rustc main.rs -o main", "$ ./main", "42"]
    );

    session.reset();
    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.source_text(), "println!(\"42\")");
    assert!(session.log().is_empty());
    assert_eq!(session.verdict(), None);
}

#[test]
fn test_completion_sink_fires_exactly_once_on_success() {
    let (session, clock) = ungraded("python", "print(\"hi\")");
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut session = session.with_completion_sink(move || {
        tx.send(()).expect("completion receiver alive");
    });

    session.run();
    finish_run(&mut session, &clock);
    assert!(rx.is_empty(), "callback must wait for the post-success delay");

    clock.advance(COMPLETION_DELAY);
    session.tick();
    assert_eq!(rx.len(), 1);

    // Further ticks never notify again.
    clock.advance(COMPLETION_DELAY * 10);
    session.tick();
    assert_eq!(rx.len(), 1);
}

#[test]
fn test_completion_sink_silent_on_fail() {
    let (session, clock) = graded("rust", "println!(\"42\")", "100");
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut session = session.with_completion_sink(move || {
        tx.send(()).expect("completion receiver alive");
    });

    session.run();
    finish_run(&mut session, &clock);
    clock.advance(COMPLETION_DELAY * 10);
    session.tick();
    assert!(rx.is_empty());
}

#[test]
fn test_second_run_while_compiling_is_dropped() {
    let (mut session, clock) = ungraded("python", "print(\"hi\")");
    session.run();
    assert_eq!(session.status(), SessionStatus::Compiling);
    session.run(); // dropped

    finish_run(&mut session, &clock);
    assert_eq!(session.status(), SessionStatus::Idle);

    // Exactly one run's worth of log: banners plus one output line.
    assert_eq!(session.log(), ["$ python3 main.py", "hi"]);
}

#[test]
fn test_fresh_session_per_exercise() {
    // A new exercise builds a new session; nothing leaks from the old one.
    let (mut first, clock) = graded("python", "print(\"one\")", "one");
    first.run();
    finish_run(&mut first, &clock);
    assert_eq!(first.verdict(), Some(Verdict::Success));

    let (second, _clock) = graded("java", "int x = 1;", "one");
    assert_eq!(second.status(), SessionStatus::Idle);
    assert!(second.log().is_empty());
    assert_eq!(second.verdict(), None);
    assert_eq!(second.language(), "java");
}

#[test]
fn test_unknown_language_grades_with_default_profile() {
    let (mut session, clock) = graded("smalltalk", "console.log(\"fallback\")", "fallback");
    session.run();
    finish_run(&mut session, &clock);
    assert_eq!(session.language(), "javascript");
    assert_eq!(session.verdict(), Some(Verdict::Success));
}

#[test]
fn test_malformed_source_degrades_to_fallback() {
    let (mut session, clock) = ungraded("python", "def broken(:\n  ???\nprint(");
    session.run();
    finish_run(&mut session, &clock);
    // Never crashes; ungraded runs succeed even with nothing predicted.
    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.verdict(), Some(Verdict::Success));
}
