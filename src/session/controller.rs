use crate::analyze::predict::predict_output;
use crate::analyze::symbols::build_symbols;
use crate::config::types::{ExerciseSpec, SessionStatus, Verdict};
use crate::judge::profile::LanguageProfile;
use crate::judge::registry::resolve_profile;
use crate::observability::events::{self, RunIds, SessionEvent};
use crate::session::composer::compose_log;
use crate::session::scheduler::{Clock, TimerQueue};
use crate::verdict::validator::validate;
use std::time::Duration;

/// Simulated compile latency before the execute phase begins.
pub const COMPILE_DELAY: Duration = Duration::from_millis(2000);

/// Delay between a success verdict and the completion notification, so
/// the host can render the finished log before being told to move on.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1200);

/// Host-provided callback, invoked at most once per session after a
/// success verdict.
pub type CompletionSink = Box<dyn FnMut()>;

enum ScheduledTask {
    FinishCompile,
    NotifyCompletion,
}

enum CompletionState {
    Unscheduled,
    Scheduled,
    Notified,
}

/// The complete, exclusively-owned state for one exercise attempt.
///
/// A new exercise must construct a new `Session`; a stale session is
/// never mutated into a new one. All mutation happens on the single
/// logical thread driving `tick()`, so nothing here needs locking.
///
/// The controller has no failure path: malformed source, unknown tags,
/// and missing matches all degrade to defined fallbacks. Mutators that
/// arrive while a run is in flight are dropped, not queued.
pub struct Session {
    ids: RunIds,
    profile: &'static LanguageProfile,
    status: SessionStatus,
    source_text: String,
    original_source: String,
    expected_output: Option<String>,
    log: Vec<String>,
    verdict: Option<Verdict>,
    clock: Box<dyn Clock>,
    timers: TimerQueue<ScheduledTask>,
    completion_sink: Option<CompletionSink>,
    completion: CompletionState,
}

impl Session {
    pub fn new(spec: ExerciseSpec, clock: Box<dyn Clock>) -> Self {
        let profile = resolve_profile(&spec.language_tag);
        let ids = RunIds::new();
        events::emit(
            &ids,
            &SessionEvent::SessionCreated {
                language: profile.id(),
            },
        );
        Self {
            ids,
            profile,
            status: SessionStatus::Idle,
            source_text: spec.starter_source.clone(),
            original_source: spec.starter_source,
            expected_output: spec.expected_output,
            log: Vec::new(),
            verdict: None,
            clock,
            timers: TimerQueue::new(),
            completion_sink: None,
            completion: CompletionState::Unscheduled,
        }
    }

    /// Attach the host's completion callback.
    pub fn with_completion_sink(mut self, sink: impl FnMut() + 'static) -> Self {
        self.completion_sink = Some(Box::new(sink));
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn language(&self) -> &'static str {
        self.profile.id()
    }

    /// True while a run or a pending completion notification still needs
    /// `tick()` to be driven.
    pub fn has_pending_tasks(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Start a run. Dropped unless the session is idle, so at most one
    /// run is ever in flight.
    pub fn run(&mut self) {
        if self.status != SessionStatus::Idle {
            log::debug!("run request dropped: session is {}", self.status);
            events::emit(
                &self.ids,
                &SessionEvent::RunDropped {
                    status: self.status,
                },
            );
            return;
        }

        self.ids = self.ids.next_run();
        self.log.clear();
        self.verdict = None;
        self.status = SessionStatus::Compiling;
        events::emit(
            &self.ids,
            &SessionEvent::RunStarted {
                language: self.profile.id(),
            },
        );

        let deadline = self.clock.now() + COMPILE_DELAY;
        self.timers.schedule(deadline, ScheduledTask::FinishCompile);
    }

    /// Restore the starter snippet and clear log and verdict. Only
    /// honored while idle. A completion notification still pending from
    /// a prior run is left untouched; its timer is non-cancelable.
    pub fn reset(&mut self) {
        if self.status != SessionStatus::Idle {
            log::debug!("reset request dropped: session is {}", self.status);
            return;
        }
        self.source_text = self.original_source.clone();
        self.log.clear();
        self.verdict = None;
    }

    /// Replace the source text wholesale. Only honored while idle.
    pub fn edit_source(&mut self, text: impl Into<String>) {
        if self.status != SessionStatus::Idle {
            log::debug!("edit request dropped: session is {}", self.status);
            return;
        }
        self.source_text = text.into();
    }

    /// Fire every task whose deadline has passed. The host calls this
    /// from its timer loop; with a manual clock, tests call it after
    /// advancing virtual time.
    pub fn tick(&mut self) {
        loop {
            let now = self.clock.now();
            let Some(task) = self.timers.pop_due(now) else {
                break;
            };
            match task {
                ScheduledTask::FinishCompile => self.execute(),
                ScheduledTask::NotifyCompletion => self.notify_completion(),
            }
        }
    }

    /// The execute phase: rebuild symbols from the current source,
    /// predict, compose the log, validate, and return to idle. Runs
    /// synchronously within one timer firing; once compiling has begun
    /// the run always completes with a verdict.
    fn execute(&mut self) {
        self.status = SessionStatus::Executing;

        let symbols = build_symbols(&self.source_text);
        let predicted = predict_output(&self.source_text, self.profile, &symbols);
        self.log = compose_log(self.profile, predicted.as_deref());
        let verdict = validate(predicted.as_deref(), self.expected_output.as_deref());
        self.verdict = Some(verdict);
        self.status = SessionStatus::Idle;

        events::emit(
            &self.ids,
            &SessionEvent::VerdictComputed {
                verdict,
                predicted: predicted.is_some(),
            },
        );

        if verdict == Verdict::Success && matches!(self.completion, CompletionState::Unscheduled) {
            self.completion = CompletionState::Scheduled;
            let deadline = self.clock.now() + COMPLETION_DELAY;
            self.timers
                .schedule(deadline, ScheduledTask::NotifyCompletion);
        }
    }

    fn notify_completion(&mut self) {
        self.completion = CompletionState::Notified;
        events::emit(&self.ids, &SessionEvent::CompletionNotified);
        if let Some(sink) = self.completion_sink.as_mut() {
            sink();
        }
    }
}
