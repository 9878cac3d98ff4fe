//! Tests for tracing integration.

use std::fmt;
use std::sync::{Arc, Mutex};

use operation_result::trace::TraceOutcome;
use operation_result::{error, ok, success, Lift, Result, Status, Status2};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// An event captured by [`Recorder`].
#[derive(Debug)]
struct Captured {
    level: Level,
    fields: Vec<(&'static str, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FieldVisitor<'a>(&'a mut Vec<(&'static str, String)>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name(), format!("{value:?}")));
    }
}

/// Subscriber that keeps every event it sees.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            fields,
        });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

/// Runs `f` with a [`Recorder`] as the current subscriber and returns what it captured.
fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let recorder = Recorder::default();
    let events = Arc::clone(&recorder.events);
    let output = tracing::subscriber::with_default(recorder, f);
    let captured = std::mem::take(&mut *events.lock().unwrap());
    (output, captured)
}

#[test]
fn trace_outcome_passes_success_through() {
    let result: Result<i32, &str> = ok(42).into();
    let traced = result.trace_outcome("compute");
    assert_eq!(traced.value(), Some(&42));
}

#[test]
fn trace_outcome_passes_failure_through() {
    let result: Result<i32, &str> = error("boom").into();
    let traced = result.trace_outcome("compute");
    assert_eq!(traced.error(), Some(&"boom"));
}

#[test]
fn trace_outcome_on_status() {
    let status: Status = success().into();
    assert!(status.trace_outcome("flush").is_success());

    let status: Status2<u16, &str> = error(503_u16).lift();
    let traced = status.trace_outcome("flush");
    assert!(traced.has_error::<u16, _>());
}

#[test]
fn result_success_emits_trace_event() {
    let (traced, events) = capture(|| {
        let result: Result<i32, &str> = ok(42).into();
        result.trace_outcome("compute")
    });

    assert!(traced.is_success());
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::TRACE);
    assert_eq!(event.field("operation"), Some("compute"));
    assert_eq!(event.field("message"), Some("operation succeeded"));
    assert_eq!(event.field("error"), None);
}

#[test]
fn result_failure_emits_debug_event_with_error() {
    let (traced, events) = capture(|| {
        let result: Result<i32, &str> = error("boom").into();
        result.trace_outcome("compute")
    });

    assert!(traced.is_error());
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("operation"), Some("compute"));
    assert_eq!(event.field("error"), Some("\"boom\""));
    assert_eq!(event.field("message"), Some("operation failed"));
}

#[test]
fn status_success_emits_trace_event() {
    let (_, events) = capture(|| {
        let status: Status = success().into();
        status.trace_outcome("flush")
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::TRACE);
    assert_eq!(event.field("operation"), Some("flush"));
    assert_eq!(event.field("error"), None);
}

#[test]
fn status_failure_emits_debug_event_with_error() {
    let (_, events) = capture(|| {
        let status: Status2<u16, &str> = error(503_u16).lift();
        status.trace_outcome("flush")
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("operation"), Some("flush"));
    assert_eq!(event.field("error"), Some("First(503)"));
    assert_eq!(event.field("message"), Some("operation failed"));
}
