#![forbid(unsafe_code)]

//! Tracing capture for tests.
//!
//! Installs a thread-local subscriber for the duration of a closure and
//! records every span and event it sees, with their fields rendered as
//! strings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A span opened while capturing.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    /// Span name.
    pub name: String,
    /// Span level.
    pub level: tracing::Level,
    /// Recorded fields.
    pub fields: HashMap<String, String>,
}

/// An event emitted while capturing.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Event level.
    pub level: tracing::Level,
    /// Event target.
    pub target: String,
    /// The `message` field.
    pub message: Option<String>,
    /// Recorded fields, `message` included.
    pub fields: HashMap<String, String>,
    /// Innermost span the event was emitted in.
    pub span: Option<String>,
}

/// Everything captured during one closure.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    /// Spans, in creation order.
    pub spans: Vec<CapturedSpan>,
    /// Events, in emission order.
    pub events: Vec<CapturedEvent>,
}

impl CapturedLogs {
    /// Events whose message equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<&CapturedEvent> {
        self.events
            .iter()
            .filter(|e| e.message.as_deref() == Some(message))
            .collect()
    }

    /// Spans named `name`.
    #[must_use]
    pub fn spans_named(&self, name: &str) -> Vec<&CapturedSpan> {
        self.spans.iter().filter(|s| s.name == name).collect()
    }

    /// Number of events at `level`.
    #[must_use]
    pub fn count_at(&self, level: tracing::Level) -> usize {
        self.events.iter().filter(|e| e.level == level).count()
    }
}

#[derive(Default)]
struct FieldVisitor(Vec<(String, String)>);

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    logs: Arc<Mutex<CapturedLogs>>,
}

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);
        let span = CapturedSpan {
            name: attrs.metadata().name().to_string(),
            level: *attrs.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        };
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .spans
            .push(span);
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: fields.get("message").cloned(),
            fields,
            span: ctx.event_span(event).map(|s| s.name().to_string()),
        };
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .events
            .push(captured);
    }
}

/// Run `f` with a capturing subscriber at `TRACE` and return what it logged.
pub fn with_captured_logs<F, R>(f: F) -> (R, CapturedLogs)
where
    F: FnOnce() -> R,
{
    let layer = CaptureLayer::default();
    let logs = Arc::clone(&layer.logs);
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = logs.lock().unwrap_or_else(PoisonError::into_inner).clone();
    (result, captured)
}
