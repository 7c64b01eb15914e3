//! Optional tracing collaborator.
//!
//! The facade accepts a [`Tracer`] to mirror the original deployment, where
//! every store call emitted a trace event and every failure was captured by
//! the tracing backend. No backend is bound here; embedders implement the
//! trait, and the facade treats an absent tracer as a no-op.

use parking_lot::Mutex;

use crate::error::TransportError;

/// Receiver for per-operation trace events and captured failures.
pub trait Tracer: Send + Sync {
    /// Record that an operation is about to run.
    fn capture_event(&self, description: &str);

    /// Record a transport failure before it is re-raised.
    fn capture_exception(&self, error: &TransportError);
}

/// Tracer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn capture_event(&self, _description: &str) {}

    fn capture_exception(&self, _error: &TransportError) {}
}

/// Tracer that accumulates captures in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Mutex<Vec<String>>,
    exceptions: Mutex<Vec<TransportError>>,
}

impl RecordingTracer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptions captured so far, in order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    /// Failures captured so far, in order.
    pub fn exceptions(&self) -> Vec<TransportError> {
        self.exceptions.lock().clone()
    }
}

impl Tracer for RecordingTracer {
    fn capture_event(&self, description: &str) {
        self.events.lock().push(description.to_string());
    }

    fn capture_exception(&self, error: &TransportError) {
        self.exceptions.lock().push(error.clone());
    }
}

impl<T: Tracer + ?Sized> Tracer for std::sync::Arc<T> {
    fn capture_event(&self, description: &str) {
        (**self).capture_event(description);
    }

    fn capture_exception(&self, error: &TransportError) {
        (**self).capture_exception(error);
    }
}
