//! Event bus: buffered event dispatch with pluggable sinks.
//!
//! The harness is single-threaded, so pending events sit in a plain
//! `Vec` until `flush` hands them to the sinks.

use crate::events::BenchEvent;
use crate::sinks::EventSink;

/// Buffering event bus for benchmark telemetry.
///
/// `emit` records an event; `flush` delivers every pending event, in
/// emission order, to each registered sink in registration order.
pub struct EventBus {
    pending: Vec<BenchEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record an event for the next flush. No-op when the bus is disabled.
    pub fn emit(&mut self, event: BenchEvent) {
        if self.enabled {
            self.pending.push(event);
        }
    }

    /// Number of events emitted but not yet flushed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deliver all pending events to registered sinks and clear the buffer.
    pub fn flush(&mut self) {
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flush pending events, then let every sink finalize.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
