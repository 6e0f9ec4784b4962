//! # intbench-telemetry
//!
//! Event bus for benchmark telemetry. The runner emits structured events
//! (run start/end, verification, suite completion) that pluggable sinks
//! consume, such as an in-memory collector or the `tracing` log.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{BenchEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
