//! Logging infrastructure: answer observers
//!
//! Provides two implementations of the
//! [`AnswerObserver`](evaluation_application::AnswerObserver) port:
//!
//! - [`TracingAnswerObserver`] emits `tracing` events for every answer
//! - [`JsonlAnswerObserver`] appends every answer trace to a JSONL file

mod jsonl_observer;
mod tracing_observer;

pub use jsonl_observer::JsonlAnswerObserver;
pub use tracing_observer::TracingAnswerObserver;
