//! Observability subsystem for the gadget API
//!
//! Structured JSON logging only. Logging is synchronous, side-effect free
//! with respect to request handling, and a logging failure never fails a
//! request.

mod logger;

pub use logger::{Logger, Severity};
