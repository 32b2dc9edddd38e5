//! Observability subsystem
//!
//! Structured JSON logging for server lifecycle and store failures.
//! Observability is read-only: a logging failure never affects request
//! handling, and no diagnostic detail reaches API clients.

mod logger;

pub use logger::{Logger, Severity};
