//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a typed request, also the configuration key
//! - [`context::Context`]: the per-call execution trace
//! - [`error::EngineError`]: configuration and resolution errors

pub mod context;
pub mod error;
pub mod question;
