//! Output formatting for answered questions

pub mod console;
pub mod formatter;
pub mod observer;
