//! # Module Validator Front End
//!
//! This library provides the command-line front end for validating binary
//! module files: option parsing into an immutable [`RunConfig`], acquisition
//! of the module as a sequence of 32-bit words, and severity-routed rendering
//! of the diagnostics a [`ValidationEngine`] emits during its single
//! validation pass.
//!
//! The engine itself sits behind the [`ValidationEngine`] trait; the bundled
//! [`BaselineEngine`] only applies stream-level policy so the binary runs end
//! to end without a full rule dialect.

// Public API exports
pub mod cli;
pub mod config;
pub mod diag;
pub mod engine;
pub mod input;

pub use cli::{ParseOutcome, UsageError, parse_arguments};
pub use config::{LimitCategory, RunConfig, TargetEnv, ValidatorOptions};
pub use diag::{Diagnostic, MessageConsumer, Severity, StreamSink};
pub use engine::{BaselineEngine, ValidationEngine};
pub use input::{InputSource, read_words};

/// Result type alias for validator front-end operations
pub type ModvalResult<T> = Result<T, ModvalError>;

/// Error type for input acquisition failures
#[derive(Debug, thiserror::Error)]
pub enum ModvalError {
    #[error("input file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input size {0} is not a multiple of the 4-byte word size")]
    TruncatedWord(usize),
}
