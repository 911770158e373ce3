//! Diagnostic messages and severity-routed rendering

use std::io::Write;

/// Severity tier attached to each engine diagnostic.
///
/// Tiers below [`Severity::Info`] exist on the wire but are never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Unrecoverable engine condition
    Fatal,
    /// Engine invariant failure
    InternalError,
    /// Rule violation in the module
    Error,
    Warning,
    Info,
    /// Engine-internal chatter
    Debug,
}

/// One transient diagnostic emitted by the engine during validation.
/// Rendered immediately, never retained.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    pub severity: Severity,
    /// Word offset into the module where the condition was detected
    pub position: usize,
    pub message: &'a str,
}

/// Receives engine diagnostics one at a time, in emission order.
///
/// Invoked synchronously from inside the engine call, on the calling
/// thread; implementations must not block.
pub trait MessageConsumer {
    fn consume(&mut self, diagnostic: &Diagnostic);
}

/// Routes diagnostics onto an output and an error stream by severity:
/// fatal, internal-error and error tiers become `error:` lines on the error
/// stream, warnings and infos go to the output stream, lower tiers are
/// dropped. Stream write failures never interrupt the validation pass.
pub struct StreamSink<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> StreamSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl<O: Write, E: Write> MessageConsumer for StreamSink<O, E> {
    fn consume(&mut self, diagnostic: &Diagnostic) {
        let Diagnostic {
            severity,
            position,
            message,
        } = *diagnostic;
        let _ = match severity {
            Severity::Fatal | Severity::InternalError | Severity::Error => {
                writeln!(self.err, "error: {position}: {message}")
            }
            Severity::Warning => writeln!(self.out, "warning: {position}: {message}"),
            Severity::Info => writeln!(self.out, "info: {position}: {message}"),
            Severity::Debug => Ok(()),
        };
    }
}
