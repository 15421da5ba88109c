//! Diagnostic sinks
//!
//! Every parse error is reported as a `<prog>: <message>` line. The sink
//! is a trait so embedders and tests can capture or drop the lines
//! instead of writing to standard error.

use crate::error::ParseError;

/// Receiver for scan diagnostics
pub trait DiagnosticSink {
    /// Report a parse error for the program named `program`
    fn report(&mut self, program: &str, error: &ParseError);
}

/// Format a diagnostic line the way every sink prints it
pub fn format_diagnostic(program: &str, error: &ParseError) -> String {
    format!("{}: {}", program, error)
}

/// Writes diagnostics to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, program: &str, error: &ParseError) {
        eprintln!("{}", format_diagnostic(program, error));
    }
}

/// Discards diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&mut self, _program: &str, _error: &ParseError) {}
}

/// Keeps formatted diagnostics in memory
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    lines: Vec<String>,
}

impl CollectSink {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines collected so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the collector, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, program: &str, error: &ParseError) {
        self.lines.push(format_diagnostic(program, error));
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, program: &str, error: &ParseError) {
        (**self).report(program, error);
    }
}
