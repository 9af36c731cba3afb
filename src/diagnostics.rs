//! Where rejected inputs get reported.

use crate::AgeError;

/// Receives one report per rejected birth date.
pub trait DiagnosticSink {
    fn report(&self, error: &AgeError);
}

/// Emits each rejection as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &AgeError) {
        tracing::warn!(%error, "rejected birth date");
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _error: &AgeError) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, error: &AgeError) {
        (**self).report(error);
    }
}
