use std::io::Write;

use tracing::warn;

use crate::form::{CommitSink, CommittedField};

use super::output::{OutputOptions, emit, emit_to};

/// Writes each committed definition to the configured output destinations.
/// Write failures are logged; the commit itself has already happened.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    options: OutputOptions,
}

impl OutputSink {
    pub fn new(options: OutputOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }
}

impl CommitSink for OutputSink {
    fn commit(&mut self, field: &CommittedField) {
        if let Err(err) = emit(field, &self.options) {
            warn!(error = %format!("{err:#}"), "failed to write committed field");
        }
    }
}

/// Writes each committed definition into a caller-owned writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    options: OutputOptions,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CommitSink for WriterSink<W> {
    fn commit(&mut self, field: &CommittedField) {
        if let Err(err) = emit_to(&mut self.writer, field, &self.options) {
            warn!(error = %format!("{err:#}"), "failed to write committed field");
        }
    }
}
