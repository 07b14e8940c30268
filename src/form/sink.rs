use super::definition::CommittedField;

/// Receives committed definitions. Fire-and-forget: a sink has no way to
/// fail a save that already passed validation.
pub trait CommitSink {
    fn commit(&mut self, field: &CommittedField);
}

impl<F> CommitSink for F
where
    F: FnMut(&CommittedField),
{
    fn commit(&mut self, field: &CommittedField) {
        self(field)
    }
}

/// Keeps every committed snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    commits: Vec<CommittedField>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> &[CommittedField] {
        &self.commits
    }

    pub fn last(&self) -> Option<&CommittedField> {
        self.commits.last()
    }
}

impl CommitSink for MemorySink {
    fn commit(&mut self, field: &CommittedField) {
        self.commits.push(field.clone());
    }
}

/// Discards commits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CommitSink for NullSink {
    fn commit(&mut self, _field: &CommittedField) {}
}
