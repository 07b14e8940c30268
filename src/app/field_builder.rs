use anyhow::Result;
use tracing::info;

use crate::{
    form::{ChoiceSet, CommitSink, CommittedField, EditorSession, FieldDefinition, NullSink},
    io::{OutputOptions, OutputSink},
};

use super::{options::UiOptions, runtime::App};

/// Terminal entry point: edits one field definition and returns the last
/// saved snapshot.
pub struct FieldBuilder {
    seed: FieldDefinition,
    title: Option<String>,
    options: UiOptions,
    sink: Box<dyn CommitSink>,
}

impl Default for FieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self {
            seed: FieldDefinition::default(),
            title: None,
            options: UiOptions::default(),
            sink: Box::new(NullSink),
        }
    }

    /// Replaces the seed choices. Blank and repeated entries are dropped.
    pub fn with_seed<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.seed = FieldDefinition::with_choices(ChoiceSet::from_seed(choices));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Writes every successful save to the given destinations.
    pub fn with_output(self, output: OutputOptions) -> Self {
        self.with_sink(OutputSink::new(output))
    }

    pub fn with_sink(mut self, sink: impl CommitSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn run(self) -> Result<CommittedField> {
        let FieldBuilder {
            seed,
            title,
            options,
            sink,
        } = self;

        info!(choices = seed.choices.len(), "starting field editor");
        let session = EditorSession::new(seed);
        let mut app = App::new(session, sink, options, title);
        app.run()
    }
}
