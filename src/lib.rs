#![deny(rust_2018_idioms)]

mod app;
pub mod form;
pub mod io;
mod presentation;

#[cfg(test)]
mod tests;

pub use app::{FieldBuilder, UiOptions};
pub use form::{
    ChoiceError, ChoiceSet, CommandOutcome, CommitSink, CommittedField, DefinitionError,
    EditorSession, FieldDefinition, FieldKey, MemorySink, NullSink, OrderPolicy, ScalarEdit,
    SessionCommand, SessionView, ValidationErrors,
};
pub use io::{DocumentFormat, OutputDestination, OutputOptions, OutputSink, WriterSink};

pub mod prelude {
    pub use super::{
        CommitSink, CommittedField, EditorSession, FieldBuilder, FieldDefinition, OrderPolicy,
        OutputOptions, ScalarEdit, SessionCommand, UiOptions,
    };
}
