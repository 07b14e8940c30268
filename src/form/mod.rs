mod actions;
mod choices;
mod definition;
mod drag;
mod error;
mod filter;
mod order;
mod reducers;
mod selection;
mod session;
mod sink;

pub use actions::{CommandOutcome, SessionCommand};
pub use choices::ChoiceSet;
pub use definition::{CommittedField, DEFAULT_CHOICES, FieldDefinition};
pub use drag::DragReorder;
pub use error::{ChoiceError, DefinitionError, FieldKey, ValidationErrors};
pub use filter::{VisibleChoices, visible};
pub use order::{OrderPolicy, ordered_view};
pub use reducers::SessionEngine;
pub use selection::SelectionTracker;
pub use session::{EditorSession, ScalarEdit, SessionView};
pub use sink::{CommitSink, MemorySink, NullSink};
