use super::{
    definition::CommittedField,
    error::{ChoiceError, ValidationErrors},
    session::ScalarEdit,
};

/// Every command the presentation layer can issue against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    EditScalarField(ScalarEdit),
    SetPendingChoice(String),
    AddChoice(String),
    AddPendingChoice,
    CancelPendingChoice,
    ToggleChoiceSelection(String),
    RemoveSelectedChoices,
    SetSearchQuery(String),
    TogglePicker(Option<bool>),
    PointerOutsidePicker,
    BeginDrag(usize),
    DropAt(usize),
    CancelDrag,
    Save,
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Changed,
    Unchanged,
    Rejected(ChoiceError),
    Saved(CommittedField),
    Invalid(ValidationErrors),
}

impl CommandOutcome {
    pub fn from_flag(changed: bool) -> Self {
        if changed {
            CommandOutcome::Changed
        } else {
            CommandOutcome::Unchanged
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, CommandOutcome::Changed | CommandOutcome::Saved(_))
    }
}
