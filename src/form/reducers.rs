use super::{
    actions::{CommandOutcome, SessionCommand},
    session::EditorSession,
    sink::CommitSink,
};

/// Routes commands into a session, with the sink that receives commits.
pub struct SessionEngine<'a> {
    session: &'a mut EditorSession,
    sink: &'a mut dyn CommitSink,
}

impl<'a> SessionEngine<'a> {
    pub fn new(session: &'a mut EditorSession, sink: &'a mut dyn CommitSink) -> Self {
        Self { session, sink }
    }

    pub fn dispatch(&mut self, command: SessionCommand) -> CommandOutcome {
        let session = &mut *self.session;
        match command {
            SessionCommand::EditScalarField(edit) => match session.edit(edit) {
                Ok(()) => CommandOutcome::Changed,
                Err(err) => CommandOutcome::Rejected(err),
            },
            SessionCommand::SetPendingChoice(text) => {
                session.set_pending_choice(text);
                CommandOutcome::Changed
            }
            SessionCommand::AddChoice(text) => rejected_or_changed(session.add_choice(text)),
            SessionCommand::AddPendingChoice => rejected_or_changed(session.add_pending_choice()),
            SessionCommand::CancelPendingChoice => {
                session.cancel_pending_choice();
                CommandOutcome::Changed
            }
            SessionCommand::ToggleChoiceSelection(value) => {
                CommandOutcome::from_flag(session.toggle_choice_selection(&value))
            }
            SessionCommand::RemoveSelectedChoices => {
                CommandOutcome::from_flag(!session.remove_selected_choices().is_empty())
            }
            SessionCommand::SetSearchQuery(query) => {
                session.set_search_query(query);
                CommandOutcome::Changed
            }
            SessionCommand::TogglePicker(open) => {
                session.toggle_picker(open);
                CommandOutcome::Changed
            }
            SessionCommand::PointerOutsidePicker => {
                let was_open = session.is_picker_open();
                session.pointer_outside_picker();
                CommandOutcome::from_flag(was_open)
            }
            SessionCommand::BeginDrag(index) => CommandOutcome::from_flag(session.begin_drag(index)),
            SessionCommand::DropAt(index) => CommandOutcome::from_flag(session.drop_at(index)),
            SessionCommand::CancelDrag => {
                session.cancel_drag();
                CommandOutcome::Unchanged
            }
            SessionCommand::Save => match session.save(self.sink) {
                Ok(committed) => CommandOutcome::Saved(committed),
                Err(errors) => CommandOutcome::Invalid(errors),
            },
            SessionCommand::Discard => {
                session.discard();
                CommandOutcome::Changed
            }
        }
    }
}

fn rejected_or_changed(result: Result<(), super::error::ChoiceError>) -> CommandOutcome {
    match result {
        Ok(()) => CommandOutcome::Changed,
        Err(err) => CommandOutcome::Rejected(err),
    }
}
