use tracing::{debug, info};

use super::{
    actions::{CommandOutcome, SessionCommand},
    choices::ChoiceSet,
    definition::{CommittedField, FieldDefinition},
    drag::DragReorder,
    error::{ChoiceError, ValidationErrors},
    filter::{VisibleChoices, visible},
    order::OrderPolicy,
    reducers::SessionEngine,
    selection::SelectionTracker,
    sink::CommitSink,
};

/// A single scalar update routed into the definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarEdit {
    Label(String),
    MultiValueRequired(bool),
    DefaultValue(String),
    Order(Option<OrderPolicy>),
}

/// Owns one field definition under edit together with every piece of
/// transient editor state.
///
/// All mutation goes through the methods below. Each one states its full
/// effect on `saved`/`dirty`; nothing is invalidated behind the caller's back.
#[derive(Debug, Clone)]
pub struct EditorSession {
    seed: FieldDefinition,
    definition: FieldDefinition,
    selection: SelectionTracker,
    pending_choice: String,
    pending_error: Option<ChoiceError>,
    search_query: String,
    picker_open: bool,
    drag: DragReorder,
    errors: ValidationErrors,
    saved: bool,
    dirty: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(FieldDefinition::default())
    }
}

impl EditorSession {
    pub fn new(seed: FieldDefinition) -> Self {
        Self {
            definition: seed.clone(),
            seed,
            selection: SelectionTracker::new(),
            pending_choice: String::new(),
            pending_error: None,
            search_query: String::new(),
            picker_open: false,
            drag: DragReorder::new(),
            errors: ValidationErrors::new(),
            saved: false,
            dirty: false,
        }
    }

    pub fn with_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(FieldDefinition::with_choices(ChoiceSet::from_seed(choices)))
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn pending_error(&self) -> Option<&ChoiceError> {
        self.pending_error.as_ref()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn can_reorder(&self) -> bool {
        DragReorder::enabled(self.definition.order)
    }

    /// Ordered, filtered list as the picker shows it.
    pub fn visible_choices(&self) -> Vec<String> {
        visible(&self.definition.ordered_choices(), &self.search_query)
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            label: &self.definition.label,
            is_multi_value_required: self.definition.is_multi_value_required,
            default_value: &self.definition.default_value,
            order: self.definition.order,
            choices: self.definition.choices.as_slice(),
            visible_choices: VisibleChoices::from_items(self.visible_choices()),
            selected_choices: self.selection.as_slice(),
            pending_choice_text: &self.pending_choice,
            pending_choice_error: self.pending_error.as_ref(),
            search_query: &self.search_query,
            is_picker_open: self.picker_open,
            drag_source: self.drag.source(),
            can_reorder: self.can_reorder(),
            errors: &self.errors,
            is_saved: self.saved,
            is_dirty: self.dirty,
        }
    }

    /// Applies a scalar edit. Un-saves and marks dirty; existing error
    /// messages stay until the next save attempt.
    pub fn edit(&mut self, edit: ScalarEdit) -> Result<(), ChoiceError> {
        debug!(?edit, "editing scalar field");
        match edit {
            ScalarEdit::Label(label) => self.definition.label = label,
            ScalarEdit::MultiValueRequired(flag) => self.definition.is_multi_value_required = flag,
            ScalarEdit::DefaultValue(value) => {
                if !value.is_empty() && !self.definition.choices.contains(&value) {
                    return Err(ChoiceError::UnknownDefault(value));
                }
                self.definition.default_value = value;
            }
            ScalarEdit::Order(order) => self.definition.order = order,
        }
        self.touch();
        Ok(())
    }

    pub fn set_pending_choice(&mut self, text: impl Into<String>) {
        self.pending_choice = text.into();
    }

    pub fn pending_choice(&self) -> &str {
        &self.pending_choice
    }

    /// Adds the pending text as a new choice. On success the text box and
    /// its error are cleared; on failure the text is kept for correction.
    pub fn add_pending_choice(&mut self) -> Result<(), ChoiceError> {
        match self.definition.choices.add(&self.pending_choice) {
            Ok(added) => {
                debug!(choice = added, "added choice");
                self.pending_choice.clear();
                self.pending_error = None;
                self.touch();
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "rejected pending choice");
                self.pending_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn add_choice(&mut self, text: impl Into<String>) -> Result<(), ChoiceError> {
        self.set_pending_choice(text);
        self.add_pending_choice()
    }

    /// Abandons the pending entry. Choices and selection are untouched.
    pub fn cancel_pending_choice(&mut self) {
        self.pending_choice.clear();
        self.pending_error = None;
    }

    /// Flips the selection state of a current choice. Values that are not
    /// choices are ignored. Returns true when something changed.
    pub fn toggle_choice_selection(&mut self, value: &str) -> bool {
        if !self.definition.choices.contains(value) {
            return false;
        }
        let selected = self.selection.toggle(value);
        debug!(choice = value, selected, "toggled choice selection");
        self.touch();
        true
    }

    /// Deletes every selected choice and empties the selection.
    pub fn remove_selected_choices(&mut self) -> Vec<String> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let targets = self.selection.remove_all();
        self.remove_choices(&targets)
    }

    /// Deletes the listed choices, pruning the selection and resetting the
    /// default when it pointed at a removed value.
    pub fn remove_choices<S: AsRef<str>>(&mut self, values: &[S]) -> Vec<String> {
        let removed = self.definition.choices.remove_many(values);
        if removed.is_empty() {
            return removed;
        }
        self.selection.retain_members(&self.definition.choices);
        if removed.contains(&self.definition.default_value) {
            self.definition.default_value.clear();
        }
        debug!(?removed, "removed choices");
        self.drag.cancel();
        self.touch();
        removed
    }

    /// Replaces the manual order with a permutation of the current choices.
    pub fn reorder_choices(&mut self, sequence: Vec<String>) -> Result<(), ChoiceError> {
        self.definition.choices.permute(sequence)?;
        self.touch();
        Ok(())
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Updates the picker search. Any drag in flight is abandoned because
    /// its index refers to the previous view.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.drag.cancel();
    }

    /// Opens, closes, or (with `None`) flips the picker. Closing it abandons
    /// an active drag.
    pub fn toggle_picker(&mut self, open: Option<bool>) {
        self.picker_open = open.unwrap_or(!self.picker_open);
        if !self.picker_open {
            self.drag.cancel();
        }
    }

    /// Notification that the pointer was used outside the picker surface.
    pub fn pointer_outside_picker(&mut self) {
        self.toggle_picker(Some(false));
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.drag.source()
    }

    pub fn begin_drag(&mut self, index: usize) -> bool {
        let view = self.visible_choices();
        self.drag.begin(index, &view, self.definition.order)
    }

    /// Completes the active drag on the `index`-th visible item. Returns true
    /// when the manual order changed.
    pub fn drop_at(&mut self, index: usize) -> bool {
        let view = self.visible_choices();
        let order = self.definition.order;
        let moved = self
            .drag
            .drop(index, &view, &mut self.definition.choices, order);
        if moved {
            debug!(target_index = index, "reordered choices");
            self.touch();
        }
        moved
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Validates the definition and, when it passes, hands a snapshot to
    /// `sink`. Nothing is committed when any check fails.
    pub fn save(&mut self, sink: &mut dyn CommitSink) -> Result<CommittedField, ValidationErrors> {
        match self.definition.validate(&self.selection) {
            Ok(()) => {
                self.errors.clear();
                let committed = self.snapshot();
                info!(label = %committed.definition.label, "committing field definition");
                sink.commit(&committed);
                self.saved = true;
                self.dirty = false;
                Ok(committed)
            }
            Err(errors) => {
                debug!(%errors, "field definition rejected");
                self.errors = errors.clone();
                self.saved = false;
                Err(errors)
            }
        }
    }

    /// Hard reset to the seed state.
    pub fn discard(&mut self) {
        debug!("discarding session");
        *self = Self::new(self.seed.clone());
    }

    pub fn snapshot(&self) -> CommittedField {
        CommittedField {
            definition: self.definition.clone(),
            selected_choices: self.selection.as_slice().to_vec(),
        }
    }

    /// Runs one command through a [`SessionEngine`] bound to `sink`.
    pub fn apply(&mut self, command: SessionCommand, sink: &mut dyn CommitSink) -> CommandOutcome {
        SessionEngine::new(self, sink).dispatch(command)
    }

    fn touch(&mut self) {
        self.saved = false;
        self.dirty = true;
    }
}

/// Read-only projection handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub label: &'a str,
    pub is_multi_value_required: bool,
    pub default_value: &'a str,
    pub order: Option<OrderPolicy>,
    pub choices: &'a [String],
    pub visible_choices: VisibleChoices,
    pub selected_choices: &'a [String],
    pub pending_choice_text: &'a str,
    pub pending_choice_error: Option<&'a ChoiceError>,
    pub search_query: &'a str,
    pub is_picker_open: bool,
    pub drag_source: Option<usize>,
    pub can_reorder: bool,
    pub errors: &'a ValidationErrors,
    pub is_saved: bool,
    pub is_dirty: bool,
}
