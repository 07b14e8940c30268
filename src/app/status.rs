use std::fmt::Display;

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to validate and save.";
pub const SAVED_STATUS: &str = "Changes saved successfully!";

const CHOOSE_HINT: &str = "Use ↑/↓ and Enter to choose";

/// Footer feedback for the last editor action. Each method names the event
/// that produced the message so call sites never format text themselves.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn ready(&mut self) {
        self.show(READY_STATUS);
    }

    pub fn editing(&mut self, row: &str) {
        self.show(format!("Editing {row}"));
    }

    pub fn value_updated(&mut self) {
        self.show("Value updated");
    }

    pub fn choosing(&mut self) {
        self.show(CHOOSE_HINT);
    }

    /// Any rejected edit; the error text is already user-facing.
    pub fn rejected(&mut self, err: &impl Display) {
        self.show(err.to_string());
    }

    pub fn choice_added(&mut self, value: &str) {
        self.show(format!("Added choice {value}"));
    }

    pub fn selection_changed(&mut self, value: &str, selected: bool) {
        let verb = if selected { "Selected" } else { "Deselected" };
        self.show(format!("{verb} {value}"));
    }

    pub fn choices_removed(&mut self, count: usize) {
        if count == 0 {
            self.show("Select choices before removing them");
        } else {
            self.show(format!("Removed {count} choice(s)"));
        }
    }

    pub fn picker_opened(&mut self) {
        self.show("Type to search, Space to select, Esc to close");
    }

    pub fn search_matches(&mut self, visible: usize) {
        if visible == 0 {
            self.show("No choices found.");
        } else {
            self.show("Filtering choices");
        }
    }

    pub fn reorder_locked(&mut self) {
        self.show("Set Order to Manual to reorder choices");
    }

    pub fn moving(&mut self, value: &str) {
        self.show(format!(
            "Moving {value}: ↑/↓ then Ctrl+G to drop, Esc to cancel"
        ));
    }

    pub fn dropped(&mut self, moved: bool) {
        if moved {
            self.value_updated();
        } else {
            self.show("Order unchanged");
        }
    }

    pub fn move_cancelled(&mut self) {
        self.show("Move cancelled");
    }

    pub fn saved(&mut self) {
        self.show(SAVED_STATUS);
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.show(format!("{count} issue(s) remaining"));
    }

    pub fn discarded(&mut self) {
        self.show("Changes discarded");
    }

    pub fn pending_exit(&mut self) {
        self.show("Unsaved changes. Press Ctrl+Q again to quit without saving.");
    }
}
