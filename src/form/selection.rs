use super::choices::ChoiceSet;

/// Chosen subset of the choice set. Values are kept in the order they were
/// picked so chips render in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: Vec<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|item| item == value)
    }

    /// Returns true when the value ends up selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(index) = self.selected.iter().position(|item| item == value) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(value.to_string());
            true
        }
    }

    pub fn remove_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected)
    }

    /// Drops every value that is no longer a choice.
    pub fn retain_members(&mut self, choices: &ChoiceSet) {
        self.selected.retain(|item| choices.contains(item));
    }

    pub fn is_subset_of(&self, choices: &ChoiceSet) -> bool {
        self.selected.iter().all(|item| choices.contains(item))
    }
}
