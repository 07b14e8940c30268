use serde::{Deserialize, Serialize};

use super::error::ChoiceError;

/// Canonical, manually ordered list of distinct choice values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceSet {
    items: Vec<String>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from seed values, trimming them and skipping blanks and
    /// repeats so the uniqueness invariant holds from the start.
    pub fn from_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for value in seed {
            let _ = set.add(value.as_ref());
        }
        set
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Appends a trimmed value and returns the stored text.
    pub fn add(&mut self, value: &str) -> Result<&str, ChoiceError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ChoiceError::EmptyChoice);
        }
        if self.contains(trimmed) {
            return Err(ChoiceError::DuplicateChoice(trimmed.to_string()));
        }
        self.items.push(trimmed.to_string());
        Ok(self.items.last().map(String::as_str).unwrap_or_default())
    }

    /// Removes every listed value that is present, returning what was removed
    /// in canonical order.
    pub fn remove_many<S: AsRef<str>>(&mut self, values: &[S]) -> Vec<String> {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if values.iter().any(|value| value.as_ref() == item) {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn permute(&mut self, sequence: Vec<String>) -> Result<(), ChoiceError> {
        if !self.is_permutation(&sequence) {
            return Err(ChoiceError::NotAPermutation);
        }
        self.items = sequence;
        Ok(())
    }

    /// Moves the item at `from` so it ends up at `to`. Returns false when
    /// either index is out of bounds or nothing would change.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    fn is_permutation(&self, sequence: &[String]) -> bool {
        if sequence.len() != self.items.len() {
            return false;
        }
        let mut expected = self.items.iter().collect::<Vec<_>>();
        let mut candidate = sequence.iter().collect::<Vec<_>>();
        expected.sort();
        candidate.sort();
        expected == candidate
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
