use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Errors raised by the pending-choice entry and by direct choice-set edits.
///
/// These never reach the definition-level error map; the session keeps them
/// next to the pending-choice text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    EmptyChoice,
    DuplicateChoice(String),
    NotAPermutation,
    UnknownDefault(String),
}

impl ChoiceError {
    pub fn message(&self) -> &'static str {
        match self {
            ChoiceError::EmptyChoice => "Choice cannot be empty.",
            ChoiceError::DuplicateChoice(_) => "Choice already exists.",
            ChoiceError::NotAPermutation => "New order must contain exactly the current choices.",
            ChoiceError::UnknownDefault(_) => "Default Value must be one of the choices.",
        }
    }
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceError::DuplicateChoice(value) | ChoiceError::UnknownDefault(value) => {
                write!(f, "{} ({value})", self.message())
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ChoiceError {}

/// Definition-level failures, raised only when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefinitionError {
    MissingLabel,
    MissingDefaultValue,
    MissingOrder,
    MissingChoiceSelection,
}

impl DefinitionError {
    pub fn field(self) -> FieldKey {
        match self {
            DefinitionError::MissingLabel => FieldKey::Label,
            DefinitionError::MissingDefaultValue => FieldKey::DefaultValue,
            DefinitionError::MissingOrder => FieldKey::Order,
            DefinitionError::MissingChoiceSelection => FieldKey::Choices,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DefinitionError::MissingLabel => "Label is required.",
            DefinitionError::MissingDefaultValue => "Default Value is required.",
            DefinitionError::MissingOrder => "Order is required.",
            DefinitionError::MissingChoiceSelection => {
                "At least one choice is required when \"A Value is required\" is checked."
            }
        }
    }
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DefinitionError {}

/// Field names used as keys of the definition error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Label,
    DefaultValue,
    Order,
    Choices,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Label => "label",
            FieldKey::DefaultValue => "defaultValue",
            FieldKey::Order => "order",
            FieldKey::Choices => "choices",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every failure found by one validation pass, keyed by field in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: IndexMap<FieldKey, DefinitionError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: DefinitionError) {
        self.entries.insert(error.field(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: FieldKey) -> Option<DefinitionError> {
        self.entries.get(&field).copied()
    }

    pub fn contains(&self, error: DefinitionError) -> bool {
        self.get(error.field()) == Some(error)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, DefinitionError)> + '_ {
        self.entries.iter().map(|(key, error)| (*key, *error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{key}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
