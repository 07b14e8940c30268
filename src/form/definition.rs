use serde::{Deserialize, Serialize};

use super::{
    choices::ChoiceSet,
    error::{DefinitionError, ValidationErrors},
    order::OrderPolicy,
    selection::SelectionTracker,
};

pub const DEFAULT_CHOICES: [&str; 5] = ["Asia", "Australia", "Europe", "Americas", "Africa"];

/// The list-valued field being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub label: String,
    pub is_multi_value_required: bool,
    pub default_value: String,
    pub choices: ChoiceSet,
    pub order: Option<OrderPolicy>,
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self::with_choices(ChoiceSet::from_seed(DEFAULT_CHOICES))
    }
}

impl FieldDefinition {
    pub fn with_choices(choices: ChoiceSet) -> Self {
        Self {
            label: String::new(),
            is_multi_value_required: false,
            default_value: String::new(),
            choices,
            order: None,
        }
    }

    pub fn ordered_choices(&self) -> Vec<String> {
        super::order::ordered_view(&self.choices, self.order)
    }

    /// Runs every commit check and reports all failures at once.
    pub fn validate(&self, selection: &SelectionTracker) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.label.trim().is_empty() {
            errors.push(DefinitionError::MissingLabel);
        }
        if self.default_value.trim().is_empty() {
            errors.push(DefinitionError::MissingDefaultValue);
        }
        if self.order.is_none() {
            errors.push(DefinitionError::MissingOrder);
        }
        if self.is_multi_value_required && selection.is_empty() {
            errors.push(DefinitionError::MissingChoiceSelection);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Immutable snapshot handed to a commit sink after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedField {
    #[serde(flatten)]
    pub definition: FieldDefinition,
    pub selected_choices: Vec<String>,
}
