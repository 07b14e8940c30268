use crate::{
    form::{EditorSession, OrderPolicy, ScalarEdit},
    presentation::PopupRender,
};

/// Which single-valued field a popup edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopupTarget {
    DefaultValue,
    Order,
}

/// Single-choice list opened over the form for the default value and order.
pub(crate) struct PopupState {
    target: PopupTarget,
    title: String,
    options: Vec<String>,
    selected: usize,
    current: Option<usize>,
}

pub(crate) const NO_DEFAULT_LABEL: &str = "Select a default value";

impl PopupState {
    pub(crate) fn for_default_value(session: &EditorSession) -> Self {
        let definition = session.definition();
        let mut options = vec![NO_DEFAULT_LABEL.to_string()];
        options.extend(definition.choices.iter().map(str::to_string));
        let current = definition
            .choices
            .position(&definition.default_value)
            .map(|index| index + 1);
        Self {
            target: PopupTarget::DefaultValue,
            title: "Default Value".to_string(),
            options,
            selected: current.unwrap_or(0),
            current,
        }
    }

    pub(crate) fn for_order(session: &EditorSession) -> Self {
        let options = OrderPolicy::ALL
            .iter()
            .map(|policy| policy.label().to_string())
            .collect();
        let current = session
            .definition()
            .order
            .and_then(|stored| OrderPolicy::ALL.iter().position(|policy| *policy == stored));
        Self {
            target: PopupTarget::Order,
            title: "Order".to_string(),
            options,
            selected: current.unwrap_or(0),
            current,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
            current: self.current,
            placeholder: (self.target == PopupTarget::DefaultValue).then_some(0),
        }
    }

    /// The edit the current selection stands for.
    pub(crate) fn selection_edit(&self) -> ScalarEdit {
        match self.target {
            PopupTarget::DefaultValue => {
                let value = if self.selected == 0 {
                    String::new()
                } else {
                    self.options
                        .get(self.selected)
                        .cloned()
                        .unwrap_or_default()
                };
                ScalarEdit::DefaultValue(value)
            }
            PopupTarget::Order => {
                ScalarEdit::Order(OrderPolicy::ALL.get(self.selected).copied())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_popup_starts_on_placeholder_and_maps_to_choice() {
        let session = EditorSession::default();
        let mut popup = PopupState::for_default_value(&session);
        assert_eq!(popup.selection_edit(), ScalarEdit::DefaultValue(String::new()));
        assert_eq!(popup.as_render().current, None);
        assert_eq!(popup.as_render().placeholder, Some(0));
        popup.select_next();
        assert_eq!(popup.selection_edit(), ScalarEdit::DefaultValue("Asia".into()));
        popup.select_previous();
        popup.select_previous();
        assert_eq!(popup.selection_edit(), ScalarEdit::DefaultValue("Africa".into()));
    }

    #[test]
    fn order_popup_follows_current_policy() {
        let mut session = EditorSession::default();
        session.edit(ScalarEdit::Order(Some(OrderPolicy::Manual))).unwrap();
        let popup = PopupState::for_order(&session);
        assert_eq!(popup.selection_edit(), ScalarEdit::Order(Some(OrderPolicy::Manual)));
        assert_eq!(popup.as_render().current, Some(1));
        assert_eq!(popup.as_render().placeholder, None);
    }
}
