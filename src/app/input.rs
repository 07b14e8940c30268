/// Rows of the editor that can hold keyboard focus, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FocusTarget {
    Label,
    Required,
    DefaultValue,
    Choices,
    NewChoice,
    Order,
    Save,
    Cancel,
}

impl FocusTarget {
    pub(crate) const ALL: [FocusTarget; 8] = [
        FocusTarget::Label,
        FocusTarget::Required,
        FocusTarget::DefaultValue,
        FocusTarget::Choices,
        FocusTarget::NewChoice,
        FocusTarget::Order,
        FocusTarget::Save,
        FocusTarget::Cancel,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            FocusTarget::Label => "Label",
            FocusTarget::Required => "Type",
            FocusTarget::DefaultValue => "Default Value",
            FocusTarget::Choices => "Choices",
            FocusTarget::NewChoice => "New choice",
            FocusTarget::Order => "Order",
            FocusTarget::Save => "Save changes",
            FocusTarget::Cancel => "Cancel",
        }
    }

    pub(crate) fn is_text_entry(self) -> bool {
        matches!(self, FocusTarget::Label | FocusTarget::NewChoice)
    }

    pub(crate) fn step(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let current = Self::ALL
            .iter()
            .position(|target| *target == self)
            .unwrap_or(0) as i32;
        let next = ((current + delta) % len + len) % len;
        Self::ALL[next as usize]
    }
}

/// Actions a key press can resolve to through the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Save,
    Discard,
    Quit,
    ResetStatus,
    FocusStep(i32),
    Activate,
    TogglePicker,
    ClosePicker,
    CursorStep(i32),
    ToggleSelection,
    RemoveSelected,
    GrabOrDrop,
    CancelPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(FocusTarget::Label.step(-1), FocusTarget::Cancel);
        assert_eq!(FocusTarget::Cancel.step(1), FocusTarget::Label);
        assert_eq!(FocusTarget::Choices.step(2), FocusTarget::Order);
    }
}
