use super::{choices::ChoiceSet, order::OrderPolicy};

/// Tracks one drag gesture over the picker list.
///
/// Indices refer to the list as displayed (ordered and filtered). A drop
/// resolves both endpoints to their values and moves the item inside the
/// canonical order, so a filtered view still lands the item next to the
/// entry it was dropped on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragReorder {
    source: Option<usize>,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    pub fn enabled(policy: Option<OrderPolicy>) -> bool {
        policy == Some(OrderPolicy::Manual)
    }

    /// Starts a gesture on the `index`-th visible item. Refused unless the
    /// order is manual and the index points at a visible item.
    pub fn begin(&mut self, index: usize, view: &[String], policy: Option<OrderPolicy>) -> bool {
        if !Self::enabled(policy) || index >= view.len() {
            self.source = None;
            return false;
        }
        self.source = Some(index);
        true
    }

    pub fn cancel(&mut self) {
        self.source = None;
    }

    /// Finishes the gesture on the `target`-th visible item. Returns true when
    /// the canonical order changed. The gesture is over either way.
    pub fn drop(
        &mut self,
        target: usize,
        view: &[String],
        choices: &mut ChoiceSet,
        policy: Option<OrderPolicy>,
    ) -> bool {
        let Some(source) = self.source.take() else {
            return false;
        };
        if source == target || !Self::enabled(policy) {
            return false;
        }
        let (Some(source_value), Some(target_value)) = (view.get(source), view.get(target)) else {
            return false;
        };
        let (Some(from), Some(to)) = (
            choices.position(source_value),
            choices.position(target_value),
        ) else {
            return false;
        };
        choices.move_item(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::filter::visible;

    fn seed() -> ChoiceSet {
        ChoiceSet::from_seed(["Asia", "Australia", "Europe", "Americas", "Africa"])
    }

    #[test]
    fn drop_moves_item_forward_and_back() {
        let mut choices = seed();
        let mut drag = DragReorder::new();
        let view = choices.as_slice().to_vec();
        assert!(drag.begin(0, &view, Some(OrderPolicy::Manual)));
        assert!(drag.drop(2, &view, &mut choices, Some(OrderPolicy::Manual)));
        assert_eq!(
            choices.as_slice(),
            ["Australia", "Europe", "Asia", "Americas", "Africa"]
        );
        assert!(!drag.is_active());

        let view = choices.as_slice().to_vec();
        drag.begin(4, &view, Some(OrderPolicy::Manual));
        drag.drop(0, &view, &mut choices, Some(OrderPolicy::Manual));
        assert_eq!(
            choices.as_slice(),
            ["Africa", "Australia", "Europe", "Asia", "Americas"]
        );
    }

    #[test]
    fn drop_on_same_index_only_clears_state() {
        let mut choices = seed();
        let before = choices.clone();
        let mut drag = DragReorder::new();
        let view = choices.as_slice().to_vec();
        drag.begin(1, &view, Some(OrderPolicy::Manual));
        assert!(!drag.drop(1, &view, &mut choices, Some(OrderPolicy::Manual)));
        assert_eq!(choices, before);
        assert_eq!(drag.source(), None);
    }

    #[test]
    fn drop_without_begin_is_noop() {
        let mut choices = seed();
        let before = choices.clone();
        let view = choices.as_slice().to_vec();
        let mut drag = DragReorder::new();
        assert!(!drag.drop(3, &view, &mut choices, Some(OrderPolicy::Manual)));
        assert_eq!(choices, before);
    }

    #[test]
    fn alphabetical_order_disables_dragging() {
        let mut choices = seed();
        let before = choices.clone();
        let view = OrderPolicy::Alphabetical.apply(&choices);
        let mut drag = DragReorder::new();
        assert!(!drag.begin(0, &view, Some(OrderPolicy::Alphabetical)));
        assert!(!drag.drop(3, &view, &mut choices, Some(OrderPolicy::Alphabetical)));
        assert_eq!(choices, before);
    }

    #[test]
    fn filtered_view_translates_by_value() {
        let mut choices = seed();
        let view = visible(choices.as_slice(), "ca");
        assert_eq!(view, ["Americas", "Africa"]);
        let mut drag = DragReorder::new();
        drag.begin(1, &view, Some(OrderPolicy::Manual));
        assert!(drag.drop(0, &view, &mut choices, Some(OrderPolicy::Manual)));
        assert_eq!(
            choices.as_slice(),
            ["Asia", "Australia", "Europe", "Africa", "Americas"]
        );
    }

    #[test]
    fn out_of_range_target_is_ignored() {
        let mut choices = seed();
        let before = choices.clone();
        let view = choices.as_slice().to_vec();
        let mut drag = DragReorder::new();
        drag.begin(0, &view, Some(OrderPolicy::Manual));
        assert!(!drag.drop(9, &view, &mut choices, Some(OrderPolicy::Manual)));
        assert_eq!(choices, before);
        assert!(!drag.is_active());
    }
}
