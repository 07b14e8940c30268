use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::{app::input::FocusTarget, form::SessionCommand};

impl App {
    pub(super) fn handle_mouse(&mut self, event: MouseEvent) {
        let (column, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_press(column, row),
            MouseEventKind::Up(MouseButton::Left) => self.on_release(column, row),
            MouseEventKind::ScrollDown if self.session.is_picker_open() => {
                self.picker_cursor += 1;
                self.clamp_picker_cursor();
            }
            MouseEventKind::ScrollUp if self.session.is_picker_open() => {
                self.picker_cursor = self.picker_cursor.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn on_press(&mut self, column: u16, row: u16) {
        if self.popup.is_some() {
            return;
        }
        self.press_index = None;

        if self.session.is_picker_open() {
            if self.hits.in_picker(column, row) {
                if let Some(index) = self.hits.list_index_at(column, row)
                    && index < self.visible_len()
                {
                    self.picker_cursor = index;
                    self.press_index = Some(index);
                    if self.session.can_reorder() {
                        self.dispatch(SessionCommand::BeginDrag(index));
                    }
                }
                return;
            }
            if self.hits.row_at(column, row) == Some(FocusTarget::Choices) {
                self.focus = FocusTarget::Choices;
                self.dispatch(SessionCommand::TogglePicker(Some(false)));
                self.status.ready();
                return;
            }
            self.dispatch(SessionCommand::PointerOutsidePicker);
        }

        if let Some(value) = self.hits.chip_at(column, row).map(str::to_string) {
            self.dispatch(SessionCommand::ToggleChoiceSelection(value.clone()));
            self.status.selection_changed(&value, false);
            return;
        }

        let Some(target) = self.hits.row_at(column, row) else {
            return;
        };
        self.focus = target;
        if !target.is_text_entry() {
            self.activate(target);
        }
    }

    /// A release on the pressed item is a click; anywhere else in the list
    /// finishes the drag there; outside the list abandons it.
    fn on_release(&mut self, column: u16, row: u16) {
        let Some(pressed) = self.press_index.take() else {
            return;
        };
        match self.hits.list_index_at(column, row) {
            Some(index) if index == pressed => {
                self.dispatch(SessionCommand::CancelDrag);
                self.toggle_visible(index);
            }
            Some(index) if self.session.drag_source().is_some() => self.drop_at(index),
            _ => {
                self.dispatch(SessionCommand::CancelDrag);
            }
        }
    }
}
