use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::{
    app::{
        input::KeyAction,
        keymap::{self, KeymapContext},
    },
    form::SessionCommand,
};

impl App {
    pub(super) fn open_picker(&mut self) {
        self.dispatch(SessionCommand::TogglePicker(Some(true)));
        self.picker_cursor = 0;
        self.status.picker_opened();
    }

    pub(super) fn handle_picker_key(&mut self, key: KeyEvent) {
        match keymap::classify_key(KeymapContext::Picker, &key) {
            Some(KeyAction::Save) => self.on_save(),
            Some(KeyAction::Quit) => self.on_exit(),
            Some(KeyAction::CursorStep(delta)) => self.move_picker_cursor(delta),
            Some(KeyAction::ToggleSelection) => self.toggle_at_cursor(),
            Some(KeyAction::RemoveSelected) => self.remove_selected(),
            Some(KeyAction::GrabOrDrop) => self.grab_or_drop(),
            Some(KeyAction::ClosePicker) => self.close_picker(),
            Some(_) => {}
            None => self.edit_search(key),
        }
    }

    pub(super) fn visible_len(&self) -> usize {
        self.session.visible_choices().len()
    }

    pub(super) fn clamp_picker_cursor(&mut self) {
        self.picker_cursor = self
            .picker_cursor
            .min(self.visible_len().saturating_sub(1));
    }

    fn move_picker_cursor(&mut self, delta: i32) {
        let len = self.visible_len();
        if len == 0 {
            self.picker_cursor = 0;
            return;
        }
        let next = (self.picker_cursor as i64 + delta as i64).clamp(0, len as i64 - 1);
        self.picker_cursor = next as usize;
    }

    pub(super) fn toggle_visible(&mut self, index: usize) {
        let Some(value) = self.session.visible_choices().get(index).cloned() else {
            return;
        };
        if self
            .dispatch(SessionCommand::ToggleChoiceSelection(value.clone()))
            .is_changed()
        {
            let selected = self.session.selection().contains(&value);
            self.status.selection_changed(&value, selected);
        }
    }

    fn toggle_at_cursor(&mut self) {
        self.toggle_visible(self.picker_cursor);
    }

    fn remove_selected(&mut self) {
        let count = self.session.selection().len();
        if count == 0 {
            self.status.choices_removed(0);
            return;
        }
        if self
            .dispatch(SessionCommand::RemoveSelectedChoices)
            .is_changed()
        {
            self.status.choices_removed(count);
        }
        self.clamp_picker_cursor();
    }

    fn grab_or_drop(&mut self) {
        if self.session.drag_source().is_some() {
            self.drop_at(self.picker_cursor);
            return;
        }
        if !self.session.can_reorder() {
            self.status.reorder_locked();
            return;
        }
        let cursor = self.picker_cursor;
        if self.dispatch(SessionCommand::BeginDrag(cursor)).is_changed() {
            let value = self
                .session
                .visible_choices()
                .get(cursor)
                .cloned()
                .unwrap_or_default();
            self.status.moving(&value);
        }
    }

    pub(super) fn drop_at(&mut self, index: usize) {
        let moved = self.dispatch(SessionCommand::DropAt(index)).is_changed();
        if moved {
            self.picker_cursor = index;
        }
        self.status.dropped(moved);
    }

    fn close_picker(&mut self) {
        if self.session.drag_source().is_some() {
            self.dispatch(SessionCommand::CancelDrag);
            self.status.move_cancelled();
            return;
        }
        self.dispatch(SessionCommand::TogglePicker(Some(false)));
        self.status.ready();
    }

    fn edit_search(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        let mut query = self.session.search_query().to_string();
        match key.code {
            KeyCode::Char(ch) => query.push(ch),
            KeyCode::Backspace => {
                if query.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.dispatch(SessionCommand::SetSearchQuery(query));
        self.picker_cursor = 0;
        self.status.search_matches(self.visible_len());
    }
}
