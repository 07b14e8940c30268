use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};

use crate::{app::FocusTarget, form::SessionView};

use super::components::{render_body, render_footer, render_header, render_picker, render_popup};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub session: SessionView<'a>,
    pub focus: FocusTarget,
    pub picker_cursor: usize,
    pub picker_height: u16,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
    /// Row holding the value currently stored in the definition.
    pub current: Option<usize>,
    /// Row that stands for "no value".
    pub placeholder: Option<usize>,
}

/// Screen regions recorded while drawing, used to route mouse events.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub rows: Vec<(FocusTarget, Rect)>,
    pub chips: Vec<(String, Rect)>,
    pub picker: Option<Rect>,
    pub list: Option<Rect>,
    pub list_offset: usize,
}

impl HitMap {
    pub fn row_at(&self, column: u16, row: u16) -> Option<FocusTarget> {
        let position = Position::new(column, row);
        self.rows
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(target, _)| *target)
    }

    pub fn chip_at(&self, column: u16, row: u16) -> Option<&str> {
        let position = Position::new(column, row);
        self.chips
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(value, _)| value.as_str())
    }

    pub fn in_picker(&self, column: u16, row: u16) -> bool {
        self.picker
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Index into the visible choices under the pointer, if any.
    pub fn list_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.list_offset + (row - area.y) as usize)
    }
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let mut hits = HitMap::default();
    render_header(frame, chunks[0], ctx.title);
    let cursor_enabled = ctx.popup.is_none();
    render_body(frame, chunks[1], &ctx, cursor_enabled, &mut hits);
    render_footer(frame, chunks[2], &ctx);

    if ctx.session.is_picker_open {
        render_picker(frame, chunks[1], &ctx, &mut hits);
    }
    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
    hits
}
