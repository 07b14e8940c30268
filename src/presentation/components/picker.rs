use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::FocusTarget, form::VisibleChoices};

use super::super::view::{HitMap, UiContext};
use super::layout::{dropdown_rect, scroll_offset};

/// Drop-down with the search box and the ordered, filtered choices.
pub fn render_picker(frame: &mut Frame<'_>, bounds: Rect, ctx: &UiContext<'_>, hits: &mut HitMap) {
    let Some(anchor) = hits
        .rows
        .iter()
        .find(|(target, _)| *target == FocusTarget::Choices)
        .map(|(_, area)| Rect::new(area.x, area.y, area.width, 1))
    else {
        return;
    };
    let area = dropdown_rect(bounds, anchor, ctx.picker_height.saturating_add(3));
    if area.height < 4 {
        return;
    }
    frame.render_widget(Clear, area);
    let title = if ctx.session.can_reorder {
        "Choices (manual order, Ctrl+G to move)"
    } else {
        "Choices"
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.picker = Some(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let query = ctx.session.search_query;
    let search = if query.is_empty() {
        Line::from(vec![
            Span::raw("/ "),
            Span::styled("Search choices...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("/ "), Span::raw(query.to_string())])
    };
    frame.render_widget(Paragraph::new(search), chunks[0]);
    if ctx.popup.is_none() {
        let column = chunks[0]
            .x
            .saturating_add(2)
            .saturating_add(UnicodeWidthStr::width(query) as u16)
            .min(chunks[0].right().saturating_sub(1));
        frame.set_cursor_position((column, chunks[0].y));
    }

    let items = match &ctx.session.visible_choices {
        VisibleChoices::NoResults => {
            let empty = Paragraph::new(Span::styled(
                "No choices found.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(empty, chunks[1]);
            return;
        }
        VisibleChoices::Items(items) => items,
    };

    let list_area = chunks[1];
    let cursor = ctx.picker_cursor.min(items.len().saturating_sub(1));
    let offset = scroll_offset(cursor, list_area.height as usize);
    hits.list = Some(list_area);
    hits.list_offset = offset;

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let checked = ctx.session.selected_choices.iter().any(|item| item == value);
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut spans = vec![Span::raw(format!("{mark} {value}"))];
            if ctx.session.drag_source == Some(index) {
                spans.push(Span::styled(
                    "  ⇅ moving",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if ctx.session.can_reorder {
                spans.push(Span::styled("  ≡", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect::<Vec<_>>();

    let mut state = ListState::default();
    state.select(Some(cursor));
    *state.offset_mut() = offset;
    let list = List::new(rows)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, list_area, &mut state);
}
