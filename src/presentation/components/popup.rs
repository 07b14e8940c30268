use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::PopupRender;
use super::layout::popup_rect;

const HINT: &str = " Enter choose · Esc cancel ";
// Highlight symbol plus the current-value marker.
const MARK_COLUMNS: u16 = 4;

/// Single-choice list for the default value or the order. The stored value
/// carries a filled marker; a placeholder row renders dimmed.
pub fn render_popup(frame: &mut Frame<'_>, popup: PopupRender<'_>) {
    if popup.options.is_empty() {
        return;
    }
    let area = popup_area(frame.area(), &popup);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = popup
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if popup.current == Some(index) { "● " } else { "○ " };
            let text = if popup.placeholder == Some(index) {
                Span::styled(
                    option.as_str(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::raw(option.as_str())
            };
            ListItem::new(Line::from(vec![Span::raw(marker), text]))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(popup.selected.min(popup.options.len() - 1)));

    let block = Block::default()
        .title(popup.title)
        .title_bottom(Line::from(HINT).style(Style::default().fg(Color::DarkGray)))
        .borders(Borders::ALL);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}

/// Centred box wide enough for the longest option or the hint, and tall
/// enough for every option when the screen allows it.
fn popup_area(bounds: Rect, popup: &PopupRender<'_>) -> Rect {
    let widest = popup
        .options
        .iter()
        .map(|option| UnicodeWidthStr::width(option.as_str()) as u16 + MARK_COLUMNS)
        .chain([
            UnicodeWidthStr::width(popup.title) as u16,
            UnicodeWidthStr::width(HINT) as u16,
        ])
        .max()
        .unwrap_or_default();
    let width = widest
        .saturating_add(2)
        .min(bounds.width.saturating_sub(2).max(1));
    let rows = u16::try_from(popup.options.len()).unwrap_or(u16::MAX);
    let height = rows.saturating_add(2).min(bounds.height).max(3);
    popup_rect(bounds, width, height)
}
