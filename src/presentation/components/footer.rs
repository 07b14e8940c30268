use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::form::SessionView;

use super::super::view::UiContext;

/// Key help on top; below it the last status message and a summary of the
/// definition being edited.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let help = Paragraph::new(ctx.help.unwrap_or_default())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(help, rows[0]);

    let summary = summary(&ctx.session).join(" • ");
    let status_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(summary.chars().count() as u16 + 1),
        ])
        .split(rows[1]);

    let message = Paragraph::new(Line::from(vec![
        badge(&ctx.session),
        Span::raw(" "),
        Span::raw(ctx.status_message),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, status_row[0]);

    let summary = Paragraph::new(summary)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(summary, status_row[1]);
}

fn summary(session: &SessionView<'_>) -> Vec<String> {
    let mut parts = vec![format!(
        "{} choices, {} selected",
        session.choices.len(),
        session.selected_choices.len()
    )];
    let order = session.order.map_or("unset", |policy| policy.as_str());
    parts.push(format!("order: {order}"));
    if session.drag_source.is_some() {
        parts.push("moving".to_string());
    }
    if !session.errors.is_empty() {
        parts.push(format!("errors: {}", session.errors.len()));
    }
    parts
}

fn badge(session: &SessionView<'_>) -> Span<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    if !session.errors.is_empty() {
        Span::styled(
            format!("[! {}]", session.errors.len()),
            bold.fg(Color::Red),
        )
    } else if session.is_dirty {
        Span::styled("[unsaved]", bold.fg(Color::Yellow))
    } else if session.is_saved {
        Span::styled("[saved]", bold.fg(Color::Green))
    } else {
        Span::styled("[draft]", bold.fg(Color::Gray))
    }
}
