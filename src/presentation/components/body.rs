use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{app::FocusTarget, form::FieldKey};

use super::super::view::{HitMap, UiContext};

const TITLE_WIDTH: usize = 15;
const VALUE_COLUMN: u16 = 2 + TITLE_WIDTH as u16;

pub fn render_body(
    frame: &mut Frame<'_>,
    area: Rect,
    ctx: &UiContext<'_>,
    enable_cursor: bool,
    hits: &mut HitMap,
) {
    let block = Block::default().title("Field").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wrap_width = (inner.width.saturating_sub(VALUE_COLUMN) as usize).max(8);
    let mut y = inner.y;
    for target in FocusTarget::ALL {
        let focused = ctx.focus == target;
        let mut lines = vec![row_line(target, ctx, focused)];
        let chips_line = if target == FocusTarget::Choices && !ctx.session.selected_choices.is_empty()
        {
            lines.push(Line::default());
            Some(lines.len() - 1)
        } else {
            None
        };
        if let Some(message) = error_message(target, ctx) {
            lines.extend(error_lines(&message, wrap_width));
        }

        let height = (lines.len() as u16).min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, height);
        frame.render_widget(Paragraph::new(lines), rect);
        hits.rows.push((target, rect));

        if let Some(offset) = chips_line
            && (offset as u16) < height
        {
            render_chips(frame, rect, y + offset as u16, ctx, hits);
        }

        if enable_cursor && focused && !ctx.session.is_picker_open && target.is_text_entry() {
            let text = match target {
                FocusTarget::Label => ctx.session.label,
                _ => ctx.session.pending_choice_text,
            };
            let column = inner
                .x
                .saturating_add(VALUE_COLUMN)
                .saturating_add(UnicodeWidthStr::width(text) as u16)
                .min(inner.right().saturating_sub(1));
            frame.set_cursor_position((column, y));
        }
        y += height;
    }

    if ctx.session.is_saved && y < inner.bottom() {
        let success = Paragraph::new(Line::from(Span::styled(
            "  Changes saved successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(success, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn row_line(target: FocusTarget, ctx: &UiContext<'_>, focused: bool) -> Line<'static> {
    let marker = if focused { "» " } else { "  " };
    let title_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![
        Span::raw(marker),
        Span::styled(format!("{:<TITLE_WIDTH$}", target.title()), title_style),
    ];
    spans.extend(value_spans(target, ctx));
    Line::from(spans)
}

fn value_spans(target: FocusTarget, ctx: &UiContext<'_>) -> Vec<Span<'static>> {
    let session = &ctx.session;
    let value = Style::default().fg(Color::White);
    let placeholder = Style::default().fg(Color::DarkGray);
    match target {
        FocusTarget::Label => vec![text_or_placeholder(session.label, "Sales region")],
        FocusTarget::Required => {
            let mark = if session.is_multi_value_required { "x" } else { " " };
            vec![
                Span::styled("Multi-select  ", value),
                Span::styled(format!("[{mark}] A Value is required"), value),
            ]
        }
        FocusTarget::DefaultValue => vec![
            text_or_placeholder(session.default_value, "Select a default value"),
            Span::styled(" ▾", placeholder),
        ],
        FocusTarget::Choices => {
            let arrow = if session.is_picker_open { " ▴" } else { " ▾" };
            let mut spans = vec![
                Span::styled("Select choices...", placeholder),
                Span::styled(arrow, placeholder),
            ];
            spans.push(Span::styled(
                format!("  {} choices", session.choices.len()),
                placeholder,
            ));
            if !session.selected_choices.is_empty() {
                spans.push(Span::styled(
                    format!(", {} selected", session.selected_choices.len()),
                    placeholder,
                ));
            }
            spans
        }
        FocusTarget::NewChoice => vec![text_or_placeholder(
            session.pending_choice_text,
            "Type a choice, Enter to add",
        )],
        FocusTarget::Order => vec![
            match session.order {
                Some(policy) => Span::styled(policy.label().to_string(), value),
                None => Span::styled("Select an order", placeholder),
            },
            Span::styled(" ▾", placeholder),
        ],
        FocusTarget::Save => vec![Span::styled(
            "[ Save changes ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )],
        FocusTarget::Cancel => vec![Span::styled("Cancel", Style::default().fg(Color::Red))],
    }
}

fn text_or_placeholder(text: &str, placeholder: &'static str) -> Span<'static> {
    if text.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(text.to_string(), Style::default().fg(Color::White))
    }
}

fn error_message(target: FocusTarget, ctx: &UiContext<'_>) -> Option<String> {
    let key = match target {
        FocusTarget::Label => FieldKey::Label,
        FocusTarget::DefaultValue => FieldKey::DefaultValue,
        FocusTarget::Choices => FieldKey::Choices,
        FocusTarget::Order => FieldKey::Order,
        FocusTarget::NewChoice => {
            return ctx
                .session
                .pending_choice_error
                .map(|error| error.message().to_string());
        }
        _ => return None,
    };
    ctx.session
        .errors
        .get(key)
        .map(|error| error.message().to_string())
}

fn error_lines(message: &str, width: usize) -> Vec<Line<'static>> {
    let indent = " ".repeat(VALUE_COLUMN as usize);
    wrap(message, width)
        .into_iter()
        .map(|segment| {
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(segment.into_owned(), Style::default().fg(Color::Red)),
            ])
        })
        .collect()
}

fn render_chips(frame: &mut Frame<'_>, row: Rect, y: u16, ctx: &UiContext<'_>, hits: &mut HitMap) {
    let chip_style = Style::default().fg(Color::Black).bg(Color::LightBlue);
    let mut x = row.x.saturating_add(VALUE_COLUMN);
    for (index, value) in ctx.session.selected_choices.iter().enumerate() {
        let label = format!(" {value} × ");
        let width = UnicodeWidthStr::width(label.as_str()) as u16;
        if x.saturating_add(width) > row.right() {
            let rest = ctx.session.selected_choices.len() - index;
            let more = Paragraph::new(Span::styled(
                format!("+{rest}"),
                Style::default().fg(Color::DarkGray),
            ));
            let width = (row.right().saturating_sub(x)).min(4);
            frame.render_widget(more, Rect::new(x, y, width, 1));
            break;
        }
        let area = Rect::new(x, y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label, chip_style)), area);
        hits.chips.push((value.clone(), area));
        x = x.saturating_add(width + 1);
    }
}
