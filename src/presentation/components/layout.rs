use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}

/// Drop-down area hanging below `anchor`, kept inside `bounds`.
pub fn dropdown_rect(bounds: Rect, anchor: Rect, height: u16) -> Rect {
    let top = anchor.y.saturating_add(anchor.height).min(bounds.bottom());
    let available = bounds.bottom().saturating_sub(top);
    if available >= height.min(4) {
        return Rect::new(anchor.x, top, anchor.width, height.min(available));
    }
    // Not enough room below: open upwards instead.
    let height = height.min(anchor.y.saturating_sub(bounds.y));
    Rect::new(anchor.x, anchor.y.saturating_sub(height), anchor.width, height)
}

/// First visible index so that `cursor` stays inside a window of `rows`.
pub fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        0
    } else {
        cursor.saturating_sub(rows - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_opens_below_anchor_when_room() {
        let bounds = Rect::new(0, 0, 40, 30);
        let anchor = Rect::new(2, 5, 30, 1);
        assert_eq!(dropdown_rect(bounds, anchor, 10), Rect::new(2, 6, 30, 10));
    }

    #[test]
    fn dropdown_flips_up_near_bottom() {
        let bounds = Rect::new(0, 0, 40, 20);
        let anchor = Rect::new(0, 18, 40, 1);
        let area = dropdown_rect(bounds, anchor, 10);
        assert_eq!(area.bottom(), 18);
        assert_eq!(area.height, 10);
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(2, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
