//! Layout and text helpers shared by the UI components.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Creates a rectangle of the given percentage size centered within `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

/// Returns the index of the item area containing `(x, y)`, provided the point
/// also lies inside the container.
pub fn find_target_index_by_mouse_position(container: &Rect, items: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    items.iter().position(|area| area.contains(position))
}

pub fn rect_contains(area: &Rect, x: u16, y: u16) -> bool {
    area.contains(Position::new(x, y))
}

/// Truncates `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_requires_point_inside_container() {
        let container = Rect::new(0, 0, 20, 10);
        let items = vec![Rect::new(1, 1, 18, 1), Rect::new(1, 2, 18, 1)];

        assert_eq!(find_target_index_by_mouse_position(&container, &items, 5, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 5, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 25, 1), None);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Ada Lovelace", 20), "Ada Lovelace");
        assert_eq!(truncate_to_width("Ada Lovelace", 6), "Ada L…");
        // Wide glyphs take two columns each.
        assert_eq!(truncate_to_width("銀行銀行", 5), "銀行…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn centered_rect_sits_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(50, 50, parent);
        assert_eq!(centered.width, 50);
        assert_eq!(centered.x, 25);
        assert!(parent.contains(Position::new(centered.x, centered.y)));
    }
}
