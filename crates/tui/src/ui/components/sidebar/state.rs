use ratatui::layout::Rect;

/// State for the navigation sidebar.
///
/// Holds the keyboard cursor and the areas recorded during the last render so
/// mouse clicks can be mapped back to links, the brand, and the sign-out button.
#[derive(Debug, Default, Clone)]
pub struct SidebarState {
    /// Index of the link under the keyboard cursor.
    pub cursor: usize,
    /// Last rendered area of the whole sidebar.
    pub last_area: Rect,
    /// Last computed per-link row areas, in navigation order.
    pub per_item_areas: Vec<Rect>,
    pub brand_area: Rect,
    pub logout_area: Rect,
}

impl SidebarState {
    /// Moves the cursor one step, wrapping at either end.
    pub fn move_cursor(&mut self, forward: bool, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1);
        self.cursor = if forward { (current + 1) % len } else { (current + len - 1) % len };
    }

    /// Places the cursor on `index`, clamped into `0..len`.
    pub fn place_cursor(&mut self, index: usize, len: usize) {
        self.cursor = index.min(len.saturating_sub(1));
    }

    /// Forgets hit-test areas; used when the sidebar is not drawn this frame.
    pub fn clear_areas(&mut self) {
        self.last_area = Rect::default();
        self.per_item_areas.clear();
        self.brand_area = Rect::default();
        self.logout_area = Rect::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = SidebarState::default();
        state.move_cursor(false, 5);
        assert_eq!(state.cursor, 4);
        state.move_cursor(true, 5);
        assert_eq!(state.cursor, 0);
        state.move_cursor(true, 5);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn cursor_is_clamped_when_the_list_shrinks() {
        let mut state = SidebarState {
            cursor: 6,
            ..SidebarState::default()
        };
        state.move_cursor(true, 5);
        assert_eq!(state.cursor, 0);

        state.place_cursor(9, 5);
        assert_eq!(state.cursor, 4);
        state.place_cursor(3, 0);
        assert_eq!(state.cursor, 0);
    }
}
