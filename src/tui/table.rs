/// Result table selection and scroll state.
///
/// Every movement goes through [`TableState::select_clamped`], so the
/// selection always stays inside `0..total` and on screen.
pub struct TableState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

/// One keyboard movement over the result rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

impl TableState {
    /// Select the first row of a fresh result list (or nothing)
    pub fn reset(&mut self, total: usize) {
        self.scroll_offset = 0;
        self.select_clamped(0, total);
    }

    pub fn apply(&mut self, movement: Move, total: usize) {
        let current = self.selected.unwrap_or(0);
        let page = self.visible_rows.saturating_sub(1).max(1);
        let target = match movement {
            Move::Up => current.saturating_sub(1),
            Move::Down if self.selected.is_none() => 0,
            Move::Down => current.saturating_add(1),
            Move::PageUp => current.saturating_sub(page),
            Move::PageDown => current.saturating_add(page),
            Move::First => 0,
            Move::Last => usize::MAX,
        };
        self.select_clamped(target, total);
    }

    /// Select `index` clamped to the last row, then scroll it into view
    pub fn select_clamped(&mut self, index: usize, total: usize) {
        if total == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }
        let index = index.min(total - 1);
        self.selected = Some(index);

        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index + 1 - self.visible_rows;
        }
    }

    /// Adjust scrolling after the viewport height changed
    pub fn set_visible_rows(&mut self, rows: usize, total: usize) {
        self.visible_rows = rows;
        if let Some(i) = self.selected {
            self.select_clamped(i, total);
        }
    }
}
