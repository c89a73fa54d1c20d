use unicode_width::UnicodeWidthStr;

/// Search box state for the TUI
pub struct SearchInput {
    pub query: String,
    /// Byte offset into `query`, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchInput {
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
    }

    /// Display columns between the start of the query and the cursor
    pub fn cursor_column(&self) -> usize {
        self.query[..self.cursor_pos].width()
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::default();
        text.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn typing_and_editing() {
        let mut input = typed("aple");
        input.move_left();
        input.move_left();
        input.move_left();
        input.insert('p');
        assert_eq!(input.query, "apple");

        input.end();
        assert!(input.backspace());
        assert_eq!(input.query, "appl");

        input.home();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.query, "ppl");
    }

    #[test]
    fn cursor_respects_multibyte_chars() {
        let mut input = typed("café");
        assert_eq!(input.cursor_pos, 5);
        assert_eq!(input.cursor_column(), 4);

        input.move_left();
        assert_eq!(input.cursor_pos, 3);
        input.move_right();
        assert_eq!(input.cursor_pos, 5);

        assert!(input.backspace());
        assert_eq!(input.query, "caf");
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = typed("egg");
        assert!(!input.delete());
        input.clear();
        assert_eq!(input.query, "");
        assert_eq!(input.cursor_pos, 0);
    }
}
