/// Single-line text buffer backing the API key field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub buffer: String,
    cursor_position: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position counted in chars, not bytes.
    pub fn cursor(&self) -> usize {
        self.cursor_position
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor_position = self.char_count();
    }

    pub fn handle_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        let idx = self.byte_index();
        self.buffer.insert_str(idx, &text);
        self.cursor_position += text.chars().count();
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let idx = self.byte_index();
        self.buffer.remove(idx);
    }

    pub fn handle_delete(&mut self) {
        if self.cursor_position < self.char_count() {
            let idx = self.byte_index();
            self.buffer.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}
