use ropey::Rope;
use unicode_width::UnicodeWidthStr;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Raw text the user is typing, backed by a rope.
///
/// The cursor is a char index into the rope. Vertical movement keeps the
/// column (in chars) it started from until a horizontal move or an edit.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    rope: Rope,
    cursor: usize,
    col_memory: Option<usize>,
}

impl InputBuffer {
    /// Create a buffer with the cursor at the end of `text`.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self {
            rope,
            cursor,
            col_memory: None,
        }
    }

    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Cursor as a char index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Zero-based line of the cursor and its char column.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    /// Terminal cell column of the cursor within its line.
    pub fn cursor_display_col(&self) -> usize {
        let (line, col) = self.cursor_line_col();
        let before: String = self.rope.line(line).chars().take(col).collect();
        UnicodeWidthStr::width(before.as_str())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.col_memory = None;
    }

    /// Insert a string at the cursor (paste).
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.rope.insert(self.cursor, s);
        self.cursor += s.chars().count();
        self.col_memory = None;
    }

    /// Delete the character before the cursor.
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.col_memory = None;
        true
    }

    /// Delete the character at the cursor.
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..=self.cursor);
        self.col_memory = None;
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.col_memory = None;
            }
            Direction::Right => {
                self.cursor = (self.cursor + 1).min(self.rope.len_chars());
                self.col_memory = None;
            }
            Direction::Up => self.move_vertical(false),
            Direction::Down => self.move_vertical(true),
        }
    }

    fn move_vertical(&mut self, down: bool) {
        let (line, col) = self.cursor_line_col();
        let target = if down {
            if line + 1 >= self.line_count() {
                return;
            }
            line + 1
        } else {
            if line == 0 {
                return;
            }
            line - 1
        };
        let want = *self.col_memory.get_or_insert(col);
        let target_len = self.line_at(target).map_or(0, |l| l.chars().count());
        self.cursor = self.rope.line_to_char(target) + want.min(target_len);
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.rope.line_to_char(line);
        self.col_memory = None;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        let len = self.line_at(line).map_or(0, |l| l.chars().count());
        self.cursor = self.rope.line_to_char(line) + len;
        self.col_memory = None;
    }

    pub const fn move_to_start(&mut self) {
        self.cursor = 0;
        self.col_memory = None;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.rope.len_chars();
        self.col_memory = None;
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::empty()
    }
}
