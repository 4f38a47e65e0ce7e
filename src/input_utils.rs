//! Single-line text input shared by the search box, chat draft and assist query
//! Cursor positions count chars, not bytes

/// Find the char position of the previous word boundary
pub fn find_word_boundary_backward(chars: &[char], cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut pos = cursor.min(chars.len()) - 1;
    // Skip trailing whitespace
    while pos > 0 && chars[pos].is_whitespace() {
        pos -= 1;
    }
    // Find start of word
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    pos
}

/// Find the char position of the next word boundary
pub fn find_word_boundary_forward(chars: &[char], cursor: usize) -> usize {
    let len = chars.len();
    if cursor >= len {
        return len;
    }
    let mut pos = cursor;
    while pos < len && !chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < len && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

/// Editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before and after the cursor, for rendering
    pub fn split_at_cursor(&self) -> (String, String) {
        (
            self.chars[..self.cursor].iter().collect(),
            self.chars[self.cursor..].iter().collect(),
        )
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = find_word_boundary_backward(&self.chars, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = find_word_boundary_forward(&self.chars, self.cursor);
    }

    pub fn delete_word_backward(&mut self) {
        let start = find_word_boundary_backward(&self.chars, self.cursor);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn delete_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    pub fn delete_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Take the current text, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.chars).into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> TextInput {
        let mut input = TextInput::new();
        input.insert_str(text);
        input
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_word_boundary_backward_simple() {
        let text = chars("hello world");
        assert_eq!(find_word_boundary_backward(&text, 11), 6);
        assert_eq!(find_word_boundary_backward(&text, 6), 0);
        assert_eq!(find_word_boundary_backward(&text, 5), 0);
    }

    #[test]
    fn test_word_boundary_backward_multiple_spaces() {
        let text = chars("hello   world");
        assert_eq!(find_word_boundary_backward(&text, 13), 8);
        assert_eq!(find_word_boundary_backward(&text, 8), 0);
    }

    #[test]
    fn test_word_boundary_forward_simple() {
        let text = chars("hello world");
        assert_eq!(find_word_boundary_forward(&text, 0), 6);
        assert_eq!(find_word_boundary_forward(&text, 6), 11);
        assert_eq!(find_word_boundary_forward(&text, 11), 11);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut text = input("one two three");
        text.delete_word_backward();
        assert_eq!(text.value(), "one two ");
        assert_eq!(text.cursor(), 8);
        text.delete_word_backward();
        assert_eq!(text.value(), "one ");
        assert_eq!(text.cursor(), 4);
    }

    #[test]
    fn test_delete_to_end_and_start() {
        let mut text = input("hello world");
        text.move_home();
        text.move_word_right();
        text.delete_to_end();
        assert_eq!(text.value(), "hello ");

        let mut text = input("hello world");
        text.move_home();
        text.move_word_right();
        text.delete_to_start();
        assert_eq!(text.value(), "world");
        assert_eq!(text.cursor(), 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut text = input("ok 😔 go");
        assert_eq!(text.cursor(), 7);
        text.move_left();
        text.move_left();
        text.move_left();
        text.backspace();
        assert_eq!(text.value(), "ok  go");

        let (before, after) = text.split_at_cursor();
        assert_eq!(before, "ok ");
        assert_eq!(after, " go");
    }

    #[test]
    fn test_take_and_blank() {
        let mut text = input("   ");
        assert!(text.is_blank());
        text.insert('x');
        assert!(!text.is_blank());
        assert_eq!(text.take(), "   x");
        assert_eq!(text.value(), "");
        assert_eq!(text.cursor(), 0);
    }

    #[test]
    fn test_empty_input() {
        let mut text = TextInput::new();
        text.backspace();
        text.delete();
        text.move_left();
        text.delete_word_backward();
        assert_eq!(text.value(), "");
        assert_eq!(text.cursor(), 0);
    }
}
