/// Single-line text buffer behind the game's input field.
///
/// Every edit reports whether the value changed; only real changes are
/// forwarded to the session as input events.
#[derive(Clone, Debug, Default)]
pub struct LineInput {
    value: String,
}

impl LineInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the buffer with what the session holds (e.g. cleared after a
    /// completed word or a restart).
    pub fn sync(&mut self, value: &str) {
        if self.value != value {
            self.value.clear();
            self.value.push_str(value);
        }
    }

    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// Ctrl+W: drop trailing whitespace, then the word before it.
    pub fn delete_word(&mut self) -> bool {
        let before = self.value.len();
        let trimmed = self.value.trim_end().len();
        self.value.truncate(trimmed);
        let cut = self
            .value
            .rfind(char::is_whitespace)
            .map(|i| i + self.value[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        self.value.truncate(cut);
        self.value.len() != before
    }

    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineInput {
        let mut input = LineInput::default();
        for ch in s.chars() {
            input.insert(ch);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("fo");
        assert_eq!(input.value(), "fo");
        assert!(input.backspace());
        assert_eq!(input.value(), "f");
        assert!(input.backspace());
        assert!(!input.backspace());
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = LineInput::default();
        assert!(!input.insert('\n'));
        assert!(!input.insert('\t'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut input = typed("né");
        input.backspace();
        assert_eq!(input.value(), "n");
    }

    #[test]
    fn test_delete_word() {
        let mut input = typed("impl Trait  ");
        assert!(input.delete_word());
        assert_eq!(input.value(), "impl ");
        assert!(input.delete_word());
        assert_eq!(input.value(), "");
        assert!(!input.delete_word());
    }

    #[test]
    fn test_clear_reports_change() {
        let mut input = typed("x");
        assert!(input.clear());
        assert!(!input.clear());
    }

    #[test]
    fn test_sync() {
        let mut input = typed("for");
        input.sync("");
        assert_eq!(input.value(), "");
    }
}
