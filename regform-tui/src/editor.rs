//! Single-line text editing state for one form field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Text changed; the caller revalidates the field.
    Edited,
    /// Cursor moved or the key was consumed without changing text.
    Handled,
    /// Not an editing key; the caller decides what it means.
    Ignored,
}

/// Text plus a char-indexed cursor. The cursor sits between characters,
/// from 0 to `chars().count()` inclusive.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditAction {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.insert(c);
                EditAction::Edited
            }
            KeyCode::Backspace => {
                if self.delete_back() {
                    EditAction::Edited
                } else {
                    EditAction::Handled
                }
            }
            KeyCode::Delete => {
                if self.delete_forward() {
                    EditAction::Edited
                } else {
                    EditAction::Handled
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditAction::Handled
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                EditAction::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                EditAction::Handled
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                EditAction::Handled
            }
            _ => EditAction::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_at(self.cursor - 1);
        let end = self.byte_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = self.byte_at(self.cursor);
        let end = self.byte_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(editor: &mut LineEditor, code: KeyCode) -> EditAction {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(press(editor, KeyCode::Char(c)), EditAction::Edited);
        }
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ac");
        press(&mut editor, KeyCode::Left);
        type_str(&mut editor, "b");
        assert_eq!(editor.text(), "abc");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "abcd");
        press(&mut editor, KeyCode::Backspace);
        assert_eq!(editor.text(), "abc");

        press(&mut editor, KeyCode::Home);
        press(&mut editor, KeyCode::Delete);
        assert_eq!(editor.text(), "bc");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_a_noop() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "x");
        press(&mut editor, KeyCode::Home);
        assert_eq!(press(&mut editor, KeyCode::Backspace), EditAction::Handled);
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn test_cursor_is_char_indexed_for_multibyte_text() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "aéb");
        assert_eq!(editor.cursor(), 3);

        press(&mut editor, KeyCode::Left);
        press(&mut editor, KeyCode::Left);
        press(&mut editor, KeyCode::Delete);
        assert_eq!(editor.text(), "ab");
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let mut editor = LineEditor::new();
        let action = editor.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(action, EditAction::Ignored);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_end_and_right_clamp_to_length() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ab");
        press(&mut editor, KeyCode::Right);
        assert_eq!(editor.cursor(), 2);
        press(&mut editor, KeyCode::Home);
        press(&mut editor, KeyCode::End);
        assert_eq!(editor.cursor(), 2);
    }
}
