//! Auto-incrementing labels for letter and number markers.

/// Starting value of the cursor.
pub const DEFAULT_LABEL: &str = "A";

/// Which sequence an advance follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// `A`, `B`, `C`, …
    Letter,
    /// `1`, `2`, `3`, …
    Number,
}

/// Next label to stamp. A single cursor is shared by both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCursor {
    text: String,
}

impl Default for LabelCursor {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl LabelCursor {
    /// Cursor starting at `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Label the next placement will receive.
    pub fn current(&self) -> &str {
        &self.text
    }

    /// Move past the label that was just stamped.
    ///
    /// Letters step through the alphabet and wrap from `Z` back to `A`.
    /// Numbers count up in decimal. A cursor that does not belong to the
    /// requested sequence restarts it at `A` or `1`.
    pub fn advance(&mut self, kind: LabelKind) {
        self.text = match kind {
            LabelKind::Letter => next_letter(&self.text),
            LabelKind::Number => next_number(&self.text),
        };
    }
}

fn next_letter(current: &str) -> String {
    let next = match current.chars().next() {
        Some('Z') => 'A',
        Some('z') => 'a',
        Some(ch) if ch.is_ascii_alphabetic() => char::from(ch as u8 + 1),
        _ => 'A',
    };
    next.to_string()
}

fn next_number(current: &str) -> String {
    match current.trim().parse::<u64>() {
        Ok(value) => value.saturating_add(1).to_string(),
        Err(_) => "1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(start: &str, kind: LabelKind, count: usize) -> (Vec<String>, String) {
        let mut cursor = LabelCursor::new(start);
        let mut stamped = Vec::new();
        for _ in 0..count {
            stamped.push(cursor.current().to_string());
            cursor.advance(kind);
        }
        (stamped, cursor.current().to_string())
    }

    #[test]
    fn letters_step_through_alphabet() {
        let (stamped, next) = sequence("A", LabelKind::Letter, 5);
        assert_eq!(stamped, ["A", "B", "C", "D", "E"]);
        assert_eq!(next, "F");
    }

    #[test]
    fn numbers_count_in_decimal() {
        let (stamped, next) = sequence("1", LabelKind::Number, 3);
        assert_eq!(stamped, ["1", "2", "3"]);
        assert_eq!(next, "4");

        let mut cursor = LabelCursor::new("9");
        cursor.advance(LabelKind::Number);
        assert_eq!(cursor.current(), "10");
    }

    #[test]
    fn letters_wrap_after_z() {
        let mut cursor = LabelCursor::new("Z");
        cursor.advance(LabelKind::Letter);
        assert_eq!(cursor.current(), "A");

        let mut cursor = LabelCursor::new("z");
        cursor.advance(LabelKind::Letter);
        assert_eq!(cursor.current(), "a");
    }

    #[test]
    fn switching_sequence_restarts_it() {
        let mut cursor = LabelCursor::default();
        cursor.advance(LabelKind::Number);
        assert_eq!(cursor.current(), "1");
        cursor.advance(LabelKind::Letter);
        assert_eq!(cursor.current(), "A");
    }

    #[test]
    fn numbers_saturate() {
        let mut cursor = LabelCursor::new(u64::MAX.to_string());
        cursor.advance(LabelKind::Number);
        assert_eq!(cursor.current(), u64::MAX.to_string());
    }
}
