use std::str::Chars;

/// A location in the input. `line` and `column` are 1-based, `column` counts runes, and `offset`
/// is in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: i32,
    pub column: i32,
}

/// Peekable, forward-only iterator over the runes of the input.
///
/// Also tracks input position by line and column.
///
/// Design roughly inspired by the rustc lexer Cursor.
pub struct Cursor<'s> {
    input: &'s str,
    // An iterator over the unconsumed remainder of the input.
    chars: Chars<'s>,
    line: i32,
    column: i32,
}

impl<'s> Cursor<'s> {
    pub fn new(input: &'s str) -> Cursor<'s> {
        Cursor { input, chars: input.chars(), line: 1, column: 1 }
    }

    #[cfg(test)]
    pub(crate) fn starting_at(input: &'s str, line: i32, column: i32) -> Cursor<'s> {
        Cursor { input, chars: input.chars(), line, column }
    }

    /// The rune at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(c)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn offset(&self) -> usize {
        self.input.len() - self.chars.as_str().len()
    }

    pub fn position(&self) -> Position {
        Position { offset: self.offset(), line: self.line, column: self.column }
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'s str {
        self.chars.as_str()
    }

    pub fn current_line_text(&self) -> &'s str {
        self.line_text_at(self.offset())
    }

    /// The full text of the line containing byte `offset`, without its line terminator.
    pub fn line_text_at(&self, offset: usize) -> &'s str {
        let offset = offset.min(self.input.len());
        let start = self.input[..offset].rfind('\n').map_or(0, |i| i + 1);
        let end = self.input[offset..].find('\n').map_or(self.input.len(), |i| offset + i);
        let line = &self.input[start..end];
        line.strip_suffix('\r').unwrap_or(line)
    }
}
