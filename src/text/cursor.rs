use super::TextError;
use super::position::{PositionTranslator, to_text_size};
use crate::base::{SourceLocation, TextSize};

/// Check if a character can appear in a written shape ID.
///
/// Covers relative names (`Integer`), absolute IDs (`smithy.api#Integer`),
/// and member references (`Foo$bar`).
#[inline]
pub fn is_shape_id_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '#' | '$')
}

/// A rewindable scanner over IDL text.
///
/// The cursor tracks its line and column as it advances so that it can be
/// positioned at a model [`SourceLocation`] and then walked forward over
/// insignificant text (whitespace, commas, and `//` comments) to find the
/// boundaries of the token an edit should touch.
#[derive(Debug, Clone)]
pub struct IdlCursor<'a> {
    text: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> IdlCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move back to the start of the text.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.line = 1;
        self.column = 1;
    }

    /// Position the cursor on the char a source location points at.
    ///
    /// Re-walks the text from the start; fails with
    /// [`TextError::PositionNotFound`] if the end of the text is reached
    /// first.
    pub fn rewind(&mut self, location: &SourceLocation) -> Result<(), TextError> {
        let offset = PositionTranslator::new(self.text).offset_of(location)?;
        self.offset = usize::from(offset);
        self.line = location.line();
        self.column = location.column();
        Ok(())
    }

    /// Current byte offset.
    pub fn position(&self) -> TextSize {
        to_text_size(self.offset)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// Look `n` chars ahead without moving (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.text[self.offset..].chars().nth(n)
    }

    /// Advance one char, keeping line and column in step.
    pub fn skip(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Skip spaces, tabs, line breaks, commas, and `//` comments.
    pub fn ws(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '/' if self.peek_nth(1) == Some('/') => self.consume_rest_of_line(),
                ' ' | '\t' | '\r' | '\n' | ',' => self.skip(),
                _ => return,
            }
        }
    }

    /// Advance while `predicate` holds and return the text passed over.
    pub fn consume_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.skip();
        }
        &self.text[start..self.offset]
    }

    /// Advance to the line break ending the current line (not past it).
    pub fn consume_rest_of_line(&mut self) {
        self.consume_while(|c| c != '\n');
    }
}
