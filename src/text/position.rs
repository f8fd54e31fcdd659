use super::TextError;
use crate::base::{SourceLocation, TextSize};

/// Walk `text` yielding `(byte_offset, line, column)` for every char.
///
/// Lines and columns are 1-based; `\n` belongs to the line it ends.
pub(crate) fn positions(text: &str) -> impl Iterator<Item = (usize, u32, u32)> + '_ {
    let mut line = 1u32;
    let mut column = 1u32;
    text.char_indices().map(move |(offset, c)| {
        let here = (offset, line, column);
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
        here
    })
}

/// Converts source locations to byte offsets in a text buffer and back.
///
/// The translator borrows the buffer's *current* text, so a translator must
/// be rebuilt after every edit.
#[derive(Debug, Clone, Copy)]
pub struct PositionTranslator<'a> {
    text: &'a str,
}

impl<'a> PositionTranslator<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Byte offset of the char at `line`/`column`.
    ///
    /// Fails with [`TextError::PositionNotFound`] when the text ends before
    /// the position is reached, which means the model and the text are out
    /// of sync.
    pub fn offset(&self, line: u32, column: u32) -> Result<TextSize, TextError> {
        positions(self.text)
            .find(|&(_, l, c)| l == line && c == column)
            .map(|(offset, _, _)| to_text_size(offset))
            .ok_or(TextError::PositionNotFound { line, column })
    }

    /// Byte offset of the char a source location points at.
    pub fn offset_of(&self, location: &SourceLocation) -> Result<TextSize, TextError> {
        self.offset(location.line(), location.column())
    }

    /// `(line, column)` of a byte offset. The end of the text is a valid
    /// position; offsets inside a multi-byte char or past the end are not.
    pub fn line_col(&self, offset: TextSize) -> Option<(u32, u32)> {
        let target = usize::from(offset);
        let mut end = (1, 1);
        for (at, line, column) in positions(self.text) {
            if at == target {
                return Some((line, column));
            }
            if at > target {
                return None;
            }
            let c = self.text[at..].chars().next()?;
            end = if c == '\n' {
                (line + 1, 1)
            } else {
                (line, column + 1)
            };
        }
        (target == self.text.len()).then_some(end)
    }
}

/// Offsets are bounded by the buffer length; model files never approach 4 GiB.
pub(crate) fn to_text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}
