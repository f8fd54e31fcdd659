use std::ops::Range;

use super::TextError;
use super::position::PositionTranslator;
use crate::base::{SourceLocation, TextRange, TextSize};

/// Line terminator written by line-based edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// The terminator most lines of `text` end with (LF on a tie).
    pub fn detect(text: &str) -> Self {
        let newlines = text.matches('\n').count();
        let crlf = text.matches("\r\n").count();
        if crlf * 2 > newlines {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Mutable text of one model file.
///
/// A buffer is created from the file's content, edited in a single pass that
/// visits the file from the bottom up, and consumed by [`flush`](Self::flush).
/// Line operations re-derive line boundaries from the current content on
/// every call, so they never go stale; offsets and source locations do, and
/// callers must only use them for text above every edit made so far.
///
/// Existing lines keep their own terminators. Only lines added by
/// [`insert_line`](Self::insert_line) and the final terminator written by
/// [`flush`](Self::flush) use the buffer's [`LineEnding`].
#[derive(Debug, Clone)]
pub struct PatchBuffer {
    contents: String,
    line_ending: LineEnding,
}

impl PatchBuffer {
    /// Wrap `contents`, keeping whatever line terminator it already uses.
    pub fn new(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let line_ending = LineEnding::detect(&contents);
        Self {
            contents,
            line_ending,
        }
    }

    pub fn with_line_ending(contents: impl Into<String>, line_ending: LineEnding) -> Self {
        Self {
            contents: contents.into(),
            line_ending,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// Text of 1-based line `n`, without its terminator.
    pub fn line(&self, n: usize) -> Result<&str, TextError> {
        let lines = self.lines();
        let line_count = lines.len();
        n.checked_sub(1)
            .and_then(|index| lines.get(index))
            .map(|span| &self.contents[span.clone()])
            .ok_or(TextError::LineOutOfRange { line: n, line_count })
    }

    /// Insert `text` as a new line *before* existing line `n`.
    ///
    /// `n == line_count() + 1` appends after the last line.
    pub fn insert_line(&mut self, n: usize, text: &str) -> Result<(), TextError> {
        let lines = self.lines();
        if n == 0 || n > lines.len() + 1 {
            return Err(TextError::LineOutOfRange {
                line: n,
                line_count: lines.len(),
            });
        }
        let ending = self.line_ending.as_str();
        match lines.get(n - 1) {
            Some(line) => self.contents.insert_str(line.start, &format!("{text}{ending}")),
            None if self.contents.is_empty() => self.contents.push_str(text),
            None if self.contents.ends_with('\n') => {
                self.contents.push_str(text);
                self.contents.push_str(ending);
            }
            None => {
                self.contents.push_str(ending);
                self.contents.push_str(text);
            }
        }
        Ok(())
    }

    /// Remove line `n` together with its terminator.
    ///
    /// Removing an unterminated last line also removes the terminator in
    /// front of it.
    pub fn erase_line(&mut self, n: usize) -> Result<(), TextError> {
        let lines = self.lines();
        if n == 0 || n > lines.len() {
            return Err(TextError::LineOutOfRange {
                line: n,
                line_count: lines.len(),
            });
        }
        let line = &lines[n - 1];
        let (start, end) = match lines.get(n) {
            Some(next) => (line.start, next.start),
            None if self.contents.ends_with('\n') || n == 1 => (line.start, self.contents.len()),
            None => (lines[n - 2].end, self.contents.len()),
        };
        self.contents.replace_range(start..end, "");
        Ok(())
    }

    /// Remove the half-open byte range `range`.
    pub fn erase(&mut self, range: TextRange) -> Result<(), TextError> {
        self.replace(range, "")
    }

    /// Remove the text from `from` up to (not including) `to`.
    pub fn erase_between(
        &mut self,
        from: &SourceLocation,
        to: &SourceLocation,
    ) -> Result<(), TextError> {
        let translator = PositionTranslator::new(&self.contents);
        let start = translator.offset_of(from)?;
        let end = translator.offset_of(to)?;
        if end < start {
            return Err(TextError::RangeOutOfBounds {
                start: start.into(),
                end: end.into(),
                len: self.contents.len(),
            });
        }
        self.erase(TextRange::new(start, end))
    }

    /// Substitute the byte range `range` with `with`.
    pub fn replace(&mut self, range: TextRange, with: &str) -> Result<(), TextError> {
        let bytes = self.checked(range)?;
        tracing::trace!(?bytes, with, "patch buffer replace");
        self.contents.replace_range(bytes, with);
        Ok(())
    }

    /// Insert `text` at byte `offset`.
    pub fn insert(&mut self, offset: TextSize, text: &str) -> Result<(), TextError> {
        self.replace(TextRange::empty(offset), text)
    }

    /// Finish editing: the returned text ends with exactly one line terminator.
    pub fn flush(mut self) -> String {
        let kept = self.contents.trim_end_matches(['\r', '\n']).len();
        self.contents.truncate(kept);
        self.contents.push_str(self.line_ending.as_str());
        self.contents
    }

    fn checked(&self, range: TextRange) -> Result<Range<usize>, TextError> {
        let bytes = Range::<usize>::from(range);
        let valid = bytes.end <= self.contents.len()
            && self.contents.is_char_boundary(bytes.start)
            && self.contents.is_char_boundary(bytes.end);
        if valid {
            Ok(bytes)
        } else {
            Err(TextError::RangeOutOfBounds {
                start: bytes.start,
                end: bytes.end,
                len: self.contents.len(),
            })
        }
    }

    /// Byte range of each line, without its `\n` or `\r\n` terminator.
    fn lines(&self) -> Vec<Range<usize>> {
        let text = self.contents.as_str();
        let mut lines = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let (end, next) = match text[start..].find('\n') {
                Some(i) => (start + i, start + i + 1),
                None => (text.len(), text.len()),
            };
            let end = if next > end && text[start..end].ends_with('\r') {
                end - 1
            } else {
                end
            };
            lines.push(start..end);
            start = next;
        }
        lines
    }
}
