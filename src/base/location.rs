/// Position of a model element's defining token in its source file.
///
/// Lines and columns are 1-based and count `char`s, matching what the model
/// loader records. A location is only meaningful against text identical to
/// the text the model was loaded from; once a buffer has been edited, every
/// location after the edit point is stale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceLocation {
    file: std::sync::Arc<str>,
    line: u32,
    column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<std::sync::Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The location of elements that have no source text (e.g. added by a transform).
    pub fn none() -> Self {
        Self::new("", 0, 0)
    }

    pub fn is_none(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.column == 0
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// `(line, column)` pair, for ordering locations within one file.
    pub fn line_col(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return f.write_str("<none>");
        }
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
