mod tests_boundary;

use crate::base::{SourceLocation, TextSize};
use crate::model::ShapeId;
use crate::text::PositionTranslator;

pub(super) const FILE: &str = "main.smithy";

pub(super) fn id(s: &str) -> ShapeId {
    s.parse().unwrap()
}

/// Location of the `n`th occurrence of `needle` in `text`.
pub(super) fn nth(text: &str, needle: &str, n: usize) -> SourceLocation {
    let (offset, _) = text
        .match_indices(needle)
        .nth(n)
        .unwrap_or_else(|| panic!("`{needle}` occurs fewer than {} times", n + 1));
    let (line, column) = PositionTranslator::new(text)
        .line_col(TextSize::try_from(offset).unwrap())
        .unwrap();
    SourceLocation::new(FILE, line, column)
}

/// Location of the first occurrence of `needle` in `text`.
pub(super) fn at(text: &str, needle: &str) -> SourceLocation {
    nth(text, needle, 0)
}
