//! Knobs for how upgraded text is laid out.

use crate::text::LineEnding;

/// How an [`Upgrader`](super::Upgrader) writes the text it adds.
///
/// Only new text follows these settings; lines the upgrade leaves in place
/// keep their own layout.
#[derive(Debug, Clone)]
pub struct UpgradeOptions {
    /// Width of one member level inside a lowered `enum` block, in spaces
    pub tab_size: usize,
    /// Indent enum members with spaces; `false` writes one tab per level
    pub insert_spaces: bool,
    /// Rewrite every terminator to this one (`None` keeps the file's own)
    pub line_ending: Option<LineEnding>,
    /// Return files that already declare version 2 unchanged
    pub skip_upgraded: bool,
}

impl Default for UpgradeOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            line_ending: None,
            skip_upgraded: true,
        }
    }
}

impl UpgradeOptions {
    /// Leading whitespace for an enum member nested `depth` levels deep.
    pub fn indent(&self, depth: usize) -> String {
        let (unit, width) = match self.insert_spaces {
            true => (' ', self.tab_size),
            false => ('\t', 1),
        };
        std::iter::repeat_n(unit, width * depth).collect()
    }
}
