//! Source text fixtures and a locator that turns needles into locations.

use smithy_upgrade::text::PositionTranslator;
use smithy_upgrade::{SourceLocation, TextSize};

/// A file with nothing to change except its version.
pub const MINIMAL_V1: &str = "$version: \"1.0\"\n\nnamespace smithy.example\n\nstring Foo\n";

pub const MINIMAL_V2: &str = "$version: \"2.0\"\n\nnamespace smithy.example\n\nstring Foo\n";

/// Several independently editable shapes whose edits grow, shrink, and
/// move text, interleaved with comments that must survive.
pub const MIXED_V1: &str = r#"$version: "1.0"

namespace smithy.example

// Suits of a card deck.
@enum([
    {name: "DIAMOND", value: "diamond"},
    {name: "CLUB", value: "club"},
    {name: "HEART", value: "heart"},
    {name: "SPADE", value: "spade"},
])
string Suit

@box
integer Count // nullable

structure Card {
    suit: Suit,

    /// Face value.
    rank: PrimitiveInteger,

    @box
    weight: PrimitiveFloat,

    @required
    faceUp: PrimitiveBoolean,
}
"#;

pub const MIXED_V2: &str = r#"$version: "2.0"

namespace smithy.example

// Suits of a card deck.
enum Suit {
    DIAMOND = "diamond"
    CLUB = "club"
    HEART = "heart"
    SPADE = "spade"
}

integer Count // nullable

structure Card {
    suit: Suit,

    /// Face value.
    @default(0)
    rank: Integer,

    weight: Float,

    @required
    faceUp: Boolean,
}
"#;

/// Model file text together with the file name the model records for it.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub file: String,
    pub text: String,
}

impl Fixture {
    pub fn new(file: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            text: text.into(),
        }
    }

    /// Location of the first occurrence of `needle`.
    pub fn at(&self, needle: &str) -> SourceLocation {
        self.nth(needle, 0)
    }

    /// Location of the `n`th (0-based) occurrence of `needle`.
    pub fn nth(&self, needle: &str, n: usize) -> SourceLocation {
        let (offset, _) = self
            .text
            .match_indices(needle)
            .nth(n)
            .unwrap_or_else(|| panic!("`{needle}` occurs fewer than {} times", n + 1));
        let (line, column) = PositionTranslator::new(&self.text)
            .line_col(TextSize::try_from(offset).unwrap())
            .unwrap();
        SourceLocation::new(self.file.as_str(), line, column)
    }
}
