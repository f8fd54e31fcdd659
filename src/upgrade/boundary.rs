//! Text spans of trait applications.

use crate::base::constants::{DOC_COMMENT_PREFIX, TRAIT_SIGIL};
use crate::base::{SourceLocation, TextRange, TextSize};
use crate::model::Trait;
use crate::text::{PositionTranslator, TextError, is_shape_id_character, to_text_size};

/// Finds the `[start, end)` text of a trait written in front of a shape or
/// member.
///
/// A trait's recorded location is not where its text starts: for `@enum([..])`
/// the loader records the value node. The start is therefore found by
/// scanning backward to the `@`, and the end is the start of the next trait
/// written in front of the same owner (or the owner's declaration itself).
/// Comments and whitespace in between belong to the erased span.
#[derive(Debug, Clone, Copy)]
pub struct TraitBoundaryLocator<'a> {
    text: &'a str,
}

impl<'a> TraitBoundaryLocator<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Traits written in front of an owner declared at `owner`, in source order.
    ///
    /// Traits without a location, traits the loader synthesized at the
    /// owner's own location, and traits applied from elsewhere are excluded.
    pub fn inline_traits<'t>(owner: &SourceLocation, traits: &'t [Trait]) -> Vec<&'t Trait> {
        let mut inline: Vec<&Trait> = traits
            .iter()
            .filter(|t| is_inline(owner, t.location()))
            .collect();
        inline.sort_by_key(|t| t.location().line_col());
        inline
    }

    /// Span of `target` among `traits`, the full trait list of the owner
    /// declared at `owner`.
    ///
    /// Returns `Ok(None)` when `target` is not written in front of the
    /// owner and so has no span to erase.
    pub fn locate(
        &self,
        owner: &SourceLocation,
        traits: &[Trait],
        target: &Trait,
    ) -> Result<Option<TextRange>, TextError> {
        if !is_inline(owner, target.location()) {
            return Ok(None);
        }
        let translator = PositionTranslator::new(self.text);
        let start = self.trait_start(&translator, target)?;

        let next = Self::inline_traits(owner, traits)
            .into_iter()
            .find(|t| t.location().line_col() > target.location().line_col());
        let end = match next {
            Some(next) => self.trait_start(&translator, next)?,
            None => translator.offset_of(owner)?,
        };

        if end < start {
            return Err(TextError::RangeOutOfBounds {
                start: start.into(),
                end: end.into(),
                len: self.text.len(),
            });
        }
        tracing::trace!(trait_id = %target.id(), ?start, ?end, "trait span");
        Ok(Some(TextRange::new(start, end)))
    }

    /// Offset of the first char of a trait's text.
    fn trait_start(
        &self,
        translator: &PositionTranslator<'_>,
        t: &Trait,
    ) -> Result<TextSize, TextError> {
        let offset = translator.offset_of(t.location())?;
        let at = usize::from(offset);
        let rest = &self.text[at..];
        if rest.starts_with(TRAIT_SIGIL) || rest.starts_with(DOC_COMMENT_PREFIX) {
            return Ok(offset);
        }

        let line_start = self.text[..at].rfind('\n').map_or(0, |i| i + 1);
        let head = &self.text[line_start..at];
        if let Some(doc) = head.find(DOC_COMMENT_PREFIX)
            && head[..doc].trim().is_empty()
        {
            return Ok(to_text_size(line_start + doc));
        }

        // Walk back line by line over what may sit between the sigil and the
        // value: the trait name, `(`, whitespace, commas, and `//` comments.
        let mut end = at;
        loop {
            let line_start = self.text[..end].rfind('\n').map_or(0, |i| i + 1);
            let line = &self.text[line_start..end];
            let code = comment_start(line).map_or(line, |i| &line[..i]);
            let code = code.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '('));
            if code.is_empty() && line_start > 0 {
                end = line_start - 1;
                continue;
            }
            return code
                .trim_end_matches(is_shape_id_character)
                .strip_suffix(TRAIT_SIGIL)
                .map(|before| to_text_size(line_start + before.len()))
                .ok_or(TextError::SigilNotFound { offset: at });
        }
    }
}

/// Byte index of a `//` comment in `line`, ignoring `//` inside strings.
fn comment_start(line: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return Some(i),
            _ => {}
        }
    }
    None
}

fn is_inline(owner: &SourceLocation, location: &SourceLocation) -> bool {
    !location.is_none() && location.file() == owner.file() && location.line_col() < owner.line_col()
}
