//! Code-point accumulation and escape decoding

use elixir_quote_parser::{CstNode, NodeKind, Span};

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

/// Code point for the character after a backslash
///
/// Characters without a special meaning stand for themselves, so `\"`
/// is `"` and `\\` is `\`.
pub(crate) fn unescape(character: char) -> u32 {
    match character {
        '0' => 0x00,
        'a' => 0x07,
        'b' => 0x08,
        'd' => 0x7F,
        'e' => 0x1B,
        'f' => 0x0C,
        'n' => 0x0A,
        'r' => 0x0D,
        's' => 0x20,
        't' => 0x09,
        'v' => 0x0B,
        other => u32::from(other),
    }
}

/// Decode `\c` escape text
pub(crate) fn escaped_code_point(text: &str) -> Option<u32> {
    text.strip_prefix('\\')?.chars().next().map(unescape)
}

/// Decode a `\x..`/`\u..` escape node; `None` when the digits are missing
/// or do not fit a code point.
pub(crate) fn hexadecimal_code_point(escape: &CstNode) -> Option<u32> {
    let digits = escape
        .find_child(NodeKind::ValidHexadecimalDigits)?
        .text_str()?;
    u32::from_str_radix(digits, 16).ok()
}

/// Code points collected from a literal run of a quoted body
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CodePoints(Vec<u32>);

impl CodePoints {
    pub(crate) fn push(&mut self, code_point: u32) {
        self.0.push(code_point);
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.0.extend(text.chars().map(u32::from));
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// UTF-8 text; fails on surrogates and values past U+10FFFF
    pub(crate) fn into_string(self, span: Span) -> QuoteResult<String> {
        self.0
            .into_iter()
            .map(|code_point| {
                char::from_u32(code_point)
                    .ok_or(QuoteError::InvalidCodePoint { code_point, span })
            })
            .collect()
    }

    pub(crate) fn into_binary(self, span: Span) -> QuoteResult<Term> {
        Ok(Term::binary(self.into_string(span)?))
    }

    pub(crate) fn into_charlist(self, span: Span) -> QuoteResult<Term> {
        if let Some(&code_point) = self.0.iter().find(|&&c| char::from_u32(c).is_none()) {
            return Err(QuoteError::InvalidCodePoint { code_point, span });
        }
        Ok(Term::charlist(self.0))
    }
}
