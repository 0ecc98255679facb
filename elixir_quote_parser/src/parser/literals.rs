//! Literal parsing: whole numbers and atoms

use crate::cst::CstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse `123` / `1_000` as a decimal whole number with one valid digit run
    pub(crate) fn parse_decimal_whole_number(&mut self) -> ParseResult<CstNode> {
        let token = self.bump("decimal number")?;
        let digits = CstNode::with_children(
            NodeKind::DecimalDigits,
            token.span,
            vec![CstNode::leaf(NodeKind::ValidDigits, token.span, token.text)],
        );
        Ok(CstNode::with_children(
            NodeKind::DecimalWholeNumber,
            token.span,
            vec![digits],
        ))
    }

    /// Parse `0b…`, `0o…` or `0x…`
    ///
    /// The alphanumeric run after the prefix is split into maximal runs of
    /// digits that are valid or invalid in the base, so `0b1021` yields
    /// `[valid "10", invalid "2", valid "1"]` and a bare `0x` yields no runs.
    pub(crate) fn parse_prefixed_whole_number(&mut self) -> ParseResult<CstNode> {
        let prefix = self.opener("number")?;
        let (kind, base) = match prefix.token {
            Token::BinaryPrefix => (NodeKind::BinaryWholeNumber, 2),
            Token::OctalPrefix => (NodeKind::OctalWholeNumber, 8),
            Token::HexadecimalPrefix => (NodeKind::HexadecimalWholeNumber, 16),
            _ => return Err(ParseError::unexpected_token(prefix.text, "number", prefix.span)),
        };
        let digits_kind = kind.digits_kind().unwrap_or(NodeKind::DecimalDigits);

        let bytes = &self.source.as_bytes()[..self.end];
        let is_run_byte = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
        let in_base = |b: u8| (b as char).is_digit(base);

        let mut children = vec![CstNode::leaf(NodeKind::BasePrefix, prefix.span, prefix.text)];
        let mut pos = prefix.span.end;
        while pos < bytes.len() && is_run_byte(bytes[pos]) {
            let run_start = pos;
            let valid = in_base(bytes[pos]);
            pos += 1;
            // Underscores join whichever run they appear in
            while pos < bytes.len()
                && is_run_byte(bytes[pos])
                && (bytes[pos] == b'_' || in_base(bytes[pos]) == valid)
            {
                pos += 1;
            }

            let span = self.span(run_start, pos);
            let text = &self.source[run_start..pos];
            let run_kind = if valid {
                NodeKind::ValidDigits
            } else {
                NodeKind::InvalidDigits
            };
            children.push(CstNode::with_children(
                digits_kind,
                span,
                vec![CstNode::leaf(run_kind, span, text)],
            ));
        }

        self.resume_at(pos);
        Ok(CstNode::with_children(kind, self.span(prefix.span.start, pos), children))
    }

    /// Parse a bare atom `:foo` into `Atom[AtomFragment]`
    pub(crate) fn parse_atom(&mut self) -> ParseResult<CstNode> {
        let token = self.bump("atom")?;
        let fragment_span = self.span(token.span.start + 1, token.span.end);
        let fragment = CstNode::leaf(NodeKind::AtomFragment, fragment_span, &token.text[1..]);
        Ok(CstNode::with_children(NodeKind::Atom, token.span, vec![fragment]))
    }

    /// Parse `:"…"` / `:'…'` into `Atom[String]` / `Atom[CharList]`
    pub(crate) fn parse_quoted_atom(&mut self) -> ParseResult<CstNode> {
        let open = self.opener("atom")?;
        let kind = if open.token == Token::AtomDoubleQuote {
            NodeKind::String
        } else {
            NodeKind::CharList
        };

        let quote = self.parse_quote_body(kind, open.span.start + 1, open.span.end)?;
        let span = self.span(open.span.start, quote.span.end);
        Ok(CstNode::with_children(NodeKind::Atom, span, vec![quote]))
    }
}
