//! Quoted bodies: strings and char lists
//!
//! A body is a flat run of literal text, escapes and interpolations. Text
//! and escapes accumulate as code points; each interpolation flushes the
//! accumulated literal and appends its own term. A body that never
//! interpolates stays a literal; one that does becomes `{:<<>>, meta, parts}`
//! and each surface decides how to wrap that binary construction.

use std::borrow::Cow;

use elixir_quote_parser::{CstNode, NodeKind};

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::code_points::{escaped_code_point, hexadecimal_code_point, CodePoints};
use super::interpolation::quote_interpolation;
use super::{node_text, required_child, Quoter};

/// One element of a body, borrowed from the tree or synthesized
#[derive(Debug, Clone)]
pub(crate) enum BodyPart<'n> {
    Text(Cow<'n, str>),
    Escape(&'n CstNode),
    HexEscape(&'n CstNode),
    Interpolation(&'n CstNode),
}

impl<'n> BodyPart<'n> {
    pub(crate) fn from_node(node: &'n CstNode) -> QuoteResult<Self> {
        match node.kind {
            kind if kind.is_fragment() => Ok(BodyPart::Text(Cow::Borrowed(node_text(node)?))),
            NodeKind::EscapedCharacter => Ok(BodyPart::Escape(node)),
            NodeKind::HexadecimalEscapeSequence => Ok(BodyPart::HexEscape(node)),
            NodeKind::Interpolation => Ok(BodyPart::Interpolation(node)),
            other => Err(QuoteError::unsupported(
                format!("{} in a quoted body", other),
                node.span,
            )),
        }
    }
}

/// How escape nodes contribute to the accumulated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Escapes {
    /// Strings and char lists: decode to the escaped code point
    Decode,
    /// Sigils: keep the source text, except `\#` which becomes `#`
    Verbatim,
}

/// Result of walking a body
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QuotedBody {
    /// No parts at all
    Empty,
    /// No interpolation: the whole body is known text
    Literal(CodePoints),
    /// `{:<<>>, meta, parts}` built around one or more interpolations
    Interpolated(Term),
}

/// Parts of an `InterpolatedBody` node
pub(crate) fn body_parts(body: &CstNode) -> QuoteResult<Vec<BodyPart<'_>>> {
    body.children.iter().map(BodyPart::from_node).collect()
}

/// Walk `parts`, attaching `anchor`'s metadata to the binary construction
pub(crate) fn quote_body(
    quoter: &Quoter<'_>,
    parts: Vec<BodyPart<'_>>,
    escapes: Escapes,
    anchor: &CstNode,
) -> QuoteResult<QuotedBody> {
    if parts.is_empty() {
        return Ok(QuotedBody::Empty);
    }

    let mut elements = Vec::new();
    let mut literal: Option<CodePoints> = None;
    for part in parts {
        match part {
            BodyPart::Text(text) => literal.get_or_insert_with(CodePoints::default).push_str(&text),
            BodyPart::Escape(escape) => {
                push_escape(literal.get_or_insert_with(CodePoints::default), escape, escapes)?
            }
            BodyPart::HexEscape(escape) => {
                push_hex_escape(literal.get_or_insert_with(CodePoints::default), escape, escapes)?
            }
            BodyPart::Interpolation(interpolation) => {
                if let Some(flushed) = literal.take() {
                    elements.push(flushed.into_binary(anchor.span)?);
                }
                elements.push(quote_interpolation(quoter, interpolation)?);
            }
        }
    }

    match literal {
        Some(code_points) if elements.is_empty() => Ok(QuotedBody::Literal(code_points)),
        remainder => {
            if let Some(code_points) = remainder {
                elements.push(code_points.into_binary(anchor.span)?);
            }
            Ok(QuotedBody::Interpolated(Term::call(
                Term::atom("<<>>"),
                quoter.metadata(anchor),
                elements,
            )))
        }
    }
}

fn push_escape(literal: &mut CodePoints, escape: &CstNode, escapes: Escapes) -> QuoteResult<()> {
    let text = node_text(escape)?;
    match escapes {
        Escapes::Decode => {
            let code_point = escaped_code_point(text)
                .ok_or_else(|| QuoteError::malformed_escape(text, escape.span))?;
            literal.push(code_point);
        }
        Escapes::Verbatim if text == "\\#" => literal.push(u32::from('#')),
        Escapes::Verbatim => literal.push_str(text),
    }
    Ok(())
}

fn push_hex_escape(literal: &mut CodePoints, escape: &CstNode, escapes: Escapes) -> QuoteResult<()> {
    let text = node_text(escape)?;
    match escapes {
        Escapes::Decode => {
            let code_point = hexadecimal_code_point(escape)
                .ok_or_else(|| QuoteError::malformed_escape(text, escape.span))?;
            literal.push(code_point);
        }
        Escapes::Verbatim => literal.push_str(text),
    }
    Ok(())
}

/// Binary for a string-like body: `""` when empty
pub(crate) fn string_term(quoted: QuotedBody, anchor: &CstNode) -> QuoteResult<Term> {
    match quoted {
        QuotedBody::Empty => Ok(Term::binary("")),
        QuotedBody::Literal(code_points) => code_points.into_binary(anchor.span),
        QuotedBody::Interpolated(binary) => Ok(binary),
    }
}

/// Char list for a char-list body: `[]` when empty, and an interpolated
/// body is converted from its binary at runtime.
pub(crate) fn charlist_term(
    quoter: &Quoter<'_>,
    quoted: QuotedBody,
    anchor: &CstNode,
) -> QuoteResult<Term> {
    match quoted {
        QuotedBody::Empty => Ok(Term::list(vec![])),
        QuotedBody::Literal(code_points) => code_points.into_charlist(anchor.span),
        QuotedBody::Interpolated(binary) => {
            let conversion = &quoter.options().charlist_conversion;
            Ok(Term::remote_call(
                Term::atom(conversion.module.as_str()),
                &conversion.function,
                quoter.metadata(anchor),
                vec![binary],
            ))
        }
    }
}

/// `"..."`
pub(crate) fn quote_string(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let body = required_child(node, NodeKind::InterpolatedBody)?;
    let quoted = quote_body(quoter, body_parts(body)?, Escapes::Decode, body)?;
    string_term(quoted, body)
}

/// `'...'`
pub(crate) fn quote_charlist(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let body = required_child(node, NodeKind::InterpolatedBody)?;
    let quoted = quote_body(quoter, body_parts(body)?, Escapes::Decode, body)?;
    charlist_term(quoter, quoted, body)
}
