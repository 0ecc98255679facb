//! Heredoc de-indentation
//!
//! The closing delimiter's indentation is removed from every line. Deeper
//! lines keep the difference as synthesized spaces, each line ends with a
//! synthesized newline, and adjacent text is coalesced before the body is
//! walked so that a heredoc without interpolation is a single literal.

use std::borrow::Cow;

use elixir_quote_parser::{CstNode, NodeKind};
use tracing::warn;

use crate::error::QuoteResult;
use crate::term::Term;

use super::body::{charlist_term, quote_body, string_term, BodyPart, Escapes, QuotedBody};
use super::{node_text, required_child, Quoter};

/// Body parts of every line of `heredoc`, de-indented and coalesced
pub(crate) fn heredoc_parts(heredoc: &CstNode) -> QuoteResult<Vec<BodyPart<'_>>> {
    let prefix_length = node_text(required_child(heredoc, NodeKind::HeredocPrefix)?)?.len();

    let mut parts = Vec::new();
    for line in heredoc.find_children(NodeKind::HeredocLine) {
        let indentation = match line.find_child(NodeKind::HeredocLinePrefix) {
            Some(prefix) => node_text(prefix)?.len(),
            None => 0,
        };
        let body = required_child(line, NodeKind::InterpolatedBody)?;

        match indentation.checked_sub(prefix_length) {
            Some(0) => {}
            Some(excess) => parts.push(BodyPart::Text(Cow::Owned(" ".repeat(excess)))),
            None if body.children.is_empty() => {}
            None => warn!(
                line = line.span.start_line,
                indentation,
                prefix_length,
                "heredoc line is outdented relative to its closing delimiter"
            ),
        }

        for child in &body.children {
            parts.push(BodyPart::from_node(child)?);
        }
        parts.push(BodyPart::Text(Cow::Borrowed("\n")));
    }

    Ok(coalesce_text(parts))
}

/// Merge adjacent text parts; escapes and interpolations stay separators
pub(crate) fn coalesce_text(parts: Vec<BodyPart<'_>>) -> Vec<BodyPart<'_>> {
    let mut merged: Vec<BodyPart<'_>> = Vec::with_capacity(parts.len());
    for part in parts {
        if let BodyPart::Text(text) = &part {
            if let Some(BodyPart::Text(previous)) = merged.last_mut() {
                previous.to_mut().push_str(text);
                continue;
            }
        }
        merged.push(part);
    }
    merged
}

/// Walk a heredoc's lines as one body anchored at the heredoc node
pub(crate) fn quote_heredoc_body(
    quoter: &Quoter<'_>,
    heredoc: &CstNode,
    escapes: Escapes,
) -> QuoteResult<QuotedBody> {
    quote_body(quoter, heredoc_parts(heredoc)?, escapes, heredoc)
}

/// `"""` heredoc
pub(crate) fn quote_string_heredoc(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let quoted = quote_heredoc_body(quoter, node, Escapes::Decode)?;
    string_term(quoted, node)
}

/// `'''` heredoc
pub(crate) fn quote_charlist_heredoc(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let quoted = quote_heredoc_body(quoter, node, Escapes::Decode)?;
    charlist_term(quoter, quoted, node)
}
