//! Sigils: `~r/abc/i` is `{:sigil_r, meta, [{:<<>>, meta, ["abc"]}, 'i']}`

use elixir_quote_parser::{CstNode, NodeKind};

use crate::error::QuoteResult;
use crate::term::Term;

use super::body::{body_parts, quote_body, Escapes, QuotedBody};
use super::heredoc::quote_heredoc_body;
use super::{node_text, required_child, Quoter};

/// `~x/.../mods`
pub(crate) fn quote_sigil(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let body = required_child(node, NodeKind::InterpolatedBody)?;
    let quoted = quote_body(quoter, body_parts(body)?, Escapes::Verbatim, body)?;
    sigil_call(quoter, node, quoted)
}

/// `~x"""..."""mods`
pub(crate) fn quote_sigil_heredoc(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let quoted = quote_heredoc_body(quoter, node, Escapes::Verbatim)?;
    sigil_call(quoter, node, quoted)
}

/// Modifier letters as a char list, `[]` when there are none
pub(crate) fn quote_modifiers(node: &CstNode) -> QuoteResult<Term> {
    let letters = node_text(node)?;
    Ok(Term::charlist(letters.chars().map(u32::from).collect()))
}

fn sigil_call(quoter: &Quoter<'_>, node: &CstNode, quoted: QuotedBody) -> QuoteResult<Term> {
    let name = node_text(required_child(node, NodeKind::SigilName)?)?;
    let metadata = quoter.metadata(node);

    // The body is always a binary construction, even without interpolation
    let binary = match quoted {
        QuotedBody::Interpolated(binary) => binary,
        QuotedBody::Empty => Term::call(Term::atom("<<>>"), metadata.clone(), vec![Term::binary("")]),
        QuotedBody::Literal(code_points) => Term::call(
            Term::atom("<<>>"),
            metadata.clone(),
            vec![code_points.into_binary(node.span)?],
        ),
    };
    let modifiers = match node.find_child(NodeKind::SigilModifiers) {
        Some(modifiers) => quote_modifiers(modifiers)?,
        None => Term::list(vec![]),
    };

    Ok(Term::call(
        Term::atom(format!("sigil_{}", name)),
        metadata,
        vec![binary, modifiers],
    ))
}
