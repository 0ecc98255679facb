//! Atoms: `:foo`, `:"foo bar"`, `:'foo'`, `true`/`false`/`nil`
//!
//! A quoted atom whose body interpolates has no name until runtime, so it
//! becomes a `:erlang.binary_to_atom(binary, :utf8)` call instead.

use elixir_quote_parser::{CstNode, NodeKind};

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::body::{body_parts, quote_body, Escapes, QuotedBody};
use super::{node_text, required_child, Quoter};

pub(crate) fn quote_atom(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    if let Some(fragment) = node
        .children
        .iter()
        .rev()
        .find(|child| child.kind == NodeKind::AtomFragment)
    {
        return Ok(Term::atom(node_text(fragment)?));
    }

    let quote = node
        .children
        .iter()
        .find(|child| matches!(child.kind, NodeKind::String | NodeKind::CharList))
        .ok_or_else(|| QuoteError::unsupported("atom without a name", node.span))?;
    let body = required_child(quote, NodeKind::InterpolatedBody)?;

    match quote_body(quoter, body_parts(body)?, Escapes::Decode, body)? {
        QuotedBody::Empty => Ok(Term::atom("")),
        QuotedBody::Literal(code_points) => Ok(Term::atom(code_points.into_string(body.span)?)),
        QuotedBody::Interpolated(binary) => Ok(Term::remote_call(
            Term::atom("erlang"),
            "binary_to_atom",
            quoter.metadata(quote),
            vec![binary, Term::atom("utf8")],
        )),
    }
}

pub(crate) fn quote_atom_keyword(node: &CstNode) -> QuoteResult<Term> {
    Ok(Term::atom(node_text(node)?))
}
