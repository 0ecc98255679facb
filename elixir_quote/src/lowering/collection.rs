//! Lists, tuples and calls

use elixir_quote_parser::{CstNode, NodeKind};

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::alias::quote_alias;
use super::atom::quote_atom;
use super::{node_text, required_child, Quoter};

pub(crate) fn quote_list(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    Ok(Term::list(quoter.quote_statements(node)?))
}

/// Pairs are literal tuples; every other arity is `{:{}, meta, elements}`
pub(crate) fn quote_tuple(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let elements = quoter.quote_statements(node)?;
    if elements.len() == 2 {
        return Ok(Term::tuple(elements));
    }
    Ok(Term::tuple(vec![
        Term::atom("{}"),
        quoter.metadata(node),
        Term::list(elements),
    ]))
}

/// `foo(a)` as `{:foo, meta, [a]}`
///
/// Parentheses always produce an argument list, so `foo()` keeps `[]`
/// where the variable `foo` has `nil`.
pub(crate) fn quote_call(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let name = required_child(node, NodeKind::Identifier)?;
    let arguments = quote_arguments(quoter, node)?;
    Ok(Term::tuple(vec![
        Term::atom(node_text(name)?),
        quoter.metadata(name),
        Term::list(arguments),
    ]))
}

/// `Mod.fun(a)` as `{{:., meta, [Mod, :fun]}, meta, [a]}`
pub(crate) fn quote_remote_call(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let [qualifier, name, _] = node.children.as_slice() else {
        return Err(QuoteError::unsupported("malformed remote call", node.span));
    };
    let module = match qualifier.kind {
        NodeKind::Alias | NodeKind::QualifiedAlias => quote_alias(quoter, qualifier)?,
        NodeKind::Atom => quote_atom(quoter, qualifier)?,
        other => {
            return Err(QuoteError::unsupported(
                format!("{} as remote call qualifier", other),
                qualifier.span,
            ))
        }
    };
    Ok(Term::remote_call(
        module,
        node_text(name)?,
        quoter.metadata(name),
        quote_arguments(quoter, node)?,
    ))
}

fn quote_arguments(quoter: &Quoter<'_>, call: &CstNode) -> QuoteResult<Vec<Term>> {
    quoter.quote_statements(required_child(call, NodeKind::Arguments)?)
}
