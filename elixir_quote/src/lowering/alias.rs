use elixir_quote_parser::{CstNode, NodeKind};

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::{node_text, Quoter};

/// `Foo.Bar` as `{:__aliases__, [counter: 0, line: L], [:Foo, :Bar]}`
pub(crate) fn quote_alias(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let mut segments = Vec::new();
    push_segments(node, &mut segments)?;
    Ok(Term::call(
        Term::atom("__aliases__"),
        quoter.alias_metadata(node),
        segments,
    ))
}

fn push_segments(node: &CstNode, segments: &mut Vec<Term>) -> QuoteResult<()> {
    match (node.kind, node.children.as_slice()) {
        (NodeKind::Alias, _) => {
            segments.push(Term::atom(node_text(node)?));
            Ok(())
        }
        (NodeKind::QualifiedAlias, [qualifier, name]) => {
            push_segments(qualifier, segments)?;
            push_segments(name, segments)
        }
        (kind, _) => Err(QuoteError::unsupported(
            format!("{} as alias qualifier", kind),
            node.span,
        )),
    }
}
