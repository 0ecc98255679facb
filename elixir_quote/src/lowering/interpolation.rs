use elixir_quote_parser::CstNode;

use crate::error::QuoteResult;
use crate::term::Term;

use super::{block, Quoter};

/// `#{expr}` as `{:"::", m, [Kernel.to_string(expr), {:binary, m, nil}]}`
pub(crate) fn quote_interpolation(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let contents = block(quoter.quote_statements(node)?);
    let metadata = quoter.metadata(node);
    let to_string = Term::remote_call(
        Term::atom("Elixir.Kernel"),
        "to_string",
        metadata.clone(),
        vec![contents],
    );
    let binary = Term::call(Term::atom("binary"), metadata.clone(), vec![]);
    Ok(Term::call(Term::atom("::"), metadata, vec![to_string, binary]))
}
