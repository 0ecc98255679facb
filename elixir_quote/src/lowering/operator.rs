use elixir_quote_parser::CstNode;

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::{node_text, Quoter};

/// `{op, meta, [operand]}`, located at the operator
pub(crate) fn quote_unary_operation(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let [operator, operand] = node.children.as_slice() else {
        return Err(QuoteError::unsupported("malformed unary operation", node.span));
    };
    Ok(Term::call(
        Term::atom(node_text(operator)?),
        quoter.metadata(operator),
        vec![quoter.quote(operand)?],
    ))
}

/// `{op, meta, [left, right]}`, located at the operator
pub(crate) fn quote_binary_operation(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let [left, operator, right] = node.children.as_slice() else {
        return Err(QuoteError::unsupported("malformed binary operation", node.span));
    };
    Ok(Term::call(
        Term::atom(node_text(operator)?),
        quoter.metadata(operator),
        vec![quoter.quote(left)?, quoter.quote(right)?],
    ))
}
