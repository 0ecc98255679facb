//! Source → quoted term
//!
//! Elixir source → Parser → CST → Quoter → Term, the whole of
//! `Code.string_to_quoted/1` for the supported subset.

use elixir_quote_parser::{parse_with_errors, SourceMap};
use tracing::debug;

use crate::config::QuoteOptions;
use crate::error::{QuoteResult, SyntaxError};
use crate::lowering::Quoter;
use crate::term::Term;

/// Parse and quote `source` with default options
pub fn quote_source(source: &str) -> QuoteResult<Term> {
    quote_source_with_options(source, &QuoteOptions::default())
}

/// Parse and quote `source`
///
/// Any parse error fails the whole call; every recovered error is reported
/// in the [`SyntaxError`].
pub fn quote_source_with_options(source: &str, options: &QuoteOptions) -> QuoteResult<Term> {
    let (cst, errors) = parse_with_errors(source);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "parse failed");
        return Err(SyntaxError::from_parse_errors(&errors, source).into());
    }

    let source_map = SourceMap::new(source);
    Quoter::with_options(&source_map, options.clone()).quote_file(&cst)
}
