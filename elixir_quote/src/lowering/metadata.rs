//! Metadata keyword lists attached to call tuples

use elixir_quote_parser::CstNode;

use crate::term::Term;

use super::Quoter;

fn position(value: usize) -> Term {
    Term::integer(i64::try_from(value).unwrap_or(i64::MAX))
}

impl Quoter<'_> {
    /// `[line: L]`, plus `column: C` when columns are enabled
    pub(crate) fn metadata(&self, node: &CstNode) -> Term {
        Term::keyword(self.location(node.span.start))
    }

    /// `[counter: 0, line: L]`
    ///
    /// The counter is always 0: nothing quoted here comes from macro
    /// expansion.
    pub(crate) fn alias_metadata(&self, node: &CstNode) -> Term {
        let mut entries = vec![("counter", Term::integer(0))];
        entries.extend(self.location(node.span.start));
        Term::keyword(entries)
    }

    fn location(&self, offset: usize) -> Vec<(&'static str, Term)> {
        let mut entries = vec![("line", position(self.resolver.line_number(offset)))];
        if self.options.columns {
            entries.push(("column", position(self.resolver.column(offset))));
        }
        entries
    }
}
