//! Lowering from CST to quoted terms
//!
//! [`Quoter`] walks a tree top-down and builds each term bottom-up. Every
//! node kind has one arm in [`Quoter::quote`]; kinds that only occur as
//! parts of a larger construct (digit runs, fragments, operators, ...) are
//! rejected there and consumed by the construct that owns them.

mod alias;
mod atom;
mod body;
mod code_points;
mod collection;
mod heredoc;
mod interpolation;
mod metadata;
mod numeric;
mod operator;
mod sigil;


use std::fmt;

use elixir_quote_parser::{CstNode, NodeKind, SourceMap};
use tracing::debug;

use crate::config::QuoteOptions;
use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use alias::quote_alias;
use atom::{quote_atom, quote_atom_keyword};
use body::{quote_charlist, quote_string};
use collection::{quote_call, quote_list, quote_remote_call, quote_tuple};
use heredoc::{quote_charlist_heredoc, quote_string_heredoc};
use interpolation::quote_interpolation;
use numeric::{quote_char_token, quote_float, quote_whole_number};
use operator::{quote_binary_operation, quote_unary_operation};
use sigil::{quote_modifiers, quote_sigil, quote_sigil_heredoc};

/// Maps byte offsets to 1-indexed source positions for metadata
pub trait LineResolver {
    fn line_number(&self, offset: usize) -> usize;
    fn column(&self, offset: usize) -> usize;
}

impl LineResolver for SourceMap {
    fn line_number(&self, offset: usize) -> usize {
        SourceMap::line_number(self, offset)
    }

    fn column(&self, offset: usize) -> usize {
        self.line_col(offset).1
    }
}

/// Lowers CST nodes to the terms `Code.string_to_quoted/1` produces
pub struct Quoter<'r> {
    resolver: &'r dyn LineResolver,
    options: QuoteOptions,
}

impl fmt::Debug for Quoter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quoter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'r> Quoter<'r> {
    pub fn new(resolver: &'r dyn LineResolver) -> Self {
        Self::with_options(resolver, QuoteOptions::default())
    }

    pub fn with_options(resolver: &'r dyn LineResolver, options: QuoteOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &QuoteOptions {
        &self.options
    }

    /// Quote a `File` root: one statement is returned as is, anything else
    /// becomes a `__block__`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn quote_file(&self, root: &CstNode) -> QuoteResult<Term> {
        if root.kind != NodeKind::File {
            return Err(QuoteError::unsupported(
                format!("{} as file root", root.kind),
                root.span,
            ));
        }
        let statements = self.quote_statements(root)?;
        debug!(statements = statements.len(), "quoted file");
        Ok(block(statements))
    }

    /// Quote a single node
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %node.kind))]
    pub fn quote(&self, node: &CstNode) -> QuoteResult<Term> {
        match node.kind {
            NodeKind::File | NodeKind::Block => Ok(block(self.quote_statements(node)?)),

            NodeKind::DecimalWholeNumber
            | NodeKind::BinaryWholeNumber
            | NodeKind::OctalWholeNumber
            | NodeKind::HexadecimalWholeNumber => quote_whole_number(self, node),
            NodeKind::DecimalFloat => quote_float(node),
            NodeKind::CharToken => quote_char_token(node),

            NodeKind::Identifier => Ok(Term::call(
                Term::atom(node_text(node)?),
                self.metadata(node),
                vec![],
            )),
            NodeKind::Alias | NodeKind::QualifiedAlias => quote_alias(self, node),
            NodeKind::Atom => quote_atom(self, node),
            NodeKind::AtomKeyword => quote_atom_keyword(node),

            NodeKind::String => quote_string(self, node),
            NodeKind::CharList => quote_charlist(self, node),
            NodeKind::StringHeredoc => quote_string_heredoc(self, node),
            NodeKind::CharListHeredoc => quote_charlist_heredoc(self, node),
            NodeKind::Interpolation => quote_interpolation(self, node),
            NodeKind::Sigil => quote_sigil(self, node),
            NodeKind::SigilHeredoc => quote_sigil_heredoc(self, node),
            NodeKind::SigilModifiers => quote_modifiers(node),

            NodeKind::UnaryOperation => quote_unary_operation(self, node),
            NodeKind::BinaryOperation => quote_binary_operation(self, node),
            NodeKind::List => quote_list(self, node),
            NodeKind::Tuple => quote_tuple(self, node),
            NodeKind::Call => quote_call(self, node),
            NodeKind::RemoteCall => quote_remote_call(self, node),

            NodeKind::EndOfExpression
            | NodeKind::Comment
            | NodeKind::BasePrefix
            | NodeKind::DecimalDigits
            | NodeKind::BinaryDigits
            | NodeKind::OctalDigits
            | NodeKind::HexadecimalDigits
            | NodeKind::ValidDigits
            | NodeKind::InvalidDigits
            | NodeKind::AtomFragment
            | NodeKind::HeredocLine
            | NodeKind::HeredocLinePrefix
            | NodeKind::HeredocPrefix
            | NodeKind::InterpolatedBody
            | NodeKind::StringFragment
            | NodeKind::CharListFragment
            | NodeKind::SigilFragment
            | NodeKind::EscapedCharacter
            | NodeKind::HexadecimalEscapeSequence
            | NodeKind::ValidHexadecimalDigits
            | NodeKind::SigilName
            | NodeKind::Operator
            | NodeKind::Arguments
            | NodeKind::Unknown => Err(QuoteError::unsupported(
                format!("standalone {}", node.kind),
                node.span,
            )),
        }
    }

    /// Quote every non-trivia child in source order
    pub(crate) fn quote_statements(&self, node: &CstNode) -> QuoteResult<Vec<Term>> {
        node.significant_children()
            .map(|statement| self.quote(statement))
            .collect()
    }
}

/// `{:__block__, [], statements}` unless there is exactly one statement
pub(crate) fn block(statements: Vec<Term>) -> Term {
    match <[Term; 1]>::try_from(statements) {
        Ok([statement]) => statement,
        Err(statements) => Term::tuple(vec![
            Term::atom("__block__"),
            Term::list(vec![]),
            Term::list(statements),
        ]),
    }
}

/// Text of a leaf node
pub(crate) fn node_text(node: &CstNode) -> QuoteResult<&str> {
    node.text_str()
        .ok_or_else(|| QuoteError::unsupported(format!("{} without text", node.kind), node.span))
}

/// First child of `kind`, which the tree shape guarantees
pub(crate) fn required_child(node: &CstNode, kind: NodeKind) -> QuoteResult<&CstNode> {
    node.find_child(kind).ok_or_else(|| {
        QuoteError::unsupported(format!("{} without {}", node.kind, kind), node.span)
    })
}
