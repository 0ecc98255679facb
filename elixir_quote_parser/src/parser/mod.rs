//! Recursive descent parser for the Elixir subset
//!
//! Converts the token stream from the lexer into CST nodes. Quoted bodies are
//! split directly from the source bytes (see `strings`), and interpolations
//! are parsed by a nested parser restricted to the interpolation's range.

mod collections;
mod expressions;
mod literals;
mod strings;

use std::rc::Rc;

use tracing::trace;

use crate::cst::CstNode;
use crate::error::{ParseError, ParseErrors, ParseResult};
use crate::lexer::{Lexer, SpannedToken};
use crate::node_kind::NodeKind;
use crate::span::{SourceMap, Span};
use crate::token::Token;

/// Elixir parser
///
/// Parses Elixir source code into a Concrete Syntax Tree (CST).
pub struct Parser<'a> {
    /// Source code
    pub(crate) source: &'a str,
    /// Lexer
    pub(crate) lexer: Lexer<'a>,
    /// Source map for line/column calculation
    pub(crate) source_map: Rc<SourceMap>,
    /// Current token
    pub(crate) current: Option<SpannedToken<'a>>,
    /// Collected errors (for error recovery)
    pub(crate) errors: ParseErrors,
    /// Exclusive end of the range being parsed
    pub(crate) end: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str) -> Self {
        let source_map = Rc::new(SourceMap::new(source));
        Self::with_range(source, source_map, 0, source.len())
    }

    /// Parser over `source[start..end]` sharing an existing source map
    pub(crate) fn with_range(
        source: &'a str,
        source_map: Rc<SourceMap>,
        start: usize,
        end: usize,
    ) -> Self {
        let lexer = Lexer::with_range(source, Rc::clone(&source_map), start, end);
        Self {
            source,
            lexer,
            source_map,
            current: None,
            errors: ParseErrors::new(),
            end,
        }
    }

    /// Parse the source and return a File CST node
    pub fn parse(mut self) -> (CstNode, ParseErrors) {
        // Prime the parser with first token
        self.advance();

        let children = self.parse_statements(None);
        let span = self.source_map.span(0, self.source.len());
        let root = CstNode::with_children(NodeKind::File, span, children);

        (root, self.errors)
    }

    // ==================== Token Management ====================

    /// Advance to the next token
    pub(crate) fn advance(&mut self) -> Option<SpannedToken<'a>> {
        let prev = self.current.take();
        loop {
            match self.lexer.next_token() {
                Some(Ok(token)) => {
                    self.current = Some(token);
                    break;
                }
                Some(Err(e)) => {
                    self.errors.push(e);
                    continue;
                }
                None => {
                    self.current = None;
                    break;
                }
            }
        }
        prev
    }

    /// Consume the current token, failing at end of input
    pub(crate) fn bump(&mut self, expected: &str) -> ParseResult<SpannedToken<'a>> {
        let span = self.current_span();
        self.advance()
            .ok_or_else(|| ParseError::unexpected_eof(expected, span))
    }

    /// The current token, left in place for a scanner that resumes lexing itself
    pub(crate) fn opener(&self, expected: &str) -> ParseResult<SpannedToken<'a>> {
        self.current
            .clone()
            .ok_or_else(|| ParseError::unexpected_eof(expected, self.current_span()))
    }

    /// Continue lexing at `pos`, after a literal scanned from the source bytes
    pub(crate) fn resume_at(&mut self, pos: usize) {
        self.lexer.restart_from(pos);
        self.current = None;
        self.advance();
    }

    /// Check if current token matches
    pub(crate) fn check(&self, expected: &Token) -> bool {
        self.current
            .as_ref()
            .map(|t| &t.token == expected)
            .unwrap_or(false)
    }

    /// Consume current token if it matches, return error otherwise
    pub(crate) fn expect(&mut self, expected: Token, description: &str) -> ParseResult<SpannedToken<'a>> {
        if self.check(&expected) {
            return self.bump(description);
        }
        let span = self.current_span();
        Err(match self.current.as_ref() {
            Some(token) => ParseError::unexpected_token(token.text, description, span),
            None => ParseError::unexpected_eof(description, span),
        })
    }

    /// Skip newlines and comments inside brackets and after binary operators
    pub(crate) fn skip_trivia(&mut self) {
        while self.current.as_ref().is_some_and(|t| t.token.is_trivia()) {
            self.advance();
        }
    }

    /// Get the span of the current token
    pub(crate) fn current_span(&self) -> Span {
        self.current
            .as_ref()
            .map(|t| t.span)
            .unwrap_or_else(|| self.source_map.span(self.end, self.end))
    }

    /// Span with line/column information for a byte range
    pub(crate) fn span(&self, start: usize, end: usize) -> Span {
        self.source_map.span(start, end)
    }

    /// Error recovery: skip tokens until the next statement boundary
    ///
    /// Stops before a newline or `;` (so the statement loop records it) and
    /// before `terminator`, which belongs to the enclosing construct.
    pub(crate) fn synchronize(&mut self, terminator: Option<&Token>) {
        while let Some(token) = self.current.as_ref() {
            if token.token.is_end_of_expression() || Some(&token.token) == terminator {
                return;
            }
            self.advance();
        }
    }

    // ==================== Statements ====================

    /// Parse statements until end of input or `terminator`
    ///
    /// Separators and comments are kept as `EndOfExpression` and `Comment`
    /// nodes. Errors are recorded and parsing resumes at the next statement.
    pub(crate) fn parse_statements(&mut self, terminator: Option<&Token>) -> Vec<CstNode> {
        let mut children = Vec::new();

        while let Some(token) = self.current.as_ref() {
            if Some(&token.token) == terminator {
                break;
            }

            let trivia = match token.token {
                Token::Newline | Token::Semicolon => Some(NodeKind::EndOfExpression),
                Token::Comment => Some(NodeKind::Comment),
                _ => None,
            };
            if let Some(kind) = trivia {
                if let Some(token) = self.advance() {
                    children.push(CstNode::leaf(kind, token.span, token.text));
                }
                continue;
            }

            let result = self
                .parse_expression()
                .and_then(|node| self.expect_end_of_expression(terminator).map(|_| node));
            match result {
                Ok(node) => children.push(node),
                Err(e) => {
                    trace!(error = %e, "recovering at next statement");
                    self.errors.push(e);
                    self.synchronize(terminator);
                }
            }
        }

        children
    }

    fn expect_end_of_expression(&self, terminator: Option<&Token>) -> ParseResult<()> {
        match self.current.as_ref() {
            None => Ok(()),
            Some(token)
                if token.token.is_end_of_expression()
                    || token.token == Token::Comment
                    || Some(&token.token) == terminator =>
            {
                Ok(())
            }
            Some(token) => Err(ParseError::unexpected_token(
                token.text,
                "end of expression",
                token.span,
            )),
        }
    }
}

/// Parse Elixir source code into a CST
pub fn parse(source: &str) -> (CstNode, ParseErrors) {
    Parser::new(source).parse()
}
