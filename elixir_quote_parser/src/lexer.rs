//! Lexer for Elixir source code
//!
//! Wraps the logos-generated lexer. Quoted literals are stepped over as a
//! whole: the opener token is returned and lexing resumes after the closing
//! delimiter, so text inside a string never turns into tokens.

use std::rc::Rc;

use logos::Logos;

use crate::error::ParseError;
use crate::scan::{self, LiteralError};
use crate::span::{SourceMap, Span};
use crate::token::Token;

/// A token with its span
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> SpannedToken<'a> {
    pub fn new(token: Token, span: Span, text: &'a str) -> Self {
        Self { token, span, text }
    }
}

/// Elixir lexer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    source_map: Rc<SourceMap>,
    /// Peeked token (for lookahead)
    peeked: Option<Result<SpannedToken<'a>, ParseError>>,
    /// Offset of `inner`'s input within `source`
    offset: usize,
    /// Exclusive end of the lexed range
    end: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self::with_range(source, Rc::new(SourceMap::new(source)), 0, source.len())
    }

    /// Lex only `source[start..end]`, reporting spans relative to the whole source
    pub fn with_range(source: &'a str, source_map: Rc<SourceMap>, start: usize, end: usize) -> Self {
        Self {
            source,
            inner: Token::lexer(&source[start..end]),
            source_map,
            peeked: None,
            offset: start,
            end,
        }
    }

    /// Get the source code
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the source map
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    fn make_span(&self, start: usize, end: usize) -> Span {
        self.source_map.span(start, end)
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Option<&Result<SpannedToken<'a>, ParseError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_token_internal();
        }
        self.peeked.as_ref()
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Result<SpannedToken<'a>, ParseError>> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_token_internal()
    }

    fn next_token_internal(&mut self) -> Option<Result<SpannedToken<'a>, ParseError>> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let start = self.offset + span.start;
        let mut end = self.offset + span.end;

        match result {
            Ok(mut token) => {
                let bytes = &self.source.as_bytes()[..self.end];
                if token == Token::DecimalLiteral {
                    if let Some(float_end) = scan::float_end(bytes, end) {
                        self.inner.bump(float_end - end);
                        token = Token::FloatLiteral;
                        end = float_end;
                    }
                }
                let text = &self.source[start..end];
                match scan::literal_end(bytes, &token, text, end) {
                    Ok(None) => {}
                    Ok(Some(literal_end)) => self.restart_from(literal_end),
                    Err(error) => {
                        // Nothing after a broken literal can be trusted
                        self.restart_from(self.end);
                        return Some(Err(self.literal_error(error, start, end)));
                    }
                }
                Some(Ok(SpannedToken::new(token, self.make_span(start, end), text)))
            }
            Err(()) => Some(Err(ParseError::LexerError {
                span: self.make_span(start, end),
            })),
        }
    }

    fn literal_error(&self, error: LiteralError, start: usize, end: usize) -> ParseError {
        match error {
            LiteralError::Unterminated(terminator) => {
                ParseError::unterminated(terminator, self.make_span(start, self.end))
            }
            LiteralError::HeredocStartsOnSameLine => ParseError::HeredocStartsOnSameLine {
                span: self.make_span(start, end),
            },
            LiteralError::InvalidSigilDelimiter => ParseError::invalid_syntax(
                "invalid sigil delimiter",
                self.make_span(start, (end + 1).min(self.end)),
            ),
        }
    }

    /// Restart the lexer from a new position.
    /// Uses bump() to advance within the current logos lexer when possible.
    pub fn restart_from(&mut self, pos: usize) {
        self.peeked = None;
        let pos = pos.min(self.end);
        let logos_abs_pos = self.offset + self.inner.span().end;
        if pos >= logos_abs_pos {
            self.inner.bump(pos - logos_abs_pos);
        } else {
            self.inner = Token::lexer(&self.source[pos..self.end]);
            self.offset = pos;
        }
    }

    /// Check if we're at end of input
    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Collect all tokens (for debugging)
    pub fn collect_all(mut self) -> Vec<Result<SpannedToken<'a>, ParseError>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<SpannedToken<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize source code into a vector of spanned tokens
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    Lexer::new(source).collect_all()
}
