//! Parse error types

use crate::span::Span;
use thiserror::Error;

/// Parse error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Unexpected token
    #[error("unexpected token '{found}' at {span:?}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    /// Unexpected end of input
    #[error("unexpected end of input at {span:?}, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// String, char list, atom or sigil body without its closing delimiter
    #[error("missing terminator {terminator} for literal starting at {span:?}")]
    UnterminatedLiteral { terminator: String, span: Span },

    /// `#{` without a matching `}`
    #[error("unterminated interpolation starting at {span:?}")]
    UnterminatedInterpolation { span: Span },

    /// Heredoc opening delimiter not followed by a line break
    #[error("heredoc opening delimiter must be followed by a new line at {span:?}")]
    HeredocStartsOnSameLine { span: Span },

    /// Well-formed Elixir this parser does not cover
    #[error("unsupported syntax '{construct}' at {span:?}")]
    UnsupportedSyntax { construct: String, span: Span },

    /// Invalid syntax
    #[error("{message} at {span:?}")]
    InvalidSyntax { message: String, span: Span },

    /// Lexer error
    #[error("unrecognized token at {span:?}")]
    LexerError { span: Span },
}

impl ParseError {
    /// Get the span of the error
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::UnterminatedLiteral { span, .. }
            | ParseError::UnterminatedInterpolation { span }
            | ParseError::HeredocStartsOnSameLine { span }
            | ParseError::UnsupportedSyntax { span, .. }
            | ParseError::InvalidSyntax { span, .. }
            | ParseError::LexerError { span } => span,
        }
    }

    pub fn unexpected_token(
        found: impl Into<String>,
        expected: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            span,
        }
    }

    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    pub fn unterminated(terminator: impl Into<String>, span: Span) -> Self {
        ParseError::UnterminatedLiteral {
            terminator: terminator.into(),
            span,
        }
    }

    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidSyntax {
            message: message.into(),
            span,
        }
    }

    /// Format error with source context
    ///
    /// Returns the offending source line with a caret marker underneath.
    pub fn format_with_context(&self, source: &str) -> String {
        let span = self.span();
        let Some(line) = source.lines().nth(span.start_line.saturating_sub(1)) else {
            return String::new();
        };

        let col = span.start_column.saturating_sub(1);
        let len = if span.start_line == span.end_line {
            span.end_column.saturating_sub(span.start_column).max(1)
        } else {
            1
        };
        let marker = "^".repeat(len.min(line.len().saturating_sub(col)).max(1));
        let gutter = span.start_line.to_string();

        format!(
            "  {} | {}\n  {} | {}{}",
            gutter,
            line,
            " ".repeat(gutter.len()),
            " ".repeat(col),
            marker
        )
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors collected while recovering from bad statements
#[derive(Debug, Default)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: ParseErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    /// Format all errors as a single message
    pub fn format_all(&self, source: &str) -> String {
        self.errors
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let context = e.format_with_context(source);
                format!("Error {}: {}\n{}", i + 1, e, context)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token() {
        let span = Span::new(0, 5, 1, 1, 1, 6);
        let err = ParseError::unexpected_token("foo", "bar", span);

        assert_eq!(err.span(), &span);
        assert!(err.to_string().contains("foo"));
        assert!(err.to_string().contains("bar"));
    }

    #[test]
    fn test_parse_errors() {
        let mut errors = ParseErrors::new();
        assert!(errors.is_empty());

        let span = Span::new(0, 5, 1, 1, 1, 6);
        let span2 = Span::new(10, 13, 1, 11, 1, 14);
        errors.push(ParseError::unexpected_token("a", "b", span));
        errors.push(ParseError::unterminated("\"", span2));

        assert_eq!(errors.len(), 2);
        assert!(errors.first().is_some());
    }

    #[test]
    fn test_format_with_context() {
        let source = "x = \"abc\ny = 2";
        let span = Span::new(4, 5, 1, 1, 5, 6);
        let err = ParseError::unterminated("\"", span);

        let context = err.format_with_context(source);
        assert!(context.contains("x = \"abc"));
        assert!(context.contains("    ^"));
    }

    #[test]
    fn test_format_all() {
        let source = "do\nend";
        let mut errors = ParseErrors::new();
        errors.push(ParseError::UnsupportedSyntax {
            construct: "do".to_string(),
            span: Span::new(0, 2, 1, 1, 1, 3),
        });
        errors.push(ParseError::UnsupportedSyntax {
            construct: "end".to_string(),
            span: Span::new(3, 6, 2, 2, 1, 4),
        });

        let formatted = errors.format_all(source);
        assert!(formatted.contains("Error 1:"));
        assert!(formatted.contains("Error 2:"));
    }
}
