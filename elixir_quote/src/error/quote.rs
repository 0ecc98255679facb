use elixir_quote_parser::Span;
use thiserror::Error;

use super::SyntaxError;

/// Why a tree could not be turned into a quoted term
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A node kind or shape the lowering rules do not cover
    #[error("cannot quote {construct} at line {}", .span.start_line)]
    UnsupportedConstruct { construct: String, span: Span },

    /// An escape sequence with no decodable code point (`\u12`)
    #[error("malformed escape sequence {sequence} at line {}", .span.start_line)]
    MalformedEscape { sequence: String, span: Span },

    /// A decoded value outside the Unicode scalar range
    #[error("invalid code point {code_point:#X} at line {}", .span.start_line)]
    InvalidCodePoint { code_point: u32, span: Span },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl QuoteError {
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        QuoteError::UnsupportedConstruct {
            construct: construct.into(),
            span,
        }
    }

    pub fn malformed_escape(sequence: impl Into<String>, span: Span) -> Self {
        QuoteError::MalformedEscape {
            sequence: sequence.into(),
            span,
        }
    }

    /// Source location of the offending node, when there is a single one
    pub fn span(&self) -> Option<&Span> {
        match self {
            QuoteError::UnsupportedConstruct { span, .. }
            | QuoteError::MalformedEscape { span, .. }
            | QuoteError::InvalidCodePoint { span, .. } => Some(span),
            QuoteError::Syntax(error) => error.issues().first().map(|issue| &issue.span),
        }
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;
