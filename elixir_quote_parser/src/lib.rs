//! elixir_quote_parser
//!
//! Pure Rust concrete syntax tree parser for a subset of Elixir.
//!
//! The tree keeps every piece of a quoted body (fragments, escapes,
//! interpolations, heredoc line prefixes) as separate nodes so that a
//! lowering pass can rebuild exactly the term the Elixir compiler produces.
//!
//! # Example
//!
//! ```
//! use elixir_quote_parser::{parse, NodeKind};
//!
//! let source = "42";
//! let cst = parse(source).expect("parse failed");
//!
//! assert_eq!(cst.kind, NodeKind::File);
//! ```

pub mod cst;
pub mod error;
pub mod lexer;
pub mod node_kind;
pub mod parser;
pub mod scan;
pub mod span;
pub mod token;

// Re-exports
pub use cst::{CstNode, CstWalker};
pub use error::{ParseError, ParseErrors, ParseResult};
pub use lexer::{Lexer, SpannedToken};
pub use node_kind::NodeKind;
pub use parser::Parser;
pub use span::{SourceMap, Span};
pub use token::{Associativity, Precedence, Token};

// Test utilities (available in tests or with "testing" feature)
#[cfg(any(test, feature = "testing"))]
pub use cst::testing;

/// Parse Elixir source code into a CST
///
/// Returns a `File` node containing the parsed statements, or the first
/// error encountered.
///
/// # Example
///
/// ```
/// use elixir_quote_parser::{parse, NodeKind};
///
/// let cst = parse("1 + 2").unwrap();
/// assert_eq!(cst.kind, NodeKind::File);
/// ```
pub fn parse(source: &str) -> ParseResult<CstNode> {
    let (cst, errors) = parser::parse(source);
    match errors.into_iter().next() {
        None => Ok(cst),
        Some(first) => Err(first),
    }
}

/// Parse Elixir source code with error recovery
///
/// Returns a CST even if there are parse errors, along with a list of errors.
pub fn parse_with_errors(source: &str) -> (CstNode, ParseErrors) {
    parser::parse(source)
}

/// Tokenize Elixir source code
///
/// Quoted literals are skipped as a single opener token.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    lexer::tokenize(source)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let cst = parse("").unwrap();
        assert_eq!(cst.kind, NodeKind::File);
        assert_eq!(cst.child_count(), 0);
    }

    #[test]
    fn test_parse_reports_first_error() {
        let err = parse("1 +").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }), "{err:?}");
    }

    #[test]
    fn test_parse_with_errors_recovers() {
        let (cst, errors) = parse_with_errors("1 )\n2");
        assert_eq!(errors.len(), 1);
        let kinds: Vec<_> = cst.significant_children().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::DecimalWholeNumber]);
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("1 + 2");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
