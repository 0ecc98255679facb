// Library code reports through `tracing` and returned errors only.
#![deny(clippy::print_stderr)]

//! elixir_quote
//!
//! Lowers Elixir concrete syntax trees into quoted terms: the nested atoms,
//! tuples, lists, integers and binaries `Code.string_to_quoted/1` returns,
//! with `[line: L]` metadata on every call tuple.
//!
//! # Example
//!
//! ```
//! use elixir_quote::{quote_source, Term};
//!
//! let quoted = quote_source("x + 1").unwrap();
//! let line = Term::keyword([("line", Term::integer(1))]);
//! assert_eq!(
//!     quoted,
//!     Term::call(
//!         Term::atom("+"),
//!         line.clone(),
//!         vec![Term::call(Term::atom("x"), line, vec![]), Term::integer(1)],
//!     )
//! );
//! ```

pub mod config;
pub mod error;
pub mod lowering;
pub mod pipeline;
pub mod term;

pub use config::{CharlistConversion, ConfigError, QuoteOptions};
pub use error::{QuoteError, QuoteResult, SyntaxError, SyntaxIssue};
pub use lowering::{LineResolver, Quoter};
pub use pipeline::{quote_source, quote_source_with_options};
pub use term::Term;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
