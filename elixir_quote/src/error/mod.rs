pub mod quote;
pub mod syntax;

pub use quote::{QuoteError, QuoteResult};
pub use syntax::{SyntaxError, SyntaxIssue};
