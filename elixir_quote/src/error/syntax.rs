use elixir_quote_parser::{ParseErrors, Span};
use std::fmt;

#[derive(Debug, Clone)]
pub struct SyntaxIssue {
    pub span: Span,
    pub text: String,
}

/// Parse failures surfaced by the quoting pipeline
#[derive(Debug)]
pub struct SyntaxError {
    issues: Vec<SyntaxIssue>,
}

impl SyntaxError {
    pub fn from_issues(issues: Vec<SyntaxIssue>) -> Self {
        Self { issues }
    }

    /// One issue per recovered parse error, with the offending source line
    pub fn from_parse_errors(errors: &ParseErrors, source: &str) -> Self {
        let issues = errors
            .iter()
            .map(|error| SyntaxIssue {
                span: *error.span(),
                text: format!("{}\n{}", error, error.format_with_context(source)),
            })
            .collect();
        Self::from_issues(issues)
    }

    pub fn issues(&self) -> &[SyntaxIssue] {
        &self.issues
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax errors: {} issue(s)", self.issues.len())?;
        if let Some(first) = self.issues.first() {
            write!(f, "\n{}", first.text)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
