//! Shared helpers for integration tests
// Each test target uses a different subset of these builders.
#![allow(dead_code)]

use elixir_quote::{quote_source, QuoteError, Term};

/// Quote `source`, panicking with the error on failure
pub fn quote(source: &str) -> Term {
    quote_source(source).unwrap_or_else(|e| panic!("quote of {:?} failed: {}", source, e))
}

/// Quote `source`, panicking if it succeeds
pub fn quote_err(source: &str) -> QuoteError {
    match quote_source(source) {
        Ok(term) => panic!("expected {:?} to fail, got {}", source, term),
        Err(error) => error,
    }
}

/// `[line: L]`
pub fn meta(line: i64) -> Term {
    Term::keyword([("line", Term::integer(line))])
}

/// `{name, [line: L], nil}`
pub fn var(name: &str, line: i64) -> Term {
    Term::call(Term::atom(name), meta(line), vec![])
}

/// `{:__aliases__, [counter: 0, line: L], [:A, :B]}`
pub fn aliases(segments: &[&str], line: i64) -> Term {
    Term::call(
        Term::atom("__aliases__"),
        Term::keyword([("counter", Term::integer(0)), ("line", Term::integer(line))]),
        segments.iter().map(|s| Term::atom(*s)).collect(),
    )
}

/// `{:__block__, [], statements}`
pub fn block(statements: Vec<Term>) -> Term {
    Term::tuple(vec![
        Term::atom("__block__"),
        Term::list(vec![]),
        Term::list(statements),
    ])
}

/// `{:<<>>, [line: L], parts}`
pub fn binary_construction(parts: Vec<Term>, line: i64) -> Term {
    Term::call(Term::atom("<<>>"), meta(line), parts)
}

/// The `::` term an interpolation `#{expression}` quotes to
pub fn interpolated(expression: Term, line: i64) -> Term {
    Term::call(
        Term::atom("::"),
        meta(line),
        vec![
            Term::remote_call(
                Term::atom("Elixir.Kernel"),
                "to_string",
                meta(line),
                vec![expression],
            ),
            Term::call(Term::atom("binary"), meta(line), vec![]),
        ],
    )
}
