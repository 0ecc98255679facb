//! Numeric literals
//!
//! A whole number is parsed here only when it has exactly one digit run and
//! that run is valid in its base. Anything else (`0b`, `0b12`) is left to
//! `String.to_integer/2` at runtime so the error comes from the same place
//! the Elixir compiler would raise it.

use elixir_quote_parser::{CstNode, NodeKind};
use num_bigint::BigInt;
use tracing::debug;

use crate::error::{QuoteError, QuoteResult};
use crate::term::Term;

use super::code_points::escaped_code_point;
use super::{node_text, Quoter};

/// One digit run of a whole number
#[derive(Debug, Clone, Copy)]
struct Digits<'n> {
    text: &'n str,
    in_base: bool,
}

impl<'n> Digits<'n> {
    fn from_node(digits: &'n CstNode) -> QuoteResult<Self> {
        let run = digits.children.first().ok_or_else(|| {
            QuoteError::unsupported(format!("{} without a run", digits.kind), digits.span)
        })?;
        Ok(Self {
            text: node_text(run)?,
            in_base: run.kind == NodeKind::ValidDigits,
        })
    }
}

pub(crate) fn quote_whole_number(quoter: &Quoter<'_>, node: &CstNode) -> QuoteResult<Term> {
    let base = node
        .kind
        .base()
        .ok_or_else(|| QuoteError::unsupported(format!("{} as a number", node.kind), node.span))?;
    let runs = node
        .children
        .iter()
        .filter(|child| child.kind.is_digits())
        .map(Digits::from_node)
        .collect::<QuoteResult<Vec<_>>>()?;

    if let [run] = runs.as_slice() {
        if run.in_base {
            return parse_integer(run.text, base)
                .ok_or_else(|| QuoteError::unsupported(format!("digits {:?}", run.text), node.span));
        }
    }

    let text: String = runs.iter().map(|run| run.text).collect();
    debug!(text = %text, base, "deferring whole number to String.to_integer");
    Ok(Term::remote_call(
        Term::atom("String"),
        "to_integer",
        quoter.metadata(node),
        vec![Term::binary(text), Term::integer(i64::from(base))],
    ))
}

/// Parse digits (underscores allowed) exactly, promoting past 64 bits
pub(crate) fn parse_integer(text: &str, base: u32) -> Option<Term> {
    let digits = text.replace('_', "");
    if digits.is_empty() {
        return None;
    }
    match i64::from_str_radix(&digits, base) {
        Ok(value) => Some(Term::integer(value)),
        Err(_) => BigInt::parse_bytes(digits.as_bytes(), base).map(Term::integer_from_big),
    }
}

pub(crate) fn quote_float(node: &CstNode) -> QuoteResult<Term> {
    let text = node_text(node)?;
    text.replace('_', "")
        .parse::<f64>()
        .map(Term::Float)
        .map_err(|e| QuoteError::unsupported(format!("float {:?}: {}", text, e), node.span))
}

/// `?a` and `?\n` as their code points
pub(crate) fn quote_char_token(node: &CstNode) -> QuoteResult<Term> {
    let text = node_text(node)?;
    let character = text.strip_prefix('?').unwrap_or(text);
    let code_point = if character.starts_with('\\') {
        escaped_code_point(character)
    } else {
        character.chars().next().map(u32::from)
    };
    code_point
        .map(|c| Term::integer(i64::from(c)))
        .ok_or_else(|| QuoteError::malformed_escape(text, node.span))
}
