//! Inspect-style rendering of terms
//!
//! Output follows `IO.inspect/1` closely enough to compare against iex
//! output by eye: keyword lists render as `[line: 1]`, module atoms as
//! `Kernel`, other atoms as `:name` or `:"odd name"`.

use std::fmt;

use super::Term;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Integer(value) => write!(f, "{}", value),
            Term::BigInteger(value) => write!(f, "{}", value),
            Term::Float(value) => write!(f, "{:?}", value),
            Term::Atom(name) => write_atom(f, name),
            Term::Binary(text) => write!(f, "{:?}", text),
            Term::CodePointList(code_points) => write_charlist(f, code_points),
            Term::List(elements) => {
                if is_keyword(elements) {
                    write_keyword(f, elements)
                } else {
                    write_sequence(f, "[", elements, "]")
                }
            }
            Term::Tuple(elements) => write_sequence(f, "{", elements, "}"),
        }
    }
}

fn write_sequence(f: &mut fmt::Formatter<'_>, open: &str, elements: &[Term], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", element)?;
    }
    f.write_str(close)
}

fn write_keyword(f: &mut fmt::Formatter<'_>, pairs: &[Term]) -> fmt::Result {
    f.write_str("[")?;
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if let Some([Term::Atom(key), value]) = pair.as_tuple() {
            if is_plain_name(key) {
                write!(f, "{}: {}", key, value)?;
            } else {
                write!(f, "{:?}: {}", key, value)?;
            }
        }
    }
    f.write_str("]")
}

fn write_atom(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if matches!(name, "nil" | "true" | "false") {
        return f.write_str(name);
    }
    if let Some(module) = name.strip_prefix("Elixir.") {
        if module.split('.').all(is_alias_segment) {
            return f.write_str(module);
        }
    }
    if is_plain_name(name) || is_operator(name) {
        write!(f, ":{}", name)
    } else {
        write!(f, ":{:?}", name)
    }
}

fn write_charlist(f: &mut fmt::Formatter<'_>, code_points: &[u32]) -> fmt::Result {
    let printable: Option<String> = code_points
        .iter()
        .map(|&c| char::from_u32(c).filter(|c| !c.is_control()))
        .collect();
    match printable {
        Some(text) => write!(f, "'{}'", text.replace('\'', "\\'")),
        None => {
            let elements: Vec<Term> = code_points.iter().map(|&c| Term::Integer(i64::from(c))).collect();
            write_sequence(f, "[", &elements, "]")
        }
    }
}

fn is_keyword(elements: &[Term]) -> bool {
    !elements.is_empty()
        && elements
            .iter()
            .all(|e| matches!(e.as_tuple(), Some([Term::Atom(_), _])))
}

/// `foo`, `foo?`, `Foo`, `foo_bar!`
fn is_plain_name(name: &str) -> bool {
    let body = name.strip_suffix(['?', '!']).unwrap_or(name);
    let mut chars = body.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
        }
        _ => false,
    }
}

fn is_alias_segment(segment: &str) -> bool {
    segment.starts_with(|c: char| c.is_ascii_uppercase())
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_operator(name: &str) -> bool {
    matches!(
        name,
        "+" | "-" | "*" | "/" | "++" | "--" | "<>" | "==" | "!=" | "===" | "!==" | "<" | ">"
            | "<=" | ">=" | "&&" | "||" | "!" | "^" | "@" | "=" | "|>" | "|" | "::" | "."
            | "<<>>" | "{}" | "%{}" | "=~" | ".."
    )
}
