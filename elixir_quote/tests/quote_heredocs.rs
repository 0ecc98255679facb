//! Heredocs: indentation stripping, line splicing and metadata

mod common;

use common::{binary_construction, interpolated, quote, var};
use elixir_quote::Term;
use pretty_assertions::assert_eq;

#[test]
fn test_closing_indentation_is_removed() {
    let source = "\"\"\"\n    one\n    two\n    \"\"\"";
    assert_eq!(quote(source), Term::binary("one\ntwo\n"));
}

#[test]
fn test_deeper_lines_keep_the_excess() {
    let source = "\"\"\"\n    one\n      two\n    \"\"\"";
    assert_eq!(quote(source), Term::binary("one\n  two\n"));
}

#[test]
fn test_unindented_heredoc() {
    assert_eq!(quote("\"\"\"\nabc\n\"\"\""), Term::binary("abc\n"));
}

#[test]
fn test_blank_lines_are_kept() {
    let source = "\"\"\"\n  a\n\n  b\n  \"\"\"";
    assert_eq!(quote(source), Term::binary("a\n\nb\n"));
}

#[test]
fn test_outdented_line_is_clamped() {
    let source = "\"\"\"\n    a\n  b\n    \"\"\"";
    assert_eq!(quote(source), Term::binary("a\nb\n"));
}

#[test]
fn test_crlf_line_endings_become_newlines() {
    let source = "\"\"\"\r\n  a\r\n\r\n    b\r\n  \"\"\"";
    assert_eq!(quote(source), Term::binary("a\n\n  b\n"));
}

#[test]
fn test_empty_heredoc() {
    assert_eq!(quote("\"\"\"\n\"\"\""), Term::binary(""));
    assert_eq!(quote("'''\n'''"), Term::list(vec![]));
}

#[test]
fn test_escapes_are_decoded() {
    let source = "\"\"\"\n  a\\tb\n  \"\"\"";
    assert_eq!(quote(source), Term::binary("a\tb\n"));
}

#[test]
fn test_char_list_heredoc() {
    let source = "'''\n  ab\n    c\n  '''";
    let expected: Vec<u32> = "ab\n  c\n".chars().map(u32::from).collect();
    assert_eq!(quote(source), Term::charlist(expected));
}

#[test]
fn test_interpolation_spans_lines() {
    // The binary construction sits on the heredoc's line, the
    // interpolation on its own.
    let source = "\"\"\"\n  a#{x}\n    b\n  \"\"\"";
    assert_eq!(
        quote(source),
        binary_construction(
            vec![
                Term::binary("a"),
                interpolated(var("x", 2), 2),
                Term::binary("\n  b\n"),
            ],
            1,
        )
    );
}

#[test]
fn test_interpolation_on_an_indented_line() {
    let source = "x\n\"\"\"\n    #{y}\n  \"\"\"";
    assert_eq!(
        quote(source),
        common::block(vec![
            var("x", 1),
            binary_construction(
                vec![
                    Term::binary("  "),
                    interpolated(var("y", 3), 3),
                    Term::binary("\n"),
                ],
                2,
            ),
        ])
    );
}

#[test]
fn test_interpolated_char_list_heredoc() {
    let source = "'''\n#{a}\n'''";
    assert_eq!(
        quote(source),
        Term::remote_call(
            Term::atom("Elixir.String"),
            "to_char_list",
            common::meta(1),
            vec![binary_construction(
                vec![interpolated(var("a", 2), 2), Term::binary("\n")],
                1,
            )],
        )
    );
}

#[test]
fn test_sigil_heredoc_keeps_escapes() {
    let source = "~S\"\"\"\n  a\\n\n  \"\"\"";
    assert_eq!(
        quote(source),
        Term::call(
            Term::atom("sigil_S"),
            common::meta(1),
            vec![
                binary_construction(vec![Term::binary("a\\n\n")], 1),
                Term::list(vec![]),
            ],
        )
    );
}
