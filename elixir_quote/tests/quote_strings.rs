//! Strings, char lists and atoms: escapes, interpolation and literal bodies

mod common;

use common::{binary_construction, interpolated, meta, quote, quote_err, var};
use elixir_quote::{QuoteError, Term};
use pretty_assertions::assert_eq;

fn codes(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

// =============================================================================
// Literal bodies
// =============================================================================

#[test]
fn test_plain_literals_quote_to_their_text() {
    for text in ["", "hello", "with spaces", "ünïcödé", "😀 emoji", "a#b", "{braces}"] {
        assert_eq!(quote(&format!("\"{text}\"")), Term::binary(text), "string {text:?}");
        assert_eq!(
            quote(&format!("'{text}'")),
            Term::charlist(codes(text)),
            "char list {text:?}"
        );
    }
}

#[test]
fn test_empty_bodies() {
    assert_eq!(quote(r#""""#), Term::binary(""));
    assert_eq!(quote("''"), Term::list(vec![]));
}

#[test]
fn test_wide_char_list_is_an_integer_list() {
    assert_eq!(
        quote("'é😀'"),
        Term::list(vec![Term::integer(0xE9), Term::integer(0x1F600)])
    );
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn test_escape_table() {
    let table = [
        ('0', 0x00),
        ('a', 0x07),
        ('b', 0x08),
        ('d', 0x7F),
        ('e', 0x1B),
        ('f', 0x0C),
        ('n', 0x0A),
        ('r', 0x0D),
        ('s', 0x20),
        ('t', 0x09),
        ('v', 0x0B),
    ];
    for (escape, code_point) in table {
        let quoted = quote(&format!("'\\{escape}'"));
        assert_eq!(quoted, Term::charlist(vec![code_point]), "\\{escape}");
    }
}

#[test]
fn test_escapes_in_strings() {
    assert_eq!(quote(r#""a\nb""#), Term::binary("a\nb"));
    assert_eq!(quote(r#""tab\there""#), Term::binary("tab\there"));
    assert_eq!(quote(r#""say \"hi\"""#), Term::binary("say \"hi\""));
    assert_eq!(quote(r#""back\\slash""#), Term::binary("back\\slash"));
    assert_eq!(quote(r#""\#{not}""#), Term::binary("#{not}"));
    assert_eq!(quote(r#""\q""#), Term::binary("q"));
}

#[test]
fn test_hexadecimal_escapes() {
    assert_eq!(quote(r#""\x41""#), Term::binary("A"));
    assert_eq!(quote(r#""\x{41}""#), Term::binary("A"));
    assert_eq!(quote(r#""\u00E9""#), Term::binary("é"));
    assert_eq!(quote(r#""\u{1F600}""#), Term::binary("😀"));
    assert_eq!(quote(r"'\x{FF}'"), Term::charlist(vec![0xFF]));
}

#[test]
fn test_malformed_unicode_escape_fails() {
    match quote_err(r#""\u12""#) {
        QuoteError::MalformedEscape { sequence, span } => {
            assert_eq!(sequence, "\\u12");
            assert_eq!(span.start, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_surrogate_escape_fails() {
    let err = quote_err(r#""\x{D800}""#);
    assert!(
        matches!(err, QuoteError::InvalidCodePoint { code_point: 0xD800, .. }),
        "{err:?}"
    );
}

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn test_interpolation_splice() {
    assert_eq!(
        quote(r#""a#{1}b""#),
        binary_construction(
            vec![
                Term::binary("a"),
                interpolated(Term::integer(1), 1),
                Term::binary("b"),
            ],
            1,
        )
    );
}

#[test]
fn test_interpolation_only() {
    assert_eq!(
        quote(r##""#{x}""##),
        binary_construction(vec![interpolated(var("x", 1), 1)], 1)
    );
}

#[test]
fn test_adjacent_interpolations() {
    assert_eq!(
        quote(r##""#{a}#{b}""##),
        binary_construction(
            vec![interpolated(var("a", 1), 1), interpolated(var("b", 1), 1)],
            1,
        )
    );
}

#[test]
fn test_escapes_merge_with_surrounding_text() {
    assert_eq!(
        quote(r#""a\tb#{c}\n""#),
        binary_construction(
            vec![
                Term::binary("a\tb"),
                interpolated(var("c", 1), 1),
                Term::binary("\n"),
            ],
            1,
        )
    );
}

#[test]
fn test_interpolation_with_statements() {
    let contents = Term::tuple(vec![
        Term::atom("__block__"),
        Term::list(vec![]),
        Term::list(vec![var("a", 1), var("b", 1)]),
    ]);
    assert_eq!(
        quote(r##""#{a; b}""##),
        binary_construction(vec![interpolated(contents, 1)], 1)
    );
}

#[test]
fn test_nested_interpolation() {
    let inner = binary_construction(vec![Term::binary("y"), interpolated(var("z", 1), 1)], 1);
    assert_eq!(
        quote(r#""x#{"y#{z}"}""#),
        binary_construction(vec![Term::binary("x"), interpolated(inner, 1)], 1)
    );
}

#[test]
fn test_interpolated_char_list() {
    assert_eq!(
        quote("'a#{b}'"),
        Term::remote_call(
            Term::atom("Elixir.String"),
            "to_char_list",
            meta(1),
            vec![binary_construction(
                vec![Term::binary("a"), interpolated(var("b", 1), 1)],
                1,
            )],
        )
    );
}

// =============================================================================
// Atoms
// =============================================================================

#[test]
fn test_bare_atoms() {
    assert_eq!(quote(":foo"), Term::atom("foo"));
    assert_eq!(quote(":Foo"), Term::atom("Foo"));
    assert_eq!(quote(":valid?"), Term::atom("valid?"));
    assert_eq!(quote(":+"), Term::atom("+"));
}

#[test]
fn test_quoted_atoms_with_known_names() {
    assert_eq!(quote(r#":"foo bar""#), Term::atom("foo bar"));
    assert_eq!(quote(r#":"a\nb""#), Term::atom("a\nb"));
    assert_eq!(quote(":'single'"), Term::atom("single"));
    assert_eq!(quote(r#":"""#), Term::atom(""));
}

#[test]
fn test_interpolated_atom_is_built_at_runtime() {
    let expected = Term::remote_call(
        Term::atom("erlang"),
        "binary_to_atom",
        meta(1),
        vec![
            binary_construction(vec![Term::binary("a"), interpolated(var("b", 1), 1)], 1),
            Term::atom("utf8"),
        ],
    );
    assert_eq!(quote(r#":"a#{b}""#), expected);
    assert_eq!(quote(":'a#{b}'"), expected);
}
