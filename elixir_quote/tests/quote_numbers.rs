//! Whole numbers: base fidelity, big integers and deferred conversion

mod common;

use common::{meta, quote};
use elixir_quote::Term;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn deferred(text: &str, base: i64, line: i64) -> Term {
    Term::remote_call(
        Term::atom("String"),
        "to_integer",
        meta(line),
        vec![Term::binary(text), Term::integer(base)],
    )
}

// =============================================================================
// Valid literals
// =============================================================================

#[test]
fn test_every_base() {
    let cases = [
        ("0", 0),
        ("42", 42),
        ("1_000_000", 1_000_000),
        ("0b1010", 10),
        ("0b1_0", 2),
        ("0o755", 493),
        ("0x1f", 31),
        ("0xFF", 255),
        ("0xff", 255),
    ];
    for (source, expected) in cases {
        assert_eq!(quote(source), Term::integer(expected), "{source}");
    }
}

#[test]
fn test_values_match_arbitrary_precision_parse() {
    let cases = [
        ("0b", "1111111111111111111111111111111111111111111111111111111111111111111", 2),
        ("0o", "7777777777777777777777777777", 8),
        ("", "123456789012345678901234567890", 10),
        ("0x", "ffffffffffffffffffffffffffffffffffffffff", 16),
    ];
    for (prefix, digits, base) in cases {
        let expected = BigInt::parse_bytes(digits.as_bytes(), base).expect("digits");
        let quoted = quote(&format!("{prefix}{digits}"));
        assert_eq!(quoted, Term::BigInteger(expected), "{prefix}{digits}");
        assert!(matches!(quoted, Term::BigInteger(_)));
    }
}

#[test]
fn test_i64_boundary() {
    assert_eq!(quote("9223372036854775807"), Term::integer(i64::MAX));
    assert!(matches!(quote("9223372036854775808"), Term::BigInteger(_)));
    assert_eq!(quote("0x7fffffffffffffff"), Term::integer(i64::MAX));
}

// =============================================================================
// Deferred conversion
// =============================================================================

#[test]
fn test_invalid_digit_is_deferred() {
    assert_eq!(quote("0b2"), deferred("2", 2, 1));
    assert_eq!(quote("0o8"), deferred("8", 8, 1));
    assert_eq!(quote("0xg"), deferred("g", 16, 1));
}

#[test]
fn test_mixed_runs_are_concatenated() {
    assert_eq!(quote("0b1021"), deferred("1021", 2, 1));
    assert_eq!(quote("0o19"), deferred("19", 8, 1));
}

#[test]
fn test_prefix_without_digits_is_deferred() {
    assert_eq!(quote("0b"), deferred("", 2, 1));
    assert_eq!(quote("0x"), deferred("", 16, 1));
}

#[test]
fn test_deferred_call_carries_the_literal_line() {
    assert_eq!(
        quote("1\n0b2"),
        common::block(vec![Term::integer(1), deferred("2", 2, 2)])
    );
}
