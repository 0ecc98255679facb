//! Tests for node_kind module

use super::*;
use std::collections::HashSet;

#[test]
fn test_all_variants_is_exhaustive() {
    let all = NodeKind::all_variants();
    let unique: HashSet<NodeKind> = all.iter().copied().collect();

    assert_eq!(
        all.len(),
        unique.len(),
        "all_variants() contains duplicates: {} total but {} unique",
        all.len(),
        unique.len()
    );
    assert_eq!(all.len(), NodeKind::variant_count());
}

#[test]
fn test_all_variants_roundtrip() {
    for &kind in NodeKind::all_variants() {
        let s = kind.as_str();
        let parsed: NodeKind = s.parse().unwrap();
        assert_eq!(kind, parsed, "round-trip failed for {:?} ({:?})", kind, s);
    }
}

#[test]
fn test_from_str() {
    assert_eq!("file".parse::<NodeKind>().unwrap(), NodeKind::File);
    assert_eq!(
        "hexadecimal_escape_sequence".parse::<NodeKind>().unwrap(),
        NodeKind::HexadecimalEscapeSequence
    );
    assert_eq!("no_such_node".parse::<NodeKind>().unwrap(), NodeKind::Unknown);
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(NodeKind::SigilHeredoc.to_string(), "sigil_heredoc");
}

#[test]
fn test_bases() {
    assert_eq!(NodeKind::BinaryWholeNumber.base(), Some(2));
    assert_eq!(NodeKind::OctalDigits.base(), Some(8));
    assert_eq!(NodeKind::DecimalWholeNumber.base(), Some(10));
    assert_eq!(NodeKind::HexadecimalDigits.base(), Some(16));
    assert_eq!(NodeKind::ValidDigits.base(), None);
}

#[test]
fn test_digits_kind() {
    for &kind in NodeKind::all_variants() {
        if kind.is_whole_number() {
            let digits = kind.digits_kind().unwrap();
            assert!(digits.is_digits());
            assert_eq!(digits.base(), kind.base());
        }
    }
}

#[test]
fn test_predicates() {
    assert!(NodeKind::Comment.is_trivia());
    assert!(NodeKind::SigilFragment.is_fragment());
    assert!(NodeKind::SigilHeredoc.is_heredoc());
    assert!(NodeKind::SigilHeredoc.is_quote());
    assert!(NodeKind::AtomKeyword.is_literal());
    assert!(!NodeKind::Interpolation.is_fragment());
    assert!(!NodeKind::Call.is_literal());
}
