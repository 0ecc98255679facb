//! Blocks, lists, tuples, calls and statement separators

use elixir_quote_parser::{parse, parse_with_errors, CstNode, NodeKind, ParseError};

fn parse_single(source: &str) -> CstNode {
    let cst = parse(source).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", source, e));
    let mut nodes: Vec<_> = cst.significant_children().cloned().collect();
    assert_eq!(nodes.len(), 1, "Expected one expression in {:?}", source);
    nodes.remove(0)
}

fn child_kinds(node: &CstNode) -> Vec<NodeKind> {
    node.children.iter().map(|c| c.kind).collect()
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_statement_separators_are_kept() {
    let cst = parse("1\n2; 3").unwrap();
    assert_eq!(
        child_kinds(&cst),
        vec![
            NodeKind::DecimalWholeNumber,
            NodeKind::EndOfExpression,
            NodeKind::DecimalWholeNumber,
            NodeKind::EndOfExpression,
            NodeKind::DecimalWholeNumber,
        ]
    );
}

#[test]
fn test_comments_are_kept() {
    let cst = parse("# lead\n1 # trailing").unwrap();
    assert_eq!(
        child_kinds(&cst),
        vec![
            NodeKind::Comment,
            NodeKind::EndOfExpression,
            NodeKind::DecimalWholeNumber,
            NodeKind::Comment,
        ]
    );
    assert_eq!(cst.children[0].text_str(), Some("# lead"));
}

#[test]
fn test_two_expressions_on_one_line_is_an_error() {
    let err = parse("1 2").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{err:?}");
}

// =============================================================================
// Blocks
// =============================================================================

#[test]
fn test_empty_block() {
    let node = parse_single("()");
    assert_eq!(node.kind, NodeKind::Block);
    assert_eq!(node.child_count(), 0);
}

#[test]
fn test_multi_statement_block() {
    let node = parse_single("(a\nb; c)");
    assert_eq!(node.kind, NodeKind::Block);
    assert_eq!(node.significant_children().count(), 3);
    assert_eq!(node.span.start, 0);
    assert_eq!(node.span.end, 8);
}

#[test]
fn test_unclosed_block() {
    assert!(parse("(1").is_err());
}

// =============================================================================
// Lists and tuples
// =============================================================================

#[test]
fn test_list() {
    let node = parse_single("[1, :a, \"b\"]");
    assert_eq!(node.kind, NodeKind::List);
    assert_eq!(
        child_kinds(&node),
        vec![NodeKind::DecimalWholeNumber, NodeKind::Atom, NodeKind::String]
    );
}

#[test]
fn test_empty_collections() {
    assert_eq!(parse_single("[]").child_count(), 0);
    assert_eq!(parse_single("{}").child_count(), 0);
}

#[test]
fn test_trailing_comma_and_newlines() {
    let node = parse_single("[\n  1,\n  2,\n]");
    assert_eq!(node.kind, NodeKind::List);
    assert_eq!(node.child_count(), 2);
}

#[test]
fn test_tuple_arity() {
    assert_eq!(parse_single("{1, 2}").child_count(), 2);
    assert_eq!(parse_single("{1, 2, 3}").child_count(), 3);
    assert_eq!(parse_single("{1}").kind, NodeKind::Tuple);
}

#[test]
fn test_nested_collections() {
    let node = parse_single("[{1, [2]}]");
    let tuple = &node.children[0];
    assert_eq!(tuple.kind, NodeKind::Tuple);
    assert_eq!(tuple.children[1].kind, NodeKind::List);
}

#[test]
fn test_missing_comma() {
    assert!(parse("[1 2]").is_err());
}

// =============================================================================
// Calls
// =============================================================================

#[test]
fn test_local_call() {
    let node = parse_single("foo(1, 2)");
    assert_eq!(node.kind, NodeKind::Call);
    assert_eq!(node.children[0].text_str(), Some("foo"));
    let arguments = &node.children[1];
    assert_eq!(arguments.kind, NodeKind::Arguments);
    assert_eq!(arguments.child_count(), 2);
}

#[test]
fn test_local_call_without_arguments() {
    let node = parse_single("foo()");
    assert_eq!(node.kind, NodeKind::Call);
    assert_eq!(node.children[1].child_count(), 0);
}

#[test]
fn test_space_before_paren_is_not_a_call() {
    assert!(parse("foo (1)").is_err());
}

#[test]
fn test_remote_calls() {
    let node = parse_single("String.upcase(x)");
    assert_eq!(node.kind, NodeKind::RemoteCall);
    assert_eq!(
        child_kinds(&node),
        vec![NodeKind::Alias, NodeKind::Identifier, NodeKind::Arguments]
    );

    let node = parse_single(":erlang.abs(-1)");
    assert_eq!(node.kind, NodeKind::RemoteCall);
    assert_eq!(node.children[0].kind, NodeKind::Atom);

    let node = parse_single("Foo.Bar.baz()");
    assert_eq!(node.children[0].kind, NodeKind::QualifiedAlias);
}

#[test]
fn test_remote_call_without_parens_is_unsupported() {
    let err = parse("Foo.bar").unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedSyntax { .. }), "{err:?}");
}

// =============================================================================
// Unsupported syntax and recovery
// =============================================================================

#[test]
fn test_block_keywords_are_unsupported() {
    for source in ["fn", "do", "end"] {
        let err = parse(source).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedSyntax { .. }), "{source}: {err:?}");
    }
}

#[test]
fn test_recovery_continues_after_bad_statement() {
    let (cst, errors) = parse_with_errors("1 +\n2\n[3");
    assert_eq!(errors.len(), 1);
    // `1 +\n2` is one statement; `[3` fails
    assert_eq!(cst.significant_children().count(), 1);
}
