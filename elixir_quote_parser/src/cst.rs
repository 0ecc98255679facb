//! Concrete Syntax Tree (CST) node structure

use serde::{Deserialize, Serialize};

use crate::node_kind::NodeKind;
use crate::span::Span;

/// A node in the Concrete Syntax Tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    /// The kind of node
    pub kind: NodeKind,

    /// Source location span
    pub span: Span,

    /// Child nodes
    pub children: Vec<CstNode>,

    /// For leaf nodes: the source text of the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CstNode {
    /// Create a new CST node
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a new leaf node with text
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Create a new node with children
    pub fn with_children(kind: NodeKind, span: Span, children: Vec<CstNode>) -> Self {
        Self {
            kind,
            span,
            children,
            text: None,
        }
    }

    /// Add a child node
    pub fn push_child(&mut self, child: CstNode) {
        self.children.push(child);
    }

    /// Find first child of a specific kind
    pub fn find_child(&self, kind: NodeKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Find all children of a specific kind
    pub fn find_children(&self, kind: NodeKind) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Children other than end-of-expression markers and comments
    pub fn significant_children(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(|c| !c.kind.is_trivia())
    }

    /// Get text as str
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get child count
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Get the text from source
    pub fn text_from_source<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }

    /// Walk the tree in pre-order
    pub fn walk(&self) -> CstWalker<'_> {
        CstWalker::new(self)
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind.as_str(),
            "start": self.span.start,
            "end": self.span.end,
            "start_line": self.span.start_line,
            "end_line": self.span.end_line,
            "start_column": self.span.start_column,
            "end_column": self.span.end_column,
            "text": self.text,
            "children": self.children.iter().map(|c| c.to_json()).collect::<Vec<_>>()
        })
    }

    /// Create from the format produced by [`CstNode::to_json`]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let kind = value.get("type")?.as_str()?.parse::<NodeKind>().ok()?;
        let field = |name: &str| value.get(name).and_then(|v| v.as_u64()).map(|v| v as usize);
        let span = Span::new(
            field("start")?,
            field("end")?,
            field("start_line")?,
            field("end_line")?,
            field("start_column")?,
            field("end_column")?,
        );
        let text = value
            .get("text")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        let children = value
            .get("children")?
            .as_array()?
            .iter()
            .filter_map(CstNode::from_json)
            .collect();

        Some(Self {
            kind,
            span,
            children,
            text,
        })
    }

    /// Return tree structure as an indented string for debugging.
    ///
    /// # Example output
    /// ```text
    /// BinaryOperation
    ///   Identifier = "x"
    ///   Operator = "+"
    ///   DecimalWholeNumber
    ///     DecimalDigits
    ///       ValidDigits = "1"
    /// ```
    pub fn debug_ast_string(&self) -> String {
        let mut output = String::new();
        self.debug_ast_to_string(&mut output, 0);
        output
    }

    fn debug_ast_to_string(&self, output: &mut String, indent: usize) {
        use std::fmt::Write;

        let text_suffix = match &self.text {
            Some(t) => format!(" = {:?}", t),
            None => String::new(),
        };
        let _ = writeln!(output, "{}{:?}{}", "  ".repeat(indent), self.kind, text_suffix);

        for child in &self.children {
            child.debug_ast_to_string(output, indent + 1);
        }
    }
}

/// Tree walker for pre-order traversal
#[derive(Debug)]
pub struct CstWalker<'a> {
    stack: Vec<&'a CstNode>,
}

impl<'a> CstWalker<'a> {
    fn new(root: &'a CstNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for CstWalker<'a> {
    type Item = &'a CstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so we visit them left-to-right
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Test utilities for parser tests
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::*;

    /// Assert that a node has the expected kind, showing the tree on failure.
    pub fn assert_node_kind(node: &CstNode, expected: NodeKind) {
        if node.kind != expected {
            eprintln!("\n=== AST Structure (on assertion failure) ===\n");
            eprintln!("{}", node.debug_ast_string());
            panic!("Expected node kind {:?}, but got {:?}", expected, node.kind);
        }
    }

    /// Assert that a node has the expected text, showing the tree on failure.
    pub fn assert_node_text(node: &CstNode, expected: &str) {
        let actual = node.text.as_deref();
        if actual != Some(expected) {
            eprintln!("\n=== AST Structure (on assertion failure) ===\n");
            eprintln!("{}", node.debug_ast_string());
            panic!("Expected node text {:?}, but got {:?}", expected, actual);
        }
    }

    /// Parse `source` and return its only expression, panicking on errors.
    pub fn parse_expr(source: &str) -> CstNode {
        let file = match crate::parse(source) {
            Ok(file) => file,
            Err(e) => panic!("parse of {:?} failed: {}", source, e),
        };
        let mut expressions = file.significant_children();
        let first = expressions
            .next()
            .unwrap_or_else(|| panic!("no expression in {:?}", source))
            .clone();
        assert!(
            expressions.next().is_none(),
            "more than one expression in {:?}",
            source
        );
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(start, end, 1, 1, start + 1, end + 1)
    }

    fn sample() -> CstNode {
        CstNode::with_children(
            NodeKind::File,
            span(0, 5),
            vec![
                CstNode::leaf(NodeKind::Identifier, span(0, 1), "a"),
                CstNode::leaf(NodeKind::EndOfExpression, span(1, 2), ";"),
                CstNode::leaf(NodeKind::Comment, span(2, 5), "# c"),
            ],
        )
    }

    #[test]
    fn test_leaf() {
        let node = CstNode::leaf(NodeKind::Identifier, span(0, 3), "foo");
        assert_eq!(node.text_str(), Some("foo"));
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_significant_children_skip_trivia() {
        let file = sample();
        let kinds: Vec<_> = file.significant_children().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Identifier]);
    }

    #[test]
    fn test_walk_is_pre_order() {
        let kinds: Vec<_> = sample().walk().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::File,
                NodeKind::Identifier,
                NodeKind::EndOfExpression,
                NodeKind::Comment,
            ]
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let file = sample();
        let restored = CstNode::from_json(&file.to_json()).unwrap();
        assert_eq!(restored, file);
    }

    #[test]
    fn test_from_json_rejects_missing_span() {
        let value = serde_json::json!({ "type": "identifier", "children": [] });
        assert!(CstNode::from_json(&value).is_none());
    }

    #[test]
    fn test_debug_ast_string() {
        let dump = sample().debug_ast_string();
        assert!(dump.starts_with("File\n"));
        assert!(dump.contains("  Identifier = \"a\""));
    }

    #[test]
    fn test_range_of_literals_through_test_helpers() {
        use testing::{assert_node_kind, assert_node_text, parse_expr};

        let range = parse_expr("1.5..2");
        assert_node_kind(&range, NodeKind::BinaryOperation);
        assert_node_kind(&range.children[0], NodeKind::DecimalFloat);
        assert_node_text(&range.children[0], "1.5");
        assert_node_kind(&range.children[1], NodeKind::Operator);
        assert_node_text(&range.children[1], "..");
        assert_node_kind(&range.children[2], NodeKind::DecimalWholeNumber);
    }
}
