//! Postfix `.` and call parsing

use crate::cst::CstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::token::Token;

use super::super::Parser;

impl<'a> Parser<'a> {
    /// Try to extend `left` with `.Alias` or `.fun(args)`
    ///
    /// Returns `Ok(None)` when no `.` follows.
    pub(crate) fn try_parse_postfix(&mut self, left: &CstNode) -> ParseResult<Option<CstNode>> {
        if !self.check(&Token::Dot) {
            return Ok(None);
        }
        self.bump("'.'")?;

        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("alias or function name", self.current_span()))?
            .clone();

        match token.token {
            Token::Alias => {
                let alias = self.parse_leaf(NodeKind::Alias)?;
                let span = left.span.merge(&alias.span);
                Ok(Some(CstNode::with_children(
                    NodeKind::QualifiedAlias,
                    span,
                    vec![left.clone(), alias],
                )))
            }
            Token::Identifier => {
                let name = self.parse_leaf(NodeKind::Identifier)?;
                if !self.at_adjacent_paren(&name) {
                    return Err(ParseError::UnsupportedSyntax {
                        construct: "remote call without parentheses".to_string(),
                        span: name.span,
                    });
                }
                let arguments = self.parse_arguments()?;
                let span = left.span.merge(&arguments.span);
                Ok(Some(CstNode::with_children(
                    NodeKind::RemoteCall,
                    span,
                    vec![left.clone(), name, arguments],
                )))
            }
            _ => Err(ParseError::unexpected_token(
                token.text,
                "alias or function name after '.'",
                token.span,
            )),
        }
    }

    /// Parse an identifier, or a local call when `(` follows without a gap
    pub(crate) fn parse_identifier_or_call(&mut self) -> ParseResult<CstNode> {
        let name = self.parse_leaf(NodeKind::Identifier)?;
        if !self.at_adjacent_paren(&name) {
            return Ok(name);
        }

        let arguments = self.parse_arguments()?;
        let span = name.span.merge(&arguments.span);
        Ok(CstNode::with_children(NodeKind::Call, span, vec![name, arguments]))
    }

    /// Whether the current token is a `(` directly after `name` (no whitespace)
    fn at_adjacent_paren(&self, name: &CstNode) -> bool {
        self.current
            .as_ref()
            .is_some_and(|t| t.token == Token::LParen && t.span.start == name.span.end)
    }
}
