//! Expression parsing (Pratt parser)
//!
//! Handles:
//! - Binary and unary operators with precedence climbing
//! - Postfix `.` (qualified aliases and remote calls) and local calls

mod postfix;
mod primary;

use crate::cst::CstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::token::{Associativity, Precedence};

use super::Parser;

impl<'a> Parser<'a> {
    // ==================== Expression Parsing (Pratt Parser) ====================

    /// Parse an expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<CstNode> {
        self.parse_expression_with_precedence(Precedence::Lowest)
    }

    /// Parse an expression with minimum precedence (Pratt parser core)
    pub(crate) fn parse_expression_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> ParseResult<CstNode> {
        let mut left = self.parse_prefix()?;

        loop {
            let Some(token) = self.current.as_ref() else {
                break;
            };
            let Some((prec, assoc)) = token.token.binary_precedence() else {
                break;
            };
            if prec < min_prec {
                break;
            }

            let op_token = self.bump("operator")?;
            // Line continuation after a binary operator
            self.skip_trivia();

            let next_prec = match assoc {
                Associativity::Left => prec.tighter(),
                Associativity::Right => prec,
            };
            let right = self.parse_expression_with_precedence(next_prec)?;

            let span = left.span.merge(&right.span);
            let op_node = CstNode::leaf(NodeKind::Operator, op_token.span, op_token.text);
            left = CstNode::with_children(NodeKind::BinaryOperation, span, vec![left, op_node, right]);
        }

        Ok(left)
    }

    /// Parse a prefix expression (unary operator or primary)
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<CstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?;

        if let Some(prec) = token.token.unary_precedence() {
            let op_token = self.bump("unary operator")?;
            // `-a + b` is `(-a) + b`: the operand stops at anything looser than the operator
            let operand = self.parse_expression_with_precedence(prec)?;

            let span = op_token.span.merge(&operand.span);
            let op_node = CstNode::leaf(NodeKind::Operator, op_token.span, op_token.text);
            return Ok(CstNode::with_children(
                NodeKind::UnaryOperation,
                span,
                vec![op_node, operand],
            ));
        }

        self.parse_primary_with_postfix()
    }

    /// Parse a primary expression followed by any `.` postfix operations
    fn parse_primary_with_postfix(&mut self) -> ParseResult<CstNode> {
        let mut left = self.parse_primary()?;

        while let Some(postfix) = self.try_parse_postfix(&left)? {
            left = postfix;
        }

        Ok(left)
    }
}
