//! Bracketed forms: explicit blocks, lists, tuples and call arguments

use crate::cst::CstNode;
use crate::error::ParseResult;
use crate::node_kind::NodeKind;
use crate::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse `( … )` as an explicit block of zero or more statements
    ///
    /// Separators and comments inside the parentheses stay in the tree as
    /// trivia children, the same way they do at file level.
    pub(crate) fn parse_block(&mut self) -> ParseResult<CstNode> {
        let open = self.expect(Token::LParen, "'('")?;
        let children = self.parse_statements(Some(&Token::RParen));
        let close = self.expect(Token::RParen, "')'")?;

        let span = self.span(open.span.start, close.span.end);
        Ok(CstNode::with_children(NodeKind::Block, span, children))
    }

    /// Parse `[a, b, …]`
    pub(crate) fn parse_list(&mut self) -> ParseResult<CstNode> {
        self.parse_delimited(NodeKind::List, Token::LBracket, Token::RBracket, "']'")
    }

    /// Parse `{a, b, …}`
    pub(crate) fn parse_tuple(&mut self) -> ParseResult<CstNode> {
        self.parse_delimited(NodeKind::Tuple, Token::LBrace, Token::RBrace, "'}'")
    }

    /// Parse the parenthesised argument list of a call
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<CstNode> {
        self.parse_delimited(NodeKind::Arguments, Token::LParen, Token::RParen, "')'")
    }

    /// Comma-separated expressions between `open` and `close`
    ///
    /// Newlines and comments between elements are skipped; a trailing comma
    /// before `close` is allowed.
    fn parse_delimited(
        &mut self,
        kind: NodeKind,
        open: Token,
        close: Token,
        close_description: &str,
    ) -> ParseResult<CstNode> {
        let open_token = self.expect(open, "opening bracket")?;
        let mut elements = Vec::new();

        loop {
            self.skip_trivia();
            if self.check(&close) {
                break;
            }

            elements.push(self.parse_expression()?);
            self.skip_trivia();

            if self.check(&Token::Comma) {
                self.bump("','")?;
                continue;
            }
            break;
        }

        let close_token = self.expect(close, close_description)?;
        let span = self.span(open_token.span.start, close_token.span.end);
        Ok(CstNode::with_children(kind, span, elements))
    }
}
