//! Primary expression parsing

use crate::cst::CstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::token::Token;

use super::super::Parser;

impl<'a> Parser<'a> {
    /// Parse a primary expression (literal, name, quote or bracketed form)
    pub(crate) fn parse_primary(&mut self) -> ParseResult<CstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?
            .clone();

        match &token.token {
            // Numbers
            Token::DecimalLiteral => self.parse_decimal_whole_number(),
            Token::BinaryPrefix | Token::OctalPrefix | Token::HexadecimalPrefix => {
                self.parse_prefixed_whole_number()
            }
            Token::FloatLiteral => self.parse_leaf(NodeKind::DecimalFloat),
            Token::CharLiteral => self.parse_leaf(NodeKind::CharToken),

            // Names
            Token::Identifier => self.parse_identifier_or_call(),
            Token::Alias => self.parse_leaf(NodeKind::Alias),
            Token::Atom => self.parse_atom(),
            Token::AtomDoubleQuote | Token::AtomSingleQuote => self.parse_quoted_atom(),
            Token::True | Token::False | Token::Nil => self.parse_leaf(NodeKind::AtomKeyword),

            // Quotes
            Token::DoubleQuote => self.parse_line_quote(NodeKind::String),
            Token::SingleQuote => self.parse_line_quote(NodeKind::CharList),
            Token::TripleDoubleQuote => self.parse_heredoc(NodeKind::StringHeredoc),
            Token::TripleSingleQuote => self.parse_heredoc(NodeKind::CharListHeredoc),
            Token::SigilStart => self.parse_sigil(),

            // Bracketed forms
            Token::LParen => self.parse_block(),
            Token::LBracket => self.parse_list(),
            Token::LBrace => self.parse_tuple(),

            other => {
                let span = token.span;
                match other.unsupported_syntax() {
                    Some(construct) => Err(ParseError::UnsupportedSyntax {
                        construct: construct.to_string(),
                        span,
                    }),
                    None => Err(ParseError::unexpected_token(token.text, "expression", span)),
                }
            }
        }
    }

    /// Consume the current token as a leaf node of `kind`
    pub(crate) fn parse_leaf(&mut self, kind: NodeKind) -> ParseResult<CstNode> {
        let token = self.bump(kind.as_str())?;
        Ok(CstNode::leaf(kind, token.span, token.text))
    }
}
