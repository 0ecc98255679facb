//! Quote parsing: strings, char lists, heredocs and sigils
//!
//! Bodies are split straight from the source bytes into fragment, escape,
//! hexadecimal-escape and interpolation nodes. The lexer has already skipped
//! the literal using the same `scan` routines, so after building the node the
//! parser only needs to resume lexing at the literal's end.

use std::rc::Rc;

use crate::cst::CstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::scan::{self, BodySyntax, EscapeMode};

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse `"…"` or `'…'` starting at the current opener token
    pub(crate) fn parse_line_quote(&mut self, kind: NodeKind) -> ParseResult<CstNode> {
        let open = self.opener("quote")?;
        self.parse_quote_body(kind, open.span.start, open.span.end)
    }

    /// Build a `String`/`CharList` node whose body starts at `body_start`,
    /// then resume lexing after its closing quote
    pub(crate) fn parse_quote_body(
        &mut self,
        kind: NodeKind,
        node_start: usize,
        body_start: usize,
    ) -> ParseResult<CstNode> {
        let (terminator, fragment): (&[u8], _) = if kind == NodeKind::String {
            (b"\"", NodeKind::StringFragment)
        } else {
            (b"'", NodeKind::CharListFragment)
        };
        let syntax = BodySyntax::quoted(terminator);

        let body_end = scan::body_end(self.bytes(), body_start, &syntax).ok_or_else(|| {
            ParseError::unterminated(
                String::from_utf8_lossy(terminator),
                self.span(node_start, self.end),
            )
        })?;
        let body = self.parse_body(body_start, body_end, &syntax, fragment);

        let end = body_end + terminator.len();
        self.resume_at(end);
        Ok(CstNode::with_children(kind, self.span(node_start, end), vec![body]))
    }

    /// Parse a `"""` or `'''` heredoc starting at the current opener token
    pub(crate) fn parse_heredoc(&mut self, kind: NodeKind) -> ParseResult<CstNode> {
        let open = self.opener("heredoc")?;
        let (terminator, fragment): (&[u8], _) = if kind == NodeKind::StringHeredoc {
            (b"\"\"\"", NodeKind::StringFragment)
        } else {
            (b"'''", NodeKind::CharListFragment)
        };
        let syntax = BodySyntax::quoted(terminator);

        let (children, end) = self.parse_heredoc_lines(open.span.start, open.span.end, &syntax, fragment)?;
        self.resume_at(end);
        Ok(CstNode::with_children(kind, self.span(open.span.start, end), children))
    }

    /// Parse `~x/…/mods` or `~x"""…"""mods` starting at the current `~x` token
    pub(crate) fn parse_sigil(&mut self) -> ParseResult<CstNode> {
        let open = self.opener("sigil")?;
        let name_byte = open.text.as_bytes().get(1).copied().unwrap_or(b's');
        let name = CstNode::leaf(
            NodeKind::SigilName,
            self.span(open.span.start + 1, open.span.end),
            &open.text[1..],
        );

        let bytes = self.bytes();
        let rest = &bytes[open.span.end..];
        let heredoc_terminator: Option<[u8; 3]> = if rest.starts_with(b"\"\"\"") {
            Some(*b"\"\"\"")
        } else if rest.starts_with(b"'''") {
            Some(*b"'''")
        } else {
            None
        };

        let (kind, mut children, close) = match heredoc_terminator {
            Some(terminator) => {
                let syntax = BodySyntax::sigil(&terminator, name_byte);
                let (lines, close) = self.parse_heredoc_lines(
                    open.span.start,
                    open.span.end + terminator.len(),
                    &syntax,
                    NodeKind::SigilFragment,
                )?;
                let mut children = vec![name];
                children.extend(lines);
                (NodeKind::SigilHeredoc, children, close)
            }
            None => {
                let delimiter_span = self.span(open.span.start, (open.span.end + 1).min(self.end));
                let terminator = rest
                    .first()
                    .and_then(|open_byte| scan::sigil_terminator(*open_byte))
                    .ok_or_else(|| ParseError::invalid_syntax("invalid sigil delimiter", delimiter_span))?;
                let terminator = [terminator];
                let syntax = BodySyntax::sigil(&terminator, name_byte);

                let body_start = open.span.end + 1;
                let body_end = scan::body_end(bytes, body_start, &syntax).ok_or_else(|| {
                    ParseError::unterminated(
                        String::from_utf8_lossy(&terminator),
                        self.span(open.span.start, self.end),
                    )
                })?;
                let body = self.parse_body(body_start, body_end, &syntax, NodeKind::SigilFragment);
                (NodeKind::Sigil, vec![name, body], body_end + 1)
            }
        };

        let end = scan::modifiers_end(bytes, close);
        children.push(CstNode::leaf(
            NodeKind::SigilModifiers,
            self.span(close, end),
            &self.source[close..end],
        ));

        self.resume_at(end);
        Ok(CstNode::with_children(kind, self.span(open.span.start, end), children))
    }

    /// Parse the lines of a heredoc whose opener ends at `opener_end`
    ///
    /// Returns `[HeredocLine…, HeredocPrefix]` and the offset just past the
    /// closing delimiter.
    fn parse_heredoc_lines(
        &mut self,
        node_start: usize,
        opener_end: usize,
        syntax: &BodySyntax<'_>,
        fragment: NodeKind,
    ) -> ParseResult<(Vec<CstNode>, usize)> {
        let bytes = self.bytes();
        let body_start = scan::heredoc_body_start(bytes, opener_end).ok_or_else(|| {
            ParseError::HeredocStartsOnSameLine {
                span: self.span(node_start, opener_end),
            }
        })?;
        let close = scan::heredoc_close(bytes, body_start, syntax).ok_or_else(|| {
            ParseError::unterminated(
                String::from_utf8_lossy(syntax.terminator),
                self.span(node_start, self.end),
            )
        })?;

        let mut children = Vec::new();
        let mut line_start = body_start;
        while line_start < close.line_start {
            let indent_end = scan::line_indent_end(bytes, line_start);
            let line_end = scan::heredoc_line_end(bytes, indent_end, syntax);
            // CRLF ends the line like LF
            let body_end = if line_end > indent_end && bytes[line_end - 1] == b'\r' {
                line_end - 1
            } else {
                line_end
            };

            let prefix = CstNode::leaf(
                NodeKind::HeredocLinePrefix,
                self.span(line_start, indent_end),
                &self.source[line_start..indent_end],
            );
            let body = self.parse_body(indent_end, body_end, syntax, fragment);
            children.push(CstNode::with_children(
                NodeKind::HeredocLine,
                self.span(line_start, line_end),
                vec![prefix, body],
            ));

            line_start = line_end + 1;
        }

        children.push(CstNode::leaf(
            NodeKind::HeredocPrefix,
            self.span(close.line_start, close.delimiter_start),
            &self.source[close.line_start..close.delimiter_start],
        ));

        Ok((children, close.delimiter_start + syntax.terminator.len()))
    }

    /// Split `start..end` into an `InterpolatedBody` of fragments, escapes and interpolations
    fn parse_body(
        &mut self,
        start: usize,
        end: usize,
        syntax: &BodySyntax<'_>,
        fragment: NodeKind,
    ) -> CstNode {
        let bytes = self.bytes();
        let mut children = Vec::new();
        let mut fragment_start = start;
        let mut pos = start;

        while pos < end {
            match bytes[pos] {
                b'\\' => {
                    let Some(len) = scan::escape_len(bytes, pos, syntax) else {
                        pos += 1;
                        continue;
                    };
                    self.push_fragment(&mut children, fragment, fragment_start, pos);
                    let is_hex = syntax.escapes == EscapeMode::All
                        && matches!(bytes.get(pos + 1), Some(b'x' | b'u'));
                    let next = if is_hex {
                        let (node, next) = self.parse_hex_escape(pos, end);
                        children.push(node);
                        next
                    } else {
                        let next = (pos + len).min(end);
                        children.push(CstNode::leaf(
                            NodeKind::EscapedCharacter,
                            self.span(pos, next),
                            &self.source[pos..next],
                        ));
                        next
                    };
                    pos = next;
                    fragment_start = next;
                }
                b'#' if syntax.interpolate && bytes.get(pos + 1) == Some(&b'{') => {
                    self.push_fragment(&mut children, fragment, fragment_start, pos);
                    let Some(close) = scan::interpolation_end(bytes, pos + 2).filter(|c| *c < end) else {
                        self.errors.push(ParseError::UnterminatedInterpolation {
                            span: self.span(pos, end),
                        });
                        fragment_start = end;
                        break;
                    };
                    children.push(self.parse_interpolation(pos, close));
                    pos = close + 1;
                    fragment_start = pos;
                }
                _ => pos += 1,
            }
        }
        self.push_fragment(&mut children, fragment, fragment_start, end);

        CstNode::with_children(NodeKind::InterpolatedBody, self.span(start, end), children)
    }

    fn push_fragment(&self, children: &mut Vec<CstNode>, kind: NodeKind, start: usize, end: usize) {
        if start < end {
            children.push(CstNode::leaf(kind, self.span(start, end), &self.source[start..end]));
        }
    }

    /// Parse `\xH`, `\xHH`, `\x{H…}`, `\uHHHH` or `\u{H…}` at `pos`
    ///
    /// A well-formed escape gets a `ValidHexadecimalDigits` child; a
    /// malformed one keeps its text without it.
    fn parse_hex_escape(&self, pos: usize, end: usize) -> (CstNode, usize) {
        let bytes = self.bytes();
        let unicode = bytes[pos + 1] == b'u';
        let digits_start = pos + 2;

        let braced = digits_start < end && bytes[digits_start] == b'{';
        let (digits_end, next, valid) = if braced {
            let inner = digits_start + 1;
            match memchr::memchr(b'}', &bytes[inner..end]) {
                Some(offset) => {
                    let close = inner + offset;
                    let digits = &bytes[inner..close];
                    let valid = (1..=6).contains(&digits.len())
                        && digits.iter().all(|b| b.is_ascii_hexdigit());
                    (close, close + 1, valid)
                }
                None => (inner, inner, false),
            }
        } else {
            let max = if unicode { 4 } else { 2 };
            let mut cursor = digits_start;
            while cursor < end && cursor - digits_start < max && bytes[cursor].is_ascii_hexdigit() {
                cursor += 1;
            }
            let count = cursor - digits_start;
            let valid = if unicode { count == 4 } else { count >= 1 };
            (cursor, cursor, valid)
        };

        let mut node = CstNode::leaf(
            NodeKind::HexadecimalEscapeSequence,
            self.span(pos, next),
            &self.source[pos..next],
        );
        if valid {
            let digits_start = if braced { digits_start + 1 } else { digits_start };
            node.push_child(CstNode::leaf(
                NodeKind::ValidHexadecimalDigits,
                self.span(digits_start, digits_end),
                &self.source[digits_start..digits_end],
            ));
        }
        (node, next)
    }

    /// Parse `#{…}` whose `#` is at `start` and closing `}` at `close`
    fn parse_interpolation(&mut self, start: usize, close: usize) -> CstNode {
        let mut inner = Parser::with_range(self.source, Rc::clone(&self.source_map), start + 2, close);
        inner.advance();
        let children = inner.parse_statements(None);
        self.errors.extend(inner.errors);

        CstNode::with_children(NodeKind::Interpolation, self.span(start, close + 1), children)
    }

    /// Source bytes up to the end of the parsed range
    pub(crate) fn bytes(&self) -> &'a [u8] {
        &self.source.as_bytes()[..self.end]
    }
}
