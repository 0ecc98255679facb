//! Byte-level scanning of quoted literals
//!
//! The lexer uses these to step over a whole string, heredoc or sigil in one
//! go; the parser uses the same routines to split a body into fragments,
//! escapes and interpolations, so both always agree on where a literal ends.

use crate::token::Token;

/// How a backslash behaves inside a quote body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// Backslash escapes the following character
    All,
    /// Backslash only escapes the closing delimiter (uppercase sigils)
    TerminatorOnly,
}

/// Delimiter and escaping rules of one quote body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySyntax<'d> {
    pub terminator: &'d [u8],
    pub escapes: EscapeMode,
    pub interpolate: bool,
}

impl<'d> BodySyntax<'d> {
    /// String or char list rules: escapes and interpolation enabled
    pub fn quoted(terminator: &'d [u8]) -> Self {
        Self {
            terminator,
            escapes: EscapeMode::All,
            interpolate: true,
        }
    }

    /// Sigil rules: lowercase sigils interpolate and escape, uppercase ones do neither
    pub fn sigil(terminator: &'d [u8], name: u8) -> Self {
        if name.is_ascii_lowercase() {
            Self::quoted(terminator)
        } else {
            Self {
                terminator,
                escapes: EscapeMode::TerminatorOnly,
                interpolate: false,
            }
        }
    }
}

/// Why a quoted literal could not be delimited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// No closing delimiter before end of input
    Unterminated(String),
    /// Something other than whitespace follows a heredoc opener on its line
    HeredocStartsOnSameLine,
    /// Character after `~x` is not a sigil delimiter
    InvalidSigilDelimiter,
}

/// Width in bytes of the UTF-8 sequence introduced by `lead`
pub fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Length of the escape sequence whose backslash sits at `pos`,
/// or `None` if the backslash is literal text
pub fn escape_len(bytes: &[u8], pos: usize, syntax: &BodySyntax<'_>) -> Option<usize> {
    let next = *bytes.get(pos + 1)?;
    match syntax.escapes {
        EscapeMode::All => Some(1 + utf8_width(next)),
        EscapeMode::TerminatorOnly => {
            if bytes[pos + 1..].starts_with(syntax.terminator) {
                Some(1 + syntax.terminator.len())
            } else {
                None
            }
        }
    }
}

/// Index of the `}` closing an interpolation whose contents start at `start`
pub fn interpolation_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = start;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return Some(pos);
                }
                depth -= 1;
            }
            quote @ (b'"' | b'\'') => {
                let terminator = [quote];
                let close = body_end(bytes, pos + 1, &BodySyntax::quoted(&terminator))?;
                pos = close + 1;
                continue;
            }
            b'#' => {
                // Comment runs to end of line
                pos = memchr::memchr(b'\n', &bytes[pos..]).map_or(bytes.len(), |n| pos + n);
                continue;
            }
            b'?' if pos == start || !is_identifier_byte(bytes[pos - 1]) => {
                // Character literal: `?}` or `?\}`
                pos += 1;
                if bytes.get(pos) == Some(&b'\\') {
                    pos += 1;
                }
                pos += bytes.get(pos).map_or(0, |b| utf8_width(*b));
                continue;
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Index where the terminator of a body starting at `start` begins
pub fn body_end(bytes: &[u8], start: usize, syntax: &BodySyntax<'_>) -> Option<usize> {
    let first = *syntax.terminator.first()?;
    let mut pos = start;

    while pos < bytes.len() {
        pos += memchr::memchr3(b'\\', b'#', first, &bytes[pos..])?;
        if bytes[pos..].starts_with(syntax.terminator) {
            return Some(pos);
        }
        match bytes[pos] {
            b'\\' => pos += escape_len(bytes, pos, syntax).unwrap_or(1),
            b'#' if syntax.interpolate && bytes.get(pos + 1) == Some(&b'{') => {
                pos = interpolation_end(bytes, pos + 2)? + 1;
            }
            _ => pos += 1,
        }
    }
    None
}

/// Start of the first heredoc line after an opener ending at `start`
pub fn heredoc_body_start(bytes: &[u8], start: usize) -> Option<usize> {
    let pos = line_indent_end(bytes, start);
    if bytes[pos..].starts_with(b"\r\n") {
        Some(pos + 2)
    } else if bytes.get(pos) == Some(&b'\n') {
        Some(pos + 1)
    } else {
        None
    }
}

/// End of the leading spaces and tabs of the line starting at `start`
pub fn line_indent_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
        pos += 1;
    }
    pos
}

/// Index of the newline ending the heredoc line that starts at `start`
/// (the input length when the line is the last one)
///
/// Escaped newlines and interpolations spanning several lines stay inside
/// the line.
pub fn heredoc_line_end(bytes: &[u8], start: usize, syntax: &BodySyntax<'_>) -> usize {
    let mut pos = start;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => return pos,
            b'\\' => pos += escape_len(bytes, pos, syntax).unwrap_or(1),
            b'#' if syntax.interpolate && bytes.get(pos + 1) == Some(&b'{') => {
                match interpolation_end(bytes, pos + 2) {
                    Some(close) => pos = close + 1,
                    None => return bytes.len(),
                }
            }
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// Location of a heredoc's closing delimiter line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeredocClose {
    /// Start of the closing line
    pub line_start: usize,
    /// Start of the closing delimiter (end of its whitespace prefix)
    pub delimiter_start: usize,
}

/// Find the line whose first non-blank text is the heredoc terminator
pub fn heredoc_close(bytes: &[u8], body_start: usize, syntax: &BodySyntax<'_>) -> Option<HeredocClose> {
    let mut line_start = body_start;
    loop {
        let indent_end = line_indent_end(bytes, line_start);
        if bytes[indent_end..].starts_with(syntax.terminator) {
            return Some(HeredocClose {
                line_start,
                delimiter_start: indent_end,
            });
        }
        let line_end = heredoc_line_end(bytes, indent_end, syntax);
        if line_end >= bytes.len() {
            return None;
        }
        line_start = line_end + 1;
    }
}

/// Closing delimiter for a sigil opened with `open`
pub fn sigil_terminator(open: u8) -> Option<u8> {
    match open {
        b'/' | b'|' | b'"' | b'\'' => Some(open),
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

/// End of the modifier letters following a sigil terminator
pub fn modifiers_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    pos
}

fn heredoc_end(bytes: &[u8], start: usize, syntax: &BodySyntax<'_>) -> Result<usize, LiteralError> {
    let body_start = heredoc_body_start(bytes, start).ok_or(LiteralError::HeredocStartsOnSameLine)?;
    let close = heredoc_close(bytes, body_start, syntax).ok_or_else(|| unterminated(syntax))?;
    Ok(close.delimiter_start + syntax.terminator.len())
}

fn unterminated(syntax: &BodySyntax<'_>) -> LiteralError {
    LiteralError::Unterminated(String::from_utf8_lossy(syntax.terminator).into_owned())
}

fn digits_end(bytes: &[u8], start: usize) -> Option<usize> {
    if !bytes.get(start)?.is_ascii_digit() {
        return None;
    }
    let mut pos = start + 1;
    loop {
        match bytes.get(pos) {
            Some(b) if b.is_ascii_digit() => pos += 1,
            Some(b'_') if bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) => pos += 2,
            _ => return Some(pos),
        }
    }
}

/// End of the fraction and exponent following a decimal run that ends at `start`
///
/// A `.` only starts a fraction when a digit follows it, so `1..2` stays a
/// range. The exponent is taken only when it has digits.
pub fn float_end(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'.') {
        return None;
    }
    let fraction_end = digits_end(bytes, start + 1)?;
    let exponent_end = match bytes.get(fraction_end) {
        Some(b'e' | b'E') => {
            let sign = usize::from(matches!(bytes.get(fraction_end + 1), Some(b'+' | b'-')));
            let digits = fraction_end + 1 + sign;
            let mut pos = digits;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
            if pos > digits { pos } else { fraction_end }
        }
        _ => fraction_end,
    };
    Some(exponent_end)
}

/// End offset of the quoted literal opened by `token`, whose opener ends at `start`
///
/// Returns `Ok(None)` for tokens that do not open a quoted literal.
pub fn literal_end(
    bytes: &[u8],
    token: &Token,
    opener: &str,
    start: usize,
) -> Result<Option<usize>, LiteralError> {
    let end = match token {
        Token::DoubleQuote | Token::AtomDoubleQuote => {
            let syntax = BodySyntax::quoted(b"\"");
            body_end(bytes, start, &syntax).ok_or_else(|| unterminated(&syntax))? + 1
        }
        Token::SingleQuote | Token::AtomSingleQuote => {
            let syntax = BodySyntax::quoted(b"'");
            body_end(bytes, start, &syntax).ok_or_else(|| unterminated(&syntax))? + 1
        }
        Token::TripleDoubleQuote => heredoc_end(bytes, start, &BodySyntax::quoted(b"\"\"\""))?,
        Token::TripleSingleQuote => heredoc_end(bytes, start, &BodySyntax::quoted(b"'''"))?,
        Token::SigilStart => {
            let name = opener.as_bytes().get(1).copied().unwrap_or(b's');
            let rest = &bytes[start..];
            let close = if rest.starts_with(b"\"\"\"") || rest.starts_with(b"'''") {
                heredoc_end(bytes, start + 3, &BodySyntax::sigil(&rest[..3], name))?
            } else {
                let open = *rest.first().ok_or(LiteralError::InvalidSigilDelimiter)?;
                let terminator = [sigil_terminator(open).ok_or(LiteralError::InvalidSigilDelimiter)?];
                let syntax = BodySyntax::sigil(&terminator, name);
                body_end(bytes, start + 1, &syntax).ok_or_else(|| unterminated(&syntax))? + 1
            };
            modifiers_end(bytes, close)
        }
        _ => return Ok(None),
    };
    Ok(Some(end))
}
