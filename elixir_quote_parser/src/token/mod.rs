//! Token definitions for the Elixir lexer
//!
//! Quoted bodies (strings, char lists, heredocs, sigils and quoted atoms) are
//! not tokenized here: the lexer only recognises their opening delimiter and
//! the parser scans the body from the source bytes.

mod precedence;


use logos::Logos;

pub use precedence::{Associativity, Precedence};

/// Elixir tokens
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\f]+")] // Skip whitespace (but not newlines)
pub enum Token {
    // ==================== Keywords ====================
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,
    #[token("when")]
    KwWhen,
    #[token("and")]
    KwAnd,
    #[token("or")]
    KwOr,
    #[token("not")]
    KwNot,
    #[token("in")]
    KwIn,
    // Block keywords are lexed so they are never mistaken for identifiers;
    // the parser rejects them.
    #[token("do")]
    KwDo,
    #[token("end")]
    KwEnd,
    #[token("fn")]
    KwFn,

    // ==================== Delimiters ====================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,

    // ==================== Quote openers ====================
    #[token("\"")]
    DoubleQuote,
    #[token("\"\"\"")]
    TripleDoubleQuote,
    #[token("'")]
    SingleQuote,
    #[token("'''")]
    TripleSingleQuote,
    #[token(":\"")]
    AtomDoubleQuote,
    #[token(":'")]
    AtomSingleQuote,
    /// `~r`, `~s`, `~S`, ...
    #[regex(r"~[a-zA-Z]")]
    SigilStart,

    // ==================== Operators ====================
    #[token("@")]
    At,
    #[token("!")]
    Bang,
    #[token("^")]
    Caret,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("..")]
    DotDot,
    #[token("<>")]
    Concat,
    #[token("|>")]
    PipeRight,
    #[token("<<<")]
    LtLtLt,
    #[token(">>>")]
    GtGtGt,
    #[token("<~")]
    LtTilde,
    #[token("~>")]
    TildeGt,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=~")]
    EqTilde,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("=")]
    Eq,
    #[token("|")]
    Pipe,
    #[token("::")]
    DoubleColon,

    // Recognised so the parser can report them as unsupported
    #[token(":")]
    Colon,
    #[token("&")]
    Amp,
    #[token("->")]
    Arrow,

    // ==================== Literals ====================
    #[token("0b")]
    BinaryPrefix,
    #[token("0o")]
    OctalPrefix,
    #[token("0x")]
    HexadecimalPrefix,
    #[regex(r"[0-9]([0-9]|_[0-9])*")]
    DecimalLiteral,
    /// Produced by the lexer when a decimal run continues with `.digits`
    FloatLiteral,
    /// `?a`, `?\n`
    #[regex(r"\?(\\[^\n]|[^\\\n])")]
    CharLiteral,
    /// `:foo`, `:Foo`, `:foo?`, `:+`
    #[regex(r":[a-zA-Z_][a-zA-Z0-9_@]*[?!]?")]
    #[regex(r":(\+\+|--|\+|-|\*|/|===|!==|==|!=|=~|<=|>=|<>|<|>|&&|\|\||!|\|>|\.\.|::|=|@|\^|\.)")]
    Atom,

    // ==================== Names ====================
    #[regex(r"[a-z_][a-zA-Z0-9_]*[?!]?")]
    Identifier,
    #[regex(r"[A-Z][a-zA-Z0-9_]*")]
    Alias,

    // ==================== Trivia ====================
    #[regex(r"\r?\n")]
    Newline,
    #[regex(r"#[^\n]*")]
    Comment,
}

impl Token {
    /// Whether this token ends a statement
    pub fn is_end_of_expression(&self) -> bool {
        matches!(self, Token::Newline | Token::Semicolon)
    }

    /// Whether the parser should skip this token between list elements and
    /// after binary operators
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Newline | Token::Comment)
    }

    /// Base of a whole-number prefix token
    pub fn number_base(&self) -> Option<u32> {
        match self {
            Token::BinaryPrefix => Some(2),
            Token::OctalPrefix => Some(8),
            Token::HexadecimalPrefix => Some(16),
            Token::DecimalLiteral => Some(10),
            _ => None,
        }
    }

    /// Keywords and block syntax outside the supported subset
    pub fn unsupported_syntax(&self) -> Option<&'static str> {
        match self {
            Token::KwDo => Some("do"),
            Token::KwEnd => Some("end"),
            Token::KwFn => Some("fn"),
            Token::Colon => Some(":"),
            Token::Amp => Some("&"),
            Token::Arrow => Some("->"),
            _ => None,
        }
    }
}
