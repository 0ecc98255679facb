//! Operator precedence and associativity definitions

use super::Token;

/// Operator precedence levels, lowest first
///
/// Mirrors the operator table of the Elixir reference manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Precedence {
    /// Statement level
    Lowest = 0,
    /// Guard: when
    When = 1,
    /// Type: ::
    Type = 2,
    /// Pipe: |
    Pipe = 3,
    /// Match: =
    Match = 4,
    /// Or: ||, or
    Or = 5,
    /// And: &&, and
    And = 6,
    /// Equality: ==, !=, =~, ===, !==
    Comparison = 7,
    /// Relational: <, >, <=, >=
    Relational = 8,
    /// Arrow: |>, <<<, >>>, <~, ~>
    Arrow = 9,
    /// Membership: in
    In = 10,
    /// Two-operand list/range/binary: ++, --, .., <>
    TwoOp = 11,
    /// Additive: +, -
    Additive = 12,
    /// Multiplicative: *, /
    Multiplicative = 13,
    /// Prefix: !, ^, not, +, -
    Unary = 14,
    /// Module attribute: @
    At = 15,
}

impl TryFrom<i8> for Precedence {
    type Error = ();

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Precedence::Lowest),
            1 => Ok(Precedence::When),
            2 => Ok(Precedence::Type),
            3 => Ok(Precedence::Pipe),
            4 => Ok(Precedence::Match),
            5 => Ok(Precedence::Or),
            6 => Ok(Precedence::And),
            7 => Ok(Precedence::Comparison),
            8 => Ok(Precedence::Relational),
            9 => Ok(Precedence::Arrow),
            10 => Ok(Precedence::In),
            11 => Ok(Precedence::TwoOp),
            12 => Ok(Precedence::Additive),
            13 => Ok(Precedence::Multiplicative),
            14 => Ok(Precedence::Unary),
            15 => Ok(Precedence::At),
            _ => Err(()),
        }
    }
}

impl Precedence {
    /// The next tighter level, used for the right operand of left-associative operators
    pub fn tighter(self) -> Precedence {
        Precedence::try_from(self as i8 + 1).unwrap_or(Precedence::At)
    }
}

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Token {
    /// Get the precedence and associativity of a binary operator
    pub fn binary_precedence(&self) -> Option<(Precedence, Associativity)> {
        use Associativity::{Left, Right};
        use Precedence::*;

        Some(match self {
            Token::KwWhen => (When, Right),
            Token::DoubleColon => (Type, Right),
            Token::Pipe => (Pipe, Right),
            Token::Eq => (Match, Right),
            Token::OrOr | Token::KwOr => (Or, Left),
            Token::AndAnd | Token::KwAnd => (And, Left),

            Token::EqEq | Token::NotEq | Token::EqTilde | Token::EqEqEq | Token::NotEqEq => {
                (Comparison, Left)
            }

            Token::Lt | Token::Gt | Token::LtEq | Token::GtEq => (Relational, Left),

            Token::PipeRight | Token::LtLtLt | Token::GtGtGt | Token::LtTilde | Token::TildeGt => {
                (Arrow, Left)
            }

            Token::KwIn => (In, Left),

            Token::PlusPlus | Token::MinusMinus | Token::DotDot | Token::Concat => (TwoOp, Right),

            Token::Plus | Token::Minus => (Additive, Left),
            Token::Star | Token::Slash => (Multiplicative, Left),

            _ => return None,
        })
    }

    /// Get the precedence of a unary operator
    pub fn unary_precedence(&self) -> Option<Precedence> {
        match self {
            Token::Bang | Token::Caret | Token::KwNot | Token::Plus | Token::Minus => {
                Some(Precedence::Unary)
            }
            Token::At => Some(Precedence::At),
            _ => None,
        }
    }

    /// Source spelling of an operator token
    pub fn operator_text(&self) -> Option<&'static str> {
        Some(match self {
            Token::KwWhen => "when",
            Token::DoubleColon => "::",
            Token::Pipe => "|",
            Token::Eq => "=",
            Token::OrOr => "||",
            Token::KwOr => "or",
            Token::AndAnd => "&&",
            Token::KwAnd => "and",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::EqTilde => "=~",
            Token::EqEqEq => "===",
            Token::NotEqEq => "!==",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::LtEq => "<=",
            Token::GtEq => ">=",
            Token::PipeRight => "|>",
            Token::LtLtLt => "<<<",
            Token::GtGtGt => ">>>",
            Token::LtTilde => "<~",
            Token::TildeGt => "~>",
            Token::KwIn => "in",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::DotDot => "..",
            Token::Concat => "<>",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Bang => "!",
            Token::Caret => "^",
            Token::KwNot => "not",
            Token::At => "@",
            _ => return None,
        })
    }
}
