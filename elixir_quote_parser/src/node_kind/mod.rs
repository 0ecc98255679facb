//! Node kinds for the Elixir CST
//!
//! Quote bodies keep one node per fragment, escape and interpolation so the
//! lowering pass can rebuild the exact code point sequence.

mod convert;
mod predicates;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// CST node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // ==================== Top Level ====================
    /// Root node: the whole source file
    File,
    /// Newline or `;` between expressions
    EndOfExpression,
    /// `# ...` line comment
    Comment,

    // ==================== Numbers ====================
    /// `123`, `1_000`
    DecimalWholeNumber,
    /// `0b1010`
    BinaryWholeNumber,
    /// `0o777`
    OctalWholeNumber,
    /// `0xFF`
    HexadecimalWholeNumber,
    /// `0b`, `0o` or `0x`
    BasePrefix,
    /// Digit run of a decimal whole number
    DecimalDigits,
    /// Digit run of a binary whole number
    BinaryDigits,
    /// Digit run of an octal whole number
    OctalDigits,
    /// Digit run of a hexadecimal whole number
    HexadecimalDigits,
    /// Digits valid in the enclosing base
    ValidDigits,
    /// Characters not valid in the enclosing base (`0b12` has `2`)
    InvalidDigits,
    /// `1.5`, `1.0e10`
    DecimalFloat,
    /// `?a`
    CharToken,

    // ==================== Names ====================
    /// `foo`
    Identifier,
    /// `Foo`
    Alias,
    /// `Foo.Bar`: [qualifier, Alias]
    QualifiedAlias,
    /// `:foo`, `:"foo"`, `:'foo'`
    Atom,
    /// Name part of a bare atom (text without the leading colon)
    AtomFragment,
    /// `true`, `false`, `nil`
    AtomKeyword,

    // ==================== Quotes ====================
    /// `"..."`
    String,
    /// `'...'`
    CharList,
    /// `"""` heredoc
    StringHeredoc,
    /// `'''` heredoc
    CharListHeredoc,
    /// One line of a heredoc: [HeredocLinePrefix, InterpolatedBody]
    HeredocLine,
    /// Leading whitespace of a heredoc line
    HeredocLinePrefix,
    /// Whitespace before the closing heredoc delimiter
    HeredocPrefix,
    /// Body of a quote or heredoc line
    InterpolatedBody,
    /// Literal text in a string body
    StringFragment,
    /// Literal text in a char list body
    CharListFragment,
    /// Literal text in a sigil body
    SigilFragment,
    /// `\n`, `\"`, ...
    EscapedCharacter,
    /// `\x41`, `\x{41}`, `\u0041`, `\u{41}`
    HexadecimalEscapeSequence,
    /// Digits of a well-formed hexadecimal escape
    ValidHexadecimalDigits,
    /// `#{...}`
    Interpolation,
    /// `~r/.../i`: [SigilName, InterpolatedBody, SigilModifiers]
    Sigil,
    /// `~S"""..."""`: [SigilName, HeredocLine..., HeredocPrefix, SigilModifiers]
    SigilHeredoc,
    /// Sigil letter
    SigilName,
    /// Trailing sigil modifier letters (possibly empty)
    SigilModifiers,

    // ==================== Expressions ====================
    /// [Operator, operand]
    UnaryOperation,
    /// [left, Operator, right]
    BinaryOperation,
    /// Operator spelling
    Operator,
    /// `(a; b)`
    Block,
    /// `[a, b]`
    List,
    /// `{a, b}`
    Tuple,
    /// `foo(a)`: [Identifier, Arguments]
    Call,
    /// `Mod.fun(a)`: [receiver, Identifier, Arguments]
    RemoteCall,
    /// Parenthesized call arguments
    Arguments,

    // ==================== Other ====================
    /// Unknown node type (fallback)
    Unknown,
}

impl NodeKind {
    /// Returns all NodeKind variants.
    ///
    /// The exhaustive match in `variant_count()` fails to compile when a
    /// variant is missing from this list.
    pub fn all_variants() -> &'static [NodeKind] {
        &[
            NodeKind::File,
            NodeKind::EndOfExpression,
            NodeKind::Comment,
            NodeKind::DecimalWholeNumber,
            NodeKind::BinaryWholeNumber,
            NodeKind::OctalWholeNumber,
            NodeKind::HexadecimalWholeNumber,
            NodeKind::BasePrefix,
            NodeKind::DecimalDigits,
            NodeKind::BinaryDigits,
            NodeKind::OctalDigits,
            NodeKind::HexadecimalDigits,
            NodeKind::ValidDigits,
            NodeKind::InvalidDigits,
            NodeKind::DecimalFloat,
            NodeKind::CharToken,
            NodeKind::Identifier,
            NodeKind::Alias,
            NodeKind::QualifiedAlias,
            NodeKind::Atom,
            NodeKind::AtomFragment,
            NodeKind::AtomKeyword,
            NodeKind::String,
            NodeKind::CharList,
            NodeKind::StringHeredoc,
            NodeKind::CharListHeredoc,
            NodeKind::HeredocLine,
            NodeKind::HeredocLinePrefix,
            NodeKind::HeredocPrefix,
            NodeKind::InterpolatedBody,
            NodeKind::StringFragment,
            NodeKind::CharListFragment,
            NodeKind::SigilFragment,
            NodeKind::EscapedCharacter,
            NodeKind::HexadecimalEscapeSequence,
            NodeKind::ValidHexadecimalDigits,
            NodeKind::Interpolation,
            NodeKind::Sigil,
            NodeKind::SigilHeredoc,
            NodeKind::SigilName,
            NodeKind::SigilModifiers,
            NodeKind::UnaryOperation,
            NodeKind::BinaryOperation,
            NodeKind::Operator,
            NodeKind::Block,
            NodeKind::List,
            NodeKind::Tuple,
            NodeKind::Call,
            NodeKind::RemoteCall,
            NodeKind::Arguments,
            NodeKind::Unknown,
        ]
    }

    #[cfg(test)]
    fn variant_count() -> usize {
        // No wildcard: a new variant without an arm here is a compile error.
        fn _exhaustive_check(k: NodeKind) -> u8 {
            match k {
                NodeKind::File => 0,
                NodeKind::EndOfExpression => 0,
                NodeKind::Comment => 0,
                NodeKind::DecimalWholeNumber => 0,
                NodeKind::BinaryWholeNumber => 0,
                NodeKind::OctalWholeNumber => 0,
                NodeKind::HexadecimalWholeNumber => 0,
                NodeKind::BasePrefix => 0,
                NodeKind::DecimalDigits => 0,
                NodeKind::BinaryDigits => 0,
                NodeKind::OctalDigits => 0,
                NodeKind::HexadecimalDigits => 0,
                NodeKind::ValidDigits => 0,
                NodeKind::InvalidDigits => 0,
                NodeKind::DecimalFloat => 0,
                NodeKind::CharToken => 0,
                NodeKind::Identifier => 0,
                NodeKind::Alias => 0,
                NodeKind::QualifiedAlias => 0,
                NodeKind::Atom => 0,
                NodeKind::AtomFragment => 0,
                NodeKind::AtomKeyword => 0,
                NodeKind::String => 0,
                NodeKind::CharList => 0,
                NodeKind::StringHeredoc => 0,
                NodeKind::CharListHeredoc => 0,
                NodeKind::HeredocLine => 0,
                NodeKind::HeredocLinePrefix => 0,
                NodeKind::HeredocPrefix => 0,
                NodeKind::InterpolatedBody => 0,
                NodeKind::StringFragment => 0,
                NodeKind::CharListFragment => 0,
                NodeKind::SigilFragment => 0,
                NodeKind::EscapedCharacter => 0,
                NodeKind::HexadecimalEscapeSequence => 0,
                NodeKind::ValidHexadecimalDigits => 0,
                NodeKind::Interpolation => 0,
                NodeKind::Sigil => 0,
                NodeKind::SigilHeredoc => 0,
                NodeKind::SigilName => 0,
                NodeKind::SigilModifiers => 0,
                NodeKind::UnaryOperation => 0,
                NodeKind::BinaryOperation => 0,
                NodeKind::Operator => 0,
                NodeKind::Block => 0,
                NodeKind::List => 0,
                NodeKind::Tuple => 0,
                NodeKind::Call => 0,
                NodeKind::RemoteCall => 0,
                NodeKind::Arguments => 0,
                NodeKind::Unknown => 0,
            }
        }
        NodeKind::all_variants().len()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
