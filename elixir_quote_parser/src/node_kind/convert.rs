//! NodeKind conversion methods (from_str, as_str)

use std::convert::Infallible;
use std::str::FromStr;

use super::NodeKind;

impl FromStr for NodeKind {
    type Err = Infallible;

    /// Convert from snake_case node type string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "file" => NodeKind::File,
            "end_of_expression" => NodeKind::EndOfExpression,
            "comment" => NodeKind::Comment,

            // Numbers
            "decimal_whole_number" => NodeKind::DecimalWholeNumber,
            "binary_whole_number" => NodeKind::BinaryWholeNumber,
            "octal_whole_number" => NodeKind::OctalWholeNumber,
            "hexadecimal_whole_number" => NodeKind::HexadecimalWholeNumber,
            "base_prefix" => NodeKind::BasePrefix,
            "decimal_digits" => NodeKind::DecimalDigits,
            "binary_digits" => NodeKind::BinaryDigits,
            "octal_digits" => NodeKind::OctalDigits,
            "hexadecimal_digits" => NodeKind::HexadecimalDigits,
            "valid_digits" => NodeKind::ValidDigits,
            "invalid_digits" => NodeKind::InvalidDigits,
            "decimal_float" => NodeKind::DecimalFloat,
            "char_token" => NodeKind::CharToken,

            // Names
            "identifier" => NodeKind::Identifier,
            "alias" => NodeKind::Alias,
            "qualified_alias" => NodeKind::QualifiedAlias,
            "atom" => NodeKind::Atom,
            "atom_fragment" => NodeKind::AtomFragment,
            "atom_keyword" => NodeKind::AtomKeyword,

            // Quotes
            "string" => NodeKind::String,
            "char_list" => NodeKind::CharList,
            "string_heredoc" => NodeKind::StringHeredoc,
            "char_list_heredoc" => NodeKind::CharListHeredoc,
            "heredoc_line" => NodeKind::HeredocLine,
            "heredoc_line_prefix" => NodeKind::HeredocLinePrefix,
            "heredoc_prefix" => NodeKind::HeredocPrefix,
            "interpolated_body" => NodeKind::InterpolatedBody,
            "string_fragment" => NodeKind::StringFragment,
            "char_list_fragment" => NodeKind::CharListFragment,
            "sigil_fragment" => NodeKind::SigilFragment,
            "escaped_character" => NodeKind::EscapedCharacter,
            "hexadecimal_escape_sequence" => NodeKind::HexadecimalEscapeSequence,
            "valid_hexadecimal_digits" => NodeKind::ValidHexadecimalDigits,
            "interpolation" => NodeKind::Interpolation,
            "sigil" => NodeKind::Sigil,
            "sigil_heredoc" => NodeKind::SigilHeredoc,
            "sigil_name" => NodeKind::SigilName,
            "sigil_modifiers" => NodeKind::SigilModifiers,

            // Expressions
            "unary_operation" => NodeKind::UnaryOperation,
            "binary_operation" => NodeKind::BinaryOperation,
            "operator" => NodeKind::Operator,
            "block" => NodeKind::Block,
            "list" => NodeKind::List,
            "tuple" => NodeKind::Tuple,
            "call" => NodeKind::Call,
            "remote_call" => NodeKind::RemoteCall,
            "arguments" => NodeKind::Arguments,

            _ => NodeKind::Unknown,
        })
    }
}

impl NodeKind {
    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::EndOfExpression => "end_of_expression",
            NodeKind::Comment => "comment",

            NodeKind::DecimalWholeNumber => "decimal_whole_number",
            NodeKind::BinaryWholeNumber => "binary_whole_number",
            NodeKind::OctalWholeNumber => "octal_whole_number",
            NodeKind::HexadecimalWholeNumber => "hexadecimal_whole_number",
            NodeKind::BasePrefix => "base_prefix",
            NodeKind::DecimalDigits => "decimal_digits",
            NodeKind::BinaryDigits => "binary_digits",
            NodeKind::OctalDigits => "octal_digits",
            NodeKind::HexadecimalDigits => "hexadecimal_digits",
            NodeKind::ValidDigits => "valid_digits",
            NodeKind::InvalidDigits => "invalid_digits",
            NodeKind::DecimalFloat => "decimal_float",
            NodeKind::CharToken => "char_token",

            NodeKind::Identifier => "identifier",
            NodeKind::Alias => "alias",
            NodeKind::QualifiedAlias => "qualified_alias",
            NodeKind::Atom => "atom",
            NodeKind::AtomFragment => "atom_fragment",
            NodeKind::AtomKeyword => "atom_keyword",

            NodeKind::String => "string",
            NodeKind::CharList => "char_list",
            NodeKind::StringHeredoc => "string_heredoc",
            NodeKind::CharListHeredoc => "char_list_heredoc",
            NodeKind::HeredocLine => "heredoc_line",
            NodeKind::HeredocLinePrefix => "heredoc_line_prefix",
            NodeKind::HeredocPrefix => "heredoc_prefix",
            NodeKind::InterpolatedBody => "interpolated_body",
            NodeKind::StringFragment => "string_fragment",
            NodeKind::CharListFragment => "char_list_fragment",
            NodeKind::SigilFragment => "sigil_fragment",
            NodeKind::EscapedCharacter => "escaped_character",
            NodeKind::HexadecimalEscapeSequence => "hexadecimal_escape_sequence",
            NodeKind::ValidHexadecimalDigits => "valid_hexadecimal_digits",
            NodeKind::Interpolation => "interpolation",
            NodeKind::Sigil => "sigil",
            NodeKind::SigilHeredoc => "sigil_heredoc",
            NodeKind::SigilName => "sigil_name",
            NodeKind::SigilModifiers => "sigil_modifiers",

            NodeKind::UnaryOperation => "unary_operation",
            NodeKind::BinaryOperation => "binary_operation",
            NodeKind::Operator => "operator",
            NodeKind::Block => "block",
            NodeKind::List => "list",
            NodeKind::Tuple => "tuple",
            NodeKind::Call => "call",
            NodeKind::RemoteCall => "remote_call",
            NodeKind::Arguments => "arguments",

            NodeKind::Unknown => "unknown",
        }
    }
}
