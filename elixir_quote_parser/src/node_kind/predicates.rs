//! NodeKind predicate methods

use super::NodeKind;

impl NodeKind {
    /// Nodes skipped when lowering a statement list
    pub fn is_trivia(&self) -> bool {
        matches!(self, NodeKind::EndOfExpression | NodeKind::Comment)
    }

    /// Whole-number literal nodes
    pub fn is_whole_number(&self) -> bool {
        matches!(
            self,
            NodeKind::DecimalWholeNumber
                | NodeKind::BinaryWholeNumber
                | NodeKind::OctalWholeNumber
                | NodeKind::HexadecimalWholeNumber
        )
    }

    /// Per-base digit wrappers
    pub fn is_digits(&self) -> bool {
        matches!(
            self,
            NodeKind::DecimalDigits
                | NodeKind::BinaryDigits
                | NodeKind::OctalDigits
                | NodeKind::HexadecimalDigits
        )
    }

    /// Numeric base of a whole number or digit wrapper
    pub fn base(&self) -> Option<u32> {
        match self {
            NodeKind::BinaryWholeNumber | NodeKind::BinaryDigits => Some(2),
            NodeKind::OctalWholeNumber | NodeKind::OctalDigits => Some(8),
            NodeKind::DecimalWholeNumber | NodeKind::DecimalDigits => Some(10),
            NodeKind::HexadecimalWholeNumber | NodeKind::HexadecimalDigits => Some(16),
            _ => None,
        }
    }

    /// Digit wrapper kind for a whole number kind
    pub fn digits_kind(&self) -> Option<NodeKind> {
        match self {
            NodeKind::BinaryWholeNumber => Some(NodeKind::BinaryDigits),
            NodeKind::OctalWholeNumber => Some(NodeKind::OctalDigits),
            NodeKind::DecimalWholeNumber => Some(NodeKind::DecimalDigits),
            NodeKind::HexadecimalWholeNumber => Some(NodeKind::HexadecimalDigits),
            _ => None,
        }
    }

    /// Literal text nodes inside a quote body
    pub fn is_fragment(&self) -> bool {
        matches!(
            self,
            NodeKind::StringFragment | NodeKind::CharListFragment | NodeKind::SigilFragment
        )
    }

    /// Heredoc nodes (including sigil heredocs)
    pub fn is_heredoc(&self) -> bool {
        matches!(
            self,
            NodeKind::StringHeredoc | NodeKind::CharListHeredoc | NodeKind::SigilHeredoc
        )
    }

    /// Line-delimited and heredoc quotes
    pub fn is_quote(&self) -> bool {
        matches!(
            self,
            NodeKind::String
                | NodeKind::CharList
                | NodeKind::StringHeredoc
                | NodeKind::CharListHeredoc
                | NodeKind::Sigil
                | NodeKind::SigilHeredoc
        )
    }

    /// Check if this is a literal node
    pub fn is_literal(&self) -> bool {
        self.is_whole_number()
            || self.is_quote()
            || matches!(
                self,
                NodeKind::DecimalFloat
                    | NodeKind::CharToken
                    | NodeKind::Atom
                    | NodeKind::AtomKeyword
            )
    }
}
