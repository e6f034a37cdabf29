use fluent_unicode::{GeneralCategory, NamedBlock};

use crate::{
    char_group::CharGroup,
    expr::ExprId,
    options::RegexOptions,
    syntax::{Anchor, AssertionKind, CharClass, Quantifier},
};

/// One fragment of a pattern.
///
/// `prev` points back towards the start of the chain. It is set at most once, by
/// [`Patterns::append()`](super::Patterns::append), and never changes afterwards.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) prev: Option<ExprId>,
    pub(crate) kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeKind {
    /// Escaped char by char.
    Text(String),
    /// Written as is.
    Raw(String),
    Char(char),
    Class(CharClass),
    AnyChar,
    CharGroup(CharGroup),
    /// Applies to the preceding node.
    Quantifier(Quantifier),
    /// Makes the preceding quantifier lazy.
    Lazy,
    /// Wraps a whole chain.
    Repeat(ExprId, Quantifier),
    Anchor(Anchor),
    Assertion(AssertionKind, ExprId),
    Group(GroupKind, ExprId),
    Backreference(Backreference),
    Alternation(Vec<ExprId>),
    Block(NamedBlock, bool),
    Category(GeneralCategory, bool),
    /// `(?imnsx-imnsx)`
    Options {
        enable: RegexOptions,
        disable: RegexOptions,
    },
    Comment(String),
    Conditional {
        test: Condition,
        yes: ExprId,
        no: Option<ExprId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
    Atomic,
    Balancing {
        name: Option<String>,
        previous: String,
    },
    Options {
        enable: RegexOptions,
        disable: RegexOptions,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Backreference {
    Number(u32),
    Name(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    /// Whether the group has captured, `(?(name)...)`.
    Group(String),
    /// Whether the expression matches at this position, `(?(expr)...)`.
    Expr(ExprId),
}

impl NodeKind {
    /// A short description for diagnostics.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            NodeKind::Text(_) => "text",
            NodeKind::Raw(_) => "raw pattern",
            NodeKind::Char(_) => "character",
            NodeKind::Class(_) | NodeKind::AnyChar => "character class",
            NodeKind::CharGroup(_) => "character group",
            NodeKind::Quantifier(_) | NodeKind::Lazy | NodeKind::Repeat(..) => "quantifier",
            NodeKind::Anchor(_) => "anchor",
            NodeKind::Assertion(..) => "assertion",
            NodeKind::Group(..) => "group",
            NodeKind::Backreference(_) => "backreference",
            NodeKind::Alternation(_) => "alternation",
            NodeKind::Block(..) => "unicode block",
            NodeKind::Category(..) => "unicode category",
            NodeKind::Options { .. } => "inline options",
            NodeKind::Comment(_) => "comment",
            NodeKind::Conditional { .. } => "conditional",
        }
    }

    /// Whether a quantifier written right after this node applies to the whole node.
    ///
    /// Alternations are wrapped in `(?:...)` whenever they are followed by another node, so
    /// they can be quantified too.
    pub(crate) fn is_quantifiable(&self) -> bool {
        match self {
            NodeKind::Text(s) | NodeKind::Raw(s) => {
                let mut chars = s.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            NodeKind::Char(_)
            | NodeKind::Class(_)
            | NodeKind::AnyChar
            | NodeKind::CharGroup(_)
            | NodeKind::Assertion(..)
            | NodeKind::Group(..)
            | NodeKind::Backreference(_)
            | NodeKind::Alternation(_)
            | NodeKind::Block(..)
            | NodeKind::Category(..)
            | NodeKind::Conditional { .. } => true,
            NodeKind::Quantifier(_)
            | NodeKind::Lazy
            | NodeKind::Repeat(..)
            | NodeKind::Anchor(_)
            | NodeKind::Options { .. }
            | NodeKind::Comment(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantifiable() {
        assert!(NodeKind::Text("a".into()).is_quantifiable());
        assert!(NodeKind::Text("ж".into()).is_quantifiable());
        assert!(!NodeKind::Text("ab".into()).is_quantifiable());
        assert!(!NodeKind::Text(String::new()).is_quantifiable());
        assert!(NodeKind::Alternation(vec![]).is_quantifiable());
        assert!(!NodeKind::Quantifier(Quantifier::MAYBE).is_quantifiable());
        assert!(!NodeKind::Anchor(Anchor::Start).is_quantifiable());
    }
}
