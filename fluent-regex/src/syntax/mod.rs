/*!
Formatting of the pattern metasyntax.

Everything in this module is a stateless function of its arguments. The [`Expr`](crate::Expr)
renderer is built on top of it, but the functions can also be used on their own:
```
use fluent_regex::syntax::{self, AssertionKind, IdentifierBoundary};
use fluent_unicode::GeneralCategory;

assert_eq!(syntax::char_group("a-z", true)?, "[^a-z]");
assert!(syntax::char_group("", false).is_err());
assert_eq!(AssertionKind::NotLookbehind.open(), "(?<!");

let mut s = String::new();
syntax::named_backreference(&mut s, "year", IdentifierBoundary::Apostrophe);
syntax::unicode_category(&mut s, GeneralCategory::UppercaseLetter, true);
assert_eq!(s, r"\k'year'\P{Lu}");
# Ok::<(), fluent_regex::Error>(())
```
*/
use fluent_unicode::{GeneralCategory, NamedBlock};

use crate::error::{Error, Result};

mod group;
mod quantifier;

pub use group::*;
pub use quantifier::Quantifier;

/// Wrap already escaped `content` in `[...]`, or `[^...]` if `negated`.
///
/// ## Errors
/// [`Error::EmptyCharGroup`] if `content` is empty, since `[]` is not a valid group.
pub fn char_group(content: &str, negated: bool) -> Result<String> {
    if content.is_empty() {
        return Err(Error::EmptyCharGroup);
    }
    let mut s = String::with_capacity(content.len() + 3);
    s.push('[');
    if negated {
        s.push('^');
    }
    s.push_str(content);
    s.push(']');
    Ok(s)
}

/// Shorthand character classes, valid both inside and outside `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    NotDigit,
    WordChar,
    NotWordChar,
    WhiteSpace,
    NotWhiteSpace,
}

impl CharClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            CharClass::Digit => r"\d",
            CharClass::NotDigit => r"\D",
            CharClass::WordChar => r"\w",
            CharClass::NotWordChar => r"\W",
            CharClass::WhiteSpace => r"\s",
            CharClass::NotWhiteSpace => r"\S",
        }
    }

    pub const fn negate(self) -> Self {
        match self {
            CharClass::Digit => CharClass::NotDigit,
            CharClass::NotDigit => CharClass::Digit,
            CharClass::WordChar => CharClass::NotWordChar,
            CharClass::NotWordChar => CharClass::WordChar,
            CharClass::WhiteSpace => CharClass::NotWhiteSpace,
            CharClass::NotWhiteSpace => CharClass::WhiteSpace,
        }
    }
}

/// Any character, including `\n`, regardless of [`SINGLELINE`](crate::RegexOptions::SINGLELINE).
pub const ANY_CHAR_INVARIANT: &str = r"[\s\S]";
pub const ANY_CHAR: &str = ".";

/// Zero-width anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `^`
    Start,
    /// `$`
    End,
    /// `\A`
    StartOfInput,
    /// `\z`
    EndOfInput,
    /// `\Z`
    EndOrBeforeFinalNewline,
    /// `\b`
    WordBoundary,
    /// `\B`
    NotWordBoundary,
    /// `\G`
    PreviousMatchEnd,
}

impl Anchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "^",
            Anchor::End => "$",
            Anchor::StartOfInput => r"\A",
            Anchor::EndOfInput => r"\z",
            Anchor::EndOrBeforeFinalNewline => r"\Z",
            Anchor::WordBoundary => r"\b",
            Anchor::NotWordBoundary => r"\B",
            Anchor::PreviousMatchEnd => r"\G",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    Lookahead,
    NotLookahead,
    Lookbehind,
    NotLookbehind,
}

impl AssertionKind {
    pub const fn open(self) -> &'static str {
        match self {
            AssertionKind::Lookahead => "(?=",
            AssertionKind::NotLookahead => "(?!",
            AssertionKind::Lookbehind => "(?<=",
            AssertionKind::NotLookbehind => "(?<!",
        }
    }
}

/// `\n`
pub fn backreference(out: &mut String, number: u32) {
    out.push('\\');
    out.push_str(&number.to_string());
}

/// `\k<name>`
pub fn named_backreference(out: &mut String, name: &str, boundary: IdentifierBoundary) {
    out.push_str(r"\k");
    boundary.write_name(out, name);
}

/// `\p{name}`, or `\P{name}` if `negated`.
pub fn unicode_property(out: &mut String, name: &str, negated: bool) {
    out.push_str(if negated { r"\P{" } else { r"\p{" });
    out.push_str(name);
    out.push('}');
}

pub fn unicode_block(out: &mut String, block: NamedBlock, negated: bool) {
    unicode_property(out, block.name(), negated)
}

pub fn unicode_category(out: &mut String, category: GeneralCategory, negated: bool) {
    unicode_property(out, category.abbrev(), negated)
}

/// Check that `text` can be written as `(?#text)`.
pub fn validate_comment(text: &str) -> Result<()> {
    if text.contains(')') {
        return Err(Error::InvalidComment);
    }
    Ok(())
}

/// `(?#text)`
pub fn comment(out: &mut String, text: &str) {
    out.push_str("(?#");
    out.push_str(text);
    out.push(')');
}
