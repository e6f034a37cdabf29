/*!
Contents of a character group, i.e. `[...]`.

```
use fluent_regex::{CharGroup, Patterns};
use fluent_unicode::NamedBlock;

let vowels = CharGroup::new().chars("aeiou");
let consonants = CharGroup::new().range('a', 'z')?.subtract(vowels)?;

let p = Patterns::new();
assert_eq!(p.char_group(consonants)?.to_pattern()?, "[a-z-[aeiou]]");

let group = CharGroup::new().chars("-_").digit().block(NamedBlock::Cyrillic).negated();
assert_eq!(p.char_group(group)?.to_pattern()?, r"[^\-_\d\p{IsCyrillic}]");
# Ok::<(), fluent_regex::Error>(())
```
*/
use fluent_unicode::{GeneralCategory, NamedBlock};

use crate::{
    error::{Error, Result},
    escape::{write_escaped, ControlEscape},
    syntax::{self, CharClass},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CharItem {
    Char(char),
    Range(char, char),
    Class(CharClass),
    Block(NamedBlock, bool),
    Category(GeneralCategory, bool),
}

/// Builder of the items of a character group.
///
/// Items are kept in the order they were added. Characters are escaped for use inside a class
/// when the group is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharGroup {
    items: Vec<CharItem>,
    negated: bool,
    subtracted: Option<Box<CharGroup>>,
}

impl CharGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn char(mut self, c: char) -> Self {
        self.items.push(CharItem::Char(c));
        self
    }

    /// Add every char of `s`.
    pub fn chars(mut self, s: &str) -> Self {
        self.items.extend(s.chars().map(CharItem::Char));
        self
    }

    /// `start-end`
    ///
    /// ## Errors
    /// [`Error::InvalidRange`] if `end < start`.
    pub fn range(mut self, start: char, end: char) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        self.items.push(CharItem::Range(start, end));
        Ok(self)
    }

    pub fn class(mut self, class: CharClass) -> Self {
        self.items.push(CharItem::Class(class));
        self
    }

    pub fn digit(self) -> Self {
        self.class(CharClass::Digit)
    }

    pub fn word_char(self) -> Self {
        self.class(CharClass::WordChar)
    }

    pub fn white_space(self) -> Self {
        self.class(CharClass::WhiteSpace)
    }

    pub fn block(mut self, block: NamedBlock) -> Self {
        self.items.push(CharItem::Block(block, false));
        self
    }

    pub fn not_block(mut self, block: NamedBlock) -> Self {
        self.items.push(CharItem::Block(block, true));
        self
    }

    pub fn category(mut self, category: GeneralCategory) -> Self {
        self.items.push(CharItem::Category(category, false));
        self
    }

    pub fn not_category(mut self, category: GeneralCategory) -> Self {
        self.items.push(CharItem::Category(category, true));
        self
    }

    /// Match any char except the items, `[^...]`.
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Add the items of `other`.
    ///
    /// ## Errors
    /// [`Error::InvalidCharGroup`] if `other` is negated or has a subtraction, which cannot be
    /// expressed as a flat list of items.
    pub fn union(mut self, other: CharGroup) -> Result<Self> {
        if other.negated {
            return Err(Error::InvalidCharGroup("cannot union a negated group"));
        }
        if other.subtracted.is_some() {
            return Err(Error::InvalidCharGroup("cannot union a group with a subtraction"));
        }
        self.items.extend(other.items);
        Ok(self)
    }

    /// Exclude the chars matched by `other`, `[base-[other]]`.
    ///
    /// Subtracting twice subtracts the union of both groups.
    ///
    /// ## Errors
    /// [`Error::InvalidCharGroup`] when subtracting twice if either subtracted group is negated
    /// or has a subtraction of its own, since their union cannot be written as one group.
    pub fn subtract(mut self, other: CharGroup) -> Result<Self> {
        self.subtracted = Some(Box::new(match self.subtracted.take() {
            None => other,
            Some(subtracted) => {
                if subtracted.negated {
                    return Err(Error::InvalidCharGroup(
                        "cannot subtract again after a negated group",
                    ));
                }
                if subtracted.subtracted.is_some() {
                    return Err(Error::InvalidCharGroup(
                        "cannot subtract again after a group with a subtraction",
                    ));
                }
                (*subtracted).union(other)?
            }
        }));
        Ok(self)
    }

    /// Whether the group has no items. Empty groups cannot be rendered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyCharGroup);
        }
        match &self.subtracted {
            Some(subtracted) => subtracted.validate(),
            None => Ok(()),
        }
    }

    pub(crate) fn write(&self, out: &mut String, style: ControlEscape) -> Result<()> {
        let mut content = String::with_capacity(self.items.len() * 2);
        for item in &self.items {
            match *item {
                CharItem::Char(c) => write_escaped(&mut content, c, true, style),
                CharItem::Range(start, end) => {
                    write_escaped(&mut content, start, true, style);
                    content.push('-');
                    write_escaped(&mut content, end, true, style);
                }
                CharItem::Class(class) => content.push_str(class.as_str()),
                CharItem::Block(block, negated) => {
                    syntax::unicode_block(&mut content, block, negated)
                }
                CharItem::Category(category, negated) => {
                    syntax::unicode_category(&mut content, category, negated)
                }
            }
        }
        if let Some(subtracted) = &self.subtracted {
            content.push('-');
            subtracted.write(&mut content, style)?;
        }
        out.push_str(&syntax::char_group(&content, self.negated)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(group: &CharGroup) -> Result<String> {
        let mut s = String::new();
        group.write(&mut s, ControlEscape::Named)?;
        Ok(s)
    }

    #[test]
    fn escaping() {
        assert_eq!(render(&CharGroup::new().char('-')).unwrap(), r"[\-]");
        assert_eq!(render(&CharGroup::new().chars("]^\\")).unwrap(), r"[\]\^\\]");
        assert_eq!(render(&CharGroup::new().chars(".*+?()|$")).unwrap(), "[.*+?()|$]");
        assert_eq!(render(&CharGroup::new().char('\t')).unwrap(), r"[\t]");
        assert_eq!(render(&CharGroup::new().chars("&&~~")).unwrap(), r"[\&\&\~\~]");
        assert_eq!(
            render(&CharGroup::new().range('!', '-').unwrap()).unwrap(),
            r"[!-\-]"
        );
    }

    #[test]
    fn items() {
        let group = CharGroup::new()
            .range('a', 'f')
            .unwrap()
            .digit()
            .category(GeneralCategory::UppercaseLetter)
            .not_category(GeneralCategory::Letter)
            .not_block(NamedBlock::Greek)
            .negated();
        assert_eq!(
            render(&group).unwrap(),
            r"[^a-f\d\p{Lu}\P{L}\P{IsGreek}]"
        );
    }

    #[test]
    fn union_and_subtract() {
        let group = CharGroup::new()
            .char('a')
            .union(CharGroup::new().char('b'))
            .unwrap();
        assert_eq!(render(&group).unwrap(), "[ab]");
        assert!(CharGroup::new()
            .union(CharGroup::new().char('b').negated())
            .is_err());

        let group = CharGroup::new()
            .range('a', 'z')
            .unwrap()
            .subtract(CharGroup::new().char('e'))
            .unwrap()
            .subtract(CharGroup::new().char('i'))
            .unwrap();
        assert_eq!(render(&group).unwrap(), "[a-z-[ei]]");

        let group = CharGroup::new()
            .range('a', 'z')
            .unwrap()
            .subtract(CharGroup::new().char('e').negated())
            .unwrap();
        assert_eq!(render(&group).unwrap(), "[a-z-[^e]]");
    }

    #[test]
    fn subtract_twice_keeps_meaning() {
        let base = || CharGroup::new().range('a', 'z').unwrap();
        assert!(matches!(
            base()
                .subtract(CharGroup::new().char('e'))
                .unwrap()
                .subtract(CharGroup::new().char('i').negated()),
            Err(Error::InvalidCharGroup(_))
        ));
        assert!(matches!(
            base()
                .subtract(CharGroup::new().char('e').negated())
                .unwrap()
                .subtract(CharGroup::new().char('i')),
            Err(Error::InvalidCharGroup(_))
        ));
        let nested = CharGroup::new()
            .range('b', 'y')
            .unwrap()
            .subtract(CharGroup::new().char('m'))
            .unwrap();
        assert_eq!(
            render(&base().subtract(nested.clone()).unwrap()).unwrap(),
            "[a-z-[b-y-[m]]]"
        );
        assert!(matches!(
            base().subtract(nested).unwrap().subtract(CharGroup::new().char('i')),
            Err(Error::InvalidCharGroup(_))
        ));
        assert!(matches!(
            base()
                .subtract(CharGroup::new().char('e'))
                .unwrap()
                .subtract(
                    CharGroup::new()
                        .range('h', 'j')
                        .unwrap()
                        .subtract(CharGroup::new().char('i'))
                        .unwrap()
                ),
            Err(Error::InvalidCharGroup(_))
        ));
    }

    #[test]
    fn invalid() {
        assert_eq!(
            CharGroup::new().range('z', 'a'),
            Err(Error::InvalidRange { start: 'z', end: 'a' })
        );
        assert_eq!(CharGroup::new().validate(), Err(Error::EmptyCharGroup));
        assert_eq!(
            CharGroup::new().char('a').subtract(CharGroup::new()).unwrap().validate(),
            Err(Error::EmptyCharGroup)
        );
        assert_eq!(render(&CharGroup::new()), Err(Error::EmptyCharGroup));
    }
}
