//! Builder methods.
//!
//! Every method on [`Patterns`] starts a new chain, and the method of the same name on [`Expr`]
//! appends the same construct to an existing chain.
use fluent_unicode::{ascii, GeneralCategory, NamedBlock};
use itertools::Itertools;

use crate::{
    char_group::CharGroup,
    error::{Error, Result},
    escape::char_from_code,
    expr::{
        node::{Backreference, Condition, GroupKind},
        Expr, ExprId, NodeKind, Patterns,
    },
    options::RegexOptions,
    syntax::{self, Anchor, AssertionKind, CharClass, Quantifier},
};

impl Patterns {
    /// Literal text, escaped when rendered.
    pub fn text(&self, text: impl Into<String>) -> Expr<'_> {
        self.push(NodeKind::Text(text.into()))
    }

    /// A pattern fragment written as is, without any escaping or validation.
    ///
    /// Only a one-char fragment can be quantified directly, use [`Patterns::repeat()`] for
    /// longer ones.
    pub fn raw(&self, pattern: impl Into<String>) -> Expr<'_> {
        self.push(NodeKind::Raw(pattern.into()))
    }

    pub fn char(&self, c: char) -> Expr<'_> {
        self.push(NodeKind::Char(c))
    }

    /// ## Errors
    /// [`Error::InvalidCodePoint`] if `code` is not a character in `0..=0xFFFF`.
    pub fn char_code(&self, code: u32) -> Result<Expr<'_>> {
        Ok(self.char(char_from_code(code)?))
    }

    /// ## Errors
    /// [`Error::InvalidAsciiCode`] if `code > 0xFF`.
    pub fn ascii(&self, code: u32) -> Result<Expr<'_>> {
        let b = u8::try_from(code).map_err(|_| Error::InvalidAsciiCode(code))?;
        Ok(self.char(b.into()))
    }

    /// An ASCII symbol by its name, e.g. `"Comma"`, see [`fluent_unicode::ascii`].
    pub fn named(&self, name: &str) -> Result<Expr<'_>> {
        Ok(self.char(ascii::by_name(name)?.into()))
    }

    pub fn class(&self, class: CharClass) -> Expr<'_> {
        self.push(NodeKind::Class(class))
    }

    /// `\d`
    pub fn digit(&self) -> Expr<'_> {
        self.class(CharClass::Digit)
    }

    /// `\D`
    pub fn not_digit(&self) -> Expr<'_> {
        self.class(CharClass::NotDigit)
    }

    /// `\w`
    pub fn word_char(&self) -> Expr<'_> {
        self.class(CharClass::WordChar)
    }

    /// `\W`
    pub fn not_word_char(&self) -> Expr<'_> {
        self.class(CharClass::NotWordChar)
    }

    /// `\s`
    pub fn white_space(&self) -> Expr<'_> {
        self.class(CharClass::WhiteSpace)
    }

    /// `\S`
    pub fn not_white_space(&self) -> Expr<'_> {
        self.class(CharClass::NotWhiteSpace)
    }

    /// `.`, or `[\s\S]` with [`RenderSettings::invariant_any_char`](crate::RenderSettings).
    pub fn any_char(&self) -> Expr<'_> {
        self.push(NodeKind::AnyChar)
    }

    pub fn anchor(&self, anchor: Anchor) -> Expr<'_> {
        self.push(NodeKind::Anchor(anchor))
    }

    /// `^`
    pub fn start(&self) -> Expr<'_> {
        self.anchor(Anchor::Start)
    }

    /// `$`
    pub fn end(&self) -> Expr<'_> {
        self.anchor(Anchor::End)
    }

    /// `\A`
    pub fn start_of_input(&self) -> Expr<'_> {
        self.anchor(Anchor::StartOfInput)
    }

    /// `\z`
    pub fn end_of_input(&self) -> Expr<'_> {
        self.anchor(Anchor::EndOfInput)
    }

    /// `\Z`
    pub fn end_or_before_final_newline(&self) -> Expr<'_> {
        self.anchor(Anchor::EndOrBeforeFinalNewline)
    }

    /// `\b`
    pub fn word_boundary(&self) -> Expr<'_> {
        self.anchor(Anchor::WordBoundary)
    }

    /// `\B`
    pub fn not_word_boundary(&self) -> Expr<'_> {
        self.anchor(Anchor::NotWordBoundary)
    }

    /// `\G`
    pub fn previous_match_end(&self) -> Expr<'_> {
        self.anchor(Anchor::PreviousMatchEnd)
    }

    /// ## Errors
    /// [`Error::EmptyCharGroup`] if the group or its subtraction has no items.
    pub fn char_group(&self, group: CharGroup) -> Result<Expr<'_>> {
        group.validate()?;
        Ok(self.push(NodeKind::CharGroup(group)))
    }

    /// `[^c]`
    pub fn not_char(&self, c: char) -> Expr<'_> {
        self.push(NodeKind::CharGroup(CharGroup::new().char(c).negated()))
    }

    /// `[^chars]`
    pub fn not_chars(&self, chars: &str) -> Result<Expr<'_>> {
        self.char_group(CharGroup::new().chars(chars).negated())
    }

    /// `[start-end]`
    pub fn range(&self, start: char, end: char) -> Result<Expr<'_>> {
        self.char_group(CharGroup::new().range(start, end)?)
    }

    /// `[^start-end]`
    pub fn not_range(&self, start: char, end: char) -> Result<Expr<'_>> {
        self.char_group(CharGroup::new().range(start, end)?.negated())
    }

    fn wrap(&self, inner: Expr<'_>, f: impl FnOnce(ExprId) -> NodeKind) -> Result<Expr<'_>> {
        let inner = self.owns(inner)?;
        Ok(self.push(f(inner)))
    }

    /// Capturing group, `(inner)`.
    pub fn group(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.wrap(inner, |inner| NodeKind::Group(GroupKind::Capturing, inner))
    }

    /// `(?<name>inner)`
    ///
    /// ## Errors
    /// [`Error::InvalidGroupName`], see [`syntax::validate_group_name()`].
    pub fn named_group(&self, name: &str, inner: Expr<'_>) -> Result<Expr<'_>> {
        syntax::validate_group_name(name)?;
        self.wrap(inner, |inner| {
            NodeKind::Group(GroupKind::Named(name.to_owned()), inner)
        })
    }

    /// `(?:inner)`
    pub fn non_capturing(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.wrap(inner, |inner| NodeKind::Group(GroupKind::NonCapturing, inner))
    }

    /// `(?>inner)`
    pub fn atomic(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.wrap(inner, |inner| NodeKind::Group(GroupKind::Atomic, inner))
    }

    /// `(?<name-previous>inner)`, or `(?<-previous>inner)` if `name` is `None`.
    pub fn balancing_group(
        &self,
        name: Option<&str>,
        previous: &str,
        inner: Expr<'_>,
    ) -> Result<Expr<'_>> {
        if let Some(name) = name {
            syntax::validate_group_name(name)?;
        }
        syntax::validate_group_name(previous)?;
        self.wrap(inner, |inner| {
            NodeKind::Group(
                GroupKind::Balancing {
                    name: name.map(str::to_owned),
                    previous: previous.to_owned(),
                },
                inner,
            )
        })
    }

    /// `(?imnsx-imnsx:inner)`
    ///
    /// Only [inline options](RegexOptions::INLINE) are written; an option in both masks is
    /// disabled.
    pub fn options_group(
        &self,
        enable: RegexOptions,
        disable: RegexOptions,
        inner: Expr<'_>,
    ) -> Result<Expr<'_>> {
        self.wrap(inner, |inner| {
            NodeKind::Group(GroupKind::Options { enable, disable }, inner)
        })
    }

    /// `(?imnsx-imnsx)`, changing the options for the rest of the enclosing group.
    ///
    /// Renders nothing if neither mask contains an inline option.
    pub fn options(&self, enable: RegexOptions, disable: RegexOptions) -> Expr<'_> {
        self.push(NodeKind::Options { enable, disable })
    }

    pub fn assertion(&self, kind: AssertionKind, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.wrap(inner, |inner| NodeKind::Assertion(kind, inner))
    }

    /// `(?=inner)`
    pub fn lookahead(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.assertion(AssertionKind::Lookahead, inner)
    }

    /// `(?!inner)`
    pub fn not_lookahead(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.assertion(AssertionKind::NotLookahead, inner)
    }

    /// `(?<=inner)`
    pub fn lookbehind(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.assertion(AssertionKind::Lookbehind, inner)
    }

    /// `(?<!inner)`
    pub fn not_lookbehind(&self, inner: Expr<'_>) -> Result<Expr<'_>> {
        self.assertion(AssertionKind::NotLookbehind, inner)
    }

    /// `\number`
    ///
    /// ## Errors
    /// [`Error::InvalidGroupNumber`] if `number` is 0, which is the whole match.
    pub fn backreference(&self, number: u32) -> Result<Expr<'_>> {
        if number == 0 {
            return Err(Error::InvalidGroupNumber(number));
        }
        Ok(self.push(NodeKind::Backreference(Backreference::Number(number))))
    }

    /// `\k<name>`
    pub fn named_backreference(&self, name: &str) -> Result<Expr<'_>> {
        syntax::validate_group_name(name)?;
        Ok(self.push(NodeKind::Backreference(Backreference::Name(
            name.to_owned(),
        ))))
    }

    /// Match any of the alternatives, `a|b|c`.
    ///
    /// The alternation is wrapped in `(?:...)` unless it is the only content of a group,
    /// an assertion or the whole pattern.
    ///
    /// ## Errors
    /// [`Error::EmptyAlternation`] if `alternatives` is empty.
    pub fn any_of(&self, alternatives: &[Expr<'_>]) -> Result<Expr<'_>> {
        if alternatives.is_empty() {
            return Err(Error::EmptyAlternation);
        }
        let ids = alternatives
            .iter()
            .map(|&alternative| self.owns(alternative))
            .try_collect()?;
        Ok(self.push(NodeKind::Alternation(ids)))
    }

    /// `\p{IsBlock}`
    pub fn block(&self, block: NamedBlock) -> Expr<'_> {
        self.push(NodeKind::Block(block, false))
    }

    /// `\P{IsBlock}`
    pub fn not_block(&self, block: NamedBlock) -> Expr<'_> {
        self.push(NodeKind::Block(block, true))
    }

    /// `\p{Category}`
    pub fn category(&self, category: GeneralCategory) -> Expr<'_> {
        self.push(NodeKind::Category(category, false))
    }

    /// `\P{Category}`
    pub fn not_category(&self, category: GeneralCategory) -> Expr<'_> {
        self.push(NodeKind::Category(category, true))
    }

    /// `(?#text)`
    ///
    /// ## Errors
    /// [`Error::InvalidComment`] if `text` contains `)`.
    pub fn comment(&self, text: &str) -> Result<Expr<'_>> {
        syntax::validate_comment(text)?;
        Ok(self.push(NodeKind::Comment(text.to_owned())))
    }

    /// `(?(name)yes|no)`: match `yes` if the group `name` has captured, `no` otherwise.
    pub fn if_group<'p>(
        &'p self,
        name: &str,
        yes: Expr<'p>,
        no: Option<Expr<'p>>,
    ) -> Result<Expr<'p>> {
        syntax::validate_group_name(name)?;
        self.conditional(Condition::Group(name.to_owned()), yes, no)
    }

    /// `(?(test)yes|no)`: match `yes` if `test` matches at this position, `no` otherwise.
    ///
    /// `test` is a zero-width assertion.
    pub fn if_assert<'p>(
        &'p self,
        test: Expr<'p>,
        yes: Expr<'p>,
        no: Option<Expr<'p>>,
    ) -> Result<Expr<'p>> {
        let test = self.owns(test)?;
        self.conditional(Condition::Expr(test), yes, no)
    }

    fn conditional<'p>(
        &'p self,
        test: Condition,
        yes: Expr<'p>,
        no: Option<Expr<'p>>,
    ) -> Result<Expr<'p>> {
        let yes = self.owns(yes)?;
        let no = no.map(|no| self.owns(no)).transpose()?;
        Ok(self.push(NodeKind::Conditional { test, yes, no }))
    }

    /// Quantify the whole chain of `inner`, wrapping it in `(?:...)` if needed.
    ///
    /// ```
    /// use fluent_regex::{Patterns, Quantifier};
    ///
    /// let p = Patterns::new();
    /// assert_eq!(p.repeat(p.text("ab"), Quantifier::ONE_OR_MORE)?.to_pattern()?, "(?:ab)+");
    /// assert_eq!(p.repeat(p.digit(), Quantifier::count(3))?.to_pattern()?, r"\d{3}");
    /// # Ok::<(), fluent_regex::Error>(())
    /// ```
    pub fn repeat<'p>(&'p self, inner: Expr<'p>, quantifier: Quantifier) -> Result<Expr<'p>> {
        self.wrap(inner, |inner| NodeKind::Repeat(inner, quantifier))
    }

    /// `(?:inner)?`
    pub fn maybe_of<'p>(&'p self, inner: Expr<'p>) -> Result<Expr<'p>> {
        self.repeat(inner, Quantifier::MAYBE)
    }

    /// `(?:inner)+`
    pub fn one_or_more_of<'p>(&'p self, inner: Expr<'p>) -> Result<Expr<'p>> {
        self.repeat(inner, Quantifier::ONE_OR_MORE)
    }

    /// `(?:inner)*`
    pub fn zero_or_more_of<'p>(&'p self, inner: Expr<'p>) -> Result<Expr<'p>> {
        self.repeat(inner, Quantifier::ZERO_OR_MORE)
    }

    /// `\binner\b`
    pub fn word<'p>(&'p self, inner: Expr<'p>) -> Result<Expr<'p>> {
        Ok(self.word_boundary().then(inner)?.word_boundary())
    }

    /// `open`, then `inner`, then `close`, each text escaped.
    pub fn surround<'p>(&'p self, open: &str, inner: Expr<'p>, close: &str) -> Result<Expr<'p>> {
        Ok(self.text(open).then(inner)?.text(close))
    }

    /// `[^c]*`
    pub fn while_not_char(&self, c: char) -> Expr<'_> {
        self.not_char(c).push_quantifier(Quantifier::ZERO_OR_MORE)
    }

    /// `[^c]*c`
    pub fn until_char(&self, c: char) -> Expr<'_> {
        self.while_not_char(c).char(c)
    }

    /// `\r?\n`
    pub fn new_line(&self) -> Expr<'_> {
        self.char('\r').push_quantifier(Quantifier::MAYBE).char('\n')
    }
}

/// Mirror infallible [`Patterns`] constructors on [`Expr`].
macro_rules! append {
    ($($(#[$attr:meta])* $name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            $(#[$attr])*
            pub fn $name(self, $($arg: $ty),*) -> Expr<'p> {
                let fresh = self.patterns.$name($($arg),*);
                self.patterns.link(self, fresh)
            }
        )*
    };
}

/// Mirror fallible [`Patterns`] constructors on [`Expr`].
macro_rules! try_append {
    ($($(#[$attr:meta])* $name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            $(#[$attr])*
            pub fn $name(self, $($arg: $ty),*) -> Result<Expr<'p>> {
                let fresh = self.patterns.$name($($arg),*)?;
                Ok(self.patterns.link(self, fresh))
            }
        )*
    };
}

impl<'p> Expr<'p> {
    append! {
        /// See [`Patterns::text()`].
        text(text: impl Into<String>);
        /// See [`Patterns::raw()`].
        raw(pattern: impl Into<String>);
        char(c: char);
        class(class: CharClass);
        digit();
        not_digit();
        word_char();
        not_word_char();
        white_space();
        not_white_space();
        any_char();
        anchor(anchor: Anchor);
        start();
        end();
        start_of_input();
        end_of_input();
        end_or_before_final_newline();
        word_boundary();
        not_word_boundary();
        previous_match_end();
        not_char(c: char);
        options(enable: RegexOptions, disable: RegexOptions);
        block(block: NamedBlock);
        not_block(block: NamedBlock);
        category(category: GeneralCategory);
        not_category(category: GeneralCategory);
    }

    try_append! {
        char_code(code: u32);
        ascii(code: u32);
        named(name: &str);
        char_group(group: CharGroup);
        not_chars(chars: &str);
        range(start: char, end: char);
        not_range(start: char, end: char);
        group(inner: Expr<'p>);
        named_group(name: &str, inner: Expr<'p>);
        non_capturing(inner: Expr<'p>);
        atomic(inner: Expr<'p>);
        balancing_group(name: Option<&str>, previous: &str, inner: Expr<'p>);
        options_group(enable: RegexOptions, disable: RegexOptions, inner: Expr<'p>);
        assertion(kind: AssertionKind, inner: Expr<'p>);
        lookahead(inner: Expr<'p>);
        not_lookahead(inner: Expr<'p>);
        lookbehind(inner: Expr<'p>);
        not_lookbehind(inner: Expr<'p>);
        backreference(number: u32);
        named_backreference(name: &str);
        any_of(alternatives: &[Expr<'p>]);
        comment(text: &str);
        if_group(name: &str, yes: Expr<'p>, no: Option<Expr<'p>>);
        if_assert(test: Expr<'p>, yes: Expr<'p>, no: Option<Expr<'p>>);
        repeat(inner: Expr<'p>, quantifier: Quantifier);
        maybe_of(inner: Expr<'p>);
        one_or_more_of(inner: Expr<'p>);
        zero_or_more_of(inner: Expr<'p>);
    }

    /// `\binner\b`
    pub fn word(self, inner: Expr<'p>) -> Result<Expr<'p>> {
        Ok(self.word_boundary().then(inner)?.word_boundary())
    }

    /// `open`, then `inner`, then `close`, each text escaped.
    pub fn surround(self, open: &str, inner: Expr<'p>, close: &str) -> Result<Expr<'p>> {
        Ok(self.text(open).then(inner)?.text(close))
    }

    /// `[^c]*`
    pub fn while_not_char(self, c: char) -> Expr<'p> {
        self.not_char(c).push_quantifier(Quantifier::ZERO_OR_MORE)
    }

    /// `[^c]*c`
    pub fn until_char(self, c: char) -> Expr<'p> {
        self.while_not_char(c).char(c)
    }

    /// `\r?\n`
    pub fn new_line(self) -> Expr<'p> {
        self.char('\r').push_quantifier(Quantifier::MAYBE).char('\n')
    }

    /// Quantify the node `self` points to.
    ///
    /// To quantify a whole chain, use [`Patterns::repeat()`].
    ///
    /// ## Errors
    /// [`Error::NotQuantifiable`] if the node is an anchor, a comment, inline options, text
    /// longer than one char, or already quantified.
    pub fn quantify(self, quantifier: Quantifier) -> Result<Expr<'p>> {
        self.patterns.with_node(self.id, |node| match node.kind.is_quantifiable() {
            true => Ok(()),
            false => Err(Error::NotQuantifiable(node.kind.describe())),
        })?;
        Ok(self.push_quantifier(quantifier))
    }

    fn push_quantifier(self, quantifier: Quantifier) -> Expr<'p> {
        let fresh = self.patterns.push(NodeKind::Quantifier(quantifier));
        self.patterns.link(self, fresh)
    }

    /// `?`
    pub fn maybe(self) -> Result<Expr<'p>> {
        self.quantify(Quantifier::MAYBE)
    }

    /// `*`
    pub fn zero_or_more(self) -> Result<Expr<'p>> {
        self.quantify(Quantifier::ZERO_OR_MORE)
    }

    /// `+`
    pub fn one_or_more(self) -> Result<Expr<'p>> {
        self.quantify(Quantifier::ONE_OR_MORE)
    }

    /// `{n}`
    pub fn count(self, n: u32) -> Result<Expr<'p>> {
        self.quantify(Quantifier::count(n))
    }

    /// `{min,max}`
    ///
    /// ## Errors
    /// [`Error::InvalidQuantifier`] if `max < min`.
    pub fn count_range(self, min: u32, max: u32) -> Result<Expr<'p>> {
        self.quantify(Quantifier::count_range(min, max)?)
    }

    /// `{n,}`
    pub fn at_least(self, n: u32) -> Result<Expr<'p>> {
        self.quantify(Quantifier::at_least(n))
    }

    /// Make the preceding quantifier match as few times as possible, e.g. `*?`.
    ///
    /// ## Errors
    /// [`Error::LazyWithoutQuantifier`] if `self` is not a greedy quantifier.
    pub fn lazy(self) -> Result<Expr<'p>> {
        let greedy = self.patterns.with_node(self.id, |node| match &node.kind {
            NodeKind::Quantifier(q) | NodeKind::Repeat(_, q) => !q.is_lazy(),
            _ => false,
        });
        if !greedy {
            return Err(Error::LazyWithoutQuantifier);
        }
        let fresh = self.patterns.push(NodeKind::Lazy);
        Ok(self.patterns.link(self, fresh))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chars() {
        let p = Patterns::new();
        assert_eq!(p.char_code(0x41).unwrap().to_pattern().unwrap(), "A");
        assert_eq!(p.char_code(0x10000), Err(Error::InvalidCodePoint(0x10000)));
        assert_eq!(p.char_code(0xD800), Err(Error::InvalidCodePoint(0xD800)));
        assert_eq!(p.ascii(0x2E).unwrap().to_pattern().unwrap(), r"\.");
        assert_eq!(p.ascii(0x100), Err(Error::InvalidAsciiCode(0x100)));
        assert_eq!(
            p.named("Comma").unwrap().named("tab").unwrap().to_pattern().unwrap(),
            r",\t"
        );
        assert!(matches!(p.named("Snowman"), Err(Error::UnknownName(_))));
    }

    #[test]
    fn hyphen() {
        let p = Patterns::new();
        assert_eq!(p.char('-').to_pattern().unwrap(), "-");
        assert_eq!(
            p.char_group(CharGroup::new().char('-')).unwrap().to_pattern().unwrap(),
            r"[\-]"
        );
        assert_eq!(p.not_chars("-]").unwrap().to_pattern().unwrap(), r"[^\-\]]");
        assert_eq!(p.not_chars(""), Err(Error::EmptyCharGroup));
        assert_eq!(p.char_group(CharGroup::new()), Err(Error::EmptyCharGroup));
    }

    #[test]
    fn quantifiers() {
        let p = Patterns::new();
        assert_eq!(
            p.char('a').count_range(2, 5).unwrap().to_pattern().unwrap(),
            "a{2,5}"
        );
        assert_eq!(
            p.char('a').count_range(5, 2),
            Err(Error::InvalidQuantifier { min: 5, max: 2 })
        );
        assert_eq!(
            p.digit().at_least(2).unwrap().lazy().unwrap().to_pattern().unwrap(),
            r"\d{2,}?"
        );
        assert_eq!(
            p.text("ab").one_or_more(),
            Err(Error::NotQuantifiable("text"))
        );
        assert_eq!(
            p.raw("ab").one_or_more(),
            Err(Error::NotQuantifiable("raw pattern"))
        );
        assert_eq!(
            p.raw(r"\d").zero_or_more(),
            Err(Error::NotQuantifiable("raw pattern"))
        );
        assert_eq!(p.raw("a").one_or_more().unwrap().to_pattern().unwrap(), "a+");
        assert_eq!(
            p.start().maybe(),
            Err(Error::NotQuantifiable("anchor"))
        );
        assert_eq!(
            p.char('a').maybe().unwrap().maybe(),
            Err(Error::NotQuantifiable("quantifier"))
        );
        assert_eq!(p.char('a').lazy(), Err(Error::LazyWithoutQuantifier));
        assert_eq!(
            p.char('a').maybe().unwrap().lazy().unwrap().lazy(),
            Err(Error::LazyWithoutQuantifier)
        );
        assert_eq!(
            p.char('a').quantify(Quantifier::MAYBE.lazy()).unwrap().lazy(),
            Err(Error::LazyWithoutQuantifier)
        );
    }

    #[test]
    fn groups() {
        let p = Patterns::new();
        assert_eq!(
            p.named_group("1a", p.char('x')),
            Err(Error::InvalidGroupName("1a".into()))
        );
        assert_eq!(p.backreference(0), Err(Error::InvalidGroupNumber(0)));
        assert_eq!(
            p.balancing_group(Some("close"), "open", p.any_char())
                .unwrap()
                .to_pattern()
                .unwrap(),
            "(?<close-open>.)"
        );
        assert_eq!(
            p.atomic(p.digit().one_or_more().unwrap())
                .unwrap()
                .non_capturing(p.char('x'))
                .unwrap()
                .to_pattern()
                .unwrap(),
            r"(?>\d+)(?:x)"
        );
        assert_eq!(p.comment("a)"), Err(Error::InvalidComment));
        assert_eq!(p.any_of(&[]), Err(Error::EmptyAlternation));
    }

    #[test]
    fn helpers() {
        let p = Patterns::new();
        assert_eq!(
            p.word(p.text("cat")).unwrap().to_pattern().unwrap(),
            r"\bcat\b"
        );
        assert_eq!(
            p.surround("(", p.digit().one_or_more().unwrap(), ")")
                .unwrap()
                .to_pattern()
                .unwrap(),
            r"\(\d+\)"
        );
        assert_eq!(p.until_char('"').to_pattern().unwrap(), r#"[^"]*""#);
        assert_eq!(
            p.char('"').while_not_char('"').char('"').to_pattern().unwrap(),
            r#""[^"]*""#
        );
        assert_eq!(p.start().new_line().to_pattern().unwrap(), r"^\r?\n");
    }

    #[test]
    fn mirrors_append() {
        let p = Patterns::new();
        let e = p
            .start()
            .named("NumberSign")
            .unwrap()
            .range('0', '9')
            .unwrap()
            .count(3)
            .unwrap()
            .end();
        assert_eq!(e.to_pattern().unwrap(), r"^\#[0-9]{3}$");
        assert_eq!(e.chain().unwrap().len(), 5);
    }
}
