/*!
Compiling rendered patterns with the [`regex`](https://docs.rs/regex/) crate.

```
use fluent_regex::{Patterns, RegexOptions};

let p = Patterns::new();
let re = p.word(p.text("cat"))?.to_regex(RegexOptions::IGNORE_CASE)?;
assert!(re.is_match("Concat CAT"));
assert!(!re.is_match("concat"));
# Ok::<(), fluent_regex::Error>(())
```

The `regex` dialect has no lookaround, backreferences, atomic groups, balancing groups or
conditionals. Such patterns render fine but fail to compile with [`Error::Regex`].
*/
use ::regex::{Regex, RegexBuilder};
use log::debug;

use crate::{
    error::{Error, Result},
    options::RegexOptions,
    render::RenderSettings,
    Expr,
};

/// Options that [`RegexBuilder`] cannot honor.
pub const UNSUPPORTED_OPTIONS: RegexOptions = RegexOptions::EXPLICIT_CAPTURE
    .union(RegexOptions::RIGHT_TO_LEFT)
    .union(RegexOptions::ECMA_SCRIPT);

/// Compile `pattern` with `options`.
///
/// [`RegexOptions::CULTURE_INVARIANT`] has no effect, case folding is always invariant.
///
/// ## Errors
/// - [`Error::UnsupportedOption`] if `options` intersects [`UNSUPPORTED_OPTIONS`].
/// - [`Error::Regex`] if the pattern does not compile.
pub fn build_regex(pattern: &str, options: RegexOptions) -> Result<Regex> {
    let unsupported = options & UNSUPPORTED_OPTIONS;
    if !unsupported.is_empty() {
        return Err(Error::UnsupportedOption(unsupported));
    }
    debug!("compiling {pattern:?} with {options:?}");
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(options.contains(RegexOptions::IGNORE_CASE))
        .multi_line(options.contains(RegexOptions::MULTILINE))
        .dot_matches_new_line(options.contains(RegexOptions::SINGLELINE))
        .ignore_whitespace(options.contains(RegexOptions::IGNORE_PATTERN_WHITESPACE))
        .build()?;
    Ok(regex)
}

impl Expr<'_> {
    /// Render with the default settings and compile.
    ///
    /// See [`build_regex()`].
    pub fn to_regex(self, options: RegexOptions) -> Result<Regex> {
        self.to_regex_with(&RenderSettings::default(), options)
    }

    pub fn to_regex_with(self, settings: &RenderSettings, options: RegexOptions) -> Result<Regex> {
        build_regex(&self.render(settings)?, options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CharGroup, Patterns};

    #[test]
    fn compile() {
        let p = Patterns::new();
        let date = p
            .start()
            .named_group("year", p.digit().count(4).unwrap())
            .unwrap()
            .char('-')
            .named_group("month", p.digit().count(2).unwrap())
            .unwrap()
            .end();
        let re = date.to_regex(RegexOptions::empty()).unwrap();
        let caps = re.captures("2024-05").unwrap();
        assert_eq!(&caps["year"], "2024");
        assert_eq!(&caps["month"], "05");
        assert!(!re.is_match("2024-5"));
    }

    #[test]
    fn escaped_literals_match_themselves() {
        let p = Patterns::new();
        let text = r"1+1=2? (a|b) [c] {d} ^$ \ . * #";
        let re = p
            .start()
            .text(text)
            .end()
            .to_regex(RegexOptions::empty())
            .unwrap();
        assert!(re.is_match(text));
        assert!(!re.is_match("11=2"));

        let re = p
            .char_group(CharGroup::new().chars(r"-]^\"))
            .unwrap()
            .one_or_more()
            .unwrap()
            .to_regex(RegexOptions::empty())
            .unwrap();
        assert_eq!(re.find("ab-]^\\c").unwrap().as_str(), r"-]^\");
    }

    #[test]
    fn class_set_operators_are_literal() {
        let p = Patterns::new();
        let e = p.char_group(CharGroup::new().chars("a&&b~~c--")).unwrap();
        assert_eq!(e.to_pattern().unwrap(), r"[a\&\&b\~\~c\-\-]");
        let re = e.one_or_more().unwrap().to_regex(RegexOptions::empty()).unwrap();
        assert_eq!(re.find("x&~-abc!").unwrap().as_str(), "&~-abc");
        assert!(!re.is_match("d"));
    }

    #[test]
    fn options() {
        let p = Patterns::new();
        let e = p.start().char('a').any_char().char('b').end();
        assert!(e.to_regex(RegexOptions::empty()).unwrap().is_match("a_b"));
        assert!(!e.to_regex(RegexOptions::empty()).unwrap().is_match("A\nb"));
        assert!(e
            .to_regex(RegexOptions::IGNORE_CASE | RegexOptions::SINGLELINE)
            .unwrap()
            .is_match("A\nb"));

        let settings = RenderSettings::builder().invariant_any_char(true).build();
        assert!(e
            .to_regex_with(&settings, RegexOptions::CULTURE_INVARIANT)
            .unwrap()
            .is_match("a\nb"));

        let re = p
            .start()
            .text("x")
            .end()
            .to_regex(RegexOptions::MULTILINE)
            .unwrap();
        assert_eq!(re.find_iter("a\nx\nb").count(), 1);
    }

    #[test]
    fn unsupported() {
        let p = Patterns::new();
        let e = p.char('a');
        assert_eq!(
            e.to_regex(RegexOptions::RIGHT_TO_LEFT | RegexOptions::IGNORE_CASE)
                .unwrap_err(),
            Error::UnsupportedOption(RegexOptions::RIGHT_TO_LEFT)
        );
        let e = p.lookahead(p.char('x')).unwrap();
        assert!(matches!(
            e.to_regex(RegexOptions::empty()),
            Err(Error::Regex(_))
        ));
    }
}
