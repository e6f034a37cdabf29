use crate::{
    error::{Error, Result},
    options::RegexOptions,
};

pub const NON_CAPTURING_OPEN: &str = "(?:";
pub const ATOMIC_OPEN: &str = "(?>";
pub const GROUP_CLOSE: char = ')';

/// Delimiters around group names, `(?<name>...)` or `(?'name'...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentifierBoundary {
    #[default]
    Angle,
    Apostrophe,
}

impl IdentifierBoundary {
    pub const fn open(self) -> char {
        match self {
            IdentifierBoundary::Angle => '<',
            IdentifierBoundary::Apostrophe => '\'',
        }
    }

    pub const fn close(self) -> char {
        match self {
            IdentifierBoundary::Angle => '>',
            IdentifierBoundary::Apostrophe => '\'',
        }
    }

    pub(crate) fn write_name(self, out: &mut String, name: &str) {
        out.push(self.open());
        out.push_str(name);
        out.push(self.close());
    }
}

/// Check that `name` can be used as a group name.
///
/// A name consists of letters, digits and `_`, and is either a number or does not start with
/// a digit.
pub fn validate_group_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() => name.chars().all(|c| c.is_ascii_digit()),
        Some(_) => name.chars().all(|c| c.is_alphanumeric() || c == '_'),
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidGroupName(name.to_owned()))
    }
}

/// `(?<name>`
pub fn named_group_open(out: &mut String, name: &str, boundary: IdentifierBoundary) {
    out.push_str("(?");
    boundary.write_name(out, name);
}

/// `(?<name-previous>` or `(?<-previous>` without a name.
pub fn balancing_group_open(
    out: &mut String,
    name: Option<&str>,
    previous: &str,
    boundary: IdentifierBoundary,
) {
    out.push_str("(?");
    out.push(boundary.open());
    if let Some(name) = name {
        out.push_str(name);
    }
    out.push('-');
    out.push_str(previous);
    out.push(boundary.close());
}

/// Write the `imnsx-imnsx` part of inline options.
///
/// Options in both masks are disabled. Returns `false` if nothing was written.
pub fn inline_options(out: &mut String, enable: RegexOptions, disable: RegexOptions) -> bool {
    let disable = disable & RegexOptions::INLINE;
    let enable = enable & RegexOptions::INLINE & !disable;
    out.extend(enable.inline_letters());
    if !disable.is_empty() {
        out.push('-');
        out.extend(disable.inline_letters());
    }
    !(enable.is_empty() && disable.is_empty())
}

/// `(?imnsx-imnsx:`, or `(?:` if no inline option is set.
pub fn options_group_open(out: &mut String, enable: RegexOptions, disable: RegexOptions) {
    out.push_str("(?");
    inline_options(out, enable, disable);
    out.push(':');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn written(f: impl FnOnce(&mut String)) -> String {
        let mut s = String::new();
        f(&mut s);
        s
    }

    #[test]
    fn group_name() {
        assert!(validate_group_name("foo").is_ok());
        assert!(validate_group_name("_foo1").is_ok());
        assert!(validate_group_name("año").is_ok());
        assert!(validate_group_name("12").is_ok());
        assert!(validate_group_name("").is_err());
        assert!(validate_group_name("1a").is_err());
        assert!(validate_group_name("a-b").is_err());
        assert_eq!(
            validate_group_name("a b"),
            Err(Error::InvalidGroupName("a b".into()))
        );
    }

    #[test]
    fn named() {
        assert_eq!(
            written(|s| named_group_open(s, "foo", IdentifierBoundary::Angle)),
            "(?<foo>"
        );
        assert_eq!(
            written(|s| named_group_open(s, "foo", IdentifierBoundary::Apostrophe)),
            "(?'foo'"
        );
        assert_eq!(
            written(|s| balancing_group_open(s, Some("close"), "open", IdentifierBoundary::Angle)),
            "(?<close-open>"
        );
        assert_eq!(
            written(|s| balancing_group_open(s, None, "open", IdentifierBoundary::Apostrophe)),
            "(?'-open'"
        );
    }

    #[test]
    fn options() {
        let i = RegexOptions::IGNORE_CASE;
        let m = RegexOptions::MULTILINE;
        let s = RegexOptions::SINGLELINE;
        assert_eq!(written(|out| options_group_open(out, i | m, s)), "(?im-s:");
        assert_eq!(written(|out| options_group_open(out, i | s, s)), "(?i-s:");
        assert_eq!(
            written(|out| options_group_open(out, RegexOptions::empty(), RegexOptions::empty())),
            "(?:"
        );
        assert_eq!(
            written(|out| options_group_open(out, RegexOptions::RIGHT_TO_LEFT, i)),
            "(?-i:"
        );
        let mut out = String::new();
        assert!(!inline_options(&mut out, RegexOptions::ECMA_SCRIPT, RegexOptions::empty()));
        assert_eq!(out, "");
    }
}
