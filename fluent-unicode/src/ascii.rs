/*!
Named ASCII symbols.

Instead of one function per symbol (`comma()`, `tab()`, ...), names are resolved through a
single table:
```
use fluent_unicode::ascii;

assert_eq!(ascii::by_name("Comma"), Ok(b','));
assert_eq!(ascii::by_name("tab"), Ok(b'\t'));
assert_eq!(ascii::name_of(b'~'), Some("Tilde"));
```
*/

use crate::UnknownNameError;

/// Every named symbol, sorted by value.
pub static NAMES: &[(&str, u8)] = &[
    ("Null", 0x00),
    ("Bell", 0x07),
    ("Backspace", 0x08),
    ("Tab", 0x09),
    ("LineFeed", 0x0A),
    ("VerticalTab", 0x0B),
    ("FormFeed", 0x0C),
    ("CarriageReturn", 0x0D),
    ("Escape", 0x1B),
    ("Space", b' '),
    ("ExclamationMark", b'!'),
    ("QuoteMark", b'"'),
    ("NumberSign", b'#'),
    ("Dollar", b'$'),
    ("Percent", b'%'),
    ("Ampersand", b'&'),
    ("Apostrophe", b'\''),
    ("LeftParenthesis", b'('),
    ("RightParenthesis", b')'),
    ("Asterisk", b'*'),
    ("Plus", b'+'),
    ("Comma", b','),
    ("Hyphen", b'-'),
    ("Period", b'.'),
    ("Slash", b'/'),
    ("Colon", b':'),
    ("Semicolon", b';'),
    ("LessThan", b'<'),
    ("EqualsSign", b'='),
    ("GreaterThan", b'>'),
    ("QuestionMark", b'?'),
    ("AtSign", b'@'),
    ("LeftSquareBracket", b'['),
    ("Backslash", b'\\'),
    ("RightSquareBracket", b']'),
    ("CircumflexAccent", b'^'),
    ("Underscore", b'_'),
    ("GraveAccent", b'`'),
    ("LeftCurlyBracket", b'{'),
    ("VerticalBar", b'|'),
    ("RightCurlyBracket", b'}'),
    ("Tilde", b'~'),
    ("Delete", 0x7F),
];

/// Look up a symbol by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Result<u8, UnknownNameError> {
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, b)| b)
        .ok_or_else(|| UnknownNameError::new("ASCII", name))
}

pub fn name_of(b: u8) -> Option<&'static str> {
    NAMES
        .binary_search_by_key(&b, |&(_, value)| value)
        .ok()
        .map(|i| NAMES[i].0)
}

/// Printable, non-alphanumeric and not a space.
pub const fn is_punctuation(b: u8) -> bool {
    b.is_ascii_punctuation()
}

pub const fn is_control(b: u8) -> bool {
    b.is_ascii_control()
}
