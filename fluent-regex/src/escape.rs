/*!
Escaping of literal characters.

Whether a character must be escaped depends on where it is written: `.` and `*` are
metacharacters outside a character class but literal inside `[...]`, while `-`, `]`, `&` and `~`
are the other way around.

```
use fluent_regex::escape::{escape, escape_required, escape_str};

assert_eq!(escape_str("a.b*c", false), r"a\.b\*c");
assert_eq!(escape_str("a-z", false), "a-z");
assert_eq!(escape_str("a-z", true), r"a\-z");

assert!(escape_required('-' as u32, true)?);
assert!(!escape_required('-' as u32, false)?);
assert_eq!(escape('\t' as u32, false)?, r"\t");
assert_eq!(escape(0x01, false)?, r"\x01");
# Ok::<(), fluent_regex::Error>(())
```
*/
use crate::error::{Error, Result};

/// How a code point in `0..=0xFF` is treated when it is written literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeKind {
    None,
    /// Escaped with a backslash in both contexts.
    NeedsBackslash,
    /// Escaped with a backslash outside a character class only.
    MetacharOutsideClass,
    /// Escaped with a backslash inside a character class only.
    MetacharInsideClass,
    /// Escaped as `\xHH`.
    ControlChar,
    /// Escaped as a named control escape, e.g. `\t`, or as `\xHH` with [`ControlEscape::Hex`].
    SpecialControlChar,
}

impl EscapeKind {
    pub const fn is_required(self, in_class: bool) -> bool {
        match self {
            EscapeKind::None => false,
            EscapeKind::NeedsBackslash | EscapeKind::ControlChar | EscapeKind::SpecialControlChar => {
                true
            }
            EscapeKind::MetacharOutsideClass => !in_class,
            EscapeKind::MetacharInsideClass => in_class,
        }
    }
}

/// How [`EscapeKind::SpecialControlChar`] characters are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlEscape {
    /// `\t`, `\n`, `\r`, `\f`, `\v`, `\a`, `\e`
    #[default]
    Named,
    /// `\x09`, `\x0A`, ...
    Hex,
}

static TABLE: [EscapeKind; 256] = build_table();

const fn build_table() -> [EscapeKind; 256] {
    let mut table = [EscapeKind::None; 256];

    let mut i = 0;
    while i < 0x20 {
        table[i] = EscapeKind::ControlChar;
        i += 1;
    }
    table[0x7F] = EscapeKind::ControlChar;
    // C1 controls
    i = 0x80;
    while i < 0xA0 {
        table[i] = EscapeKind::ControlChar;
        i += 1;
    }

    let special = [0x07, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x1B];
    i = 0;
    while i < special.len() {
        table[special[i]] = EscapeKind::SpecialControlChar;
        i += 1;
    }

    let backslash = *b"\\^[";
    i = 0;
    while i < backslash.len() {
        table[backslash[i] as usize] = EscapeKind::NeedsBackslash;
        i += 1;
    }

    let outside = *b".${()|*+?#";
    i = 0;
    while i < outside.len() {
        table[outside[i] as usize] = EscapeKind::MetacharOutsideClass;
        i += 1;
    }

    // `&&` and `~~` are set operators inside a class in some dialects, like `--`
    let inside = *b"-]&~";
    i = 0;
    while i < inside.len() {
        table[inside[i] as usize] = EscapeKind::MetacharInsideClass;
        i += 1;
    }

    table
}

/// Classify a code point. Code points above `0xFF` are never escaped.
pub fn classify(code: u32) -> EscapeKind {
    match TABLE.get(code as usize) {
        Some(&kind) => kind,
        None => EscapeKind::None,
    }
}

/// Whether `code` needs escaping to be matched literally.
///
/// ## Errors
/// [`Error::InvalidCodePoint`] if `code` is above `0xFFFF`.
pub fn escape_required(code: u32, in_class: bool) -> Result<bool> {
    if code > 0xFFFF {
        return Err(Error::InvalidCodePoint(code));
    }
    Ok(classify(code).is_required(in_class))
}

/// The text that matches `code` literally.
///
/// Returns the character itself if [`escape_required()`] is `false`.
///
/// ## Errors
/// [`Error::InvalidCodePoint`] if `code` is above `0xFFFF` or is a surrogate.
pub fn escape(code: u32, in_class: bool) -> Result<String> {
    escape_with(code, in_class, ControlEscape::default())
}

pub fn escape_with(code: u32, in_class: bool, style: ControlEscape) -> Result<String> {
    let c = char_from_code(code)?;
    let mut s = String::with_capacity(4);
    write_escaped(&mut s, c, in_class, style);
    Ok(s)
}

/// Escape every character of `s`.
pub fn escape_str(s: &str, in_class: bool) -> String {
    let mut out = String::with_capacity(s.len());
    write_escaped_str(&mut out, s, in_class, ControlEscape::default());
    out
}

pub(crate) fn char_from_code(code: u32) -> Result<char> {
    if code > 0xFFFF {
        return Err(Error::InvalidCodePoint(code));
    }
    char::from_u32(code).ok_or(Error::InvalidCodePoint(code))
}

pub(crate) fn write_escaped_str(out: &mut String, s: &str, in_class: bool, style: ControlEscape) {
    for c in s.chars() {
        write_escaped(out, c, in_class, style);
    }
}

pub(crate) fn write_escaped(out: &mut String, c: char, in_class: bool, style: ControlEscape) {
    let kind = classify(c as u32);
    if !kind.is_required(in_class) {
        out.push(c);
        return;
    }
    match (kind, style) {
        (EscapeKind::SpecialControlChar, ControlEscape::Named) => {
            out.push('\\');
            out.push(control_letter(c));
        }
        (EscapeKind::ControlChar | EscapeKind::SpecialControlChar, _) => write_hex(out, c as u8),
        _ => {
            out.push('\\');
            out.push(c);
        }
    }
}

fn control_letter(c: char) -> char {
    match c {
        '\x07' => 'a',
        '\t' => 't',
        '\n' => 'n',
        '\x0B' => 'v',
        '\x0C' => 'f',
        '\r' => 'r',
        '\x1B' => 'e',
        _ => unreachable!("{c:?} is not a special control character"),
    }
}

fn write_hex(out: &mut String, b: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push_str("\\x");
    out.push(HEX[(b >> 4) as usize] as char);
    out.push(HEX[(b & 0xF) as usize] as char);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn required_matches_escape() {
        for code in 0..=0xFF {
            for in_class in [false, true] {
                let raw = char::from_u32(code).unwrap().to_string();
                assert_eq!(
                    escape_required(code, in_class).unwrap(),
                    escape(code, in_class).unwrap() != raw,
                    "{code:#X} in_class={in_class}"
                );
                assert_eq!(
                    escape_required(code, in_class).unwrap(),
                    escape_with(code, in_class, ControlEscape::Hex).unwrap() != raw,
                );
            }
        }
    }

    #[test]
    fn class_duality() {
        for c in ".${()|*+?#".chars() {
            assert_eq!(escape(c as u32, false).unwrap(), format!("\\{c}"));
            assert_eq!(escape(c as u32, true).unwrap(), c.to_string());
        }
        for c in "-]&~".chars() {
            assert_eq!(escape(c as u32, false).unwrap(), c.to_string());
            assert_eq!(escape(c as u32, true).unwrap(), format!("\\{c}"));
        }
        for c in "\\^[".chars() {
            assert_eq!(escape(c as u32, false).unwrap(), format!("\\{c}"));
            assert_eq!(escape(c as u32, true).unwrap(), format!("\\{c}"));
        }
    }

    #[test]
    fn controls() {
        assert_eq!(escape_str("\t\n\r\x0B\x0C\x07\x1B", false), r"\t\n\r\v\f\a\e");
        assert_eq!(escape_with('\n' as u32, true, ControlEscape::Hex).unwrap(), r"\x0A");
        assert_eq!(escape(0x00, true).unwrap(), r"\x00");
        assert_eq!(escape(0x7F, false).unwrap(), r"\x7F");
        assert_eq!(escape(0x85, false).unwrap(), r"\x85");
        assert_eq!(escape(0xA0, false).unwrap(), "\u{A0}");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(escape_required(0x100, false), Ok(false));
        assert_eq!(escape_required(0xFFFF, true), Ok(false));
        assert_eq!(escape_required(0x10000, false), Err(Error::InvalidCodePoint(0x10000)));
        assert_eq!(escape(0x10000, false), Err(Error::InvalidCodePoint(0x10000)));
        assert_eq!(escape(0xD800, false), Err(Error::InvalidCodePoint(0xD800)));
        assert_eq!(escape('ж' as u32, false).unwrap(), "ж");
    }

    #[test]
    fn literal() {
        assert_eq!(escape_str("a.b*c", false), r"a\.b\*c");
        assert_eq!(escape_str(r"C:\dir [1]", false), r"C:\\dir \[1]");
        assert_eq!(escape_str(r"C:\dir [1]", true), r"C:\\dir \[1\]");
    }
}
