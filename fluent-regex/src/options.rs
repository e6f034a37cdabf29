use bitflags::bitflags;

bitflags! {
    /// Pattern options.
    ///
    /// Values follow the host dialect, so masks can be exchanged as integers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexOptions: u32 {
        /// `i`
        const IGNORE_CASE = 1;
        /// `m`: `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 1;
        /// `n`: only named groups capture.
        const EXPLICIT_CAPTURE = 1 << 2;
        /// `s`: `.` matches `\n` too.
        const SINGLELINE = 1 << 4;
        /// `x`
        const IGNORE_PATTERN_WHITESPACE = 1 << 5;
        const RIGHT_TO_LEFT = 1 << 6;
        const ECMA_SCRIPT = 1 << 8;
        const CULTURE_INVARIANT = 1 << 9;
    }
}

const LETTERS: [(RegexOptions, char); 5] = [
    (RegexOptions::IGNORE_CASE, 'i'),
    (RegexOptions::MULTILINE, 'm'),
    (RegexOptions::EXPLICIT_CAPTURE, 'n'),
    (RegexOptions::SINGLELINE, 's'),
    (RegexOptions::IGNORE_PATTERN_WHITESPACE, 'x'),
];

impl RegexOptions {
    /// Options that can be written inline, e.g. `(?im-s:...)`.
    pub const INLINE: Self = Self::IGNORE_CASE
        .union(Self::MULTILINE)
        .union(Self::EXPLICIT_CAPTURE)
        .union(Self::SINGLELINE)
        .union(Self::IGNORE_PATTERN_WHITESPACE);

    /// Inline letters of the options in `self`, in `imnsx` order.
    ///
    /// Options that cannot be written inline are skipped.
    pub fn inline_letters(self) -> impl Iterator<Item = char> {
        LETTERS
            .into_iter()
            .filter(move |&(option, _)| self.contains(option))
            .map(|(_, letter)| letter)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inline_letters() {
        assert_eq!(RegexOptions::empty().inline_letters().join(""), "");
        assert_eq!(RegexOptions::INLINE.inline_letters().join(""), "imnsx");
        assert_eq!(
            (RegexOptions::SINGLELINE | RegexOptions::IGNORE_CASE | RegexOptions::ECMA_SCRIPT)
                .inline_letters()
                .join(""),
            "is"
        );
    }

    #[test]
    fn bits() {
        assert_eq!(RegexOptions::INLINE.bits(), 0b11_0111);
        assert_eq!(RegexOptions::CULTURE_INVARIANT.bits(), 512);
    }
}
