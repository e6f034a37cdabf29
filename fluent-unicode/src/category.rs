/*!
Unicode general categories, as accepted by `\p{Lu}` and `\P{Lu}`.

```
use fluent_unicode::GeneralCategory;

assert_eq!(GeneralCategory::UppercaseLetter.abbrev(), "Lu");
assert_eq!(GeneralCategory::UppercaseLetter.major(), GeneralCategory::Letter);
assert_eq!("Nd".parse(), Ok(GeneralCategory::DecimalDigitNumber));
assert_eq!("DecimalDigitNumber".parse(), Ok(GeneralCategory::DecimalDigitNumber));
```
*/
use std::str::FromStr;

use crate::UnknownNameError;

macro_rules! general_categories {
    ($($variant:ident => $abbrev:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum GeneralCategory {
            $($variant,)*
        }

        impl GeneralCategory {
            pub const ALL: &'static [GeneralCategory] = &[$(GeneralCategory::$variant,)*];

            const TABLE: &'static [(&'static str, &'static str)] =
                &[$(($abbrev, stringify!($variant)),)*];
        }
    };
}

general_categories! {
    Letter => "L";
    UppercaseLetter => "Lu";
    LowercaseLetter => "Ll";
    TitlecaseLetter => "Lt";
    ModifierLetter => "Lm";
    OtherLetter => "Lo";

    Mark => "M";
    NonSpacingMark => "Mn";
    SpacingCombiningMark => "Mc";
    EnclosingMark => "Me";

    Number => "N";
    DecimalDigitNumber => "Nd";
    LetterNumber => "Nl";
    OtherNumber => "No";

    Punctuation => "P";
    ConnectorPunctuation => "Pc";
    DashPunctuation => "Pd";
    OpenPunctuation => "Ps";
    ClosePunctuation => "Pe";
    InitialQuotePunctuation => "Pi";
    FinalQuotePunctuation => "Pf";
    OtherPunctuation => "Po";

    Symbol => "S";
    MathSymbol => "Sm";
    CurrencySymbol => "Sc";
    ModifierSymbol => "Sk";
    OtherSymbol => "So";

    Separator => "Z";
    SpaceSeparator => "Zs";
    LineSeparator => "Zl";
    ParagraphSeparator => "Zp";

    Other => "C";
    Control => "Cc";
    Format => "Cf";
    Surrogate => "Cs";
    PrivateUse => "Co";
    OtherNotAssigned => "Cn";
}

impl GeneralCategory {
    /// The name used inside `\p{...}`.
    pub const fn abbrev(self) -> &'static str {
        Self::TABLE[self as usize].0
    }

    /// The long name, e.g. `UppercaseLetter`.
    pub const fn long_name(self) -> &'static str {
        Self::TABLE[self as usize].1
    }

    /// Whether this is one of the one-letter classes that group the others.
    pub const fn is_major(self) -> bool {
        self.abbrev().len() == 1
    }

    /// The one-letter class this category belongs to.
    pub fn major(self) -> GeneralCategory {
        match self.abbrev().as_bytes()[0] {
            b'L' => Self::Letter,
            b'M' => Self::Mark,
            b'N' => Self::Number,
            b'P' => Self::Punctuation,
            b'S' => Self::Symbol,
            b'Z' => Self::Separator,
            _ => Self::Other,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for GeneralCategory {
    type Err = UnknownNameError;

    /// Parse either the abbreviation (`Lu`) or the long name (`UppercaseLetter`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABLE
            .iter()
            .position(|&(abbrev, long)| abbrev == s || long == s)
            .and_then(Self::from_index)
            .ok_or_else(|| UnknownNameError::new("general category", s))
    }
}
