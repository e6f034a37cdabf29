/*!
Named Unicode blocks, as accepted by `\p{IsName}` and `\P{IsName}`.

Only the blocks of the Basic Multilingual Plane are available, since the pattern dialect
addresses UTF-16 code units.

```
use fluent_unicode::NamedBlock;

assert_eq!(NamedBlock::Cyrillic.name(), "IsCyrillic");
assert_eq!(NamedBlock::Cyrillic.range(), 0x0400..=0x04FF);
assert_eq!("GreekandCoptic".parse(), Ok(NamedBlock::Greek));
assert_eq!(NamedBlock::of('ж'), Some(NamedBlock::Cyrillic));
```
*/
use std::{ops::RangeInclusive, str::FromStr};

use crate::UnknownNameError;

macro_rules! named_blocks {
    ($($variant:ident => $name:literal, $start:literal..=$end:literal;)*) => {
        /// A named Unicode block.
        ///
        /// Variants are ordered by code point, [`NamedBlock::ALL`] is sorted.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NamedBlock {
            $($variant,)*
        }

        impl NamedBlock {
            pub const ALL: &'static [NamedBlock] = &[$(NamedBlock::$variant,)*];

            const TABLE: &'static [(&'static str, u32, u32)] = &[$(($name, $start, $end),)*];
        }
    };
}

named_blocks! {
    BasicLatin => "IsBasicLatin", 0x0000..=0x007F;
    Latin1Supplement => "IsLatin-1Supplement", 0x0080..=0x00FF;
    LatinExtendedA => "IsLatinExtended-A", 0x0100..=0x017F;
    LatinExtendedB => "IsLatinExtended-B", 0x0180..=0x024F;
    IpaExtensions => "IsIPAExtensions", 0x0250..=0x02AF;
    SpacingModifierLetters => "IsSpacingModifierLetters", 0x02B0..=0x02FF;
    CombiningDiacriticalMarks => "IsCombiningDiacriticalMarks", 0x0300..=0x036F;
    Greek => "IsGreek", 0x0370..=0x03FF;
    Cyrillic => "IsCyrillic", 0x0400..=0x04FF;
    CyrillicSupplement => "IsCyrillicSupplement", 0x0500..=0x052F;
    Armenian => "IsArmenian", 0x0530..=0x058F;
    Hebrew => "IsHebrew", 0x0590..=0x05FF;
    Arabic => "IsArabic", 0x0600..=0x06FF;
    Syriac => "IsSyriac", 0x0700..=0x074F;
    Thaana => "IsThaana", 0x0780..=0x07BF;
    Devanagari => "IsDevanagari", 0x0900..=0x097F;
    Bengali => "IsBengali", 0x0980..=0x09FF;
    Gurmukhi => "IsGurmukhi", 0x0A00..=0x0A7F;
    Gujarati => "IsGujarati", 0x0A80..=0x0AFF;
    Oriya => "IsOriya", 0x0B00..=0x0B7F;
    Tamil => "IsTamil", 0x0B80..=0x0BFF;
    Telugu => "IsTelugu", 0x0C00..=0x0C7F;
    Kannada => "IsKannada", 0x0C80..=0x0CFF;
    Malayalam => "IsMalayalam", 0x0D00..=0x0D7F;
    Sinhala => "IsSinhala", 0x0D80..=0x0DFF;
    Thai => "IsThai", 0x0E00..=0x0E7F;
    Lao => "IsLao", 0x0E80..=0x0EFF;
    Tibetan => "IsTibetan", 0x0F00..=0x0FFF;
    Myanmar => "IsMyanmar", 0x1000..=0x109F;
    Georgian => "IsGeorgian", 0x10A0..=0x10FF;
    HangulJamo => "IsHangulJamo", 0x1100..=0x11FF;
    Ethiopic => "IsEthiopic", 0x1200..=0x137F;
    Cherokee => "IsCherokee", 0x13A0..=0x13FF;
    UnifiedCanadianAboriginalSyllabics => "IsUnifiedCanadianAboriginalSyllabics", 0x1400..=0x167F;
    Ogham => "IsOgham", 0x1680..=0x169F;
    Runic => "IsRunic", 0x16A0..=0x16FF;
    Tagalog => "IsTagalog", 0x1700..=0x171F;
    Hanunoo => "IsHanunoo", 0x1720..=0x173F;
    Buhid => "IsBuhid", 0x1740..=0x175F;
    Tagbanwa => "IsTagbanwa", 0x1760..=0x177F;
    Khmer => "IsKhmer", 0x1780..=0x17FF;
    Mongolian => "IsMongolian", 0x1800..=0x18AF;
    Limbu => "IsLimbu", 0x1900..=0x194F;
    TaiLe => "IsTaiLe", 0x1950..=0x197F;
    KhmerSymbols => "IsKhmerSymbols", 0x19E0..=0x19FF;
    PhoneticExtensions => "IsPhoneticExtensions", 0x1D00..=0x1D7F;
    LatinExtendedAdditional => "IsLatinExtendedAdditional", 0x1E00..=0x1EFF;
    GreekExtended => "IsGreekExtended", 0x1F00..=0x1FFF;
    GeneralPunctuation => "IsGeneralPunctuation", 0x2000..=0x206F;
    SuperscriptsandSubscripts => "IsSuperscriptsandSubscripts", 0x2070..=0x209F;
    CurrencySymbols => "IsCurrencySymbols", 0x20A0..=0x20CF;
    CombiningDiacriticalMarksforSymbols => "IsCombiningDiacriticalMarksforSymbols", 0x20D0..=0x20FF;
    LetterlikeSymbols => "IsLetterlikeSymbols", 0x2100..=0x214F;
    NumberForms => "IsNumberForms", 0x2150..=0x218F;
    Arrows => "IsArrows", 0x2190..=0x21FF;
    MathematicalOperators => "IsMathematicalOperators", 0x2200..=0x22FF;
    MiscellaneousTechnical => "IsMiscellaneousTechnical", 0x2300..=0x23FF;
    ControlPictures => "IsControlPictures", 0x2400..=0x243F;
    OpticalCharacterRecognition => "IsOpticalCharacterRecognition", 0x2440..=0x245F;
    EnclosedAlphanumerics => "IsEnclosedAlphanumerics", 0x2460..=0x24FF;
    BoxDrawing => "IsBoxDrawing", 0x2500..=0x257F;
    BlockElements => "IsBlockElements", 0x2580..=0x259F;
    GeometricShapes => "IsGeometricShapes", 0x25A0..=0x25FF;
    MiscellaneousSymbols => "IsMiscellaneousSymbols", 0x2600..=0x26FF;
    Dingbats => "IsDingbats", 0x2700..=0x27BF;
    MiscellaneousMathematicalSymbolsA => "IsMiscellaneousMathematicalSymbols-A", 0x27C0..=0x27EF;
    SupplementalArrowsA => "IsSupplementalArrows-A", 0x27F0..=0x27FF;
    BraillePatterns => "IsBraillePatterns", 0x2800..=0x28FF;
    SupplementalArrowsB => "IsSupplementalArrows-B", 0x2900..=0x297F;
    MiscellaneousMathematicalSymbolsB => "IsMiscellaneousMathematicalSymbols-B", 0x2980..=0x29FF;
    SupplementalMathematicalOperators => "IsSupplementalMathematicalOperators", 0x2A00..=0x2AFF;
    MiscellaneousSymbolsandArrows => "IsMiscellaneousSymbolsandArrows", 0x2B00..=0x2BFF;
    CjkRadicalsSupplement => "IsCJKRadicalsSupplement", 0x2E80..=0x2EFF;
    KangxiRadicals => "IsKangxiRadicals", 0x2F00..=0x2FDF;
    IdeographicDescriptionCharacters => "IsIdeographicDescriptionCharacters", 0x2FF0..=0x2FFF;
    CjkSymbolsandPunctuation => "IsCJKSymbolsandPunctuation", 0x3000..=0x303F;
    Hiragana => "IsHiragana", 0x3040..=0x309F;
    Katakana => "IsKatakana", 0x30A0..=0x30FF;
    Bopomofo => "IsBopomofo", 0x3100..=0x312F;
    HangulCompatibilityJamo => "IsHangulCompatibilityJamo", 0x3130..=0x318F;
    Kanbun => "IsKanbun", 0x3190..=0x319F;
    BopomofoExtended => "IsBopomofoExtended", 0x31A0..=0x31BF;
    KatakanaPhoneticExtensions => "IsKatakanaPhoneticExtensions", 0x31F0..=0x31FF;
    EnclosedCjkLettersandMonths => "IsEnclosedCJKLettersandMonths", 0x3200..=0x32FF;
    CjkCompatibility => "IsCJKCompatibility", 0x3300..=0x33FF;
    CjkUnifiedIdeographsExtensionA => "IsCJKUnifiedIdeographsExtensionA", 0x3400..=0x4DBF;
    YijingHexagramSymbols => "IsYijingHexagramSymbols", 0x4DC0..=0x4DFF;
    CjkUnifiedIdeographs => "IsCJKUnifiedIdeographs", 0x4E00..=0x9FFF;
    YiSyllables => "IsYiSyllables", 0xA000..=0xA48F;
    YiRadicals => "IsYiRadicals", 0xA490..=0xA4CF;
    HangulSyllables => "IsHangulSyllables", 0xAC00..=0xD7AF;
    HighSurrogates => "IsHighSurrogates", 0xD800..=0xDB7F;
    HighPrivateUseSurrogates => "IsHighPrivateUseSurrogates", 0xDB80..=0xDBFF;
    LowSurrogates => "IsLowSurrogates", 0xDC00..=0xDFFF;
    PrivateUse => "IsPrivateUse", 0xE000..=0xF8FF;
    CjkCompatibilityIdeographs => "IsCJKCompatibilityIdeographs", 0xF900..=0xFAFF;
    AlphabeticPresentationForms => "IsAlphabeticPresentationForms", 0xFB00..=0xFB4F;
    ArabicPresentationFormsA => "IsArabicPresentationForms-A", 0xFB50..=0xFDFF;
    VariationSelectors => "IsVariationSelectors", 0xFE00..=0xFE0F;
    CombiningHalfMarks => "IsCombiningHalfMarks", 0xFE20..=0xFE2F;
    CjkCompatibilityForms => "IsCJKCompatibilityForms", 0xFE30..=0xFE4F;
    SmallFormVariants => "IsSmallFormVariants", 0xFE50..=0xFE6F;
    ArabicPresentationFormsB => "IsArabicPresentationForms-B", 0xFE70..=0xFEFF;
    HalfwidthandFullwidthForms => "IsHalfwidthandFullwidthForms", 0xFF00..=0xFFEF;
    Specials => "IsSpecials", 0xFFF0..=0xFFFF;
}

/// Alternative spellings accepted by the pattern dialect, without the `Is` prefix.
const ALIASES: &[(&str, NamedBlock)] = &[
    ("GreekandCoptic", NamedBlock::Greek),
    (
        "CombiningMarksforSymbols",
        NamedBlock::CombiningDiacriticalMarksforSymbols,
    ),
    ("PrivateUseArea", NamedBlock::PrivateUse),
];

impl NamedBlock {
    /// The name used inside `\p{...}`, including the `Is` prefix.
    pub const fn name(self) -> &'static str {
        Self::TABLE[self as usize].0
    }

    /// Code points covered by this block.
    ///
    /// Code points rather than `char`s, since some blocks are surrogates.
    pub const fn range(self) -> RangeInclusive<u32> {
        let (_, start, end) = Self::TABLE[self as usize];
        start..=end
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Find the block that contains `c`, if any.
    pub fn of(c: char) -> Option<Self> {
        let code = c as u32;
        let i = Self::TABLE.partition_point(|&(_, _, end)| end < code);
        Self::TABLE
            .get(i)
            .filter(|&&(_, start, _)| start <= code)
            .and_then(|_| Self::from_index(i))
    }
}

impl FromStr for NamedBlock {
    type Err = UnknownNameError;

    /// Parse a block name, with or without the `Is` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("Is").unwrap_or(s);
        Self::TABLE
            .iter()
            .position(|&(full, _, _)| &full[2..] == name)
            .and_then(Self::from_index)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|&&(alias, _)| alias == name)
                    .map(|&(_, block)| block)
            })
            .ok_or_else(|| UnknownNameError::new("block", s))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn table_is_sorted_and_disjoint() {
        for pair in NamedBlock::TABLE.windows(2) {
            let (_, start, end) = pair[0];
            let (name, next_start, _) = pair[1];
            assert!(start <= end);
            assert!(end < next_start, "{name} overlaps its predecessor");
        }
        assert_eq!(NamedBlock::ALL.len(), NamedBlock::TABLE.len());
        assert!(NamedBlock::TABLE
            .iter()
            .all(|(name, _, end)| name.starts_with("Is") && *end <= 0xFFFF));
    }

    #[test]
    fn name() {
        assert_eq!(NamedBlock::BasicLatin.name(), "IsBasicLatin");
        assert_eq!(NamedBlock::Latin1Supplement.name(), "IsLatin-1Supplement");
        assert_eq!(NamedBlock::Specials.name(), "IsSpecials");
        assert_eq!(NamedBlock::Specials.range(), 0xFFF0..=0xFFFF);
    }

    #[test]
    fn parse() {
        assert_eq!("IsCyrillic".parse(), Ok(NamedBlock::Cyrillic));
        assert_eq!("Cyrillic".parse(), Ok(NamedBlock::Cyrillic));
        assert_eq!("IsGreekandCoptic".parse(), Ok(NamedBlock::Greek));
        assert_eq!("PrivateUseArea".parse(), Ok(NamedBlock::PrivateUse));
        assert_eq!(
            "IsKlingon".parse::<NamedBlock>(),
            Err(UnknownNameError::new("block", "IsKlingon"))
        );
        for &block in NamedBlock::ALL {
            assert_eq!(block.name().parse(), Ok(block));
        }
    }

    #[test]
    fn of() {
        assert_eq!(NamedBlock::of('a'), Some(NamedBlock::BasicLatin));
        assert_eq!(NamedBlock::of('é'), Some(NamedBlock::Latin1Supplement));
        assert_eq!(NamedBlock::of('あ'), Some(NamedBlock::Hiragana));
        assert_eq!(NamedBlock::of('\u{FFFD}'), Some(NamedBlock::Specials));
        // Unassigned gap between Thaana and Devanagari
        assert_eq!(NamedBlock::of('\u{0800}'), None);
        assert_eq!(NamedBlock::of('😀'), None);
    }
}
