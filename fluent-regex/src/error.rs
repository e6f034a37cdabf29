use fluent_unicode::UnknownNameError;

use crate::options::RegexOptions;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors of building and rendering patterns.
///
/// Invalid arguments are reported by the builder call that introduced them. Only
/// [`Error::CircularReference`] depends on the shape of the whole chain and is reported by the
/// renderer.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("code point {0:#X} is not a character in 0..=0xFFFF")]
    InvalidCodePoint(u32),
    #[error("code {0:#X} is out of the range 0..=0xFF")]
    InvalidAsciiCode(u32),
    #[error("invalid quantifier {{{min},{max}}}: max is less than min")]
    InvalidQuantifier { min: u32, max: u32 },
    #[error("invalid character range {start:?}-{end:?}: end is less than start")]
    InvalidRange { start: char, end: char },
    #[error("character group is empty")]
    EmptyCharGroup,
    #[error("invalid character group: {0}")]
    InvalidCharGroup(&'static str),
    #[error("alternation has no alternatives")]
    EmptyAlternation,
    #[error("invalid group name `{0}`")]
    InvalidGroupName(String),
    #[error("invalid group number {0}")]
    InvalidGroupNumber(u32),
    #[error("comment cannot contain `)`")]
    InvalidComment,
    #[error("{0} cannot be quantified")]
    NotQuantifiable(&'static str),
    #[error("lazy modifier must follow a quantifier")]
    LazyWithoutQuantifier,
    #[error("expression belongs to another `Patterns`")]
    ForeignExpr,
    #[error("circular reference detected")]
    CircularReference,
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),
    #[error("options {0:?} are not supported by the regex engine")]
    UnsupportedOption(RegexOptions),
    #[cfg(feature = "regex")]
    #[error(transparent)]
    Regex(#[from] ::regex::Error),
}

impl Error {
    /// Whether the error is a contract violation by one of the arguments of a builder call,
    /// as opposed to a structural problem of the chain or a failure of the regex engine.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Error::CircularReference | Error::UnsupportedOption(_)
        ) && !self.is_regex()
    }

    fn is_regex(&self) -> bool {
        #[cfg(feature = "regex")]
        return matches!(self, Error::Regex(_));
        #[cfg(not(feature = "regex"))]
        false
    }
}
