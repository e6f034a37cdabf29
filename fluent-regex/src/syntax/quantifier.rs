use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Bounds {
    Maybe,
    ZeroOrMore,
    OneOrMore,
    Exactly(u32),
    AtLeast(u32),
    Range(u32, u32),
}

/// A repetition suffix: `?`, `*`, `+`, `{n}`, `{n,}` or `{n,m}`, optionally lazy.
///
/// ```
/// use fluent_regex::syntax::Quantifier;
///
/// assert_eq!(Quantifier::count(3).to_string(), "{3}");
/// assert_eq!(Quantifier::count_range(2, 5)?.to_string(), "{2,5}");
/// assert_eq!(Quantifier::at_least(1).lazy().to_string(), "{1,}?");
/// assert_eq!(Quantifier::ONE_OR_MORE.lazy().to_string(), "+?");
/// assert!(Quantifier::count_range(5, 2).is_err());
/// # Ok::<(), fluent_regex::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    bounds: Bounds,
    lazy: bool,
}

impl Quantifier {
    pub const MAYBE: Self = Self::new(Bounds::Maybe);
    pub const ZERO_OR_MORE: Self = Self::new(Bounds::ZeroOrMore);
    pub const ONE_OR_MORE: Self = Self::new(Bounds::OneOrMore);

    const fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            lazy: false,
        }
    }

    pub const fn count(n: u32) -> Self {
        Self::new(Bounds::Exactly(n))
    }

    /// `{min,max}`.
    ///
    /// ## Errors
    /// [`Error::InvalidQuantifier`] if `max < min`.
    pub fn count_range(min: u32, max: u32) -> Result<Self> {
        if max < min {
            return Err(Error::InvalidQuantifier { min, max });
        }
        Ok(Self::new(Bounds::Range(min, max)))
    }

    pub const fn at_least(n: u32) -> Self {
        Self::new(Bounds::AtLeast(n))
    }

    /// Match as few times as possible.
    pub const fn lazy(self) -> Self {
        Self { lazy: true, ..self }
    }

    pub const fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub const fn min(&self) -> u32 {
        match self.bounds {
            Bounds::Maybe | Bounds::ZeroOrMore => 0,
            Bounds::OneOrMore => 1,
            Bounds::Exactly(n) | Bounds::AtLeast(n) | Bounds::Range(n, _) => n,
        }
    }

    /// `None` if unbounded.
    pub const fn max(&self) -> Option<u32> {
        match self.bounds {
            Bounds::Maybe => Some(1),
            Bounds::ZeroOrMore | Bounds::OneOrMore | Bounds::AtLeast(_) => None,
            Bounds::Exactly(n) | Bounds::Range(_, n) => Some(n),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Bounds::Maybe => f.write_str("?"),
            Bounds::ZeroOrMore => f.write_str("*"),
            Bounds::OneOrMore => f.write_str("+"),
            Bounds::Exactly(n) => write!(f, "{{{n}}}"),
            Bounds::AtLeast(n) => write!(f, "{{{n},}}"),
            Bounds::Range(min, max) => write!(f, "{{{min},{max}}}"),
        }?;
        if self.lazy {
            f.write_str("?")?;
        }
        Ok(())
    }
}
