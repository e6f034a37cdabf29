//! Unicode tables used when building regular expression patterns.
/*!
## Features
- [Named Unicode blocks](block), as written in `\p{IsCyrillic}`
- [Unicode general categories](category), as written in `\p{Lu}`
- [Named ASCII symbols](ascii), so that `"Comma"` or `"Tab"` can be resolved to a character
  without a dedicated function per symbol

All lookups by name are fallible and report an [`UnknownNameError`] instead of degrading to an
empty string.
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod ascii;
pub mod block;
pub mod category;

pub use block::NamedBlock;
pub use category::GeneralCategory;

/// A name that is not present in one of the tables of this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {table} name `{name}`")]
pub struct UnknownNameError {
    /// Which table was searched, e.g. `"block"`.
    pub table: &'static str,
    pub name: String,
}

impl UnknownNameError {
    pub(crate) fn new(table: &'static str, name: &str) -> Self {
        Self {
            table,
            name: name.to_owned(),
        }
    }
}
