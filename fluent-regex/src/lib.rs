/*!
Build regular expression patterns with a fluent API.

Patterns are assembled from small expression nodes instead of string concatenation, so that
literals are always escaped for the context they appear in, groups are always balanced, and
sub-expressions can be reused in several places.

## Features
- [Literals](Patterns::text) escaped per context: `.` is escaped outside `[...]`, `-` inside
- Character classes, [character groups](CharGroup) with ranges, negation and subtraction
- Capturing, [named](Patterns::named_group), non-capturing, atomic, balancing and inline
  options groups
- Lookaround assertions, backreferences, [alternations](Patterns::any_of) and conditionals
- Quantifiers on single nodes or [whole chains](Patterns::repeat), greedy or lazy
- [Named Unicode blocks and general categories](fluent_unicode), and ASCII symbols by name
- Dialect settings, e.g. `(?<name>...)` vs `(?'name'...)`, see [`RenderSettings`]
- Optional compilation with the [`regex`](https://docs.rs/regex/) crate

## Example
```
use fluent_regex::{CharGroup, Patterns};

let p = Patterns::new();
let user = p.char_group(CharGroup::new().word_char().chars(".-"))?.one_or_more()?;
let host = p.word_char().one_or_more()?.char('.').word_char().count_range(2, 6)?;
let email = p
    .start()
    .named_group("user", user)?
    .char('@')
    .named_group("host", host)?
    .end();
assert_eq!(
    email.to_pattern()?,
    r"^(?<user>[\w.\-]+)@(?<host>\w+\.\w{2,6})$"
);
# Ok::<(), fluent_regex::Error>(())
```

With the `regex` feature:
```
# #[cfg(feature = "regex")]
# {
use fluent_regex::{Patterns, RegexOptions};

let p = Patterns::new();
let re = p
    .start()
    .text("v")
    .digit()
    .one_or_more()?
    .maybe_of(p.char('.').digit().one_or_more()?)?
    .end()
    .to_regex(RegexOptions::empty())?;
assert!(re.is_match("v1.20"));
assert!(!re.is_match("v1."));
# }
# Ok::<(), fluent_regex::Error>(())
```

## Logging
Rendering and compilation are logged with the [`log`](https://docs.rs/log/) facade: `debug`
for every rendered pattern and compiled regex, `trace` for every rendered node.
*/
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod char_group;
mod error;
pub mod escape;
mod expr;
pub mod options;
#[cfg(feature = "regex")]
pub mod regex;
pub mod render;
pub mod syntax;

pub use char_group::CharGroup;
pub use error::{Error, Result};
pub use escape::ControlEscape;
pub use expr::{Expr, ExprId, FrozenPatterns, Patterns};
pub use options::RegexOptions;
pub use render::RenderSettings;
pub use syntax::{IdentifierBoundary, Quantifier};

pub use fluent_unicode::{self as unicode, GeneralCategory, NamedBlock};
