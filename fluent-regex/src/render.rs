/*!
Rendering expression chains into pattern strings.

## Example
```
use fluent_regex::{render::RenderSettings, syntax::IdentifierBoundary, Patterns};

let p = Patterns::new();
let e = p.named_group("foo", p.char('x'))?.any_char();
assert_eq!(e.to_pattern()?, "(?<foo>x).");

let settings = RenderSettings::builder()
    .identifier_boundary(IdentifierBoundary::Apostrophe)
    .invariant_any_char(true)
    .build();
assert_eq!(e.render(&settings)?, r"(?'foo'x)[\s\S]");
# Ok::<(), fluent_regex::Error>(())
```
*/
use std::{collections::HashSet, ops::Range};

use bon::Builder;
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    escape::{write_escaped, write_escaped_str, ControlEscape},
    expr::{
        chain_stack,
        node::{Backreference, Condition, GroupKind},
        ExprId, Node, NodeKind,
    },
    syntax::{self, IdentifierBoundary, Quantifier},
};

/// Settings that change how a chain is written, but not what it matches.
#[derive(Builder, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// How group names are delimited, `(?<name>...)` or `(?'name'...)`.
    #[builder(default)]
    identifier_boundary: IdentifierBoundary,
    /// Render [`any_char()`](crate::Patterns::any_char) as `[\s\S]` instead of `.`, so that it
    /// matches `\n` whether [`SINGLELINE`](crate::RegexOptions::SINGLELINE) is set or not.
    #[builder(default)]
    invariant_any_char: bool,
    /// How control characters in literals are written, e.g. `\t` or `\x09`.
    #[builder(default)]
    control_escape: ControlEscape,
}

impl RenderSettings {
    pub fn identifier_boundary(&self) -> IdentifierBoundary {
        self.identifier_boundary
    }

    pub fn invariant_any_char(&self) -> bool {
        self.invariant_any_char
    }

    pub fn control_escape(&self) -> ControlEscape {
        self.control_escape
    }
}

/// State of one render call.
struct BuildContext<'a> {
    nodes: &'a [Node],
    settings: &'a RenderSettings,
    out: String,
    /// Nodes whose content is being written.
    active: HashSet<ExprId>,
    /// Output range of the last numbered backreference.
    backreference: Option<Range<usize>>,
}

/// Pending work of a render, kept on an explicit stack so that nesting depth is only limited
/// by memory.
enum Step<'a> {
    /// The chain ending with the id. `bool` is whether the chain is the whole content of a
    /// group or of the pattern, so that a lone alternation does not need its own group.
    Chain(ExprId, bool),
    Node(ExprId, bool),
    /// Close a node once everything inside it is written.
    Exit {
        id: ExprId,
        kind: &'a NodeKind,
        delimited: bool,
        start: usize,
    },
    Str(&'static str),
    Char(char),
    Quantifier(Quantifier),
}

pub(crate) fn render(nodes: &[Node], id: ExprId, settings: &RenderSettings) -> Result<String> {
    let mut cx = BuildContext {
        nodes,
        settings,
        out: String::new(),
        active: HashSet::new(),
        backreference: None,
    };
    cx.run(id)?;
    debug!("rendered {id:?}: {}", cx.out);
    Ok(cx.out)
}

impl<'a> BuildContext<'a> {
    fn run(&mut self, id: ExprId) -> Result<()> {
        let mut steps = vec![Step::Chain(id, true)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Chain(id, delimited) => {
                    // Newest node first, so the oldest one is popped first
                    let chain = chain_stack(self.nodes, id)?;
                    let sole = chain.len() == 1;
                    steps.extend(chain.into_iter().map(|id| Step::Node(id, delimited && sole)));
                }
                Step::Node(id, delimited) => self.enter(id, delimited, &mut steps)?,
                Step::Exit {
                    id,
                    kind,
                    delimited,
                    start,
                } => {
                    self.close(kind, delimited);
                    self.active.remove(&id);
                    self.delimit_backreference(start);
                }
                Step::Str(s) => self.out.push_str(s),
                Step::Char(c) => self.out.push(c),
                Step::Quantifier(quantifier) => self.out.push_str(&quantifier.to_string()),
            }
        }
        Ok(())
    }

    fn enter(&mut self, id: ExprId, delimited: bool, steps: &mut Vec<Step<'a>>) -> Result<()> {
        if !self.active.insert(id) {
            debug!("circular reference at {id:?}");
            return Err(Error::CircularReference);
        }
        let nodes = self.nodes;
        let kind = &nodes[id.0].kind;
        trace!("{id:?}: {}", kind.describe());

        let start = self.out.len();
        self.open(kind, delimited);
        steps.push(Step::Exit {
            id,
            kind,
            delimited,
            start,
        });
        let inner = self.content(kind)?;
        steps.extend(inner.into_iter().rev());
        Ok(())
    }

    fn open(&mut self, kind: &NodeKind, delimited: bool) {
        let boundary = self.settings.identifier_boundary;
        let out = &mut self.out;
        match kind {
            NodeKind::Assertion(kind, _) => out.push_str(kind.open()),
            NodeKind::Group(kind, _) => match kind {
                GroupKind::Capturing => out.push('('),
                GroupKind::Named(name) => syntax::named_group_open(out, name, boundary),
                GroupKind::NonCapturing => out.push_str(syntax::NON_CAPTURING_OPEN),
                GroupKind::Atomic => out.push_str(syntax::ATOMIC_OPEN),
                GroupKind::Balancing { name, previous } => {
                    syntax::balancing_group_open(out, name.as_deref(), previous, boundary)
                }
                GroupKind::Options { enable, disable } => {
                    syntax::options_group_open(out, *enable, *disable)
                }
            },
            NodeKind::Alternation(_) if !delimited => out.push_str(syntax::NON_CAPTURING_OPEN),
            NodeKind::Conditional { .. } => out.push_str("(?("),
            _ => (),
        }
    }

    /// Write the content of a leaf, or return the steps that write the content of a node with
    /// children, in output order.
    fn content(&mut self, kind: &'a NodeKind) -> Result<Vec<Step<'a>>> {
        let style = self.settings.control_escape;
        let mut inner = Vec::new();
        match kind {
            NodeKind::Text(text) => write_escaped_str(&mut self.out, text, false, style),
            NodeKind::Raw(pattern) => self.out.push_str(pattern),
            NodeKind::Char(c) => write_escaped(&mut self.out, *c, false, style),
            NodeKind::Class(class) => self.out.push_str(class.as_str()),
            NodeKind::AnyChar => self.out.push_str(if self.settings.invariant_any_char {
                syntax::ANY_CHAR_INVARIANT
            } else {
                syntax::ANY_CHAR
            }),
            NodeKind::CharGroup(group) => group.write(&mut self.out, style)?,
            NodeKind::Quantifier(quantifier) => self.out.push_str(&quantifier.to_string()),
            NodeKind::Lazy => self.out.push('?'),
            NodeKind::Repeat(inner_id, quantifier) => {
                if self.is_atom(*inner_id) {
                    inner.push(Step::Chain(*inner_id, false));
                } else {
                    inner.push(Step::Str(syntax::NON_CAPTURING_OPEN));
                    inner.push(Step::Chain(*inner_id, true));
                    inner.push(Step::Char(syntax::GROUP_CLOSE));
                }
                inner.push(Step::Quantifier(*quantifier));
            }
            NodeKind::Anchor(anchor) => self.out.push_str(anchor.as_str()),
            NodeKind::Assertion(_, inner_id) | NodeKind::Group(_, inner_id) => {
                inner.push(Step::Chain(*inner_id, true))
            }
            NodeKind::Backreference(Backreference::Number(number)) => {
                let start = self.out.len();
                syntax::backreference(&mut self.out, *number);
                self.backreference = Some(start..self.out.len());
            }
            NodeKind::Backreference(Backreference::Name(name)) => syntax::named_backreference(
                &mut self.out,
                name,
                self.settings.identifier_boundary,
            ),
            NodeKind::Alternation(alternatives) => {
                for (i, &alternative) in alternatives.iter().enumerate() {
                    if i != 0 {
                        inner.push(Step::Char('|'));
                    }
                    inner.push(Step::Chain(alternative, true));
                }
            }
            NodeKind::Block(block, negated) => {
                syntax::unicode_block(&mut self.out, *block, *negated)
            }
            NodeKind::Category(category, negated) => {
                syntax::unicode_category(&mut self.out, *category, *negated)
            }
            NodeKind::Options { enable, disable } => {
                let start = self.out.len();
                self.out.push_str("(?");
                if syntax::inline_options(&mut self.out, *enable, *disable) {
                    self.out.push(syntax::GROUP_CLOSE);
                } else {
                    self.out.truncate(start);
                }
            }
            NodeKind::Comment(text) => syntax::comment(&mut self.out, text),
            NodeKind::Conditional { test, yes, no } => {
                match test {
                    Condition::Group(name) => {
                        self.out.push_str(name);
                        self.out.push(syntax::GROUP_CLOSE);
                    }
                    Condition::Expr(test) => {
                        inner.push(Step::Chain(*test, true));
                        inner.push(Step::Char(syntax::GROUP_CLOSE));
                    }
                }
                // Branches are separated by `|`, so an alternation inside needs its own group
                inner.push(Step::Chain(*yes, false));
                if let Some(no) = no {
                    inner.push(Step::Char('|'));
                    inner.push(Step::Chain(*no, false));
                }
            }
        }
        Ok(inner)
    }

    fn close(&mut self, kind: &NodeKind, delimited: bool) {
        match kind {
            NodeKind::Assertion(..) | NodeKind::Group(..) | NodeKind::Conditional { .. } => {
                self.out.push(syntax::GROUP_CLOSE)
            }
            NodeKind::Alternation(_) if !delimited => self.out.push(syntax::GROUP_CLOSE),
            _ => (),
        }
    }

    /// Wrap the last backreference in `(?:...)` if the output written from `next` on starts with
    /// a digit, which would otherwise be read as part of the group number.
    fn delimit_backreference(&mut self, next: usize) {
        let Some(range) = self.backreference.clone() else {
            return;
        };
        if range.end == next && self.out[next..].starts_with(|c: char| c.is_ascii_digit()) {
            self.out.insert(range.end, syntax::GROUP_CLOSE);
            self.out.insert_str(range.start, syntax::NON_CAPTURING_OPEN);
            self.backreference = None;
        }
    }

    /// Whether the chain `id` is a single node that a quantifier can follow directly.
    fn is_atom(&self, id: ExprId) -> bool {
        let node = &self.nodes[id.0];
        node.prev.is_none() && node.kind.is_quantifiable()
    }
}
