/*!
Expression chains.

## Design
Every builder call creates one [`Node`] in a [`Patterns`] arena and links it to the node it was
called on. A chain is therefore a singly linked list where the newest node points back
towards the start, and an [`Expr`] is a handle to the newest node of such a list.

Appending a chain `child` to `parent` walks to the head of `child` (the node without a
previous link) and links that head to `parent`. The returned handle is still `child`, so
sub-expressions built separately keep their internal order and further calls keep appending
at the end:
```
use fluent_regex::Patterns;

let p = Patterns::new();
let year = p.digit().count(4)?;
let date = p.start_of_input().then(year)?.char('-').digit().count(2)?;
assert_eq!(date.to_pattern()?, r"\A\d{4}-\d{2}");
# Ok::<(), fluent_regex::Error>(())
```

The previous link of a node is set at most once and nodes are never modified otherwise. Nodes
can be shared: the same chain can be nested in several groups, or several chains can continue
from the same node. Linking a chain into itself is not prevented, but rendering such a chain
fails with [`Error::CircularReference`].
*/
use std::{cell::RefCell, fmt};

use crate::{
    error::{Error, Result},
    render::{self, RenderSettings},
};

mod fluent;
pub(crate) mod node;

pub(crate) use node::{Node, NodeKind};

/// Index of a node in its [`Patterns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub(crate) usize);

impl ExprId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An arena of expression nodes.
///
/// All the chains built from one `Patterns` can be linked with each other. `Patterns` is not
/// `Sync`; once building is done, [`freeze()`](Patterns::freeze) it to render from many
/// threads.
#[derive(Default)]
pub struct Patterns {
    nodes: RefCell<Vec<Node>>,
}

impl Patterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push(&self, kind: NodeKind) -> Expr<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = ExprId(nodes.len());
        nodes.push(Node { prev: None, kind });
        Expr { patterns: self, id }
    }

    pub(crate) fn owns(&self, expr: Expr<'_>) -> Result<ExprId> {
        if std::ptr::eq(self, expr.patterns) {
            Ok(expr.id)
        } else {
            Err(Error::ForeignExpr)
        }
    }

    /// Append the chain ending with `child` after `parent`, and return `child`.
    ///
    /// ## Errors
    /// - [`Error::ForeignExpr`] if either expression was created by another `Patterns`.
    /// - [`Error::CircularReference`] if the chain of `child` is already circular and has no
    ///   head to link.
    pub fn append<'p>(&'p self, parent: Expr<'p>, child: Expr<'p>) -> Result<Expr<'p>> {
        let parent = self.owns(parent)?;
        let child_id = self.owns(child)?;
        let mut nodes = self.nodes.borrow_mut();
        let head = head(&nodes, child_id)?;
        debug_assert!(nodes[head.0].prev.is_none());
        nodes[head.0].prev = Some(parent);
        Ok(child)
    }

    /// Link a node that was just created, and therefore is its own head.
    pub(crate) fn link<'p>(&'p self, parent: Expr<'p>, fresh: Expr<'p>) -> Expr<'p> {
        let mut nodes = self.nodes.borrow_mut();
        debug_assert!(nodes[fresh.id.0].prev.is_none());
        nodes[fresh.id.0].prev = Some(parent.id);
        fresh
    }

    pub(crate) fn with_node<R>(&self, id: ExprId, f: impl FnOnce(&Node) -> R) -> R {
        f(&self.nodes.borrow()[id.0])
    }

    pub(crate) fn render(&self, id: ExprId, settings: &RenderSettings) -> Result<String> {
        render::render(&self.nodes.borrow(), id, settings)
    }

    /// Stop building and make the nodes immutable.
    pub fn freeze(self) -> FrozenPatterns {
        FrozenPatterns {
            nodes: self.nodes.into_inner(),
        }
    }
}

impl fmt::Debug for Patterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patterns")
            .field("len", &self.len())
            .finish()
    }
}

/// Walk the previous links from `id` until the head of the chain.
fn head(nodes: &[Node], id: ExprId) -> Result<ExprId> {
    let mut current = id;
    // A chain cannot be longer than the arena
    for _ in 0..=nodes.len() {
        match nodes[current.0].prev {
            Some(prev) => current = prev,
            None => return Ok(current),
        }
    }
    Err(Error::CircularReference)
}

/// The chain ending with `id`, newest node first.
///
/// Popping the returned stack yields the nodes in the order they were written.
pub(crate) fn chain_stack(nodes: &[Node], id: ExprId) -> Result<Vec<ExprId>> {
    let mut stack = Vec::new();
    let mut current = Some(id);
    while let Some(id) = current {
        if stack.len() > nodes.len() {
            return Err(Error::CircularReference);
        }
        stack.push(id);
        current = nodes[id.0].prev;
    }
    Ok(stack)
}

/// A handle to the newest node of a chain.
///
/// Builder methods on `Expr` create a node, append it after `self` and return the new node.
/// See [`Patterns`] for methods that start a new chain.
#[derive(Clone, Copy)]
pub struct Expr<'p> {
    pub(crate) patterns: &'p Patterns,
    pub(crate) id: ExprId,
}

impl<'p> Expr<'p> {
    pub fn id(self) -> ExprId {
        self.id
    }

    pub fn patterns(self) -> &'p Patterns {
        self.patterns
    }

    /// Append `next` (and everything before it) after `self`.
    ///
    /// See [`Patterns::append()`].
    pub fn then(self, next: Expr<'p>) -> Result<Expr<'p>> {
        self.patterns.append(self, next)
    }

    /// Ids of the nodes of this chain, in the order they were written.
    pub fn chain(self) -> Result<Vec<ExprId>> {
        let mut stack = chain_stack(&self.patterns.nodes.borrow(), self.id)?;
        stack.reverse();
        Ok(stack)
    }

    /// Render the pattern.
    ///
    /// ## Errors
    /// [`Error::CircularReference`] if the chain contains itself.
    pub fn render(self, settings: &RenderSettings) -> Result<String> {
        self.patterns.render(self.id, settings)
    }

    /// Render the pattern with the default settings.
    pub fn to_pattern(self) -> Result<String> {
        self.render(&RenderSettings::default())
    }
}

impl PartialEq for Expr<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.patterns, other.patterns) && self.id == other.id
    }
}

impl Eq for Expr<'_> {}

impl fmt::Debug for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.patterns.with_node(self.id, |node| {
            f.debug_struct("Expr")
                .field("id", &self.id.0)
                .field("kind", &node.kind)
                .field("prev", &node.prev.map(|id| id.0))
                .finish()
        })
    }
}

/// Nodes that can no longer change, and can be rendered from many threads.
///
/// ```
/// use fluent_regex::{Patterns, RenderSettings};
///
/// let p = Patterns::new();
/// let id = p.word_char().one_or_more()?.id();
/// let frozen = std::sync::Arc::new(p.freeze());
///
/// let handle = std::thread::spawn({
///     let frozen = frozen.clone();
///     move || frozen.render(id, &RenderSettings::default())
/// });
/// assert_eq!(handle.join().unwrap()?, r"\w+");
/// assert_eq!(frozen.render(id, &RenderSettings::default())?, r"\w+");
/// # Ok::<(), fluent_regex::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrozenPatterns {
    nodes: Vec<Node>,
}

impl FrozenPatterns {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// ## Errors
    /// - [`Error::ForeignExpr`] if `id` is not a node of this arena.
    /// - [`Error::CircularReference`] if the chain contains itself.
    pub fn render(&self, id: ExprId, settings: &RenderSettings) -> Result<String> {
        if id.0 >= self.nodes.len() {
            return Err(Error::ForeignExpr);
        }
        render::render(&self.nodes, id, settings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_returns_child() {
        let p = Patterns::new();
        let a = p.char('a');
        let b = p.char('b');
        let c = a.then(b).unwrap();
        assert_eq!(c, b);
        assert_eq!(c.chain().unwrap(), vec![a.id(), b.id()]);
    }

    #[test]
    fn append_splices_whole_chain() {
        let p = Patterns::new();
        let sub = p.char('x').char('y').char('z');
        let full = p.char('a').then(sub).unwrap().char('b');
        assert_eq!(full.to_pattern().unwrap(), "axyzb");
        assert_eq!(full.chain().unwrap().len(), 5);
        // The sub-expression now continues from `a`
        assert_eq!(sub.to_pattern().unwrap(), "axyz");
    }

    #[test]
    fn append_ordering() {
        let p = Patterns::new();
        let parts = ["a.b", "[c]", "d|e"];
        let exprs = parts.map(|s| p.text(s));
        let expected = exprs
            .iter()
            .map(|e| e.to_pattern().unwrap())
            .collect::<String>();
        let chain = exprs[0].then(exprs[1]).unwrap().then(exprs[2]).unwrap();
        assert_eq!(chain.to_pattern().unwrap(), expected);
        assert_eq!(expected, r"a\.b\[c]d\|e");
    }

    #[test]
    fn shared_tail() {
        let p = Patterns::new();
        let a = p.char('a');
        let b = a.char('b');
        let c = a.char('c');
        assert_eq!(b.to_pattern().unwrap(), "ab");
        assert_eq!(c.to_pattern().unwrap(), "ac");
    }

    #[test]
    fn foreign() {
        let p1 = Patterns::new();
        let p2 = Patterns::new();
        let a = p1.char('a');
        let b = p2.char('b');
        assert_eq!(a.then(b), Err(Error::ForeignExpr));
        assert_eq!(p1.group(b), Err(Error::ForeignExpr));
        assert_ne!(a, b);
    }

    #[test]
    fn circular_prev_links() {
        let p = Patterns::new();
        let a = p.char('a');
        let b = p.char('b');
        a.then(b).unwrap();
        // `a` is still the head of the chain, link it after `b`
        b.then(a).unwrap();
        assert_eq!(a.to_pattern(), Err(Error::CircularReference));
        assert_eq!(b.chain(), Err(Error::CircularReference));
        // No head left to link
        assert_eq!(p.char('c').then(a), Err(Error::CircularReference));
    }

    #[test]
    fn idempotent() {
        let p = Patterns::new();
        let e = p
            .named_group("x", p.text("a+").one_or_more_of(p.digit()).unwrap())
            .unwrap()
            .maybe()
            .unwrap();
        assert_eq!(e.to_pattern().unwrap(), e.to_pattern().unwrap());
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn frozen() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrozenPatterns>();

        let p = Patterns::new();
        let id = p.text("a").digit().id();
        let frozen = p.freeze();
        assert_eq!(frozen.len(), 2);
        assert_eq!(
            frozen.render(id, &RenderSettings::default()).unwrap(),
            r"a\d"
        );
        assert_eq!(
            frozen.render(ExprId(2), &RenderSettings::default()),
            Err(Error::ForeignExpr)
        );
    }
}
