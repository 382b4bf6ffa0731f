//! The read-only view of a tree that selector matching needs.

use std::hash::Hash;
use std::iter;

/// An element node in some externally owned tree.
///
/// Implementations are cheap handles (an index plus a tree reference, an
/// `Rc`, ...). Equality and hashing must reflect node identity: two handles
/// are equal iff they denote the same node of the same tree.
///
/// Only elements take part in matching. Text, comments and the document node
/// itself should be skipped by [`children`](Element::children) and
/// [`parent`](Element::parent).
pub trait Element: Clone + Eq + Hash {
    /// Iterator over the element children of a node.
    type Children: Iterator<Item = Self>;

    /// The tag name, exactly as authored.
    fn tag_name(&self) -> &str;

    /// The raw value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Element children in document order.
    fn children(&self) -> Self::Children;

    /// The parent element, or `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;
}

/// Strict ancestors of `element`: parent first, then outward to the root.
#[must_use]
pub fn ancestors<E: Element>(element: &E) -> impl Iterator<Item = E> + use<E> {
    iter::successors(element.parent(), E::parent)
}
