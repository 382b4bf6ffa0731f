//! Selector queries over [`sprig_dom::DomTree`].
//!
//! [`DomElement`] is the [`Element`] view of one element node. The
//! [`Select`] trait adds `select` to the tree itself:
//!
//! ```
//! use sprig_dom::{DomTree, NodeId};
//! use sprig_select::Select;
//!
//! let mut tree = DomTree::new();
//! let body = tree.append_element(NodeId::ROOT, "body", &[]);
//! let note = tree.append_element(body, "p", &[("class", "note")]);
//!
//! assert_eq!(tree.select("body .note"), vec![note]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::slice;

use sprig_dom::{DomTree, ElementData, NodeId};

use crate::element::Element;
use crate::matcher;

/// An element node of a [`DomTree`].
///
/// Text, comment and document nodes are invisible through this view: they
/// never appear as children, and the document is not a parent.
#[derive(Clone, Copy)]
pub struct DomElement<'a> {
    tree: &'a DomTree,
    id: NodeId,
    data: &'a ElementData,
}

impl<'a> DomElement<'a> {
    /// View `id` as an element, or `None` if it is not an element node.
    #[must_use]
    pub fn new(tree: &'a DomTree, id: NodeId) -> Option<Self> {
        tree.as_element(id).map(|data| Self { tree, id, data })
    }

    /// The node's id in its tree.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The element's tag name and attributes.
    #[must_use]
    pub const fn data(&self) -> &'a ElementData {
        self.data
    }
}

impl fmt::Debug for DomElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomElement")
            .field("id", &self.id)
            .field("tag_name", &self.data.tag_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for DomElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && ptr::eq(self.tree, other.tree)
    }
}

impl Eq for DomElement<'_> {}

impl Hash for DomElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Element children of a [`DomElement`], in document order.
pub struct DomChildren<'a> {
    tree: &'a DomTree,
    ids: slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for DomChildren<'a> {
    type Item = DomElement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.ids.find_map(|&id| DomElement::new(tree, id))
    }
}

impl<'a> Element for DomElement<'a> {
    type Children = DomChildren<'a>;

    fn tag_name(&self) -> &str {
        &self.data.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.data.attr(name)
    }

    fn children(&self) -> Self::Children {
        DomChildren {
            tree: self.tree,
            ids: self.tree.children(self.id).iter(),
        }
    }

    fn parent(&self) -> Option<Self> {
        self.tree
            .parent(self.id)
            .and_then(|parent| Self::new(self.tree, parent))
    }
}

/// Selector queries as a method, for types that own or view a tree.
///
/// Bring the trait into scope to call `select` on a [`DomTree`] or a
/// [`DomElement`]; nothing about the tree types changes otherwise.
pub trait Select {
    /// Ids of the matching elements, in document order. An invalid selector
    /// matches nothing.
    fn select(&self, selector: &str) -> Vec<NodeId>;
}

impl Select for DomTree {
    /// Queries the whole document: every top-level element and its subtree.
    fn select(&self, selector: &str) -> Vec<NodeId> {
        let roots = self
            .children(self.root())
            .iter()
            .filter_map(|&id| DomElement::new(self, id));
        matcher::select_from(roots, selector)
            .iter()
            .map(DomElement::id)
            .collect()
    }
}

impl Select for DomElement<'_> {
    /// Queries this element's subtree, the element itself included.
    fn select(&self, selector: &str) -> Vec<NodeId> {
        matcher::select(self, selector)
            .iter()
            .map(DomElement::id)
            .collect()
    }
}
