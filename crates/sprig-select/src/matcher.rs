//! Finding the elements a selector chain matches.
//!
//! Matching runs right to left: every element of the tree is tested against
//! the chain's subject, and each survivor then walks its ancestors to find
//! the remaining compounds.

use std::collections::HashSet;
use std::iter;

use sprig_common::warning::warn_once;

use crate::element::{Element, ancestors};
use crate::selector::{SelectorChain, parse_selector};

impl SelectorChain {
    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// Whether `element` is the subject of this chain: it matches the last
    /// compound, and every earlier compound matches one of its ancestors,
    /// outermost compound on the outermost ancestor.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.subject.matches(element) && self.matches_ancestors(element)
    }

    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    ///
    /// The compounds are consumed innermost first from one shared ancestor
    /// iterator, so each search resumes strictly above the previous match.
    /// Taking the nearest matching ancestor each time never loses a match:
    /// it leaves the most ancestors for the compounds still to come.
    fn matches_ancestors<E: Element>(&self, element: &E) -> bool {
        let mut outward = ancestors(element);
        self.ancestors
            .iter()
            .rev()
            .all(|compound| outward.any(|ancestor| compound.matches(&ancestor)))
    }

    /// All elements in the subtree rooted at `root` (root included) that
    /// this chain matches, in document order.
    #[must_use]
    pub fn select<E: Element>(&self, root: &E) -> Vec<E> {
        self.select_from(iter::once(root.clone()))
    }

    /// Like [`select`](Self::select) over several subtrees, visited in the
    /// order given. An element reachable from more than one root is
    /// reported once, at its first position.
    #[must_use]
    pub fn select_from<E, I>(&self, roots: I) -> Vec<E>
    where
        E: Element,
        I: IntoIterator<Item = E>,
    {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();

        for element in roots.into_iter().flat_map(PreOrder::new) {
            if !self.subject.matches(&element) {
                continue;
            }
            let matched = self.matches_ancestors(&element);

            #[cfg(feature = "select-trace")]
            eprintln!(
                "[SELECT] candidate <{}> for `{self}` matched={matched}",
                element.tag_name()
            );

            if matched && seen.insert(element.clone()) {
                selected.push(element);
            }
        }

        selected
    }
}

/// Pre-order traversal of a subtree, root first.
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
struct PreOrder<E> {
    stack: Vec<E>,
}

impl<E> PreOrder<E> {
    fn new(root: E) -> Self {
        Self { stack: vec![root] }
    }
}

impl<E: Element> Iterator for PreOrder<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let element = self.stack.pop()?;
        let first_child = self.stack.len();
        self.stack.extend(element.children());
        self.stack[first_child..].reverse();
        Some(element)
    }
}

/// Select every element under `root` (root included) that matches
/// `selector`, in document order.
///
/// An invalid selector matches nothing: the result is empty and the kind of
/// parse error is reported once per process through [`warn_once`]. Use
/// [`parse_selector`] to inspect the error itself.
#[must_use]
pub fn select<E: Element>(root: &E, selector: &str) -> Vec<E> {
    select_from(iter::once(root.clone()), selector)
}

/// [`select`] over several subtrees, such as all top-level elements of a
/// document.
#[must_use]
pub fn select_from<E, I>(roots: I, selector: &str) -> Vec<E>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    match parse_selector(selector) {
        Ok(chain) => chain.select_from(roots),
        Err(err) => {
            // Keyed by kind, not text, so the warning set stays bounded.
            warn_once(
                "Select",
                &format!("ignoring invalid selector: {}", err.kind()),
            );
            Vec::new()
        }
    }
}
