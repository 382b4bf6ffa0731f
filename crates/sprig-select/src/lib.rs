//! CSS selector queries for sprig trees.
//!
//! This crate provides:
//! - **Selector parsing** - type, universal, id, class and attribute selectors,
//!   compounds, and the descendant combinator, per
//!   [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//! - **Matching** - [`select`] over any tree implementing [`Element`]
//! - **DOM integration** - the [`Select`] extension trait for
//!   [`sprig_dom::DomTree`]
//!
//! # Example
//!
//! ```
//! use sprig_dom::{DomTree, NodeId};
//! use sprig_select::{DomElement, SelectorChain, select};
//!
//! let mut tree = DomTree::new();
//! let html = tree.append_element(NodeId::ROOT, "html", &[]);
//! let main = tree.append_element(html, "div", &[("id", "main")]);
//! let p = tree.append_element(main, "p", &[("lang", "en-gb")]);
//! let root = DomElement::new(&tree, html).unwrap();
//!
//! let found = select(&root, r#"div#main p[lang|="en"]"#);
//! assert_eq!(found.iter().map(DomElement::id).collect::<Vec<_>>(), [p]);
//!
//! let chain: SelectorChain = "div#main p".parse().unwrap();
//! assert_eq!(chain.len(), 2);
//! assert!(chain.matches(&DomElement::new(&tree, p).unwrap()));
//! ```
//!
//! # Features
//!
//! - `select-trace` - print each candidate and its outcome to stderr

pub mod dom;
mod element;
mod error;
mod matcher;
pub mod selector;

pub use dom::{DomElement, Select};
pub use element::{Element, ancestors};
pub use error::{AttributeFault, ParseError};
pub use matcher::{select, select_from};
pub use selector::{
    AttrOperator, AttributeSelector, CompoundSelector, SelectorChain, SimpleSelector,
    parse_selector,
};
