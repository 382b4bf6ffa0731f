//! Selector syntax tree and simple-selector evaluation.
//!
//! The supported subset of [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//! is type, universal, id, class and attribute selectors, combined into
//! compounds, with compounds joined by the descendant combinator.

mod parser;

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::element::Element;

pub use parser::parse_selector;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Compared case-sensitively against the tag name as authored.
    ///
    /// Examples: `div`, `p`, `h1`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    Universal,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#header1`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.onep`, `.class1`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[rel]`, `[type="text/css"]`, `[lang|=en]`
    Attribute(AttributeSelector),
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttributeSelector {
    /// `[attr]`: "Represents an element with the att attribute, whatever the
    /// value of the attribute."
    Exists(String),

    /// `[attr <op> value]`
    Compare {
        /// Attribute name, compared exactly.
        name: String,
        /// How the attribute value is compared.
        operator: AttrOperator,
        /// The value from the selector, with quotes stripped.
        value: String,
    },
}

/// The value-comparing attribute operators.
///
/// Converts to and from its selector token (`"~="` ⇄ `Includes`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumString,
)]
pub enum AttrOperator {
    /// `[att=val]`: exactly `val`.
    #[strum(serialize = "=")]
    Equals,
    /// `[att~=val]`: "a whitespace-separated list of words, one of which is
    /// exactly 'val'."
    #[strum(serialize = "~=")]
    Includes,
    /// `[att^=val]`: "begins with the prefix 'val'."
    #[strum(serialize = "^=")]
    StartsWith,
    /// `[att$=val]`: "ends with the suffix 'val'."
    #[strum(serialize = "$=")]
    EndsWith,
    /// `[att*=val]`: "contains at least one instance of the substring 'val'."
    #[strum(serialize = "*=")]
    Contains,
    /// `[att|=val]`: "either being exactly 'val' or beginning with 'val'
    /// immediately followed by '-'."
    #[strum(serialize = "|=")]
    HyphenPrefix,
}

impl AttrOperator {
    /// Apply the operator to an attribute value that is present.
    #[must_use]
    pub fn test(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Equals => actual == expected,
            Self::Includes => actual.split_ascii_whitespace().any(|word| word == expected),
            Self::StartsWith => actual.starts_with(expected),
            Self::EndsWith => actual.ends_with(expected),
            Self::Contains => actual.contains(expected),
            Self::HyphenPrefix => actual
                .strip_prefix(expected)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-')),
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    /// The simple selectors, in written order. Order does not affect matching.
    pub simple_selectors: Vec<SimpleSelector>,
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// One or more compound selectors joined by descendant combinators.
///
/// `div#main p.onep` is the chain `[div#main, p.onep]`: the subject `p.onep`
/// must have an ancestor matching `div#main`. A chain is never empty; build
/// one with [`parse_selector`] or [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorChain {
    /// Compounds left of the subject, in written order (outermost first).
    pub(crate) ancestors: Vec<CompoundSelector>,
    /// "The elements represented by a complex selector are the elements
    /// matched by the last compound selector in the complex selector."
    pub(crate) subject: CompoundSelector,
}

impl SelectorChain {
    /// The rightmost compound, which the selected elements themselves match.
    #[must_use]
    pub const fn subject(&self) -> &CompoundSelector {
        &self.subject
    }

    /// All compounds in written order, ending with the subject.
    pub fn compounds(&self) -> impl DoubleEndedIterator<Item = &CompoundSelector> {
        self.ancestors.iter().chain(Some(&self.subject))
    }

    /// Number of compounds in the chain (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ancestors.len() + 1
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl SimpleSelector {
    /// Check if this simple selector matches the given element.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            Self::Type(name) => element.tag_name() == name,
            Self::Universal => true,
            Self::Id(id) => element.attribute("id") == Some(id.as_str()),
            // Same test as [class~=name]
            Self::Class(class) => element
                .attribute("class")
                .is_some_and(|v| AttrOperator::Includes.test(v, class)),
            Self::Attribute(attr) => attr.matches(element),
        }
    }
}

impl AttributeSelector {
    /// The attribute this selector inspects.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Exists(name) | Self::Compare { name, .. } => name,
        }
    }

    /// Check the element's attribute. A missing attribute never matches.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        let Some(actual) = element.attribute(self.name()) else {
            return false;
        };
        match self {
            Self::Exists(_) => true,
            Self::Compare {
                operator, value, ..
            } => operator.test(actual, value),
        }
    }
}

impl CompoundSelector {
    /// All simple selectors must match the element.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.simple_selectors
            .iter()
            .all(|simple| simple.matches(element))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Universal => f.write_str("*"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Attribute(attr) => write!(f, "{attr}"),
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists(name) => write!(f, "[{name}]"),
            Self::Compare {
                name,
                operator,
                value,
            } => {
                let quote = if value.contains('"') { '\'' } else { '"' };
                write!(f, "[{name}{operator}{quote}{value}{quote}]")
            }
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.simple_selectors
            .iter()
            .try_for_each(|simple| write!(f, "{simple}"))
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for compound in &self.ancestors {
            write!(f, "{compound} ")?;
        }
        write!(f, "{}", self.subject)
    }
}
