//! Shared fixture: a small HTML document built directly as a `DomTree`.

#![allow(dead_code)]

use sprig_dom::{DomTree, NodeId};
use sprig_select::Select;

/// Builds this document (text nodes and a comment included, so matching
/// must skip them):
///
/// ```html
/// <html>
/// <head>
///   <title>The title</title>
///   <link rel="stylesheet" href="blah.css" type="text/css" id="l1">
/// </head>
/// <body>
///   <div id="main">
///     <div id="inner">
///       <h1 id="header1">An H1</h1>
///       <p>Some text</p>
///       <p class="onep" id="p1">Some more text</p>
///       <h2 id="header2">An H2</h2>
///       <p class="class1 class2 class3" id="pmulti">Multi-class</p>
///       <a href="http://bob.example.org/" rel="friend met" id="bob">Bob</a>
///       <h2 id="header3">Another H2</h2>
///       <a id="me" href="http://simonwillison.net/" rel="me">me</a>
///     </div>
///     <p lang="en" id="lang-en">English</p>
///     <p lang="en-gb" id="lang-en-gb">English UK</p>
///     <p lang="en-us" id="lang-en-us">English US</p>
///     <p lang="fr" id="lang-fr">French</p>
///   </div>
///   <!-- footer -->
///   <div id="footer"></div>
/// </body>
/// </html>
/// ```
pub fn document() -> DomTree {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, "html", &[]);

    let head = tree.append_element(html, "head", &[]);
    let title = tree.append_element(head, "title", &[]);
    let _ = tree.append_text(title, "The title");
    let _ = tree.append_element(
        head,
        "link",
        &[
            ("rel", "stylesheet"),
            ("href", "blah.css"),
            ("type", "text/css"),
            ("id", "l1"),
        ],
    );

    let body = tree.append_element(html, "body", &[]);
    let main = tree.append_element(body, "div", &[("id", "main")]);
    let inner = tree.append_element(main, "div", &[("id", "inner")]);
    text_element(&mut tree, inner, "h1", &[("id", "header1")], "An H1");
    text_element(&mut tree, inner, "p", &[], "Some text");
    text_element(
        &mut tree,
        inner,
        "p",
        &[("class", "onep"), ("id", "p1")],
        "Some more text",
    );
    text_element(&mut tree, inner, "h2", &[("id", "header2")], "An H2");
    text_element(
        &mut tree,
        inner,
        "p",
        &[("class", "class1 class2 class3"), ("id", "pmulti")],
        "Multi-class",
    );
    text_element(
        &mut tree,
        inner,
        "a",
        &[
            ("href", "http://bob.example.org/"),
            ("rel", "friend met"),
            ("id", "bob"),
        ],
        "Bob",
    );
    text_element(&mut tree, inner, "h2", &[("id", "header3")], "Another H2");
    text_element(
        &mut tree,
        inner,
        "a",
        &[
            ("id", "me"),
            ("href", "http://simonwillison.net/"),
            ("rel", "me"),
        ],
        "me",
    );

    text_element(&mut tree, main, "p", &[("lang", "en"), ("id", "lang-en")], "English");
    text_element(
        &mut tree,
        main,
        "p",
        &[("lang", "en-gb"), ("id", "lang-en-gb")],
        "English UK",
    );
    text_element(
        &mut tree,
        main,
        "p",
        &[("lang", "en-us"), ("id", "lang-en-us")],
        "English US",
    );
    text_element(&mut tree, main, "p", &[("lang", "fr"), ("id", "lang-fr")], "French");

    let comment = tree.alloc(sprig_dom::NodeType::Comment(" footer ".to_string()));
    tree.append_child(body, comment);
    let _ = tree.append_element(body, "div", &[("id", "footer")]);

    tree
}

fn text_element(
    tree: &mut DomTree,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) {
    let id = tree.append_element(parent, tag, attrs);
    let _ = tree.append_text(id, text);
}

/// The `id` attribute of each selected element, in document order. Elements
/// without an id show as `<tag>`.
pub fn ids(tree: &DomTree, selector: &str) -> Vec<String> {
    tree.select(selector)
        .into_iter()
        .map(|node| label(tree, node))
        .collect()
}

/// Like [`ids`], sorted, for comparisons that only care about the set.
pub fn id_set(tree: &DomTree, selector: &str) -> Vec<String> {
    let mut ids = ids(tree, selector);
    ids.sort();
    ids
}

/// The element's `id` attribute, or `<tag>` when it has none.
pub fn label(tree: &DomTree, node: NodeId) -> String {
    let data = tree.as_element(node).expect("selected nodes are elements");
    data.id()
        .map_or_else(|| format!("<{}>", data.tag_name), str::to_string)
}

/// The node carrying `id="{id}"`.
pub fn by_id(tree: &DomTree, id: &str) -> NodeId {
    tree.descendants(NodeId::ROOT)
        .find(|&node| tree.as_element(node).and_then(|data| data.id()) == Some(id))
        .unwrap_or_else(|| panic!("no element with id {id}"))
}

/// Sorted owned strings, for comparing against [`id_set`].
pub fn sorted(expected: &[&str]) -> Vec<String> {
    let mut expected: Vec<String> = expected.iter().map(|s| (*s).to_string()).collect();
    expected.sort();
    expected
}
