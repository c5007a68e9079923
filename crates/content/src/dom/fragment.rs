// ABOUTME: Owned, mutable HTML fragment tree built from scraper's parse output.
// ABOUTME: Parses fragments best-effort and serializes them back without the implied html root.

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use scraper::Html;

/// Elements whose text children are written without escaping.
const RAW_TEXT_TAGS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Elements whose first newline the parser drops.
const LEADING_NEWLINE_TAGS: &[&str] = &["pre", "textarea", "listing"];

/// A node in a parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The fragment root. Never serialized itself.
    Root,
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    /// Creates an element with no attributes. The tag name is lowercased.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive tag name check.
    pub fn has_name(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of an existing attribute in place, or appends it.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attrs
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed HTML fragment that passes can edit in place.
///
/// The tree is owned by whoever parsed it and is dropped after
/// [`Fragment::serialize`]; node ids never outlive it.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub(crate) tree: Tree<Node>,
}

impl Fragment {
    /// Parse an HTML fragment.
    ///
    /// html5ever recovers from any malformed input, so this never fails. The
    /// implied `<html>` context element is not copied into the tree.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_fragment(html);
        let mut tree = Tree::new(Node::Root);
        {
            let mut root = tree.root_mut();
            for child in parsed.root_element().children() {
                copy_node(child, &mut root);
            }
        }
        Self { tree }
    }

    /// Serialize the fragment back to markup.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for child in self.tree.root().children() {
            write_node(child, &mut out);
        }
        out
    }

    /// Ids of every element with the given tag name, in document order.
    ///
    /// The list is a snapshot, so callers can restructure the tree while
    /// walking it.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.tree
            .root()
            .descendants()
            .filter(|node| matches!(node.value(), Node::Element(el) if el.has_name(tag)))
            .map(|node| node.id())
            .collect()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.tree.get(id)?.value() {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The element directly containing `id`, if its parent is an element.
    pub fn parent_element(&self, id: NodeId) -> Option<&Element> {
        match self.tree.get(id)?.parent()?.value() {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The next sibling of `id` that is not a text node.
    pub fn next_non_text_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut next = self.tree.get(id)?.next_sibling();
        while let Some(node) = next {
            if !matches!(node.value(), Node::Text(_)) {
                return Some(node.id());
            }
            next = node.next_sibling();
        }
        None
    }

    /// True if any element below `id` satisfies `pred`.
    pub fn has_descendant<F>(&self, id: NodeId, pred: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        node.descendants()
            .skip(1)
            .any(|n| matches!(n.value(), Node::Element(el) if pred(el)))
    }

    /// Set an attribute on the element `id`. Returns false if `id` is not an element.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some(mut node) = self.tree.get_mut(id) else {
            return false;
        };
        match node.value() {
            Node::Element(el) => {
                el.set_attr(name, value);
                true
            }
            _ => false,
        }
    }
}

fn copy_node(src: ego_tree::NodeRef<scraper::Node>, dst: &mut NodeMut<Node>) {
    let value = match src.value() {
        scraper::Node::Text(text) => Node::Text(String::from(&**text)),
        scraper::Node::Comment(comment) => Node::Comment(String::from(&**comment)),
        scraper::Node::Element(el) => Node::Element(Element {
            name: el.name().to_string(),
            attrs: el
                .attrs
                .iter()
                .map(|(k, v)| {
                    // Keep `prefix:local` for foreign attributes such as `xlink:href`.
                    let name = match &k.prefix {
                        Some(prefix) => format!("{}:{}", prefix, k.local),
                        None => k.local.to_string(),
                    };
                    (name, v.to_string())
                })
                .collect(),
        }),
        _ => return,
    };
    let mut copied = dst.append(value);
    for child in src.children() {
        copy_node(child, &mut copied);
    }
}

fn write_node(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Root => {
            for child in node.children() {
                write_node(child, out);
            }
        }
        Node::Text(text) => {
            if in_raw_text_element(node) {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            for (k, v) in &el.attrs {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }
            out.push('>');

            if is_void_element(&el.name) {
                return;
            }

            if LEADING_NEWLINE_TAGS.iter().any(|tag| el.has_name(tag))
                && matches!(
                    node.first_child().map(|c| c.value()),
                    Some(Node::Text(text)) if text.starts_with('\n')
                )
            {
                out.push('\n');
            }

            for child in node.children() {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}

fn in_raw_text_element(node: NodeRef<Node>) -> bool {
    match node.parent().map(|p| p.value()) {
        Some(Node::Element(el)) => RAW_TEXT_TAGS.iter().any(|tag| el.has_name(tag)),
        _ => false,
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('"', "&quot;")
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
