//! Owned presentation tree.
//!
//! Surfaces generate HTML strings; those are parsed into [`Node`]s which live in a
//! [`Mount`](super::Mount) and can be reconciled in place.

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Html};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Deep structural equality, ignoring attribute order
    pub fn is_equal_node(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => a.is_equal_node(b),
            (Node::Text(a), Node::Text(b)) => a == b,
            _ => false,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&encode_text(text)),
        }
    }
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Replace all children with a single text node (none when `text` is empty)
    pub fn set_text_content(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    pub fn is_equal_node(&self, other: &Element) -> bool {
        self.name == other.name
            && self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .all(|(key, value)| other.attr(key) == Some(value.as_str()))
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.is_equal_node(b))
    }

    /// Whether reconciliation copies this element's whole text onto its mounted counterpart:
    /// true when it has no children or starts with non-blank text.
    fn carries_text(&self) -> bool {
        match self.children.first() {
            None => true,
            Some(Node::Text(text)) => !text.trim().is_empty(),
            Some(Node::Element(_)) => false,
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Parse an HTML fragment into owned nodes. Comments and doctypes are dropped.
pub fn parse_fragment(markup: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(markup);
    convert_children(fragment.root_element())
}

fn convert_children(parent: ElementRef<'_>) -> Vec<Node> {
    parent
        .children()
        .filter_map(|child| {
            if let Some(element) = ElementRef::wrap(child) {
                Some(Node::Element(convert_element(element)))
            } else {
                child.value().as_text().map(|text| {
                    let text: &str = text;
                    Node::Text(text.to_string())
                })
            }
        })
        .collect()
}

fn convert_element(element: ElementRef<'_>) -> Element {
    let value = element.value();
    Element {
        name: value.name().to_string(),
        attributes: value
            .attrs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        children: convert_children(element),
    }
}

pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

/// Every element below `nodes`, in document order
pub fn elements(nodes: &[Node]) -> Vec<&Element> {
    fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
        for node in nodes {
            if let Node::Element(element) = node {
                out.push(element);
                walk(&element.children, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

/// Changes to apply to one mounted element
#[derive(Debug)]
struct Patch {
    text: Option<String>,
    attributes: Vec<(String, String)>,
}

/// Update `current` in place so it reflects `new`, pairing elements by document-order position.
///
/// Only valid when both trees have the same shape: elements beyond the shorter of the two
/// sequences are left alone, and reordered or inserted elements end up paired with the wrong
/// counterpart. For each differing pair the new text is copied when the new element starts with
/// non-blank text or has no children at all (which empties the mounted element), and every
/// attribute of the new element is set on the mounted one. Returns the number of mounted
/// elements that were patched.
pub fn reconcile_positional(current: &mut [Node], new: &[Node]) -> usize {
    let patches: Vec<Option<Patch>> = {
        let current_elements = elements(current);
        elements(new)
            .into_iter()
            .zip(current_elements)
            .map(|(new_el, cur_el)| {
                if new_el.is_equal_node(cur_el) {
                    return None;
                }
                let text = new_el.carries_text().then(|| new_el.text_content());
                Some(Patch {
                    text,
                    attributes: new_el.attributes.clone(),
                })
            })
            .collect()
    };

    let mut index = 0;
    let mut patched = 0;
    apply_patches(current, &patches, &mut index, &mut patched);
    patched
}

// Descendants are visited before their parent's own patch is applied so that indices keep
// referring to the tree as it was before reconciliation started.
fn apply_patches(
    nodes: &mut [Node],
    patches: &[Option<Patch>],
    index: &mut usize,
    patched: &mut usize,
) {
    for node in nodes {
        let Node::Element(element) = node else {
            continue;
        };
        let own = *index;
        *index += 1;
        apply_patches(&mut element.children, patches, index, patched);

        if let Some(Some(patch)) = patches.get(own) {
            if let Some(text) = &patch.text {
                element.set_text_content(text);
            }
            for (key, value) in &patch.attributes {
                element.set_attr(key, value);
            }
            *patched += 1;
        }
    }
}
