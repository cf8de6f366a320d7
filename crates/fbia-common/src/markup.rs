//! In-memory markup tree and its string serializer.
//!
//! Renderers build a tree of [`Node`]s and hand it to [`render_string`].
//! Every element is written with an explicit close tag, void elements
//! included (`<br></br>`, `<img ...></img>`). Callers that need `<br/>` fix
//! that up after serializing.

use smol_str::SmolStr;
use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup (entities and the like), written verbatim.
    Raw(SmolStr),
    /// A run of sibling nodes with no wrapper. Empty renders nothing.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<SmolStr>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(nodes.into_iter().collect())
    }

    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// True when this node would serialize to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::Text(text) => text.is_empty(),
            Node::Raw(markup) => markup.is_empty(),
            Node::Fragment(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Wrap this node as the only child of a new `tag` element.
    pub fn wrap(self, tag: impl Into<SmolStr>) -> Node {
        Element::new(tag).child(self).into()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: SmolStr,
    /// Attributes in output order.
    pub attrs: Vec<(SmolStr, SmolStr)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Setting an existing name replaces its value in place.
    pub fn attr(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn attr_opt(
        self,
        name: impl Into<SmolStr>,
        value: Option<impl Into<SmolStr>>,
    ) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serialize a tree to a string.
pub fn render_string(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, node);
    out
}

pub fn write_node<W: Write>(writer: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Element(element) => write_element(writer, element),
        Node::Text(text) => writer.write_str(&html_escape::encode_text(text)),
        Node::Raw(markup) => writer.write_str(markup),
        Node::Fragment(nodes) => {
            for node in nodes {
                write_node(writer, node)?;
            }
            Ok(())
        }
    }
}

fn write_element<W: Write>(writer: &mut W, element: &Element) -> fmt::Result {
    write!(writer, "<{}", element.tag)?;
    for (name, value) in &element.attrs {
        write!(
            writer,
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(value)
        )?;
    }
    writer.write_char('>')?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    write!(writer, "</{}>", element.tag)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}
