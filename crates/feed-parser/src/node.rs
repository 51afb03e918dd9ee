// crates/feed-parser/src/node.rs
//! Generic element tree produced by the tree builder
//!
//! Nodes know nothing about feed dialects. Names are stored exactly as they
//! appear in the document, prefix included (`dc:creator`, `rdf:RDF`).

use std::collections::HashMap;

/// A single XML element with its text, attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Element name, including any namespace prefix
    pub name: String,
    /// Concatenated character and CDATA data, `None` when none was seen
    pub text: Option<String>,
    /// Attribute name to value
    pub attributes: HashMap<String, String>,
    /// Child elements in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node with no text, attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Adds an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the first child with the given name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns all children with the given name, in document order
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the text content trimmed, or `None` if it is empty after trimming
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Returns the trimmed text of the first child with the given name
    pub fn text_for(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Node::trimmed_text)
    }

    /// Returns an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
