// crates/feed-parser/src/tree.rs
//! Builds a [`Node`] tree from XML tokenizer events
//!
//! [`TreeBuilder`] is push-driven: it receives start/text/CDATA/end events in
//! document order and keeps an explicit stack of half-built elements, so
//! nesting depth never turns into recursion. [`parse_document`] drives it from
//! a `quick_xml::Reader`.

use crate::error::{FeedError, FeedResult};
use crate::node::Node;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// An element whose end tag has not been seen yet
#[derive(Debug)]
struct NodeBuilder {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
    children: Vec<Node>,
}

impl NodeBuilder {
    fn new(name: String, attributes: HashMap<String, String>) -> Self {
        Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn build(self) -> Node {
        Node {
            name: self.name,
            text: if self.text.is_empty() {
                None
            } else {
                Some(self.text)
            },
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Accumulates tokenizer events into a single root [`Node`]
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<NodeBuilder>,
    root: Option<Node>,
    extra_root: Option<String>,
    trailing_text: bool,
}

impl TreeBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Opens a new element
    pub fn start_element(&mut self, name: impl Into<String>, attributes: HashMap<String, String>) {
        let name = name.into();
        if self.stack.is_empty() && self.root.is_some() && self.extra_root.is_none() {
            self.extra_root = Some(name.clone());
        }
        self.stack.push(NodeBuilder::new(name, attributes));
    }

    /// Appends character data to the innermost open element
    ///
    /// Text before the root element is dropped. Non-whitespace text after
    /// the root element makes [`finish`](Self::finish) fail.
    pub fn character_data(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(top) => top.text.push_str(text),
            None => {
                if self.root.is_some() && !text.trim().is_empty() {
                    self.trailing_text = true;
                }
            }
        }
    }

    /// Appends a CDATA section to the innermost open element
    ///
    /// A section that is not valid UTF-8 is discarded as a whole.
    pub fn cdata_block(&mut self, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.character_data(text),
            Err(e) => log::trace!("Discarding non-UTF-8 CDATA section: {}", e),
        }
    }

    /// Closes the innermost open element
    ///
    /// The name is not checked against the open element; the tokenizer is
    /// responsible for matching tags. An end event with nothing open is ignored.
    pub fn end_element(&mut self, _name: &str) {
        let Some(builder) = self.stack.pop() else {
            return;
        };
        let node = builder.build();

        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
    }

    /// Returns the completed document root
    pub fn finish(self) -> FeedResult<Node> {
        if let Some(name) = self.extra_root {
            return Err(FeedError::InvalidXml(format!(
                "Extra content at end of document: <{}>",
                name
            )));
        }

        if self.trailing_text {
            return Err(FeedError::InvalidXml(
                "Extra content at end of document: text after root element".to_string(),
            ));
        }

        if let Some(open) = self.stack.last() {
            return Err(FeedError::InvalidXml(format!(
                "Unexpected end of document: <{}> is not closed",
                open.name
            )));
        }

        self.root
            .ok_or_else(|| FeedError::InvalidXml("No root element found".to_string()))
    }
}

/// Tokenizes an XML document and builds its element tree
pub fn parse_document(data: &[u8]) -> FeedResult<Node> {
    let mut reader = Reader::from_reader(data);
    let mut builder = TreeBuilder::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let (name, attributes) = element_parts(&e)?;
                builder.start_element(name, attributes);
            }
            Event::Empty(e) => {
                let (name, attributes) = element_parts(&e)?;
                builder.start_element(name.clone(), attributes);
                builder.end_element(&name);
            }
            Event::Text(e) => builder.character_data(&e.unescape()?),
            Event::CData(e) => builder.cdata_block(&e.into_inner()),
            Event::End(e) => builder.end_element(&String::from_utf8_lossy(e.name().as_ref())),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

fn element_parts(start: &BytesStart<'_>) -> FeedResult<(String, HashMap<String, String>)> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = HashMap::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }

    Ok((name, attributes))
}
