// crates/feed-parser/src/dialect/mod.rs
//! Dialect-specific extraction of the feed model
//!
//! Each dialect gets its own set of channel/item/image parsers. They share
//! the coercion helpers and the required-field checks below, nothing else.

pub(crate) mod rdf;
pub(crate) mod rss2;

use crate::coerce;
use crate::error::{FeedError, FeedResult};
use crate::node::Node;
use url::Url;

/// Trimmed text of a required child element
pub(crate) fn required_text(node: &Node, name: &str) -> FeedResult<String> {
    coerce::text(node.text_for(name)).ok_or_else(|| missing(node, name))
}

/// Required child element holding an absolute URL
pub(crate) fn required_url(node: &Node, name: &str) -> FeedResult<Url> {
    coerce::url(node.text_for(name)).ok_or_else(|| missing(node, name))
}

fn missing(node: &Node, name: &str) -> FeedError {
    log::warn!("<{}> is missing required element <{}>", node.name, name);
    FeedError::MissingField(name.to_string())
}
