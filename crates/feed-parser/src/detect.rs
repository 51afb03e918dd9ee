// crates/feed-parser/src/detect.rs
//! Feed dialect detection

use crate::error::{FeedError, FeedResult};
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// The feed dialects this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// RSS 1.0: `<rdf:RDF>` root with Dublin Core metadata
    Rdf,
    /// RSS 0.9x/2.0: `<rss>` root
    Rss2,
}

impl Dialect {
    /// Fixed version reported for the dialect, if it has one.
    ///
    /// `<rss>` documents carry their version in an attribute, so `Rss2`
    /// returns `None`.
    pub fn version(&self) -> Option<&'static str> {
        match self {
            Self::Rdf => Some(crate::dialect::rdf::VERSION),
            Self::Rss2 => None,
        }
    }
}

/// Picks the dialect from the root element name alone.
///
/// Matching is case-sensitive and literal: `rdf:RDF` or an unprefixed `RDF`
/// selects [`Dialect::Rdf`], `rss` selects [`Dialect::Rss2`].
pub fn detect_dialect(root: &Node) -> FeedResult<Dialect> {
    match root.name.as_str() {
        "rdf:RDF" | "RDF" => Ok(Dialect::Rdf),
        "rss" => Ok(Dialect::Rss2),
        other => {
            log::debug!("Unrecognized feed root element <{}>", other);
            Err(FeedError::InvalidStructure)
        }
    }
}
