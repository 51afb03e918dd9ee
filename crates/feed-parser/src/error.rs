// crates/feed-parser/src/error.rs
//! Error types for feed parsing

use thiserror::Error;

/// Result type for feed parser operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that abort a parse.
///
/// Problems with optional fields (bad dates, bad URLs, bad numbers) never show
/// up here; they are dropped to `None` by the coercion helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The tokenizer rejected the document, or it contained no elements
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// Root element is not a known feed root, or a required container is missing
    #[error("Invalid feed structure: missing <rss>, <rdf:RDF> or <channel> element")]
    InvalidStructure,

    /// A required channel element is absent or empty
    #[error("Missing required element: <{0}>")]
    MissingField(String),
}

impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        FeedError::InvalidXml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for FeedError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        FeedError::InvalidXml(err.to_string())
    }
}
