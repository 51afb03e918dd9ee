// crates/feed-parser/src/parser.rs
//! Feed parsing entry point
//!
//! A parse runs in three stages and stops at the first failure: the document
//! is tokenized into a [`Node`] tree, the dialect is picked from the root
//! element, and the dialect's channel parser extracts the model.

use crate::config::ParserConfig;
use crate::detect::{detect_dialect, Dialect};
use crate::dialect::{rdf, rss2};
use crate::error::FeedResult;
use crate::feed::Feed;
use crate::node::Node;
use crate::tree::parse_document;

/// Feed parser
///
/// Holds only its configuration, so one instance can be shared freely
/// between threads or rebuilt for every call.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    config: ParserConfig,
}

impl FeedParser {
    /// Creates a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a feed from a string
    pub fn parse(&self, content: &str) -> FeedResult<Feed> {
        self.parse_bytes(content.as_bytes())
    }

    /// Parses a feed from raw UTF-8 bytes
    pub fn parse_bytes(&self, data: &[u8]) -> FeedResult<Feed> {
        let root = parse_document(data)?;
        log::debug!("Built document tree rooted at <{}>", root.name);

        let dialect = detect_dialect(&root)?;
        log::debug!("Detected {:?} feed", dialect);

        let feed = self.extract(&root, dialect)?;
        log::debug!(
            "Extracted feed version {} with {} item(s)",
            feed.version,
            feed.item_count()
        );
        Ok(feed)
    }

    /// Detects the dialect of a document without extracting the model
    pub fn detect(&self, content: &str) -> FeedResult<Dialect> {
        let root = parse_document(content.as_bytes())?;
        detect_dialect(&root)
    }

    /// Extracts the model from an already built tree
    pub fn parse_tree(&self, root: &Node) -> FeedResult<Feed> {
        let dialect = detect_dialect(root)?;
        self.extract(root, dialect)
    }

    fn extract(&self, root: &Node, dialect: Dialect) -> FeedResult<Feed> {
        match dialect {
            Dialect::Rss2 => rss2::parse_feed(root, &self.config),
            Dialect::Rdf => rdf::parse_feed(root, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RdfItemLocation;
    use crate::error::FeedError;

    const MINIMAL_RSS: &str = r#"<rss version="2.0"><channel><title>T</title><link>https://e.com</link><description>D</description></channel></rss>"#;

    #[test]
    fn test_detect_rss() {
        let dialect = FeedParser::new().detect(MINIMAL_RSS).expect("Should detect type");
        assert_eq!(dialect, Dialect::Rss2);
    }

    #[test]
    fn test_detect_rdf() {
        let rdf = r#"<?xml version="1.0"?><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"></rdf:RDF>"#;
        let dialect = FeedParser::new().detect(rdf).expect("Should detect type");
        assert_eq!(dialect, Dialect::Rdf);
    }

    #[test]
    fn test_detect_atom_is_unrecognized() {
        let atom = r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        assert_eq!(
            FeedParser::new().detect(atom),
            Err(FeedError::InvalidStructure)
        );
    }

    #[test]
    fn test_parse_minimal_rss() {
        let feed = FeedParser::new().parse(MINIMAL_RSS).expect("Should parse RSS");
        assert_eq!(feed.version, "2.0");
        assert_eq!(feed.channel.title, "T");
        assert_eq!(feed.channel.description, "D");
        assert!(feed.is_empty());
    }

    #[test]
    fn test_parse_bytes_matches_parse() {
        let parser = FeedParser::new();
        assert_eq!(
            parser.parse_bytes(MINIMAL_RSS.as_bytes()),
            parser.parse(MINIMAL_RSS)
        );
    }

    #[test]
    fn test_parse_tree_skips_tokenizing() {
        let root = Node::new("rss").with_child(
            Node::new("channel")
                .with_child(Node::new("title").with_text("T"))
                .with_child(Node::new("link").with_text("https://e.com"))
                .with_child(Node::new("description").with_text("D")),
        );
        let feed = FeedParser::new().parse_tree(&root).expect("Should parse");
        assert_eq!(feed.version, "2.0");
    }

    #[test]
    fn test_configured_default_version() {
        let config = ParserConfig {
            default_version: "0.91".to_string(),
            rdf_item_location: RdfItemLocation::RootSiblings,
        };
        let parser = FeedParser::with_config(config);
        let rss = MINIMAL_RSS.replace(r#" version="2.0""#, "");
        let feed = parser.parse(&rss).expect("Should parse");
        assert_eq!(feed.version, "0.91");
        assert_eq!(parser.config().default_version, "0.91");
    }

    #[test]
    fn test_parse_invalid_xml() {
        let result = FeedParser::new().parse("not xml at all");
        assert!(matches!(result, Err(FeedError::InvalidXml(_))));
    }

    #[test]
    fn test_parse_rss_missing_title() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <link>http://example.com</link>
    <description>No title</description>
  </channel>
</rss>"#;

        let result = FeedParser::new().parse(rss);
        assert_eq!(result, Err(FeedError::MissingField("title".to_string())));
    }
}
