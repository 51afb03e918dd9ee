// crates/feed-parser/src/lib.rs
//! RSS feed parser with a single model for both RSS dialects
//!
//! This crate reads:
//! - `<rss>` documents (RSS 0.9x / 2.0)
//! - `<rdf:RDF>` documents (RSS 1.0 with Dublin Core metadata)
//!
//! and returns the same [`Feed`] type for both. Only the channel's `title`,
//! `link` and `description` are mandatory; every other field that is missing
//! or malformed is simply left empty.
//!
//! # Example
//!
//! ```rust
//! use rsskit_feed_parser::FeedParser;
//!
//! let rss = r#"<?xml version="1.0"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>My Podcast</title>
//!     <link>https://example.com</link>
//!     <description>Weekly episodes</description>
//!     <item>
//!       <title>Episode 1</title>
//!       <enclosure url="https://example.com/ep1.mp3" length="1000" type="audio/mpeg"/>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let feed = FeedParser::new().parse(rss).expect("Failed to parse feed");
//! println!("Feed: {} with {} episodes", feed.channel.title, feed.item_count());
//! ```

mod coerce;
mod config;
mod date;
mod detect;
mod dialect;
mod error;
mod feed;
mod node;
mod parser;
mod tree;

pub use config::{ConfigError, ConfigResult, ParserConfig, RdfItemLocation};
pub use date::DateParser;
pub use detect::{detect_dialect, Dialect};
pub use error::{FeedError, FeedResult};
pub use feed::{Category, Channel, Enclosure, Feed, Guid, Image, Item, Source};
pub use node::Node;
pub use parser::FeedParser;
pub use tree::{parse_document, TreeBuilder};

/// Parses a feed with the default configuration
pub fn parse(content: &str) -> FeedResult<Feed> {
    FeedParser::new().parse(content)
}
