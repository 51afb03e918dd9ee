// crates/feed-parser/tests/rdf_tests.rs
//! RSS 1.0 (RDF) feed tests

use chrono::{TimeZone, Utc};
use rsskit_feed_parser::{Category, FeedError, FeedParser};

const RDF_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
  xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
  xmlns:dc="http://purl.org/dc/elements/1.1/"
  xmlns="http://purl.org/rss/1.0/">

  <channel rdf:about="https://example.org/news.rdf">
    <title>Example News</title>
    <link>https://example.org/</link>
    <description>Latest headlines</description>
    <dc:language>en</dc:language>
    <dc:rights>Copyright 2024 Example</dc:rights>
    <dc:creator>newsroom@example.org</dc:creator>
    <dc:date>2024-03-10T08:30:00+01:00</dc:date>
    <dc:subject>World</dc:subject>
    <dc:subject></dc:subject>
    <dc:subject>Science</dc:subject>
    <image rdf:resource="https://example.org/logo.gif" />
    <items>
      <rdf:Seq>
        <rdf:li rdf:resource="https://example.org/a" />
        <rdf:li rdf:resource="https://example.org/b" />
      </rdf:Seq>
    </items>
  </channel>

  <image rdf:about="https://example.org/logo.gif">
    <title>Example News</title>
    <link>https://example.org/</link>
    <url>https://example.org/logo.gif</url>
  </image>

  <item rdf:about="https://example.org/a">
    <title>First headline</title>
    <link>https://example.org/a</link>
    <description>Something happened.</description>
    <dc:creator>Alice</dc:creator>
    <dc:date>2024-03-10</dc:date>
    <dc:subject>World</dc:subject>
    <dc:source>https://wire.example.com/story/1</dc:source>
  </item>

  <item rdf:about="https://example.org/b">
    <title>Second headline</title>
    <link>https://example.org/b</link>
    <dc:date>whenever</dc:date>
    <dc:source>The Wire</dc:source>
  </item>
</rdf:RDF>"#;

#[test]
fn test_parse_rdf_feed() {
    let feed = FeedParser::new().parse(RDF_FEED).expect("Should parse RDF");

    assert_eq!(feed.version, "1.0");
    let channel = &feed.channel;
    assert_eq!(channel.title, "Example News");
    assert_eq!(channel.link.as_str(), "https://example.org/");
    assert_eq!(channel.description, "Latest headlines");
    assert_eq!(channel.language.as_deref(), Some("en"));
    assert_eq!(channel.copyright.as_deref(), Some("Copyright 2024 Example"));
    assert_eq!(
        channel.managing_editor.as_deref(),
        Some("newsroom@example.org")
    );
    assert_eq!(
        channel.pub_date,
        Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).single()
    );
    assert_eq!(
        channel.categories,
        vec![Category::new("World"), Category::new("Science")]
    );

    let image = channel.image.as_ref().expect("Should have image");
    assert_eq!(image.url.as_str(), "https://example.org/logo.gif");
    assert_eq!(image.title, "Example News");

    assert_eq!(feed.item_count(), 2);

    let first = &channel.items[0];
    assert_eq!(first.title.as_deref(), Some("First headline"));
    assert_eq!(first.description.as_deref(), Some("Something happened."));
    assert_eq!(first.author.as_deref(), Some("Alice"));
    assert_eq!(
        first.pub_date,
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).single()
    );
    assert_eq!(first.categories, vec![Category::new("World")]);
    let source = first.source.as_ref().expect("Should have source");
    assert_eq!(source.url.as_str(), "https://wire.example.com/story/1");
    assert!(first.guid.is_none());
    assert!(first.enclosure.is_none());

    let second = &channel.items[1];
    assert_eq!(second.title.as_deref(), Some("Second headline"));
    assert!(second.pub_date.is_none());
    assert!(second.source.is_none());
    assert!(second.author.is_none());
}

#[test]
fn test_rdf_without_prefix_root() {
    let rdf = "<RDF><channel><title>T</title><link>https://e.com</link><description>D</description></channel><item><title>I</title></item></RDF>";
    let feed = FeedParser::new().parse(rdf).expect("Should parse");
    assert_eq!(feed.version, "1.0");
    assert_eq!(feed.item_count(), 1);
}

#[test]
fn test_rdf_items_nested_in_channel_are_ignored_by_default() {
    let rdf = "<rdf:RDF><channel><title>T</title><link>https://e.com</link><description>D</description><item><title>Nested</title></item></channel></rdf:RDF>";
    let feed = FeedParser::new().parse(rdf).expect("Should parse");
    assert!(feed.is_empty());
}

#[test]
fn test_rdf_missing_channel() {
    let rdf = "<rdf:RDF><item><title>Orphan</title></item></rdf:RDF>";
    assert_eq!(
        FeedParser::new().parse(rdf),
        Err(FeedError::InvalidStructure)
    );
}

#[test]
fn test_rdf_missing_description() {
    let rdf = "<rdf:RDF><channel><title>T</title><link>https://e.com</link></channel></rdf:RDF>";
    assert_eq!(
        FeedParser::new().parse(rdf),
        Err(FeedError::MissingField("description".to_string()))
    );
}
