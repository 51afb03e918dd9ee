// crates/feed-parser/examples/parse_feed.rs
//! Example of parsing RSS 2.0 and RSS 1.0 (RDF) feeds

use rsskit_feed_parser::{Feed, FeedParser, ParserConfig};

fn main() {
    env_logger::init();

    println!("=== RSS Feed Parser Demo ===\n");

    println!("Example 1: RSS 2.0 Feed");
    println!("{}", "=".repeat(60));
    parse_rss_example();

    println!("\n");

    println!("Example 2: RSS 1.0 (RDF) Feed");
    println!("{}", "=".repeat(60));
    parse_rdf_example();

    println!("\n");

    println!("Example 3: Filtering, Sorting & Errors");
    println!("{}", "=".repeat(60));
    filter_sort_example();
}

fn print_channel(feed: &Feed) {
    let channel = &feed.channel;
    println!("Feed: {} (version {})", channel.title, feed.version);
    println!("Link: {}", channel.link);
    println!("Description: {}", channel.description);

    if let Some(lang) = &channel.language {
        println!("Language: {}", lang);
    }

    if let Some(image) = &channel.image {
        println!("Image: {} ({})", image.title, image.url);
    }

    for category in &channel.categories {
        println!("Category: {}", category.value);
    }
}

fn parse_rss_example() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Classic Audiobooks</title>
    <description>Public domain audiobooks read by volunteers</description>
    <link>https://example.com/audiobooks</link>
    <language>en</language>
    <category>Literature</category>
    <ttl>120</ttl>

    <item>
      <title>Pride and Prejudice - Chapter 1</title>
      <description>By Jane Austen. Read by volunteer narrator.</description>
      <link>https://example.com/pride-ch1</link>
      <guid isPermaLink="false">pride-ch1</guid>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/audio/pride-ch1.mp3"
                 type="audio/mpeg"
                 length="15000000"/>
      <author>jane@example.com (Jane Austen)</author>
    </item>

    <item>
      <title>Moby Dick - Chapter 1: Loomings</title>
      <description><![CDATA[By Herman Melville. <i>Call me Ishmael...</i>]]></description>
      <pubDate>Wed, 03 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/audio/moby-ch1.mp3"
                 type="audio/mpeg"
                 length="18000000"/>
    </item>
  </channel>
</rss>"#;

    match FeedParser::new().parse(rss) {
        Ok(feed) => {
            print_channel(&feed);

            println!("\nItems: {}", feed.item_count());
            println!("{}", "-".repeat(60));

            for (i, item) in feed.channel.items.iter().enumerate() {
                println!("\n{}. {}", i + 1, item.title.as_deref().unwrap_or("Untitled"));

                if let Some(desc) = &item.description {
                    let short_desc: String = desc.chars().take(50).collect();
                    println!("   Description: {}", short_desc);
                }

                if let Some(author) = &item.author {
                    println!("   Author: {}", author);
                }

                if let Some(published) = &item.pub_date {
                    println!("   Published: {}", published.format("%Y-%m-%d"));
                }

                if let Some(guid) = &item.guid {
                    println!("   GUID: {} (permalink: {})", guid.value, guid.is_perma_link);
                }

                if let Some(enclosure) = &item.enclosure {
                    println!("   Audio: {}", enclosure.url);
                    println!("   Size: {:.1} MB", enclosure.length as f64 / 1_000_000.0);
                }
            }
        }
        Err(e) => eprintln!("Error parsing RSS: {}", e),
    }
}

fn parse_rdf_example() {
    let rdf = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
  xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
  xmlns:dc="http://purl.org/dc/elements/1.1/"
  xmlns="http://purl.org/rss/1.0/">
  <channel rdf:about="https://example.com/scifi.rdf">
    <title>Science Fiction Audiobooks</title>
    <link>https://example.com/scifi</link>
    <description>Classic sci-fi stories</description>
    <dc:language>en</dc:language>
    <dc:subject>Science Fiction</dc:subject>
  </channel>

  <item rdf:about="https://example.com/timemachine1">
    <title>The Time Machine - Part 1</title>
    <link>https://example.com/timemachine1</link>
    <dc:creator>H. G. Wells</dc:creator>
    <dc:date>2024-01-10T12:00:00Z</dc:date>
  </item>

  <item rdf:about="https://example.com/wotw1">
    <title>War of the Worlds - Chapter 1</title>
    <link>https://example.com/wotw1</link>
    <dc:creator>H. G. Wells</dc:creator>
    <dc:date>2024-01-12</dc:date>
  </item>
</rdf:RDF>"#;

    match FeedParser::new().parse(rdf) {
        Ok(feed) => {
            print_channel(&feed);

            println!("\nEntries: {}", feed.item_count());
            println!("{}", "-".repeat(60));

            for (i, item) in feed.channel.items.iter().enumerate() {
                println!("\n{}. {}", i + 1, item.title.as_deref().unwrap_or("Untitled"));

                if let Some(url) = &item.link {
                    println!("   Link: {}", url);
                }

                if let Some(author) = &item.author {
                    println!("   Creator: {}", author);
                }

                if let Some(published) = &item.pub_date {
                    println!("   Published: {}", published.format("%B %d, %Y"));
                }
            }
        }
        Err(e) => eprintln!("Error parsing RDF: {}", e),
    }
}

fn filter_sort_example() {
    let rss = r#"<?xml version="1.0"?>
<rss>
  <channel>
    <title>Mixed Content Feed</title>
    <link>https://example.com/mixed</link>
    <description>Audio, video and text</description>

    <item>
      <title>Audio Episode 1</title>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/audio1.mp3" type="audio/mpeg" length="1000"/>
    </item>

    <item>
      <title>Text Article</title>
      <pubDate>Tue, 02 Jan 2024 12:00:00 GMT</pubDate>
    </item>

    <item>
      <title>Video Content</title>
      <pubDate>Thu, 04 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/video.mp4" type="video/mp4" length="5000"/>
    </item>

    <item>
      <title>Audio Episode 2</title>
      <pubDate>Fri, 05 Jan 2024 12:00:00 GMT</pubDate>
      <enclosure url="https://example.com/audio2.mp3" type="audio/mpeg" length="2000"/>
    </item>
  </channel>
</rss>"#;

    let config = ParserConfig {
        default_version: "0.92".to_string(),
        ..ParserConfig::default()
    };
    let parser = FeedParser::with_config(config);

    match parser.parse(rss) {
        Ok(feed) => {
            println!(
                "Original feed: {} items (version {})",
                feed.item_count(),
                feed.version
            );

            let audio_items = feed.channel.audio_items();
            println!("Audio items: {}", audio_items.len());

            for item in audio_items {
                println!("  - {}", item.title.as_deref().unwrap_or("Untitled"));
                if let Some(url) = item.enclosure_url() {
                    println!("    URL: {}", url);
                }
            }

            println!("\nSorted by date (newest first):");
            for (i, item) in feed.channel.items_by_date().iter().enumerate() {
                print!("  {}. {}", i + 1, item.title.as_deref().unwrap_or("Untitled"));
                if let Some(date) = &item.pub_date {
                    print!(" ({})", date.format("%b %d"));
                }
                println!();
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    println!("\nParsing a document that is not a feed:");
    match parser.parse("<html><body>Not a feed</body></html>") {
        Ok(_) => println!("  Unexpectedly parsed"),
        Err(e) => println!("  Rejected: {}", e),
    }
}
