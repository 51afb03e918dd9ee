// crates/feed-parser/src/feed.rs
//! Feed data structures
//!
//! One model serves both dialects. Fields a dialect has no concept of are
//! simply left empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A parsed feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Format version, e.g. "2.0" or "1.0"
    pub version: String,
    /// Channel metadata and items
    pub channel: Channel,
}

impl Feed {
    /// Creates a feed
    pub fn new(version: impl Into<String>, channel: Channel) -> Self {
        Self {
            version: version.into(),
            channel,
        }
    }

    /// Returns the number of items in the feed
    pub fn item_count(&self) -> usize {
        self.channel.items.len()
    }

    /// Returns true if the feed has no items
    pub fn is_empty(&self) -> bool {
        self.channel.items.is_empty()
    }
}

/// Channel metadata and items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name
    pub title: String,
    /// Website the channel belongs to
    pub link: Url,
    /// Channel description
    pub description: String,
    /// Language code, e.g. "en-us"
    pub language: Option<String>,
    /// Copyright notice
    pub copyright: Option<String>,
    /// Email address of the managing editor
    pub managing_editor: Option<String>,
    /// Email address of the webmaster
    pub web_master: Option<String>,
    /// Publication date of the channel content
    pub pub_date: Option<DateTime<Utc>>,
    /// Last time the content changed
    pub last_build_date: Option<DateTime<Utc>>,
    /// Categories in document order
    pub categories: Vec<Category>,
    /// Program that generated the channel
    pub generator: Option<String>,
    /// Documentation for the format
    pub docs: Option<Url>,
    /// Minutes the channel may be cached
    pub ttl: Option<i64>,
    /// Image shown with the channel
    pub image: Option<Image>,
    /// Items in document order
    pub items: Vec<Item>,
}

impl Channel {
    /// Creates a channel with only the required fields set
    pub fn new(title: impl Into<String>, link: Url, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link,
            description: description.into(),
            language: None,
            copyright: None,
            managing_editor: None,
            web_master: None,
            pub_date: None,
            last_build_date: None,
            categories: Vec::new(),
            generator: None,
            docs: None,
            ttl: None,
            image: None,
            items: Vec::new(),
        }
    }

    /// Items ordered newest first; undated items go last in document order
    pub fn items_by_date(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| match (&b.pub_date, &a.pub_date) {
            (Some(b_date), Some(a_date)) => b_date.cmp(a_date),
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => std::cmp::Ordering::Equal,
        });
        items
    }

    /// Items with an audio enclosure
    pub fn audio_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.has_audio()).collect()
    }
}

/// A single entry in a channel; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item headline
    pub title: Option<String>,
    /// URL of the item
    pub link: Option<Url>,
    /// Item synopsis, may contain HTML
    pub description: Option<String>,
    /// Author, usually an email address
    pub author: Option<String>,
    /// Categories in document order
    pub categories: Vec<Category>,
    /// Page with comments about the item
    pub comments: Option<Url>,
    /// Attached media file
    pub enclosure: Option<Enclosure>,
    /// Unique identifier
    pub guid: Option<Guid>,
    /// Publication date
    pub pub_date: Option<DateTime<Utc>>,
    /// Channel the item was republished from
    pub source: Option<Source>,
}

impl Item {
    /// Returns true if this item has an audio enclosure
    pub fn has_audio(&self) -> bool {
        self.enclosure.as_ref().is_some_and(Enclosure::is_audio)
    }

    /// Returns the enclosure URL if available
    pub fn enclosure_url(&self) -> Option<&Url> {
        self.enclosure.as_ref().map(|e| &e.url)
    }
}

/// A category label with an optional taxonomy domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub value: String,
    /// Taxonomy the category belongs to
    pub domain: Option<String>,
}

impl Category {
    /// Creates a category without a domain
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            domain: None,
        }
    }
}

/// Channel image; `url`, `title` and `link` are required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Location of the image file
    pub url: Url,
    /// Alt text
    pub title: String,
    /// Page the image links to
    pub link: Url,
    /// Width in pixels
    pub width: Option<i64>,
    /// Height in pixels
    pub height: Option<i64>,
    /// Title attribute for the link
    pub description: Option<String>,
}

/// Media attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    /// Location of the media file
    pub url: Url,
    /// Size in bytes
    pub length: i64,
    /// MIME type, e.g. "audio/mpeg"
    pub mime_type: String,
}

impl Enclosure {
    /// Returns true if this is an audio enclosure
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    /// Returns true if this is a video enclosure
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

/// Item identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guid {
    /// Identifier string
    pub value: String,
    /// Whether `value` is also a URL to the item
    pub is_perma_link: bool,
}

/// Feed an item was taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Name of the source channel
    pub value: String,
    /// URL of the source channel's feed
    pub url: Url,
}
