// crates/feed-parser/src/dialect/rss2.rs
//! `<rss>` documents (RSS 0.9x / 2.0)
//!
//! Items, categories and the image all live inside `<channel>`. Element and
//! attribute names are plain, unprefixed local names.

use super::{required_text, required_url};
use crate::coerce;
use crate::config::ParserConfig;
use crate::date::DateParser;
use crate::error::{FeedError, FeedResult};
use crate::feed::{Category, Channel, Enclosure, Feed, Guid, Image, Item, Source};
use crate::node::Node;

/// Element and attribute names used by this dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rss2Element {
    Channel,
    Title,
    Link,
    Description,
    Language,
    Copyright,
    ManagingEditor,
    WebMaster,
    PubDate,
    LastBuildDate,
    Category,
    Generator,
    Docs,
    Ttl,
    Image,
    Item,
    Author,
    Comments,
    Enclosure,
    Guid,
    Source,
    Url,
    Width,
    Height,
    // attributes
    Version,
    Domain,
    Length,
    Type,
    IsPermaLink,
}

impl Rss2Element {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Title => "title",
            Self::Link => "link",
            Self::Description => "description",
            Self::Language => "language",
            Self::Copyright => "copyright",
            Self::ManagingEditor => "managingEditor",
            Self::WebMaster => "webMaster",
            Self::PubDate => "pubDate",
            Self::LastBuildDate => "lastBuildDate",
            Self::Category => "category",
            Self::Generator => "generator",
            Self::Docs => "docs",
            Self::Ttl => "ttl",
            Self::Image => "image",
            Self::Item => "item",
            Self::Author => "author",
            Self::Comments => "comments",
            Self::Enclosure => "enclosure",
            Self::Guid => "guid",
            Self::Source => "source",
            Self::Url => "url",
            Self::Width => "width",
            Self::Height => "height",
            Self::Version => "version",
            Self::Domain => "domain",
            Self::Length => "length",
            Self::Type => "type",
            Self::IsPermaLink => "isPermaLink",
        }
    }
}

use Rss2Element as E;

/// Builds a [`Feed`] from an `<rss>` root
pub(crate) fn parse_feed(root: &Node, config: &ParserConfig) -> FeedResult<Feed> {
    let version = coerce::text(root.attribute(E::Version.as_str()))
        .unwrap_or_else(|| config.default_version.clone());

    let channel_node = root
        .child(E::Channel.as_str())
        .ok_or(FeedError::InvalidStructure)?;

    let channel = ChannelParser::new().parse(channel_node)?;
    Ok(Feed::new(version, channel))
}

/// Parses `<channel>` elements
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ChannelParser {
    dates: DateParser,
    items: ItemParser,
    images: ImageParser,
}

impl ChannelParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fails only when `title`, `link` or `description` is unusable
    pub(crate) fn parse(&self, node: &Node) -> FeedResult<Channel> {
        let title = required_text(node, E::Title.as_str())?;
        let link = required_url(node, E::Link.as_str())?;
        let description = required_text(node, E::Description.as_str())?;

        let text = |e: E| coerce::text(node.text_for(e.as_str()));

        Ok(Channel {
            title,
            link,
            description,
            language: text(E::Language),
            copyright: text(E::Copyright),
            managing_editor: text(E::ManagingEditor),
            web_master: text(E::WebMaster),
            pub_date: self.dates.parse_opt(node.text_for(E::PubDate.as_str())),
            last_build_date: self.dates.parse_opt(node.text_for(E::LastBuildDate.as_str())),
            categories: parse_categories(node),
            generator: text(E::Generator),
            docs: coerce::url(node.text_for(E::Docs.as_str())),
            ttl: coerce::integer(node.text_for(E::Ttl.as_str())),
            image: node
                .child(E::Image.as_str())
                .and_then(|image| self.images.parse(image)),
            items: self.items.parse_all(node.children(E::Item.as_str())),
        })
    }
}

/// Parses `<item>` elements; never fails
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ItemParser {
    dates: DateParser,
}

impl ItemParser {
    pub(crate) fn parse(&self, node: &Node) -> Item {
        Item {
            title: coerce::text(node.text_for(E::Title.as_str())),
            link: coerce::url(node.text_for(E::Link.as_str())),
            description: coerce::text(node.text_for(E::Description.as_str())),
            author: coerce::text(node.text_for(E::Author.as_str())),
            categories: parse_categories(node),
            comments: coerce::url(node.text_for(E::Comments.as_str())),
            enclosure: node.child(E::Enclosure.as_str()).and_then(parse_enclosure),
            guid: node.child(E::Guid.as_str()).and_then(parse_guid),
            pub_date: self.dates.parse_opt(node.text_for(E::PubDate.as_str())),
            source: node.child(E::Source.as_str()).and_then(parse_source),
        }
    }

    pub(crate) fn parse_all<'a>(&self, nodes: impl Iterator<Item = &'a Node>) -> Vec<Item> {
        nodes.map(|node| self.parse(node)).collect()
    }
}

/// Parses `<image>` elements; all-or-nothing on `url`, `title` and `link`
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ImageParser;

impl ImageParser {
    pub(crate) fn parse(&self, node: &Node) -> Option<Image> {
        let url = coerce::url(node.text_for(E::Url.as_str()));
        let title = coerce::text(node.text_for(E::Title.as_str()));
        let link = coerce::url(node.text_for(E::Link.as_str()));

        let (Some(url), Some(title), Some(link)) = (url, title, link) else {
            log::trace!("Dropping <image> without usable url, title and link");
            return None;
        };

        Some(Image {
            url,
            title,
            link,
            width: coerce::integer(node.text_for(E::Width.as_str())),
            height: coerce::integer(node.text_for(E::Height.as_str())),
            description: coerce::text(node.text_for(E::Description.as_str())),
        })
    }
}

fn parse_categories(node: &Node) -> Vec<Category> {
    node.children(E::Category.as_str())
        .filter_map(|category| {
            let value = coerce::text(category.trimmed_text())?;
            Some(Category {
                value,
                domain: coerce::text(category.attribute(E::Domain.as_str())),
            })
        })
        .collect()
}

fn parse_enclosure(node: &Node) -> Option<Enclosure> {
    let url = coerce::url(node.attribute(E::Url.as_str()));
    let length = coerce::integer(node.attribute(E::Length.as_str()));
    let mime_type = coerce::text(node.attribute(E::Type.as_str()));

    match (url, length, mime_type) {
        (Some(url), Some(length), Some(mime_type)) => Some(Enclosure {
            url,
            length,
            mime_type,
        }),
        _ => {
            log::trace!("Dropping incomplete <enclosure>");
            None
        }
    }
}

fn parse_guid(node: &Node) -> Option<Guid> {
    let value = coerce::text(node.trimmed_text())?;
    let is_perma_link = coerce::boolean(node.attribute(E::IsPermaLink.as_str())).unwrap_or(true);
    Some(Guid {
        value,
        is_perma_link,
    })
}

fn parse_source(node: &Node) -> Option<Source> {
    let value = coerce::text(node.trimmed_text())?;
    let url = coerce::url(node.attribute(E::Url.as_str()))?;
    Some(Source { value, url })
}
