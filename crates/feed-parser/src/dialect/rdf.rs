// crates/feed-parser/src/dialect/rdf.rs
//! `<rdf:RDF>` documents (RSS 1.0)
//!
//! Items and the image are siblings of `<channel>` under the root; the
//! channel only references them. Authorship, dates, subjects and sources come
//! from Dublin Core elements, matched literally with their `dc:` prefix.
//! There is no enclosure, comments or guid in this dialect.

use super::{required_text, required_url};
use crate::coerce;
use crate::config::{ParserConfig, RdfItemLocation};
use crate::date::DateParser;
use crate::error::{FeedError, FeedResult};
use crate::feed::{Category, Channel, Feed, Image, Item, Source};
use crate::node::Node;

/// Element names used by this dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RdfElement {
    Channel,
    Title,
    Link,
    Description,
    Image,
    Item,
    Url,
    DcCreator,
    DcDate,
    DcSubject,
    DcSource,
    DcLanguage,
    DcRights,
}

impl RdfElement {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Title => "title",
            Self::Link => "link",
            Self::Description => "description",
            Self::Image => "image",
            Self::Item => "item",
            Self::Url => "url",
            Self::DcCreator => "dc:creator",
            Self::DcDate => "dc:date",
            Self::DcSubject => "dc:subject",
            Self::DcSource => "dc:source",
            Self::DcLanguage => "dc:language",
            Self::DcRights => "dc:rights",
        }
    }
}

use RdfElement as E;

/// Version reported for every RDF feed
pub(crate) const VERSION: &str = "1.0";

/// Builds a [`Feed`] from an `<rdf:RDF>` root
pub(crate) fn parse_feed(root: &Node, config: &ParserConfig) -> FeedResult<Feed> {
    let channel_node = root
        .child(E::Channel.as_str())
        .ok_or(FeedError::InvalidStructure)?;

    let item_nodes = locate_items(root, channel_node, config.rdf_item_location);
    let image_node = root
        .child(E::Image.as_str())
        .or_else(|| channel_node.child(E::Image.as_str()));

    let channel = ChannelParser::new().parse(channel_node, &item_nodes, image_node)?;
    Ok(Feed::new(VERSION, channel))
}

fn locate_items<'a>(root: &'a Node, channel: &'a Node, location: RdfItemLocation) -> Vec<&'a Node> {
    let siblings = || root.children(E::Item.as_str()).collect::<Vec<_>>();
    match location {
        RdfItemLocation::RootSiblings => siblings(),
        RdfItemLocation::NestedThenRoot => {
            let nested: Vec<_> = channel.children(E::Item.as_str()).collect();
            if nested.is_empty() {
                siblings()
            } else {
                nested
            }
        }
    }
}

/// Parses the RDF `<channel>` together with the items and image found
/// elsewhere in the document
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ChannelParser {
    dates: DateParser,
    items: ItemParser,
}

impl ChannelParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn parse(
        &self,
        node: &Node,
        item_nodes: &[&Node],
        image_node: Option<&Node>,
    ) -> FeedResult<Channel> {
        let title = required_text(node, E::Title.as_str())?;
        let link = required_url(node, E::Link.as_str())?;
        let description = required_text(node, E::Description.as_str())?;

        let mut channel = Channel::new(title, link, description);
        channel.language = coerce::text(node.text_for(E::DcLanguage.as_str()));
        channel.copyright = coerce::text(node.text_for(E::DcRights.as_str()));
        channel.managing_editor = coerce::text(node.text_for(E::DcCreator.as_str()));
        channel.pub_date = self.dates.parse_opt(node.text_for(E::DcDate.as_str()));
        channel.categories = parse_subjects(node);
        channel.image = image_node.and_then(parse_image);
        channel.items = item_nodes.iter().map(|item| self.items.parse(item)).collect();
        Ok(channel)
    }
}

/// Parses RDF `<item>` elements; never fails
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
            author: coerce::text(node.text_for(E::DcCreator.as_str())),
            categories: parse_subjects(node),
            pub_date: self.dates.parse_opt(node.text_for(E::DcDate.as_str())),
            source: parse_source(node),
            ..Item::default()
        }
    }
}

fn parse_subjects(node: &Node) -> Vec<Category> {
    node.children(E::DcSubject.as_str())
        .filter_map(|subject| coerce::text(subject.trimmed_text()))
        .map(Category::new)
        .collect()
}

/// `dc:source` counts only when its text is itself a URL
fn parse_source(node: &Node) -> Option<Source> {
    let value = coerce::text(node.text_for(E::DcSource.as_str()))?;
    let url = coerce::url(Some(value.as_str()))?;
    Some(Source { value, url })
}

fn parse_image(node: &Node) -> Option<Image> {
    let url = coerce::url(node.text_for(E::Url.as_str()));
    let title = coerce::text(node.text_for(E::Title.as_str()));
    let link = coerce::url(node.text_for(E::Link.as_str()));

    let (Some(url), Some(title), Some(link)) = (url, title, link) else {
        log::trace!("Dropping RDF <image> without usable url, title and link");
        return None;
    };

    Some(Image {
        url,
        title,
        link,
        width: None,
        height: None,
        description: None,
    })
}
