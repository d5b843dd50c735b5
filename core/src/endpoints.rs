//! Static routing table for the analysis service.
//!
//! # Design
//! Every analysis capability is addressed by an (operation, flavor) pair.
//! `ENDPOINTS` holds the registered pairs and their URL path fragments as
//! compile-time data; `path` is the only lookup. The table is the routing
//! contract — a pair absent here is rejected before any network activity.

use std::fmt;

/// Input shape for an operation.
///
/// The lowercase wire name doubles as the form key under which the payload
/// is injected into the request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    Url,
    #[default]
    Text,
    Html,
    Image,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Url => "url",
            Flavor::Text => "text",
            Flavor::Html => "html",
            Flavor::Image => "image",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named analysis capability, exposed as one client method each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sentiment,
    SentimentTargeted,
    Author,
    Keywords,
    Concepts,
    Entities,
    Category,
    Relations,
    Language,
    Text,
    TextRaw,
    Title,
    Feeds,
    Microformats,
    Combined,
    ImageExtraction,
    ImageKeywords,
    Taxonomy,
}

impl Operation {
    /// Human label for this operation, used in flavor-rejection messages.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Sentiment => "Sentiment analysis",
            Operation::SentimentTargeted => "Targeted sentiment analysis",
            Operation::Author => "Author extraction",
            Operation::Keywords => "Keyword extraction",
            Operation::Concepts => "Concept tagging",
            Operation::Entities => "Entity extraction",
            Operation::Category => "Text categorization",
            Operation::Relations => "Relation extraction",
            Operation::Language => "Language detection",
            Operation::Text => "Clean text extraction",
            Operation::TextRaw => "Raw text extraction",
            Operation::Title => "Title text extraction",
            Operation::Feeds => "Feed detection",
            Operation::Microformats => "Microformat parsing",
            Operation::Combined => "combined parsing",
            Operation::ImageExtraction => "Image Extraction parsing",
            Operation::ImageKeywords => "Image tagging",
            Operation::Taxonomy => "taxonomy parsing",
        }
    }
}

/// The registered (operation, flavor) pairs and their path fragments below
/// the base URL. Paths start with `/` and are unique within the table.
pub const ENDPOINTS: &[(Operation, Flavor, &str)] = &[
    (Operation::Sentiment, Flavor::Url, "/url/URLGetTextSentiment"),
    (Operation::Sentiment, Flavor::Text, "/text/TextGetTextSentiment"),
    (Operation::Sentiment, Flavor::Html, "/html/HTMLGetTextSentiment"),
    (Operation::SentimentTargeted, Flavor::Url, "/url/URLGetTargetedSentiment"),
    (Operation::SentimentTargeted, Flavor::Text, "/text/TextGetTargetedSentiment"),
    (Operation::SentimentTargeted, Flavor::Html, "/html/HTMLGetTargetedSentiment"),
    (Operation::Author, Flavor::Url, "/url/URLGetAuthor"),
    (Operation::Author, Flavor::Html, "/html/HTMLGetAuthor"),
    (Operation::Keywords, Flavor::Url, "/url/URLGetRankedKeywords"),
    (Operation::Keywords, Flavor::Text, "/text/TextGetRankedKeywords"),
    (Operation::Keywords, Flavor::Html, "/html/HTMLGetRankedKeywords"),
    (Operation::Concepts, Flavor::Url, "/url/URLGetRankedConcepts"),
    (Operation::Concepts, Flavor::Text, "/text/TextGetRankedConcepts"),
    (Operation::Concepts, Flavor::Html, "/html/HTMLGetRankedConcepts"),
    (Operation::Entities, Flavor::Url, "/url/URLGetRankedNamedEntities"),
    (Operation::Entities, Flavor::Text, "/text/TextGetRankedNamedEntities"),
    (Operation::Entities, Flavor::Html, "/html/HTMLGetRankedNamedEntities"),
    (Operation::Category, Flavor::Url, "/url/URLGetCategory"),
    (Operation::Category, Flavor::Text, "/text/TextGetCategory"),
    (Operation::Category, Flavor::Html, "/html/HTMLGetCategory"),
    (Operation::Relations, Flavor::Url, "/url/URLGetRelations"),
    (Operation::Relations, Flavor::Text, "/text/TextGetRelations"),
    (Operation::Relations, Flavor::Html, "/html/HTMLGetRelations"),
    (Operation::Language, Flavor::Url, "/url/URLGetLanguage"),
    (Operation::Language, Flavor::Text, "/text/TextGetLanguage"),
    (Operation::Language, Flavor::Html, "/html/HTMLGetLanguage"),
    (Operation::Text, Flavor::Url, "/url/URLGetText"),
    (Operation::Text, Flavor::Html, "/html/HTMLGetText"),
    (Operation::TextRaw, Flavor::Url, "/url/URLGetRawText"),
    (Operation::TextRaw, Flavor::Html, "/html/HTMLGetRawText"),
    (Operation::Title, Flavor::Url, "/url/URLGetTitle"),
    (Operation::Title, Flavor::Html, "/html/HTMLGetTitle"),
    (Operation::Feeds, Flavor::Url, "/url/URLGetFeedLinks"),
    (Operation::Feeds, Flavor::Html, "/html/HTMLGetFeedLinks"),
    (Operation::Microformats, Flavor::Url, "/url/URLGetMicroformatData"),
    (Operation::Microformats, Flavor::Html, "/html/HTMLGetMicroformatData"),
    (Operation::Combined, Flavor::Url, "/url/URLGetCombinedData"),
    (Operation::Combined, Flavor::Text, "/text/TextGetCombinedData"),
    (Operation::ImageExtraction, Flavor::Url, "/url/URLGetImage"),
    (Operation::ImageKeywords, Flavor::Url, "/url/URLGetRankedImageKeywords"),
    (Operation::ImageKeywords, Flavor::Image, "/image/ImageGetRankedImageKeywords"),
    (Operation::Taxonomy, Flavor::Url, "/url/URLGetRankedTaxonomy"),
    (Operation::Taxonomy, Flavor::Text, "/text/TextGetRankedTaxonomy"),
    (Operation::Taxonomy, Flavor::Html, "/html/HTMLGetRankedTaxonomy"),
];

/// Look up the path fragment registered for an (operation, flavor) pair.
pub fn path(operation: Operation, flavor: Flavor) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(op, fl, _)| *op == operation && *fl == flavor)
        .map(|(_, _, path)| *path)
}
