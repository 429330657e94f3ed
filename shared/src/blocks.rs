//! Custom structured blocks embedded in documents as `block` nodes.
//!
//! The editor stores each block as a loose field bag keyed by `blockType`.
//! [`Block::parse`] picks the variant and decodes the bag; a bag that does not
//! decode is reported as [`Block::Malformed`] instead of failing the whole
//! document.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

use crate::{
    content::{plain_text, RichText},
    de::null_as_default,
    model::{Media, Relation},
};

/// A decoded custom block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Uploaded image with caption.
    Image(ImageBlock),
    /// Highlighted note.
    Callout(CalloutBlock),
    /// Data table.
    Table(TableBlock),
    /// Expandable sections.
    Accordion(AccordionBlock),
    /// Pull quote with attribution.
    Quote(QuoteBlock),
    /// Embedded or uploaded video.
    Video(VideoBlock),
    /// `blockType` the renderer has no view for.
    Unknown(String),
    /// Known `blockType` whose fields failed to decode.
    Malformed {
        /// The `blockType` that was requested.
        block_type: String,
        /// Decoder error message.
        reason: String,
    },
}

impl Block {
    /// Decode a block node's field bag.
    pub fn parse(fields: &Value) -> Block {
        let block_type = fields
            .get("blockType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        fn decode<T: DeserializeOwned>(
            fields: &Value,
            block_type: &str,
            wrap: fn(T) -> Block,
        ) -> Block {
            match T::deserialize(fields) {
                Ok(block) => wrap(block),
                Err(err) => Block::Malformed {
                    block_type: block_type.to_string(),
                    reason: err.to_string(),
                },
            }
        }

        match block_type.as_str() {
            "image" => decode(fields, &block_type, Block::Image),
            "callout" => decode(fields, &block_type, Block::Callout),
            "table" => decode(fields, &block_type, Block::Table),
            "accordion" => decode(fields, &block_type, Block::Accordion),
            "quote" | "blockQuote" => decode(fields, &block_type, Block::Quote),
            "video" | "embed" => decode(fields, &block_type, Block::Video),
            _ => Block::Unknown(block_type),
        }
    }
}

/// Field that editors fill either as plain text or as nested rich text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BlockText {
    /// Text typed into a plain field.
    Plain(String),
    /// Nested document.
    Rich(RichText),
}

impl BlockText {
    /// Flattened text, used where markup is not allowed.
    pub fn to_plain(&self) -> String {
        match self {
            BlockText::Plain(text) => text.clone(),
            BlockText::Rich(doc) => doc
                .children()
                .iter()
                .map(plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// True when there is nothing to show.
    pub fn is_blank(&self) -> bool {
        match self {
            BlockText::Plain(text) => text.trim().is_empty(),
            BlockText::Rich(doc) => doc.is_empty(),
        }
    }
}

/// Fields of an `image` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageBlock {
    /// The upload.
    #[serde(default)]
    pub image: Option<Relation<Media>>,
    /// Caption under the image.
    #[serde(default)]
    pub caption: Option<String>,
    /// Alt text typed on the block.
    #[serde(default)]
    pub alt: Option<String>,
    /// Layout position; `center` centers the figure.
    #[serde(default)]
    pub position: Option<String>,
}

impl ImageBlock {
    /// The uploaded image, when populated with a usable URL.
    pub fn media(&self) -> Option<&Media> {
        self.image
            .as_ref()
            .and_then(Relation::populated)
            .filter(|media| !media.url.trim().is_empty())
    }

    /// Non-blank caption.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// First non-blank of the media alt, the block alt and the caption.
    pub fn alt_text(&self) -> String {
        let from_media = self.media().and_then(|m| m.alt.as_deref());
        [from_media, self.alt.as_deref(), self.caption()]
            .into_iter()
            .flatten()
            .find(|alt| !alt.trim().is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// True for centered figures.
    pub fn is_centered(&self) -> bool {
        self.position.as_deref() == Some("center")
    }
}

/// Tone of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    /// Neutral information; the default.
    Info,
    /// Caution.
    Warning,
    /// Something that breaks.
    Error,
    /// Positive outcome.
    Success,
}

impl CalloutKind {
    /// Tone for a stored `type`; unknown values are `Info`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("warning") => Self::Warning,
            Some("error") => Self::Error,
            Some("success") => Self::Success,
            _ => Self::Info,
        }
    }

    /// Tailwind classes of the callout box.
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "bg-blue-50 border-blue-500 text-blue-900",
            Self::Warning => "bg-yellow-50 border-yellow-500 text-yellow-900",
            Self::Error => "bg-red-50 border-red-500 text-red-900",
            Self::Success => "bg-green-50 border-green-500 text-green-900",
        }
    }
}

/// Fields of a `callout` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalloutBlock {
    /// Stored tone, see [`CalloutKind::parse`].
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Bold heading line.
    #[serde(default)]
    pub title: Option<String>,
    /// Body text.
    #[serde(default)]
    pub content: Option<BlockText>,
}

impl CalloutBlock {
    /// Parsed tone.
    pub fn kind(&self) -> CalloutKind {
        CalloutKind::parse(self.kind.as_deref())
    }

    /// Non-blank title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Scalar cell value rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellText(pub String);

impl<'de> Deserialize<'de> for CellText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(text) => text,
            other => other.to_string(),
        };
        Ok(CellText(text))
    }
}

/// Table header, stored bare or as `{ header }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HeaderCell {
    /// `{ "header": ... }` object.
    Labeled {
        /// Header text.
        header: CellText,
    },
    /// Bare value.
    Plain(CellText),
}

/// Cell of a structured row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableCell {
    /// Editor-assigned id.
    #[serde(default)]
    pub id: Option<CellText>,
    /// Cell value.
    #[serde(default)]
    pub content: CellText,
}

/// Table row, stored as a bare list of values or as `{ id, cells }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableRow {
    /// Bare list of values.
    Cells(Vec<CellText>),
    /// Row object from the array field editor.
    Structured {
        /// Editor-assigned id, used as the row key.
        #[serde(default)]
        id: Option<CellText>,
        /// Cells in column order.
        #[serde(default, deserialize_with = "null_as_default")]
        cells: Vec<TableCell>,
    },
}

/// Table row flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable key when the row has an id.
    pub key: Option<String>,
    /// Cell texts in column order.
    pub cells: Vec<String>,
}

/// Fields of a `table` block. Unset checkboxes and lists may arrive as
/// `null`; they read as off and empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableBlock {
    /// Column headers; none renders no header row.
    #[serde(default)]
    pub headers: Option<Vec<HeaderCell>>,
    /// Body rows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<TableRow>,
    /// Draw cell borders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bordered: bool,
    /// Shade every other row.
    #[serde(default, deserialize_with = "null_as_default")]
    pub striped: bool,
}

impl TableBlock {
    /// Header texts.
    pub fn headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .flatten()
            .map(|cell| match cell {
                HeaderCell::Plain(text) => text.0.clone(),
                HeaderCell::Labeled {
                    header,
                } => header.0.clone(),
            })
            .collect()
    }

    /// Rows flattened to display strings.
    pub fn rows(&self) -> Vec<RowView> {
        self.rows
            .iter()
            .map(|row| match row {
                TableRow::Cells(cells) => RowView {
                    key: None,
                    cells: cells.iter().map(|c| c.0.clone()).collect(),
                },
                TableRow::Structured {
                    id,
                    cells,
                } => RowView {
                    key: id.as_ref().map(|id| id.0.clone()),
                    cells: cells.iter().map(|c| c.content.0.clone()).collect(),
                },
            })
            .collect()
    }

    /// Striping applies to odd (second, fourth, ...) rows.
    pub fn is_striped_row(&self, index: usize) -> bool {
        self.striped && index % 2 == 1
    }
}

/// One expandable section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccordionItem {
    /// Button label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Revealed content.
    #[serde(default)]
    pub content: Option<BlockText>,
}

/// Fields of an `accordion` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccordionBlock {
    /// Sections in order; `null` reads as none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<AccordionItem>,
}

/// Index of the open accordion item after clicking `clicked`.
pub fn toggle_accordion(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Fields of a `quote` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBlock {
    /// Quoted text.
    #[serde(default)]
    pub quote: Option<BlockText>,
    /// Person quoted.
    #[serde(default)]
    pub author: Option<String>,
    /// Their role or company.
    #[serde(default, alias = "role")]
    pub author_title: Option<String>,
}

impl QuoteBlock {
    /// Attribution line, e.g. `Ada Lovelace, Analyst`.
    pub fn attribution(&self) -> Option<String> {
        let author = self.author.as_deref().filter(|a| !a.trim().is_empty())?;
        match self.author_title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => Some(format!("{author}, {title}")),
            None => Some(author.to_string()),
        }
    }
}

/// Fields of a `video` or `embed` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    /// Uploaded video file.
    #[serde(default)]
    pub video: Option<Relation<Media>>,
    /// External video URL; wins over the upload.
    #[serde(default)]
    pub url: Option<String>,
    /// Caption under the player.
    #[serde(default)]
    pub caption: Option<String>,
    /// Poster frame for uploaded files.
    #[serde(default)]
    pub poster: Option<Relation<Media>>,
    /// Provider hint stored by the editor.
    #[serde(default)]
    pub embed_type: Option<String>,
}

/// Where a video block's player points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Third-party player loaded in an iframe.
    Embed(String),
    /// File played by the native `<video>` element.
    File(String),
}

impl VideoBlock {
    /// Player source: an embed for known hosts, otherwise the file itself.
    pub fn source(&self) -> Option<VideoSource> {
        let raw = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.video
                    .as_ref()
                    .and_then(Relation::populated)
                    .map(|media| media.url.as_str())
            })?;
        Some(match video_embed_url(raw) {
            Some(embed) => VideoSource::Embed(embed),
            None => VideoSource::File(raw.to_string()),
        })
    }

    /// URL of the populated poster image.
    pub fn poster_url(&self) -> Option<&str> {
        self.poster
            .as_ref()
            .and_then(Relation::populated)
            .map(|media| media.url.as_str())
    }

    /// Non-blank caption.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Player URL for YouTube and Vimeo links; `None` for anything else.
pub fn video_embed_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let mut segments = url.path_segments().map(|s| s.filter(|p| !p.is_empty()).collect::<Vec<_>>())?;

    match host {
        "youtube.com" | "youtube-nocookie.com" => {
            let id = match segments.as_slice() {
                ["watch"] => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                ["embed", id, ..] | ["shorts", id, ..] | ["live", id, ..] => Some(id.to_string()),
                _ => None,
            }?;
            Some(format!("https://www.youtube.com/embed/{id}"))
        },
        "youtu.be" => {
            let id = segments.first()?;
            Some(format!("https://www.youtube.com/embed/{id}"))
        },
        "vimeo.com" => {
            segments.retain(|segment| segment.chars().all(|c| c.is_ascii_digit()));
            let id = segments.first()?;
            Some(format!("https://player.vimeo.com/video/{id}"))
        },
        "player.vimeo.com" => match segments.as_slice() {
            ["video", id, ..] => Some(format!("https://player.vimeo.com/video/{id}")),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_block_type_is_reported_by_name() {
        let block = Block::parse(&json!({ "blockType": "pricingTable", "plans": [] }));
        assert_eq!(block, Block::Unknown("pricingTable".to_string()));
    }

    #[test]
    fn malformed_known_block_does_not_panic() {
        let block = Block::parse(&json!({ "blockType": "table", "rows": "not-a-list" }));
        assert!(matches!(block, Block::Malformed { ref block_type, .. } if block_type == "table"));
    }

    #[test]
    fn image_block_requires_populated_media() {
        let Block::Image(block) = Block::parse(&json!({
            "blockType": "image",
            "image": "6650c0ffee",
            "caption": "Pipeline view"
        })) else {
            panic!("expected image block");
        };
        assert!(block.media().is_none());

        let Block::Image(block) = Block::parse(&json!({
            "blockType": "image",
            "image": { "id": 5, "url": "/media/pipeline.png", "filename": "pipeline.png" },
            "caption": "Pipeline view",
            "position": "center"
        })) else {
            panic!("expected image block");
        };
        assert_eq!(block.media().map(|m| m.url.as_str()), Some("/media/pipeline.png"));
        assert_eq!(block.alt_text(), "Pipeline view");
        assert!(block.is_centered());
    }

    #[test]
    fn callout_kind_defaults_to_info() {
        let Block::Callout(block) = Block::parse(&json!({
            "blockType": "callout",
            "type": "danger",
            "title": "",
            "content": "Back up first."
        })) else {
            panic!("expected callout block");
        };
        assert_eq!(block.kind(), CalloutKind::Info);
        assert_eq!(block.title(), None);
        assert_eq!(block.content.map(|c| c.to_plain()), Some("Back up first.".to_string()));
    }

    #[test]
    fn table_accepts_both_header_and_row_shapes() {
        let Block::Table(table) = Block::parse(&json!({
            "blockType": "table",
            "headers": ["Field", { "header": "Type" }],
            "rows": [
                ["name", "text"],
                { "id": "r2", "cells": [ { "id": "c1", "content": "seats" }, { "id": "c2", "content": 12 } ] }
            ],
            "striped": true
        })) else {
            panic!("expected table block");
        };
        assert_eq!(table.headers(), vec!["Field", "Type"]);
        let rows = table.rows();
        assert_eq!(rows[0].cells, vec!["name", "text"]);
        assert_eq!(rows[1].key.as_deref(), Some("r2"));
        assert_eq!(rows[1].cells, vec!["seats", "12"]);
        assert!(!table.is_striped_row(0));
        assert!(table.is_striped_row(1));
    }

    #[test]
    fn table_with_null_flags_still_renders() {
        let Block::Table(table) = Block::parse(&json!({
            "blockType": "table",
            "headers": ["A"],
            "rows": [["1"], { "id": "r2", "cells": null }],
            "bordered": null,
            "striped": null
        })) else {
            panic!("expected table block");
        };
        assert!(!table.bordered);
        assert!(!table.is_striped_row(1));
        assert_eq!(table.rows()[0].cells, vec!["1"]);
        assert!(table.rows()[1].cells.is_empty());

        let Block::Table(table) = Block::parse(&json!({ "blockType": "table", "rows": null })) else {
            panic!("expected table block");
        };
        assert!(table.rows().is_empty());
        assert!(table.headers().is_empty());
    }

    #[test]
    fn accordion_with_null_items_is_empty() {
        let Block::Accordion(block) = Block::parse(&json!({ "blockType": "accordion", "items": null }))
        else {
            panic!("expected accordion block");
        };
        assert!(block.items.is_empty());

        let Block::Accordion(block) = Block::parse(&json!({
            "blockType": "accordion",
            "items": [{ "title": null, "content": "Body" }]
        })) else {
            panic!("expected accordion block");
        };
        assert_eq!(block.items[0].title, "");
    }

    #[test]
    fn accordion_toggles_single_open_item() {
        assert_eq!(toggle_accordion(None, 2), Some(2));
        assert_eq!(toggle_accordion(Some(2), 2), None);
        assert_eq!(toggle_accordion(Some(1), 2), Some(2));
    }

    #[test]
    fn accordion_content_may_be_rich_text() {
        let Block::Accordion(block) = Block::parse(&json!({
            "blockType": "accordion",
            "items": [
                { "title": "Plain", "content": "Just text" },
                { "title": "Rich", "content": { "root": { "children": [
                    { "type": "paragraph", "children": [ { "type": "text", "text": "Nested" } ] }
                ] } } }
            ]
        })) else {
            panic!("expected accordion block");
        };
        assert!(matches!(block.items[0].content, Some(BlockText::Plain(_))));
        assert!(matches!(block.items[1].content, Some(BlockText::Rich(_))));
        assert_eq!(block.items[1].content.as_ref().map(BlockText::to_plain), Some("Nested".into()));
    }

    #[test]
    fn quote_block_alias_and_attribution() {
        let Block::Quote(block) = Block::parse(&json!({
            "blockType": "blockQuote",
            "quote": "Ship small.",
            "author": "Sam",
            "authorTitle": "CTO"
        })) else {
            panic!("expected quote block");
        };
        assert_eq!(block.attribution().as_deref(), Some("Sam, CTO"));

        let quote = QuoteBlock {
            quote: None,
            author: None,
            author_title: Some("CTO".into()),
        };
        assert_eq!(quote.attribution(), None);
    }

    #[test]
    fn embed_urls_for_known_hosts() {
        assert_eq!(
            video_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            video_embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            video_embed_url("https://vimeo.com/channels/staff/76979871").as_deref(),
            Some("https://player.vimeo.com/video/76979871")
        );
        assert_eq!(video_embed_url("https://cdn.example.com/demo.mp4"), None);
        assert_eq!(video_embed_url("/media/demo.mp4"), None);
    }

    #[test]
    fn video_block_prefers_url_over_media() {
        let Block::Video(block) = Block::parse(&json!({
            "blockType": "video",
            "video": { "id": 1, "url": "/media/demo.mp4", "filename": "demo.mp4" },
            "caption": "Demo"
        })) else {
            panic!("expected video block");
        };
        assert_eq!(block.source(), Some(VideoSource::File("/media/demo.mp4".into())));

        let Block::Video(block) = Block::parse(&json!({
            "blockType": "embed",
            "url": "https://youtu.be/abc123",
            "embedType": "youtube"
        })) else {
            panic!("expected video block");
        };
        assert_eq!(
            block.source(),
            Some(VideoSource::Embed("https://www.youtube.com/embed/abc123".into()))
        );
    }
}
