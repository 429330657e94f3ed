//! Rich-text document tree produced by the CMS's block editor.
//!
//! A document is a root with an ordered list of typed nodes. Element nodes
//! (paragraphs, headings, lists, quotes, links) nest other nodes; text nodes
//! carry formatting as a bit set plus an optional color/size state; `block`
//! nodes carry a field bag for custom structured blocks (see
//! [`crate::blocks`]). Node types the renderer does not know deserialize to
//! [`Node::Unknown`] and render as nothing.

use bitflags::bitflags;
use serde::Deserialize;

use crate::{blocks::Block, de::null_as_default};

/// Words per minute assumed by [`reading_time_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// A stored document. `null` or a missing root reads as an empty document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichText {
    /// Top-level container of the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub root: Root,
}

impl RichText {
    /// Top-level nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.root.children
    }

    /// True when the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

/// Root element of a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Root {
    /// Top-level nodes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
    /// Text direction (`ltr`/`rtl`) the editor recorded.
    #[serde(default)]
    pub direction: Option<String>,
    /// Root indentation level; always zero in practice.
    #[serde(default, deserialize_with = "null_as_default")]
    pub indent: u32,
}

/// One node of the document tree, dispatched on its `type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Paragraph of inline content.
    Paragraph(ElementNode),
    /// `h1`..`h6` heading.
    Heading(HeadingNode),
    /// Bullet, numbered or check list.
    List(ListNode),
    /// Item of a [`Node::List`].
    ListItem(ListItemNode),
    /// Block quotation written inline in the editor.
    Quote(ElementNode),
    /// Code block; its text lives in the children.
    Code(CodeNode),
    /// Run of formatted text.
    Text(TextNode),
    /// Token of a code block as split by the editor's highlighter.
    #[serde(rename = "code-highlight")]
    CodeHighlight(TextNode),
    /// Hard line break.
    LineBreak,
    /// Tab character.
    Tab,
    /// Hyperlink around inline content.
    #[serde(alias = "autolink")]
    Link(LinkNode),
    /// Thematic break.
    HorizontalRule,
    /// Custom structured block, see [`crate::blocks`].
    Block(BlockNode),
    /// Any node type without a renderer.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Child nodes of element nodes; empty for leaves and blocks.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(node) | Node::Quote(node) => &node.children,
            Node::Heading(node) => &node.children,
            Node::List(node) => &node.children,
            Node::ListItem(node) => &node.children,
            Node::Code(node) => &node.children,
            Node::Link(node) => &node.children,
            _ => &[],
        }
    }

    /// Text carried by the node itself, for text and code tokens.
    pub fn text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) | Node::CodeHighlight(text) => Some(text),
            _ => None,
        }
    }
}

/// Element with inline children and an indentation level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElementNode {
    /// Inline content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
    /// Indentation steps applied by the editor.
    #[serde(default, deserialize_with = "null_as_default")]
    pub indent: u32,
}

/// Heading element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeadingNode {
    /// HTML tag name, `h1`..`h6`.
    #[serde(default)]
    pub tag: Option<String>,
    /// Inline content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl HeadingNode {
    /// Level parsed from the tag.
    pub fn level(&self) -> HeadingLevel {
        HeadingLevel::parse(self.tag.as_deref())
    }
}

/// `h1`..`h6`; anything else renders as `h2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `h1`
    H1,
    /// `h2`
    H2,
    /// `h3`
    H3,
    /// `h4`
    H4,
    /// `h5`
    H5,
    /// `h6`
    H6,
}

impl HeadingLevel {
    /// Level for a stored tag name; unknown or missing tags give `h2`.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("h1") => Self::H1,
            Some("h3") => Self::H3,
            Some("h4") => Self::H4,
            Some("h5") => Self::H5,
            Some("h6") => Self::H6,
            _ => Self::H2,
        }
    }

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Numeric level, 1 to 6.
    pub fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// List element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNode {
    /// `ul` or `ol`.
    #[serde(default)]
    pub tag: Option<String>,
    /// `bullet`, `number` or `check`.
    #[serde(default)]
    pub list_type: Option<String>,
    /// First number of an ordered list.
    #[serde(default)]
    pub start: Option<u32>,
    /// Indentation steps.
    #[serde(default, deserialize_with = "null_as_default")]
    pub indent: u32,
    /// Items, and nested lists wrapped in items.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

/// How list markers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list.
    Bullet,
    /// Ordered list.
    Number,
    /// List of checkboxes.
    Check,
}

impl ListNode {
    /// Marker style: `listType` first, then the tag, then bullets.
    pub fn kind(&self) -> ListKind {
        match self.list_type.as_deref() {
            Some("check") => ListKind::Check,
            Some("number") => ListKind::Number,
            Some("bullet") => ListKind::Bullet,
            _ if self.tag.as_deref() == Some("ol") => ListKind::Number,
            _ => ListKind::Bullet,
        }
    }

    /// True for numbered lists.
    pub fn is_ordered(&self) -> bool {
        self.kind() == ListKind::Number
    }
}

/// List item element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListItemNode {
    /// Position within an ordered list.
    #[serde(default)]
    pub value: Option<u32>,
    /// Checkbox state inside check lists.
    #[serde(default)]
    pub checked: Option<bool>,
    /// Indentation steps.
    #[serde(default, deserialize_with = "null_as_default")]
    pub indent: u32,
    /// Item content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

/// Code block element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeNode {
    /// Language picked in the editor.
    #[serde(default)]
    pub language: Option<String>,
    /// Text, highlight tokens and line breaks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl CodeNode {
    /// Source text of the block; line breaks become newlines.
    pub fn code(&self) -> String {
        self.children.iter().map(plain_text).collect()
    }

    /// Trimmed language name, `text` when unset.
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or("text")
    }

    /// Grammar name the Prism highlighter knows the language by. Editor
    /// shorthands map to Prism ids; plain text maps to `none`.
    pub fn grammar(&self) -> String {
        let language = self.language().to_ascii_lowercase();
        let grammar = match language.as_str() {
            "text" | "plain" | "plaintext" | "txt" => "none",
            "js" | "jsx" => "javascript",
            "ts" | "tsx" => "typescript",
            "html" | "xml" | "svg" => "markup",
            "md" => "markdown",
            "py" => "python",
            "sh" | "shell" | "zsh" => "bash",
            "yml" => "yaml",
            "c++" => "cpp",
            "objective-c" => "objc",
            _ => return language,
        };
        grammar.to_string()
    }
}

bitflags! {
    /// Inline formatting bits as stored on text nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextFormat: u32 {
        /// Bold.
        const BOLD = 1;
        /// Italic.
        const ITALIC = 1 << 1;
        /// Strikethrough.
        const STRIKETHROUGH = 1 << 2;
        /// Underline.
        const UNDERLINE = 1 << 3;
        /// Inline code.
        const CODE = 1 << 4;
        /// Subscript.
        const SUBSCRIPT = 1 << 5;
        /// Superscript.
        const SUPERSCRIPT = 1 << 6;
        /// Highlighter pen.
        const HIGHLIGHT = 1 << 7;
    }
}

/// Element wrapped around formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWrapper {
    /// `<code>`
    Code,
    /// `<strong>`
    Bold,
    /// `<em>`
    Italic,
    /// `<u>`
    Underline,
    /// `<s>`
    Strikethrough,
    /// `<sub>`
    Subscript,
    /// `<sup>`
    Superscript,
    /// `<mark>`
    Highlight,
}

const WRAP_ORDER: [(TextFormat, FormatWrapper); 8] = [
    (TextFormat::CODE, FormatWrapper::Code),
    (TextFormat::BOLD, FormatWrapper::Bold),
    (TextFormat::ITALIC, FormatWrapper::Italic),
    (TextFormat::UNDERLINE, FormatWrapper::Underline),
    (TextFormat::STRIKETHROUGH, FormatWrapper::Strikethrough),
    (TextFormat::SUBSCRIPT, FormatWrapper::Subscript),
    (TextFormat::SUPERSCRIPT, FormatWrapper::Superscript),
    (TextFormat::HIGHLIGHT, FormatWrapper::Highlight),
];

impl TextFormat {
    /// Wrappers to apply, innermost first.
    pub fn wrappers(self) -> impl Iterator<Item = FormatWrapper> {
        WRAP_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, wrapper)| wrapper)
    }
}

impl FormatWrapper {
    /// HTML element for the wrapper.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Underline => "u",
            Self::Strikethrough => "s",
            Self::Subscript => "sub",
            Self::Superscript => "sup",
            Self::Highlight => "mark",
        }
    }

    /// Tailwind classes for the wrapper.
    pub fn class(self) -> &'static str {
        match self {
            Self::Code => "font-mono text-sm bg-gray-100 px-1 rounded",
            Self::Bold => "font-bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "line-through",
            Self::Subscript | Self::Superscript => "text-xs",
            Self::Highlight => "bg-yellow-100 rounded px-0.5",
        }
    }
}

/// Color/background/size picked in the editor's text-state menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextState {
    /// Key into the text color table.
    #[serde(default)]
    pub color: Option<String>,
    /// Key into the background color table.
    #[serde(default)]
    pub background: Option<String>,
    /// Key into the font size table.
    #[serde(default)]
    pub font_size: Option<String>,
}

/// Formatted text leaf.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextNode {
    /// The text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Raw [`TextFormat`] bits.
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: u32,
    /// Editor text state.
    #[serde(default)]
    pub state: Option<TextState>,
}

impl TextNode {
    /// Known formatting bits; unknown bits are dropped.
    pub fn format(&self) -> TextFormat {
        TextFormat::from_bits_truncate(self.format)
    }
}

/// Link target stored by newer editor versions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFields {
    /// Destination URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Open in a new tab.
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_tab: bool,
}

/// Link element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkNode {
    /// Destination URL.
    #[serde(default)]
    pub url: Option<String>,
    /// `rel` attribute.
    #[serde(default)]
    pub rel: Option<String>,
    /// `target` attribute.
    #[serde(default)]
    pub target: Option<String>,
    /// `title` attribute.
    #[serde(default)]
    pub title: Option<String>,
    /// Newer editor versions keep the link target here instead.
    #[serde(default)]
    pub fields: Option<LinkFields>,
    /// Link text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl LinkNode {
    /// Non-blank destination from either storage location.
    pub fn href(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or_else(|| self.fields.as_ref().and_then(|f| f.url.as_deref()))
            .filter(|url| !url.trim().is_empty())
    }

    /// Explicit target, else `_blank` for new-tab links, else `_self`.
    pub fn target(&self) -> &str {
        if let Some(target) = self.target.as_deref().filter(|t| !t.is_empty()) {
            return target;
        }
        if self.fields.as_ref().is_some_and(|f| f.new_tab) {
            "_blank"
        } else {
            "_self"
        }
    }

    /// `rel`, hardened for links opening a new tab.
    pub fn rel(&self) -> Option<String> {
        match (self.rel.as_deref().filter(|r| !r.is_empty()), self.target()) {
            (Some(rel), _) => Some(rel.to_string()),
            (None, "_blank") => Some("noopener noreferrer".to_string()),
            (None, _) => None,
        }
    }
}

/// Custom block node; the fields are decoded lazily by [`Block::parse`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockNode {
    /// Raw field bag keyed by `blockType`.
    #[serde(default)]
    pub fields: serde_json::Value,
}

impl BlockNode {
    /// Decoded block.
    pub fn block(&self) -> Block {
        Block::parse(&self.fields)
    }
}

/// Concatenated text of a node and its descendants.
pub fn plain_text(node: &Node) -> String {
    let mut out = String::new();
    push_plain_text(node, &mut out);
    out
}

fn push_plain_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) | Node::CodeHighlight(text) => out.push_str(&text.text),
        Node::LineBreak => out.push('\n'),
        Node::Tab => out.push('\t'),
        other => {
            for child in other.children() {
                push_plain_text(child, out);
            }
        },
    }
}

/// Whitespace-separated words across all text nodes, code included; blocks
/// are skipped.
pub fn word_count(doc: &RichText) -> usize {
    fn count(node: &Node) -> usize {
        match node.text() {
            Some(text) => text.text.split_whitespace().count(),
            None => node.children().iter().map(count).sum(),
        }
    }
    doc.children().iter().map(count).sum()
}

/// Estimated minutes to read, never less than one.
pub fn reading_time_minutes(doc: &RichText) -> usize {
    word_count(doc).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// DOM id of the `index`-th heading in document order.
pub fn heading_anchor(index: usize) -> String {
    format!("heading-{index}")
}

/// Entry of the "On this page" navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Anchor id of the heading.
    pub id: String,
    /// Heading text with whitespace collapsed.
    pub text: String,
    /// Heading level, 1 to 6.
    pub level: u8,
}

/// Headings of the document in pre-order, numbered the way the renderer
/// numbers their anchors.
pub fn outline(doc: &RichText) -> Vec<OutlineEntry> {
    fn walk(node: &Node, out: &mut Vec<OutlineEntry>) {
        if let Node::Heading(heading) = node {
            let text = heading
                .children
                .iter()
                .map(plain_text)
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            out.push(OutlineEntry {
                id: heading_anchor(out.len()),
                text,
                level: heading.level().number(),
            });
        }
        for child in node.children() {
            walk(child, out);
        }
    }

    let mut entries = Vec::new();
    for node in doc.children() {
        walk(node, &mut entries);
    }
    entries
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(children: serde_json::Value) -> RichText {
        serde_json::from_value(json!({
            "root": { "type": "root", "children": children, "direction": "ltr", "format": "", "indent": 0, "version": 1 }
        }))
        .expect("document should decode")
    }

    fn text(value: &str) -> serde_json::Value {
        json!({ "type": "text", "text": value, "format": 0, "version": 1 })
    }

    #[test]
    fn missing_root_is_empty() {
        let empty: RichText = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn dispatches_known_node_types() {
        let tree = doc(json!([
            { "type": "paragraph", "children": [text("Hello"), { "type": "linebreak", "version": 1 }] },
            { "type": "heading", "tag": "h3", "children": [text("Setup")] },
            { "type": "list", "listType": "number", "tag": "ol", "children": [
                { "type": "listitem", "value": 1, "children": [text("one")] }
            ] },
            { "type": "autolink", "url": "https://attio.com", "children": [text("attio")] },
            { "type": "horizontalrule", "version": 1 },
            { "type": "block", "fields": { "blockType": "callout", "content": "Heads up" } }
        ]));
        let children = tree.children();
        assert!(matches!(children[0], Node::Paragraph(_)));
        assert!(matches!(&children[1], Node::Heading(h) if h.level() == HeadingLevel::H3));
        assert!(matches!(&children[2], Node::List(l) if l.is_ordered()));
        assert!(matches!(&children[3], Node::Link(l) if l.href() == Some("https://attio.com")));
        assert!(matches!(children[4], Node::HorizontalRule));
        assert!(matches!(children[5], Node::Block(_)));
    }

    #[test]
    fn unknown_node_types_are_kept_as_unknown() {
        let tree = doc(json!([
            { "type": "upload", "value": { "id": 1 }, "relationTo": "media" },
            { "type": "paragraph", "children": [] }
        ]));
        assert_eq!(tree.children()[0], Node::Unknown);
        assert!(matches!(tree.children()[1], Node::Paragraph(_)));
    }

    #[test]
    fn format_bits_map_to_wrappers_in_fixed_order() {
        let format = TextFormat::from_bits_truncate(1 | 2 | 16 | 64);
        let wrappers: Vec<_> = format.wrappers().collect();
        assert_eq!(
            wrappers,
            vec![
                FormatWrapper::Code,
                FormatWrapper::Bold,
                FormatWrapper::Italic,
                FormatWrapper::Superscript
            ]
        );
        assert_eq!(TextFormat::empty().wrappers().count(), 0);
    }

    #[test]
    fn unknown_format_bits_are_dropped() {
        let node: TextNode = serde_json::from_value(json!({ "text": "x", "format": 513 })).unwrap();
        assert_eq!(node.format(), TextFormat::BOLD);
    }

    #[test]
    fn heading_level_defaults_to_h2() {
        assert_eq!(HeadingLevel::parse(None), HeadingLevel::H2);
        assert_eq!(HeadingLevel::parse(Some("h7")), HeadingLevel::H2);
        assert_eq!(HeadingLevel::parse(Some("h1")).tag(), "h1");
    }

    #[test]
    fn list_kind_falls_back_to_tag() {
        let list: ListNode = serde_json::from_value(json!({ "tag": "ol" })).unwrap();
        assert_eq!(list.kind(), ListKind::Number);
        let list: ListNode = serde_json::from_value(json!({ "listType": "check", "tag": "ul" })).unwrap();
        assert_eq!(list.kind(), ListKind::Check);
        let list: ListNode = serde_json::from_value(json!({})).unwrap();
        assert_eq!(list.kind(), ListKind::Bullet);
    }

    #[test]
    fn link_reads_payload_fields() {
        let link: LinkNode = serde_json::from_value(json!({
            "fields": { "url": "https://example.com", "newTab": true, "linkType": "custom" }
        }))
        .unwrap();
        assert_eq!(link.href(), Some("https://example.com"));
        assert_eq!(link.target(), "_blank");
        assert_eq!(link.rel().as_deref(), Some("noopener noreferrer"));

        let link: LinkNode = serde_json::from_value(json!({ "url": "/docs" })).unwrap();
        assert_eq!(link.target(), "_self");
        assert_eq!(link.rel(), None);
    }

    #[test]
    fn code_node_joins_text_children() {
        let tree = doc(json!([
            { "type": "code", "language": "rust", "children": [
                text("fn main() {"), { "type": "linebreak" }, text("}")
            ] }
        ]));
        let Node::Code(code) = &tree.children()[0] else {
            panic!("expected code node");
        };
        assert_eq!(code.code(), "fn main() {\n}");
        assert_eq!(code.language(), "rust");
        assert_eq!(code.grammar(), "rust");
    }

    #[test]
    fn code_grammar_maps_editor_shorthands() {
        let grammar = |language: Option<&str>| {
            CodeNode {
                language: language.map(str::to_string),
                children: Vec::new(),
            }
            .grammar()
        };
        assert_eq!(grammar(Some("js")), "javascript");
        assert_eq!(grammar(Some("HTML")), "markup");
        assert_eq!(grammar(Some("py")), "python");
        assert_eq!(grammar(Some(" sql ")), "sql");
        assert_eq!(grammar(None), "none");
    }

    #[test]
    fn code_highlight_tokens_carry_the_code() {
        let tree = doc(json!([
            { "type": "code", "language": "javascript", "children": [
                { "type": "code-highlight", "text": "const", "highlightType": "keyword" },
                { "type": "code-highlight", "text": " x = 1;" },
                { "type": "linebreak" },
                { "type": "code-highlight", "text": "x++;" }
            ] }
        ]));
        let Node::Code(code) = &tree.children()[0] else {
            panic!("expected code node");
        };
        assert_eq!(code.code(), "const x = 1;\nx++;");
        assert_eq!(word_count(&tree), 5);
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let tree: RichText = serde_json::from_value(json!({ "root": null })).unwrap();
        assert!(tree.is_empty());

        let tree = doc(json!([
            { "type": "paragraph", "indent": null, "children": [
                { "type": "text", "text": "kept", "format": null }
            ] },
            { "type": "list", "listType": "bullet", "children": null }
        ]));
        assert_eq!(plain_text(&tree.children()[0]), "kept");
        assert!(tree.children()[1].children().is_empty());
    }

    #[test]
    fn reading_time_rounds_up_with_minimum() {
        let short = doc(json!([{ "type": "paragraph", "children": [text("just a few words")] }]));
        assert_eq!(word_count(&short), 4);
        assert_eq!(reading_time_minutes(&short), 1);

        let long_text = vec!["word"; 401].join(" ");
        let long = doc(json!([{ "type": "paragraph", "children": [text(&long_text)] }]));
        assert_eq!(reading_time_minutes(&long), 3);

        assert_eq!(reading_time_minutes(&RichText::default()), 1);
    }

    #[test]
    fn outline_numbers_headings_in_document_order() {
        let tree = doc(json!([
            { "type": "heading", "tag": "h2", "children": [text("Why "), { "type": "text", "text": "migrate", "format": 1 }] },
            { "type": "paragraph", "children": [text("body")] },
            { "type": "heading", "tag": "h3", "children": [text("  Plan  ")] }
        ]));
        let entries = outline(&tree);
        assert_eq!(
            entries,
            vec![
                OutlineEntry { id: "heading-0".into(), text: "Why migrate".into(), level: 2 },
                OutlineEntry { id: "heading-1".into(), text: "Plan".into(), level: 3 },
            ]
        );
    }
}
