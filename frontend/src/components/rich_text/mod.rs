//! Rendering of stored rich-text documents.
//!
//! [`Renderer`] walks the node tree and emits Yew markup. Headings of the
//! article body receive the `heading-{n}` anchors that
//! [`guides_shared::content::outline`] hands to the page navigation, so both
//! must visit headings in the same pre-order.

mod blocks;
mod code;
mod text;

use guides_shared::{
    content::{heading_anchor, ListKind, ListItemNode, ListNode, Node},
    styles::{heading_class, indent_style},
    RichText,
};
use yew::prelude::*;

use crate::i18n::current::article as t;

pub struct Renderer {
    next_heading: usize,
    anchors: bool,
}

impl Renderer {
    /// Renderer for an article body; headings get outline anchors.
    pub fn new() -> Self {
        Self {
            next_heading: 0,
            anchors: true,
        }
    }

    /// Renderer for documents nested inside blocks. Their headings are not
    /// part of the outline.
    fn nested() -> Self {
        Self {
            next_heading: 0,
            anchors: false,
        }
    }

    pub fn nodes(&mut self, nodes: &[Node]) -> Html {
        let rendered: Vec<Html> = nodes.iter().map(|node| self.node(node)).collect();
        rendered.into_iter().collect()
    }

    fn node(&mut self, node: &Node) -> Html {
        match node {
            Node::Paragraph(paragraph) => {
                if paragraph.children.is_empty() {
                    return html! { <p class="my-5">{ "\u{a0}" }</p> };
                }
                let style = (paragraph.indent > 0).then(|| indent_style(paragraph.indent));
                html! {
                    <p class="my-5 leading-[1.75] text-gray-800 text-base md:text-lg" style={style}>
                        { self.nodes(&paragraph.children) }
                    </p>
                }
            },
            Node::Heading(heading) => {
                let level = heading.level();
                let index = self.next_heading;
                self.next_heading += 1;
                let id = self.anchors.then(|| heading_anchor(index));
                html! {
                    <@{level.tag()} id={id} class={heading_class(level)}>
                        { self.nodes(&heading.children) }
                    </@>
                }
            },
            Node::List(list) => self.list(list),
            Node::ListItem(item) => self.list_item(item, false),
            Node::Quote(quote) => html! {
                <blockquote class="border-l-4 border-blue-500 pl-6 py-3 my-7 italic text-gray-700 text-lg bg-blue-50/40 rounded-r-lg">
                    { self.nodes(&quote.children) }
                </blockquote>
            },
            Node::Code(code) => html! { <code::CodeBlock code={code.clone()} /> },
            Node::Text(text) | Node::CodeHighlight(text) => text::text_node(text),
            Node::LineBreak => html! { <br /> },
            Node::Tab => html! { { "\t" } },
            Node::Link(link) => {
                let children = self.nodes(&link.children);
                match link.href() {
                    Some(href) => html! {
                        <a
                            href={href.to_string()}
                            target={link.target().to_string()}
                            rel={link.rel()}
                            title={link.title.clone()}
                            class="text-blue-600 hover:text-blue-700 underline decoration-1 underline-offset-2 transition-colors"
                        >
                            { children }
                        </a>
                    },
                    None => children,
                }
            },
            Node::HorizontalRule => html! { <hr class="my-10 border-gray-200" /> },
            Node::Block(block) => blocks::block(&block.block()),
            Node::Unknown => Html::default(),
        }
    }

    fn list(&mut self, list: &ListNode) -> Html {
        let kind = list.kind();
        let style = (list.indent > 0).then(|| indent_style(list.indent));
        let items: Vec<Html> = list
            .children
            .iter()
            .map(|child| match child {
                Node::ListItem(item) => self.list_item(item, kind == ListKind::Check),
                other => self.node(other),
            })
            .collect();

        match kind {
            ListKind::Number => html! {
                <ol
                    class="list-decimal list-inside my-4 space-y-2"
                    start={list.start.filter(|start| *start != 1).map(|start| start.to_string())}
                    style={style}
                >
                    { for items }
                </ol>
            },
            ListKind::Bullet => html! {
                <ul class="list-disc list-inside my-4 space-y-2" style={style}>{ for items }</ul>
            },
            ListKind::Check => html! {
                <ul class="list-none my-4 space-y-2" style={style}>{ for items }</ul>
            },
        }
    }

    fn list_item(&mut self, item: &ListItemNode, checkable: bool) -> Html {
        // An item holding only a list is the editor's way of nesting.
        let only_nested = !item.children.is_empty()
            && item.children.iter().all(|child| matches!(child, Node::List(_)));
        let class = if only_nested { "list-none" } else { "ml-4" };
        let children = self.nodes(&item.children);

        if checkable && !only_nested {
            let checked = item.checked.unwrap_or(false);
            return html! {
                <li class="ml-4 flex items-start gap-2" role="checkbox" aria-checked={checked.to_string()}>
                    <input type="checkbox" class="mt-1.5" checked={checked} disabled=true />
                    <span class={classes!(checked.then_some("line-through text-gray-500"))}>
                        { children }
                    </span>
                </li>
            };
        }

        html! { <li class={class}>{ children }</li> }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Document nested in a block, rendered without outline anchors.
pub(crate) fn nested_document(doc: &RichText) -> Html {
    Renderer::nested().nodes(doc.children())
}

#[derive(Properties, PartialEq)]
pub struct RichTextRendererProps {
    pub content: RichText,
}

/// Article body. An empty document shows a placeholder line.
#[function_component(RichTextRenderer)]
pub fn rich_text_renderer(props: &RichTextRendererProps) -> Html {
    if props.content.is_empty() {
        return html! {
            <div class="text-gray-500 text-center py-12">{ t::NO_CONTENT }</div>
        };
    }

    html! {
        <div class="rich-text-content prose prose-lg lg:prose-xl max-w-none">
            { Renderer::new().nodes(props.content.children()) }
        </div>
    }
}
