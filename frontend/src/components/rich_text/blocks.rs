use guides_shared::{
    blocks::{
        toggle_accordion, AccordionBlock, BlockText, CalloutBlock, ImageBlock, QuoteBlock,
        TableBlock, VideoBlock, VideoSource,
    },
    format::image_url,
    model::MediaSize,
    Block,
};
use yew::prelude::*;

use super::nested_document;
use crate::{config, i18n::current::article as t};

pub(super) fn block(block: &Block) -> Html {
    match block {
        Block::Image(image) => image_block(image),
        Block::Callout(callout) => callout_block(callout),
        Block::Table(table) => table_block(table),
        Block::Accordion(accordion) => html! { <Accordion block={accordion.clone()} /> },
        Block::Quote(quote) => quote_block(quote),
        Block::Video(video) => video_block(video),
        Block::Unknown(block_type) => {
            log::warn!("unknown block type: {block_type:?}");
            Html::default()
        },
        Block::Malformed { block_type, reason } => {
            log::warn!("skipping malformed {block_type} block: {reason}");
            Html::default()
        },
    }
}

/// Plain strings go into a paragraph with `class`; rich text keeps its own
/// structure.
fn block_text(text: &BlockText, class: &'static str) -> Html {
    match text {
        BlockText::Plain(text) => html! { <p class={class}>{ text.clone() }</p> },
        BlockText::Rich(doc) => html! { <div class={class}>{ nested_document(doc) }</div> },
    }
}

fn image_block(image: &ImageBlock) -> Html {
    let Some(media) = image.media().filter(|media| !media.url.is_empty()) else {
        return Html::default();
    };
    let figure_class = classes!("my-10", image.is_centered().then_some("text-center"));

    html! {
        <figure class={figure_class}>
            <img
                src={image_url(media.sized_url(MediaSize::Tablet), config::MEDIA_BASE)}
                alt={image.alt_text()}
                width={media.width.map(|w| w.to_string())}
                height={media.height.map(|h| h.to_string())}
                loading="lazy"
                class="rounded-xl shadow-md max-w-full h-auto hover:shadow-lg transition-shadow duration-300"
            />
            if let Some(caption) = image.caption() {
                <figcaption class="mt-3 text-sm text-gray-600 italic text-center">
                    { caption }
                </figcaption>
            }
        </figure>
    }
}

fn callout_block(callout: &CalloutBlock) -> Html {
    html! {
        <div class={classes!("border-l-4", "p-6", "my-8", "rounded-r-xl", callout.kind().class())}>
            if let Some(title) = callout.title() {
                <h4 class="font-bold mb-3 text-lg">{ title }</h4>
            }
            if let Some(content) = callout.content.as_ref().filter(|c| !c.is_blank()) {
                { block_text(content, "leading-relaxed") }
            }
        </div>
    }
}

fn table_block(table: &TableBlock) -> Html {
    let headers = table.headers();
    let table_class = classes!(
        "w-full",
        "border-collapse",
        table.bordered.then_some("border border-gray-300")
    );

    html! {
        <div class="my-8 overflow-x-auto">
            <table class={table_class}>
                if !headers.is_empty() {
                    <thead class="bg-gray-100">
                        <tr>
                            { for headers.into_iter().map(|header| html! {
                                <th class="border px-4 py-2 text-left font-semibold">{ header }</th>
                            }) }
                        </tr>
                    </thead>
                }
                <tbody>
                    { for table.rows().into_iter().enumerate().map(|(index, row)| {
                        let class = classes!(table.is_striped_row(index).then_some("bg-gray-50"));
                        let key = row.key.unwrap_or_else(|| format!("row-{index}"));
                        html! {
                            <tr key={key} class={class}>
                                { for row.cells.into_iter().map(|cell| html! {
                                    <td class="border px-4 py-2">{ cell }</td>
                                }) }
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AccordionProps {
    block: AccordionBlock,
}

/// Expandable items; opening one closes the other.
#[function_component(Accordion)]
fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="my-8 space-y-4">
            { for props.block.items.iter().enumerate().map(|(index, item)| {
                let is_open = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| open.set(toggle_accordion(*open, index)))
                };
                html! {
                    <div key={index} class="border border-gray-200 rounded-lg">
                        <button
                            type="button"
                            class="w-full px-4 py-3 text-left font-semibold flex justify-between items-center hover:bg-gray-50"
                            aria-expanded={is_open.to_string()}
                            onclick={onclick}
                        >
                            { &item.title }
                            <span aria-hidden="true">{ if is_open { "\u{2212}" } else { "+" } }</span>
                        </button>
                        if is_open {
                            <div class="px-4 py-3 border-t border-gray-200 bg-gray-50">
                                if let Some(content) = item.content.as_ref() {
                                    { block_text(content, "leading-relaxed") }
                                }
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

fn quote_block(quote: &QuoteBlock) -> Html {
    let body = match quote.quote.as_ref() {
        Some(BlockText::Plain(text)) => html! {
            <p class="text-gray-800">{ format!("\u{201c}{text}\u{201d}") }</p>
        },
        Some(BlockText::Rich(doc)) => html! {
            <div class="text-gray-800">{ nested_document(doc) }</div>
        },
        None => Html::default(),
    };

    html! {
        <blockquote class="border-l-4 border-gray-400 pl-6 italic my-8 text-lg">
            { body }
            if let Some(attribution) = quote.attribution() {
                <footer class="text-sm text-gray-600 mt-3 not-italic">
                    { format!("\u{2014} {attribution}") }
                </footer>
            }
        </blockquote>
    }
}

fn video_block(video: &VideoBlock) -> Html {
    let Some(source) = video.source() else {
        log::debug!("video block without a playable source");
        return Html::default();
    };
    let title = video.caption().unwrap_or(t::VIDEO_TITLE_FALLBACK).to_string();

    let player = match source {
        VideoSource::Embed(src) => html! {
            <div class="relative w-full aspect-video">
                <iframe
                    src={src}
                    title={title}
                    class="absolute inset-0 w-full h-full rounded-xl"
                    allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    loading="lazy"
                />
            </div>
        },
        VideoSource::File(src) => html! {
            <video
                src={image_url(&src, config::MEDIA_BASE)}
                poster={video.poster_url().map(|url| image_url(url, config::MEDIA_BASE))}
                controls=true
                preload="metadata"
                class="w-full rounded-xl shadow-md"
            />
        },
    };

    html! {
        <figure class="my-10">
            { player }
            if let Some(caption) = video.caption() {
                <figcaption class="mt-3 text-sm text-gray-600 italic text-center">
                    { caption }
                </figcaption>
            }
        </figure>
    }
}
