use guides_shared::{
    format::{guide_count_label, image_url, initial},
    model::MediaSize,
    Category,
};
use yew::prelude::*;

use crate::{
    config,
    i18n::{
        current::{categories as t, common},
        fill_two,
    },
};

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub category: Category,
    /// Receives the category slug.
    pub on_click: Callback<String>,
}

/// Category tile with a thumbnail and guide count. Acts as a link for
/// mouse and keyboard alike.
#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let category = &props.category;
    let count_label = guide_count_label(category.article_count);

    let onclick = {
        let on_click = props.on_click.clone();
        let slug = category.slug.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(slug.clone()))
    };
    let onkeydown = {
        let on_click = props.on_click.clone();
        let slug = category.slug.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_click.emit(slug.clone());
            }
        })
    };

    let thumbnail = match category.cover_image.as_ref().filter(|m| !m.url.is_empty()) {
        Some(cover) => html! {
            <img
                src={image_url(cover.sized_url(MediaSize::Thumbnail), config::MEDIA_BASE)}
                alt={cover.alt_or(&category.name).to_string()}
                class="w-full h-full object-cover"
                loading="lazy"
            />
        },
        None => html! {
            <div class="grid w-full h-full place-items-center bg-gradient-to-br from-blue-500 to-purple-600">
                <span class="text-white text-base font-semibold">{ initial(&category.name) }</span>
            </div>
        },
    };

    html! {
        <div
            role="link"
            tabindex="0"
            aria-label={fill_two(t::CARD_ARIA_TEMPLATE, &category.name, &count_label)}
            onclick={onclick}
            onkeydown={onkeydown}
            class="group relative cursor-pointer h-[96px] rounded-[16px] p-2 bg-white/80 shadow-[0_2px_4px_0_rgba(0,0,0,0.05),0_0_1px_0_rgba(0,0,0,0.25)] transition-all duration-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2"
        >
            <div class="flex items-center gap-6 h-full">
                <div class="shrink-0 w-[80px] h-[80px] rounded-[12px] overflow-hidden bg-gray-100">
                    { thumbnail }
                </div>

                <div class="min-w-0 flex-1 flex flex-col justify-center gap-2">
                    <h3 class="text-[18px] font-medium text-gray-900 leading-tight">
                        { &category.name }
                    </h3>
                    if let Some(description) = category.description.as_ref() {
                        <p class="text-xs text-gray-500 leading-tight line-clamp-1">{ description }</p>
                    }
                    <div class="flex items-center gap-1 text-[14px] text-gray-600 group-hover:text-gray-800">
                        <span>{ count_label.clone() }</span>
                        <span aria-hidden="true" class="transition-transform group-hover:translate-x-0.5">
                            { common::ARROW_RIGHT }
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
