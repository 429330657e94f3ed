use std::rc::Rc;

use guides_shared::{
    content::reading_time_minutes,
    format::{format_date, image_url},
    model::MediaSize,
    Article,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config,
    i18n::{current::article as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct ArticleHeaderProps {
    pub article: Rc<Article>,
}

/// Byline, title, excerpt and cover image above the article body.
#[function_component(ArticleHeader)]
pub fn article_header(props: &ArticleHeaderProps) -> Html {
    let article = &props.article;
    let reading_time = {
        let article = article.clone();
        use_memo(article, |article| reading_time_minutes(&article.content))
    };

    let byline = article.author.as_ref().map(|author| {
        let name = author.display_name();
        let avatar = match author.avatar() {
            Some(avatar) => html! {
                <img
                    src={image_url(avatar.sized_url(MediaSize::Thumbnail), config::MEDIA_BASE)}
                    alt={name.to_string()}
                    class="w-10 h-10 rounded-full object-cover"
                />
            },
            None => html! {
                <div class="w-10 h-10 rounded-full bg-gradient-to-br from-blue-600 to-purple-600 flex items-center justify-center">
                    <Icon name={IconName::User} size={20} class="text-white" />
                </div>
            },
        };

        html! {
            <div class="flex items-center gap-3">
                { avatar }
                <div>
                    <p class="font-medium text-gray-900 text-sm">{ name }</p>
                    <div class="flex items-center gap-2.5 text-xs text-gray-500">
                        if let Some(published) = article.published() {
                            <time datetime={published.to_string()}>{ format_date(published) }</time>
                        }
                        <span aria-hidden="true">{ "\u{b7}" }</span>
                        <span>{ fill_one(t::READ_TIME_TEMPLATE, *reading_time) }</span>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8 sm:px-6 lg:px-8">
            <div class="grid grid-cols-1 lg:grid-cols-12 gap-8 lg:gap-12">
                <div class="lg:col-span-8">
                    <header class="mb-8">
                        <div class="flex items-center justify-between flex-wrap gap-4 mb-6">
                            { byline.unwrap_or_default() }
                        </div>

                        <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-5 leading-[1.15] tracking-tight">
                            { &article.title }
                        </h1>

                        if let Some(excerpt) = article.excerpt.as_ref().filter(|e| !e.trim().is_empty()) {
                            <p class="text-lg md:text-xl text-gray-600 leading-relaxed mb-8">{ excerpt }</p>
                        }

                        if let Some(image) = article.featured_media().filter(|m| !m.url.is_empty()) {
                            <div class="mb-8">
                                <img
                                    src={image_url(image.sized_url(MediaSize::Tablet), config::MEDIA_BASE)}
                                    alt={image.alt_or(&article.title).to_string()}
                                    class="w-full h-auto max-h-[400px] object-cover rounded-xl"
                                    loading="eager"
                                />
                            </div>
                        }
                    </header>
                </div>
                <div class="lg:col-span-4" />
            </div>
        </div>
    }
}
