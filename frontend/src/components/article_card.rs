use guides_shared::{
    format::{image_url, initial, pastel_gradient},
    ArticleListItem,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_fallback::ImageWithFallback,
    },
    config,
    i18n::current::article_list as t,
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleListItem,
}

/// Compact article row: colored icon tile, title, excerpt and a CTA pill.
#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::Article {
        slug: article.slug.clone(),
    };
    let letter = html! {
        <span class="text-base md:text-lg font-bold text-gray-700">{ initial(&article.title) }</span>
    };

    let icon = match article.featured_image.as_ref() {
        Some(image) => html! {
            <ImageWithFallback
                src={image_url(&image.url, config::MEDIA_BASE)}
                alt={image.alt_or(&article.title).to_string()}
                class="w-full h-full object-cover rounded-lg"
                fallback={letter}
            />
        },
        None => letter,
    };

    html! {
        <Link<Route>
            to={detail_route}
            classes="group flex items-center gap-4 md:gap-5 p-4 md:p-5 hover:bg-gray-50 transition-all duration-200 bg-[#F9F9F9] rounded-lg shadow-sm"
        >
            <div class={classes!(
                "flex-shrink-0",
                "w-10",
                "h-10",
                "md:w-11",
                "md:h-11",
                pastel_gradient(&article.id),
                "rounded-lg",
                "flex",
                "items-center",
                "justify-center"
            )}>
                { icon }
            </div>

            <div class="flex-1 min-w-0 flex flex-col justify-center">
                <h2 class="text-base font-semibold text-gray-900 mb-0.5 line-clamp-1">
                    { &article.title }
                </h2>
                if let Some(excerpt) = article.excerpt.as_ref() {
                    <p class="text-xs text-gray-500 line-clamp-2 leading-relaxed">{ excerpt }</p>
                }
            </div>

            <div class="flex-shrink-0 hidden sm:block ml-auto">
                <span class="inline-flex items-center gap-1.5 px-4 py-1.5 bg-white border border-gray-200 rounded-full text-xs font-medium text-gray-700 hover:bg-gray-100 transition-all">
                    { t::VIEW_ARTICLE }
                </span>
            </div>

            <div class="flex-shrink-0 sm:hidden ml-auto">
                <Icon
                    name={IconName::ArrowRight}
                    size={16}
                    class="text-gray-400 group-hover:text-blue-600 group-hover:translate-x-1 transition-all"
                />
            </div>
        </Link<Route>>
    }
}
