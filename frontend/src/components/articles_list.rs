use guides_shared::{format::image_url, ArticleListItem};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config,
    i18n::{
        current::{article_list as t, common},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct ArticlesListProps {
    pub articles: Vec<ArticleListItem>,
    pub header_text: AttrValue,
}

/// White card listing a category's guides, one clickable row each.
#[function_component(ArticlesList)]
pub fn articles_list(props: &ArticlesListProps) -> Html {
    let navigator = use_navigator();

    html! {
        <section class="w-full max-w-[1046px] mx-auto bg-white rounded-xl overflow-hidden shadow-[0_2px_4px_0_rgba(0,0,0,0.05),0_0_1px_0_rgba(0,0,0,0.25)]">
            <div class="h-[74px] px-8 py-6 border-t border-b border-[#3535371A] flex items-center">
                <span class="text-sm leading-[26px] text-gray-600 font-sans">
                    { props.header_text.clone() }
                </span>
            </div>

            <ul role="list" class="divide-y divide-[#3535371A]">
                { for props.articles.iter().map(|article| {
                    let route = Route::Article { slug: article.slug.clone() };
                    let on_view = {
                        let navigator = navigator.clone();
                        let route = route.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&route);
                            }
                        })
                    };
                    let thumbnail = match article.featured_image.as_ref().filter(|m| !m.url.is_empty()) {
                        Some(image) => html! {
                            <img
                                src={image_url(&image.url, config::MEDIA_BASE)}
                                alt={image.alt_or(&article.title).to_string()}
                                class="w-full h-full object-cover"
                                loading="lazy"
                            />
                        },
                        None => html! { <div class="w-full h-full bg-gray-200" /> },
                    };

                    html! {
                        <li key={article.id.clone()} class="relative min-h-[140px]">
                            <Link<Route>
                                to={route}
                                classes="absolute inset-0 z-10 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2"
                            >
                                <span class="sr-only">{ fill_one(t::OPEN_ARIA_TEMPLATE, &article.title) }</span>
                            </Link<Route>>

                            <div class="relative px-8 py-5 flex items-center gap-8 hover:bg-[#FAFAFA] transition-colors">
                                <div class="flex-shrink-0 w-[112px] h-[118px] rounded-xl overflow-hidden bg-gray-100">
                                    { thumbnail }
                                </div>

                                <div class="flex-1 max-w-[700px]">
                                    <h3 class="text-[22px] leading-[28px] font-semibold text-gray-600 mb-1 line-clamp-2 font-sans">
                                        { &article.title }
                                    </h3>
                                    if let Some(excerpt) = article.excerpt.as_ref() {
                                        <p class="text-sm leading-[22px] text-gray-400 line-clamp-2 font-sans">
                                            { excerpt }
                                        </p>
                                    }
                                </div>

                                <div class="flex-shrink-0">
                                    <button
                                        type="button"
                                        class="relative z-30 inline-flex items-center justify-center h-8 px-4 rounded-xl text-sm font-medium leading-none whitespace-nowrap bg-white text-gray-600 shadow-sm ring-1 ring-black/10 hover:bg-gray-50 hover:text-gray-800 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2"
                                        onclick={on_view}
                                    >
                                        { t::VIEW_GUIDE }
                                    </button>
                                </div>
                            </div>
                        </li>
                    }
                }) }
            </ul>

            <div class="h-[74px] px-8 py-6 border-t border-[#3535371A] flex items-center">
                <p class="text-sm leading-[26px] text-gray-600 font-sans">
                    { t::QUESTIONS_PREFIX }
                    <a
                        href={format!("mailto:{}", common::SUPPORT_EMAIL)}
                        class="underline underline-offset-2"
                    >
                        { common::SUPPORT_EMAIL }
                    </a>
                </p>
            </div>
        </section>
    }
}
