use guides_shared::{filter::filter_guides, PageMeta};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{
        breadcrumb::{Breadcrumb, BreadcrumbItem},
        footer::DarkFooter,
        guide_card::GuideCard,
        icons::{Icon, IconName},
        image_with_fallback::ImageWithFallback,
    },
    config,
    hooks::{use_page_meta, use_scroll_to_top},
    i18n::current::{breadcrumb, common, guides_list as t},
    models::GUIDES,
    router::Route,
};

/// Attio guides landing page; the list is static and filtered as you type.
#[function_component(GuidesListPage)]
pub fn guides_list_page() -> Html {
    use_scroll_to_top();
    use_page_meta(PageMeta::new(t::META_TITLE, t::META_DESCRIPTION).with_path("/guides/attio"));

    let query = use_state(String::new);
    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };
    let guides = filter_guides(&GUIDES, &query);

    let crumbs = vec![
        BreadcrumbItem::link(breadcrumb::GUIDES, Route::Home),
        BreadcrumbItem::current(breadcrumb::ATTIO),
    ];
    let logo_fallback = html! { <span class="text-white text-2xl font-bold">{ "A" }</span> };

    html! {
        <>
            <Breadcrumb items={crumbs} />
            <div class="bg-gray-50 min-h-screen py-12 lg:py-16">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-10">
                        <div class="inline-flex items-center justify-center w-20 h-20 mb-6 bg-gradient-to-br from-blue-600 to-purple-600 rounded-2xl shadow-lg">
                            <ImageWithFallback
                                src={config::asset_path(config::ATTIO_LOGO)}
                                alt={t::LOGO_ALT}
                                class="w-12 h-12"
                                fallback={logo_fallback}
                            />
                        </div>
                        <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">{ t::TITLE }</h1>
                    </div>

                    <div class="bg-white rounded-2xl shadow-lg shadow-gray-200/50 border border-gray-100 overflow-hidden">
                        <div class="p-6 border-b border-gray-100">
                            <div class="relative">
                                <Icon
                                    name={IconName::Search}
                                    size={20}
                                    class="absolute left-4 top-1/2 -translate-y-1/2 text-gray-400"
                                />
                                <input
                                    type="text"
                                    placeholder={t::SEARCH_PLACEHOLDER}
                                    aria-label={t::SEARCH_ARIA}
                                    value={(*query).clone()}
                                    oninput={on_input}
                                    class="w-full pl-12 pr-4 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder:text-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
                                />
                            </div>
                        </div>

                        <div class="divide-y divide-gray-100">
                            if guides.is_empty() {
                                <div class="p-12 text-center">
                                    <p class="text-gray-500 text-lg">{ t::EMPTY }</p>
                                </div>
                            } else {
                                { for guides.into_iter().map(|guide| html! {
                                    <GuideCard key={guide.id} guide={guide.clone()} />
                                }) }
                            }
                        </div>

                        <div class="p-6 bg-gray-50 border-t border-gray-100 text-center">
                            <p class="text-gray-600">
                                { t::QUESTIONS }
                                <a
                                    href={format!("mailto:{}", common::SUPPORT_EMAIL)}
                                    class="text-blue-600 hover:text-blue-700 font-medium underline underline-offset-2 transition-colors"
                                >
                                    { t::WRITE_TO_US }
                                </a>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
            <DarkFooter />
        </>
    }
}
