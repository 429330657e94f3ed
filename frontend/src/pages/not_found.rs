use guides_shared::PageMeta;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    hooks::{use_page_meta, use_scroll_to_top},
    i18n::current::not_found as t,
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_scroll_to_top();
    use_page_meta(PageMeta::new(t::META_TITLE, t::META_DESCRIPTION));

    html! {
        <div class="max-w-4xl mx-auto px-4 py-16 sm:px-6 lg:px-8 text-center">
            <h1 class="text-9xl font-bold text-gray-300 mb-4">{ t::CODE }</h1>
            <h2 class="text-3xl font-bold text-gray-900 mb-4">{ t::TITLE }</h2>
            <p class="text-xl text-gray-600 mb-8">{ t::MESSAGE }</p>
            <Link<Route>
                to={Route::Home}
                classes="inline-flex items-center gap-2 px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
            >
                <Icon name={IconName::Home} size={20} />
                { t::GO_HOME }
            </Link<Route>>
        </div>
    }
}
