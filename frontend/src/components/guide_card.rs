use guides_shared::{filter::Guide, format::initial};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_fallback::ImageWithFallback,
    },
    config,
    i18n::{
        current::{article_list, guides_list as t},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct GuideCardProps {
    pub guide: Guide,
}

/// Row of the static Attio guides list.
#[function_component(GuideCard)]
pub fn guide_card(props: &GuideCardProps) -> Html {
    let guide = &props.guide;
    let letter = html! {
        <span class="text-xl font-bold text-gray-700">{ initial(guide.title) }</span>
    };

    html! {
        <Link<Route>
            to={Route::AttioGuide { slug: guide.slug.to_string() }}
            classes="group flex items-center gap-6 md:gap-8 p-6 md:p-8 hover:bg-gray-50 transition-all duration-200 bg-[#F9F9F9] rounded-lg shadow-sm"
        >
            <div class={classes!(
                "flex-shrink-0",
                "w-12",
                "h-12",
                "md:w-14",
                "md:h-14",
                guide.icon_color,
                "rounded-lg",
                "flex",
                "items-center",
                "justify-center",
                "transition-shadow"
            )}>
                <ImageWithFallback
                    src={config::guide_icon(guide.slug)}
                    alt={fill_one(t::ICON_ALT_TEMPLATE, guide.title)}
                    class="w-6 h-6 md:w-8 md:h-8"
                    fallback={letter}
                />
            </div>

            <div class="flex-1 min-w-0 flex flex-col justify-center">
                <h3 class="text-lg font-semibold text-gray-900 mb-1 line-clamp-1">{ guide.title }</h3>
                <p class="text-sm text-gray-500 line-clamp-2 leading-relaxed">{ guide.description }</p>
            </div>

            <div class="flex-shrink-0 hidden sm:block ml-auto">
                <span class="inline-flex items-center gap-2 px-5 py-2 bg-white border border-gray-200 rounded-full text-sm font-medium text-gray-700 hover:bg-gray-100 transition-all">
                    { article_list::VIEW_GUIDE }
                </span>
            </div>

            <div class="flex-shrink-0 sm:hidden ml-auto">
                <Icon
                    name={IconName::ArrowRight}
                    size={20}
                    class="text-gray-400 group-hover:text-blue-600 group-hover:translate-x-1 transition-all"
                />
            </div>
        </Link<Route>>
    }
}
