use yew::prelude::*;

use crate::{
    config,
    i18n::{
        current::{common, footer as t},
        fill_one,
    },
};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn link_column(title: &str, links: &[&str]) -> Html {
    html! {
        <div class="lg:col-span-3">
            <h3 class="text-white font-semibold mb-4 text-sm">{ title.to_string() }</h3>
            <ul class="space-y-3">
                { for links.iter().map(|label| html! {
                    <li key={label.to_string()}>
                        <a href="#" class="text-sm text-gray-400 hover:text-white transition-colors">
                            { label.to_string() }
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

/// Site footer: banner, company blurb, link columns and copyright.
#[function_component(DarkFooter)]
pub fn dark_footer() -> Html {
    html! {
        <footer class="bg-[#1a2332] text-gray-300">
            <div class="relative border-b border-gray-800 overflow-hidden">
                <div class="absolute inset-0 opacity-30">
                    <img
                        src={config::asset_path(config::BRAND_BANNER)}
                        alt=""
                        class="w-full h-full object-cover"
                    />
                </div>
                <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 lg:py-28 text-center" />
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 lg:py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-12 gap-8 lg:gap-12">
                    <div class="lg:col-span-6">
                        <div class="flex items-center gap-2 mb-4">
                            <img
                                src={config::asset_path(config::BRAND_LOGO)}
                                alt={common::SITE_NAME}
                                class="h-6"
                            />
                        </div>
                        <p class="text-sm text-gray-400 mb-6 max-w-md">{ t::TAGLINE }</p>
                        <a
                            href={format!("mailto:{}", common::INFO_EMAIL)}
                            class="text-sm text-gray-400 hover:text-white transition-colors"
                        >
                            { common::INFO_EMAIL }
                        </a>
                    </div>

                    { link_column(t::SERVICES, &t::SERVICE_LINKS) }
                    { link_column(t::RESOURCES, &t::RESOURCE_LINKS) }
                </div>

                <div class="mt-8 pt-8 border-t border-gray-800 text-center">
                    <p class="text-sm text-gray-500">
                        { fill_one(t::COPYRIGHT_TEMPLATE, current_year()) }
                    </p>
                </div>
            </div>
        </footer>
    }
}
