use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config,
    i18n::current::{common, layout as t},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct TalkToUsProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Black "Talk to us" pill with a gradient border, opening a mail draft.
#[function_component(TalkToUs)]
pub fn talk_to_us(props: &TalkToUsProps) -> Html {
    html! {
        <a
            href={format!("mailto:{}", common::SUPPORT_EMAIL)}
            aria-label={common::CONTACT_ARIA}
            class="group relative inline-flex items-center rounded-xl p-[2px] bg-gradient-to-r from-fuchsia-500 via-indigo-500 to-sky-500 shadow-[0_1px_2px_rgba(0,0,0,0.06)] focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2"
        >
            <span class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "rounded-[12px]",
                "bg-black",
                "text-white",
                "text-sm",
                "font-medium",
                "leading-none",
                "whitespace-nowrap",
                "transition-colors",
                "group-hover:bg-gray-900",
                props.class.clone()
            )}>
                { common::TALK_TO_US }
            </span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <a
                href="#main-content"
                class="sr-only focus:not-sr-only focus:absolute focus:top-2 focus:left-2 focus:z-[100] focus:rounded-md focus:bg-white focus:px-3 focus:py-2 focus:shadow"
            >
                { t::SKIP_TO_CONTENT }
            </a>

            <header class="sticky top-0 z-50 bg-transparent">
                <div class="mx-auto w-full max-w-7xl px-3 sm:px-4 lg:px-6 pt-2">
                    <nav
                        aria-label={t::MAIN_NAV_ARIA}
                        class="w-full flex items-center justify-between rounded-2xl border border-black/10 bg-white/80 backdrop-blur-md shadow-[0_1px_2px_rgba(0,0,0,0.06),0_8px_24px_rgba(0,0,0,0.08)] px-4 sm:px-6 py-2.5"
                    >
                        <Link<Route>
                            to={Route::Home}
                            classes="flex items-center gap-2.5 hover:opacity-90 transition-opacity"
                        >
                            <img
                                src={config::asset_path(config::BRAND_LOGO)}
                                alt={t::LOGO_ALT}
                                class="h-6 w-6 sm:h-7 sm:w-7"
                            />
                            <span class="text-base sm:text-lg font-semibold text-gray-900">
                                { common::SITE_NAME }
                            </span>
                        </Link<Route>>

                        <TalkToUs class={classes!("px-4", "sm:px-5", "py-2")} />
                    </nav>
                </div>
            </header>

            <main id="main-content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
