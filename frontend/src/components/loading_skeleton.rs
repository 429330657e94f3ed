use yew::prelude::*;

use crate::i18n::current::{common, loading_skeleton as t};

fn bar(class: &'static str) -> Html {
    html! { <div class={classes!("bg-gray-200", "rounded", class)} aria-hidden="true" /> }
}

/// Pulsing placeholder shaped like an article page.
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div
            class="max-w-4xl mx-auto px-4 py-8 sm:px-6 lg:px-8"
            role="status"
            aria-live="polite"
            aria-label={t::ARIA_LABEL}
        >
            <div class="mb-8 animate-pulse">
                { bar("h-4 w-32 mb-4") }
                { bar("h-12 w-3/4 mb-4") }
                <div class="flex items-center gap-4 mb-6">
                    <div class="h-10 w-10 bg-gray-200 rounded-full" aria-hidden="true" />
                    <div class="flex-1">
                        { bar("h-4 w-32 mb-2") }
                        { bar("h-3 w-24") }
                    </div>
                </div>
                { bar("h-64 rounded-lg mb-8") }
            </div>

            <div class="space-y-4 animate-pulse">
                { bar("h-4 w-full") }
                { bar("h-4 w-full") }
                { bar("h-4 w-3/4") }
                { bar("h-4 w-full") }
                { bar("h-4 w-5/6") }
                { bar("h-8 w-2/3 mt-8") }
                { bar("h-4 w-full") }
                { bar("h-4 w-full") }
                { bar("h-4 w-4/5") }
            </div>
            <span class="sr-only">{ common::LOADING }</span>
        </div>
    }
}
