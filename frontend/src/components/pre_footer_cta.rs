use yew::prelude::*;

use crate::{
    components::layout::TalkToUs,
    i18n::{current::pre_footer_cta as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct PreFooterCtaProps {
    #[prop_or_default]
    pub category_name: Option<AttrValue>,
}

#[function_component(PreFooterCta)]
pub fn pre_footer_cta(props: &PreFooterCtaProps) -> Html {
    let platform = props
        .category_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(t::FALLBACK_PLATFORM);

    html! {
        <section aria-labelledby="pre-footer-cta" class="relative bg-black text-white">
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 bg-[radial-gradient(1200px_400px_at_50%_-80px,rgba(255,255,255,0.10),transparent)]"
            />
            <div class="relative mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-16 md:py-24 text-center">
                <h2
                    id="pre-footer-cta"
                    class="mx-auto max-w-3xl text-2xl sm:text-3xl md:text-4xl font-light tracking-tight"
                >
                    { fill_one(t::HEADING_TEMPLATE, platform) }
                </h2>
                <div class="mt-8 flex justify-center">
                    <TalkToUs class={classes!("px-5", "py-2.5")} />
                </div>
            </div>
        </section>
    }
}
