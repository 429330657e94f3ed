use guides_shared::{content::outline, RichText};
use yew::prelude::*;

use crate::{
    components::{content_navigation::ContentNavigation, rich_text::RichTextRenderer},
    i18n::current::article as t,
};

#[derive(Properties, PartialEq)]
pub struct ArticleContentProps {
    pub content: RichText,
}

/// Article body card with the "On this page" outline beside it. Small
/// screens get the outline as a floating panel instead.
#[function_component(ArticleContent)]
pub fn article_content(props: &ArticleContentProps) -> Html {
    let entries = use_memo(props.content.clone(), outline);

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-16">
            <div class="grid grid-cols-1 lg:grid-cols-12 gap-8 lg:gap-12">
                <div class="lg:col-span-8">
                    <article class="bg-white rounded-2xl shadow-sm border border-gray-200 overflow-hidden">
                        <div class="p-6 md:p-8 lg:p-12">
                            <RichTextRenderer content={props.content.clone()} />
                        </div>
                    </article>
                </div>

                if !entries.is_empty() {
                    <aside class="hidden lg:block lg:col-span-4">
                        <div class="sticky top-24">
                            <div class="bg-white rounded-2xl shadow-sm border border-gray-200 p-6">
                                <h3 class="text-sm font-semibold text-gray-900 mb-4 uppercase tracking-wide">
                                    { t::ON_THIS_PAGE }
                                </h3>
                                <ContentNavigation entries={(*entries).clone()} in_sidebar=true />
                            </div>
                        </div>
                    </aside>
                    <ContentNavigation entries={(*entries).clone()} />
                }
            </div>
        </div>
    }
}
