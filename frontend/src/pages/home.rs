use guides_shared::PageMeta;
use yew::prelude::*;

use crate::{
    components::{
        breadcrumb::{Breadcrumb, BreadcrumbItem},
        categories_section::CategoriesSection,
        footer::DarkFooter,
    },
    hooks::{use_page_meta, use_scroll_to_top},
    i18n::current::{breadcrumb, home as t},
    seo::website_json_ld,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    let meta = use_memo((), |_| {
        let mut meta = PageMeta::new(t::META_TITLE, t::META_DESCRIPTION).with_path("/");
        meta.json_ld = Some(website_json_ld());
        meta
    });
    use_page_meta((*meta).clone());

    html! {
        <>
            <Breadcrumb items={vec![BreadcrumbItem::current(breadcrumb::GUIDES)]} />
            <div class="bg-gray-50">
                <CategoriesSection />
            </div>
            <DarkFooter />
        </>
    }
}
