use guides_shared::{format::guides_header, pagination::page_size_or_default, PageMeta};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        articles_list::ArticlesList,
        breadcrumb::{Breadcrumb, BreadcrumbItem},
        error_message::ErrorMessage,
        footer::DarkFooter,
        loading_skeleton::LoadingSkeleton,
        pagination::Pagination,
        pre_footer_cta::PreFooterCta,
    },
    hooks::{
        push_list_query, scroll_window_to_top, use_category_by_slug, use_list_query,
        use_page_meta, use_scroll_to_top, ListQuery,
    },
    i18n::{
        current::{breadcrumb, category_page as t, common, home},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub slug: String,
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    use_scroll_to_top();
    let navigator = use_navigator();
    let list_query = use_list_query();
    let limit = page_size_or_default(list_query.limit);
    let detail = use_category_by_slug(Some(props.slug.clone()), list_query.page(), limit);

    let meta = match (detail.data.as_ref(), detail.error.as_ref()) {
        (Some(data), _) => PageMeta::for_category(&data.category),
        (None, Some(err)) if err.is_not_found() => {
            PageMeta::new(t::NOT_FOUND_TITLE, t::NOT_FOUND_MESSAGE)
        },
        (None, Some(_)) => PageMeta::new(t::LOAD_FAILED, t::LOAD_FAILED_FALLBACK),
        (None, None) => PageMeta::new(common::SITE_NAME, home::META_DESCRIPTION),
    };
    use_page_meta(meta);

    if detail.is_loading {
        return html! { <LoadingSkeleton /> };
    }

    let Some(data) = detail.data.clone() else {
        return match detail.error.as_ref() {
            Some(err) if !err.is_not_found() => html! {
                <ErrorMessage
                    title={t::LOAD_FAILED}
                    message={err.to_string()}
                    on_retry={detail.refetch.clone()}
                />
            },
            _ => html! {
                <ErrorMessage title={t::NOT_FOUND_TITLE} message={t::NOT_FOUND_MESSAGE} />
            },
        };
    };

    let category = &data.category;
    let route = Route::Category {
        slug: props.slug.clone(),
    };
    let on_page_change = {
        let navigator = navigator.clone();
        let route = route.clone();
        let list_query = list_query.clone();
        Callback::from(move |page: u32| {
            if let Some(navigator) = navigator.as_ref() {
                let query = ListQuery {
                    page: Some(page),
                    ..list_query.clone()
                };
                push_list_query(navigator, &route, &query);
            }
            scroll_window_to_top();
        })
    };
    let on_page_size_change = Callback::from(move |limit: u32| {
        if let Some(navigator) = navigator.as_ref() {
            let query = ListQuery {
                page: Some(1),
                limit: Some(limit),
                q: None,
            };
            push_list_query(navigator, &route, &query);
        }
        scroll_window_to_top();
    });

    let crumbs = vec![
        BreadcrumbItem::link(breadcrumb::GUIDES, Route::Home),
        BreadcrumbItem::current(category.name.clone()),
    ];

    let body = if data.articles.is_empty() {
        html! {
            <div class="max-w-[1046px] mx-auto px-4 sm:px-6 lg:px-8">
                <div class="bg-white rounded-xl shadow-sm p-16 text-center">
                    <h2 class="text-2xl font-semibold text-gray-900 mb-2">{ t::EMPTY_TITLE }</h2>
                    <p class="text-gray-600 mb-6">{ t::EMPTY_MESSAGE }</p>
                    <Link<Route>
                        to={Route::Home}
                        classes="inline-flex items-center px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2"
                    >
                        { t::VIEW_ALL }
                    </Link<Route>>
                </div>
            </div>
        }
    } else {
        html! {
            <>
                <div class="px-4 sm:px-6 lg:px-8">
                    <ArticlesList
                        articles={data.articles.clone()}
                        header_text={guides_header(data.pagination.total_docs, &category.name)}
                    />
                </div>
                <div class="max-w-[1046px] mx-auto px-4 sm:px-6 lg:px-8">
                    <Pagination
                        pagination={data.pagination.clone()}
                        on_page_change={on_page_change}
                        on_page_size_change={on_page_size_change}
                    />
                </div>
            </>
        }
    };

    html! {
        <>
            <Breadcrumb items={crumbs} />
            <div class="bg-gray-50 pt-8 lg:pt-12 pb-16 lg:pb-20">
                <div class="max-w-[1046px] mx-auto px-4 sm:px-6 lg:px-8 mb-8">
                    <h1 class="text-[40px] font-medium leading-[111%] tracking-[-0.02em] text-gray-900 text-center">
                        { fill_one(t::HEADING_TEMPLATE, &category.name) }
                    </h1>
                </div>
                { body }
            </div>
            <PreFooterCta category_name={AttrValue::from(category.name.clone())} />
            <DarkFooter />
        </>
    }
}
