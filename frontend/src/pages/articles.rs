use guides_shared::{model::ArticleListParams, pagination::page_size_or_default, PageMeta};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        breadcrumb::{Breadcrumb, BreadcrumbItem, BreadcrumbVariant},
        error_message::ErrorMessage,
        footer::DarkFooter,
        icons::{Icon, IconName},
        loading_skeleton::LoadingSkeleton,
        pagination::Pagination,
    },
    hooks::{
        push_list_query, scroll_window_to_top, use_article_list, use_list_query, use_page_meta,
        use_scroll_to_top, ListQuery,
    },
    i18n::{
        current::{articles_page as t, breadcrumb, common},
        fill_one,
    },
    router::Route,
};

/// Every published article, searchable, newest first as the API returns
/// them.
#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    use_scroll_to_top();
    use_page_meta(PageMeta::new(t::META_TITLE, t::META_DESCRIPTION).with_path("/articles"));

    let navigator = use_navigator();
    let list_query = use_list_query();
    let limit = page_size_or_default(list_query.limit);
    let search = list_query.search().to_string();
    let draft = {
        let search = search.clone();
        use_state(move || search)
    };
    let articles = use_article_list(ArticleListParams {
        page: Some(list_query.page()),
        limit: Some(limit),
        search: Some(search.clone()).filter(|s| !s.is_empty()),
        ..ArticleListParams::default()
    });

    // Back/forward navigation changes the query under the input.
    {
        let draft = draft.clone();
        use_effect_with(search.clone(), move |search| draft.set(search.clone()));
    }

    let navigate = {
        let navigator = navigator.clone();
        Callback::from(move |query: ListQuery| {
            if let Some(navigator) = navigator.as_ref() {
                push_list_query(navigator, &Route::Articles, &query);
            }
            scroll_window_to_top();
        })
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let navigate = navigate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let q = draft.trim().to_string();
            navigate.emit(ListQuery {
                page: Some(1),
                limit: Some(limit),
                q: (!q.is_empty()).then_some(q),
            });
        })
    };
    let on_page_change = {
        let navigate = navigate.clone();
        let list_query = list_query.clone();
        Callback::from(move |page: u32| {
            navigate.emit(ListQuery {
                page: Some(page),
                ..list_query.clone()
            })
        })
    };
    let on_page_size_change = {
        let list_query = list_query.clone();
        Callback::from(move |limit: u32| {
            navigate.emit(ListQuery {
                page: Some(1),
                limit: Some(limit),
                q: list_query.q.clone(),
            })
        })
    };

    let results = if articles.is_loading {
        html! { <LoadingSkeleton /> }
    } else if let Some(err) = articles.error.as_ref().filter(|_| articles.data.is_none()) {
        html! {
            <ErrorMessage
                title={t::LOAD_FAILED}
                message={err.to_string()}
                on_retry={articles.refetch.clone()}
            />
        }
    } else {
        match articles.data.as_ref() {
            Some(response) if !response.articles.is_empty() => html! {
                <>
                    <p class="text-sm text-gray-600 mb-4">
                        { fill_one(t::HEADER_TEMPLATE, response.pagination.total_docs) }
                    </p>
                    <ul class="space-y-3" aria-busy={articles.is_fetching.to_string()}>
                        { for response.articles.iter().map(|article| html! {
                            <li key={article.id.clone()}>
                                <ArticleCard article={article.clone()} />
                            </li>
                        }) }
                    </ul>
                    <Pagination
                        pagination={response.pagination.clone()}
                        on_page_change={on_page_change}
                        on_page_size_change={on_page_size_change}
                    />
                </>
            },
            _ => html! {
                <div class="text-center py-16">
                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{ t::EMPTY_TITLE }</h3>
                    <p class="text-gray-600">{ t::EMPTY_HINT }</p>
                </div>
            },
        }
    };

    let crumbs = vec![
        BreadcrumbItem::link(breadcrumb::GUIDES, Route::Home),
        BreadcrumbItem::current(breadcrumb::ARTICLES),
    ];

    html! {
        <>
            <Breadcrumb items={crumbs} variant={BreadcrumbVariant::Bar} />
            <div class="bg-gray-50 min-h-screen py-12 lg:py-16">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-8">{ t::TITLE }</h1>

                    <form class="relative mb-8" role="search" onsubmit={on_submit}>
                        <Icon
                            name={IconName::Search}
                            size={20}
                            class="absolute left-4 top-1/2 -translate-y-1/2 text-gray-400 pointer-events-none"
                        />
                        <input
                            type="search"
                            placeholder={common::SEARCH_PLACEHOLDER}
                            aria-label={t::SEARCH_ARIA}
                            value={(*draft).clone()}
                            oninput={on_input}
                            class="w-full pl-12 pr-4 py-3 bg-white border border-gray-200 rounded-xl text-gray-900 placeholder:text-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
                        />
                    </form>

                    { results }
                </div>
            </div>
            <DarkFooter />
        </>
    }
}
