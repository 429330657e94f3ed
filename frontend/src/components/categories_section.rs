use guides_shared::{
    filter::filter_categories,
    model::CategoryListParams,
    pagination::page_size_or_default,
    Category,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::use_click_away;
use yew_router::prelude::*;

use crate::{
    components::{
        category_card::CategoryCard,
        icons::{Icon, IconName},
        pagination::Pagination,
    },
    hooks::{push_list_query, scroll_window_to_top, use_category_list, use_list_query, ListQuery},
    i18n::current::{categories as t, common},
    router::Route,
};

const SKELETON_CARDS: usize = 8;

const OPTION_BASE: &str = "w-full text-left px-4 py-3 text-sm hover:bg-gray-50 transition-colors";
const OPTION_SELECTED: &str = "bg-blue-50 text-blue-700 font-medium";

fn skeleton_grid() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4" aria-busy="true">
            { for (0..SKELETON_CARDS).map(|i| html! {
                <div key={i} class="bg-white rounded-xl border border-gray-200 p-4 animate-pulse">
                    <div class="flex items-start gap-4">
                        <div class="w-12 h-12 rounded-[12px] bg-gray-200" />
                        <div class="flex-1">
                            <div class="h-4 bg-gray-200 rounded w-3/4 mb-2" />
                            <div class="h-3 bg-gray-200 rounded w-full mb-1" />
                            <div class="h-3 bg-gray-200 rounded w-2/3" />
                        </div>
                    </div>
                </div>
            }) }
            <span class="sr-only">{ common::LOADING }</span>
        </div>
    }
}

/// Home page catalogue: category filter dropdown, search box and a paged
/// grid of category cards. Page and page size live in the URL query.
#[function_component(CategoriesSection)]
pub fn categories_section() -> Html {
    let search = use_state(String::new);
    let selected = use_state(|| None::<String>);
    let dropdown_open = use_state(|| false);
    let dropdown_ref = use_node_ref();

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let list_query = use_list_query();
    let limit = page_size_or_default(list_query.limit);
    let categories = use_category_list(CategoryListParams {
        page: Some(list_query.page()),
        limit: Some(limit),
        include_articles: Some(true),
    });

    {
        let dropdown_open = dropdown_open.clone();
        use_click_away(dropdown_ref.clone(), move |_: Event| dropdown_open.set(false));
    }

    if let Some(err) = categories.error.as_ref() {
        return html! {
            <div class="w-full max-w-[1200px] mx-auto px-4 sm:px-6 lg:px-8 py-8" role="alert">
                <div class="bg-red-50 border border-red-200 rounded-xl p-4 text-center">
                    <p class="text-red-800 font-medium">{ t::LOAD_FAILED }</p>
                    <p class="text-red-600 text-sm mt-1">{ err.to_string() }</p>
                </div>
            </div>
        };
    }

    let all: &[Category] = categories
        .data
        .as_ref()
        .map(|response| response.data.as_slice())
        .unwrap_or_default();
    let visible = filter_categories(all, &search, selected.as_deref());
    let selected_name = selected
        .as_deref()
        .and_then(|slug| all.iter().find(|category| category.slug == slug))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| t::ALL_CATEGORIES.to_string());

    let on_card_click = {
        let navigator = navigator.clone();
        Callback::from(move |slug: String| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Category { slug });
            }
        })
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
    let on_page_size_change = {
        let navigator = navigator.clone();
        let route = route.clone();
        Callback::from(move |limit: u32| {
            if let Some(navigator) = navigator.as_ref() {
                let query = ListQuery {
                    page: Some(1),
                    limit: Some(limit),
                    q: None,
                };
                push_list_query(navigator, &route, &query);
            }
            scroll_window_to_top();
        })
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };
    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };
    let choose = |slug: Option<String>| {
        let selected = selected.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(slug.clone());
            dropdown_open.set(false);
        })
    };

    let show_pagination = search.trim().is_empty() && selected.is_none();
    let grid = if categories.is_loading {
        skeleton_grid()
    } else if visible.is_empty() {
        html! {
            <div class="text-center py-16">
                <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-gray-100 mb-4">
                    <Icon name={IconName::Search} size={32} class="text-gray-400" />
                </div>
                <h3 class="text-xl font-semibold text-gray-900 mb-2">{ t::EMPTY_TITLE }</h3>
                <p class="text-gray-600">{ t::EMPTY_HINT }</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                    { for visible.iter().map(|category| html! {
                        <CategoryCard
                            key={category.id.clone()}
                            category={(*category).clone()}
                            on_click={on_card_click.clone()}
                        />
                    }) }
                </div>
                if let (true, Some(response)) = (show_pagination, categories.data.as_ref()) {
                    <Pagination
                        pagination={response.pagination.clone()}
                        on_page_change={on_page_change}
                        on_page_size_change={on_page_size_change}
                    />
                }
            </>
        }
    };

    html! {
        <section class="w-full max-w-[1200px] mx-auto px-4 sm:px-6 lg:px-8 py-8 lg:py-12">
            <div class="mb-6 lg:mb-8">
                <h1 class="text-[64px] font-normal leading-[112%] tracking-normal text-gray-900">
                    { t::TITLE }
                </h1>
                <p class="text-neutral-500 text-base">{ t::SUBTITLE }</p>
            </div>

            <div class="mb-6 md:mb-8 flex flex-col md:flex-row md:items-center gap-4 relative">
                <div class="md:flex-shrink-0 relative" ref={dropdown_ref}>
                    <button
                        type="button"
                        onclick={toggle_dropdown}
                        aria-haspopup="listbox"
                        aria-expanded={dropdown_open.to_string()}
                        class="inline-flex items-center justify-between gap-2 min-w-[200px] md:min-w-[240px] px-5 py-3 rounded-full border border-gray-300 bg-white text-gray-700 text-sm font-medium hover:border-gray-400 hover:bg-gray-50 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:ring-offset-2 transition"
                    >
                        <span class="truncate">{ selected_name }</span>
                        <Icon
                            name={IconName::ChevronDown}
                            size={16}
                            class={classes!(
                                "text-gray-500",
                                "shrink-0",
                                "transition-transform",
                                dropdown_open.then_some("rotate-180")
                            )}
                        />
                    </button>

                    if *dropdown_open {
                        <div
                            role="listbox"
                            class="absolute top-full left-0 mt-2 w-full min-w-[240px] bg-white border border-gray-200 rounded-xl shadow-lg z-50 max-h-[300px] overflow-y-auto"
                        >
                            <button
                                type="button"
                                role="option"
                                aria-selected={selected.is_none().to_string()}
                                onclick={choose(None)}
                                class={classes!(
                                    OPTION_BASE,
                                    if selected.is_none() { OPTION_SELECTED } else { "text-gray-700" }
                                )}
                            >
                                { t::ALL_CATEGORIES }
                            </button>
                            <div class="border-t border-gray-100" />
                            { for all.iter().map(|category| {
                                let is_selected = selected.as_deref() == Some(category.slug.as_str());
                                html! {
                                    <button
                                        key={category.id.clone()}
                                        type="button"
                                        role="option"
                                        aria-selected={is_selected.to_string()}
                                        onclick={choose(Some(category.slug.clone()))}
                                        class={classes!(
                                            OPTION_BASE,
                                            if is_selected { OPTION_SELECTED } else { "text-gray-700" }
                                        )}
                                    >
                                        { &category.name }
                                    </button>
                                }
                            }) }
                        </div>
                    }
                </div>

                <div class="md:flex-1 md:max-w-[360px] md:ml-auto">
                    <div class="relative">
                        <Icon
                            name={IconName::Search}
                            size={16}
                            class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 pointer-events-none"
                        />
                        <input
                            type="search"
                            placeholder={common::SEARCH_PLACEHOLDER}
                            value={(*search).clone()}
                            oninput={on_search}
                            class="w-full h-11 pl-10 pr-4 rounded-full border border-gray-300 bg-white text-sm text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-600 focus:border-transparent shadow-sm"
                        />
                    </div>
                </div>
            </div>

            <div class="border-t border-gray-200 mb-6 md:mb-8" />

            { grid }
        </section>
    }
}
