use guides_shared::{
    pagination::{page_slots, PageSlot, ITEMS_PER_PAGE_OPTIONS},
    PaginationMeta,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::pagination as t, fill_one, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pagination: PaginationMeta,
    pub on_page_change: Callback<u32>,
    /// Shows the items-per-page selector when set.
    #[prop_or_default]
    pub on_page_size_change: Option<Callback<u32>>,
}

const ENABLED_STEP: &str = "bg-white border border-gray-200 text-gray-700 hover:bg-gray-50 \
                            hover:border-gray-300 hover:shadow-md";
const DISABLED_STEP: &str = "bg-gray-100 text-gray-400 cursor-not-allowed border border-gray-200";

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let meta = &props.pagination;
    if meta.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = meta.total_pages;
    let current_page = meta.page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        let enabled = meta.has_prev_page;
        Callback::from(move |_: MouseEvent| {
            if enabled {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        let enabled = meta.has_next_page;
        Callback::from(move |_: MouseEvent| {
            if enabled {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let step_classes = |enabled: bool| {
        classes!(
            "px-5",
            "py-2.5",
            "rounded-xl",
            "font-medium",
            "transition-all",
            if enabled { ENABLED_STEP } else { DISABLED_STEP }
        )
    };

    let page_size_selector = props.on_page_size_change.clone().map(|on_change| {
        let onchange = Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Ok(size) = select.value().parse::<u32>() {
                on_change.emit(size);
            }
        });
        html! {
            <label class="flex items-center gap-2 text-sm text-gray-600">
                { t::PER_PAGE_LABEL }
                <select
                    class="px-3 py-2 bg-white border border-gray-200 rounded-lg text-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    onchange={onchange}
                >
                    { for ITEMS_PER_PAGE_OPTIONS.iter().map(|size| html! {
                        <option
                            key={size.to_string()}
                            value={size.to_string()}
                            selected={*size == meta.limit}
                        >
                            { size }
                        </option>
                    }) }
                </select>
            </label>
        }
    });

    html! {
        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-16">
            <nav class="flex items-center justify-center gap-2" aria-label={t::ARIA_NAV}>
                <button
                    type="button"
                    class={step_classes(meta.has_prev_page)}
                    disabled={!meta.has_prev_page}
                    onclick={prev_onclick}
                    aria-label={t::ARIA_PREV}
                >
                    <span class="flex items-center gap-2">
                        <Icon name={IconName::ChevronLeft} size={16} />
                        <span class="hidden sm:inline">{ t::PREV }</span>
                    </span>
                </button>

                <div class="hidden sm:flex gap-2">
                    { for page_slots(current_page, total_pages).into_iter().enumerate().map(|(index, slot)| match slot {
                        PageSlot::Ellipsis => html! {
                            <span
                                key={format!("ellipsis-{index}")}
                                class="px-4 py-2.5 text-gray-400 font-medium"
                            >
                                { "..." }
                            </span>
                        },
                        PageSlot::Page(page) => {
                            let is_current = page == current_page;
                            let onclick = {
                                let on_page_change = on_page_change.clone();
                                Callback::from(move |_: MouseEvent| on_page_change.emit(page))
                            };
                            html! {
                                <button
                                    key={format!("page-{page}")}
                                    type="button"
                                    class={classes!(
                                        "min-w-[2.75rem]",
                                        "px-4",
                                        "py-2.5",
                                        "rounded-xl",
                                        "font-medium",
                                        "transition-all",
                                        if is_current {
                                            "bg-gradient-to-br from-blue-600 to-blue-700 text-white shadow-lg shadow-blue-200"
                                        } else {
                                            ENABLED_STEP
                                        }
                                    )}
                                    aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                                    aria-current={is_current.then_some(AttrValue::from("page"))}
                                    onclick={onclick}
                                >
                                    { page }
                                </button>
                            }
                        },
                    }) }
                </div>

                <div class="sm:hidden px-5 py-2.5 bg-white border border-gray-200 rounded-xl shadow-sm">
                    <span class="text-gray-700 font-medium">
                        { fill_two(t::MOBILE_INDICATOR_TEMPLATE, current_page, total_pages) }
                    </span>
                </div>

                <button
                    type="button"
                    class={step_classes(meta.has_next_page)}
                    disabled={!meta.has_next_page}
                    onclick={next_onclick}
                    aria-label={t::ARIA_NEXT}
                >
                    <span class="flex items-center gap-2">
                        <span class="hidden sm:inline">{ t::NEXT }</span>
                        <Icon name={IconName::ChevronRight} size={16} />
                    </span>
                </button>
            </nav>
            { page_size_selector.unwrap_or_default() }
        </div>
    }
}
